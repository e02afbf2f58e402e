//! Route table - static mapping from location paths to page views

use crate::error::NavError;
use std::collections::HashSet;
use std::fmt;

/// Every page view a route can mount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    Landing,
    Signup,
    Signin,
    ForgotPassword,
    Verification,
    ResetPassword,
    Dashboard,
    RecognizedGesture,
    Tutorial,
}

impl PageId {
    #[cfg(test)]
    pub fn all() -> Vec<PageId> {
        vec![
            PageId::Landing,
            PageId::Signup,
            PageId::Signin,
            PageId::ForgotPassword,
            PageId::Verification,
            PageId::ResetPassword,
            PageId::Dashboard,
            PageId::RecognizedGesture,
            PageId::Tutorial,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            PageId::Landing => "Home",
            PageId::Signup => "Sign Up",
            PageId::Signin => "Sign In",
            PageId::ForgotPassword => "Forgot Password",
            PageId::Verification => "Verification",
            PageId::ResetPassword => "Reset Password",
            PageId::Dashboard => "Dashboard",
            PageId::RecognizedGesture => "Recognized Gesture",
            PageId::Tutorial => "Tutorial",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// A single path-to-page mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: String,
    pub page: PageId,
}

impl RouteEntry {
    pub fn new(path: &str, page: PageId) -> Self {
        Self {
            path: path.to_string(),
            page,
        }
    }
}

/// Immutable routing table with unique paths
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub const ROOT: &'static str = "/";

    /// Build a table, rejecting duplicate paths
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, NavError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.path.as_str()) {
                return Err(NavError::DuplicateRoute {
                    path: entry.path.clone(),
                });
            }
        }
        Ok(Self { entries })
    }

    /// The application's route table
    pub fn standard() -> Result<Self, NavError> {
        Self::new(vec![
            RouteEntry::new("/signup", PageId::Signup),
            RouteEntry::new("/signin", PageId::Signin),
            RouteEntry::new("/dashboard", PageId::Dashboard),
            RouteEntry::new("/forgotpassword", PageId::ForgotPassword),
            RouteEntry::new("/verification", PageId::Verification),
            RouteEntry::new("/reset-password", PageId::ResetPassword),
            RouteEntry::new("/recognized_gesture", PageId::RecognizedGesture),
            RouteEntry::new("/tutorial", PageId::Tutorial),
            RouteEntry::new(Self::ROOT, PageId::Landing),
        ])
    }

    /// Exact-match lookup of a path
    pub fn resolve(&self, path: &str) -> Result<PageId, NavError> {
        self.entries
            .iter()
            .find(|entry| entry.path == path)
            .map(|entry| entry.page)
            .ok_or_else(|| NavError::UnmatchedRoute {
                path: path.to_string(),
            })
    }

    /// Path of the first entry mounting the given page
    #[cfg(test)]
    pub fn path_of(&self, page: PageId) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.page == page)
            .map(|entry| entry.path.as_str())
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_has_unique_paths() {
        let table = RouteTable::standard().unwrap();
        assert_eq!(table.entries().len(), 9);
        let paths: HashSet<&str> = table.entries().iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths.len(), 9);
    }

    #[test]
    fn test_every_page_has_exactly_one_path() {
        let table = RouteTable::standard().unwrap();
        for page in PageId::all() {
            let count = table.entries().iter().filter(|e| e.page == page).count();
            assert_eq!(count, 1, "{} should be routed once", page);
        }
    }

    #[test]
    fn test_resolve_declared_paths() {
        let table = RouteTable::standard().unwrap();
        assert_eq!(table.resolve("/"), Ok(PageId::Landing));
        assert_eq!(table.resolve("/signup"), Ok(PageId::Signup));
        assert_eq!(table.resolve("/reset-password"), Ok(PageId::ResetPassword));
        assert_eq!(
            table.resolve("/recognized_gesture"),
            Ok(PageId::RecognizedGesture)
        );
    }

    #[test]
    fn test_resolve_is_exact_match() {
        let table = RouteTable::standard().unwrap();
        for path in ["/unknown", "/signup/", "/SIGNUP", "", "signup"] {
            assert_eq!(
                table.resolve(path),
                Err(NavError::UnmatchedRoute {
                    path: path.to_string()
                })
            );
        }
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let table = RouteTable::standard().unwrap();
        for entry in table.entries() {
            let first = table.resolve(&entry.path);
            for _ in 0..3 {
                assert_eq!(table.resolve(&entry.path), first);
            }
        }
    }

    #[test]
    fn test_new_rejects_duplicate_paths() {
        let result = RouteTable::new(vec![
            RouteEntry::new("/", PageId::Landing),
            RouteEntry::new("/tutorial", PageId::Tutorial),
            RouteEntry::new("/", PageId::Dashboard),
        ]);
        assert_eq!(
            result.err(),
            Some(NavError::DuplicateRoute {
                path: "/".to_string()
            })
        );
    }

    #[test]
    fn test_path_of() {
        let table = RouteTable::standard().unwrap();
        assert_eq!(table.path_of(PageId::Tutorial), Some("/tutorial"));
        assert_eq!(table.path_of(PageId::Landing), Some("/"));
    }
}
