//! Router - owns the mounted page view
//!
//! Exactly one page is mounted at a time. `navigate` resolves a path against
//! the static route table, unmounts the current page, mounts the next one and
//! records the visit. Unmatched paths go through the fallback policy.

use crate::config::FallbackPolicy;
use crate::error::NavError;
use crate::model::{LocationHistory, PageId, RouteTable};
use crate::pages::{mount_page, NotFoundPage, Page, PageContext};

/// What the router mounted for the last navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountedView {
    Page(PageId),
    /// Fallback view for a path with no route entry
    NotFound(String),
}

pub struct Router {
    table: RouteTable,
    fallback: FallbackPolicy,
    history: LocationHistory,
    current: Option<Box<dyn Page>>,
    mounted: Option<MountedView>,
    mount_count: usize,
    ctx: PageContext,
}

impl Router {
    pub fn new(table: RouteTable, fallback: FallbackPolicy, ctx: PageContext) -> Self {
        Self {
            table,
            fallback,
            history: LocationHistory::new(),
            current: None,
            mounted: None,
            mount_count: 0,
            ctx,
        }
    }

    /// Mount the view for `path`, recording it as the new location
    pub fn navigate(&mut self, path: &str) -> MountedView {
        let view = self.mount(path);
        match &view {
            MountedView::Page(_) if self.fallback_redirected(path) => {
                self.history.push(RouteTable::ROOT);
            }
            _ => self.history.push(path),
        }
        view
    }

    /// Re-mount the previous location; nothing happens at the first entry
    pub fn back(&mut self) -> Option<MountedView> {
        let path = self.history.pop_back()?.path.clone();
        tracing::debug!(path = %path, "back");
        Some(self.mount(&path))
    }

    /// Path shown as the visible location
    pub fn location(&self) -> &str {
        self.history
            .current()
            .map(|entry| entry.path.as_str())
            .unwrap_or(RouteTable::ROOT)
    }

    /// Local time at which the current location was entered, `HH:MM:SS`
    pub fn mounted_at(&self) -> Option<String> {
        self.history.current().map(|entry| entry.formatted_time())
    }

    pub fn mounted(&self) -> Option<&MountedView> {
        self.mounted.as_ref()
    }

    /// Number of mounts performed so far
    pub fn mount_count(&self) -> usize {
        self.mount_count
    }

    pub fn page_mut(&mut self) -> Option<&mut (dyn Page + 'static)> {
        self.current.as_deref_mut()
    }

    fn fallback_redirected(&self, path: &str) -> bool {
        self.fallback == FallbackPolicy::RedirectRoot && self.table.resolve(path).is_err()
    }

    fn mount(&mut self, path: &str) -> MountedView {
        if let Some(mut page) = self.current.take() {
            page.on_unmount();
        }

        let (page, view): (Box<dyn Page>, MountedView) = match self.table.resolve(path) {
            Ok(id) => (mount_page(id, &self.ctx), MountedView::Page(id)),
            Err(NavError::UnmatchedRoute { path }) => match self.fallback {
                FallbackPolicy::NotFound => {
                    tracing::warn!(path = %path, "no route matches, mounting not found view");
                    (
                        Box::new(NotFoundPage::new(&path, &self.ctx)),
                        MountedView::NotFound(path),
                    )
                }
                FallbackPolicy::RedirectRoot => {
                    tracing::warn!(path = %path, "no route matches, redirecting to root");
                    self.root_view()
                }
            },
            Err(err) => {
                tracing::error!(error = %err, "route resolution failed");
                self.root_view()
            }
        };

        self.current = Some(page);
        self.mounted = Some(view.clone());
        self.mount_count += 1;
        tracing::info!(path = %path, view = ?view, mounts = self.mount_count, "mounted");
        view
    }

    fn root_view(&self) -> (Box<dyn Page>, MountedView) {
        (
            mount_page(PageId::Landing, &self.ctx),
            MountedView::Page(PageId::Landing),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::testing::context;

    fn router(fallback: FallbackPolicy) -> Router {
        Router::new(RouteTable::standard().unwrap(), fallback, context())
    }

    #[test]
    fn test_every_declared_path_mounts_exactly_one_view() {
        let mut router = router(FallbackPolicy::NotFound);
        for entry in RouteTable::standard().unwrap().entries() {
            let before = router.mount_count();
            let view = router.navigate(&entry.path);
            assert_eq!(view, MountedView::Page(entry.page));
            assert_eq!(router.mount_count(), before + 1);
            assert_eq!(router.location(), entry.path);
            assert!(router.page_mut().is_some());
        }
    }

    #[test]
    fn test_unknown_path_mounts_not_found() {
        let mut router = router(FallbackPolicy::NotFound);
        let view = router.navigate("/unknown");
        assert_eq!(view, MountedView::NotFound("/unknown".to_string()));
        assert_eq!(router.location(), "/unknown");
        assert_eq!(router.mount_count(), 1);
    }

    #[test]
    fn test_redirect_root_policy() {
        let mut router = router(FallbackPolicy::RedirectRoot);
        router.navigate("/signin");
        let view = router.navigate("/unknown");
        assert_eq!(view, MountedView::Page(PageId::Landing));
        assert_eq!(router.location(), "/");
    }

    #[test]
    fn test_matching_is_deterministic() {
        let mut first = router(FallbackPolicy::NotFound);
        let mut second = router(FallbackPolicy::NotFound);
        for path in ["/", "/tutorial", "/nope", "/signup", "/signup/"] {
            assert_eq!(first.navigate(path), second.navigate(path));
        }
    }

    #[test]
    fn test_back_remounts_previous_location() {
        let mut router = router(FallbackPolicy::NotFound);
        router.navigate("/");
        router.navigate("/signin");
        router.navigate("/forgotpassword");

        assert_eq!(router.back(), Some(MountedView::Page(PageId::Signin)));
        assert_eq!(router.location(), "/signin");
        assert_eq!(router.back(), Some(MountedView::Page(PageId::Landing)));
        assert_eq!(router.back(), None);
        assert_eq!(router.location(), "/");
    }

    #[test]
    fn test_location_defaults_to_root_before_first_mount() {
        let router = router(FallbackPolicy::NotFound);
        assert_eq!(router.location(), "/");
        assert!(router.mounted().is_none());
        assert!(router.mounted_at().is_none());
    }
}
