//! Visible location and the history of visited paths

use chrono::{DateTime, Local};

/// One visited location
#[derive(Debug, Clone)]
pub struct LocationEntry {
    pub path: String,
    pub visited_at: DateTime<Local>,
}

impl LocationEntry {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            visited_at: Local::now(),
        }
    }

    pub fn formatted_time(&self) -> String {
        self.visited_at.format("%H:%M:%S").to_string()
    }
}

/// Back-navigable history of locations, newest last
#[derive(Debug, Default)]
pub struct LocationHistory {
    entries: Vec<LocationEntry>,
}

impl LocationHistory {
    /// Maximum entries kept before the oldest are dropped
    const LIMIT: usize = 100;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: &str) {
        self.entries.push(LocationEntry::new(path));
        if self.entries.len() > Self::LIMIT {
            let excess = self.entries.len() - Self::LIMIT;
            self.entries.drain(..excess);
        }
    }

    /// Drop the current location and return the one before it
    pub fn pop_back(&mut self) -> Option<&LocationEntry> {
        if self.entries.len() < 2 {
            return None;
        }
        self.entries.pop();
        self.entries.last()
    }

    pub fn current(&self) -> Option<&LocationEntry> {
        self.entries.last()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
