//! Navigation intents and the capability pages use to issue them

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// "Go to path P" - consumed by the router right after it is issued
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationIntent {
    pub path: String,
}

impl NavigationIntent {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// Navigation capability handed to each page at mount time
///
/// Clones share one queue, so a button handler holding a clone and the
/// app draining the original see the same intents, in issue order.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    queue: Rc<RefCell<VecDeque<NavigationIntent>>>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an intent for `path`
    pub fn navigate(&self, path: &str) {
        tracing::debug!(path, "navigation intent issued");
        self.queue
            .borrow_mut()
            .push_back(NavigationIntent::new(path));
    }

    /// Take the oldest pending intent
    pub fn next_intent(&self) -> Option<NavigationIntent> {
        self.queue.borrow_mut().pop_front()
    }

    /// Take every pending intent, oldest first
    pub fn drain(&self) -> Vec<NavigationIntent> {
        std::iter::from_fn(|| self.next_intent()).collect()
    }

    #[cfg(test)]
    pub fn has_pending(&self) -> bool {
        !self.queue.borrow().is_empty()
    }
}
