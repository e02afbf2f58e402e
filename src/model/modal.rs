//! Modal stack for overlays drawn on top of the mounted page

/// An overlay that captures input while it is on top
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Keyboard shortcut reference
    Help,
    /// Location prompt for typing a path to open
    Location { input: String },
}

/// A stack of modal overlays
///
/// Modals are rendered from bottom to top, with only the top modal
/// receiving input events.
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut Modal> {
        self.stack.last_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Drop every overlay (used when the mounted page changes)
    pub fn clear(&mut self) {
        self.stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());

        stack.push(Modal::QuitConfirm);
        stack.push(Modal::Help);

        assert_eq!(stack.pop(), Some(Modal::Help));
        assert_eq!(stack.pop(), Some(Modal::QuitConfirm));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_modal_stack_top_mut_edits_location_input() {
        let mut stack = ModalStack::new();
        stack.push(Modal::Location {
            input: "/tut".to_string(),
        });

        if let Some(Modal::Location { input }) = stack.top_mut() {
            input.push_str("orial");
        }

        assert_eq!(
            stack.top(),
            Some(&Modal::Location {
                input: "/tutorial".to_string()
            })
        );
    }

    #[test]
    fn test_clear() {
        let mut stack = ModalStack::new();
        stack.push(Modal::QuitConfirm);
        stack.clear();
        assert!(stack.top().is_none());
    }
}
