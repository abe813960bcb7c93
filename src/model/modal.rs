//! Modal stack for overlays
//!
//! A single enum-based stack instead of per-dialog boolean flags; only the
//! top modal receives input. Dialog-local state (scroll, selection) lives in
//! the dialog components themselves.

/// An overlay displayed on top of the main UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Keyboard shortcut reference
    Help,
    /// Past predictions list
    History,
}

/// A stack of modal overlays, rendered bottom to top
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

    pub fn top(&self) -> Option<Modal> {
        self.stack.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Modals in render order, bottom first.
    pub fn iter(&self) -> impl Iterator<Item = Modal> + '_ {
        self.stack.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_order() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());

        stack.push(Modal::QuitConfirm);
        stack.push(Modal::Help);

        assert_eq!(stack.top(), Some(Modal::Help));
        assert_eq!(stack.pop(), Some(Modal::Help));
        assert_eq!(stack.pop(), Some(Modal::QuitConfirm));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_iter_is_bottom_first() {
        let mut stack = ModalStack::new();
        stack.push(Modal::History);
        stack.push(Modal::QuitConfirm);

        let order: Vec<Modal> = stack.iter().collect();
        assert_eq!(order, vec![Modal::History, Modal::QuitConfirm]);
    }
}
