//! Undo/Redo tracking
//!
//! Linear undo over two bounded stacks. Recording a new action discards the
//! redo branch. A full history silently drops new actions.

use log::{debug, warn};

use super::action::PaintAction;
use crate::collections::BoundedStack;

/// Manages the applied and undone action histories of one session
#[derive(Debug, Clone)]
pub struct UndoTracker<A> {
    /// Actions that can be undone, most recent on top
    history: BoundedStack<A>,

    /// Actions that can be redone, most recently undone on top
    redo: BoundedStack<A>,
}

impl<A> UndoTracker<A> {
    /// Default maximum number of undo levels
    pub const CAPACITY: usize = 10_000;

    pub fn new() -> Self {
        Self::with_capacity(Self::CAPACITY)
    }

    /// Create a tracker whose history and redo stacks hold `capacity` actions
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            history: BoundedStack::new(capacity),
            redo: BoundedStack::new(capacity),
        }
    }

    /// Record a performed action.
    ///
    /// If the history is full the action is discarded and nothing changes,
    /// including the redo branch.
    pub fn add_action(&mut self, action: A) {
        if self.history.is_full() {
            debug!(
                "undo history full ({} actions), dropping action",
                self.history.capacity()
            );
            return;
        }
        if self.history.push(action).is_ok() {
            self.redo.clear();
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.history.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo.len()
    }

    pub fn capacity(&self) -> usize {
        self.history.capacity()
    }

    /// The action the next `undo` would revert
    pub fn peek_undo(&self) -> Option<&A> {
        self.history.peek()
    }

    /// The action the next `redo` would re-apply
    pub fn peek_redo(&self) -> Option<&A> {
        self.redo.peek()
    }

    /// Pop the top of `from` onto `to`, returning whether anything moved.
    ///
    /// Both stacks share one bound and together never hold more than it, so
    /// the push only fails if that invariant is broken; the action then goes
    /// back where it came from.
    fn transfer(from: &mut BoundedStack<A>, to: &mut BoundedStack<A>) -> bool {
        let Some(action) = from.pop() else {
            return false;
        };
        match to.push(action) {
            Ok(()) => true,
            Err(action) => {
                warn!("undo stacks out of balance, keeping action in place");
                let _ = from.push(action);
                false
            }
        }
    }
}

impl<A: PaintAction> UndoTracker<A> {
    /// Revert the most recent action on `surface`.
    ///
    /// Returns the undone action, or `None` if there is nothing to undo.
    pub fn undo(&mut self, surface: &mut A::Surface) -> Option<&A> {
        if !Self::transfer(&mut self.history, &mut self.redo) {
            return None;
        }
        let action = self.redo.peek()?;
        action.undo_apply(surface);
        Some(action)
    }

    /// Re-apply the most recently undone action on `surface`.
    ///
    /// Returns the redone action, or `None` if there is nothing to redo.
    pub fn redo(&mut self, surface: &mut A::Surface) -> Option<&A> {
        if !Self::transfer(&mut self.redo, &mut self.history) {
            return None;
        }
        let action = self.history.peek()?;
        action.redo_apply(surface);
        Some(action)
    }
}

impl<A> Default for UndoTracker<A> {
    fn default() -> Self {
        Self::new()
    }
}
