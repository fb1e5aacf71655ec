//! Recorded paint action capability

use std::sync::Arc;

/// An opaque recorded operation with a forward and a backward effect.
///
/// Trackers never inspect an action; they only move it between histories
/// and invoke one of the two effects against the surface.
pub trait PaintAction {
    /// What the effects are applied to, usually a [`Grid`](crate::grid::Grid)
    type Surface;

    /// Re-apply the action
    fn redo_apply(&self, surface: &mut Self::Surface);

    /// Revert the action
    fn undo_apply(&self, surface: &mut Self::Surface);
}

/// Lets one action be recorded by several trackers without copying it.
impl<A: PaintAction + ?Sized> PaintAction for Arc<A> {
    type Surface = A::Surface;

    fn redo_apply(&self, surface: &mut Self::Surface) {
        (**self).redo_apply(surface)
    }

    fn undo_apply(&self, surface: &mut Self::Surface) {
        (**self).undo_apply(surface)
    }
}
