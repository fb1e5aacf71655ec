//! Action History
//!
//! Trackers that record paint actions and step through them later:
//! - `UndoTracker`: linear undo/redo over bounded stacks
//! - `ReplayTracker`: verbatim playback of a recorded session

mod action;
mod paint;
mod replay;
mod undo;

#[cfg(test)]
mod testing;

pub use action::PaintAction;
pub use paint::{GridAction, PaintStep, StepKind};
pub use replay::ReplayTracker;
pub use undo::UndoTracker;
