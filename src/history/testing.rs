//! Actions for unit tests

use super::action::PaintAction;

/// Surface that records which effects ran
#[derive(Debug, Default)]
pub(crate) struct Trace(pub Vec<String>);

/// Action that only writes its name to a [`Trace`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Note(pub &'static str);

impl PaintAction for Note {
    type Surface = Trace;

    fn redo_apply(&self, surface: &mut Trace) {
        surface.0.push(format!("redo {}", self.0));
    }

    fn undo_apply(&self, surface: &mut Trace) {
        surface.0.push(format!("undo {}", self.0));
    }
}
