//! Capacity configuration
//!
//! All bounded containers in the crate have a finite, documented maximum.
//! `Capacities` groups them so a whole session can be configured at once.

use serde::{Deserialize, Serialize};

use crate::history::{ReplayTracker, UndoTracker};
use crate::stores::AdditiveStore;

/// Maximum sizes of the bounded containers used by a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capacities {
    /// Layers a single additive cell may hold
    pub additive_layers: usize,
    /// Undo history depth (redo shares the same bound)
    pub undo_levels: usize,
    /// Entries the replay log may record
    pub replay_actions: usize,
}

impl Default for Capacities {
    fn default() -> Self {
        Self {
            additive_layers: AdditiveStore::CAPACITY,
            undo_levels: UndoTracker::<()>::CAPACITY,
            replay_actions: ReplayTracker::<()>::CAPACITY,
        }
    }
}
