//! Replay tracking
//!
//! Records every action of a session, forward or undo, and plays them back
//! in recording order once replay starts. While replaying, new actions are
//! ignored; recording resumes when the log has been drained.

use log::{debug, warn};

use super::action::PaintAction;
use crate::collections::BoundedQueue;
use crate::error::{PaintError, Result};

/// A recorded action and whether it was performed as an undo
#[derive(Debug, Clone)]
struct ReplayEntry<A> {
    action: A,
    is_undo: bool,
}

/// FIFO log of recorded actions with a recording/replaying mode
#[derive(Debug, Clone)]
pub struct ReplayTracker<A> {
    log: BoundedQueue<ReplayEntry<A>>,
    replaying: bool,
}

impl<A> ReplayTracker<A> {
    /// Default maximum number of recorded actions
    pub const CAPACITY: usize = 100_000;

    pub fn new() -> Self {
        Self::with_capacity(Self::CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            log: BoundedQueue::new(capacity),
            replaying: false,
        }
    }

    /// Record an action. Ignored while replaying.
    ///
    /// `is_undo` marks actions that were performed as an undo; special,
    /// redo and draw actions all record `false`.
    pub fn add_action(&mut self, action: A, is_undo: bool) -> Result<()> {
        if self.replaying {
            return Ok(());
        }
        self.log
            .append(ReplayEntry { action, is_undo })
            .map_err(|_| {
                warn!("replay log full ({} actions)", self.log.capacity());
                PaintError::capacity("replay log", self.log.capacity())
            })
    }

    /// Stop recording and start playing back.
    pub fn start_replay(&mut self) {
        debug!("starting replay of {} actions", self.log.len());
        self.replaying = true;
    }

    pub fn is_replaying(&self) -> bool {
        self.replaying
    }

    /// Number of actions still in the log
    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.log.capacity()
    }
}

impl<A: PaintAction> ReplayTracker<A> {
    /// Play the next recorded action on `surface`.
    ///
    /// Returns `true` if there was nothing left to play, which also switches
    /// the tracker back to recording. Returns `false` after playing one
    /// action.
    pub fn play_next_action(&mut self, surface: &mut A::Surface) -> bool {
        let Some(entry) = self.log.serve() else {
            if self.replaying {
                debug!("replay finished, recording resumed");
            }
            self.replaying = false;
            return true;
        };

        if entry.is_undo {
            entry.action.undo_apply(surface);
        } else {
            entry.action.redo_apply(surface);
        }
        false
    }
}

impl<A> Default for ReplayTracker<A> {
    fn default() -> Self {
        Self::new()
    }
}
