//! Layerpaint - Layered Paint Grid
//!
//! Every cell of a paint grid owns a layer store that composes the layers
//! painted onto it into a single colour. Three store kinds give different
//! composition rules:
//! - Set: one layer, special inverts the result
//! - Add: layers compose in paint order, special reverses that order
//! - Sequence: one layer per slot composed by slot index, special removes
//!   the median layer by name
//!
//! Paint actions are recorded by an undo tracker (linear undo/redo) and a
//! replay tracker (verbatim playback of the whole session).

pub mod cli;
pub mod collections;
pub mod color;
pub mod config;
pub mod error;
pub mod grid;
pub mod history;
pub mod layers;
pub mod stores;

pub use color::Color;
pub use config::Capacities;
pub use error::{PaintError, Result};
pub use grid::Grid;
pub use history::{GridAction, PaintAction, ReplayTracker, UndoTracker};
pub use layers::{Layer, LayerRef, NUM_LAYERS};
pub use stores::{AdditiveStore, DrawStyle, LayerStore, SequenceStore, SetStore};
