//! Layer Stores
//!
//! A layer store owns the layers painted onto one grid cell and decides how
//! they compose into the cell's colour. Three store kinds share one
//! capability contract:
//! - `SetStore`: at most one layer, special toggles inversion
//! - `AdditiveStore`: FIFO composition, special reverses the order
//! - `SequenceStore`: one layer per slot composed by index, special removes
//!   the median layer by name

mod additive;
mod sequence;
mod set;

pub use additive::AdditiveStore;
pub use sequence::SequenceStore;
pub use set::SetStore;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::config::Capacities;
use crate::error::{PaintError, Result};
use crate::layers::LayerRef;

/// Base trait for all layer stores
pub trait LayerStore: fmt::Debug + Send + Sync {
    /// Add a layer. Returns `true` if the store actually changed.
    fn add(&mut self, layer: &LayerRef) -> Result<bool>;

    /// Fail with the error `add` would return, without changing anything.
    /// Stores whose `add` cannot fail keep the default.
    fn check_add(&self, _layer: &LayerRef) -> Result<()> {
        Ok(())
    }

    /// Erase with this layer. Returns `true` if the store actually changed.
    fn erase(&mut self, layer: &LayerRef) -> bool;

    /// Colour this cell shows for `start`, given the current layers
    fn get_color(&self, start: Color, timestamp: u64, x: usize, y: usize) -> Color;

    /// Store-specific structural mutation
    fn special(&mut self);

    /// The draw style this store implements
    fn draw_style(&self) -> DrawStyle;
}

/// Which store kind every cell of a grid uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawStyle {
    #[serde(alias = "SET", alias = "Set")]
    Set,
    #[serde(alias = "ADD", alias = "Add", alias = "additive")]
    Add,
    #[serde(alias = "SEQUENCE", alias = "Sequence")]
    Sequence,
}

impl DrawStyle {
    pub const ALL: [DrawStyle; 3] = [DrawStyle::Set, DrawStyle::Add, DrawStyle::Sequence];

    /// Build an empty store of this style
    pub fn new_store(self, capacities: &Capacities) -> Box<dyn LayerStore> {
        match self {
            DrawStyle::Set => Box::new(SetStore::new()),
            DrawStyle::Add => Box::new(AdditiveStore::with_capacity(capacities.additive_layers)),
            DrawStyle::Sequence => Box::new(SequenceStore::new()),
        }
    }
}

impl fmt::Display for DrawStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawStyle::Set => write!(f, "set"),
            DrawStyle::Add => write!(f, "add"),
            DrawStyle::Sequence => write!(f, "sequence"),
        }
    }
}

impl FromStr for DrawStyle {
    type Err = PaintError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "set" => Ok(DrawStyle::Set),
            "add" | "additive" => Ok(DrawStyle::Add),
            "sequence" => Ok(DrawStyle::Sequence),
            _ => Err(PaintError::InvalidDrawStyle {
                style: s.to_string(),
            }),
        }
    }
}
