//! Layer capability
//!
//! A layer is an immutable, indexed, named colour transform. Concrete
//! layers are supplied by the application; stores only hold shared
//! references and call `apply`.

use std::fmt::Debug;
use std::sync::Arc;

use crate::color::Color;

#[cfg(test)]
pub(crate) mod testing;

/// Fixed number of layer slots; every layer index is in `0..NUM_LAYERS`
pub const NUM_LAYERS: usize = 9;

/// Base trait for all layers
pub trait Layer: Debug + Send + Sync {
    /// Slot index in `0..NUM_LAYERS`
    fn index(&self) -> usize;

    /// Display name, also the sort key for sequence stores
    fn name(&self) -> &str;

    /// Transform `color` for the pixel at (`x`, `y`) at `timestamp`
    fn apply(&self, color: Color, timestamp: u64, x: usize, y: usize) -> Color;
}

/// Shared, non-owning handle to a layer
pub type LayerRef = Arc<dyn Layer>;

/// Layer identity is the slot index.
pub fn same_layer(a: &dyn Layer, b: &dyn Layer) -> bool {
    a.index() == b.index()
}
