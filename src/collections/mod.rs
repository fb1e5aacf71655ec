//! Bounded containers backing the layer stores and trackers

mod bounded;
mod layer_set;
mod sorted;

pub use bounded::{BoundedQueue, BoundedStack};
pub use layer_set::LayerSet;
pub use sorted::{SortedEntry, SortedList};
