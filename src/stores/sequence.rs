//! Index-ordered composition store
//!
//! Each of the `NUM_LAYERS` slots holds at most one layer. Layers compose in
//! slot order; the name-sorted list only serves `special`, which removes
//! the median layer by name.
//!
//! `special` removes the list entry but leaves the slot bit set. Until that
//! slot is erased, adding a layer with the same index reports no change and
//! the slot contributes nothing to the colour.

use log::debug;

use super::{DrawStyle, LayerStore};
use crate::collections::{LayerSet, SortedList};
use crate::color::Color;
use crate::error::{PaintError, Result};
use crate::layers::{LayerRef, NUM_LAYERS};

/// At most one layer per slot, composed in slot order
#[derive(Debug, Clone)]
pub struct SequenceStore {
    active: LayerSet,
    applied: SortedList<LayerRef>,
}

impl SequenceStore {
    pub fn new() -> Self {
        Self {
            active: LayerSet::new(),
            applied: SortedList::new(NUM_LAYERS),
        }
    }

    /// Whether slot `index` is marked active
    pub fn is_active(&self, index: usize) -> bool {
        self.active.contains(index)
    }

    /// Names of the stored layers in sorted order
    pub fn names(&self) -> Vec<&str> {
        self.applied.iter().map(|e| e.key.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.applied.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applied.is_empty()
    }

    /// Lower median position over `count` name-sorted entries
    pub(crate) fn median_position(count: usize) -> usize {
        if count % 2 == 1 {
            count / 2
        } else {
            (count / 2).saturating_sub(1)
        }
    }
}

impl Default for SequenceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerStore for SequenceStore {
    fn add(&mut self, layer: &LayerRef) -> Result<bool> {
        self.check_add(layer)?;
        let index = layer.index();
        if self.active.contains(index) {
            return Ok(false);
        }

        self.applied
            .insert(layer.name(), LayerRef::clone(layer))
            .map_err(|_| PaintError::capacity("sequence store", NUM_LAYERS))?;
        self.active.insert(index);
        Ok(true)
    }

    fn check_add(&self, layer: &LayerRef) -> Result<()> {
        let index = layer.index();
        if index >= NUM_LAYERS {
            return Err(PaintError::LayerIndexOutOfRange {
                index,
                limit: NUM_LAYERS,
            });
        }
        Ok(())
    }

    /// Erases by slot index only; the layer's name is not consulted.
    fn erase(&mut self, layer: &LayerRef) -> bool {
        let index = layer.index();
        if !self.active.contains(index) {
            return false;
        }

        self.active.remove(index);
        while let Some(position) = self.applied.position(|l| l.index() == index) {
            self.applied.delete_at(position);
        }
        true
    }

    fn get_color(&self, start: Color, timestamp: u64, x: usize, y: usize) -> Color {
        self.active.iter().fold(start, |color, index| {
            match self.applied.iter().find(|e| e.value.index() == index) {
                Some(entry) => entry.value.apply(color, timestamp, x, y),
                None => color,
            }
        })
    }

    fn special(&mut self) {
        if self.applied.is_empty() {
            return;
        }

        let position = Self::median_position(self.applied.len());
        if let Some(removed) = self.applied.delete_at(position) {
            debug!(
                "sequence special removed '{}' (slot {} stays active)",
                removed.key,
                removed.value.index()
            );
        }
    }

    fn draw_style(&self) -> DrawStyle {
        DrawStyle::Sequence
    }
}
