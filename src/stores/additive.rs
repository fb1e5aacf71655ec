//! FIFO composition store
//!
//! Layers are applied oldest first. Erasing removes the oldest layer
//! regardless of which layer is passed in.

use log::warn;

use super::{DrawStyle, LayerStore};
use crate::collections::{BoundedQueue, BoundedStack};
use crate::color::Color;
use crate::error::{PaintError, Result};
use crate::layers::LayerRef;

/// Ordered queue of layers composed oldest to newest
#[derive(Debug, Clone)]
pub struct AdditiveStore {
    queue: BoundedQueue<LayerRef>,
}

impl AdditiveStore {
    /// Default per-cell layer limit (20 distinct layers painted 100 times each)
    pub const CAPACITY: usize = 2000;

    pub fn new() -> Self {
        Self::with_capacity(Self::CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: BoundedQueue::new(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.queue.capacity()
    }

    /// Layers in composition order
    pub fn layers(&self) -> impl Iterator<Item = &LayerRef> {
        self.queue.iter()
    }
}

impl Default for AdditiveStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerStore for AdditiveStore {
    fn add(&mut self, layer: &LayerRef) -> Result<bool> {
        self.queue.append(LayerRef::clone(layer)).map_err(|_| {
            warn!("additive store full, rejecting layer '{}'", layer.name());
            PaintError::capacity("additive store", self.queue.capacity())
        })?;
        Ok(true)
    }

    fn check_add(&self, _layer: &LayerRef) -> Result<()> {
        if self.queue.is_full() {
            return Err(PaintError::capacity("additive store", self.queue.capacity()));
        }
        Ok(())
    }

    /// Removes the oldest layer; `layer` is not compared.
    fn erase(&mut self, _layer: &LayerRef) -> bool {
        self.queue.serve().is_some()
    }

    fn get_color(&self, start: Color, timestamp: u64, x: usize, y: usize) -> Color {
        self.queue
            .iter()
            .fold(start, |color, layer| layer.apply(color, timestamp, x, y))
    }

    /// Reverse the composition order via one stack and a fresh queue.
    fn special(&mut self) {
        let capacity = self.queue.capacity();
        let mut stack = BoundedStack::new(capacity);
        while let Some(layer) = self.queue.serve() {
            let pushed = stack.push(layer);
            debug_assert!(pushed.is_ok(), "reversal stack shares the queue bound");
        }

        let mut reversed = BoundedQueue::new(capacity);
        while let Some(layer) = stack.pop() {
            let appended = reversed.append(layer);
            debug_assert!(appended.is_ok(), "reversed queue shares the queue bound");
        }
        self.queue = reversed;
    }

    fn draw_style(&self) -> DrawStyle {
        DrawStyle::Add
    }
}
