//! Layers for unit tests

use std::sync::Arc;

use super::{Layer, LayerRef};
use crate::color::Color;

/// Appends `index + 1` as a decimal digit to the red channel, so the red
/// channel of the result spells out the composition order.
#[derive(Debug)]
pub(crate) struct DigitLayer {
    index: usize,
    name: String,
}

impl Layer for DigitLayer {
    fn index(&self) -> usize {
        self.index
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, color: Color, _timestamp: u64, _x: usize, _y: usize) -> Color {
        Color::new(color.r * 10 + self.index as i32 + 1, color.g, color.b)
    }
}

pub(crate) fn digit(index: usize, name: &str) -> LayerRef {
    Arc::new(DigitLayer {
        index,
        name: name.to_string(),
    })
}
