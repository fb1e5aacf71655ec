//! Single-layer store with an inversion toggle

use super::{DrawStyle, LayerStore};
use crate::color::Color;
use crate::error::Result;
use crate::layers::{same_layer, LayerRef};

/// Holds zero or one layer; special toggles channel inversion
#[derive(Debug, Clone, Default)]
pub struct SetStore {
    current: Option<LayerRef>,
    inverted: bool,
}

impl SetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&LayerRef> {
        self.current.as_ref()
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }
}

impl LayerStore for SetStore {
    fn add(&mut self, layer: &LayerRef) -> Result<bool> {
        match &self.current {
            Some(current) if same_layer(current.as_ref(), layer.as_ref()) => Ok(false),
            _ => {
                self.current = Some(LayerRef::clone(layer));
                Ok(true)
            }
        }
    }

    /// Clears whatever layer is present; `layer` is not compared.
    fn erase(&mut self, _layer: &LayerRef) -> bool {
        self.current.take().is_some()
    }

    fn get_color(&self, start: Color, timestamp: u64, x: usize, y: usize) -> Color {
        let color = match &self.current {
            Some(layer) => layer.apply(start, timestamp, x, y),
            None => start,
        };
        if self.inverted {
            color.inverted()
        } else {
            color
        }
    }

    fn special(&mut self) {
        self.inverted = !self.inverted;
    }

    fn draw_style(&self) -> DrawStyle {
        DrawStyle::Set
    }
}
