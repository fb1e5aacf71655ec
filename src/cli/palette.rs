//! Built-in demo layers
//!
//! The library treats layers as externally supplied; these nine simple
//! transforms fill every slot so scripted sessions have something to paint.

use std::sync::Arc;

use crate::color::Color;
use crate::error::{PaintError, Result};
use crate::layers::{Layer, LayerRef, NUM_LAYERS};

type Transform = fn(Color, u64, usize, usize) -> Color;

/// A named colour transform occupying one slot
#[derive(Debug, Clone, Copy)]
pub struct PaletteLayer {
    index: usize,
    name: &'static str,
    transform: Transform,
}

impl Layer for PaletteLayer {
    fn index(&self) -> usize {
        self.index
    }

    fn name(&self) -> &str {
        self.name
    }

    fn apply(&self, color: Color, timestamp: u64, x: usize, y: usize) -> Color {
        (self.transform)(color, timestamp, x, y)
    }
}

const RAINBOW: [Color; 6] = [
    Color::new(255, 0, 0),
    Color::new(255, 165, 0),
    Color::new(255, 255, 0),
    Color::new(0, 255, 0),
    Color::new(0, 0, 255),
    Color::new(128, 0, 128),
];

fn rainbow(_: Color, timestamp: u64, x: usize, y: usize) -> Color {
    let step = (x as u64 + y as u64 + timestamp) % RAINBOW.len() as u64;
    RAINBOW[step as usize]
}

fn black(_: Color, _: u64, _: usize, _: usize) -> Color {
    Color::BLACK
}

fn lighten(color: Color, _: u64, _: usize, _: usize) -> Color {
    color.map(|c| (c + 40).min(Color::MAX_CHANNEL))
}

fn invert(color: Color, _: u64, _: usize, _: usize) -> Color {
    color.inverted()
}

fn red(_: Color, _: u64, _: usize, _: usize) -> Color {
    Color::new(255, 0, 0)
}

fn green(_: Color, _: u64, _: usize, _: usize) -> Color {
    Color::new(0, 255, 0)
}

fn blue(_: Color, _: u64, _: usize, _: usize) -> Color {
    Color::new(0, 0, 255)
}

fn sparkle(color: Color, timestamp: u64, x: usize, y: usize) -> Color {
    if (x as u64 * 7 + y as u64 * 13 + timestamp) % 5 == 0 {
        Color::WHITE
    } else {
        color
    }
}

fn darken(color: Color, _: u64, _: usize, _: usize) -> Color {
    color.map(|c| (c - 40).max(0))
}

const PALETTE: [(&str, Transform); NUM_LAYERS] = [
    ("rainbow", rainbow),
    ("black", black),
    ("lighten", lighten),
    ("invert", invert),
    ("red", red),
    ("green", green),
    ("blue", blue),
    ("sparkle", sparkle),
    ("darken", darken),
];

/// All built-in layers in slot order
pub fn palette() -> Vec<LayerRef> {
    PALETTE
        .iter()
        .enumerate()
        .map(|(index, &(name, transform))| {
            Arc::new(PaletteLayer {
                index,
                name,
                transform,
            }) as LayerRef
        })
        .collect()
}

/// Look up a built-in layer by name (case-insensitive)
pub fn find(name: &str) -> Result<LayerRef> {
    palette()
        .into_iter()
        .find(|layer| layer.name().eq_ignore_ascii_case(name))
        .ok_or_else(|| PaintError::UnknownLayer {
            name: name.to_string(),
        })
}
