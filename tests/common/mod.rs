//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::sync::Arc;

use layerpaint::{Color, Layer, LayerRef, PaintAction};

/// Appends `index + 1` to the red channel so the result spells the
/// composition order.
#[derive(Debug)]
pub struct OrderLayer {
    index: usize,
    name: String,
}

impl Layer for OrderLayer {
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

pub fn layer(index: usize, name: &str) -> LayerRef {
    Arc::new(OrderLayer {
        index,
        name: name.to_string(),
    })
}

/// Red channel produced by a store from black, i.e. the composition order
pub fn order(color: Color) -> i32 {
    color.r
}

/// Surface that logs every effect it receives
#[derive(Debug, Default)]
pub struct Journal {
    pub entries: Vec<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Named(pub &'static str);

impl PaintAction for Named {
    type Surface = Journal;

    fn redo_apply(&self, surface: &mut Journal) {
        surface.entries.push(format!("forward {}", self.0));
    }

    fn undo_apply(&self, surface: &mut Journal) {
        surface.entries.push(format!("backward {}", self.0));
    }
}
