//! Grid paint actions
//!
//! A `GridAction` is what one user gesture did to the grid: either a brush
//! stroke (the cells it actually changed) or a grid-wide special. It is the
//! concrete `PaintAction` recorded by the trackers.

use log::warn;
use serde::{Deserialize, Serialize};

use super::action::PaintAction;
use crate::error::Result;
use crate::grid::Grid;
use crate::layers::LayerRef;

/// Whether a step painted or erased a layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Add,
    Erase,
}

impl StepKind {
    /// The step that reverts this one
    pub fn inverse(self) -> Self {
        match self {
            StepKind::Add => StepKind::Erase,
            StepKind::Erase => StepKind::Add,
        }
    }
}

/// A single cell change
#[derive(Debug, Clone)]
pub struct PaintStep {
    pub x: usize,
    pub y: usize,
    pub layer: LayerRef,
    pub kind: StepKind,
}

impl PaintStep {
    /// Perform `kind` with this step's layer on its cell
    fn perform(&self, grid: &mut Grid, kind: StepKind) -> Result<bool> {
        let store = grid.cell_mut(self.x, self.y)?;
        match kind {
            StepKind::Add => store.add(&self.layer),
            StepKind::Erase => Ok(store.erase(&self.layer)),
        }
    }

    fn perform_logged(&self, grid: &mut Grid, kind: StepKind) {
        if let Err(e) = self.perform(grid, kind) {
            warn!(
                "skipping {:?} of '{}' at ({}, {}): {}",
                kind,
                self.layer.name(),
                self.x,
                self.y,
                e
            );
        }
    }
}

/// Recorded effect of one paint gesture
#[derive(Debug, Clone, Default)]
pub struct GridAction {
    steps: Vec<PaintStep>,
    is_special: bool,
}

impl GridAction {
    /// Paint (or erase) `layer` with the grid's brush centred on (`x`, `y`).
    ///
    /// Only cells whose store reported a change are recorded. The stroke is
    /// all-or-nothing: every cell under the brush is checked before any is
    /// touched, so a failing stroke leaves the grid as it was.
    pub fn stroke(
        grid: &mut Grid,
        x: usize,
        y: usize,
        layer: &LayerRef,
        kind: StepKind,
    ) -> Result<Self> {
        grid.cell(x, y)?;

        let cells = grid.cells_in_brush(x, y);
        if kind == StepKind::Add {
            for &(cx, cy) in &cells {
                grid.cell(cx, cy)?.check_add(layer)?;
            }
        }

        let mut action = Self::default();
        for (cx, cy) in cells {
            let step = PaintStep {
                x: cx,
                y: cy,
                layer: LayerRef::clone(layer),
                kind,
            };
            if step.perform(grid, kind)? {
                action.steps.push(step);
            }
        }
        Ok(action)
    }

    /// Apply the special effect to the whole grid and record it
    pub fn special(grid: &mut Grid) -> Self {
        grid.special();
        Self {
            steps: Vec::new(),
            is_special: true,
        }
    }

    pub fn steps(&self) -> &[PaintStep] {
        &self.steps
    }

    pub fn is_special(&self) -> bool {
        self.is_special
    }

    /// True for a stroke that changed nothing
    pub fn is_empty(&self) -> bool {
        !self.is_special && self.steps.is_empty()
    }
}

impl PaintAction for GridAction {
    type Surface = Grid;

    fn redo_apply(&self, grid: &mut Grid) {
        if self.is_special {
            grid.special();
        }
        for step in &self.steps {
            step.perform_logged(grid, step.kind);
        }
    }

    fn undo_apply(&self, grid: &mut Grid) {
        if self.is_special {
            grid.special();
        }
        for step in self.steps.iter().rev() {
            step.perform_logged(grid, step.kind.inverse());
        }
    }
}
