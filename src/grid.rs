//! Paint Grid
//!
//! A rectangular grid of layer stores, all of the draw style chosen at
//! construction, plus the brush size used for strokes.

use crate::color::Color;
use crate::config::Capacities;
use crate::error::{PaintError, Result};
use crate::stores::{DrawStyle, LayerStore};

/// Grid of per-cell layer stores
#[derive(Debug)]
pub struct Grid {
    draw_style: DrawStyle,
    width: usize,
    height: usize,
    brush_size: usize,
    /// Column-major: `cells[x][y]`
    cells: Vec<Vec<Box<dyn LayerStore>>>,
}

impl Grid {
    pub const DEFAULT_BRUSH_SIZE: usize = 2;
    pub const MAX_BRUSH: usize = 5;
    pub const MIN_BRUSH: usize = 0;

    /// Create a `width` x `height` grid of empty stores
    pub fn new(draw_style: DrawStyle, width: usize, height: usize) -> Self {
        Self::with_capacities(draw_style, width, height, &Capacities::default())
    }

    pub fn with_capacities(
        draw_style: DrawStyle,
        width: usize,
        height: usize,
        capacities: &Capacities,
    ) -> Self {
        let cells: Vec<Vec<Box<dyn LayerStore>>> = (0..width)
            .map(|_| (0..height).map(|_| draw_style.new_store(capacities)).collect())
            .collect();

        Self {
            draw_style,
            width,
            height,
            brush_size: Self::DEFAULT_BRUSH_SIZE,
            cells,
        }
    }

    pub fn draw_style(&self) -> DrawStyle {
        self.draw_style
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<()> {
        if x < self.width && y < self.height {
            Ok(())
        } else {
            Err(PaintError::CellOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Borrow the store at (`x`, `y`)
    pub fn cell(&self, x: usize, y: usize) -> Result<&dyn LayerStore> {
        self.check_bounds(x, y)?;
        Ok(self.cells[x][y].as_ref())
    }

    /// Mutably borrow the store at (`x`, `y`)
    pub fn cell_mut(&mut self, x: usize, y: usize) -> Result<&mut (dyn LayerStore + 'static)> {
        self.check_bounds(x, y)?;
        Ok(self.cells[x][y].as_mut())
    }

    /// Colour of the cell at (`x`, `y`) starting from white
    pub fn get_color(&self, x: usize, y: usize, timestamp: u64) -> Result<Color> {
        Ok(self.cell(x, y)?.get_color(Color::WHITE, timestamp, x, y))
    }

    /// All cell colours, row by row
    pub fn render(&self, timestamp: u64) -> Vec<Vec<Color>> {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| self.cells[x][y].get_color(Color::WHITE, timestamp, x, y))
                    .collect()
            })
            .collect()
    }

    pub fn brush_size(&self) -> usize {
        self.brush_size
    }

    /// Grow the brush by one, up to `MAX_BRUSH`
    pub fn increase_brush_size(&mut self) {
        if self.brush_size < Self::MAX_BRUSH {
            self.brush_size += 1;
        }
    }

    /// Shrink the brush by one, down to `MIN_BRUSH`
    pub fn decrease_brush_size(&mut self) {
        if self.brush_size > Self::MIN_BRUSH {
            self.brush_size -= 1;
        }
    }

    /// Cells within Manhattan distance `brush_size` of (`x`, `y`), clipped to
    /// the grid, in column-major order.
    pub fn cells_in_brush(&self, x: usize, y: usize) -> Vec<(usize, usize)> {
        if self.width == 0 || self.height == 0 {
            return Vec::new();
        }

        let reach = self.brush_size;
        let x_range = x.saturating_sub(reach)..=(x + reach).min(self.width - 1);
        let y_range = y.saturating_sub(reach)..=(y + reach).min(self.height - 1);

        x_range
            .flat_map(|cx| y_range.clone().map(move |cy| (cx, cy)))
            .filter(|&(cx, cy)| cx.abs_diff(x) + cy.abs_diff(y) <= reach)
            .collect()
    }

    /// Activate the special effect on every cell
    pub fn special(&mut self) {
        for store in self.cells.iter_mut().flatten() {
            store.special();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::testing::digit;

    #[test]
    fn test_new_grid() {
        let grid = Grid::new(DrawStyle::Sequence, 4, 3);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.brush_size(), Grid::DEFAULT_BRUSH_SIZE);
        assert_eq!(grid.cell(3, 2).unwrap().draw_style(), DrawStyle::Sequence);
    }

    #[test]
    fn test_out_of_bounds() {
        let grid = Grid::new(DrawStyle::Set, 2, 2);
        let err = grid.cell(2, 0).unwrap_err();
        assert_eq!(err.error_code(), "CELL_OUT_OF_BOUNDS");
    }

    #[test]
    fn test_brush_limits() {
        let mut grid = Grid::new(DrawStyle::Set, 2, 2);
        for _ in 0..10 {
            grid.increase_brush_size();
        }
        assert_eq!(grid.brush_size(), Grid::MAX_BRUSH);
        for _ in 0..10 {
            grid.decrease_brush_size();
        }
        assert_eq!(grid.brush_size(), Grid::MIN_BRUSH);
    }

    #[test]
    fn test_cells_in_brush() {
        let mut grid = Grid::new(DrawStyle::Set, 5, 5);
        grid.decrease_brush_size();
        let cells = grid.cells_in_brush(0, 0);
        assert_eq!(cells, vec![(0, 0), (0, 1), (1, 0)]);

        let centre = grid.cells_in_brush(2, 2);
        assert_eq!(centre.len(), 5);

        grid.decrease_brush_size();
        assert_eq!(grid.cells_in_brush(4, 4), vec![(4, 4)]);
    }

    #[test]
    fn test_special_reaches_every_cell() {
        let mut grid = Grid::new(DrawStyle::Set, 2, 2);
        grid.cell_mut(0, 0).unwrap().add(&digit(0, "red")).unwrap();
        grid.special();
        for row in grid.render(0) {
            for color in row {
                assert_ne!(color, Color::WHITE);
            }
        }
        assert_eq!(grid.get_color(1, 1, 0).unwrap(), Color::BLACK);
    }
}
