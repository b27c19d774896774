//! Grid: a double-bufferable matrix of styled cells.
//!
//! The terminal backend keeps two grids (current and next) and flushes
//! only the cells that differ, so a Browse-mode partial repaint that
//! touches two rows costs two rows of output, not a screen clear.

use crate::style::Style;

/// A single screen cell: a rune, optional combining marks, and a style.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cell {
    /// The rune to display (`None` marks the continuation half of a
    /// wide rune).
    pub ch: Option<char>,
    /// Combining marks attached to this cell.
    pub combining: Vec<char>,
    /// The cell's style.
    pub style: Style,
}

impl Cell {
    /// An empty cell (space, default style).
    pub fn empty() -> Self {
        Self {
            ch: Some(' '),
            combining: Vec::new(),
            style: Style::new(),
        }
    }

    /// The trailing half of a wide rune.
    pub fn continuation(style: Style) -> Self {
        Self {
            ch: None,
            combining: Vec::new(),
            style,
        }
    }

    /// Whether this cell is a wide-rune continuation.
    pub const fn is_continuation(&self) -> bool {
        self.ch.is_none()
    }
}

/// A width × height matrix of cells in row-major order.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<Cell>,
    width: u16,
    height: u16,
}

impl Grid {
    /// Create a grid filled with empty cells.
    pub fn new(width: u16, height: u16) -> Self {
        let size = usize::from(width) * usize::from(height);
        Self {
            cells: vec![Cell::empty(); size],
            width,
            height,
        }
    }

    /// Grid width in columns.
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Grid height in rows.
    pub const fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn index_of(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(usize::from(y) * usize::from(self.width) + usize::from(x))
        } else {
            None
        }
    }

    /// Get the cell at (x, y), if in bounds.
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    /// Set the cell at (x, y); out-of-bounds writes are dropped.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index_of(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Fill the whole grid with empty cells.
    pub fn fill_empty(&mut self) {
        self.cells.fill(Cell::empty());
    }

    /// Resize the grid, dropping old content.
    pub fn resize(&mut self, width: u16, height: u16) {
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells
            .resize(usize::from(width) * usize::from(height), Cell::empty());
    }

    /// Copy content from another grid of the same dimensions.
    pub fn copy_from(&mut self, other: &Self) {
        debug_assert_eq!(self.width, other.width);
        debug_assert_eq!(self.height, other.height);
        self.cells.clone_from(&other.cells);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_get_set() {
        let mut grid = Grid::new(10, 4);
        let mut cell = Cell::empty();
        cell.ch = Some('x');
        grid.set(3, 2, cell.clone());
        assert_eq!(grid.get(3, 2), Some(&cell));
        assert_eq!(grid.get(0, 0), Some(&Cell::empty()));
    }

    #[test]
    fn test_grid_bounds() {
        let mut grid = Grid::new(10, 4);
        assert!(grid.get(10, 0).is_none());
        assert!(grid.get(0, 4).is_none());
        // Out-of-bounds write is a no-op, not a panic.
        grid.set(99, 99, Cell::empty());
    }

    #[test]
    fn test_grid_resize_drops_content() {
        let mut grid = Grid::new(4, 4);
        let mut cell = Cell::empty();
        cell.ch = Some('x');
        grid.set(0, 0, cell);
        grid.resize(8, 2);
        assert_eq!(grid.width(), 8);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.get(0, 0), Some(&Cell::empty()));
    }
}
