use super::{Cell, Rgb};
use crate::error::ConfigError;

/// Grid owns the cell storage and its geometry.
/// Cells are stored row-major: `index = row * x_cells + col`.
#[derive(Clone, Debug)]
pub struct Grid {
    /// Canvas width in pixels
    width: u32,
    /// Canvas height in pixels
    height: u32,
    /// Pixel pitch between two cell centers
    step: u32,
    x_cells: usize,
    y_cells: usize,
    background: Rgb,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell dead.
    ///
    /// A canvas holds `width / step - 1` full cells on the x axis
    /// (same for y). Grids with no cell on an axis are rejected.
    pub fn new(width: u32, height: u32, step: u32, background: Rgb) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyCanvas { width, height });
        }
        if step == 0 {
            return Err(ConfigError::ZeroStep);
        }

        let x_cells = (width / step) as usize;
        let y_cells = (height / step) as usize;
        if x_cells <= 1 || y_cells <= 1 {
            return Err(ConfigError::DegenerateGrid { width, height, step });
        }
        let (x_cells, y_cells) = (x_cells - 1, y_cells - 1);

        let cells = (0..x_cells * y_cells)
            .map(|idx| {
                let row = idx / x_cells;
                Cell::dead(idx - row * x_cells, row)
            })
            .collect();

        Ok(Self {
            width,
            height,
            step,
            x_cells,
            y_cells,
            background,
            cells,
        })
    }

    /// Canvas size in pixels
    pub const fn canvas_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub const fn step(&self) -> u32 {
        self.step
    }

    /// Number of cell columns and rows
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.x_cells, self.y_cells)
    }

    pub const fn background(&self) -> Rgb {
        self.background
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, idx: usize) -> &Cell {
        &self.cells[idx]
    }

    pub fn cell_mut(&mut self, idx: usize) -> &mut Cell {
        &mut self.cells[idx]
    }

    /// Convert a flat index to `(col, row)`
    pub const fn position_of(&self, idx: usize) -> (usize, usize) {
        let row = idx / self.x_cells;
        (idx - row * self.x_cells, row)
    }

    /// Convert `(col, row)` to a flat index
    pub const fn index_of(&self, col: usize, row: usize) -> usize {
        row * self.x_cells + col
    }

    /// Indices of the alive cells in the Moore neighborhood of `idx`.
    ///
    /// There is no wraparound: a cell in column 0 has no left neighbors,
    /// even though `idx - 1` is a valid index on the previous row.
    /// Order is left, right, up, down, up-left, down-left, up-right, down-right.
    pub fn neighbors(&self, idx: usize) -> Vec<usize> {
        assert!(idx < self.cells.len(), "cell index {} out of bounds", idx);

        let w = self.x_cells;
        let len = self.cells.len();
        let has_left = idx % w != 0;
        let has_right = (idx + 1) % w != 0;
        let has_up = idx >= w;
        let has_down = idx + w < len;

        let candidates = [
            (has_left, idx.wrapping_sub(1)),
            (has_right, idx + 1),
            (has_up, idx.wrapping_sub(w)),
            (has_down, idx + w),
            (has_up && has_left, idx.wrapping_sub(w + 1)),
            (has_down && has_left, (idx + w).wrapping_sub(1)),
            (has_up && has_right, idx.wrapping_sub(w).wrapping_add(1)),
            (has_down && has_right, idx + w + 1),
        ];

        candidates
            .into_iter()
            .filter(|&(exists, _)| exists)
            .map(|(_, n)| n)
            .filter(|&n| self.cells[n].alive)
            .collect()
    }

    /// Number of alive cells around `idx`
    pub fn live_neighbor_count(&self, idx: usize) -> usize {
        self.neighbors(idx).len()
    }

    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|c| c.alive).count()
    }

    /// Iterate over alive cells with their flat index
    pub fn iter_alive(&self) -> impl Iterator<Item = (usize, &Cell)> + '_ {
        self.cells.iter().enumerate().filter(|(_, c)| c.alive)
    }
}
