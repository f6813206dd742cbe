use super::GlyphColor;

/// Cell is one position of the grid.
/// It carries two glyph layers: a filled inner disc and an outer ring.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Cell {
    pub alive: bool,
    pub inner: GlyphColor,
    pub outer: GlyphColor,
    /// Column within the grid (not a pixel coordinate)
    x: usize,
    /// Row within the grid
    y: usize,
}

impl Cell {
    /// Create a dead, uncolored cell at a grid position
    pub const fn dead(x: usize, y: usize) -> Self {
        Self {
            alive: false,
            inner: GlyphColor::new(super::Rgb::BLACK, 0),
            outer: GlyphColor::new(super::Rgb::BLACK, 0),
            x,
            y,
        }
    }

    pub const fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    pub const fn is_alive(&self) -> bool {
        self.alive
    }
}
