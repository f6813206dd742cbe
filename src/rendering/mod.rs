//! Two-pass renderer: sharp glyphs first, then a bloom composited behind them.

pub mod bloom;
pub mod glyph;

use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::domain::{Cell, Grid};
use bloom::{BLOOM_PADDING, bloom_layer};
use glyph::{blend, fill_circle, stroke_circle};

/// Radius of the outer ring
pub const OUTER_RADIUS: f32 = 25.0;
/// Stroke width of the outer ring
pub const OUTER_LINE_WIDTH: f32 = 2.0;
/// Radius of the inner disc
pub const INNER_RADIUS: f32 = 10.0;

/// Offsets that center the cell pattern within the canvas
pub fn margins(grid: &Grid) -> (i64, i64) {
    let (width, height) = grid.canvas_size();
    let (x_cells, y_cells) = grid.dimensions();
    let step = grid.step() as i64;
    let margin = |dim: u32, cells: usize| (dim as i64 - cells as i64 * step + step / 2) / 2;
    (margin(width, x_cells), margin(height, y_cells))
}

/// Pixel center of a cell's glyph
pub fn cell_center(grid: &Grid, cell: &Cell) -> (i64, i64) {
    let (x_margin, y_margin) = margins(grid);
    let (col, row) = cell.position();
    let step = grid.step() as i64;
    (x_margin + col as i64 * step, y_margin + row as i64 * step)
}

/// Canvas filled with the grid's background at full opacity
pub fn background_canvas(grid: &Grid) -> RgbaImage {
    let (width, height) = grid.canvas_size();
    let [r, g, b] = grid.background().0;
    RgbaImage::from_pixel(width, height, Rgba([r, g, b, 255]))
}

/// Rasterize the alive cells onto a transparent canvas
pub fn draw_glyphs(grid: &Grid) -> RgbaImage {
    let (width, height) = grid.canvas_size();
    let mut canvas = RgbaImage::new(width, height);

    for (_, cell) in grid.iter_alive() {
        let (cx, cy) = cell_center(grid, cell);
        let (cx, cy) = (cx as f32, cy as f32);

        if cell.outer.is_visible() {
            stroke_circle(&mut canvas, cx, cy, OUTER_RADIUS, OUTER_LINE_WIDTH, Rgba(cell.outer.to_rgba()));
        }
        if cell.inner.is_visible() {
            fill_circle(&mut canvas, cx, cy, INNER_RADIUS, Rgba(cell.inner.to_rgba()));
        }
    }

    canvas
}

/// Blend `top` over `bottom` with its top-left corner at `(x, y)`,
/// clipping whatever falls outside `bottom`
pub fn overlay(bottom: &mut RgbaImage, top: &RgbaImage, x: i64, y: i64) {
    let (bw, bh) = (bottom.width() as i64, bottom.height() as i64);
    for (tx, ty, px) in top.enumerate_pixels() {
        let (dx, dy) = (x + tx as i64, y + ty as i64);
        if dx < 0 || dy < 0 || dx >= bw || dy >= bh {
            continue;
        }
        blend(bottom.get_pixel_mut(dx as u32, dy as u32), *px, 1.0);
    }
}

/// Render the grid into its final image.
///
/// The background receives the bloom at (0, 0), then the sharp glyph
/// layer at the bloom offset so each glyph sits inside its own glow.
pub fn render(grid: &Grid) -> RgbaImage {
    let glyphs = draw_glyphs(grid);
    let bloom = bloom_layer(&glyphs);
    debug!(width = bloom.width(), height = bloom.height(), "bloom layer ready");

    let mut canvas = background_canvas(grid);
    overlay(&mut canvas, &bloom, 0, 0);
    overlay(&mut canvas, &glyphs, BLOOM_PADDING as i64, BLOOM_PADDING as i64);
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GlyphColor, Rgb};

    const BACKGROUND: Rgb = Rgb::new(0x00, 0x0e, 0x12);

    fn grid() -> Grid {
        Grid::new(200, 160, 40, BACKGROUND).unwrap()
    }

    #[test]
    fn test_margins_center_the_pattern() {
        // 4x3 cells, step 40: (200 - 160 + 20) / 2 = 30 and (160 - 120 + 20) / 2 = 30
        let g = grid();
        assert_eq!(g.dimensions(), (4, 3));
        assert_eq!(margins(&g), (30, 30));
        assert_eq!(cell_center(&g, g.cell(5)), (70, 70));
    }

    #[test]
    fn test_empty_grid_renders_background() {
        let g = grid();
        let img = render(&g);
        assert_eq!(img.dimensions(), (200, 160));
        assert!(img.pixels().all(|p| *p == Rgba([0x00, 0x0e, 0x12, 255])));
    }

    #[test]
    fn test_invisible_glyphs_are_not_drawn() {
        let mut g = grid();
        let cell = g.cell_mut(5);
        cell.alive = true;
        cell.inner = GlyphColor::with_raw_alpha(Rgb::new(255, 0, 0), -12);
        cell.outer = GlyphColor::new(Rgb::new(0, 255, 0), 0);

        assert!(draw_glyphs(&g).pixels().all(|p| p[3] == 0));
        assert!(render(&g).pixels().all(|p| *p == Rgba([0x00, 0x0e, 0x12, 255])));
    }

    #[test]
    fn test_dead_cells_are_not_drawn() {
        let mut g = grid();
        g.cell_mut(5).inner = GlyphColor::new(Rgb::new(255, 0, 0), 255);
        assert!(draw_glyphs(&g).pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn test_sharp_layer_is_on_top() {
        let mut g = grid();
        let red = Rgb::new(250, 40, 10);
        let cell = g.cell_mut(5);
        cell.alive = true;
        cell.inner = GlyphColor::new(red, 255);
        cell.outer = GlyphColor::new(Rgb::new(0, 120, 255), 180);

        let glyphs = draw_glyphs(&g);
        let img = render(&g);

        let (cx, cy) = cell_center(&g, g.cell(5));
        let original = *glyphs.get_pixel(cx as u32, cy as u32);
        assert_eq!(original, Rgba([250, 40, 10, 255]));
        let pad = BLOOM_PADDING;
        assert_eq!(*img.get_pixel(cx as u32 + pad, cy as u32 + pad), original);
    }

    #[test]
    fn test_glow_surrounds_glyphs() {
        let mut g = grid();
        let cell = g.cell_mut(5);
        cell.alive = true;
        cell.inner = GlyphColor::new(Rgb::new(255, 255, 255), 255);

        let img = render(&g);
        let (cx, cy) = cell_center(&g, g.cell(5));
        let pad = BLOOM_PADDING as i64;

        // Just outside the disc the glow brightens the background
        let halo = img.get_pixel((cx + pad + 13) as u32, (cy + pad) as u32);
        assert!(halo[0] > 0x00 && halo[1] > 0x0e);
        assert_eq!(halo[3], 255);
        // Far away it is untouched
        assert_eq!(*img.get_pixel(0, 0), Rgba([0x00, 0x0e, 0x12, 255]));
    }
}
