//! Activation and coloring of a grid.
//!
//! Five passes run once each, in order, over every cell in ascending
//! index order. Each pass sees the state left by the previous ones and
//! passes 2-3 also see their own earlier writes (in-place mutation).

use rand::Rng;
use tracing::debug;

use super::{GlyphColor, Grid, Palette};

/// A cell with more live neighbors than this wakes up in the first cluster pass
pub const LOW_CLUSTER_THRESHOLD: usize = 4;
/// A cell with more live neighbors than this wakes up in the second cluster pass
pub const HIGH_CLUSTER_THRESHOLD: usize = 7;
/// Alpha gained per live neighbor
pub const ALPHA_PER_NEIGHBOR: i32 = 28;

/// Percentages (0-100) driving the random decisions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Distributions {
    /// Chance for a cell to be randomly activated
    pub cell: u32,
    /// Chance for a cell to get an inner disc
    pub inner: u32,
    /// Chance for a cell with at least two neighbors to get an outer ring
    pub outer: u32,
}

impl Default for Distributions {
    fn default() -> Self {
        Self {
            cell: 40,
            inner: 80,
            outer: 60,
        }
    }
}

/// Activates and colors cells, borrowing the random source for its lifetime
pub struct Colorizer<'a, R: Rng + ?Sized> {
    distributions: Distributions,
    palette: &'a Palette,
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> Colorizer<'a, R> {
    pub fn new(distributions: Distributions, palette: &'a Palette, rng: &'a mut R) -> Self {
        Self {
            distributions,
            palette,
            rng,
        }
    }

    /// Run the five passes
    pub fn run(&mut self, grid: &mut Grid) {
        self.activate_randomly(grid);
        debug!(alive = grid.count_alive(), "random activation");

        activate_clusters(grid, LOW_CLUSTER_THRESHOLD);
        debug!(alive = grid.count_alive(), threshold = LOW_CLUSTER_THRESHOLD, "cluster activation");

        activate_clusters(grid, HIGH_CLUSTER_THRESHOLD);
        debug!(alive = grid.count_alive(), threshold = HIGH_CLUSTER_THRESHOLD, "cluster activation");

        self.assign_colors(grid);
        debug!(
            inner = grid.cells().iter().filter(|c| c.inner.is_visible()).count(),
            outer = grid.cells().iter().filter(|c| c.outer.is_visible()).count(),
            "colors assigned"
        );

        let inherited = inherit_colors(grid);
        debug!(inherited, "colors inherited");
    }

    /// Pass 1: wake each cell with probability `cell`%
    pub fn activate_randomly(&mut self, grid: &mut Grid) {
        for idx in 0..grid.len() {
            if self.rng.random_range(0..100) < self.distributions.cell {
                grid.cell_mut(idx).alive = true;
            }
        }
    }

    /// Pass 4: pick inner and outer colors, with alpha driven by neighbor count
    pub fn assign_colors(&mut self, grid: &mut Grid) {
        let Distributions { inner, outer, .. } = self.distributions;
        let fallback = self.palette.fallback_color();

        for idx in 0..grid.len() {
            let weight = grid.live_neighbor_count(idx);
            let mut color = self.palette.pick(&mut *self.rng);

            if self.rng.random_range(0..100) < inner {
                let alpha = ALPHA_PER_NEIGHBOR * weight as i32 - self.rng.random_range(0..inner) as i32;
                grid.cell_mut(idx).inner = GlyphColor::with_raw_alpha(color, alpha);
            }

            // Lonely cells get a fresh color for their ring
            if weight < 2 {
                color = self.palette.pick(&mut *self.rng);
            }

            if weight > 1 && self.rng.random_range(0..100) < outer {
                let alpha = ALPHA_PER_NEIGHBOR * weight as i32 - self.rng.random_range(0..outer) as i32;
                grid.cell_mut(idx).outer = GlyphColor::with_raw_alpha(color, alpha);
            } else {
                // No ring: the inner disc takes the least used color, alpha untouched
                grid.cell_mut(idx).inner.rgb = fallback;
            }
        }
    }
}

/// Passes 2 and 3: wake every cell with more than `threshold` live neighbors.
/// Cells woken earlier in the pass count for later ones.
pub fn activate_clusters(grid: &mut Grid, threshold: usize) {
    for idx in 0..grid.len() {
        if grid.live_neighbor_count(idx) > threshold {
            grid.cell_mut(idx).alive = true;
        }
    }
}

/// Pass 5: alive cells take the colors of denser neighbors.
///
/// Neighbors are visited in descending index order and every qualifying one
/// overwrites the previous, so the lowest qualifying index wins. A color is
/// only copied when every one of the neighbor's channels is non-zero.
/// Returns the number of cells that changed.
pub fn inherit_colors(grid: &mut Grid) -> usize {
    let mut changed = 0;

    for idx in 0..grid.len() {
        if !grid.cell(idx).alive {
            continue;
        }

        let mut neighbors = grid.neighbors(idx);
        neighbors.sort_unstable_by(|a, b| b.cmp(a));
        let own_weight = neighbors.len();
        let before = *grid.cell(idx);

        for n in neighbors {
            if grid.live_neighbor_count(n) <= own_weight {
                continue;
            }

            let donor = *grid.cell(n);
            let cell = grid.cell_mut(idx);
            if donor.inner.rgb.is_set() {
                cell.inner.rgb = donor.inner.rgb;
            }
            if donor.outer.rgb.is_set() {
                cell.outer.rgb = donor.outer.rgb;
                cell.outer.alpha = donor.inner.alpha;
            }
        }

        if *grid.cell(idx) != before {
            changed += 1;
        }
    }

    changed
}
