use std::time::Instant;

use image::RgbaImage;
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::info;

use super::GeneratorConfig;
use crate::domain::{Colorizer, Grid};
use crate::error::ConfigError;
use crate::rendering;

/// Generator orchestrates one image: grid construction, coloring, rendering.
/// This is the application layer that coordinates domain logic.
pub struct Generator {
    config: GeneratorConfig,
    pub last_coloring_time_ms: f32,
    pub last_render_time_ms: f32,
}

impl Generator {
    /// Validate the configuration up front so no partial work happens
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            last_coloring_time_ms: 0.0,
            last_render_time_ms: 0.0,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Seeded generator when the config carries a seed, OS entropy otherwise
    pub fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Build the grid and run the five coloring passes
    pub fn build_grid<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Grid, ConfigError> {
        let cfg = &self.config;
        let mut grid = Grid::new(cfg.width, cfg.height, cfg.step, cfg.background)?;

        let start = Instant::now();
        Colorizer::new(cfg.distributions, &cfg.palette, rng).run(&mut grid);
        self.last_coloring_time_ms = start.elapsed().as_secs_f32() * 1000.0;

        Ok(grid)
    }

    /// Generate the final image with the given random source
    pub fn generate_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<RgbaImage, ConfigError> {
        let grid = self.build_grid(rng)?;
        let (cols, rows) = grid.dimensions();

        let start = Instant::now();
        let image = rendering::render(&grid);
        self.last_render_time_ms = start.elapsed().as_secs_f32() * 1000.0;

        info!(
            cols,
            rows,
            alive = grid.count_alive(),
            coloring_ms = self.last_coloring_time_ms,
            render_ms = self.last_render_time_ms,
            "image generated"
        );
        Ok(image)
    }

    /// Generate the final image using the configured seed
    pub fn generate(&mut self) -> Result<RgbaImage, ConfigError> {
        let mut rng = self.rng();
        self.generate_with(&mut rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Distributions, Palette, Rgb};

    fn small_config() -> GeneratorConfig {
        GeneratorConfig {
            width: 240,
            height: 180,
            step: 30,
            distributions: Distributions::default(),
            palette: Palette::parse("#fa32f3:100,#00a1cd:100,#4b1ff7:30").unwrap(),
            background: Rgb::new(0x00, 0x0e, 0x12),
            seed: Some(7),
        }
    }

    #[test]
    fn test_invalid_config_is_rejected_up_front() {
        let mut config = small_config();
        config.step = 200;
        assert!(Generator::new(config).is_err());
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = Generator::new(small_config()).unwrap().generate().unwrap();
        let b = Generator::new(small_config()).unwrap().generate().unwrap();
        assert_eq!(a.dimensions(), (240, 180));
        assert_eq!(a, b);
    }

    #[test]
    fn test_full_distribution_wakes_all_cells() {
        let mut config = small_config();
        config.distributions.cell = 100;
        let mut generator = Generator::new(config).unwrap();
        let mut rng = generator.rng();
        let grid = generator.build_grid(&mut rng).unwrap();
        assert_eq!(grid.count_alive(), grid.len());
    }

    #[test]
    fn test_no_cells_gives_flat_background() {
        let mut config = small_config();
        config.distributions.cell = 0;
        let image = Generator::new(config).unwrap().generate().unwrap();
        assert!(image.pixels().all(|p| p.0 == [0x00, 0x0e, 0x12, 255]));
    }

    #[test]
    fn test_alive_cells_produce_glyphs() {
        let mut config = small_config();
        config.distributions = Distributions { cell: 100, inner: 100, outer: 100 };
        let image = Generator::new(config).unwrap().generate().unwrap();
        assert!(image.pixels().any(|p| p.0 != [0x00, 0x0e, 0x12, 255]));
    }
}
