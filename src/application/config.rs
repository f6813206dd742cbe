use crate::domain::{Distributions, Palette, Rgb};
use crate::error::ConfigError;

pub const DEFAULT_PALETTE: &str = "#fa32f3:100,#00a1cd:100,#4b1ff7:30";
pub const DEFAULT_BACKGROUND: Rgb = Rgb::new(0x00, 0x0e, 0x12);

/// Everything needed to generate one image
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Distance between two cell centers
    pub step: u32,
    pub distributions: Distributions,
    pub palette: Palette,
    pub background: Rgb,
    /// Seed for reproducible output; a random one is drawn when unset
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    /// Check everything that can be checked before a grid is built
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Distributions { cell, inner, outer } = self.distributions;
        for (name, value) in [("cell", cell), ("inner", inner), ("outer", outer)] {
            if value > 100 {
                return Err(ConfigError::DistributionOutOfRange { name, value });
            }
        }

        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyCanvas {
                width: self.width,
                height: self.height,
            });
        }
        if self.step == 0 {
            return Err(ConfigError::ZeroStep);
        }
        if self.width / self.step <= 1 || self.height / self.step <= 1 {
            return Err(ConfigError::DegenerateGrid {
                width: self.width,
                height: self.height,
                step: self.step,
            });
        }

        if self.palette.entries().is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            step: 60,
            distributions: Distributions::default(),
            palette: Palette::parse(DEFAULT_PALETTE).expect("default palette is valid"),
            background: DEFAULT_BACKGROUND,
            seed: None,
        }
    }
}
