// Domain layer - grid geometry, palette, activation and coloring
pub mod domain;

// Application layer - configuration and generation pipeline
pub mod application;

// Infrastructure layer - rendering, command-line input
pub mod rendering;
pub mod input;

pub mod error;

// Re-exports for convenience
pub use domain::{Cell, Grid, Palette, Rgb};
pub use application::{Generator, GeneratorConfig};
pub use error::{ConfigError, Error};
