//! Error types shared by the domain, rendering and CLI layers.

use thiserror::Error;

/// Rejected configuration, detected before any cell is mutated
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cell step must be greater than zero")]
    ZeroStep,

    #[error("canvas must be at least 1x1 pixels, got {width}x{height}")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("a {width}x{height} canvas with step {step} leaves no room for cells")]
    DegenerateGrid { width: u32, height: u32, step: u32 },

    #[error("{name} distribution must be within 0-100, got {value}")]
    DistributionOutOfRange { name: &'static str, value: u32 },

    #[error("invalid hex color '{color}': {reason}")]
    InvalidHexColor { color: String, reason: &'static str },

    #[error("unable to split palette chunk: '{0}'")]
    MalformedPaletteChunk(String),

    #[error("invalid weight '{weight}' for palette color {color}")]
    InvalidWeight { color: String, weight: String },

    #[error("palette must contain at least one color")]
    EmptyPalette,
}

/// Top-level error surfaced by the binary
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("{0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, Error>;
