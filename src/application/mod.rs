mod config;
mod generator;

pub use config::{DEFAULT_BACKGROUND, DEFAULT_PALETTE, GeneratorConfig};
pub use generator::Generator;
