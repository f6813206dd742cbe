mod cell;
mod color;
mod grid;
mod palette;
pub mod activation;

pub use cell::Cell;
pub use color::{GlyphColor, Rgb};
pub use grid::Grid;
pub use palette::{Palette, WeightedColor};
pub use activation::{Colorizer, Distributions};
