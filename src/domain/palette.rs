//! Weighted color palette.
//!
//! The palette is expanded so that every color appears `weight` times;
//! picking uniformly over the expansion approximates the weighted
//! distribution.

use rand::Rng;

use super::Rgb;
use crate::error::ConfigError;

/// One `color:weight` entry as declared by the user
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct WeightedColor {
    pub hex: String,
    pub color: Rgb,
    pub weight: u32,
}

#[derive(Clone, Debug)]
pub struct Palette {
    weights: Vec<WeightedColor>,
    entries: Vec<Rgb>,
}

impl Palette {
    /// Build a palette from weighted colors, keeping declaration order.
    /// A color declared twice (same string) keeps its first position and its last weight.
    pub fn new(colors: impl IntoIterator<Item = WeightedColor>) -> Result<Self, ConfigError> {
        let mut weights: Vec<WeightedColor> = Vec::new();
        for color in colors {
            if color.weight == 0 {
                return Err(ConfigError::InvalidWeight {
                    color: color.hex,
                    weight: "0".to_string(),
                });
            }
            match weights.iter_mut().find(|w| w.hex == color.hex) {
                Some(existing) => existing.weight = color.weight,
                None => weights.push(color),
            }
        }

        if weights.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }

        let entries = weights
            .iter()
            .flat_map(|w| std::iter::repeat_n(w.color, w.weight as usize))
            .collect();

        Ok(Self { weights, entries })
    }

    /// Parse `"#fa32f3:100,#00a1cd:100,#4b1ff7:30"`
    pub fn parse(declared: &str) -> Result<Self, ConfigError> {
        let colors = declared
            .split(',')
            .map(|chunk| -> Result<WeightedColor, ConfigError> {
                let (hex, weight) = chunk
                    .split_once(':')
                    .filter(|(_, w)| !w.contains(':'))
                    .ok_or_else(|| ConfigError::MalformedPaletteChunk(chunk.to_string()))?;
                let hex = hex.trim();
                let weight_str = weight.trim();
                let weight = weight_str.parse::<u32>().map_err(|_| ConfigError::InvalidWeight {
                    color: hex.to_string(),
                    weight: weight_str.to_string(),
                })?;
                Ok(WeightedColor {
                    hex: hex.to_string(),
                    color: Rgb::parse_hex(hex)?,
                    weight,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(colors)
    }

    /// Expanded sequence used for uniform picks
    pub fn entries(&self) -> &[Rgb] {
        &self.entries
    }

    pub fn weights(&self) -> &[WeightedColor] {
        &self.weights
    }

    /// Pick a color uniformly over the expanded sequence
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Rgb {
        self.entries[rng.random_range(0..self.entries.len())]
    }

    /// The least used color. Ties go to the first declared entry.
    pub fn fallback_color(&self) -> Rgb {
        self.weights
            .iter()
            .min_by_key(|w| w.weight)
            .map(|w| w.color)
            .unwrap_or(Rgb::BLACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_parse_expands_by_weight() {
        let palette = Palette::parse("#ff0000:3,#00ff00:1").unwrap();
        assert_eq!(palette.entries().len(), 4);
        assert_eq!(
            palette.entries(),
            &[
                Rgb::new(255, 0, 0),
                Rgb::new(255, 0, 0),
                Rgb::new(255, 0, 0),
                Rgb::new(0, 255, 0),
            ]
        );
        assert_eq!(palette.weights()[1].hex, "#00ff00");
    }

    #[test]
    fn test_fallback_is_lowest_weight() {
        let palette = Palette::parse("#fa32f3:100,#00a1cd:100,#4b1ff7:30").unwrap();
        assert_eq!(palette.fallback_color(), Rgb::new(0x4b, 0x1f, 0xf7));
    }

    #[test]
    fn test_fallback_tie_goes_to_first_declared() {
        let palette = Palette::parse("#0000ff:5,#ff0000:5,#00ff00:9").unwrap();
        assert_eq!(palette.fallback_color(), Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_duplicate_color_takes_last_weight() {
        let palette = Palette::parse("#ff0000:3,#00ff00:1,#ff0000:1").unwrap();
        assert_eq!(palette.weights().len(), 2);
        assert_eq!(palette.weights()[0].hex, "#ff0000");
        assert_eq!(palette.entries().len(), 2);
    }

    #[test]
    fn test_duplicates_are_matched_by_exact_string() {
        let palette = Palette::parse("#ff0000:3,#FF0000:1").unwrap();
        assert_eq!(palette.weights().len(), 2);
        assert_eq!(palette.entries().len(), 4);
        assert_eq!(palette.fallback_color(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_malformed_input() {
        assert_eq!(
            Palette::parse("#ff0000").unwrap_err(),
            ConfigError::MalformedPaletteChunk("#ff0000".to_string())
        );
        assert_eq!(
            Palette::parse("#ff0000:1:2").unwrap_err(),
            ConfigError::MalformedPaletteChunk("#ff0000:1:2".to_string())
        );
        assert!(matches!(
            Palette::parse("#ff0000:heavy"),
            Err(ConfigError::InvalidWeight { .. })
        ));
        assert!(matches!(
            Palette::parse("#ff0000:0"),
            Err(ConfigError::InvalidWeight { .. })
        ));
        assert!(matches!(
            Palette::parse("red:4"),
            Err(ConfigError::InvalidHexColor { .. })
        ));
        assert_eq!(Palette::new(Vec::new()).unwrap_err(), ConfigError::EmptyPalette);
    }

    #[test]
    fn test_pick_stays_in_palette() {
        let palette = Palette::parse("#ff0000:1,#00ff00:1").unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert!(palette.entries().contains(&palette.pick(&mut rng)));
        }
    }
}
