use crate::error::ConfigError;

/// An opaque RGB triple
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const BLACK: Rgb = Rgb([0, 0, 0]);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Parse a `#rrggbb` string
    pub fn parse_hex(value: &str) -> Result<Self, ConfigError> {
        let invalid = |reason| ConfigError::InvalidHexColor {
            color: value.to_string(),
            reason,
        };

        if value.len() != 7 {
            return Err(invalid("hex color must be 7 characters"));
        }
        let digits = value.strip_prefix('#').ok_or_else(|| invalid("hex color must start with '#'"))?;

        let channel = |range: std::ops::Range<usize>, reason| {
            digits
                .get(range)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| invalid(reason))
        };

        Ok(Self([
            channel(0..2, "red component invalid")?,
            channel(2..4, "green component invalid")?,
            channel(4..6, "blue component invalid")?,
        ]))
    }

    /// A color counts as set only when every channel is non-zero
    pub fn is_set(self) -> bool {
        self.0.iter().all(|&c| c != 0)
    }
}

/// Color of one glyph layer. Alpha 0 means the layer is not drawn.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct GlyphColor {
    pub rgb: Rgb,
    pub alpha: u8,
}

impl GlyphColor {
    pub const fn new(rgb: Rgb, alpha: u8) -> Self {
        Self { rgb, alpha }
    }

    /// Build a color from an unclamped alpha computation.
    /// Anything below zero becomes invisible, anything above 255 saturates.
    pub fn with_raw_alpha(rgb: Rgb, alpha: i32) -> Self {
        Self {
            rgb,
            alpha: alpha.clamp(0, u8::MAX as i32) as u8,
        }
    }

    pub const fn is_visible(self) -> bool {
        self.alpha > 0
    }

    pub const fn to_rgba(self) -> [u8; 4] {
        let [r, g, b] = self.rgb.0;
        [r, g, b, self.alpha]
    }
}
