//! Color sample type and CSS formatting.
//!
//! The wheel never converts between color spaces — colors exist only as the
//! RGB triples read back from the painted canvas, plus the CSS strings used
//! to paint them in the first place.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use serde::{Deserialize, Serialize};

/// An opaque RGB color as sampled from the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// The hue the wheel starts on before any interaction.
    pub const DEFAULT_HUE: Self = Self { r: 0, g: 61, b: 255 };

    #[must_use]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Decode an RGBA quad from `getImageData`.
    ///
    /// A zero alpha channel means the pixel lies in a transparent region
    /// (the ring cutout or outside the disk) and yields no color; callers
    /// keep whatever they last had.
    #[must_use]
    pub fn from_rgba(rgba: [u8; 4]) -> Option<Self> {
        let [r, g, b, a] = rgba;
        if a == 0 { None } else { Some(Self { r, g, b }) }
    }

    /// CSS `rgb(r, g, b)` string, as accepted by canvas fill styles.
    #[must_use]
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::DEFAULT_HUE
    }
}
