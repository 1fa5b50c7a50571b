// File: crates/chart-embed/src/color.rs
// Summary: RGB/RGBA color value rendered in Chart.js's CSS-like string notation.

use std::fmt;

use serde::{Serialize, Serializer};

/// A color carried by dataset and option fields.
/// Serializes as `"rgb(r, g, b)"` or `"rgba(r, g, b, a)"`, never as an object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    /// Alpha in [0.0, 1.0]; `None` selects the `rgb(...)` form.
    pub alpha: Option<f64>,
}

impl ChartColor {
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue, alpha: None }
    }

    /// Alpha outside [0.0, 1.0] is clamped.
    pub fn from_rgba(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self { red, green, blue, alpha: Some(alpha.clamp(0.0, 1.0)) }
    }
}

impl fmt::Display for ChartColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.alpha {
            // f64 Display drops trailing zeros: 1.0 renders as "1", 0.2 as "0.2".
            Some(a) => write!(f, "rgba({}, {}, {}, {})", self.red, self.green, self.blue, a),
            None => write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue),
        }
    }
}

impl Serialize for ChartColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
