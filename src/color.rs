// 🎨 Color Model Converter - hex → RGB → HSL, pure functions
// Invalid input is None, never an error

use serde::{Deserialize, Serialize};

pub const DEFAULT_COLOR: &str = "#3b82f6";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in degrees, saturation and lightness in whole percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Rgb {
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    pub fn to_hsl(&self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        // Achromatic
        if max == min {
            return Hsl {
                h: 0,
                s: 0,
                l: (l * 100.0).round() as u8,
            };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let sector = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        let h = sector / 6.0;

        Hsl {
            // A hue just under 360 rounds up; wrap it back to 0
            h: ((h * 360.0).round() as u16) % 360,
            s: (s * 100.0).round() as u8,
            l: (l * 100.0).round() as u8,
        }
    }
}

impl Hsl {
    pub fn css(&self) -> String {
        format!("hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

/// Six hex digits with an optional leading '#', any case
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

pub fn hex_to_hsl(hex: &str) -> Option<Hsl> {
    hex_to_rgb(hex).map(|rgb| rgb.to_hsl())
}

// ============================================================================
// COLOR PICKER STATE
// ============================================================================

/// Editable hex field; RGB and HSL are always derived, never stored
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPicker {
    pub hex: String,
}

impl ColorPicker {
    pub fn new() -> Self {
        ColorPicker {
            hex: DEFAULT_COLOR.to_string(),
        }
    }

    pub fn rgb(&self) -> Option<Rgb> {
        hex_to_rgb(&self.hex)
    }

    pub fn hsl(&self) -> Option<Hsl> {
        hex_to_hsl(&self.hex)
    }

    pub fn set_hex(&mut self, hex: &str) {
        self.hex = hex.to_string();
    }

    pub fn push(&mut self, c: char) {
        // '#' + six digits is the longest valid value
        if self.hex.chars().count() < 7 {
            self.hex.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.hex.pop();
    }

    /// The hex value as copied: upper-cased
    pub fn hex_display(&self) -> String {
        self.hex.to_uppercase()
    }
}

impl Default for ColorPicker {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#3b82f6"), Some(Rgb { r: 59, g: 130, b: 246 }));
        assert_eq!(hex_to_rgb("3B82F6"), Some(Rgb { r: 59, g: 130, b: 246 }));
        assert_eq!(hex_to_rgb("#000000"), Some(Rgb { r: 0, g: 0, b: 0 }));
    }

    #[test]
    fn test_invalid_hex_is_none() {
        assert_eq!(hex_to_rgb("not-a-color"), None);
        assert_eq!(hex_to_rgb("#fff"), None);
        assert_eq!(hex_to_rgb("##3b82f6"), None);
        assert_eq!(hex_to_rgb("#3b82g6"), None);
        assert_eq!(hex_to_rgb("#3b82f6ff"), None);
        assert_eq!(hex_to_rgb("#ééé"), None);
        assert_eq!(hex_to_hsl(""), None);
    }

    #[test]
    fn test_hex_to_hsl() {
        assert_eq!(hex_to_hsl("#3b82f6"), Some(Hsl { h: 217, s: 91, l: 60 }));
        assert_eq!(hex_to_hsl("#ff0000"), Some(Hsl { h: 0, s: 100, l: 50 }));
        assert_eq!(hex_to_hsl("#00ff00"), Some(Hsl { h: 120, s: 100, l: 50 }));
        assert_eq!(hex_to_hsl("#0000ff"), Some(Hsl { h: 240, s: 100, l: 50 }));
    }

    #[test]
    fn test_achromatic() {
        assert_eq!(hex_to_hsl("#ffffff"), Some(Hsl { h: 0, s: 0, l: 100 }));
        assert_eq!(hex_to_hsl("#808080"), Some(Hsl { h: 0, s: 0, l: 50 }));
        assert_eq!(hex_to_hsl("#000000"), Some(Hsl { h: 0, s: 0, l: 0 }));
    }

    #[test]
    fn test_css_strings() {
        let picker = ColorPicker::new();
        assert_eq!(picker.rgb().unwrap().css(), "rgb(59, 130, 246)");
        assert_eq!(picker.hsl().unwrap().css(), "hsl(217, 91%, 60%)");
        assert_eq!(picker.hex_display(), "#3B82F6");
    }

    #[test]
    fn test_picker_editing() {
        let mut picker = ColorPicker::new();
        picker.backspace();
        assert_eq!(picker.rgb(), None);

        picker.push('0');
        picker.push('0'); // ignored, field is full
        assert_eq!(picker.hex, "#3b82f0");
        assert_eq!(picker.rgb(), Some(Rgb { r: 59, g: 130, b: 240 }));
    }
}
