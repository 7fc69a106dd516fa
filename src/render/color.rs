//! Background darkness detection.

/// An sRGB color decoded from hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse `#rgb` or `#rrggbb` (the `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        match hex.len() {
            3 => {
                let mut chars = hex.chars();
                let r = chars.next()?.to_digit(16)? as u8;
                let g = chars.next()?.to_digit(16)? as u8;
                let b = chars.next()?.to_digit(16)? as u8;
                Some(Rgb(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
                let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
                let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
                Some(Rgb(r, g, b))
            }
            _ => None,
        }
    }

    /// Relative luminance in `0.0..=1.0`, Rec. 709 weights on raw channels.
    pub fn luminance(self) -> f64 {
        let Rgb(r, g, b) = self;
        (0.2126 * f64::from(r) + 0.7152 * f64::from(g) + 0.0722 * f64::from(b)) / 255.0
    }

    pub fn is_dark(self) -> bool {
        self.luminance() < 0.5
    }
}

/// Whether a background color is dark. Undecodable colors count as light.
pub fn is_dark(color: &str) -> bool {
    match Rgb::from_hex(color) {
        Some(rgb) => rgb.is_dark(),
        None => {
            log::debug!("Cannot decode background color '{}', assuming light", color);
            false
        }
    }
}
