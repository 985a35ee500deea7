//! Brand color parsing and shade derivation.

use serde::Serialize;

use crate::error::ColorError;

pub const DEFAULT_PRIMARY_COLOR: &str = "#4f46e5";
pub const DEFAULT_SECONDARY_COLOR: &str = "#10b981";

/// Shift applied to the primary color for hover states.
const HOVER_SHIFT_PERCENT: f32 = -20.0;
/// Shift applied to the secondary color for tinted backgrounds.
const LIGHT_SHIFT_PERCENT: f32 = 40.0;

#[derive(Debug, Clone, Copy)]
struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

impl Rgb {
    fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Lightens (positive percent) or darkens (negative percent) every
    /// channel by `round(2.55 * percent)`, clamped to the byte range.
    fn shift(self, percent: f32) -> Rgb {
        let delta = (2.55 * percent).round() as i32;
        let adjust = |channel: u8| (i32::from(channel) + delta).clamp(0, 255) as u8;
        Rgb::new(adjust(self.r), adjust(self.g), adjust(self.b))
    }
}

/// Derives a shade of a `#rrggbb` color. Percent is roughly in [-100, 100];
/// negative values darken, positive values lighten.
pub fn derive_shade(color: &str, percent: f32) -> Result<String, ColorError> {
    Ok(parse_hex(color)?.shift(percent).to_hex())
}

fn parse_hex(input: &str) -> Result<Rgb, ColorError> {
    let value = input.trim();
    let hex = value.strip_prefix('#').unwrap_or(value);
    if hex.len() != 6 || !hex.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidFormat(input.to_string()));
    }
    let parsed =
        u32::from_str_radix(hex, 16).map_err(|_| ColorError::InvalidFormat(input.to_string()))?;
    Ok(Rgb::new(
        ((parsed >> 16) & 0xFF) as u8,
        ((parsed >> 8) & 0xFF) as u8,
        (parsed & 0xFF) as u8,
    ))
}

/// The four color tokens every generated document defines as CSS custom
/// properties.
#[derive(Debug, Clone, Serialize)]
pub struct Palette {
    pub primary: String,
    pub primary_hover: String,
    pub secondary: String,
    pub secondary_light: String,
}

impl Palette {
    pub fn resolve(primary: &str, secondary: &str) -> Result<Self, ColorError> {
        let primary = parse_hex(primary)?;
        let secondary = parse_hex(secondary)?;
        Ok(Self {
            primary: primary.to_hex(),
            primary_hover: primary.shift(HOVER_SHIFT_PERCENT).to_hex(),
            secondary: secondary.to_hex(),
            secondary_light: secondary.shift(LIGHT_SHIFT_PERCENT).to_hex(),
        })
    }
}
