use crate::foundation::error::{ClaimError, ClaimResult};

pub use kurbo::Point;

/// Internal pixel resolution of a drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> ClaimResult<Self> {
        if width == 0 || height == 0 {
            return Err(ClaimError::validation(format!(
                "resolution must be non-zero, got {width}x{height}"
            )));
        }
        if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
            return Err(ClaimError::validation(format!(
                "resolution exceeds {max}x{max}: {width}x{height}",
                max = u16::MAX
            )));
        }
        Ok(Self { width, height })
    }

    pub fn width_u16(self) -> u16 {
        u16::try_from(self.width).unwrap_or(u16::MAX)
    }

    pub fn height_u16(self) -> u16 {
        u16::try_from(self.height).unwrap_or(u16::MAX)
    }

    pub fn byte_len(self) -> usize {
        (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(4)
    }
}

/// On-screen bounding box of a surface, in viewport units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DisplayRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl DisplayRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A rect with a zero, negative or non-finite extent cannot be mapped through.
    pub fn is_degenerate(self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }
}

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BLACK: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(s: &str) -> ClaimResult<Self> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ClaimError::validation(format!("color must start with '#': {s}")))?;
        let nibble = |c: char| -> ClaimResult<u8> {
            c.to_digit(16)
                .map(|d| d as u8)
                .ok_or_else(|| ClaimError::validation(format!("invalid hex color: {s}")))
        };
        let chars: Vec<char> = hex.chars().collect();
        match chars.len() {
            3 => {
                let r = nibble(chars[0])?;
                let g = nibble(chars[1])?;
                let b = nibble(chars[2])?;
                Ok(Self {
                    r: r * 17,
                    g: g * 17,
                    b: b * 17,
                    a: 255,
                })
            }
            6 | 8 => {
                let byte = |i: usize| -> ClaimResult<u8> {
                    Ok(nibble(chars[i])? * 16 + nibble(chars[i + 1])?)
                };
                let a = if chars.len() == 8 { byte(6)? } else { 255 };
                Ok(Self {
                    r: byte(0)?,
                    g: byte(2)?,
                    b: byte(4)?,
                    a,
                })
            }
            _ => Err(ClaimError::validation(format!("invalid hex color: {s}"))),
        }
    }
}

impl Default for Rgba8 {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
