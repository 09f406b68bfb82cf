use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::core::{Resolution, Rgba8};
use crate::foundation::error::{ClaimError, ClaimResult};

/// Stroke end style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

/// Stroke corner style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineJoin {
    Miter,
    #[default]
    Round,
    Bevel,
}

/// Pen applied to every stroke on a signature surface.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PenStyle {
    #[serde(with = "hex_color")]
    pub color: Rgba8,
    pub width: f64,
    pub cap: LineCap,
    pub join: LineJoin,
}

impl Default for PenStyle {
    fn default() -> Self {
        Self {
            color: Rgba8::BLACK,
            width: 2.0,
            cap: LineCap::Round,
            join: LineJoin::Round,
        }
    }
}

impl PenStyle {
    pub(crate) fn to_cpu_stroke(self) -> vello_cpu::kurbo::Stroke {
        use vello_cpu::kurbo::{Cap, Join, Stroke};

        let cap = match self.cap {
            LineCap::Butt => Cap::Butt,
            LineCap::Round => Cap::Round,
            LineCap::Square => Cap::Square,
        };
        let join = match self.join {
            LineJoin::Miter => Join::Miter,
            LineJoin::Round => Join::Round,
            LineJoin::Bevel => Join::Bevel,
        };
        Stroke::new(self.width).with_caps(cap).with_join(join)
    }
}

/// How the internal resolution follows the container it is laid out in.
///
/// Width tracks the container minus padding, capped at `max_width`. Height is fixed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SurfaceLayout {
    pub max_width: u32,
    pub height: u32,
    pub container_padding: u32,
}

impl Default for SurfaceLayout {
    fn default() -> Self {
        Self {
            max_width: 600,
            height: 150,
            container_padding: 16,
        }
    }
}

impl SurfaceLayout {
    /// Internal resolution for a container of the given display width.
    pub fn resolution_for(&self, container_width: f64) -> ClaimResult<Resolution> {
        let avail = if container_width.is_finite() {
            (container_width - f64::from(self.container_padding)).floor()
        } else {
            0.0
        };
        let width = avail.clamp(1.0, f64::from(self.max_width.max(1))) as u32;
        Resolution::new(width, self.height)
    }

    /// Resolution used before the first layout pass.
    pub fn initial_resolution(&self) -> ClaimResult<Resolution> {
        Resolution::new(self.max_width, self.height)
    }
}

/// Configuration for a [`crate::SignaturePad`].
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PadConfig {
    pub pen: PenStyle,
    pub layout: SurfaceLayout,
}

impl PadConfig {
    /// Parse a pad config from a JSON string. Missing keys take their defaults.
    pub fn from_json_str(s: &str) -> ClaimResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| ClaimError::serde(format!("parse pad config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a pad config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ClaimResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ClaimError::validation(format!("open pad config '{}': {e}", path.display()))
        })?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| ClaimError::serde(format!("parse pad config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> ClaimResult<()> {
        if !(self.pen.width.is_finite() && self.pen.width > 0.0) {
            return Err(ClaimError::validation("pen width must be > 0"));
        }
        self.layout.initial_resolution()?;
        Ok(())
    }
}

mod hex_color {
    use crate::foundation::core::Rgba8;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(c: &Rgba8, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&format!("#{:02x}{:02x}{:02x}{:02x}", c.r, c.g, c.b, c.a))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Rgba8, D::Error> {
        let s = String::deserialize(d)?;
        Rgba8::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/signature/config.rs"]
mod tests;
