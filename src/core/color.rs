//! Color values and conversions shared by both rendering modes.
//!
//! The 2D canvas mode stores colors as `#rrggbb` strings on the element; the
//! 3D mode stores unit-range channels on a material. Everything here round
//! trips between the two without referencing platform APIs.

use glam::Vec3;

/// RGB color with channels in the \[0, 1\] range.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from byte channels (e.g. a parsed hex string).
    pub fn from_bytes(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Parse a `#rrggbb` (or bare `rrggbb`) hex string. Returns `None` for
    /// anything else; malformed colors are skipped by callers rather than
    /// surfaced as errors.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self::from_bytes(r, g, b))
    }

    /// Byte channels, rounded and clamped.
    pub fn to_bytes(self) -> [u8; 3] {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [byte(self.r), byte(self.g), byte(self.b)]
    }

    /// Lowercase `#rrggbb` string.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.r, self.g, self.b)
    }

    pub fn from_vec3(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    /// Per-channel linear interpolation; `u` = 0 yields `self`.
    pub fn lerp(self, other: Rgb, u: f32) -> Rgb {
        Self::from_vec3(self.to_vec3().lerp(other.to_vec3(), u))
    }
}
