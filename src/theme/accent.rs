//! Accent color palette.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of accent colors offered in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    #[default]
    Blue,
    Red,
    Green,
    Purple,
}

impl AccentColor {
    pub const ALL: [AccentColor; 4] = [
        AccentColor::Blue,
        AccentColor::Red,
        AccentColor::Green,
        AccentColor::Purple,
    ];

    /// Name as stored under the `neonColor` key.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccentColor::Blue => "blue",
            AccentColor::Red => "red",
            AccentColor::Green => "green",
            AccentColor::Purple => "purple",
        }
    }

    pub fn primary_hex(&self) -> &'static str {
        match self {
            AccentColor::Blue => "#3b82f6",
            AccentColor::Red => "#ef4444",
            AccentColor::Green => "#22c55e",
            AccentColor::Purple => "#a855f7",
        }
    }

    pub fn secondary_hex(&self) -> &'static str {
        match self {
            AccentColor::Blue => "#60a5fa",
            AccentColor::Red => "#f87171",
            AccentColor::Green => "#4ade80",
            AccentColor::Purple => "#c084fc",
        }
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a name is not one of the palette colors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown accent color '{0}' (expected blue, red, green or purple)")]
pub struct UnknownAccent(pub String);

impl FromStr for AccentColor {
    type Err = UnknownAccent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blue" => Ok(AccentColor::Blue),
            "red" => Ok(AccentColor::Red),
            "green" => Ok(AccentColor::Green),
            "purple" => Ok(AccentColor::Purple),
            _ => Err(UnknownAccent(s.to_string())),
        }
    }
}

/// Convert `#rrggbb` (leading `#` optional, case-insensitive) into a
/// comma-joined decimal triple such as `59,130,246`.
pub fn hex_to_rgb(hex: &str) -> Option<String> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(format!("{},{},{}", channel(0)?, channel(2)?, channel(4)?))
}
