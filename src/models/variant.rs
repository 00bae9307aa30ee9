//! Sprite variants a team entry can be drawn with.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three renderings PokéAPI publishes for a creature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Standard front sprite
    #[default]
    #[serde(alias = "front_default")]
    Default,
    /// Shiny palette front sprite
    #[serde(alias = "front_shiny")]
    Shiny,
    /// High-resolution official artwork
    #[serde(alias = "official-artwork")]
    Artwork,
}

impl Variant {
    /// Every variant, in load order.
    pub const ALL: [Variant; 3] = [Variant::Default, Variant::Shiny, Variant::Artwork];

    /// Parse a variant from string
    pub fn from_str(s: &str) -> Option<Variant> {
        match s.trim().to_lowercase().as_str() {
            "default" | "front_default" => Some(Variant::Default),
            "shiny" | "front_shiny" => Some(Variant::Shiny),
            "artwork" | "official-artwork" => Some(Variant::Artwork),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Default => "default",
            Variant::Shiny => "shiny",
            Variant::Artwork => "artwork",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_accepts_legacy_names() {
        assert_eq!(Variant::from_str("front_shiny"), Some(Variant::Shiny));
        assert_eq!(Variant::from_str("official-artwork"), Some(Variant::Artwork));
        assert_eq!(Variant::from_str("Default"), Some(Variant::Default));
        assert_eq!(Variant::from_str("back_default"), None);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Variant::Artwork).unwrap();
        assert_eq!(json, "\"artwork\"");
        let parsed: Variant = serde_json::from_str("\"front_shiny\"").unwrap();
        assert_eq!(parsed, Variant::Shiny);
    }
}
