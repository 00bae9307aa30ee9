//! Team entry types resolved from the data service.

use serde::{Deserialize, Serialize};

use super::variant::Variant;

/// Sprite URLs for each variant; any of them may be missing upstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpriteUrls {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub default: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub shiny: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub artwork: Option<String>,
}

impl SpriteUrls {
    /// URL for the given variant, if the record has one.
    pub fn url(&self, variant: Variant) -> Option<&str> {
        match variant {
            Variant::Default => self.default.as_deref(),
            Variant::Shiny => self.shiny.as_deref(),
            Variant::Artwork => self.artwork.as_deref(),
        }
    }
}

/// One creature slot in the team.
///
/// Entries are created from a successful repository lookup and never change
/// afterwards. `id` and `name` (case-insensitive) identify the entry within a
/// roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamEntry {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub sprites: SpriteUrls,
    /// Type names in slot order, e.g. `["grass", "poison"]`
    #[serde(default)]
    pub types: Vec<String>,
}

impl TeamEntry {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self { id, name: name.into(), sprites: SpriteUrls::default(), types: Vec::new() }
    }

    /// Name with the first letter upper-cased, for user-facing messages.
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Whether `key` names this entry: a case-insensitive name or the numeric id.
    pub fn matches_key(&self, key: &str) -> bool {
        let key = key.trim();
        self.name.eq_ignore_ascii_case(key) || key.parse::<u32>().is_ok_and(|id| id == self.id)
    }
}
