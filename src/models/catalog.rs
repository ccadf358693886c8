use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Language used when the requested translation is missing.
pub const FALLBACK_LANGUAGE: &str = "en";

/// Per-language display text, keyed by language code ("en", "hi", ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedName(pub BTreeMap<String, String>);

impl LocalizedName {
    /// Single-language name, mostly for fixtures.
    pub fn new(language: &str, text: &str) -> Self {
        let mut map = BTreeMap::new();
        map.insert(language.to_string(), text.to_string());
        Self(map)
    }

    /// Add or replace a translation.
    pub fn with(mut self, language: &str, text: &str) -> Self {
        self.0.insert(language.to_string(), text.to_string());
        self
    }

    /// Text for `language`, falling back to English and then to any translation.
    pub fn resolve(&self, language: &str) -> &str {
        self.0
            .get(language)
            .or_else(|| self.0.get(FALLBACK_LANGUAGE))
            .or_else(|| self.0.values().next())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Whether any translation equals `text` (case-insensitive).
    pub fn matches(&self, text: &str) -> bool {
        self.0.values().any(|v| v.eq_ignore_ascii_case(text.trim()))
    }
}

/// A purchasable ingredient: `purchase_price` buys `purchase_quantity` of `purchase_unit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasterIngredient {
    pub id: String,
    pub name: LocalizedName,
    pub purchase_quantity: f64,
    pub purchase_unit: String,
    pub purchase_price: f64,
}

/// A cooking item (gas cylinder, vessel hire, ...) priced per single unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasterCookingItem {
    pub id: String,
    pub name: LocalizedName,
    pub unit: String,
    pub unit_price: f64,
}

/// One ingredient of a dish recipe.
///
/// The quantity is per person and expressed in the ingredient's own purchase unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishRecipeLine {
    pub ingredient_id: String,
    pub quantity_per_person: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    #[serde(default)]
    pub name: LocalizedName,
    #[serde(default)]
    pub recipe_lines: Vec<DishRecipeLine>,
}
