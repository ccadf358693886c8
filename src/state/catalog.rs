use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Dish, MasterCookingItem, MasterIngredient};

/// Read-only snapshot of the master catalogs, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    ingredients: HashMap<String, MasterIngredient>,
    cooking_items: HashMap<String, MasterCookingItem>,
    dishes: HashMap<String, Dish>,
}

/// On-disk shape of the catalog file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub ingredients: Vec<MasterIngredient>,
    #[serde(default)]
    pub cooking_items: Vec<MasterCookingItem>,
    #[serde(default)]
    pub dishes: Vec<Dish>,
}

impl Catalog {
    /// Build a catalog; on duplicate ids the last entry wins.
    pub fn new(
        ingredients: Vec<MasterIngredient>,
        cooking_items: Vec<MasterCookingItem>,
        dishes: Vec<Dish>,
    ) -> Self {
        Self {
            ingredients: ingredients.into_iter().map(|i| (i.id.clone(), i)).collect(),
            cooking_items: cooking_items
                .into_iter()
                .map(|c| (c.id.clone(), c))
                .collect(),
            dishes: dishes.into_iter().map(|d| (d.id.clone(), d)).collect(),
        }
    }

    pub fn ingredient(&self, id: &str) -> Option<&MasterIngredient> {
        self.ingredients.get(id)
    }

    pub fn cooking_item(&self, id: &str) -> Option<&MasterCookingItem> {
        self.cooking_items.get(id)
    }

    pub fn dish(&self, id: &str) -> Option<&Dish> {
        self.dishes.get(id)
    }

    /// All ingredients ordered by id.
    pub fn all_ingredients(&self) -> Vec<&MasterIngredient> {
        let mut all: Vec<&MasterIngredient> = self.ingredients.values().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }

    /// All cooking items ordered by id.
    pub fn all_cooking_items(&self) -> Vec<&MasterCookingItem> {
        let mut all: Vec<&MasterCookingItem> = self.cooking_items.values().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }

    /// Remove an ingredient, as happens when master data is deleted upstream.
    pub fn remove_ingredient(&mut self, id: &str) -> Option<MasterIngredient> {
        self.ingredients.remove(id)
    }

    /// Insert or replace an ingredient.
    pub fn upsert_ingredient(&mut self, ingredient: MasterIngredient) {
        self.ingredients.insert(ingredient.id.clone(), ingredient);
    }

    /// Insert or replace a cooking item.
    pub fn upsert_cooking_item(&mut self, item: MasterCookingItem) {
        self.cooking_items.insert(item.id.clone(), item);
    }

    /// Sizes as (ingredients, cooking items, dishes).
    pub fn counts(&self) -> (usize, usize, usize) {
        (
            self.ingredients.len(),
            self.cooking_items.len(),
            self.dishes.len(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty() && self.cooking_items.is_empty() && self.dishes.is_empty()
    }

    pub fn to_file(&self) -> CatalogFile {
        let mut dishes: Vec<Dish> = self.dishes.values().cloned().collect();
        dishes.sort_by(|a, b| a.id.cmp(&b.id));
        CatalogFile {
            ingredients: self.all_ingredients().into_iter().cloned().collect(),
            cooking_items: self.all_cooking_items().into_iter().cloned().collect(),
            dishes,
        }
    }
}

impl From<CatalogFile> for Catalog {
    fn from(file: CatalogFile) -> Self {
        Catalog::new(file.ingredients, file.cooking_items, file.dishes)
    }
}
