use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CateringError, Result};

/// A customer's current selections, the input to order generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerOrderContext {
    pub customer_id: String,
    pub number_of_persons: u32,
    #[serde(default)]
    pub selected_dish_ids: BTreeSet<String>,
    /// Cooking item id to requested quantity.
    #[serde(default)]
    pub cooking_item_selections: BTreeMap<String, f64>,
}

impl CustomerOrderContext {
    /// Reject contexts the engine must never compute on.
    pub fn validate(&self) -> Result<()> {
        require_id("customer id", &self.customer_id)?;

        if self.number_of_persons == 0 {
            return Err(CateringError::InvalidInput(
                "number of persons must be greater than zero".to_string(),
            ));
        }

        for dish_id in &self.selected_dish_ids {
            require_id("dish id", dish_id)?;
        }

        for (item_id, quantity) in &self.cooking_item_selections {
            require_id("cooking item id", item_id)?;
            require_positive("cooking item quantity", *quantity)?;
        }

        Ok(())
    }
}

/// One row of cumulative ingredient need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CumulativeIngredientLine {
    pub id: String,
    pub master_ingredient_id: String,
    pub display_name: String,
    pub total_quantity: f64,
    pub unit: String,
    #[serde(default)]
    pub total_price: f64,
}

/// One row of cooking items ordered directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedCookingItemLine {
    pub id: String,
    pub master_cooking_item_id: String,
    pub display_name: String,
    pub quantity: f64,
    pub unit: String,
    #[serde(default)]
    pub unit_price: f64,
    #[serde(default)]
    pub total_price: f64,
}

/// The order blob persisted on a customer record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedOrder {
    #[serde(default)]
    pub cumulative_ingredients: Vec<CumulativeIngredientLine>,
    #[serde(default)]
    pub selected_cooking_items: Vec<SelectedCookingItemLine>,
    #[serde(default)]
    pub total_order_cost: f64,
}

impl GeneratedOrder {
    pub fn ingredient_line(&self, line_id: &str) -> Option<&CumulativeIngredientLine> {
        self.cumulative_ingredients.iter().find(|l| l.id == line_id)
    }

    pub fn cooking_item_line(&self, line_id: &str) -> Option<&SelectedCookingItemLine> {
        self.selected_cooking_items.iter().find(|l| l.id == line_id)
    }

    /// Sum of every line's total price.
    pub fn line_total(&self) -> f64 {
        let ingredients: f64 = self
            .cumulative_ingredients
            .iter()
            .map(|l| l.total_price)
            .sum();
        let cooking_items: f64 = self
            .selected_cooking_items
            .iter()
            .map(|l| l.total_price)
            .sum();
        ingredients + cooking_items
    }

    pub fn line_count(&self) -> usize {
        self.cumulative_ingredients.len() + self.selected_cooking_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.line_count() == 0
    }
}

/// Fresh identifier for a generated or manually added line.
pub fn new_line_id() -> String {
    Uuid::new_v4().to_string()
}

pub(crate) fn require_id(what: &str, id: &str) -> Result<()> {
    if id.trim().is_empty() {
        return Err(CateringError::InvalidInput(format!("{} must not be empty", what)));
    }
    Ok(())
}

pub(crate) fn require_positive(what: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CateringError::InvalidInput(format!(
            "{} must be a positive number, got {}",
            what, value
        )));
    }
    Ok(())
}
