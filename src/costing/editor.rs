use tracing::debug;

use crate::costing::config::CostingConfig;
use crate::error::{CateringError, Result};
use crate::models::order::{new_line_id, require_id, require_positive};
use crate::models::{CumulativeIngredientLine, GeneratedOrder, SelectedCookingItemLine};
use crate::state::Catalog;

/// Applies single manual edits to a generated order.
///
/// Every operation takes the order by reference and returns an edited copy,
/// so a failed edit leaves the caller's order untouched. Prices of touched
/// lines are not updated here; run [`reprice_order`] afterwards.
///
/// [`reprice_order`]: crate::costing::reprice_order
pub struct OrderLineEditor<'a> {
    catalog: &'a Catalog,
    config: &'a CostingConfig,
}

impl<'a> OrderLineEditor<'a> {
    pub fn new(catalog: &'a Catalog, config: &'a CostingConfig) -> Self {
        Self { catalog, config }
    }

    /// Add a quantity of an ingredient, merging into its existing line if any.
    ///
    /// Merging requires both quantities to share a base unit, otherwise the
    /// edit fails with `UnitFamilyMismatch`.
    pub fn add_or_update_ingredient_line(
        &self,
        order: &GeneratedOrder,
        master_ingredient_id: &str,
        quantity: f64,
        unit: &str,
    ) -> Result<GeneratedOrder> {
        require_id("ingredient id", master_ingredient_id)?;
        require_id("unit", unit)?;
        require_positive("quantity", quantity)?;

        let units = &self.config.units;
        let incoming = units.to_base(quantity, unit);
        let mut edited = order.clone();

        match edited
            .cumulative_ingredients
            .iter_mut()
            .find(|l| l.master_ingredient_id == master_ingredient_id)
        {
            Some(line) => {
                let existing = units.to_base(line.total_quantity, &line.unit);
                if !existing.same_unit(&incoming) {
                    return Err(CateringError::UnitFamilyMismatch {
                        existing: existing.unit,
                        incoming: incoming.unit,
                    });
                }

                let merged =
                    units.to_display(existing.quantity + incoming.quantity, &existing.unit);
                debug!(
                    "Merged {} {} into line '{}': now {} {}",
                    quantity, unit, line.id, merged.quantity, merged.unit
                );
                line.total_quantity = merged.quantity;
                line.unit = merged.unit;
            }
            None => {
                let ingredient = self
                    .catalog
                    .ingredient(master_ingredient_id)
                    .ok_or_else(|| {
                        CateringError::IngredientNotFound(master_ingredient_id.to_string())
                    })?;
                let display = units.to_display(incoming.quantity, &incoming.unit);
                let line = CumulativeIngredientLine {
                    id: new_line_id(),
                    master_ingredient_id: ingredient.id.clone(),
                    display_name: ingredient.name.resolve(&self.config.language).to_string(),
                    total_quantity: display.quantity,
                    unit: display.unit,
                    total_price: 0.0,
                };
                debug!("Added ingredient line '{}' for '{}'", line.id, ingredient.id);
                edited.cumulative_ingredients.push(line);
            }
        }

        Ok(edited)
    }

    /// Replace the quantity and unit of one ingredient line.
    pub fn update_ingredient_line_by_id(
        &self,
        order: &GeneratedOrder,
        line_id: &str,
        quantity: f64,
        unit: &str,
    ) -> Result<GeneratedOrder> {
        require_id("line id", line_id)?;
        require_id("unit", unit)?;
        require_positive("quantity", quantity)?;

        let mut edited = order.clone();
        let line = edited
            .cumulative_ingredients
            .iter_mut()
            .find(|l| l.id == line_id)
            .ok_or_else(|| CateringError::LineNotFound(line_id.to_string()))?;

        let display = self.config.units.normalize(quantity, unit);
        line.total_quantity = display.quantity;
        line.unit = display.unit;
        Ok(edited)
    }

    /// Remove one ingredient line.
    pub fn delete_ingredient_line_by_id(
        &self,
        order: &GeneratedOrder,
        line_id: &str,
    ) -> Result<GeneratedOrder> {
        require_id("line id", line_id)?;

        let mut edited = order.clone();
        let before = edited.cumulative_ingredients.len();
        edited.cumulative_ingredients.retain(|l| l.id != line_id);
        if edited.cumulative_ingredients.len() == before {
            return Err(CateringError::LineNotFound(line_id.to_string()));
        }
        Ok(edited)
    }

    /// Add a quantity of a cooking item; an existing line's quantity is increased.
    pub fn add_or_update_cooking_item_line(
        &self,
        order: &GeneratedOrder,
        master_cooking_item_id: &str,
        quantity: f64,
    ) -> Result<GeneratedOrder> {
        require_id("cooking item id", master_cooking_item_id)?;
        require_positive("quantity", quantity)?;

        let mut edited = order.clone();
        match edited
            .selected_cooking_items
            .iter_mut()
            .find(|l| l.master_cooking_item_id == master_cooking_item_id)
        {
            Some(line) => {
                line.quantity += quantity;
                debug!("Cooking item line '{}' now has {}", line.id, line.quantity);
            }
            None => {
                let item = self
                    .catalog
                    .cooking_item(master_cooking_item_id)
                    .ok_or_else(|| {
                        CateringError::CookingItemNotFound(master_cooking_item_id.to_string())
                    })?;
                edited.selected_cooking_items.push(SelectedCookingItemLine {
                    id: new_line_id(),
                    master_cooking_item_id: item.id.clone(),
                    display_name: item.name.resolve(&self.config.language).to_string(),
                    quantity,
                    unit: item.unit.clone(),
                    unit_price: item.unit_price,
                    total_price: 0.0,
                });
            }
        }

        Ok(edited)
    }

    /// Replace the quantity of one cooking item line.
    pub fn update_cooking_item_line_by_id(
        &self,
        order: &GeneratedOrder,
        line_id: &str,
        quantity: f64,
    ) -> Result<GeneratedOrder> {
        require_id("line id", line_id)?;
        require_positive("quantity", quantity)?;

        let mut edited = order.clone();
        let line = edited
            .selected_cooking_items
            .iter_mut()
            .find(|l| l.id == line_id)
            .ok_or_else(|| CateringError::LineNotFound(line_id.to_string()))?;
        line.quantity = quantity;
        Ok(edited)
    }

    /// Remove one cooking item line.
    pub fn delete_cooking_item_line_by_id(
        &self,
        order: &GeneratedOrder,
        line_id: &str,
    ) -> Result<GeneratedOrder> {
        require_id("line id", line_id)?;

        let mut edited = order.clone();
        let before = edited.selected_cooking_items.len();
        edited.selected_cooking_items.retain(|l| l.id != line_id);
        if edited.selected_cooking_items.len() == before {
            return Err(CateringError::LineNotFound(line_id.to_string()));
        }
        Ok(edited)
    }
}
