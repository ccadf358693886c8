use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, warn};

use crate::costing::config::CostingConfig;
use crate::costing::pricing::{
    cooking_item_line_price, ingredient_line_price, recompute_total, reprice_order,
};
use crate::error::Result;
use crate::models::order::{new_line_id, require_id, require_positive};
use crate::models::{
    CumulativeIngredientLine, CustomerOrderContext, GeneratedOrder, SelectedCookingItemLine,
};
use crate::state::Catalog;

/// How to rebuild a customer's order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegenerateMode {
    /// Discard the existing order and aggregate from the current selections.
    #[default]
    Full,
    /// Keep existing lines and only refresh their prices.
    Reprice,
}

/// Aggregate the ingredient needs of the selected dishes for a party.
///
/// Quantities are summed per ingredient in its purchase unit, then converted
/// to base units once. Dishes or ingredients missing from the catalog are
/// skipped. Lines come out ordered by master ingredient id.
pub fn compute_cumulative_ingredients<I, S>(
    selected_dish_ids: I,
    number_of_persons: u32,
    catalog: &Catalog,
    config: &CostingConfig,
) -> Result<Vec<CumulativeIngredientLine>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    require_positive("number of persons", number_of_persons as f64)?;

    let dish_ids: BTreeSet<String> = selected_dish_ids
        .into_iter()
        .map(|id| id.as_ref().to_string())
        .collect();
    for id in &dish_ids {
        require_id("dish id", id)?;
    }

    let persons = number_of_persons as f64;
    // Native purchase-unit totals per ingredient id
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();

    for dish_id in &dish_ids {
        let Some(dish) = catalog.dish(dish_id) else {
            debug!("Dish '{}' missing from catalog, skipping", dish_id);
            continue;
        };

        for recipe_line in &dish.recipe_lines {
            if catalog.ingredient(&recipe_line.ingredient_id).is_none() {
                debug!(
                    "Ingredient '{}' of dish '{}' missing from catalog, skipping",
                    recipe_line.ingredient_id, dish_id
                );
                continue;
            }

            let per_person = recipe_line.quantity_per_person;
            if !per_person.is_finite() || per_person <= 0.0 {
                warn!(
                    "Dish '{}' lists ingredient '{}' with quantity {}, skipping",
                    dish_id, recipe_line.ingredient_id, per_person
                );
                continue;
            }

            *totals.entry(recipe_line.ingredient_id.as_str()).or_insert(0.0) +=
                per_person * persons;
        }
    }

    let lines = totals
        .into_iter()
        .filter_map(|(ingredient_id, native_total)| {
            let ingredient = catalog.ingredient(ingredient_id)?;
            let base = config
                .units
                .to_base(native_total, &ingredient.purchase_unit);
            let total_price = ingredient_line_price(&base, Some(ingredient), &config.units);
            let display = config.units.to_display(base.quantity, &base.unit);

            Some(CumulativeIngredientLine {
                id: new_line_id(),
                master_ingredient_id: ingredient.id.clone(),
                display_name: ingredient.name.resolve(&config.language).to_string(),
                total_quantity: display.quantity,
                unit: display.unit,
                total_price,
            })
        })
        .collect();

    Ok(lines)
}

/// Build cooking item lines from direct selections.
///
/// Units and prices come from the master item verbatim; items missing from
/// the catalog are skipped.
pub fn compute_selected_cooking_item_lines(
    selections: &BTreeMap<String, f64>,
    catalog: &Catalog,
    config: &CostingConfig,
) -> Result<Vec<SelectedCookingItemLine>> {
    let mut lines = Vec::with_capacity(selections.len());

    for (item_id, quantity) in selections {
        require_id("cooking item id", item_id)?;
        require_positive("cooking item quantity", *quantity)?;

        let Some(item) = catalog.cooking_item(item_id) else {
            debug!("Cooking item '{}' missing from catalog, skipping", item_id);
            continue;
        };

        lines.push(SelectedCookingItemLine {
            id: new_line_id(),
            master_cooking_item_id: item.id.clone(),
            display_name: item.name.resolve(&config.language).to_string(),
            quantity: *quantity,
            unit: item.unit.clone(),
            unit_price: item.unit_price,
            total_price: cooking_item_line_price(*quantity, item.unit_price),
        });
    }

    Ok(lines)
}

/// Generate a complete order from a customer's current selections.
pub fn generate_order(
    context: &CustomerOrderContext,
    catalog: &Catalog,
    config: &CostingConfig,
) -> Result<GeneratedOrder> {
    context.validate()?;

    let cumulative_ingredients = compute_cumulative_ingredients(
        &context.selected_dish_ids,
        context.number_of_persons,
        catalog,
        config,
    )?;
    let selected_cooking_items =
        compute_selected_cooking_item_lines(&context.cooking_item_selections, catalog, config)?;

    let mut order = GeneratedOrder {
        cumulative_ingredients,
        selected_cooking_items,
        total_order_cost: 0.0,
    };
    recompute_total(&mut order);

    debug!(
        "Generated order for '{}': {} ingredient lines, {} cooking item lines, total {:.3}",
        context.customer_id,
        order.cumulative_ingredients.len(),
        order.selected_cooking_items.len(),
        order.total_order_cost
    );

    Ok(order)
}

/// Rebuild a customer's order, either from scratch or by repricing the existing one.
///
/// `Reprice` without an existing order falls back to a full generation.
pub fn regenerate(
    existing: Option<&GeneratedOrder>,
    context: &CustomerOrderContext,
    catalog: &Catalog,
    config: &CostingConfig,
    mode: RegenerateMode,
) -> Result<GeneratedOrder> {
    match (mode, existing) {
        (RegenerateMode::Reprice, Some(order)) => {
            context.validate()?;
            Ok(reprice_order(order, catalog, config))
        }
        _ => generate_order(context, catalog, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CateringError;
    use crate::models::{Dish, DishRecipeLine, LocalizedName, MasterCookingItem, MasterIngredient};

    fn ingredient(id: &str, qty: f64, unit: &str, price: f64) -> MasterIngredient {
        MasterIngredient {
            id: id.to_string(),
            name: LocalizedName::new("en", id).with("hi", &format!("{}-hi", id)),
            purchase_quantity: qty,
            purchase_unit: unit.to_string(),
            purchase_price: price,
        }
    }

    fn dish(id: &str, lines: &[(&str, f64)]) -> Dish {
        Dish {
            id: id.to_string(),
            name: LocalizedName::new("en", id),
            recipe_lines: lines
                .iter()
                .map(|(ingredient_id, qty)| DishRecipeLine {
                    ingredient_id: ingredient_id.to_string(),
                    quantity_per_person: *qty,
                })
                .collect(),
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog::new(
            vec![
                ingredient("oil", 1.0, "liters", 150.0),
                ingredient("rice", 1.0, "kg", 60.0),
            ],
            vec![MasterCookingItem {
                id: "gas".to_string(),
                name: LocalizedName::new("en", "Gas cylinder"),
                unit: "piece".to_string(),
                unit_price: 950.0,
            }],
            vec![
                dish("pulao", &[("rice", 0.1), ("oil", 0.01)]),
                dish("jeera-rice", &[("rice", 0.08), ("ghost", 1.0)]),
            ],
        )
    }

    #[test]
    fn test_shared_ingredient_sums_into_one_line() {
        let catalog = sample_catalog();
        let lines = compute_cumulative_ingredients(
            ["pulao", "jeera-rice"],
            100,
            &catalog,
            &CostingConfig::default(),
        )
        .unwrap();

        assert_eq!(lines.len(), 2);
        let rice = lines.iter().find(|l| l.master_ingredient_id == "rice").unwrap();
        // (0.1 + 0.08) kg * 100 = 18 kg
        assert!((rice.total_quantity - 18.0).abs() < 1e-9);
        assert_eq!(rice.unit, "kg");
        assert!((rice.total_price - 1080.0).abs() < 1e-6);

        let oil = lines.iter().find(|l| l.master_ingredient_id == "oil").unwrap();
        assert!((oil.total_quantity - 1.0).abs() < 1e-9);
        assert_eq!(oil.unit, "liters");
        assert!((oil.total_price - 150.0).abs() < 1e-6);
    }

    #[test]
    fn test_lines_are_ordered_by_ingredient_id() {
        let catalog = sample_catalog();
        let lines =
            compute_cumulative_ingredients(["pulao"], 10, &catalog, &CostingConfig::default())
                .unwrap();
        let ids: Vec<&str> = lines
            .iter()
            .map(|l| l.master_ingredient_id.as_str())
            .collect();
        assert_eq!(ids, vec!["oil", "rice"]);
    }

    #[test]
    fn test_missing_dish_is_skipped() {
        let catalog = sample_catalog();
        let lines = compute_cumulative_ingredients(
            ["no-such-dish"],
            10,
            &catalog,
            &CostingConfig::default(),
        )
        .unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_zero_persons_rejected() {
        let catalog = sample_catalog();
        let result =
            compute_cumulative_ingredients(["pulao"], 0, &catalog, &CostingConfig::default());
        assert!(matches!(result, Err(CateringError::InvalidInput(_))));
    }

    #[test]
    fn test_display_name_uses_configured_language() {
        let catalog = sample_catalog();
        let config = CostingConfig::default().with_language("hi");
        let lines = compute_cumulative_ingredients(["pulao"], 1, &catalog, &config).unwrap();
        assert!(lines.iter().any(|l| l.display_name == "rice-hi"));
    }

    #[test]
    fn test_cooking_items_skip_missing_and_price_rest() {
        let catalog = sample_catalog();
        let selections: BTreeMap<String, f64> =
            [("gas".to_string(), 2.0), ("tandoor".to_string(), 1.0)]
                .into_iter()
                .collect();

        let lines =
            compute_selected_cooking_item_lines(&selections, &catalog, &CostingConfig::default())
                .unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].unit, "piece");
        assert_eq!(lines[0].unit_price, 950.0);
        assert!((lines[0].total_price - 1900.0).abs() < 1e-9);
    }

    #[test]
    fn test_cooking_item_zero_quantity_rejected() {
        let catalog = sample_catalog();
        let selections: BTreeMap<String, f64> = [("gas".to_string(), 0.0)].into_iter().collect();
        let result =
            compute_selected_cooking_item_lines(&selections, &catalog, &CostingConfig::default());
        assert!(matches!(result, Err(CateringError::InvalidInput(_))));
    }

    #[test]
    fn test_generate_order_totals() {
        let catalog = sample_catalog();
        let context = CustomerOrderContext {
            customer_id: "c1".to_string(),
            number_of_persons: 100,
            selected_dish_ids: ["pulao".to_string()].into_iter().collect(),
            cooking_item_selections: [("gas".to_string(), 1.0)].into_iter().collect(),
        };

        let order = generate_order(&context, &catalog, &CostingConfig::default()).unwrap();
        // rice 10 kg = 600, oil 1 liter = 150, gas = 950
        assert!((order.total_order_cost - 1700.0).abs() < 1e-6);
        assert!((order.total_order_cost - order.line_total()).abs() < 1e-9);
    }

    #[test]
    fn test_regenerate_reprice_keeps_line_ids() {
        let mut catalog = sample_catalog();
        let context = CustomerOrderContext {
            customer_id: "c1".to_string(),
            number_of_persons: 10,
            selected_dish_ids: ["pulao".to_string()].into_iter().collect(),
            cooking_item_selections: BTreeMap::new(),
        };
        let config = CostingConfig::default();
        let first = generate_order(&context, &catalog, &config).unwrap();

        catalog.upsert_ingredient(ingredient("rice", 1.0, "kg", 80.0));
        let repriced = regenerate(
            Some(&first),
            &context,
            &catalog,
            &config,
            RegenerateMode::Reprice,
        )
        .unwrap();
        let full = regenerate(Some(&first), &context, &catalog, &config, RegenerateMode::Full)
            .unwrap();

        let first_ids: Vec<&str> = first
            .cumulative_ingredients
            .iter()
            .map(|l| l.id.as_str())
            .collect();
        let repriced_ids: Vec<&str> = repriced
            .cumulative_ingredients
            .iter()
            .map(|l| l.id.as_str())
            .collect();
        assert_eq!(first_ids, repriced_ids);
        assert_ne!(
            full.cumulative_ingredients[0].id,
            first.cumulative_ingredients[0].id
        );
        assert!((repriced.total_order_cost - full.total_order_cost).abs() < 1e-6);
    }

    #[test]
    fn test_regenerate_reprice_without_existing_generates() {
        let catalog = sample_catalog();
        let context = CustomerOrderContext {
            customer_id: "c1".to_string(),
            number_of_persons: 10,
            selected_dish_ids: ["pulao".to_string()].into_iter().collect(),
            cooking_item_selections: BTreeMap::new(),
        };
        let order = regenerate(
            None,
            &context,
            &catalog,
            &CostingConfig::default(),
            RegenerateMode::Reprice,
        )
        .unwrap();
        assert_eq!(order.cumulative_ingredients.len(), 2);
    }
}
