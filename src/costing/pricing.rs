use tracing::{debug, warn};

use crate::costing::config::CostingConfig;
use crate::costing::constants::DISPLAY_DECIMALS;
use crate::costing::units::{round_to_precision, same_base_unit, Measure, UnitTable};
use crate::models::{GeneratedOrder, MasterIngredient};
use crate::state::Catalog;

/// Price of one base unit of an ingredient, e.g. rupees per gram.
///
/// `None` when the purchase quantity is not positive or the master's base
/// unit differs from `order_base_unit`.
pub fn price_per_base_unit(
    ingredient: &MasterIngredient,
    order_base_unit: &str,
    units: &UnitTable,
) -> Option<f64> {
    if ingredient.purchase_quantity <= 0.0 {
        warn!(
            "Ingredient '{}' has non-positive purchase quantity {}, pricing at 0",
            ingredient.id, ingredient.purchase_quantity
        );
        return None;
    }

    let purchase_base = units.to_base(ingredient.purchase_quantity, &ingredient.purchase_unit);
    if !same_base_unit(&purchase_base.unit, order_base_unit) {
        warn!(
            "Ingredient '{}' is bought in {} but ordered in {}, pricing at 0",
            ingredient.id, purchase_base.unit, order_base_unit
        );
        return None;
    }

    if purchase_base.quantity <= 0.0 {
        return None;
    }

    Some(ingredient.purchase_price / purchase_base.quantity)
}

/// Total price of an ingredient line given its quantity in base units.
///
/// Both order generation and repricing go through here. A missing master
/// ingredient or an unpriceable line costs 0.
pub fn ingredient_line_price(
    base: &Measure,
    ingredient: Option<&MasterIngredient>,
    units: &UnitTable,
) -> f64 {
    ingredient
        .and_then(|i| price_per_base_unit(i, &base.unit, units))
        .map(|per_unit| round_to_precision(base.quantity * per_unit, DISPLAY_DECIMALS))
        .unwrap_or(0.0)
}

/// Total price of a cooking item line.
pub fn cooking_item_line_price(quantity: f64, unit_price: f64) -> f64 {
    round_to_precision(quantity * unit_price, DISPLAY_DECIMALS)
}

/// Set `total_order_cost` to the sum of all line totals.
pub fn recompute_total(order: &mut GeneratedOrder) {
    order.total_order_cost = round_to_precision(order.line_total(), DISPLAY_DECIMALS);
}

/// Reprice every line of an existing order against current master data.
///
/// Line ids, names and quantities are preserved. Lines whose master entry
/// has been deleted stay in the order at price 0.
pub fn reprice_order(
    order: &GeneratedOrder,
    catalog: &Catalog,
    config: &CostingConfig,
) -> GeneratedOrder {
    let mut repriced = order.clone();
    let mut orphaned = 0;

    for line in &mut repriced.cumulative_ingredients {
        let master = catalog.ingredient(&line.master_ingredient_id);
        if master.is_none() {
            orphaned += 1;
            debug!(
                "Ingredient '{}' missing from catalog, line '{}' priced at 0",
                line.master_ingredient_id, line.id
            );
        }
        let base = config.units.to_base(line.total_quantity, &line.unit);
        line.total_price = ingredient_line_price(&base, master, &config.units);
    }

    for line in &mut repriced.selected_cooking_items {
        match catalog.cooking_item(&line.master_cooking_item_id) {
            Some(master) => line.unit_price = master.unit_price,
            None => {
                orphaned += 1;
                debug!(
                    "Cooking item '{}' missing from catalog, line '{}' priced at 0",
                    line.master_cooking_item_id, line.id
                );
                line.unit_price = 0.0;
            }
        }
        line.total_price = cooking_item_line_price(line.quantity, line.unit_price);
    }

    recompute_total(&mut repriced);
    debug!(
        "Repriced {} lines ({} without master data), total {:.3}",
        repriced.line_count(),
        orphaned,
        repriced.total_order_cost
    );
    repriced
}
