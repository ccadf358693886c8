use crate::costing::UnitTable;
use crate::models::GeneratedOrder;

/// Display a generated order as two tables plus the grand total.
pub fn display_order(order: &GeneratedOrder, title: &str) {
    if order.is_empty() {
        println!("{}: no order lines (nothing selected or all references missing).", title);
        return;
    }

    println!();
    println!("=== {} ===", title);

    if !order.cumulative_ingredients.is_empty() {
        println!();
        println!("--- Ingredients ---");

        let name_width = order
            .cumulative_ingredients
            .iter()
            .map(|l| l.display_name.len())
            .max()
            .unwrap_or(10);

        for (i, line) in order.cumulative_ingredients.iter().enumerate() {
            println!(
                "{:>3}. {:<width$} {:>10} {:<7} {:>12.2}   [{}]",
                i + 1,
                line.display_name,
                line.total_quantity,
                line.unit,
                line.total_price,
                line.id,
                width = name_width
            );
        }
    }

    if !order.selected_cooking_items.is_empty() {
        println!();
        println!("--- Cooking items ---");

        let name_width = order
            .selected_cooking_items
            .iter()
            .map(|l| l.display_name.len())
            .max()
            .unwrap_or(10);

        for (i, line) in order.selected_cooking_items.iter().enumerate() {
            println!(
                "{:>3}. {:<width$} {:>6} {:<7} @ {:>9.2} = {:>12.2}   [{}]",
                i + 1,
                line.display_name,
                line.quantity,
                line.unit,
                line.unit_price,
                line.total_price,
                line.id,
                width = name_width
            );
        }
    }

    println!();
    println!("--- Summary ---");
    println!("Ingredient lines: {}", order.cumulative_ingredients.len());
    println!("Cooking item lines: {}", order.selected_cooking_items.len());
    println!("Total order cost: {:.2}", order.total_order_cost);
    println!();
}

/// Display the active unit conversion table.
pub fn display_unit_table(units: &UnitTable) {
    println!();
    println!("=== Units ({} entries) ===", units.len());
    println!();

    for (unit, conversion) in units.entries() {
        println!(
            "  {:<10} x {:<8} -> {}",
            unit, conversion.factor_to_base, conversion.base_unit
        );
    }

    println!();
}
