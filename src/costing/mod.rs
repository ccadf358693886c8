pub mod aggregation;
pub mod config;
pub mod constants;
pub mod editor;
pub mod pricing;
pub mod units;

pub use aggregation::{
    compute_cumulative_ingredients, compute_selected_cooking_item_lines, generate_order,
    regenerate, RegenerateMode,
};
pub use config::CostingConfig;
pub use constants::*;
pub use editor::OrderLineEditor;
pub use pricing::{
    cooking_item_line_price, ingredient_line_price, price_per_base_unit, recompute_total,
    reprice_order,
};
pub use units::{round_to_precision, same_base_unit, Measure, UnitConversion, UnitTable};
