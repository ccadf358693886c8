pub mod catalog;
pub mod customer;
pub mod order;

pub use catalog::{Dish, DishRecipeLine, LocalizedName, MasterCookingItem, MasterIngredient};
pub use customer::CustomerRecord;
pub use order::{
    CumulativeIngredientLine, CustomerOrderContext, GeneratedOrder, SelectedCookingItemLine,
};
