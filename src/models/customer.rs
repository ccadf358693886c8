use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::order::{CustomerOrderContext, GeneratedOrder};

/// A customer as kept in the record store, with its persisted order blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub number_of_persons: u32,
    #[serde(default)]
    pub selected_dish_ids: BTreeSet<String>,
    #[serde(default)]
    pub cooking_item_selections: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_order: Option<GeneratedOrder>,
}

impl CustomerRecord {
    /// Validated selection state for the engine.
    pub fn order_context(&self) -> Result<CustomerOrderContext> {
        let context = CustomerOrderContext {
            customer_id: self.id.clone(),
            number_of_persons: self.number_of_persons,
            selected_dish_ids: self.selected_dish_ids.clone(),
            cooking_item_selections: self.cooking_item_selections.clone(),
        };
        context.validate()?;
        Ok(context)
    }

    /// Canonical key for lookups.
    pub fn key(&self) -> String {
        self.id.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CateringError;

    #[test]
    fn test_order_context_copies_selections() {
        let record = CustomerRecord {
            id: "c1".to_string(),
            name: "Sharma wedding".to_string(),
            number_of_persons: 120,
            selected_dish_ids: ["paneer".to_string()].into_iter().collect(),
            cooking_item_selections: BTreeMap::new(),
            generated_order: None,
        };

        let ctx = record.order_context().unwrap();
        assert_eq!(ctx.customer_id, "c1");
        assert_eq!(ctx.number_of_persons, 120);
        assert!(ctx.selected_dish_ids.contains("paneer"));
    }

    #[test]
    fn test_order_context_rejects_zero_persons() {
        let record = CustomerRecord {
            id: "c1".to_string(),
            name: String::new(),
            number_of_persons: 0,
            selected_dish_ids: BTreeSet::new(),
            cooking_item_selections: BTreeMap::new(),
            generated_order: None,
        };

        assert!(matches!(
            record.order_context(),
            Err(CateringError::InvalidInput(_))
        ));
    }
}
