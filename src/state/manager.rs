use std::collections::BTreeMap;

use crate::error::{CateringError, Result};
use crate::models::{CustomerRecord, GeneratedOrder};

/// Key-value record store of customers, keyed by customer id.
pub struct CustomerStore {
    customers: BTreeMap<String, CustomerRecord>,
}

impl CustomerStore {
    /// Create a store from a list of records; on duplicate ids the last wins.
    pub fn new(records: Vec<CustomerRecord>) -> Self {
        let mut map = BTreeMap::new();
        for record in records {
            map.insert(record.key(), record);
        }
        Self { customers: map }
    }

    pub fn get(&self, id: &str) -> Option<&CustomerRecord> {
        self.customers.get(id.trim())
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut CustomerRecord> {
        self.customers.get_mut(id.trim())
    }

    /// Get a customer or fail with `CustomerNotFound`.
    pub fn require(&self, id: &str) -> Result<&CustomerRecord> {
        self.get(id)
            .ok_or_else(|| CateringError::CustomerNotFound(id.to_string()))
    }

    /// Insert or replace a record.
    pub fn upsert(&mut self, record: CustomerRecord) {
        self.customers.insert(record.key(), record);
    }

    /// Remove a customer together with its generated order.
    pub fn remove(&mut self, id: &str) -> Option<CustomerRecord> {
        self.customers.remove(id.trim())
    }

    /// Replace the persisted order of a customer. The whole blob is written.
    pub fn attach_order(&mut self, id: &str, order: GeneratedOrder) -> Result<()> {
        let record = self
            .get_mut(id)
            .ok_or_else(|| CateringError::CustomerNotFound(id.to_string()))?;
        record.generated_order = Some(order);
        Ok(())
    }

    /// Persisted order of a customer, if one was generated.
    pub fn order(&self, id: &str) -> Result<Option<&GeneratedOrder>> {
        Ok(self.require(id)?.generated_order.as_ref())
    }

    /// Customer ids in order.
    pub fn ids(&self) -> Vec<&str> {
        self.customers.keys().map(String::as_str).collect()
    }

    /// Convert state to a list of records for JSON serialization.
    pub fn to_records(&self) -> Vec<CustomerRecord> {
        self.customers.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn sample_records() -> Vec<CustomerRecord> {
        vec![
            CustomerRecord {
                id: "c1".to_string(),
                name: "Patil engagement".to_string(),
                number_of_persons: 80,
                selected_dish_ids: BTreeSet::new(),
                cooking_item_selections: BTreeMap::new(),
                generated_order: None,
            },
            CustomerRecord {
                id: "c2".to_string(),
                name: "Office lunch".to_string(),
                number_of_persons: 25,
                selected_dish_ids: BTreeSet::new(),
                cooking_item_selections: BTreeMap::new(),
                generated_order: Some(GeneratedOrder::default()),
            },
        ]
    }

    #[test]
    fn test_get_and_require() {
        let store = CustomerStore::new(sample_records());
        assert!(store.get("c1").is_some());
        assert!(store.get(" c2 ").is_some());
        assert!(matches!(
            store.require("c9"),
            Err(CateringError::CustomerNotFound(_))
        ));
    }

    #[test]
    fn test_attach_order_replaces_blob() {
        let mut store = CustomerStore::new(sample_records());
        let order = GeneratedOrder {
            total_order_cost: 42.0,
            ..Default::default()
        };
        store.attach_order("c1", order).unwrap();
        assert_eq!(store.order("c1").unwrap().unwrap().total_order_cost, 42.0);

        assert!(store.attach_order("nobody", GeneratedOrder::default()).is_err());
    }

    #[test]
    fn test_remove_drops_order() {
        let mut store = CustomerStore::new(sample_records());
        let removed = store.remove("c2").unwrap();
        assert!(removed.generated_order.is_some());
        assert!(store.get("c2").is_none());
        assert_eq!(store.len(), 1);
    }
}
