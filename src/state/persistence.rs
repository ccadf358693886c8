use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::CustomerRecord;
use crate::state::catalog::{Catalog, CatalogFile};

/// Load the master catalogs from a JSON file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    let file: CatalogFile = serde_json::from_str(&content)?;
    Ok(Catalog::from(file))
}

/// Save the master catalogs to a JSON file.
pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &Catalog) -> Result<()> {
    let json = serde_json::to_string_pretty(&catalog.to_file())?;
    fs::write(path, json)?;
    Ok(())
}

/// Load customer records from a JSON file.
///
/// Deduplicates by id (last occurrence wins).
pub fn load_customers<P: AsRef<Path>>(path: P) -> Result<Vec<CustomerRecord>> {
    let content = fs::read_to_string(path)?;
    let records: Vec<CustomerRecord> = serde_json::from_str(&content)?;

    let mut seen: HashMap<String, CustomerRecord> = HashMap::new();
    for record in records {
        seen.insert(record.key(), record);
    }

    let mut deduped: Vec<CustomerRecord> = seen.into_values().collect();
    deduped.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(deduped)
}

/// Save customer records, including their generated orders, to a JSON file.
pub fn save_customers<P: AsRef<Path>>(path: P, records: &[CustomerRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_catalog() {
        let json = r#"{
            "ingredients": [
                {"id": "rice", "name": {"en": "Rice"}, "purchase_quantity": 1, "purchase_unit": "kg", "purchase_price": 60}
            ],
            "cooking_items": [
                {"id": "gas", "name": {"en": "Gas cylinder"}, "unit": "piece", "unit_price": 950}
            ],
            "dishes": [
                {"id": "pulao", "name": {"en": "Pulao"}, "recipe_lines": [{"ingredient_id": "rice", "quantity_per_person": 0.1}]}
            ]
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.counts(), (1, 1, 1));
        assert_eq!(catalog.dish("pulao").unwrap().recipe_lines.len(), 1);
    }

    #[test]
    fn test_customer_deduplication() {
        let json = r#"[
            {"id": "c1", "name": "First", "number_of_persons": 10},
            {"id": "c1", "name": "Second", "number_of_persons": 20}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let records = load_customers(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Second");
        assert!(records[0].generated_order.is_none());
    }
}
