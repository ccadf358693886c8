use crate::costing::units::UnitTable;
use crate::models::catalog::FALLBACK_LANGUAGE;

/// Settings passed explicitly into every engine call.
#[derive(Debug, Clone)]
pub struct CostingConfig {
    pub units: UnitTable,
    /// Language used for line display names.
    pub language: String,
}

impl Default for CostingConfig {
    fn default() -> Self {
        Self {
            units: UnitTable::default(),
            language: FALLBACK_LANGUAGE.to_string(),
        }
    }
}

impl CostingConfig {
    pub fn with_language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }
}
