use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::costing::constants::*;
use crate::error::Result;

/// How one unit maps onto its base unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitConversion {
    pub factor_to_base: f64,
    pub base_unit: String,
}

/// A quantity paired with the unit it is expressed in.
#[derive(Debug, Clone, PartialEq)]
pub struct Measure {
    pub quantity: f64,
    pub unit: String,
}

impl Measure {
    pub fn new(quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            quantity,
            unit: unit.into(),
        }
    }

    /// Whether two base measures can be summed.
    pub fn same_unit(&self, other: &Measure) -> bool {
        same_base_unit(&self.unit, &other.unit)
    }
}

/// Case-insensitive comparison of unit names.
pub fn same_base_unit(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

/// Round half away from zero to `decimals` places.
pub fn round_to_precision(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Unit name to base-unit conversion, keyed by lowercase unit name.
///
/// Starts from the built-in vocabulary; callers may add or override entries.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitTable {
    conversions: BTreeMap<String, UnitConversion>,
}

impl Default for UnitTable {
    fn default() -> Self {
        let conversions = DEFAULT_UNIT_CONVERSIONS
            .iter()
            .map(|(name, (factor, base))| {
                (
                    name.to_string(),
                    UnitConversion {
                        factor_to_base: *factor,
                        base_unit: base.to_string(),
                    },
                )
            })
            .collect();
        Self { conversions }
    }
}

impl UnitTable {
    /// Add or replace a mapping.
    pub fn with_unit(mut self, unit: &str, factor_to_base: f64, base_unit: &str) -> Self {
        self.insert(
            unit,
            UnitConversion {
                factor_to_base,
                base_unit: base_unit.trim().to_lowercase(),
            },
        );
        self
    }

    pub fn insert(&mut self, unit: &str, conversion: UnitConversion) {
        self.conversions.insert(unit_key(unit), conversion);
    }

    /// Load extra mappings from a JSON object and merge them over the defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let extra: BTreeMap<String, UnitConversion> = serde_json::from_str(&content)?;

        let mut table = Self::default();
        for (unit, conversion) in extra {
            table.insert(&unit, conversion);
        }
        Ok(table)
    }

    /// Conversion for a unit name (case-insensitive).
    pub fn lookup(&self, unit: &str) -> Option<&UnitConversion> {
        self.conversions.get(&unit_key(unit))
    }

    /// All mappings, ordered by unit name.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &UnitConversion)> {
        self.conversions.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.conversions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversions.is_empty()
    }

    /// Convert a quantity into its base unit.
    ///
    /// Unknown units are their own base: the input comes back unchanged.
    /// No rounding happens here.
    pub fn to_base(&self, quantity: f64, unit: &str) -> Measure {
        match self.lookup(unit) {
            Some(conversion) => Measure::new(
                quantity * conversion.factor_to_base,
                conversion.base_unit.clone(),
            ),
            None => {
                trace!("Unrecognized unit '{}', treating it as its own base", unit);
                Measure::new(quantity, unit)
            }
        }
    }

    /// Scale a base quantity into a human-sized display quantity.
    ///
    /// Grams and ml at or above 1000 become kg and liters. Everything is
    /// rounded to [`DISPLAY_DECIMALS`].
    pub fn to_display(&self, base_quantity: f64, base_unit: &str) -> Measure {
        let rounded = round_to_precision(base_quantity, DISPLAY_DECIMALS);
        let scaled_unit = if base_unit.eq_ignore_ascii_case(GRAM) {
            Some(KG)
        } else if base_unit.eq_ignore_ascii_case(ML) {
            Some(LITERS)
        } else {
            None
        };

        match scaled_unit {
            Some(unit) if rounded >= DISPLAY_SCALE_THRESHOLD => Measure::new(
                round_to_precision(base_quantity / DISPLAY_SCALE_THRESHOLD, DISPLAY_DECIMALS),
                unit,
            ),
            Some(_) => Measure::new(rounded, base_unit.to_lowercase()),
            None => Measure::new(rounded, base_unit),
        }
    }

    /// `to_base` followed by `to_display`.
    pub fn normalize(&self, quantity: f64, unit: &str) -> Measure {
        let base = self.to_base(quantity, unit);
        self.to_display(base.quantity, &base.unit)
    }
}

fn unit_key(unit: &str) -> String {
    unit.trim().to_lowercase()
}
