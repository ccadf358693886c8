use std::collections::HashMap;
use std::sync::LazyLock;

/// Decimal places kept in displayed and persisted quantities and prices.
pub const DISPLAY_DECIMALS: u32 = 3;

/// Base quantity at which grams become kg and ml become liters for display.
pub const DISPLAY_SCALE_THRESHOLD: f64 = 1000.0;

// ─────────────────────────────────────────────────────────────────────────────
// Canonical unit names
// ─────────────────────────────────────────────────────────────────────────────

pub const GRAM: &str = "gram";
pub const KG: &str = "kg";
pub const ML: &str = "ml";
pub const LITERS: &str = "liters";
pub const PIECE: &str = "piece";
pub const LEAVES: &str = "leaves";

/// Default unit vocabulary: unit name to (factor to base, base unit).
///
/// tsp, tbsp and cup are treated as volume even for dry ingredients.
pub static DEFAULT_UNIT_CONVERSIONS: LazyLock<HashMap<&'static str, (f64, &'static str)>> =
    LazyLock::new(|| {
        let mut m = HashMap::new();
        // weight
        m.insert(GRAM, (1.0, GRAM));
        m.insert("grams", (1.0, GRAM));
        m.insert("g", (1.0, GRAM));
        m.insert(KG, (1000.0, GRAM));
        m.insert("kgs", (1000.0, GRAM));
        // volume
        m.insert(ML, (1.0, ML));
        m.insert(LITERS, (1000.0, ML));
        m.insert("liter", (1000.0, ML));
        m.insert("litre", (1000.0, ML));
        m.insert("l", (1000.0, ML));
        m.insert("tsp", (5.0, ML));
        m.insert("tbsp", (15.0, ML));
        m.insert("cup", (240.0, ML));
        // count
        m.insert(PIECE, (1.0, PIECE));
        m.insert("pieces", (1.0, PIECE));
        m.insert("pcs", (1.0, PIECE));
        m.insert(LEAVES, (1.0, LEAVES));
        m.insert("leaf", (1.0, LEAVES));
        m
    });
