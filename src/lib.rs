pub mod cli;
pub mod costing;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;

pub use costing::{generate_order, reprice_order, CostingConfig, OrderLineEditor, UnitTable};
pub use error::{CateringError, Result};
pub use models::{CustomerOrderContext, GeneratedOrder};
pub use state::Catalog;
