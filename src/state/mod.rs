mod catalog;
mod manager;
mod persistence;

pub use catalog::{Catalog, CatalogFile};
pub use manager::CustomerStore;
pub use persistence::{load_catalog, load_customers, save_catalog, save_customers};
