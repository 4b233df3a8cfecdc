// Data core for the restaurant hygiene finder: XML ingestion, filtering and
// the canonical dataset store. The rendering layer consumes the types
// exported here as plain data.

pub mod data;
pub mod fetch;
pub mod filter;
pub mod ingest;
pub mod model;
pub mod store;

// Re-export key types for convenience
pub use data::builtin_restaurants;
pub use fetch::load_document;
pub use filter::{apply_filters, distinct_cuisines, distinct_price_ranges};
pub use ingest::{parse_document, IngestError};
pub use model::{FilterOptions, HygieneBand, Restaurant, Review};
pub use store::RestaurantStore;
