//! Inventory store with JSON-file persistence.
//!
//! A single in-memory table of item name -> quantity. Mutations that hit an
//! expected absence (unknown item on remove, missing data file on load,
//! malformed add input) are logged and swallowed; lookups and persistence
//! failures are returned to the caller.

pub mod config;
pub mod input;
pub mod persistence;
pub mod report;
pub mod store;

pub use config::{InventoryConfig, DEFAULT_LOW_STOCK_THRESHOLD};
pub use input::parse_add_input;
pub use persistence::{PersistenceError, DEFAULT_DATA_FILE};
pub use report::REPORT_HEADER;
pub use store::InventoryStore;
