//! Inventory configuration.

use std::path::PathBuf;

use serde::Deserialize;

use crate::persistence::DEFAULT_DATA_FILE;

/// Items strictly below this quantity are reported as low stock.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// Where the table is persisted and what counts as low stock.
///
/// Deserializable so it can be embedded in a caller's own config file; missing
/// fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    pub data_path: PathBuf,
    pub low_stock_threshold: i64,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl InventoryConfig {
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    pub fn with_low_stock_threshold(mut self, threshold: i64) -> Self {
        self.low_stock_threshold = threshold;
        self
    }
}
