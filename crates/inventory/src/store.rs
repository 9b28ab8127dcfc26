use std::io::{self, Write};
use std::path::Path;

use chrono::Local;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use stockroom_core::{DomainError, DomainResult, ItemName};

use crate::config::DEFAULT_LOW_STOCK_THRESHOLD;
use crate::input::parse_add_input;
use crate::persistence::{self, PersistenceError};
use crate::report;

/// In-memory inventory table: item name -> quantity.
///
/// Entries iterate in insertion order. Removing stock deletes an entry once its
/// quantity reaches zero or below; adding never deletes.
///
/// The store is a plain owned value. Mutation takes `&mut self`, so callers
/// sharing one store between threads wrap it in a lock themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InventoryStore {
    items: IndexMap<ItemName, i64>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from `(name, quantity)` pairs, summing duplicate names.
    pub fn from_entries<I, N>(entries: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = (N, i64)>,
        N: Into<String>,
    {
        let mut items: IndexMap<ItemName, i64> = IndexMap::new();
        for (name, quantity) in entries {
            let name = ItemName::parse(name)?;
            let slot = items.entry(name).or_insert(0);
            *slot = slot
                .checked_add(quantity)
                .ok_or_else(|| DomainError::invariant("quantity overflow"))?;
        }
        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemName, &i64)> + '_ {
        self.items.iter()
    }

    /// Add `quantity` of `name`, creating the entry if needed.
    ///
    /// Invalid input (blank name, overflow) is logged at warn level and
    /// ignored. On success a timestamped line is pushed onto `log` when one is
    /// supplied.
    pub fn add(&mut self, name: &str, quantity: i64, log: Option<&mut Vec<String>>) {
        let name = match ItemName::parse(name) {
            Ok(name) => name,
            Err(err) => {
                tracing::warn!("Invalid input types for add: item={name:?}, qty={quantity} ({err})");
                return;
            }
        };
        self.apply_add(name, quantity, log);
    }

    /// Loosely typed variant of [`add`](Self::add) for untyped input.
    ///
    /// Anything other than a string name and an integer quantity is logged at
    /// warn level and ignored without touching the table.
    pub fn add_value(&mut self, name: &JsonValue, quantity: &JsonValue, log: Option<&mut Vec<String>>) {
        match parse_add_input(name, quantity) {
            Ok((name, quantity)) => self.apply_add(name, quantity, log),
            Err(err) => {
                tracing::warn!("Invalid input types for add: item={name}, qty={quantity} ({err})");
            }
        }
    }

    fn apply_add(&mut self, name: ItemName, quantity: i64, log: Option<&mut Vec<String>>) {
        let current = self.items.get(&name).copied().unwrap_or(0);
        let Some(updated) = current.checked_add(quantity) else {
            tracing::warn!("Rejected add of {quantity} to {name}: quantity overflow");
            return;
        };

        if let Some(log) = log {
            log.push(format!(
                "{}: Added {quantity} of {name}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.6f")
            ));
        }
        tracing::info!("Added {quantity} of {name}");
        self.items.insert(name, updated);
    }

    /// Take `quantity` of `name` out of stock.
    ///
    /// The entry is deleted once it reaches zero or below. Removing an item
    /// that is not tracked logs a warning and leaves the table unchanged.
    pub fn remove(&mut self, name: &str, quantity: i64) {
        let Some(current) = self.items.get_mut(name) else {
            tracing::warn!("Attempted to remove non-existent item: {name}");
            return;
        };

        *current = current.saturating_sub(quantity);
        if *current <= 0 {
            self.items.shift_remove(name);
        }
        tracing::info!("Removed {quantity} of {name}");
    }

    /// Current quantity of `name`.
    pub fn get_quantity(&self, name: &str) -> DomainResult<i64> {
        self.items
            .get(name)
            .copied()
            .ok_or_else(|| DomainError::not_found(name))
    }

    /// Names whose quantity is strictly below `threshold`, in table order.
    pub fn low_stock(&self, threshold: i64) -> Vec<String> {
        self.items
            .iter()
            .filter(|(_, quantity)| **quantity < threshold)
            .map(|(name, _)| name.to_string())
            .collect()
    }

    /// [`low_stock`](Self::low_stock) with the default threshold of 5.
    pub fn low_stock_default(&self) -> Vec<String> {
        self.low_stock(DEFAULT_LOW_STOCK_THRESHOLD)
    }

    /// Overwrite `path` with the whole table as a JSON object.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
        persistence::write_table(path.as_ref(), &self.items)?;
        tracing::info!("Data saved successfully.");
        Ok(())
    }

    /// Replace the table with the contents of `path`.
    ///
    /// A missing file empties the table and logs a warning. Any other failure
    /// is returned and leaves the table as it was.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
        match persistence::read_table(path.as_ref())? {
            Some(items) => {
                self.items = items;
                tracing::info!("Data loaded successfully.");
            }
            None => {
                self.items.clear();
                tracing::warn!("Inventory file not found. Starting with empty data.");
            }
        }
        Ok(())
    }

    /// Render the stock report to `out`.
    pub fn write_report<W: Write>(&self, out: W) -> io::Result<()> {
        report::write_report(out, self.items.iter())
    }

    /// Print the stock report to stdout.
    pub fn print_report(&self) {
        let stdout = io::stdout();
        if let Err(err) = self.write_report(stdout.lock()) {
            tracing::error!("failed to print inventory report: {err:?}");
        }
    }
}
