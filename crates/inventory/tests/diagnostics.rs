//! Which operations emit which diagnostics.

use std::io;
use std::sync::{Arc, Mutex};

use serde_json::json;
use stockroom_inventory::InventoryStore;
use stockroom_observability::plain_subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Capture {
    type Writer = Capture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with diagnostics at or above `level` captured; return message parts.
fn capture(level: &str, f: impl FnOnce()) -> Vec<String> {
    let buf = Capture::default();
    let subscriber = plain_subscriber(buf.clone(), EnvFilter::new(level));
    tracing::subscriber::with_default(subscriber, f);

    let raw = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
    raw.lines()
        .map(|line| {
            line.split_once(" - ")
                .map(|(_, msg)| msg.to_string())
                .unwrap_or_else(|| line.to_string())
        })
        .collect()
}

#[test]
fn successful_add_and_remove_log_info() {
    let mut inv = InventoryStore::new();
    let lines = capture("info", || {
        inv.add("apple", 10, None);
        inv.remove("apple", 3);
    });

    assert_eq!(lines, ["Added 10 of apple", "Removed 3 of apple"]);
}

#[test]
fn successful_operations_emit_no_warnings() {
    let mut inv = InventoryStore::new();
    let lines = capture("warn", || {
        inv.add("apple", 10, None);
        inv.remove("apple", 10);
    });

    assert!(lines.is_empty(), "{lines:?}");
}

#[test]
fn invalid_add_logs_warning_naming_inputs() {
    let mut inv = InventoryStore::new();
    let lines = capture("warn", || {
        inv.add_value(&json!(123), &json!("ten"), None);
    });

    assert_eq!(lines.len(), 1);
    assert!(
        lines[0].starts_with(r#"Invalid input types for add: item=123, qty="ten""#),
        "{}",
        lines[0]
    );
}

#[test]
fn removing_unknown_item_logs_warning() {
    let mut inv = InventoryStore::new();
    let lines = capture("warn", || inv.remove("orange", 1));

    assert_eq!(lines, ["Attempted to remove non-existent item: orange"]);
}

#[test]
fn persistence_logs_success_and_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    let mut inv = InventoryStore::from_entries([("apple", 7)]).unwrap();

    let lines = capture("info", || {
        inv.save(&path).unwrap();
        inv.load(&path).unwrap();
        inv.load(dir.path().join("missing.json")).unwrap();
    });

    assert_eq!(
        lines,
        [
            "Data saved successfully.",
            "Data loaded successfully.",
            "Inventory file not found. Starting with empty data.",
        ]
    );
}

#[test]
fn queries_are_silent() {
    let inv = InventoryStore::from_entries([("apple", 7)]).unwrap();
    let lines = capture("trace", || {
        let _ = inv.get_quantity("apple");
        let _ = inv.get_quantity("nonexistent");
        let _ = inv.low_stock_default();
    });

    assert!(lines.is_empty(), "{lines:?}");
}
