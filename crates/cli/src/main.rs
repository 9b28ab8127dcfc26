use anyhow::Context;
use serde_json::json;

use stockroom_inventory::{InventoryConfig, InventoryStore};
use stockroom_observability::LogConfig;

fn main() -> anyhow::Result<()> {
    stockroom_observability::init_with(&LogConfig::default())
        .context("failed to initialize logging")?;

    let config = InventoryConfig::default();
    let mut inventory = InventoryStore::new();

    inventory.add("apple", 10, None);
    inventory.add("banana", 2, None);
    // Untyped input with the wrong shapes: logged and ignored.
    inventory.add_value(&json!(123), &json!("ten"), None);
    inventory.remove("apple", 3);
    inventory.remove("orange", 1);

    let apple = inventory
        .get_quantity("apple")
        .context("apple should still be in stock")?;
    println!("Apple stock: {apple}");
    println!(
        "Low items: {:?}",
        inventory.low_stock(config.low_stock_threshold)
    );

    inventory
        .save(&config.data_path)
        .with_context(|| format!("failed to save {}", config.data_path.display()))?;
    inventory
        .load(&config.data_path)
        .with_context(|| format!("failed to load {}", config.data_path.display()))?;
    inventory.print_report();

    tracing::info!("demo finished");
    Ok(())
}
