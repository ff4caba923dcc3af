//! # Seed Data Generator
//!
//! Populates a database with products for development.
//!
//! ## Usage
//! ```bash
//! # Generate 500 products (default)
//! cargo run -p stockroom-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p stockroom-db --bin seed -- --count 2000
//!
//! # Specify database path (or set STOCKROOM_DB_PATH)
//! cargo run -p stockroom-db --bin seed -- --db ./data/stockroom.db
//! ```
//!
//! Every product goes through `ProductService::add_product`, so the seed
//! exercises the same validation callers get.

use std::env;
use std::time::Instant;

use stockroom_core::Product;
use stockroom_db::{Database, DbConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_COUNT: usize = 500;
const DEFAULT_DB_PATH: &str = "./stockroom_dev.db";

/// Base product names, combined with a size suffix.
const NAMES: &[&str] = &[
    "Hex Bolt",
    "Wing Nut",
    "Flat Washer",
    "Wood Screw",
    "Wall Anchor",
    "Hinge",
    "Cabinet Knob",
    "Drawer Slide",
    "Shelf Bracket",
    "Pipe Clamp",
];

const SIZES: &[(&str, f64)] = &[("S", 0.0), ("M", 0.35), ("L", 0.80), ("XL", 1.25)];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    let mut count = DEFAULT_COUNT;
    let mut db_path = env::var("STOCKROOM_DB_PATH").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(DEFAULT_COUNT);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Stockroom Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: {DEFAULT_COUNT})");
                println!("  -d, --db <PATH>    Database file path (default: {DEFAULT_DB_PATH})");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            other => warn!(arg = other, "Ignoring unknown argument"),
        }
        i += 1;
    }

    info!(db = %db_path, count, "Seeding products");

    let db = Database::new(DbConfig::new(&db_path)).await?;
    let service = db.product_service();

    let existing = service.dao().count().await?;
    if existing > 0 {
        warn!(existing, "Database already has products, skipping seed");
        return Ok(());
    }

    let start = Instant::now();
    let mut generated = 0;

    for seed in 0..count {
        let product = generate_product(seed);

        if let Err(e) = service.add_product(&product.to_record()).await {
            warn!(id = product.id, error = %e, "Failed to insert product");
            continue;
        }

        generated += 1;

        if generated % 100 == 0 {
            info!(generated, "Progress");
        }
    }

    let elapsed = start.elapsed();
    info!(
        generated,
        elapsed_ms = elapsed.as_millis() as u64,
        rate = generated as f64 / elapsed.as_secs_f64().max(f64::EPSILON),
        "Products generated"
    );

    let listed = service.list_products().await?;
    let out_of_stock = listed.iter().filter(|p| !p.in_stock()).count();
    info!(total = listed.len(), out_of_stock, "Seed complete");

    db.close().await;
    Ok(())
}

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - Default: INFO, DEBUG for stockroom crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,stockroom=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Generates a single product with deterministic data.
fn generate_product(seed: usize) -> Product {
    let name = NAMES[seed % NAMES.len()];
    let (size, cost_addon) = SIZES[(seed / NAMES.len()) % SIZES.len()];

    // 0.49 - 9.48 base cost
    let base_cost = 0.49 + ((seed * 17) % 900) as f64 / 100.0;
    let cost = ((base_cost + cost_addon) * 100.0).round() / 100.0;

    Product::new(
        seed as i64 + 1,
        format!("{name} {size}"),
        format!("{name}, size {size}"),
        cost,
    )
    .with_qty((seed % 51) as i64)
}
