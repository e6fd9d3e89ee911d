//! # Seed Data Generator
//!
//! Populates the catalog database with sample products for development.
//!
//! ## Usage
//! ```bash
//! # Generate 60 products (default)
//! cargo run -p catalog-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p catalog-db --bin seed -- --count 200
//!
//! # Specify database path
//! cargo run -p catalog-db --bin seed -- --db ./data/catalog.db
//! ```
//!
//! Ids are generated here, in the caller's role: the store itself never
//! creates an id, so the seeder plays the part of the Add screen and
//! supplies SKU-style ids like `PEN-003`.

use std::env;

use catalog_core::Product;
use catalog_db::{Database, DbConfig};

/// Sample catalog items per category code.
const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "PEN",
        &[
            "Ballpoint Pen Blue",
            "Ballpoint Pen Black",
            "Gel Pen",
            "Fountain Pen",
            "Highlighter Yellow",
            "Highlighter Pink",
            "Marker Permanent",
            "Whiteboard Marker",
            "Mechanical Pencil",
            "Pencil HB",
        ],
    ),
    (
        "PAP",
        &[
            "Notebook A5 Ruled",
            "Notebook A4 Plain",
            "Sketchbook",
            "Sticky Notes",
            "Index Cards",
            "Copy Paper 500",
            "Envelope Pack",
            "Graph Pad",
            "Legal Pad",
            "Flip Chart",
        ],
    ),
    (
        "DSK",
        &[
            "Stapler",
            "Staple Refill",
            "Tape Dispenser",
            "Scissors",
            "Glue Stick",
            "Paper Clips",
            "Binder Clips",
            "Rubber Bands",
            "Hole Punch",
            "Letter Tray",
        ],
    ),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 60;
    let mut db_path = String::from("./catalog_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(60);
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
                println!("Catalog Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 60)");
                println!("  -d, --db <PATH>    Database file path (default: ./catalog_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Catalog Seed Data Generator");
    println!("===========================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!();

    // Connect to database
    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Schema ready");

    // Check existing products
    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicate ids.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    // Generate products
    println!();
    println!("Generating products...");

    let mut generated = 0;
    let start = std::time::Instant::now();

    'outer: for (category_code, names) in CATEGORIES {
        for (idx, name) in names.iter().enumerate() {
            if generated >= count {
                break 'outer;
            }

            let product = generate_product(category_code, name, idx, generated);

            if let Err(e) = db.products().insert(&product).await {
                eprintln!("Failed to insert {}: {}", product.id, e);
                continue;
            }

            generated += 1;
        }
    }

    let elapsed = start.elapsed();
    println!();
    println!("✓ Generated {} products in {:?}", generated, elapsed);
    println!(
        "  Rate: {:.0} products/second",
        generated as f64 / elapsed.as_secs_f64()
    );

    let total = db.products().count().await?;
    println!("  Catalog now holds {} products", total);

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Generates a single product with a SKU-style id and text price.
fn generate_product(category: &str, name: &str, idx: usize, seed: usize) -> Product {
    let id = format!("{}-{:03}", category, idx + 1);

    // Deterministic price between 0.49 and 9.98, as decimal text
    let cents = 49 + (seed * 37) % 950;
    let price = format!("{}.{:02}", cents / 100, cents % 100);

    Product::new(id, name.to_string(), format!("{} (sample)", name), "", price)
}
