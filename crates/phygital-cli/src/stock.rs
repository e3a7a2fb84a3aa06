//! Inventory command handlers.

use clap::Subcommand;
use phygital_core::Product;
use phygital_store::StockStore;

/// Sub-commands available under `stock`.
#[derive(Debug, Subcommand)]
pub enum StockCommands {
    /// List products with their stock level
    List {
        /// Only show products below this many units
        #[arg(long)]
        below: Option<i64>,
    },
    /// Add a product, or replace the one with the same id
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        sku: Option<String>,
        #[arg(long, default_value = "0")]
        stock: i64,
        #[arg(long, default_value = "0")]
        purchase_price: f64,
        #[arg(long, default_value = "0")]
        sell_price: f64,
        /// Product id; generated when omitted
        #[arg(long)]
        id: Option<String>,
        /// Mark the product as packaging material
        #[arg(long)]
        packaging: bool,
    },
    /// Change stock of a product by name (negative to remove)
    Adjust {
        /// Product name, matched case-insensitively
        #[arg(long, conflicts_with = "packaging")]
        name: Option<String>,
        /// Adjust the packaging product instead
        #[arg(long)]
        packaging: bool,
        #[arg(long, allow_hyphen_values = true)]
        delta: i64,
    },
    /// Delete a product by id
    Delete { id: String },
}

pub(crate) fn run<S: StockStore + ?Sized>(store: &S, command: StockCommands) -> anyhow::Result<()> {
    match command {
        StockCommands::List { below } => {
            let products: Vec<Product> = store
                .list_products()?
                .into_iter()
                .filter(|p| below.is_none_or(|limit| p.stock < limit))
                .collect();
            if products.is_empty() {
                println!("no products in stock");
                return Ok(());
            }
            println!(
                "{:<24}{:<16}{:<28}{:>7}{:>10}{:>10}",
                "ID", "SKU", "NAME", "STOCK", "BUY", "SELL"
            );
            for p in &products {
                println!(
                    "{:<24}{:<16}{:<28}{:>7}{:>10.0}{:>10.0}",
                    p.id, p.sku, p.name, p.stock, p.purchase_price, p.sell_price
                );
            }
        }
        StockCommands::Add {
            name,
            sku,
            stock,
            purchase_price,
            sell_price,
            id,
            packaging,
        } => {
            let millis = chrono::Utc::now().timestamp_millis();
            let product = Product {
                id: id.unwrap_or_else(|| format!("prod-{millis}")),
                sku: sku.unwrap_or_else(|| format!("SKU-{millis}")),
                name,
                stock: stock.max(0),
                purchase_price,
                sell_price,
                status: "active".to_string(),
                is_packaging: packaging,
            };
            let label = format!("{} ({})", product.name, product.id);
            store.save_product(product)?;
            println!("saved product {label}");
        }
        StockCommands::Adjust {
            name,
            packaging,
            delta,
        } => {
            let matched = match (name.as_deref(), packaging) {
                (_, true) => store.adjust_packaging_stock(delta)?,
                (Some(name), false) => store.adjust_stock_by_name(name, delta)?,
                (None, false) => anyhow::bail!("either --name or --packaging is required"),
            };
            if !matched {
                anyhow::bail!("no matching product found");
            }
            println!("stock adjusted by {delta}");
        }
        StockCommands::Delete { id } => {
            store.delete_product(&id)?;
            println!("deleted product {id}");
        }
    }
    Ok(())
}
