//! Accounting journal command handlers.

use clap::Subcommand;
use phygital_core::{StockEntry, Transaction, TransactionCategory, TransactionKind};
use phygital_store::TransactionStore;

/// Sub-commands available under `tx`.
#[derive(Debug, Subcommand)]
pub enum TxCommands {
    /// List journal entries, newest first
    List {
        /// Only show entries of this category (e.g. ads, `stock_purchase`)
        #[arg(long)]
        category: Option<TransactionCategory>,
    },
    /// Record a journal entry
    Add {
        #[arg(long)]
        category: TransactionCategory,
        /// Amount in DA
        #[arg(long)]
        amount: f64,
        #[arg(long, default_value = "")]
        description: String,
        /// Record as income instead of expense (implied for `sales`)
        #[arg(long)]
        income: bool,
        /// Name of the goods received; creates a product for stock purchases
        #[arg(long, requires = "qty")]
        stock_name: Option<String>,
        #[arg(long)]
        stock_sku: Option<String>,
        /// Units received
        #[arg(long)]
        qty: Option<i64>,
        /// Unit cost in DA; defaults to amount / qty
        #[arg(long)]
        unit_cost: Option<f64>,
    },
    /// Delete a journal entry by id
    Delete { id: String },
}

#[allow(clippy::cast_precision_loss)]
fn stock_entry(
    name: Option<String>,
    sku: Option<String>,
    qty: Option<i64>,
    unit_cost: Option<f64>,
    amount: f64,
) -> Option<StockEntry> {
    let name = name?;
    let qty = qty.unwrap_or(0);
    let unit_cost = unit_cost.unwrap_or(if qty > 0 { amount / qty as f64 } else { 0.0 });
    Some(StockEntry {
        name,
        sku,
        qty,
        unit_cost,
    })
}

pub(crate) fn run<S: TransactionStore + ?Sized>(
    store: &S,
    command: TxCommands,
) -> anyhow::Result<()> {
    match command {
        TxCommands::List { category } => {
            let txs: Vec<Transaction> = store
                .list_transactions()?
                .into_iter()
                .filter(|t| category.is_none_or(|c| t.category == c))
                .collect();
            if txs.is_empty() {
                println!("journal is empty");
                return Ok(());
            }
            println!(
                "{:<20}{:<12}{:<8}{:<18}{:>12}  DESCRIPTION",
                "ID", "DATE", "TYPE", "CATEGORY", "AMOUNT"
            );
            let mut balance = 0.0;
            for t in &txs {
                let date = chrono::DateTime::from_timestamp_millis(t.date)
                    .map(|d| d.format("%d/%m/%Y").to_string())
                    .unwrap_or_default();
                let (kind, signed) = match t.kind {
                    TransactionKind::Income => ("income", t.amount),
                    TransactionKind::Expense => ("expense", -t.amount),
                };
                balance += signed;
                println!(
                    "{:<20}{:<12}{:<8}{:<18}{:>12.0}  {}",
                    t.id,
                    date,
                    kind,
                    t.category.as_str(),
                    t.amount,
                    t.description
                );
            }
            println!("balance: {balance:.0} DA");
        }
        TxCommands::Add {
            category,
            amount,
            description,
            income,
            stock_name,
            stock_sku,
            qty,
            unit_cost,
        } => {
            let entry = stock_entry(stock_name, stock_sku, qty, unit_cost, amount);
            if entry.is_some() && category != TransactionCategory::StockPurchase {
                anyhow::bail!(
                    "--stock-name only applies to stock_purchase entries, not {}",
                    category.as_str()
                );
            }
            let millis = chrono::Utc::now().timestamp_millis();
            let kind = if income || category == TransactionCategory::Sales {
                TransactionKind::Income
            } else {
                TransactionKind::Expense
            };
            let tx = Transaction {
                id: format!("tx-{millis}"),
                date: millis,
                kind,
                category,
                description,
                amount,
                is_stock_entry: entry.is_some(),
            };
            let id = tx.id.clone();
            store.save_transaction(tx, entry.as_ref())?;
            println!("recorded {id} ({amount:.0} DA)");
        }
        TxCommands::Delete { id } => {
            store.delete_transaction(&id)?;
            println!("deleted entry {id}");
        }
    }
    Ok(())
}
