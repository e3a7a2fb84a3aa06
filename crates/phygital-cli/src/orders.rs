//! Order listing and local status changes.
//!
//! The sheet stays the source of orders; statuses changed here are kept as
//! overrides in the local store and shown in place of the sheet's.

use std::collections::BTreeMap;

use clap::Subcommand;
use phygital_core::{AppConfig, Order, OrderStatus};
use phygital_kpi::{change_order_status, FanOutSink, StatusChange, StoreSink, TracingSink};
use phygital_store::{FileStore, NotificationStore, OrderStatusStore, StockStore};

use crate::feed::load_dashboard;

/// Sub-commands available under `orders`.
#[derive(Debug, Subcommand)]
pub enum OrderCommands {
    /// List normalized orders, with local status changes applied
    List {
        /// CSV export URL (overrides PHYGITAL_SHEET_CSV_URL)
        #[arg(long)]
        url: Option<String>,
        /// Only show orders with this status (pending, confirmed, shipping, delivered, returned)
        #[arg(long)]
        status: Option<OrderStatus>,
        /// Only show orders whose wilaya matches (case-insensitive)
        #[arg(long)]
        wilaya: Option<String>,
    },
    /// Change the status of one order and move stock accordingly
    SetStatus {
        /// Order id (tracking number or `CMD-<line>`)
        id: String,
        /// New status (pending, confirmed, shipping, delivered, returned)
        status: OrderStatus,
        /// CSV export URL (overrides PHYGITAL_SHEET_CSV_URL)
        #[arg(long)]
        url: Option<String>,
    },
}

/// Replaces sheet statuses with the locally recorded ones.
pub(crate) fn apply_overrides(orders: &mut [Order], overrides: &BTreeMap<String, OrderStatus>) {
    for order in orders {
        if let Some(status) = overrides.get(&order.id) {
            order.status = *status;
        }
    }
}

pub(crate) fn filter_orders<'a>(
    orders: &'a [Order],
    status: Option<OrderStatus>,
    wilaya: Option<&str>,
) -> Vec<&'a Order> {
    let wilaya = wilaya.map(str::to_lowercase);
    orders
        .iter()
        .filter(|o| status.is_none_or(|s| o.status == s))
        .filter(|o| {
            wilaya
                .as_deref()
                .is_none_or(|w| o.wilaya.to_lowercase() == w)
        })
        .collect()
}

/// Finds `id` among the sheet's orders and records its new status,
/// persisting and logging the stock notifications it raises.
///
/// # Errors
///
/// Returns an error if no order has this id or the store fails.
pub(crate) fn set_status<S>(
    store: &S,
    orders: &[Order],
    id: &str,
    status: OrderStatus,
) -> anyhow::Result<StatusChange>
where
    S: StockStore + OrderStatusStore + NotificationStore + ?Sized,
{
    let order = orders
        .iter()
        .find(|o| o.id == id)
        .ok_or_else(|| anyhow::anyhow!("order '{id}' not found in the sheet"))?;

    let store_sink = StoreSink::new(store);
    let sink = FanOutSink::new().with(&store_sink).with(&TracingSink);
    Ok(change_order_status(store, &sink, order, status)?)
}

/// # Errors
///
/// Returns an error if the sheet cannot be fetched or the local store fails.
pub(crate) async fn run(
    config: &AppConfig,
    store: &FileStore,
    command: OrderCommands,
) -> anyhow::Result<()> {
    match command {
        OrderCommands::List {
            url,
            status,
            wilaya,
        } => {
            let mut data = load_dashboard(config, url.as_deref()).await?;
            apply_overrides(&mut data.orders, &store.status_overrides()?);
            let orders = filter_orders(&data.orders, status, wilaya.as_deref());

            if orders.is_empty() {
                println!("no orders match");
                return Ok(());
            }

            println!(
                "{:<16}{:<12}{:<22}{:<16}{:>10}  STATUS",
                "ID", "DATE", "CLIENT", "WILAYA", "TOTAL"
            );
            for o in &orders {
                println!(
                    "{:<16}{:<12}{:<22}{:<16}{:>10.0}  {}",
                    o.id, o.date, o.client, o.wilaya, o.total, o.status
                );
            }
            println!("{} of {} orders", orders.len(), data.orders.len());
        }
        OrderCommands::SetStatus { id, status, url } => {
            let data = load_dashboard(config, url.as_deref()).await?;
            let change = set_status(store, &data.orders, &id, status)?;
            println!("order {id}: {} -> {}", change.previous, change.current);
            for n in &change.notifications {
                println!("[{}] {}: {}", n.level, n.title, n.message);
            }
        }
    }
    Ok(())
}
