//! Stock side effects of moving an order through its lifecycle.

use phygital_core::{AppNotification, NotificationLevel, Order, OrderStatus};
use phygital_store::{OrderStatusStore, StockStore, StoreError};

use crate::sink::NotificationSink;

/// Outcome of [`change_order_status`].
#[derive(Debug, Clone, PartialEq)]
pub struct StatusChange {
    /// Status before the change: the last local override, else the sheet's.
    pub previous: OrderStatus,
    pub current: OrderStatus,
    pub notifications: Vec<AppNotification>,
}

/// Applies the stock movements implied by `previous → next` for `order`.
///
/// Confirming consumes one packaging unit. Returning puts one unit of the
/// ordered product back, unless the order was already returned. Each
/// movement that matched a product raises a notification through `sink`;
/// an unmatched product is logged and otherwise ignored.
///
/// # Errors
///
/// Returns [`StoreError`] if stock cannot be read or written.
pub fn apply_status_change<S: StockStore + ?Sized>(
    store: &S,
    sink: &dyn NotificationSink,
    order: &Order,
    previous: OrderStatus,
    next: OrderStatus,
) -> Result<Vec<AppNotification>, StoreError> {
    let mut raised = Vec::new();

    if next == OrderStatus::Confirmed && previous != OrderStatus::Confirmed {
        if store.adjust_packaging_stock(-1)? {
            raised.push(AppNotification::new(
                "Stock Emballage",
                "Un emballage a été déduit du stock.",
                NotificationLevel::Info,
            ));
        } else {
            tracing::warn!(order = %order.id, "no packaging product to deduct from");
        }
    }

    if next == OrderStatus::Returned && previous != OrderStatus::Returned {
        if store.adjust_stock_by_name(&order.product, 1)? {
            raised.push(AppNotification::new(
                "Stock Automatisé",
                format!("Produit \"{}\" réintégré au stock (+1).", order.product),
                NotificationLevel::Success,
            ));
        } else {
            tracing::warn!(
                order = %order.id,
                product = %order.product,
                "returned product not found in stock"
            );
        }
    }

    for notification in &raised {
        sink.notify(notification);
    }
    Ok(raised)
}

/// Records `next` as the local status of `order` and applies its stock
/// movements against the status it had before.
///
/// # Errors
///
/// Returns [`StoreError`] if the override or stock cannot be read or written.
pub fn change_order_status<S: StockStore + OrderStatusStore + ?Sized>(
    store: &S,
    sink: &dyn NotificationSink,
    order: &Order,
    next: OrderStatus,
) -> Result<StatusChange, StoreError> {
    let previous = store
        .set_status_override(&order.id, next)?
        .unwrap_or(order.status);
    let notifications = apply_status_change(store, sink, order, previous, next)?;
    tracing::info!(
        order = %order.id,
        from = %previous,
        to = %next,
        movements = notifications.len(),
        "order status changed"
    );
    Ok(StatusChange {
        previous,
        current: next,
        notifications,
    })
}

#[cfg(test)]
#[path = "workflow_test.rs"]
mod tests;
