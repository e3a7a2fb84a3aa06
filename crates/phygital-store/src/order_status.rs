//! Status changes made locally, on top of what the order sheet reports.

use std::collections::BTreeMap;

use phygital_core::OrderStatus;

use crate::document::DocumentStore;
use crate::{StoreError, ORDER_STATUS_KEY};

/// Per-order status overrides, keyed by order id.
pub trait OrderStatusStore {
    /// # Errors
    ///
    /// Returns [`StoreError`] if the overrides cannot be read.
    fn status_overrides(&self) -> Result<BTreeMap<String, OrderStatus>, StoreError>;

    /// Records `status` for `order_id` and returns the previous override.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on read or write failure.
    fn set_status_override(
        &self,
        order_id: &str,
        status: OrderStatus,
    ) -> Result<Option<OrderStatus>, StoreError>;
}

impl<S: DocumentStore + ?Sized> OrderStatusStore for S {
    fn status_overrides(&self) -> Result<BTreeMap<String, OrderStatus>, StoreError> {
        match self.load(ORDER_STATUS_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|source| StoreError::Serde {
                key: ORDER_STATUS_KEY.to_owned(),
                source,
            }),
            None => Ok(BTreeMap::new()),
        }
    }

    fn set_status_override(
        &self,
        order_id: &str,
        status: OrderStatus,
    ) -> Result<Option<OrderStatus>, StoreError> {
        let mut overrides = self.status_overrides()?;
        let previous = overrides.insert(order_id.to_owned(), status);
        let raw = serde_json::to_string(&overrides).map_err(|source| StoreError::Serde {
            key: ORDER_STATUS_KEY.to_owned(),
            source,
        })?;
        self.save(ORDER_STATUS_KEY, &raw)?;
        Ok(previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn override_replaces_previous() {
        let store = MemoryStore::new();
        assert!(store.status_overrides().unwrap().is_empty());

        assert_eq!(
            store
                .set_status_override("YAL-1", OrderStatus::Confirmed)
                .unwrap(),
            None
        );
        assert_eq!(
            store
                .set_status_override("YAL-1", OrderStatus::Returned)
                .unwrap(),
            Some(OrderStatus::Confirmed)
        );

        let overrides = store.status_overrides().unwrap();
        assert_eq!(overrides.len(), 1);
        assert_eq!(overrides["YAL-1"], OrderStatus::Returned);
        assert_eq!(
            store.load(ORDER_STATUS_KEY).unwrap().as_deref(),
            Some(r#"{"YAL-1":"returned"}"#)
        );
    }
}
