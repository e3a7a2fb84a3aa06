//! Accounting journal repository.

use phygital_core::{Product, StockEntry, Transaction, TransactionCategory};

use crate::document::{load_list, save_list, DocumentStore};
use crate::stock::StockStore;
use crate::{StoreError, TRANSACTIONS_KEY};

/// Journal operations. Implemented for every [`DocumentStore`].
pub trait TransactionStore {
    /// Returns the journal, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the journal cannot be read.
    fn list_transactions(&self) -> Result<Vec<Transaction>, StoreError>;

    /// Prepends `tx` to the journal.
    ///
    /// A stock purchase flagged `is_stock_entry` and accompanied by
    /// `stock_entry` also creates a product for the received goods.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on read or write failure.
    fn save_transaction(
        &self,
        tx: Transaction,
        stock_entry: Option<&StockEntry>,
    ) -> Result<(), StoreError>;

    /// # Errors
    ///
    /// Returns [`StoreError`] on read or write failure.
    fn delete_transaction(&self, id: &str) -> Result<(), StoreError>;
}

impl<S: DocumentStore + ?Sized> TransactionStore for S {
    fn list_transactions(&self) -> Result<Vec<Transaction>, StoreError> {
        load_list(self, TRANSACTIONS_KEY)
    }

    fn save_transaction(
        &self,
        tx: Transaction,
        stock_entry: Option<&StockEntry>,
    ) -> Result<(), StoreError> {
        let receives_goods =
            tx.category == TransactionCategory::StockPurchase && tx.is_stock_entry;

        let mut txs = self.list_transactions()?;
        txs.insert(0, tx);
        save_list(self, TRANSACTIONS_KEY, &txs)?;

        if let (true, Some(entry)) = (receives_goods, stock_entry) {
            let product = product_from_entry(entry, chrono::Utc::now().timestamp_millis());
            tracing::info!(product = %product.name, qty = product.stock, "stock entry recorded");
            self.save_product(product)?;
        }
        Ok(())
    }

    fn delete_transaction(&self, id: &str) -> Result<(), StoreError> {
        let mut txs = self.list_transactions()?;
        txs.retain(|t| t.id != id);
        save_list(self, TRANSACTIONS_KEY, &txs)
    }
}

fn product_from_entry(entry: &StockEntry, now_millis: i64) -> Product {
    Product {
        id: format!("prod-auto-{now_millis}"),
        sku: entry
            .sku
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| format!("SKU-{now_millis}")),
        name: entry.name.clone(),
        stock: entry.qty,
        purchase_price: entry.unit_cost,
        sell_price: 0.0,
        status: "active".to_string(),
        is_packaging: false,
    }
}
