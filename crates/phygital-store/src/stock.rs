//! Product stock repository.

use phygital_core::Product;

use crate::document::{load_list, save_list, DocumentStore};
use crate::{StoreError, STOCK_KEY};

/// Stock operations. Implemented for every [`DocumentStore`].
pub trait StockStore {
    /// # Errors
    ///
    /// Returns [`StoreError`] if the stock document cannot be read.
    fn list_products(&self) -> Result<Vec<Product>, StoreError>;

    /// Inserts `product`, or replaces the stored product with the same id in
    /// place.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on read or write failure.
    fn save_product(&self, product: Product) -> Result<(), StoreError>;

    /// Adds `delta` units to the product named `name` (case-insensitive,
    /// exact). Stock never drops below zero. Returns `false` when no product
    /// has that name.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on read or write failure.
    fn adjust_stock_by_name(&self, name: &str, delta: i64) -> Result<bool, StoreError>;

    /// Adds `delta` units to the packaging item: the first product flagged
    /// `is_packaging` or whose name contains "emballage". Returns `false`
    /// when there is none.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on read or write failure.
    fn adjust_packaging_stock(&self, delta: i64) -> Result<bool, StoreError>;

    /// # Errors
    ///
    /// Returns [`StoreError`] on read or write failure.
    fn delete_product(&self, id: &str) -> Result<(), StoreError>;
}

impl<S: DocumentStore + ?Sized> StockStore for S {
    fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        load_list(self, STOCK_KEY)
    }

    fn save_product(&self, product: Product) -> Result<(), StoreError> {
        let mut products = self.list_products()?;
        match products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => *existing = product,
            None => products.push(product),
        }
        save_list(self, STOCK_KEY, &products)
    }

    fn adjust_stock_by_name(&self, name: &str, delta: i64) -> Result<bool, StoreError> {
        let wanted = name.to_lowercase();
        adjust_first(self, delta, |p| p.name.to_lowercase() == wanted)
    }

    fn adjust_packaging_stock(&self, delta: i64) -> Result<bool, StoreError> {
        adjust_first(self, delta, |p| {
            p.is_packaging || p.name.to_lowercase().contains("emballage")
        })
    }

    fn delete_product(&self, id: &str) -> Result<(), StoreError> {
        let mut products = self.list_products()?;
        products.retain(|p| p.id != id);
        save_list(self, STOCK_KEY, &products)
    }
}

fn adjust_first<S, F>(store: &S, delta: i64, matches: F) -> Result<bool, StoreError>
where
    S: DocumentStore + ?Sized,
    F: Fn(&Product) -> bool,
{
    let mut products = store.list_products()?;
    let Some(product) = products.iter_mut().find(|p| matches(p)) else {
        tracing::debug!(delta, "no product matched stock adjustment");
        return Ok(false);
    };

    product.stock = product.stock.saturating_add(delta).max(0);
    tracing::debug!(product = %product.name, stock = product.stock, "adjusted stock");
    save_list(store, STOCK_KEY, &products)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn product(id: &str, name: &str, stock: i64) -> Product {
        Product {
            id: id.into(),
            sku: format!("SKU-{id}"),
            name: name.into(),
            stock,
            purchase_price: 300.0,
            sell_price: 1200.0,
            status: "active".into(),
            is_packaging: false,
        }
    }

    #[test]
    fn empty_store_has_no_products() {
        assert!(MemoryStore::new().list_products().unwrap().is_empty());
    }

    #[test]
    fn save_product_upserts_in_place() {
        let store = MemoryStore::new();
        store.save_product(product("p1", "Coque", 10)).unwrap();
        store.save_product(product("p2", "Montre", 4)).unwrap();
        store.save_product(product("p1", "Coque rouge", 12)).unwrap();

        let products = store.list_products().unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "Coque rouge");
        assert_eq!(products[0].stock, 12);
        assert_eq!(products[1].id, "p2");
    }

    #[test]
    fn adjust_by_name_is_case_insensitive_and_clamped() {
        let store = MemoryStore::new();
        store.save_product(product("p1", "Coque iPhone", 3)).unwrap();

        assert!(store.adjust_stock_by_name("COQUE IPHONE", -1).unwrap());
        assert_eq!(store.list_products().unwrap()[0].stock, 2);

        assert!(store.adjust_stock_by_name("coque iphone", -10).unwrap());
        assert_eq!(store.list_products().unwrap()[0].stock, 0);
    }

    #[test]
    fn adjust_by_name_reports_unknown_product() {
        let store = MemoryStore::new();
        store.save_product(product("p1", "Coque", 3)).unwrap();
        assert!(!store.adjust_stock_by_name("Coq", 1).unwrap());
        assert_eq!(store.list_products().unwrap()[0].stock, 3);
    }

    #[test]
    fn packaging_matches_flag_or_name() {
        let store = MemoryStore::new();
        store.save_product(product("p1", "Coque", 3)).unwrap();
        store.save_product(product("p2", "Emballage kraft", 100)).unwrap();

        assert!(store.adjust_packaging_stock(-1).unwrap());
        let products = store.list_products().unwrap();
        assert_eq!(products[1].stock, 99);

        let flagged = MemoryStore::new();
        let mut bag = product("b1", "Sachet", 5);
        bag.is_packaging = true;
        flagged.save_product(bag).unwrap();
        assert!(flagged.adjust_packaging_stock(-2).unwrap());
        assert_eq!(flagged.list_products().unwrap()[0].stock, 3);
    }

    #[test]
    fn packaging_missing_returns_false() {
        let store = MemoryStore::new();
        store.save_product(product("p1", "Coque", 3)).unwrap();
        assert!(!store.adjust_packaging_stock(-1).unwrap());
    }

    #[test]
    fn delete_product_removes_only_that_id() {
        let store = MemoryStore::new();
        store.save_product(product("p1", "Coque", 3)).unwrap();
        store.save_product(product("p2", "Montre", 3)).unwrap();
        store.delete_product("p1").unwrap();
        let products = store.list_products().unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, "p2");
    }
}
