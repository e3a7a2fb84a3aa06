use std::cell::RefCell;

use phygital_core::Product;
use phygital_store::MemoryStore;

use super::*;

#[derive(Default)]
struct Recorder(RefCell<Vec<String>>);

impl NotificationSink for Recorder {
    fn notify(&self, notification: &AppNotification) {
        self.0.borrow_mut().push(notification.title.clone());
    }
}

fn product(name: &str, stock: i64, is_packaging: bool) -> Product {
    Product {
        id: format!("id-{name}"),
        sku: format!("SKU-{name}"),
        name: name.into(),
        stock,
        purchase_price: 100.0,
        sell_price: 0.0,
        status: "active".into(),
        is_packaging,
    }
}

fn seeded() -> MemoryStore {
    let store = MemoryStore::new();
    store.save_product(product("Boite kraft", 50, true)).unwrap();
    store.save_product(product("Montre Classic", 4, false)).unwrap();
    store
}

fn order(status: OrderStatus) -> Order {
    Order {
        id: "YAL-1".into(),
        date: "01/03/2024".into(),
        client: "Karim".into(),
        phone: "0550000000".into(),
        wilaya: "Oran".into(),
        product: "montre classic".into(),
        total: 4_500.0,
        status,
    }
}

fn stock_of(store: &MemoryStore, name: &str) -> i64 {
    store
        .list_products()
        .unwrap()
        .into_iter()
        .find(|p| p.name == name)
        .map(|p| p.stock)
        .unwrap()
}

#[test]
fn confirming_consumes_one_packaging_unit() {
    let store = seeded();
    let sink = Recorder::default();

    let raised = apply_status_change(
        &store,
        &sink,
        &order(OrderStatus::Pending),
        OrderStatus::Pending,
        OrderStatus::Confirmed,
    )
    .unwrap();

    assert_eq!(stock_of(&store, "Boite kraft"), 49);
    assert_eq!(stock_of(&store, "Montre Classic"), 4);
    assert_eq!(raised.len(), 1);
    assert_eq!(raised[0].level, NotificationLevel::Info);
    assert_eq!(*sink.0.borrow(), ["Stock Emballage"]);
}

#[test]
fn reconfirming_is_a_no_op() {
    let store = seeded();
    let raised = apply_status_change(
        &store,
        &Recorder::default(),
        &order(OrderStatus::Confirmed),
        OrderStatus::Confirmed,
        OrderStatus::Confirmed,
    )
    .unwrap();
    assert!(raised.is_empty());
    assert_eq!(stock_of(&store, "Boite kraft"), 50);
}

#[test]
fn returning_restocks_the_product() {
    let store = seeded();
    let sink = Recorder::default();

    let raised = apply_status_change(
        &store,
        &sink,
        &order(OrderStatus::Shipping),
        OrderStatus::Shipping,
        OrderStatus::Returned,
    )
    .unwrap();

    assert_eq!(stock_of(&store, "Montre Classic"), 5);
    assert_eq!(raised[0].level, NotificationLevel::Success);
    assert!(raised[0].message.contains("\"montre classic\""));
    assert_eq!(*sink.0.borrow(), ["Stock Automatisé"]);
}

#[test]
fn already_returned_order_is_not_restocked_twice() {
    let store = seeded();
    let raised = apply_status_change(
        &store,
        &Recorder::default(),
        &order(OrderStatus::Returned),
        OrderStatus::Returned,
        OrderStatus::Returned,
    )
    .unwrap();
    assert!(raised.is_empty());
    assert_eq!(stock_of(&store, "Montre Classic"), 4);
}

#[test]
fn unknown_product_raises_nothing() {
    let store = MemoryStore::new();
    let raised = apply_status_change(
        &store,
        &Recorder::default(),
        &order(OrderStatus::Shipping),
        OrderStatus::Shipping,
        OrderStatus::Returned,
    )
    .unwrap();
    assert!(raised.is_empty());
    assert!(store.list_products().unwrap().is_empty());
}

#[test]
fn change_uses_sheet_status_then_local_override() {
    let store = seeded();
    let sink = Recorder::default();
    let sheet_order = order(OrderStatus::Confirmed);

    // The sheet already says confirmed: no packaging deducted.
    let first = change_order_status(&store, &sink, &sheet_order, OrderStatus::Confirmed).unwrap();
    assert_eq!(first.previous, OrderStatus::Confirmed);
    assert!(first.notifications.is_empty());

    let second = change_order_status(&store, &sink, &sheet_order, OrderStatus::Returned).unwrap();
    assert_eq!(second.previous, OrderStatus::Confirmed);
    assert_eq!(second.current, OrderStatus::Returned);
    assert_eq!(stock_of(&store, "Montre Classic"), 5);

    // The override now says returned, whatever the sheet still reports.
    let third = change_order_status(&store, &sink, &sheet_order, OrderStatus::Returned).unwrap();
    assert_eq!(third.previous, OrderStatus::Returned);
    assert!(third.notifications.is_empty());
    assert_eq!(stock_of(&store, "Montre Classic"), 5);
    assert_eq!(*sink.0.borrow(), ["Stock Automatisé"]);
}
