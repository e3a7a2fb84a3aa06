use chrono::NaiveDate;
use phygital_core::OrderStatus;

use super::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 11, 7).unwrap()
}

const EXPORT: &str = "\
Tracking,Date,Full Name,Phone,Wilaya,Product Name,Total Price,Situation
yal-3F9K21,5/3/2024 10:12,Karim Benali,0550123456,Alger Centre,Coque iPhone 15,2500,Livrée
yal-8HD02Q,2024-03-06,Amina Haddad,0661987654,Oran,Montre connectée,\"4,900 DA\",Retour vers vendeur
,2024-03-07,\"Saidi, Yacine\",0770112233,Bab-Ezzouar,Écouteurs,1800,Nouvelle
";

#[test]
fn parses_each_data_row_into_one_order() {
    let feed = parse_orders_on(EXPORT, today());
    assert_eq!(feed.orders.len(), 3);
    assert_eq!(feed.report.data_lines, 4);
    assert_eq!(feed.report.accepted, 3);
    // Trailing newline produces one empty line, which is dropped.
    assert_eq!(feed.report.dropped, 1);
}

#[test]
fn first_row_is_fully_normalized() {
    let feed = parse_orders_on(EXPORT, today());
    let order = &feed.orders[0];
    assert_eq!(order.id, "yal-3F9K21");
    assert_eq!(order.date, "05/03/2024");
    assert_eq!(order.client, "Karim Benali");
    assert_eq!(order.phone, "0550123456");
    assert_eq!(order.wilaya, "Alger");
    assert_eq!(order.product, "Coque iPhone 15");
    assert!((order.total - 2500.0).abs() < f64::EPSILON);
    assert_eq!(order.status, OrderStatus::Delivered);
}

#[test]
fn quoted_cells_keep_their_commas() {
    let feed = parse_orders_on(EXPORT, today());
    assert!((feed.orders[1].total - 4900.0).abs() < f64::EPSILON);
    assert_eq!(feed.orders[1].status, OrderStatus::Returned);
    assert_eq!(feed.orders[2].client, "Saidi, Yacine");
}

#[test]
fn missing_tracking_gets_line_based_placeholder() {
    let feed = parse_orders_on(EXPORT, today());
    assert_eq!(feed.orders[2].id, "CMD-3");
    assert_eq!(feed.report.synthetic_ids, 1);
}

#[test]
fn report_counts_fallbacks() {
    let feed = parse_orders_on(EXPORT, today());
    assert_eq!(feed.orders[2].wilaya, "Bab");
    assert_eq!(feed.orders[2].status, OrderStatus::Pending);
    assert_eq!(feed.report.wilayas_unmatched, 1);
    assert_eq!(feed.report.statuses_unrecognized, 1);
    assert_eq!(feed.report.dates_defaulted, 0);
    assert!(feed.report.missing_columns.is_empty());
    assert!(feed.report.has_fallbacks());
}

#[test]
fn rows_with_fewer_than_two_cells_are_dropped() {
    let csv = "date,client\nlonely\n01/01/2024,Nadia\n\n";
    let feed = parse_orders_on(csv, today());
    assert_eq!(feed.orders.len(), 1);
    assert_eq!(feed.orders[0].client, "Nadia");
    assert_eq!(feed.report.dropped, 3);
}

#[test]
fn two_cell_garbage_row_is_still_accepted() {
    let feed = parse_orders_on("status,total\n???,!!!", today());
    assert_eq!(feed.orders.len(), 1);
    let order = &feed.orders[0];
    assert_eq!(order.status, OrderStatus::Pending);
    assert!(order.total.abs() < f64::EPSILON);
}

#[test]
fn header_only_or_empty_text_yields_nothing() {
    assert!(parse_orders_on("", today()).orders.is_empty());
    assert!(parse_orders_on("date,client,status", today()).orders.is_empty());
}

#[test]
fn missing_columns_fall_back_to_defaults() {
    let feed = parse_orders_on("foo,bar\nx,y", today());
    let order = &feed.orders[0];
    assert_eq!(order.id, "CMD-1");
    assert_eq!(order.date, "07/11/2024");
    assert_eq!(order.client, "Inconnu");
    assert_eq!(order.phone, "");
    assert_eq!(order.wilaya, "Inconnu");
    assert_eq!(order.product, "Inconnu");
    assert!(order.total.abs() < f64::EPSILON);
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(feed.report.missing_columns.len(), 8);
    assert_eq!(feed.report.dates_defaulted, 1);
    assert_eq!(feed.report.wilayas_missing, 1);
}

#[test]
fn header_inference_is_order_independent() {
    let a = "date,client,phone,wilaya,produit,prix,statut,tracking\n\
             2024-01-09,Lina,0555000000,Sétif,Sac,3200,confirmé,T1";
    let b = "tracking,statut,prix,produit,wilaya,phone,client,date\n\
             T1,confirmé,3200,Sac,Sétif,0555000000,Lina,2024-01-09";
    let fa = parse_orders_on(a, today());
    let fb = parse_orders_on(b, today());
    assert_eq!(fa.orders, fb.orders);
    assert_eq!(fa.orders[0].status, OrderStatus::Confirmed);
    assert_eq!(fa.orders[0].wilaya, "Sétif");
    assert_eq!(fa.orders[0].date, "09/01/2024");
}

#[test]
fn crlf_line_endings_are_tolerated() {
    let csv = "\"tracking\",\"status\"\r\n\"T9\",\"delivered\"\r\n";
    let feed = parse_orders_on(csv, today());
    assert_eq!(feed.orders.len(), 1);
    assert_eq!(feed.orders[0].id, "T9");
    assert_eq!(feed.orders[0].status, OrderStatus::Delivered);
}
