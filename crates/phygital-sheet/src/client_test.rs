use super::*;

#[test]
fn source_url_accepts_google_sheets_export() {
    let url = SheetClient::source_url(
        "https://docs.google.com/spreadsheets/d/e/2PACX-abc/pub?output=csv",
    )
    .unwrap();
    assert_eq!(url.host_str(), Some("docs.google.com"));
    assert_eq!(url.query(), Some("output=csv"));
}

#[test]
fn source_url_trims_whitespace() {
    let url = SheetClient::source_url("  http://localhost:8080/orders.csv\n").unwrap();
    assert_eq!(url.path(), "/orders.csv");
}

#[test]
fn source_url_rejects_relative_path() {
    let err = SheetClient::source_url("orders.csv").unwrap_err();
    assert!(
        matches!(err, SheetError::InvalidSourceUrl { .. }),
        "expected InvalidSourceUrl, got: {err:?}"
    );
}

#[test]
fn source_url_rejects_non_http_scheme() {
    let err = SheetClient::source_url("file:///tmp/orders.csv").unwrap_err();
    assert!(
        matches!(err, SheetError::InvalidSourceUrl { ref reason, .. } if reason.contains("file")),
        "expected InvalidSourceUrl, got: {err:?}"
    );
}

#[test]
fn client_builds_with_defaults() {
    assert!(SheetClient::new(30, "phygital-test/0.1").is_ok());
}
