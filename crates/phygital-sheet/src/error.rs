use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetError {
    /// No CSV export URL has been configured.
    #[error("order sheet source not configured")]
    SourceNotConfigured,

    #[error("invalid sheet URL \"{url}\": {reason}")]
    InvalidSourceUrl { url: String, reason: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },
}
