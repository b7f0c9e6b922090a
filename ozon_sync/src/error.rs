//! Error types for ozon_sync

/// Unified error type for ozon_sync operations
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// HTTP error status code, with whatever body the server sent back
    #[error("HTTP error: {status}: {body}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    /// Failed to parse JSON response
    #[error("Parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// Quantity cell is neither a number nor a known sentinel
    #[error("Invalid quantity {value:?} for offer {offer_id}")]
    InvalidQuantity { offer_id: String, value: String },
    /// Price cell holds something other than text
    #[error("Price for offer {offer_id} must be text, found {found}")]
    PriceTypeMismatch {
        offer_id: String,
        found: &'static str,
    },
    /// Chunk size must be at least one
    #[error("Invalid chunk size: {0}")]
    InvalidChunkSize(usize),
    /// Required column not present in the stock file header
    #[error("Missing column in stock file: {0}")]
    MissingColumn(String),
    /// Stock file has fewer rows than the header offset
    #[error("Stock file has no header row at index {0}")]
    HeaderRowMissing(usize),
    /// Workbook contains no worksheets
    #[error("Stock workbook contains no worksheets")]
    EmptyWorkbook,
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Stock archive could not be read
    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
    /// Stock workbook could not be read
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),
    /// CSV stock file could not be read
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Error = SyncError;

impl SyncError {
    /// True when the request timed out before a response arrived
    pub fn is_timeout(&self) -> bool {
        matches!(self, SyncError::Network(e) if e.is_timeout())
    }

    /// True when no connection to the remote host could be made
    pub fn is_connect(&self) -> bool {
        matches!(self, SyncError::Network(e) if e.is_connect())
    }

    /// True for any failure on the HTTP side (network or non-2xx status)
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            SyncError::Network(_) | SyncError::HttpStatus { .. }
        )
    }
}

/// Result alias for ozon_sync operations
pub type Result<T> = std::result::Result<T, SyncError>;
