//! Error types for the cloud printer client.
//!
//! # Design
//! Vendor-level failures (non-`1` state codes) are not errors here: they come
//! back as data for the caller to branch on. `ApiError` only covers the HTTP
//! layer: the request never completed, the server answered with a non-2xx
//! status, or a JSON body could not be decoded. Content validation lives in
//! `MarkupError` so formatting problems surface before any request is built.

use thiserror::Error;

/// Errors returned by `PrinterClient` parse methods and the `Printer` facade.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request never produced a response (connect failure, timeout, ...).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The system clock reads before the Unix epoch, so no timestamp can be
    /// signed.
    #[error("system clock error: {0}")]
    Clock(String),
}

/// Validation failures for print markup fragments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    /// QR payloads are limited to 96 characters.
    #[error("QR content is {len} characters, limit is 96")]
    QrTooLong { len: usize },

    /// Barcode content must be non-empty and all decimal digits.
    #[error("barcode content must consist solely of digits")]
    BarcodeNotNumeric,

    /// Every table row carries exactly three or four cells.
    #[error("table row {row} has {cells} cells, expected 3 or 4")]
    TableColumns { row: usize, cells: usize },

    /// Table cells may not contain line breaks or tag characters.
    #[error("table cell {cell} in row {row} contains a line break or tag character")]
    TableCell { row: usize, cell: usize },
}

impl MarkupError {
    /// The failure text the vendor's reference client returned in place of a
    /// tag. Only meaningful for the QR and barcode variants.
    pub fn legacy_text(&self) -> Option<&'static str> {
        match self {
            MarkupError::QrTooLong { .. } => Some("<QR>内容超过96个文字,打印失败</QR>"),
            MarkupError::BarcodeNotNumeric => Some("字符串内容必须为全数字"),
            _ => None,
        }
    }
}

/// Errors raised while loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}
