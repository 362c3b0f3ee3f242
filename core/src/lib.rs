//! Client for a cloud receipt printer HTTP API.
//!
//! # Overview
//! Builds signed, form-encoded requests for the vendor's three operations
//! (submit a print job, register a terminal, remove a terminal) and parses
//! the responses. The request/response layer never touches the network; a
//! `Transport` performs the round trip, and `Printer` ties the two together
//! for callers that only want a blocking call.
//!
//! # Design
//! - `PrinterClient` is stateless apart from the credentials it holds.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - Signatures are recomputed on every call from a fresh timestamp.
//! - Markup helpers return `Result` instead of embedding failure text in the
//!   content; `MarkupError::legacy_text` recovers the old strings if needed.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod markup;
pub mod printer;
pub mod sign;
pub mod transport;
pub mod types;

pub use client::PrinterClient;
pub use config::ClientConfig;
pub use error::{ApiError, ConfigError, MarkupError};
pub use http::{HttpRequest, HttpResponse};
pub use markup::{encode_barcode, encode_qr, Content};
pub use printer::Printer;
pub use sign::sign;
pub use transport::{Transport, UreqTransport};
pub use types::{Credentials, MachineStatus, PrintJob, PrintResponse, Terminal};
