//! Stateless request builder and response parser for the cloud printer API.
//!
//! # Design
//! `PrinterClient` holds only the account credentials and a base URL, and
//! carries no mutable state between calls. Each operation is split into a
//! `build_*` method that produces a signed `HttpRequest` and a `parse_*`
//! method that consumes an `HttpResponse`. Builders that sign a timestamp
//! take it as an argument, so the same inputs always produce the same
//! request.

use tracing::{debug, warn};

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::markup::repeat_directive;
use crate::sign::{add_machine_signature, print_signature, remove_machine_signature};
use crate::types::{Credentials, PrintJob, PrintResponse, Terminal};

/// Synchronous, stateless client for the cloud printer API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. `Printer` pairs it with a transport for callers
/// that just want the round trip done.
#[derive(Debug, Clone)]
pub struct PrinterClient {
    credentials: Credentials,
    base_url: String,
}

impl PrinterClient {
    pub fn new(credentials: Credentials, base_url: &str) -> Self {
        Self {
            credentials,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sign and build a print submission. `timestamp` is Unix seconds.
    pub fn build_print(&self, job: &PrintJob, timestamp: u64) -> HttpRequest {
        let creds = &self.credentials;
        let time = timestamp.to_string();
        let sign = print_signature(
            &creds.api_key,
            &job.terminal.machine_code,
            &creds.partner_id,
            &time,
            &job.terminal.machine_secret_key,
        );
        let content = match repeat_directive(job.repeat) {
            Some(directive) => directive + &job.content,
            None => job.content.clone(),
        };
        debug!(
            machine_code = %job.terminal.machine_code,
            repeat = job.repeat,
            "building print request"
        );
        HttpRequest::post(format!("{}/", self.base_url))
            .field("partner", creds.partner_id.as_str())
            .field("machine_code", job.terminal.machine_code.as_str())
            .field("content", content)
            .field("time", time)
            .field("sign", sign)
    }

    /// Sign and build a terminal registration.
    pub fn build_add_machine(
        &self,
        terminal: &Terminal,
        print_name: &str,
        mobile_phone: &str,
    ) -> HttpRequest {
        let creds = &self.credentials;
        let sign = add_machine_signature(
            &creds.api_key,
            &terminal.machine_code,
            mobile_phone,
            &creds.partner_id,
            print_name,
            &creds.username,
            &terminal.machine_secret_key,
        );
        debug!(machine_code = %terminal.machine_code, "building add machine request");
        HttpRequest::post(format!("{}/addprint.php", self.base_url))
            .field("machine_code", terminal.machine_code.as_str())
            .field("partner", creds.partner_id.as_str())
            .field("mobilephone", mobile_phone)
            .field("printname", print_name)
            .field("username", creds.username.as_str())
            .field("sign", sign)
            .field("msign", terminal.machine_secret_key.as_str())
    }

    /// Sign and build a terminal removal.
    pub fn build_remove_machine(&self, terminal: &Terminal) -> HttpRequest {
        let creds = &self.credentials;
        let sign = remove_machine_signature(
            &creds.api_key,
            &terminal.machine_code,
            &creds.partner_id,
            &terminal.machine_secret_key,
        );
        debug!(machine_code = %terminal.machine_code, "building remove machine request");
        HttpRequest::post(format!("{}/removeprint.php", self.base_url))
            .field("partner", creds.partner_id.as_str())
            .field("machine_code", terminal.machine_code.as_str())
            .field("sign", sign)
    }

    /// Any JSON body is returned unmodified, including vendor error objects
    /// without a `state` field. Only a body that is not JSON is an error.
    pub fn parse_print(&self, response: HttpResponse) -> Result<PrintResponse, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// Returns the raw status code text, e.g. `"1"`. On a non-2xx status the
    /// body is carried unchanged in `ApiError::HttpError::body`.
    pub fn parse_add_machine(&self, response: HttpResponse) -> Result<String, ApiError> {
        check_status(&response)?;
        Ok(response.body)
    }

    /// Returns the raw status code text, e.g. `"1"`. On a non-2xx status the
    /// body is carried unchanged in `ApiError::HttpError::body`.
    pub fn parse_remove_machine(&self, response: HttpResponse) -> Result<String, ApiError> {
        check_status(&response)?;
        Ok(response.body)
    }
}

/// Map non-2xx status codes to `ApiError::HttpError`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    warn!(status = response.status, "unexpected HTTP status from printer API");
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
