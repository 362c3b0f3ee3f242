//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! The vendor API only accepts form-encoded POSTs, so a request is fully
//! described by its URL and an ordered list of form fields. `PrinterClient`
//! builds these values and parses `HttpResponse` values without touching the
//! network; a `Transport` performs the round trip in between.
//!
//! Field order is preserved as built. The server does not depend on it, but
//! it keeps request dumps and test vectors stable.

/// A form-encoded POST request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub form: Vec<(String, String)>,
}

impl HttpRequest {
    pub(crate) fn post(url: String) -> Self {
        Self {
            url,
            form: Vec::new(),
        }
    }

    pub(crate) fn field(mut self, name: &str, value: impl Into<String>) -> Self {
        self.form.push((name.to_string(), value.into()));
        self
    }

    /// Look up a form field by name.
    pub fn form_value(&self, name: &str) -> Option<&str> {
        self.form
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// An HTTP response described as plain data.
///
/// Constructed by the transport after executing an `HttpRequest`, then passed
/// to `PrinterClient::parse_*` methods.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}
