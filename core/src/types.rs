//! Domain types for the cloud printer API.
//!
//! # Design
//! `Credentials` belong to the client and never change after construction.
//! `Terminal` and `PrintJob` are supplied per call and never retained.
//! Responses are kept as the server sent them: print replies as decoded JSON,
//! terminal management replies as the bare status code text. Typed views
//! over both are opt-in.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ConfigError;

/// Account credentials issued by the vendor.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub partner_id: String,
    pub api_key: String,
    pub username: String,
}

impl Credentials {
    pub fn new(
        partner_id: impl Into<String>,
        api_key: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            partner_id: partner_id.into(),
            api_key: api_key.into(),
            username: username.into(),
        }
    }

    /// Read `YLY_PARTNER`, `YLY_API_KEY` and `YLY_USERNAME`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Like `from_env`, reading each variable through `lookup`.
    pub fn from_lookup(
        lookup: impl Fn(&'static str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let get = |var| lookup(var).ok_or(ConfigError::Missing(var));
        Ok(Self {
            partner_id: get("YLY_PARTNER")?,
            api_key: get("YLY_API_KEY")?,
            username: get("YLY_USERNAME")?,
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("partner_id", &self.partner_id)
            .field("api_key", &"<redacted>")
            .field("username", &self.username)
            .finish()
    }
}

/// A registered printer: its terminal number and terminal secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Terminal {
    pub machine_code: String,
    pub machine_secret_key: String,
}

impl Terminal {
    pub fn new(machine_code: impl Into<String>, machine_secret_key: impl Into<String>) -> Self {
        Self {
            machine_code: machine_code.into(),
            machine_secret_key: machine_secret_key.into(),
        }
    }
}

impl fmt::Debug for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Terminal")
            .field("machine_code", &self.machine_code)
            .field("machine_secret_key", &"<redacted>")
            .finish()
    }
}

/// A single print submission.
#[derive(Debug, Clone)]
pub struct PrintJob {
    pub terminal: Terminal,
    pub content: String,
    /// Number of copies. Only 1 through 9 emit a repeat directive.
    pub repeat: u8,
}

impl PrintJob {
    pub fn new(terminal: Terminal, content: impl Into<String>) -> Self {
        Self {
            terminal,
            content: content.into(),
            repeat: 0,
        }
    }

    pub fn repeat(mut self, count: u8) -> Self {
        self.repeat = count;
        self
    }
}

/// Decoded body of a print submission response.
///
/// The JSON the server sent is kept exactly as received; `state` and `id`
/// are read-only views over it. A reply without `state` is still a reply,
/// for instance a vendor error object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrintResponse(Value);

impl PrintResponse {
    pub fn new(raw: Value) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> &Value {
        &self.0
    }

    pub fn into_raw(self) -> Value {
        self.0
    }

    /// The `state` field, untouched.
    pub fn state(&self) -> Option<&Value> {
        self.0.get("state")
    }

    /// The `id` field, untouched.
    pub fn id(&self) -> Option<&Value> {
        self.0.get("id")
    }

    /// `state` as text, whether the server sent `"1"` or `1`.
    pub fn state_code(&self) -> Option<String> {
        self.state().and_then(code_text)
    }

    /// `id` as text; `None` when absent, null or empty.
    pub fn job_id(&self) -> Option<String> {
        self.id().and_then(code_text).filter(|id| !id.is_empty())
    }

    pub fn is_success(&self) -> bool {
        self.state_code().as_deref() == Some("1")
    }
}

fn code_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Interpretation of the status code returned by the terminal management
/// endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineStatus {
    /// `1`
    Success,
    /// `2`, only returned when adding.
    Duplicate,
    /// `3` or `4`; the carried value is the raw code.
    Failed(u8),
    /// `5`
    AuthFailed,
    /// `6`
    InvalidTerminal,
}

impl MachineStatus {
    /// Map a raw response body such as `"1"` or `"5\n"`. Unknown codes yield
    /// `None`.
    pub fn from_body(body: &str) -> Option<Self> {
        match body.trim() {
            "1" => Some(Self::Success),
            "2" => Some(Self::Duplicate),
            "3" => Some(Self::Failed(3)),
            "4" => Some(Self::Failed(4)),
            "5" => Some(Self::AuthFailed),
            "6" => Some(Self::InvalidTerminal),
            _ => None,
        }
    }

    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

impl fmt::Display for MachineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MachineStatus::Success => write!(f, "success"),
            MachineStatus::Duplicate => write!(f, "duplicate terminal"),
            MachineStatus::Failed(code) => write!(f, "failed (code {code})"),
            MachineStatus::AuthFailed => write!(f, "user authentication failed"),
            MachineStatus::InvalidTerminal => write!(f, "invalid terminal id"),
        }
    }
}
