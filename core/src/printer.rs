//! Round-trip facade: build, execute, parse.
//!
//! Every method performs exactly one request with a fresh timestamp. Nothing
//! is retried or cached, and `&self` is all that is needed, so a `Printer`
//! can be shared freely between threads.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::client::PrinterClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::transport::{Transport, UreqTransport};
use crate::types::{Credentials, PrintJob, PrintResponse, Terminal};

#[derive(Debug, Clone)]
pub struct Printer<T = UreqTransport> {
    client: PrinterClient,
    transport: T,
}

impl Printer<UreqTransport> {
    /// A printer talking to the vendor endpoint with default settings.
    pub fn new(credentials: Credentials) -> Self {
        Self::with_config(credentials, &ClientConfig::default())
    }

    pub fn with_config(credentials: Credentials, config: &ClientConfig) -> Self {
        Self {
            client: PrinterClient::new(credentials, &config.base_url),
            transport: UreqTransport::new(config.timeout),
        }
    }
}

impl<T: Transport> Printer<T> {
    pub fn with_transport(client: PrinterClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &PrinterClient {
        &self.client
    }

    /// Print `content` on the given terminal. `repeat` in 1..=9 prints that
    /// many copies; any other value prints once.
    pub fn submit_print(
        &self,
        machine_code: &str,
        machine_secret_key: &str,
        content: &str,
        repeat: u8,
    ) -> Result<PrintResponse, ApiError> {
        let terminal = Terminal::new(machine_code, machine_secret_key);
        let job = PrintJob::new(terminal, content).repeat(repeat);
        self.print(&job)
    }

    pub fn print(&self, job: &PrintJob) -> Result<PrintResponse, ApiError> {
        let req = self.client.build_print(job, unix_seconds(SystemTime::now())?);
        self.client.parse_print(self.transport.execute(req)?)
    }

    /// Register a terminal. Returns the raw status code text; see
    /// `MachineStatus::from_body`. A non-2xx reply becomes
    /// `ApiError::HttpError` with the raw body inside.
    pub fn add_machine(
        &self,
        machine_code: &str,
        machine_secret_key: &str,
        print_name: &str,
        mobile_phone: &str,
    ) -> Result<String, ApiError> {
        let terminal = Terminal::new(machine_code, machine_secret_key);
        let req = self.client.build_add_machine(&terminal, print_name, mobile_phone);
        self.client.parse_add_machine(self.transport.execute(req)?)
    }

    /// Deregister a terminal. Returns the raw status code text, or
    /// `ApiError::HttpError` carrying it on a non-2xx reply.
    pub fn remove_machine(
        &self,
        machine_code: &str,
        machine_secret_key: &str,
    ) -> Result<String, ApiError> {
        let terminal = Terminal::new(machine_code, machine_secret_key);
        let req = self.client.build_remove_machine(&terminal);
        self.client.parse_remove_machine(self.transport.execute(req)?)
    }
}

fn unix_seconds(now: SystemTime) -> Result<u64, ApiError> {
    now.duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .map_err(|e| ApiError::Clock(e.to_string()))
}
