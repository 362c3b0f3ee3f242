use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "yly", version, about = "Send jobs to and manage cloud receipt printers")]
pub struct Cli {
    #[command(flatten)]
    pub account: AccountArgs,

    #[command(subcommand)]
    pub cmd: Command,
}

/// Account and endpoint settings. Each flag overrides the `YLY_*`
/// environment variable of the same name.
#[derive(Args, Debug, Default)]
pub struct AccountArgs {
    /// Partner id issued by the vendor [env: YLY_PARTNER]
    #[arg(long, global = true)]
    pub partner: Option<String>,

    /// [env: YLY_API_KEY]
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// [env: YLY_USERNAME]
    #[arg(long, global = true)]
    pub username: Option<String>,

    /// [env: YLY_BASE_URL]
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds, at least 1 [env: YLY_TIMEOUT_SECS]
    #[arg(long, global = true)]
    pub timeout: Option<u64>,
}

impl AccountArgs {
    /// The flag value standing in for environment variable `var`.
    pub fn flag(&self, var: &str) -> Option<String> {
        match var {
            "YLY_PARTNER" => self.partner.clone(),
            "YLY_API_KEY" => self.api_key.clone(),
            "YLY_USERNAME" => self.username.clone(),
            "YLY_BASE_URL" => self.base_url.clone(),
            "YLY_TIMEOUT_SECS" => self.timeout.map(|secs| secs.to_string()),
            _ => None,
        }
    }
}

#[derive(Args, Debug)]
pub struct TerminalArgs {
    #[arg(long)]
    pub machine_code: String,

    /// Terminal secret key
    #[arg(long)]
    pub secret: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print content on a terminal
    Print(PrintArgs),
    /// Register a terminal with the account
    AddMachine(AddMachineArgs),
    /// Remove a terminal from the account
    RemoveMachine(TerminalArgs),
    /// Output a QR code tag
    Qr { text: String },
    /// Output a barcode tag
    Barcode { digits: String },
}

#[derive(Args, Debug)]
pub struct PrintArgs {
    #[command(flatten)]
    pub terminal: TerminalArgs,

    /// Number of copies, 1 to 9
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..10))]
    pub repeat: u8,

    #[arg(long, conflicts_with = "file", required_unless_present = "file")]
    pub content: Option<String>,

    /// Read content from a file, `-` for stdin
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct AddMachineArgs {
    #[command(flatten)]
    pub terminal: TerminalArgs,

    /// Display name for the printer
    #[arg(long)]
    pub name: String,

    /// SIM phone number in the printer
    #[arg(long, default_value = "")]
    pub phone: String,
}
