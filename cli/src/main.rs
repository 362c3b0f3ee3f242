mod args;

use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use yly_core::{encode_barcode, encode_qr, ClientConfig, Credentials, MachineStatus, Printer};

use args::{AccountArgs, Cli, Command, PrintArgs};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Qr { text } => println!("{}", encode_qr(&text)?),
        Command::Barcode { digits } => println!("{}", encode_barcode(&digits)?),
        Command::Print(args) => {
            let printer = printer(cli.account)?;
            let content = read_content(&args)?;
            let resp = printer.submit_print(
                &args.terminal.machine_code,
                &args.terminal.secret,
                &content,
                args.repeat,
            )?;
            tracing::info!(state = ?resp.state(), id = ?resp.id(), "print submitted");
            println!("{}", serde_json::to_string(&resp)?);
        }
        Command::AddMachine(args) => {
            let printer = printer(cli.account)?;
            let body = printer.add_machine(
                &args.terminal.machine_code,
                &args.terminal.secret,
                &args.name,
                &args.phone,
            )?;
            report_status(&body);
        }
        Command::RemoveMachine(terminal) => {
            let printer = printer(cli.account)?;
            let body = printer.remove_machine(&terminal.machine_code, &terminal.secret)?;
            report_status(&body);
        }
    }
    Ok(())
}

fn printer(account: AccountArgs) -> Result<Printer> {
    printer_with(&account, |var| std::env::var(var).ok())
}

/// Flags first, then `env`.
fn printer_with(
    account: &AccountArgs,
    env: impl Fn(&'static str) -> Option<String>,
) -> Result<Printer> {
    let lookup = |var: &'static str| account.flag(var).or_else(|| env(var));
    let credentials = Credentials::from_lookup(lookup)
        .context("credentials need --partner, --api-key and --username or YLY_* variables")?;
    let config = ClientConfig::from_lookup(lookup).context("invalid client configuration")?;
    Ok(Printer::with_config(credentials, &config))
}

fn read_content(args: &PrintArgs) -> Result<String> {
    if let Some(content) = &args.content {
        return Ok(content.clone());
    }
    let path = args.file.as_ref().context("--content or --file is required")?;
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn report_status(body: &str) {
    match MachineStatus::from_body(body) {
        Some(status) => println!("{} ({status})", body.trim()),
        None => println!("{} (unrecognised response)", body.trim()),
    }
}
