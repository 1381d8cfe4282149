//! FA-Admin: forms-authentication ticket tool
//!
//! Provisions machine keys, issues protected tickets and opens them again.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use fa_admin::commands::{self, IssueRequest};
use fa_admin::{Args, Command};
use fa_ticket::{SystemTimeSource, TicketConfig};

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout carries only command output
    let filter = std::env::var("FA_LOG_LEVEL")
        .ok()
        .map(EnvFilter::new)
        .unwrap_or_else(|| EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let output = match args.command {
        Command::GenerateKey {
            validation,
            decryption,
        } => commands::generate_key(&validation, &decryption)?,
        Command::Issue {
            name,
            user_data,
            cookie_path,
            persistent,
            minutes,
        } => {
            let key = commands::load_machine_key(args.web_config.as_deref())?;
            let request = IssueRequest {
                name,
                user_data,
                cookie_path,
                persistent,
                minutes,
            };
            commands::issue(SystemTimeSource, TicketConfig::from_env(), &request, &key)?
        }
        Command::Open {
            token,
            require_valid,
        } => {
            let key = commands::load_machine_key(args.web_config.as_deref())?;
            commands::open(SystemTimeSource, &token, &key, require_valid)?
        }
    };

    println!("{output}");
    Ok(())
}
