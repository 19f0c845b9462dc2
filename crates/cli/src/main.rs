//! Vault API client CLI.
//!
//! Every request is authenticated with the configured API key and a
//! short-lived RS256 token signed with the matching private key.
//!
//! This tool provides commands for:
//! - Listing vault accounts and creating one (`demo`, the default)
//! - Issuing either call on its own
//! - Printing a signed token for a path, for debugging

use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;

use vault_client_common::logging::{init_logging, level_for};
use vault_client_common::request_signing::RequestSigner;
use vault_client_common::settings::Settings;

mod commands;
mod error;

use error::CliError;

#[derive(Parser)]
#[command(name = "vault-client")]
#[command(about = "Call the vault REST API with signed request tokens")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the TOML settings file
    #[arg(long, short, global = true, default_value = "vault-client.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List vault accounts, then create the account named in [demo]
    Demo,

    /// List vault accounts (first page)
    Accounts,

    /// Create a vault account
    CreateAccount {
        /// Account name
        #[arg(long)]
        name: String,

        /// Hide the account in the web console
        #[arg(long)]
        hidden: bool,
    },

    /// Print a signed token for a request path
    Sign {
        /// Request path, e.g. /v1/vault/accounts
        path: String,

        /// JSON request body, byte-for-byte as it will be sent
        #[arg(long)]
        body: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(level_for(cli.verbose)) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn print_json(value: &Value) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = Settings::from_file(&cli.config)?;

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => {
            let client = commands::build_client(&settings)?;
            let (accounts, created) = commands::demo(&client, &settings.demo)?;
            print_json(&accounts)?;
            print_json(&created)?;
        }
        Commands::Accounts => {
            let client = commands::build_client(&settings)?;
            print_json(&commands::accounts(&client)?)?;
        }
        Commands::CreateAccount { name, hidden } => {
            let client = commands::build_client(&settings)?;
            print_json(&commands::create_account(&client, &name, hidden)?)?;
        }
        Commands::Sign { path, body } => {
            let credentials = settings.load_credentials()?;
            let signer = RequestSigner::new(&credentials)?;
            println!("{}", commands::sign(&signer, &path, body.as_deref())?);
        }
    }

    Ok(())
}
