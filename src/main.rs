//! Executor registration CLI.
//!
//! # Workflow
//!
//! ```text
//!   generate                     external signer               submit
//!  ┌──────────────┐   cmd   ┌──────────────────────┐  sig  ┌──────────────────┐
//!  │ env → digest │ ──────▶ │ key manager signs the │ ────▶ │ normalize → POST │
//!  │ + safe hash  │         │ safe-message digest   │       │ /v1/automations/ │
//!  └──────────────┘         └──────────────────────┘       │     executor     │
//!                                                          └──────────────────┘
//! ```
//!
//! Each step is its own process run; the timestamp printed by `generate` must
//! be passed back to `submit`.

use std::process::ExitCode;
use std::time::SystemTime;

use clap::{Parser, Subcommand};
use serde_json::Value;

use executor_registrar::config::unix_millis;
use executor_registrar::digest::DigestBuilder;
use executor_registrar::observability::init_logging;
use executor_registrar::registration::{HttpTransport, SubmitOutcome, Submitter};
use executor_registrar::Settings;

#[derive(Parser)]
#[command(name = "executor-registrar", version)]
#[command(about = "Generate and submit executor registrations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate executor digest to sign
    Generate,
    /// Submit signed payload to API
    Submit {
        /// Signature string
        #[arg(short, long)]
        signature: String,

        /// Timestamp the digest was generated with
        #[arg(short, long)]
        timestamp: u64,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env(unix_millis(SystemTime::now())?)?;

    match cli.command {
        Commands::Generate => {
            let report = DigestBuilder::new().generate(&settings)?;
            println!("actual {}", report.data_hash);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Submit {
            signature,
            timestamp,
        } => {
            let submitter = Submitter::new(HttpTransport::new());
            let payload = submitter.prepare(&settings, &signature, timestamp)?;
            println!("{}", serde_json::to_string_pretty(&payload)?);

            match submitter.send(&settings, &payload).await? {
                SubmitOutcome::Registered { body } => {
                    println!("registered executor: {}", pretty(&body));
                }
                SubmitOutcome::Rejected { status, body } => {
                    eprintln!("error registering executor ({}): {}", status, pretty(&body));
                }
                SubmitOutcome::Failed { message } => {
                    eprintln!("error registering executor: {}", message);
                }
            }
        }
    }

    Ok(())
}

/// Pretty-print JSON bodies, pass anything else through.
fn pretty(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .and_then(|json| serde_json::to_string_pretty(&json))
        .unwrap_or_else(|_| body.to_string())
}
