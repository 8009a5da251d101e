//! WWWA - subscribe a phone number to water-outage alerts
//!
//! Interactive by default; `send` and `verify` run a single step.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use verify_flow::cli;
use verify_flow::domains::verification::VerificationFlow;
use verify_flow::kernel::FlowDeps;
use verify_flow::Config;

#[derive(Parser)]
#[command(name = "wwwa")]
#[command(about = "Verify a phone number for water-outage alerts")]
struct Cli {
    /// Verification backend, overrides SUBSCRIBERS_BASE_URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Text a verification code to a phone number
    Send {
        #[arg(long)]
        phone: String,
    },

    /// Confirm the code received by SMS
    Verify {
        #[arg(long)]
        phone: String,
        #[arg(long)]
        code: String,
    },
}

fn main() -> Result<ExitCode> {
    // Logs go to stderr so they never interleave with prompts
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,verify_flow=info,subscribers_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Cli::parse();

    let config = Config::resolve(args.base_url).context("Failed to load configuration")?;
    tracing::info!(base_url = %config.base_url, "Configuration loaded");

    let rt = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let flow = VerificationFlow::new(FlowDeps::from_config(&config));

    let code = match args.command {
        None => {
            cli::run_interactive(&rt, &flow)?;
            ExitCode::SUCCESS
        }
        Some(Commands::Send { phone }) => cli::run_send(&rt, &flow, phone),
        Some(Commands::Verify { phone, code }) => cli::run_verify(&rt, &flow, phone, code),
    };

    Ok(code)
}
