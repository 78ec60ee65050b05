//! Lead Validator - Main entry point
//!
//! `serve` runs the validation endpoint; `check` submits one lead to a running
//! server and prints the result panel.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use lead_validator::client::{AsyncProviderClient, AsyncProviderClientImpl};
use lead_validator::form::{FormController, FormState, HttpTransport, LeadForm, ResultPanel};
use lead_validator::models::SUPPORTED_COUNTRIES;
use lead_validator::services::{ValidationService, ValidationServiceImpl};
use lead_validator::{AppState, Config, ProviderClient};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lead-validator", version, about = "Score leads by verifying email and phone")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the validation HTTP server (default)
    Serve {
        /// Listen address, overrides BIND_ADDRESS
        #[arg(long)]
        bind: Option<String>,
    },
    /// Validate one lead against a running server
    Check {
        /// Email address to verify
        #[arg(long, default_value = "")]
        email: String,

        /// Phone number to verify
        #[arg(long, default_value = "")]
        phone: String,

        /// Country code for the phone number
        #[arg(long, default_value = "US", value_parser = country_code)]
        country: String,

        /// Base URL of the validation server
        #[arg(long, default_value = "http://127.0.0.1:3000")]
        server: String,

        /// Print the raw JSON result instead of the panel
        #[arg(long)]
        json: bool,
    },
}

fn country_code(value: &str) -> Result<String, String> {
    if SUPPORTED_COUNTRIES
        .iter()
        .any(|c| c.code.eq_ignore_ascii_case(value))
    {
        Ok(value.to_ascii_uppercase())
    } else {
        let codes: Vec<&str> = SUPPORTED_COUNTRIES.iter().map(|c| c.code).collect();
        Err(format!("expected one of {}", codes.join(", ")))
    }
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            init_tracing("error");
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };
    init_tracing(&config.log_level);

    match cli.command.unwrap_or(Command::Serve { bind: None }) {
        Command::Serve { bind } => serve(config, bind).await,
        Command::Check {
            email,
            phone,
            country,
            server,
            json,
        } => {
            let timeout = Duration::from_secs(config.request_timeout.saturating_mul(3));
            tokio::task::spawn_blocking(move || {
                check(LeadForm { email, phone, country }, &server, timeout, json)
            })
            .await?
        }
    }
}

async fn serve(config: Config, bind: Option<String>) -> Result<()> {
    if !config.is_configured() {
        warn!("LEAD_VALIDATOR_API_KEY is not set; every validation request will be refused");
    }
    info!(
        "Email provider: {}, phone provider: {}",
        config.email_api_url, config.phone_api_url
    );

    let providers = Arc::new(AsyncProviderClientImpl::new(ProviderClient::new(&config)))
        as Arc<dyn AsyncProviderClient>;
    let service = Arc::new(ValidationServiceImpl::new(providers)) as Arc<dyn ValidationService>;

    let bind_address = bind.unwrap_or_else(|| config.bind_address.clone());
    let state = AppState::new(config, service);

    lead_validator::server::run_server(state, &bind_address).await?;

    info!("Lead validator shutdown complete");
    Ok(())
}

fn check(form: LeadForm, server: &str, timeout: Duration, json: bool) -> Result<()> {
    let transport = HttpTransport::new(server, timeout);
    let mut controller = FormController::new(form);

    match controller.submit(&transport)? {
        FormState::Succeeded(result) if json => {
            println!("{}", serde_json::to_string_pretty(result)?);
            Ok(())
        }
        FormState::Succeeded(result) => {
            print!("{}", ResultPanel(result));
            Ok(())
        }
        FormState::Failed(message) => bail!("{}", message),
        FormState::Idle | FormState::Validating => bail!("Validation did not complete"),
    }
}
