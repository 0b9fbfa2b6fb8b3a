//! OFD Command Line Tool
//!
//! Provides commands for working with the OFD API:
//! - canonicalize: Output the canonical JSON a signature covers
//! - sign: Compute the MD5 request signature for a parameter file
//! - nonce: Generate a request nonce
//! - send: Execute a request against a service

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use ofd_client::OfdClient;
use ofd_core::{normalize_params, ClientConfig, Credentials, Method, OFD_TOKEN_ENV};
use ofd_sign::{canonical_string, sign_params, NonceGenerator};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "ofd")]
#[command(version)]
#[command(about = "OFD API tool - sign parameters and execute requests")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Output the canonical JSON a signature covers
    #[command(about = "Print the canonical (signed) form of a parameter file")]
    Canonicalize {
        /// Path to the JSON parameter file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Compute the MD5 request signature
    #[command(about = "Compute the request signature for a parameter file")]
    Sign {
        /// Path to the JSON parameter file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Integration secret key
        #[arg(long)]
        secret: String,
    },

    /// Generate a request nonce
    #[command(about = "Generate a per-request nonce")]
    Nonce,

    /// Execute a request against a service
    #[command(about = "Send a request and print the decoded payload")]
    Send {
        /// HTTP method (GET, POST, PUT, DELETE)
        #[arg(value_name = "METHOD")]
        method: String,

        /// Model path, e.g. `documents` or `Command/42`
        #[arg(value_name = "MODEL")]
        model: String,

        /// Optional JSON parameter file (defaults to `{}`)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Service base URL
        #[arg(long)]
        base_url: String,

        /// API token; falls back to the OFD_TOKEN environment variable
        #[arg(long, conflicts_with_all = ["app_id", "secret_key"])]
        token: Option<String>,

        /// Integration app id (requires --secret-key)
        #[arg(long, requires = "secret_key")]
        app_id: Option<String>,

        /// Integration secret key (requires --app-id)
        #[arg(long, requires = "app_id")]
        secret_key: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ofd=info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Canonicalize { file } => handle_canonicalize(&file),
        Commands::Sign { file, secret } => handle_sign(&file, &secret),
        Commands::Nonce => handle_nonce(),
        Commands::Send {
            method,
            model,
            file,
            base_url,
            token,
            app_id,
            secret_key,
        } => handle_send(&method, &model, file.as_deref(), &base_url, token, app_id, secret_key).await,
    }
}

fn read_params(file: &std::path::Path) -> Result<serde_json::Value> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read file: {}", file.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {} as JSON", file.display()))
}

fn handle_canonicalize(file: &std::path::Path) -> Result<()> {
    let params = read_params(file)?;
    println!("{}", canonical_string(&normalize_params(&params)));
    Ok(())
}

fn handle_sign(file: &std::path::Path, secret: &str) -> Result<()> {
    let params = read_params(file)?;
    let sign = sign_params(&params, secret).context("Failed to sign parameters")?;
    println!("{sign}");
    Ok(())
}

fn handle_nonce() -> Result<()> {
    println!("{}", NonceGenerator::new().next());
    Ok(())
}

async fn handle_send(
    method: &str,
    model: &str,
    file: Option<&std::path::Path>,
    base_url: &str,
    token: Option<String>,
    app_id: Option<String>,
    secret_key: Option<String>,
) -> Result<()> {
    let method = Method::from_str(method)?;
    let params = match file {
        Some(path) => read_params(path)?,
        None => serde_json::json!({}),
    };

    let credentials = match (app_id, secret_key, token) {
        (Some(app_id), Some(secret_key), _) => Credentials::AppSecret { app_id, secret_key },
        (_, _, Some(token)) => Credentials::ApiToken(token),
        _ => match std::env::var(OFD_TOKEN_ENV) {
            Ok(token) if !token.is_empty() => Credentials::ApiToken(token),
            _ => bail!(
                "no credentials: pass --token, --app-id/--secret-key, or set {OFD_TOKEN_ENV}"
            ),
        },
    };

    let client = OfdClient::new(ClientConfig::new(base_url, credentials))?;
    match client.request(method, model, params).await {
        Ok(payload) => {
            println!("{}", serde_json::to_string_pretty(&payload)?);
            Ok(())
        }
        Err(err) => {
            eprintln!("{}", serde_json::to_string_pretty(&err.error_body())?);
            Err(err.into())
        }
    }
}
