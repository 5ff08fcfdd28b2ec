use std::{path::PathBuf, process::ExitCode, sync::Arc};

use anyhow::Result;
use clap::Parser;
use client_core::{UserClient, UserLookup, ViewRenderer};
use shared::UserId;
use tracing_subscriber::EnvFilter;

mod config;
mod render;

use config::{load_settings, DEFAULT_CONFIG_PATH};
use render::{PageRenderer, StdoutRenderer};

/// Look up a user on the remote API and render their profile card as HTML.
#[derive(Parser, Debug)]
struct Args {
    /// Identifier of the user to look up.
    user_id: String,
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    #[arg(long)]
    api_base_url: Option<String>,
    #[arg(long)]
    user_agent: Option<String>,
    /// Write an HTML page here instead of printing the fragment.
    #[arg(long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    let args = Args::parse();

    let mut settings = load_settings(&args.config);
    if let Some(v) = args.api_base_url {
        settings.api_base_url = v;
    }
    if let Some(v) = args.user_agent {
        settings.user_agent = v;
    }
    if let Some(v) = args.output {
        settings.output_path = Some(v);
    }

    let user_id = UserId::parse(&args.user_id)?;
    let client = UserClient::new(&settings.client_config())?;
    let renderer: Arc<dyn ViewRenderer> = match settings.output_path {
        Some(path) => Arc::new(PageRenderer::new(path)),
        None => Arc::new(StdoutRenderer),
    };

    let lookup = UserLookup::new(Arc::new(client), renderer);
    // The observer has already logged the failure.
    match lookup.lookup_user(user_id.as_str()).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(_) => Ok(ExitCode::FAILURE),
    }
}
