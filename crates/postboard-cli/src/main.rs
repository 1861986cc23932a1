//! Postboard CLI
//!
//! Command-line frontend for the Postboard feed. Talks to the same GraphQL
//! endpoint as the web frontend.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod render;

use postboard_app::{AppConfig, AppError, FeedClient, HttpTransport};

#[derive(Parser)]
#[command(name = "postboard")]
#[command(about = "Postboard - browse and edit the social feed from a terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path
    #[arg(short, long, global = true, default_value = "postboard.toml")]
    config: PathBuf,

    /// GraphQL endpoint (overrides config and POSTBOARD_GRAPHQL_URL)
    #[arg(short, long, global = true)]
    endpoint: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a user's profile and the global feed
    Feed {
        /// User to show (defaults to the configured default user)
        #[arg(short, long)]
        user: Option<String>,
    },

    /// Create a post
    Create {
        /// Owner of the new post
        #[arg(short, long)]
        user: Option<String>,

        /// Post title
        #[arg(short, long)]
        title: String,

        /// Post body
        #[arg(short = 'b', long, default_value = "")]
        content: String,
    },

    /// Delete a post by id
    Delete {
        /// Post id
        id: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    match run(cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {}", report(&err));
            ExitCode::from(exit_code(&err))
        }
    }
}

async fn run(cli: Cli) -> Result<String> {
    let config = AppConfig::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?
        .with_env_overrides()
        .with_endpoint_override(cli.endpoint.as_deref());
    config.validate()?;
    tracing::debug!(endpoint = %config.graphql_endpoint, "configuration loaded");

    let client = FeedClient::new(HttpTransport::new(config.graphql_endpoint.clone()));

    let output = match cli.command {
        Commands::Feed { user } => commands::feed(&client, &config, user.as_deref()).await?,
        Commands::Create {
            user,
            title,
            content,
        } => commands::create(&client, &config, user.as_deref(), title, content).await?,
        Commands::Delete { id } => commands::delete(&client, &id).await?,
    };
    Ok(output)
}

/// Categorised message for client errors, the full chain otherwise.
fn report(err: &anyhow::Error) -> String {
    match err.downcast_ref::<AppError>() {
        Some(app) => app.describe(),
        None => format!("{err:#}"),
    }
}

/// 2 for errors the user can fix by changing input or config, 1 otherwise.
fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<AppError>() {
        Some(app) if app.category().is_user_correctable() => 2,
        _ => 1,
    }
}
