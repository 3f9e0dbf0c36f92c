//! Herald CLI and interactions endpoint entry point.
//!
//! Binary name: `herald`
//!
//! Parses CLI arguments, loads configuration and the bot token, then either
//! registers the guild slash commands or serves the interactions endpoint.

mod commands;
mod gate;
mod http;
mod state;

use std::time::Duration;

use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use herald_core::presence::PresenceRotator;
use herald_infra::config::{load_config, load_token};
use herald_infra::discord::DiscordClient;

use state::AppState;

#[derive(Parser)]
#[command(name = "herald", version, about = "Discord session announcer")]
struct Cli {
    /// Path to the configuration file.
    #[arg(long, default_value = "herald.toml")]
    config: std::path::PathBuf,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the Discord interactions endpoint.
    Serve {
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
    /// Register the guild slash commands, then exit.
    Register,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,herald=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let config = load_config(&cli.config).await?;
    let token = load_token()?;

    match cli.command {
        Commands::Register => {
            let discord = DiscordClient::new(token, config.application_id);
            discord
                .register_guild_commands(config.guild_id, &commands::definitions())
                .await?;
            println!(
                "Registered {} commands for guild {}.",
                commands::definitions().len(),
                config.guild_id
            );
        }

        Commands::Serve { host, port } => {
            let state = AppState::init(&config, token).await?;
            let cancel = CancellationToken::new();

            // Optional presence rotation, cancelled on shutdown.
            let rotation = config.presence.as_ref().and_then(|presence| {
                PresenceRotator::new(
                    presence.statuses.clone(),
                    Duration::from_secs(presence.interval_secs),
                )
            });
            let rotator_task = rotation.map(|rotator| {
                let discord = state.discord.clone();
                let cancel = cancel.clone();
                tokio::spawn(async move { rotator.run(&discord, cancel).await })
            });

            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            println!("Herald listening on http://{addr}");
            println!("Press Ctrl+C to stop");

            let router = http::router::build_router(state);

            let shutdown = {
                let cancel = cancel.clone();
                async move {
                    shutdown_signal().await;
                    cancel.cancel();
                }
            };
            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown)
                .await?;

            if let Some(task) = rotator_task {
                task.await?;
            }
            println!("\nServer stopped.");
        }
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
