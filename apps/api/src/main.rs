mod catalog;
mod chat;
mod config;
mod errors;
mod llm_client;
mod models;
mod roadmap;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio::io::BufReader;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::CourseCatalog;
use crate::chat::repl::run_chat;
use crate::chat::session::ChatSession;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[derive(Parser)]
#[command(name = "pathway")]
#[command(about = "Career roadmap assistant: LLM roadmaps plus fuzzy course matching")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the JSON HTTP API (default)
    Serve,
    /// Collect a profile interactively in the terminal
    Chat,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (fails on missing GEMINI_API_KEY)
    let config = Config::from_env()?;

    // Initialize structured logging; stderr keeps the chat transcript on stdout clean
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Pathway v{}", env!("CARGO_PKG_VERSION"));

    let catalog = Arc::new(CourseCatalog::load(&config.courses_path)?);
    if catalog.is_empty() {
        warn!("Course catalog is empty; no courses will be recommended");
    }

    let llm = LlmClient::new(config.gemini_api_key.clone())?;
    info!(
        "LLM client initialized (model: {}, temperature: {})",
        llm_client::MODEL,
        llm_client::TEMPERATURE
    );

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(&config, catalog, llm).await,
        Commands::Chat => {
            let mut session = ChatSession::new();
            run_chat(
                BufReader::new(tokio::io::stdin()),
                tokio::io::stdout(),
                &mut session,
                &catalog,
                &llm,
            )
            .await
        }
    }
}

async fn serve(config: &Config, catalog: Arc<CourseCatalog>, llm: LlmClient) -> Result<()> {
    let state = AppState {
        catalog,
        generator: Arc::new(llm),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
