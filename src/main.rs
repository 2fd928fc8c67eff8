use anyhow::{Context, Result};
use clap::Parser;
use podscribe::{create_router, AppState, Config, RemoteClient, Secrets};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "podscribe", about = "Transcribe-and-summarize session service")]
struct Cli {
    /// Path to a config file (without extension, e.g. config/podscribe)
    #[arg(long)]
    config: Option<String>,

    /// Override the bind address from the config
    #[arg(long)]
    bind: Option<String>,

    /// Override the port from the config
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    let mut cfg = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(bind) = cli.bind {
        cfg.service.http.bind = bind;
    }
    if let Some(port) = cli.port {
        cfg.service.http.port = port;
    }

    info!("{} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));
    info!("Remote API: {}", cfg.remote.base_url);
    info!(
        "Models: transcription={}, summarization={}",
        cfg.remote.transcription_model, cfg.remote.summarization_model
    );

    let secrets = Secrets::load(&cfg.storage.secrets_path)?;
    let remote = RemoteClient::new(&cfg.remote, secrets.api_key().to_string())?;

    std::fs::create_dir_all(&cfg.storage.upload_dir)
        .with_context(|| format!("Failed to create upload dir {}", cfg.storage.upload_dir))?;
    info!("Upload dir: {}", cfg.storage.upload_dir);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let app = create_router(AppState::new(cfg, remote));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received");
}
