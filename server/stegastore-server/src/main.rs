use clap::Parser;
use colored::Colorize;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use stegastore_server::{create_app, ServerConfig, StegaStoreServer};

/// StegaStore Engine HTTP Server
#[derive(Parser, Debug)]
#[command(name = "stegastore-server")]
#[command(about = "Project-scoped configuration store with steganographically annotated values")]
struct Args {
    /// Server bind address
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Server port
    #[arg(short, long, env = "PORT", default_value = "6789")]
    port: u16,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    init_tracing(args.verbose)?;

    info!("{}", "Starting StegaStore Engine HTTP Server".bright_cyan());
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let mut config = ServerConfig::from_env();
    config.host = args.host;
    config.port = args.port;

    let server = StegaStoreServer::new(config.clone());
    let app = create_app(server);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    let addr = listener.local_addr()?;

    info!(
        "{}",
        format!("StegaStore Engine server running on http://{}", addr).bright_green()
    );
    info!(
        "{}",
        format!("Swagger UI available at: http://{}/swagger-ui", addr).bright_blue()
    );

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { "debug" } else { "info" };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("stegastore_server={level},database_layer={level},tower_http=info,sqlx=warn")
            .into()
    });

    let is_development =
        std::env::var("STEGASTORE_ENV").unwrap_or_else(|_| "development".to_string())
            == "development";

    if is_development {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(true))
            .init();
    } else {
        // Structured JSON logging for production
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false).with_ansi(false).json())
            .init();
    }

    Ok(())
}
