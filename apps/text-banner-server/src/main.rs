use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use sea_orm_migration::MigratorTrait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use text_banner::api::rest::routes::register_routes;
use text_banner::contract::LanguageId;
use text_banner::domain::{NoOpEventPublisher, SettingsStore};
use text_banner::infra::storage::migrations::Migrator;
use text_banner::infra::{InMemorySettingsStore, SeaOrmSettingsStore, StaticShopHost};
use text_banner::{Config, TextBannerModule};

/// Text Banner Server - standalone host for the storefront banner module
#[derive(Parser)]
#[command(name = "text-banner-server")]
#[command(about = "Text Banner Server - standalone host for the storefront banner module")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port for the HTTP server
    #[arg(short, long, default_value_t = 8087)]
    port: u16,

    /// Database connection string
    #[arg(long, default_value = "sqlite://text_banner.db?mode=rwc")]
    database_url: String,

    /// Keep settings in memory instead of a database
    #[arg(long)]
    mock: bool,

    /// Shop language ids, comma separated
    #[arg(long, value_delimiter = ',', default_value = "1")]
    languages: Vec<u32>,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per event
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(ref path) = cli.config {
        if !Path::new(path).is_file() {
            anyhow::bail!("config file does not exist: {}", path.display());
        }
    }

    init_logging(cli.verbose, cli.log_format);

    let config = Config::load(cli.config.as_deref())?;

    if cli.print_config {
        println!(
            "Effective configuration:\n{}",
            serde_json::to_string_pretty(&config)?
        );
        return Ok(());
    }

    match cli.command.as_ref().unwrap_or(&Commands::Run) {
        Commands::Run => run_server(config, &cli).await,
        Commands::Check => {
            println!("Configuration is valid");
            Ok(())
        }
    }
}

/// `RUST_LOG` wins; otherwise the `-v` count picks the level.
fn init_logging(verbose: u8, format: LogFormat) {
    let default_level = match verbose {
        0 => "warn,text_banner=info,text_banner_server=info",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

async fn build_store(cli: &Cli) -> Result<Arc<dyn SettingsStore>> {
    if cli.mock {
        tracing::info!("using in-memory settings store");
        return Ok(Arc::new(InMemorySettingsStore::new()));
    }

    let db = sea_orm::Database::connect(&cli.database_url)
        .await
        .with_context(|| format!("failed to connect to {}", cli.database_url))?;
    Migrator::up(&db, None)
        .await
        .context("failed to run text banner migrations")?;
    tracing::info!(database = %cli.database_url, "database ready");
    Ok(Arc::new(SeaOrmSettingsStore::new(Arc::new(db))))
}

async fn run_server(config: Config, cli: &Cli) -> Result<()> {
    tracing::info!("Text Banner Server starting");

    let store = build_store(cli).await?;
    let languages = cli.languages.iter().copied().map(LanguageId::new).collect();
    let host = Arc::new(StaticShopHost::new(languages));

    let module = TextBannerModule::with_store(
        config,
        store,
        Arc::new(NoOpEventPublisher),
        host,
    );
    if !module.install().await {
        anyhow::bail!("text banner module failed to install");
    }

    let router = register_routes(axum::Router::new(), Arc::new(module));

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], cli.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Text Banner Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
