use anyhow::{Context, Result};
use call_insights::{create_router, Analyzer, AppState, CallLog, CallPipeline, Config};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "call-insights")]
#[command(author, version, about = "Customer call summaries and sentiment via Groq", long_about = None)]
struct Cli {
    /// Config file (extension optional; a missing file means defaults)
    #[arg(short, long, default_value = "config/call-insights", global = true)]
    config: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP service (default)
    Serve {
        /// Address to bind, overrides service.http.bind
        #[arg(long)]
        bind: Option<String>,

        /// Port to listen on, overrides service.http.port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Analyze a single transcript file and print the result as JSON
    Analyze {
        /// Transcript text file
        #[arg(short, long)]
        input: PathBuf,

        /// Do not append the result to the call log
        #[arg(long)]
        no_record: bool,
    },

    /// Print the most recent call log entries as JSON lines
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "10")]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let cfg = Config::load(&cli.config)?;

    info!("Loaded config: {}", cfg.service.name);
    info!("Operating mode: {:?}", cfg.mode());

    match cli.command.unwrap_or(Commands::Serve {
        bind: None,
        port: None,
    }) {
        Commands::Serve { bind, port } => serve(cfg, bind, port).await,
        Commands::Analyze { input, no_record } => analyze_file(cfg, input, no_record).await,
        Commands::History { limit } => history(cfg, limit),
    }
}

async fn serve(cfg: Config, bind: Option<String>, port: Option<u16>) -> Result<()> {
    let bind = bind.unwrap_or_else(|| cfg.service.http.bind.clone());
    let port = port.unwrap_or(cfg.service.http.port);

    let analyzer = Arc::new(Analyzer::from_config(&cfg)?);
    let log = CallLog::new(&cfg.log.path, cfg.log.schema);
    info!("Call log: {} ({:?})", log.path().display(), log.schema());

    let app = create_router(AppState::new(CallPipeline::new(analyzer, log)));

    let addr = format!("{}:{}", bind, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

async fn analyze_file(cfg: Config, input: PathBuf, no_record: bool) -> Result<()> {
    let transcript = std::fs::read_to_string(&input)
        .with_context(|| format!("Failed to read transcript {}", input.display()))?;

    let analyzer = Arc::new(Analyzer::from_config(&cfg)?);
    let pipeline = if no_record {
        CallPipeline::without_recording(analyzer)
    } else {
        CallPipeline::new(analyzer, CallLog::new(&cfg.log.path, cfg.log.schema))
    };

    let analysis = pipeline.process(&transcript).await?;
    println!("{}", serde_json::to_string_pretty(&analysis)?);

    Ok(())
}

fn history(cfg: Config, limit: usize) -> Result<()> {
    let log = CallLog::new(&cfg.log.path, cfg.log.schema);
    let records = log.read_records()?;

    let skip = records.len().saturating_sub(limit);
    for record in records.iter().skip(skip) {
        println!("{}", serde_json::to_string(record)?);
    }

    info!("{} of {} call log entries shown", records.len() - skip, records.len());
    Ok(())
}
