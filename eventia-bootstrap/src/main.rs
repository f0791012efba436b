use anyhow::Result;
use clap::{Parser, Subcommand};

use eventia_bootstrap::context::AppContext;
use eventia_bootstrap::logging::init_tracing;
use eventia_bootstrap::RawRequest;
use eventia_infrastructure::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "eventia")]
#[command(about = "Eventia events browser", long_about = None)]
struct Args {
    /// Path to config file
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Browse events interactively (default)
    Browse,
    /// Load events and filter them by name
    Search {
        /// Search term, matched case-insensitively
        #[arg(default_value = "")]
        term: String,
    },
    /// Load events and toggle country filters in order
    Filter {
        #[arg(required = true)]
        countries: Vec<String>,
    },
    /// Send a request to any backend endpoint
    Request {
        method: String,
        endpoint: String,
        /// JSON body, or the literal body with --raw
        #[arg(long)]
        body: Option<String>,
        /// Send the body as-is without a JSON content type
        #[arg(long)]
        raw: bool,
        #[arg(long)]
        token: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(config) = args.config {
        std::env::set_var("EVENTIA_CONFIG", config);
    }

    // log_dir comes from the config, so the subscriber is installed right after
    // loading and the load outcome is logged through it.
    let loaded = AppConfig::load().await?;
    let _log_guard = init_tracing(loaded.config.log_dir.as_deref());
    loaded.log_source();
    let context = AppContext::new(&loaded.config)?;

    match args.command.unwrap_or(Command::Browse) {
        Command::Browse => eventia_bootstrap::run_browse(context).await,
        Command::Search { term } => eventia_bootstrap::run_search(context, &term).await,
        Command::Filter { countries } => eventia_bootstrap::run_filter(context, &countries).await,
        Command::Request {
            method,
            endpoint,
            body,
            raw,
            token,
        } => {
            eventia_bootstrap::run_request(
                context,
                RawRequest {
                    method,
                    endpoint,
                    body,
                    raw,
                    token,
                },
            )
            .await
        }
    }
}
