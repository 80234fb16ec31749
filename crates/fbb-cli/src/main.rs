use anyhow::Result;
use clap::{Parser, Subcommand};

use fbb_acquire::cache::PageCache;
use fbb_acquire::client::HttpClient;
use fbb_acquire::config::{Config, RequestHeaders};
use fbb_acquire::pipeline;

#[derive(Parser)]
#[command(name = "fbb")]
#[command(about = "Scrape listed-building case numbers from the Danish FBB heritage registry")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_HASH"), ")"))]
struct Cli {
    /// User-Agent header value identifying this client to the site
    user_agent: String,

    /// Contact address sent as the From request header
    #[arg(long, value_name = "EMAIL")]
    from: Option<String>,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "info", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long, global = true)]
    utc: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Subcommand)]
enum Commands {
    /// Print case numbers from all cached municipality pages (default)
    Scrape,
    /// Print the municipality ids offered by the listing page
    Municipalities,
    /// Download every listed municipality page, pausing between requests
    Download,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Map log level, suppressing noisy HTML-parsing crates at debug/trace
    let level = match cli.log_level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug,selectors=warn,html5ever=warn",
        LogLevel::Trace => "trace,selectors=warn,html5ever=warn",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Timestamp format: 2026-02-14 19:44:09.123 -08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z";

    if cli.utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(time_format.to_string()))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(time_format.to_string()))
            .init();
    }

    let config = Config::default();
    let headers = RequestHeaders {
        user_agent: cli.user_agent,
        from: cli.from,
    };
    let client = HttpClient::new(&config, &headers)?;
    let cache = PageCache::new(&config.data_dir);

    match cli.command.unwrap_or(Commands::Scrape) {
        Commands::Scrape => {
            let case_numbers = pipeline::collect_case_numbers(&client, &cache).await?;
            tracing::info!(count = case_numbers.len(), "Collected case numbers");
            println!("{}", case_numbers.join("\n"));
        }
        Commands::Municipalities => {
            let ids = pipeline::list_municipality_ids(&client, &cache).await?;
            println!("{}", ids.join("\n"));
        }
        Commands::Download => {
            let ids = pipeline::list_municipality_ids(&client, &cache).await?;
            tracing::info!(
                count = ids.len(),
                pause = ?config.pause,
                "Downloading municipality pages"
            );
            pipeline::download_municipalities(&config, &client, &cache, &ids).await?;
        }
    }

    Ok(())
}
