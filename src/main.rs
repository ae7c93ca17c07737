use clap::{Parser, ValueEnum};
use datomatic_bbcode::config::{DEFAULT_HEADER, DEFAULT_SYSTEM_NAME, END_MARKER, MISSING_GAME_ID};
use datomatic_bbcode::{
    build_report, DatomaticExtractor, Fallbacks, HttpFetcher, BROWSER_USER_AGENT,
    DEFAULT_TIMEOUT,
};
use std::time::Duration;
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Bbcode,
    Json,
}

/// Turn a Dat-o-MATIC record page into a BBCode verification report
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Dat-o-MATIC record URL
    url: String,

    #[arg(long, value_enum, default_value_t = Format::Bbcode)]
    format: Format,

    /// Header used when the page has no rom name row
    #[arg(long, env = "DATOMATIC_HEADER", default_value = DEFAULT_HEADER)]
    header: String,

    /// System name used when the page has no heading
    #[arg(long, env = "DATOMATIC_SYSTEM", default_value = DEFAULT_SYSTEM_NAME)]
    system: String,

    /// Identifier used when no identifier label matches
    #[arg(long, env = "DATOMATIC_GAME_ID", default_value = MISSING_GAME_ID)]
    game_id: String,

    /// Text that closes the last file section
    #[arg(long, default_value = END_MARKER)]
    end_marker: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    timeout: u64,

    #[arg(long, default_value = BROWSER_USER_AGENT)]
    user_agent: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| {
                "warn,html5ever=error,selectors=error,hyper=warn,reqwest=warn".into()
            }),
        )
        .with(ErrorLayer::default())
        .init();

    let args = Args::parse();

    let fetcher = HttpFetcher::new(&args.user_agent, Duration::from_secs(args.timeout))?;
    let extractor = DatomaticExtractor {
        end_marker: args.end_marker,
        ..DatomaticExtractor::default()
    };
    let fallbacks = Fallbacks {
        header: args.header,
        system_name: args.system,
        game_id: args.game_id,
    };

    let report = build_report(&fetcher, &extractor, &fallbacks, args.url.trim()).await?;

    match args.format {
        Format::Bbcode => println!("{}", report),
        Format::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}
