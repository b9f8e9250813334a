use std::path::PathBuf;
use std::process::ExitCode;

use ad_matcher::config::{LogFormat, LoggingSettings, OutputFormat, Settings};
use ad_matcher::core::{blocking_pairs, Matcher};
use ad_matcher::error::AppError;
use ad_matcher::models::MatchReport;
use ad_matcher::output::render;
use ad_matcher::services::load_names;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Match advertisers to people by CTR using deferred acceptance
#[derive(Parser)]
#[command(name = "ad-matcher", version)]
struct Cli {
    /// File with one advertiser name per line
    advertisers: PathBuf,

    /// File with one person name per line
    people: PathBuf,

    /// Report format (overrides output.format from config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Check the result for blocking pairs and fail if any exist
    #[arg(long)]
    verify: bool,

    /// Extra configuration file, applied after config/default and config/local
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("ad-matcher: {}", AppError::from(e));
            return ExitCode::FAILURE;
        }
    };

    init_logging(&settings.logging);

    match run(&cli, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("Run failed: {:?}", e);
            eprintln!("ad-matcher: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    match logging.format {
        LogFormat::Pretty => subscriber.pretty().init(),
        LogFormat::Compact => subscriber.compact().init(),
        LogFormat::Full => subscriber.init(),
    }
}

fn run(cli: &Cli, settings: &Settings) -> Result<(), AppError> {
    let advertisers = load_names(&cli.advertisers)?;
    let people = load_names(&cli.people)?;

    info!(
        "Matching {} advertisers against {} people",
        advertisers.len(),
        people.len()
    );

    let matcher = Matcher::new(people, advertisers);
    let result = matcher.run();
    let mut report = MatchReport::new(&matcher, &result);

    let mut blocking_count = 0;
    if cli.verify || settings.matching.verify {
        let blocking = blocking_pairs(&matcher, &result);
        blocking_count = blocking.len();
        report = report.with_blocking_pairs(blocking);
    }

    let format = cli.format.unwrap_or(settings.output.format);
    println!("{}", render(&report, format, settings.output.pretty_json)?);

    info!(
        "Matched {} pairs, total CTR {}",
        report.pairings.len(),
        report.total_ctr
    );

    if blocking_count > 0 {
        return Err(AppError::Unstable(blocking_count));
    }

    Ok(())
}
