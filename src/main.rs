use adsight::config::{Config, ConfigLoader};
use adsight::error::{common, AdsightError};
use adsight::ingest::read_export;
use adsight::report::{self, ReportFormat};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, error, trace, warn};
use tracing_subscriber::EnvFilter;

/// Find wasted ad spend and the bids worth changing
#[derive(Parser)]
#[command(name = "adsight")]
#[command(about = "Keyword advertising export analyzer", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a keyword performance export
    Analyze {
        /// CSV export to analyze
        file: PathBuf,

        /// Report format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<ReportFormat>,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of keywords listed in the text report
        #[arg(long)]
        top: Option<usize>,

        /// Override the target ACoTR, as a fraction (0.35 = 35%)
        #[arg(long)]
        target_acos: Option<f64>,

        /// Override the minimum bid
        #[arg(long)]
        min_bid: Option<f64>,
    },
    /// Print the effective configuration as TOML
    Config,
}

fn main() {
    let cli = Cli::parse();

    let config = match ConfigLoader::new().load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => exit_with(&anyhow::Error::new(e)),
    };

    init_logging(cli.verbose, config.log_level.as_deref());
    debug!("adsight started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    let result = match cli.command {
        Commands::Analyze {
            file,
            format,
            output,
            top,
            target_acos,
            min_bid,
        } => run_analyze(
            config,
            AnalyzeArgs {
                file,
                format,
                output,
                top,
                target_acos,
                min_bid,
            },
        ),
        Commands::Config => run_config(&config),
    };

    if let Err(e) = result {
        exit_with(&e);
    }
}

/// `RUST_LOG` wins, then `-v`, then the configured level
fn init_logging(verbose: u8, configured: Option<&str>) {
    let level = match verbose {
        0 => configured.unwrap_or("info"),
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .with_line_number(verbose >= 2)
        .init();
}

fn exit_with(e: &anyhow::Error) -> ! {
    let adsight = e.chain().find_map(|cause| cause.downcast_ref::<AdsightError>());
    error!("Fatal error: {:#}", e);
    match adsight {
        Some(err) => {
            eprintln!("Error: {}", err.user_message());
            std::process::exit(err.exit_code());
        }
        None => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}

struct AnalyzeArgs {
    file: PathBuf,
    format: Option<ReportFormat>,
    output: Option<PathBuf>,
    top: Option<usize>,
    target_acos: Option<f64>,
    min_bid: Option<f64>,
}

fn run_analyze(mut config: Config, args: AnalyzeArgs) -> anyhow::Result<()> {
    if let Some(target) = args.target_acos {
        config.analysis.target_acos = target;
    }
    if let Some(min_bid) = args.min_bid {
        config.analysis.min_bid = min_bid;
    }
    config.validate()?;

    let export = read_export(&args.file)?;
    for issue in &export.issues {
        warn!("Skipped line {}: {}", issue.line, issue.reason);
    }
    if export.keyword_count() == 0 {
        return Err(common::empty_export(&args.file).into());
    }

    let result = adsight::analyze(&export.records, &config.analysis);

    let format = args.format.unwrap_or(config.output.format);
    let top = args.top.unwrap_or(config.output.top);
    let rendered = report::render(&result, format, &config.analysis, top)?;

    match args.output {
        Some(path) => {
            report::write_report(&path, &rendered)?;
            eprintln!("Report written to {}", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

fn run_config(config: &Config) -> anyhow::Result<()> {
    let rendered = config
        .to_toml()
        .context("Failed to render effective configuration")?;
    print!("{rendered}");
    Ok(())
}
