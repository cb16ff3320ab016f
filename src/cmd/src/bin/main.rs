use anyhow::Context;
use clap::Parser;
use clap::Subcommand;
use cmd::command::gen;
use cmd::command::gen::Gen;
use cmd::command::suite;
use cmd::command::suite::Suite;
use cmd::config;
use cmd::config::LogLevel;
use cmd::error::Error;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

#[derive(Subcommand, Clone)]
enum Commands {
    /// Generate one CSV file for a scenario
    Gen(Gen),
    /// Generate the standard set of test CSV files
    Suite(Suite),
}

#[derive(Parser)]
#[command(propagate_version = true)]
#[command(author, version, about = "Product import test data generator", long_about = None)]
pub struct Cli {
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let cfg = match &args.command {
        Commands::Suite(Suite {
            config: Some(path), ..
        }) => config::load(path).with_context(|| format!("loading config {path:?}"))?,
        _ => config::Config::default(),
    };

    let level = args
        .log_level
        .or(cfg.log.as_ref().map(|l| l.level))
        .unwrap_or(LogLevel::Info);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).map_err(Error::SetGlobalDefaultError)?;

    info!("import-gen v{}", env!("CARGO_PKG_VERSION"));

    match &args.command {
        Commands::Gen(args) => gen::run(args).with_context(|| {
            format!(
                "error generating {} test data into {:?}",
                args.scenario, args.output
            )
        })?,
        Commands::Suite(args) => {
            suite::run(args, cfg.suite.as_ref()).context("error generating test suite")?
        }
    }

    Ok(())
}
