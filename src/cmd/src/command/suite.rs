use std::path::PathBuf;

use clap::Parser;
use import_gen::generator::random_seed;
use import_gen::suite;
use import_gen::suite::generate_suite;
use import_gen::suite::DEFAULT_SUITE_ROWS;
use import_gen::Scenario;
use tracing::info;

use crate::config;
use crate::error::Result;

#[derive(Parser, Clone, Debug)]
pub struct Suite {
    /// Directory the suite files are written to [default: .]
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
    /// Rows per file [default: 10000]
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub rows: Option<u64>,
    #[arg(long)]
    pub seed: Option<u64>,
    /// Only generate these scenarios (repeatable)
    #[arg(long = "scenario", value_enum)]
    pub scenarios: Vec<Scenario>,
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Suite {
    /// Flags win over the config file, the config file wins over defaults.
    pub fn resolve(&self, file: Option<&config::Suite>) -> suite::Config {
        let file_scenarios = file.map(|f| f.scenarios.clone()).unwrap_or_default();

        suite::Config {
            out_dir: self
                .out_dir
                .clone()
                .or_else(|| file.and_then(|f| f.out_dir.clone()))
                .unwrap_or_else(|| PathBuf::from(".")),
            rows: self
                .rows
                .map(|v| v as usize)
                .or_else(|| file.and_then(|f| f.rows))
                .unwrap_or(DEFAULT_SUITE_ROWS),
            seed: self
                .seed
                .or_else(|| file.and_then(|f| f.seed))
                .unwrap_or_else(random_seed),
            scenarios: if self.scenarios.is_empty() {
                file_scenarios
            } else {
                self.scenarios.clone()
            },
        }
    }
}

pub fn run(args: &Suite, file: Option<&config::Suite>) -> Result<()> {
    let cfg = args.resolve(file);
    let generated = generate_suite(&cfg)?;

    info!("all test files generated successfully");
    for g in generated.iter() {
        info!("  {:<40} {}", g.scenario.suite_file_name(), g.scenario.about());
    }
    info!("seed: {} (use --seed={} to reproduce)", cfg.seed, cfg.seed);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let args = Suite::try_parse_from(["suite", "--seed", "5"]).unwrap();
        let cfg = args.resolve(None);
        assert_eq!(cfg.out_dir, PathBuf::from("."));
        assert_eq!(cfg.rows, DEFAULT_SUITE_ROWS);
        assert_eq!(cfg.seed, 5);
        assert!(cfg.scenarios.is_empty());
    }

    #[test]
    fn test_flags_override_file() {
        let file = config::Suite {
            out_dir: Some(PathBuf::from("from-file")),
            rows: Some(300),
            seed: Some(11),
            scenarios: vec![Scenario::Empty],
        };

        let args = Suite::try_parse_from(["suite"]).unwrap();
        let cfg = args.resolve(Some(&file));
        assert_eq!(cfg.out_dir, PathBuf::from("from-file"));
        assert_eq!(cfg.rows, 300);
        assert_eq!(cfg.seed, 11);
        assert_eq!(cfg.scenarios, vec![Scenario::Empty]);

        let args = Suite::try_parse_from([
            "suite",
            "--rows",
            "20",
            "--scenario",
            "unmapped",
            "--scenario",
            "large_mixed",
        ])
        .unwrap();
        let cfg = args.resolve(Some(&file));
        assert_eq!(cfg.out_dir, PathBuf::from("from-file"));
        assert_eq!(cfg.rows, 20);
        assert_eq!(cfg.scenarios, vec![Scenario::Unmapped, Scenario::LargeMixed]);
    }
}
