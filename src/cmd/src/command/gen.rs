use std::path::PathBuf;

use clap::Parser;
use import_gen::generator;
use import_gen::generator::generate_file;
use import_gen::generator::random_seed;
use import_gen::Scenario;
use tracing::info;

use crate::error::Result;

#[derive(Parser, Clone, Debug)]
pub struct Gen {
    #[arg(long, value_enum, default_value = "valid")]
    pub scenario: Scenario,
    #[arg(long, default_value = "1000", value_parser = clap::value_parser!(u64).range(1..))]
    pub rows: u64,
    #[arg(long, default_value = "test-data.csv")]
    pub output: PathBuf,
    /// Random seed for reproducibility (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Gen {
    pub fn config(&self) -> generator::Config {
        generator::Config {
            scenario: self.scenario,
            rows: self.rows as usize,
            seed: self.seed.unwrap_or_else(random_seed),
        }
    }
}

pub fn run(args: &Gen) -> Result<()> {
    let cfg = args.config();
    let seed = cfg.seed;
    generate_file(cfg, &args.output)?;

    info!("test data generation complete");
    info!("scenario: {}", args.scenario);
    info!("output: {:?}", args.output);
    info!("seed: {seed} (use --seed={seed} to reproduce)");

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::env::temp_dir;
    use std::fs;

    use uuid::Uuid;

    use super::*;

    #[test]
    fn test_parse_defaults() {
        let args = Gen::try_parse_from(["gen"]).unwrap();
        assert_eq!(args.scenario, Scenario::Valid);
        assert_eq!(args.rows, 1000);
        assert_eq!(args.output, PathBuf::from("test-data.csv"));
        assert_eq!(args.seed, None);

        let seed = args.config().seed;
        assert!((1..=1_000_000).contains(&seed));
    }

    #[test]
    fn test_parse_scenario_names() {
        let args = Gen::try_parse_from([
            "gen",
            "--scenario",
            "invalid_formats",
            "--rows",
            "5",
            "--seed",
            "9",
        ])
        .unwrap();
        assert_eq!(args.scenario, Scenario::InvalidFormats);
        assert_eq!(args.config().seed, 9);
    }

    #[test]
    fn test_rejects_non_positive_rows() {
        assert!(Gen::try_parse_from(["gen", "--rows", "0"]).is_err());
        assert!(Gen::try_parse_from(["gen", "--rows", "-5"]).is_err());
    }

    #[test]
    fn test_run() -> Result<()> {
        let mut output = temp_dir();
        output.push(format!("{}.csv", Uuid::new_v4()));
        let args = Gen {
            scenario: Scenario::Mixed,
            rows: 20,
            output: output.clone(),
            seed: Some(3),
        };
        run(&args)?;

        let lines = fs::read_to_string(&output)?.lines().count();
        assert_eq!(lines, 21);
        fs::remove_file(output)?;

        Ok(())
    }
}
