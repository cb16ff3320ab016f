use std::fs;
use std::path::PathBuf;

use enum_iterator::all;
use tracing::info;

use crate::error::Result;
use crate::generator;
use crate::generator::generate_file;
use crate::scenario::Scenario;
use crate::stats::Statistics;

pub const DEFAULT_SUITE_ROWS: usize = 10_000;

#[derive(Debug, Clone)]
pub struct Config {
    pub out_dir: PathBuf,
    pub rows: usize,
    pub seed: u64,
    /// Empty means every scenario.
    pub scenarios: Vec<Scenario>,
}

pub struct Generated {
    pub scenario: Scenario,
    pub path: PathBuf,
    pub stats: Statistics,
}

/// Writes one file per scenario into `out_dir`, named after the scenario's suite slot.
pub fn generate_suite(cfg: &Config) -> Result<Vec<Generated>> {
    fs::create_dir_all(&cfg.out_dir)?;

    let scenarios = if cfg.scenarios.is_empty() {
        all::<Scenario>().collect::<Vec<_>>()
    } else {
        cfg.scenarios.clone()
    };

    info!("output directory: {:?}", cfg.out_dir);
    info!("rows per file: {}", cfg.rows);

    let mut result = Vec::with_capacity(scenarios.len());
    for scenario in scenarios {
        let path = cfg.out_dir.join(scenario.suite_file_name());
        let stats = generate_file(
            generator::Config {
                scenario,
                rows: cfg.rows,
                seed: cfg.seed,
            },
            &path,
        )?;
        info!(
            "generated {}: {} rows, {}",
            scenario.suite_file_name(),
            stats.total_rows,
            scenario.about()
        );
        result.push(Generated {
            scenario,
            path,
            stats,
        });
    }

    Ok(result)
}
