use std::path::Path;
use std::time::Duration;
use std::time::Instant;

use bytesize::ByteSize;
use rand::rngs::StdRng;
use rand::thread_rng;
use rand::Rng;
use rand::SeedableRng;
use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::error::ImportGenError;
use crate::error::Result;
use crate::output::write_csv_file;
use crate::record::Header;
use crate::scenario::Scenario;
use crate::stats::Statistics;
use crate::synthesizer::Row;
use crate::synthesizer::Synthesizer;

pub const PROGRESS_EVERY_ROWS: usize = 1000;
pub const LARGE_ROW_COUNT: usize = 100_000;

/// Seed for runs that didn't ask for one. Logged so the run can be reproduced.
pub fn random_seed() -> u64 {
    thread_rng().gen_range(1..=1_000_000)
}

#[derive(Debug, Clone)]
pub struct Config {
    pub scenario: Scenario,
    pub rows: usize,
    pub seed: u64,
}

pub struct Generator {
    rows: usize,
    seed: u64,
    rng: StdRng,
    synthesizer: Synthesizer,
}

impl Generator {
    pub fn try_new(cfg: Config) -> Result<Self> {
        Self::try_with_synthesizer(cfg.rows, cfg.seed, Synthesizer::new(cfg.scenario))
    }

    pub fn try_with_synthesizer(rows: usize, seed: u64, synthesizer: Synthesizer) -> Result<Self> {
        if rows < 1 {
            return Err(ImportGenError::InvalidRowCount(rows));
        }

        Ok(Self {
            rows,
            seed,
            rng: StdRng::seed_from_u64(seed),
            synthesizer,
        })
    }

    pub fn scenario(&self) -> Scenario {
        self.synthesizer.scenario()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn header(&self) -> Header {
        self.synthesizer.policy().header
    }

    pub fn synthesizer(&self) -> &Synthesizer {
        &self.synthesizer
    }

    pub fn run(&mut self) -> Result<Vec<Row>> {
        if !self.synthesizer.policy().emits_rows {
            info!(
                "scenario {} writes the header only, ignoring {} requested rows",
                self.scenario(),
                self.rows
            );
            return Ok(vec![]);
        }

        info!(
            "generating {} rows with scenario: {}",
            self.rows,
            self.scenario()
        );
        if self.rows > LARGE_ROW_COUNT {
            warn!(
                "generating more than {LARGE_ROW_COUNT} rows may take a while ({} requested)",
                self.rows
            );
        }

        let mut rows = Vec::with_capacity(self.rows);
        for idx in 1..=self.rows {
            rows.push(self.synthesizer.synthesize(idx, &mut self.rng)?);
            if idx % PROGRESS_EVERY_ROWS == 0 {
                info!("generated {idx}/{} rows...", self.rows);
            }
        }

        Ok(rows)
    }
}

/// Generates one scenario and writes it to `path`.
pub fn generate_file(cfg: Config, path: &Path) -> Result<Statistics> {
    let start = Instant::now();
    let mut gen = Generator::try_new(cfg)?;
    info!("random seed: {}", gen.seed());
    let rows = gen.run()?;

    info!("writing data to {path:?}...");
    let size = write_csv_file(path, gen.header(), &rows)?;
    info!(
        "successfully wrote {} rows to {path:?} ({})",
        rows.len(),
        ByteSize::b(size)
    );
    let took = Duration::from_millis(start.elapsed().as_millis() as u64);
    debug!("took {}", humantime::format_duration(took));

    let stats = Statistics::collect(&rows, gen.synthesizer());
    stats.log();

    Ok(stats)
}
