use std::path::Path;
use std::path::PathBuf;

use clap::ValueEnum;
use import_gen::Scenario;
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing::Level;

use crate::error::Result;

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Log {
    pub level: LogLevel,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Suite {
    pub out_dir: Option<PathBuf>,
    pub rows: Option<usize>,
    pub seed: Option<u64>,
    #[serde(default)]
    pub scenarios: Vec<Scenario>,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub log: Option<Log>,
    pub suite: Option<Suite>,
}

pub fn load(path: &Path) -> Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::from(path))
        .build()?;

    Ok(config.try_deserialize()?)
}

#[derive(Deserialize, Copy, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum LogLevel {
    #[serde(rename = "trace")]
    Trace,
    #[serde(rename = "debug")]
    Debug,
    #[serde(rename = "info")]
    Info,
    #[serde(rename = "warn")]
    Warn,
    #[serde(rename = "error")]
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
        .into()
    }
}

#[cfg(test)]
mod tests {
    use std::env::temp_dir;
    use std::fs;

    use uuid::Uuid;

    use super::*;

    #[test]
    fn test_load() -> Result<()> {
        let mut path = temp_dir();
        path.push(format!("{}.toml", Uuid::new_v4()));
        fs::write(
            &path,
            r#"
[log]
level = "debug"

[suite]
out_dir = "fixtures"
rows = 250
scenarios = ["missing_fields", "wrong_headers"]
"#,
        )?;

        let cfg = load(&path)?;
        assert_eq!(cfg.log, Some(Log {
            level: LogLevel::Debug
        }));
        assert_eq!(cfg.suite, Some(Suite {
            out_dir: Some(PathBuf::from("fixtures")),
            rows: Some(250),
            seed: None,
            scenarios: vec![Scenario::MissingFields, Scenario::WrongHeaders],
        }));
        fs::remove_file(path)?;

        Ok(())
    }

    #[test]
    fn test_load_missing_file() {
        let mut path = temp_dir();
        path.push(format!("{}.toml", Uuid::new_v4()));
        assert!(load(&path).is_err());
    }
}
