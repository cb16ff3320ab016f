use std::result;

use import_gen::error::ImportGenError;
use thiserror::Error;
use tracing::subscriber::SetGlobalDefaultError;

pub type Result<T> = result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("ImportGen: {0}")]
    ImportGen(#[from] ImportGenError),
    #[error("Config: {0:?}")]
    Config(#[from] config::ConfigError),
    #[error("StdIO: {0:?}")]
    StdIO(#[from] std::io::Error),
    #[error("SetGlobalDefault: {0:?}")]
    SetGlobalDefaultError(#[from] SetGlobalDefaultError),
}
