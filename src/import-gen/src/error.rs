use std::io;
use std::result;

use thiserror::Error;

pub type Result<T> = result::Result<T, ImportGenError>;

#[derive(Error, Debug)]
pub enum ImportGenError {
    #[error("InvalidRowCount: {0} (must be at least 1)")]
    InvalidRowCount(usize),
    #[error("PoolTooSmall: requested {requested} distinct value(s) from {pool} which holds {available}")]
    PoolTooSmall {
        pool: &'static str,
        requested: usize,
        available: usize,
    },
    #[error("IdentifierSpaceExhausted: all {capacity} {kind} value(s) already emitted")]
    IdentifierSpaceExhausted { kind: &'static str, capacity: usize },
    #[error("InvalidProbability: {name} = {value}")]
    InvalidProbability { name: &'static str, value: f64 },
    #[error("OutputPath: {0:?}")]
    OutputPath(String),
    #[error("CSVError: {0:?}")]
    CSVError(#[from] csv::Error),
    #[error("StdIO: {0:?}")]
    StdIO(#[from] io::Error),
    #[error("Persist: {0:?}")]
    Persist(#[from] tempfile::PersistError),
}
