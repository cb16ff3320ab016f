pub mod catalog;
pub mod error;
pub mod generator;
pub mod identifiers;
pub mod materials;
pub mod output;
pub mod policy;
pub mod probability;
pub mod record;
pub mod scenario;
pub mod stats;
pub mod suite;
pub mod synthesizer;

pub use error::ImportGenError;
pub use error::Result;
pub use record::Record;
pub use scenario::Scenario;
pub use synthesizer::Row;
pub use synthesizer::Synthesizer;
