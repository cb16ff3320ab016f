pub mod gen;
pub mod suite;
