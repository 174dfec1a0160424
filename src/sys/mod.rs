//! Definições de sistema da simulação (tipos e erros)

pub mod error;
pub mod types;

pub use error::SchedError;
pub use types::{SemId, Tid};
