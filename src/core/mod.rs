//! Infraestrutura central do simulador

pub mod context;
pub mod logging;

pub use context::SimContext;
