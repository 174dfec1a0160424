//! Gerenciamento de threads simuladas

pub mod entity;
pub mod registry;
pub mod state;

pub use entity::{Thread, WaitChannel};
pub use registry::ThreadRegistry;
pub use state::ThreadState;
