//! Shared collaborator material: runtime configuration, logging macros,
//! and the file chunker.

pub mod chunks;
pub mod config;
pub mod macros;
