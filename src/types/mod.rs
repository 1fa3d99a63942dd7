//! Tipos compartilhados do feature-cache.

pub mod config;
pub mod errors;
