//! # feature-cache
//!
//! Cache por instância para memorizar valores calculados, com um modo
//! invisível que esconde o cache da saída de `Debug`.
//!
//! ## Módulos
//!
//! - [`cache`] - Container, opções e registro de ativação por tipo
//! - [`cli`] - Interface de linha de comando
//! - [`types`] - Tipos compartilhados (configuração e erros)

pub mod cache;
#[cfg(feature = "cli")]
pub mod cli;
pub mod types;

pub use cache::{Cache, CacheHost, CacheMode, CacheOptions};
pub use types::config::Config;
pub use types::errors::{CacheError, CacheResult};
