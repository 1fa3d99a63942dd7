//! Cache de valores memorizados por instância.
//!
//! Um tipo host ativa o cache uma única vez com [`load`], escolhendo entre o
//! modo padrão (cache visível em `Debug`) e o modo invisível. Cada instância
//! guarda um [`Cache`] privado, criado vazio no primeiro acesso. Quando algo
//! que afeta os valores em cache muda, o host limpa o cache inteiro.
//!
//! ```
//! use feature_cache::cache::{self, Cache, CacheHost, CacheMode, CacheOptions};
//!
//! #[derive(Debug)]
//! struct Report {
//!     rows: Vec<u32>,
//!     cache: Cache<&'static str, u32>,
//! }
//!
//! impl CacheHost for Report {}
//!
//! impl Report {
//!     fn new(rows: Vec<u32>) -> feature_cache::CacheResult<Self> {
//!         Ok(Self { rows, cache: Cache::for_host::<Self>()? })
//!     }
//!
//!     fn total(&mut self) -> u32 {
//!         let rows = &self.rows;
//!         *self.cache.get_or_compute("total", || rows.iter().sum())
//!     }
//! }
//!
//! assert_eq!(cache::load::<Report>(CacheOptions::invisible()), CacheMode::Invisible);
//! let mut report = Report::new(vec![1, 2, 3]).unwrap();
//! assert_eq!(report.total(), 6);
//! assert!(!format!("{:?}", report).contains("total"));
//! ```

mod container;
mod options;
mod registry;

pub use container::Cache;
pub use options::{CacheMode, CacheOptions, INVISIBLE};
pub use registry::{load, load_table, mode_of, CacheHost, Registry};
