//! Registro de ativação do cache por tipo.
//!
//! Cada tipo host recebe exatamente um modo. Um segundo `load` (inclusive
//! com opções diferentes) não troca o modo nem gera erro. A ativação é
//! herdada por toda a cadeia de supertipos: se qualquer ancestral já está
//! ativado, o tipo derivado também está.

use std::any::{type_name, TypeId};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, OnceLock};

use super::options::{CacheMode, CacheOptions};
use crate::CacheResult;

/// Tipo que pode carregar um cache por instância.
///
/// ```
/// use std::any::TypeId;
/// use feature_cache::cache::CacheHost;
///
/// struct Animal;
/// impl CacheHost for Animal {}
///
/// struct Dog;
/// impl CacheHost for Dog {
///     fn supertypes(lineage: &mut Vec<TypeId>) {
///         Animal::collect_lineage(lineage);
///     }
/// }
///
/// assert_eq!(Dog::lineage(), vec![TypeId::of::<Dog>(), TypeId::of::<Animal>()]);
/// ```
pub trait CacheHost: 'static {
    /// Adiciona os supertipos diretos, chamando `Parent::collect_lineage`.
    fn supertypes(_lineage: &mut Vec<TypeId>) {}

    /// Adiciona `Self` e todos os seus ancestrais. Tipos já vistos são
    /// ignorados, então ciclos terminam.
    fn collect_lineage(lineage: &mut Vec<TypeId>)
    where
        Self: Sized,
    {
        let id = TypeId::of::<Self>();
        if lineage.contains(&id) {
            return;
        }
        lineage.push(id);
        Self::supertypes(lineage);
    }

    /// `Self` seguido de todos os ancestrais.
    fn lineage() -> Vec<TypeId>
    where
        Self: Sized,
    {
        let mut lineage = Vec::new();
        Self::collect_lineage(&mut lineage);
        lineage
    }
}

#[derive(Debug, Clone)]
struct Activation {
    mode: CacheMode,
    type_name: &'static str,
}

/// Tabela de modos ativados.
#[derive(Debug, Default)]
pub struct Registry {
    activations: Mutex<HashMap<TypeId, Activation>>,
}

impl Registry {
    /// Cria um registro vazio.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registro global do processo.
    pub fn global() -> &'static Registry {
        static GLOBAL: OnceLock<Registry> = OnceLock::new();
        GLOBAL.get_or_init(Registry::new)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<TypeId, Activation>> {
        self.activations.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("Cache registry lock poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn lookup<T: CacheHost>(map: &HashMap<TypeId, Activation>) -> Option<CacheMode> {
        T::lineage()
            .into_iter()
            .find_map(|id| map.get(&id).map(|a| a.mode))
    }

    /// Ativa o cache em `T`.
    ///
    /// Retorna o modo em vigor: o recém-ativado, ou o já existente se `T`
    /// (ou um supertipo) já estava ativado.
    pub fn load<T: CacheHost>(&self, options: CacheOptions) -> CacheMode {
        let mut map = self.lock();

        if let Some(mode) = Self::lookup::<T>(&map) {
            tracing::debug!(
                host = type_name::<T>(),
                mode = %mode,
                "Cache already active, load ignored"
            );
            return mode;
        }

        let mode = options.mode();
        map.insert(
            TypeId::of::<T>(),
            Activation {
                mode,
                type_name: type_name::<T>(),
            },
        );
        tracing::debug!(host = type_name::<T>(), mode = %mode, "Cache activated");
        mode
    }

    /// Valida uma tabela crua de opções e ativa o cache em `T`.
    ///
    /// Em caso de erro nada é ativado.
    pub fn load_table<T: CacheHost>(&self, table: &toml::Table) -> CacheResult<CacheMode> {
        let options = CacheOptions::from_table(table)?;
        Ok(self.load::<T>(options))
    }

    /// Modo em vigor para `T`, considerando herança.
    pub fn mode_of<T: CacheHost>(&self) -> Option<CacheMode> {
        Self::lookup::<T>(&self.lock())
    }

    pub fn is_loaded<T: CacheHost>(&self) -> bool {
        self.mode_of::<T>().is_some()
    }

    /// Tipos ativados diretamente, com seus modos, em ordem de nome.
    pub fn activations(&self) -> Vec<(&'static str, CacheMode)> {
        let mut out: Vec<_> = self
            .lock()
            .values()
            .map(|a| (a.type_name, a.mode))
            .collect();
        out.sort_by(|a, b| a.0.cmp(b.0));
        out
    }
}

/// Ativa o cache em `T` no registro global.
pub fn load<T: CacheHost>(options: CacheOptions) -> CacheMode {
    Registry::global().load::<T>(options)
}

/// Valida opções cruas e ativa o cache em `T` no registro global.
pub fn load_table<T: CacheHost>(table: &toml::Table) -> CacheResult<CacheMode> {
    Registry::global().load_table::<T>(table)
}

/// Modo de `T` no registro global.
pub fn mode_of<T: CacheHost>() -> Option<CacheMode> {
    Registry::global().mode_of::<T>()
}
