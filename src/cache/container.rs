//! Container de cache por instância.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use serde::{Serialize, Serializer};

use super::options::CacheMode;
use super::registry::{CacheHost, Registry};
use crate::{CacheError, CacheResult};

/// Cache de valores memorizados de uma instância.
///
/// O mapa só é criado no primeiro acesso. No modo [`CacheMode::Invisible`] o
/// conteúdo não aparece em `Debug`, serializa como `null` e não participa de
/// `PartialEq`, de modo que `#[derive]` no host ignora o cache.
///
/// ```
/// use feature_cache::Cache;
///
/// struct Person {
///     first_name: String,
///     last_name: String,
///     cache: Cache<&'static str, String>,
/// }
///
/// impl Person {
///     fn full_name(&mut self) -> &str {
///         let (first, last) = (&self.first_name, &self.last_name);
///         self.cache
///             .get_or_compute("full_name", || format!("{} {}", first, last))
///     }
///
///     fn set_first_name(&mut self, s: &str) {
///         self.cache.clear();
///         self.first_name = s.to_string();
///     }
/// }
///
/// let mut p = Person {
///     first_name: "Ann".into(),
///     last_name: "Lee".into(),
///     cache: Cache::new(),
/// };
/// assert_eq!(p.full_name(), "Ann Lee");
/// p.set_first_name("Anna");
/// assert_eq!(p.full_name(), "Anna Lee");
/// ```
///
/// Não é recomendado remover chaves individuais: se algo que afeta o cache
/// mudar, limpe tudo com [`Cache::clear`].
pub struct Cache<K, V> {
    entries: Option<HashMap<K, V>>,
    mode: CacheMode,
}

impl<K, V> Cache<K, V> {
    /// Cache no modo padrão.
    pub fn new() -> Self {
        Self::with_mode(CacheMode::Default)
    }

    /// Cache no modo invisível.
    pub fn invisible() -> Self {
        Self::with_mode(CacheMode::Invisible)
    }

    pub fn with_mode(mode: CacheMode) -> Self {
        Self {
            entries: None,
            mode,
        }
    }

    /// Cache no modo ativado para `T` no registro global.
    pub fn for_host<T: CacheHost>() -> CacheResult<Self> {
        Self::for_host_in::<T>(Registry::global())
    }

    /// Cache no modo ativado para `T` em `registry`.
    pub fn for_host_in<T: CacheHost>(registry: &Registry) -> CacheResult<Self> {
        registry
            .mode_of::<T>()
            .map(Self::with_mode)
            .ok_or_else(|| CacheError::NotLoaded(std::any::type_name::<T>().to_string()))
    }

    pub fn mode(&self) -> CacheMode {
        self.mode
    }

    /// Indica se o mapa já foi criado.
    pub fn is_initialized(&self) -> bool {
        self.entries.is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove todas as entradas. O mapa continua criado.
    pub fn clear(&mut self) {
        let removed = self.len();
        self.entries.get_or_insert_with(HashMap::new).clear();
        tracing::trace!(removed, "Cache cleared");
    }
}

impl<K: Eq + Hash, V> Cache<K, V> {
    /// Mapa de valores em cache, criado vazio no primeiro acesso.
    pub fn cache(&mut self) -> &mut HashMap<K, V> {
        let mode = self.mode;
        self.entries.get_or_insert_with(|| {
            tracing::trace!(mode = %mode, "Cache initialized");
            HashMap::new()
        })
    }

    /// Busca sem criar o mapa.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.as_ref().and_then(|m| m.get(key))
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Insere um valor, retornando o anterior.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.cache().insert(key, value)
    }

    /// Retorna o valor em cache ou calcula, guarda e retorna.
    pub fn get_or_compute<F>(&mut self, key: K, producer: F) -> &V
    where
        F: FnOnce() -> V,
    {
        self.cache().entry(key).or_insert_with(producer)
    }

    /// Como [`Cache::get_or_compute`], mas o produtor pode falhar.
    ///
    /// Erros não são guardados; a próxima chamada tenta de novo.
    pub fn get_or_try_compute<F, E>(&mut self, key: K, producer: F) -> Result<&V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        use std::collections::hash_map::Entry;

        match self.cache().entry(key) {
            Entry::Occupied(e) => Ok(e.into_mut()),
            Entry::Vacant(e) => Ok(e.insert(producer()?)),
        }
    }
}

impl<K, V> Default for Cache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone> Clone for Cache<K, V> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            mode: self.mode,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Cache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.mode, &self.entries) {
            (CacheMode::Invisible, _) => f.debug_struct("Cache").finish_non_exhaustive(),
            (CacheMode::Default, Some(map)) => fmt::Debug::fmt(map, f),
            (CacheMode::Default, None) => f.debug_map().finish(),
        }
    }
}

impl<K: Eq + Hash, V: PartialEq> PartialEq for Cache<K, V> {
    fn eq(&self, other: &Self) -> bool {
        match (self.mode, other.mode) {
            (CacheMode::Invisible, CacheMode::Invisible) => true,
            (CacheMode::Default, CacheMode::Default) => match (&self.entries, &other.entries) {
                (Some(a), Some(b)) => a == b,
                (Some(m), None) | (None, Some(m)) => m.is_empty(),
                (None, None) => true,
            },
            _ => false,
        }
    }
}

impl<K: Serialize, V: Serialize> Serialize for Cache<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match (self.mode, &self.entries) {
            (CacheMode::Invisible, _) => serializer.serialize_none(),
            (CacheMode::Default, Some(map)) => serializer.collect_map(map),
            (CacheMode::Default, None) => serializer.collect_map(std::iter::empty::<(&K, &V)>()),
        }
    }
}
