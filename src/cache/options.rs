//! Opções de ativação do cache.

use serde::{Deserialize, Serialize};

use crate::{CacheError, CacheResult};

/// Chave da única opção reconhecida.
pub const INVISIBLE: &str = "invisible";

/// Modo de visibilidade do cache, fixado por tipo no momento do `load`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheMode {
    /// Cache aparece em `Debug`, `Serialize` e `PartialEq` do host.
    #[default]
    Default,
    /// Cache oculto da introspecção do host.
    Invisible,
}

impl CacheMode {
    /// Nome curto do modo.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Invisible => "invisible",
        }
    }

    pub fn is_invisible(&self) -> bool {
        matches!(self, Self::Invisible)
    }
}

impl std::fmt::Display for CacheMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opções aceitas por `load`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheOptions {
    /// Esconde os valores do cache de `Debug`. Padrão: `false`.
    #[serde(default)]
    pub invisible: bool,
}

impl CacheOptions {
    /// Opções do modo invisível.
    pub fn invisible() -> Self {
        Self { invisible: true }
    }

    /// Valida uma tabela crua de opções.
    ///
    /// Qualquer chave além de `invisible` gera [`CacheError::UnknownOption`]
    /// com todas as chaves ofensoras, em ordem.
    pub fn from_table(table: &toml::Table) -> CacheResult<Self> {
        let mut unknown: Vec<String> = table
            .keys()
            .filter(|k| k.as_str() != INVISIBLE)
            .cloned()
            .collect();

        if !unknown.is_empty() {
            unknown.sort();
            return Err(CacheError::UnknownOption(unknown));
        }

        let invisible = match table.get(INVISIBLE) {
            None => false,
            Some(toml::Value::Boolean(b)) => *b,
            Some(_) => {
                return Err(CacheError::InvalidOption {
                    key: INVISIBLE.to_string(),
                    expected: "boolean",
                })
            }
        };

        Ok(Self { invisible })
    }

    /// Modo correspondente às opções.
    pub fn mode(&self) -> CacheMode {
        if self.invisible {
            CacheMode::Invisible
        } else {
            CacheMode::Default
        }
    }
}

impl From<CacheMode> for CacheOptions {
    fn from(mode: CacheMode) -> Self {
        Self {
            invisible: mode.is_invisible(),
        }
    }
}
