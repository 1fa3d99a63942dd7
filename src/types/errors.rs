//! Tipos de erro do feature-cache.

use thiserror::Error;

/// Tipo de resultado padrão do feature-cache.
pub type CacheResult<T> = Result<T, CacheError>;

/// Erros possíveis no feature-cache.
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Opções desconhecidas: {}", .0.join(", "))]
    UnknownOption(Vec<String>),

    #[error("Opção '{key}' inválida: esperado {expected}")]
    InvalidOption { key: String, expected: &'static str },

    #[error("Cache não ativado para o tipo '{0}'")]
    NotLoaded(String),

    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Erro de IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro ao parsear TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Erro ao serializar TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Erro de JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CacheError {
    /// Cria um erro de configuração.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Chaves rejeitadas, quando o erro é de opção desconhecida.
    pub fn unknown_keys(&self) -> &[String] {
        match self {
            Self::UnknownOption(keys) => keys,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_option_names_every_key() {
        let err = CacheError::UnknownOption(vec!["bogus".to_string(), "visible".to_string()]);
        assert_eq!(err.to_string(), "Opções desconhecidas: bogus, visible");
        assert_eq!(err.unknown_keys(), ["bogus", "visible"]);
    }

    #[test]
    fn test_helpers() {
        assert!(matches!(CacheError::config("x"), CacheError::Config(m) if m == "x"));
        assert!(CacheError::NotLoaded("y".to_string()).unknown_keys().is_empty());
    }
}
