//! Interface de linha de comando do feature-cache.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// feature-cache - valida opções de cache e demonstra os modos.
#[derive(Parser, Debug)]
#[command(name = "feature-cache")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Arquivo de configuração.
    #[arg(short, long, default_value = "feature-cache.toml")]
    pub config: PathBuf,

    /// Modo verbose.
    #[arg(short, long)]
    pub verbose: bool,

    /// Modo silencioso.
    #[arg(short, long)]
    pub quiet: bool,

    /// Comando a executar.
    #[command(subcommand)]
    pub command: Commands,
}

/// Comandos disponíveis.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inicializa configuração no diretório atual.
    Init {
        /// Diretório de destino (padrão: diretório atual).
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Valida as opções de cache de cada host da configuração.
    Check,

    /// Executa o exemplo Person e mostra a saída de Debug.
    Demo {
        /// Usa o modo invisível.
        #[arg(short, long)]
        invisible: bool,
    },

    /// Mostra versão.
    Version,
}
