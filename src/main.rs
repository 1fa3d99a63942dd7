use clap::Parser;
use feature_cache::cli::{Cli, Commands};
use feature_cache::types::config::Config;
use feature_cache::CacheResult;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> CacheResult<()> {
    let cli = Cli::parse();

    // Load configuration first (no logging yet)
    let config = if cli.config.exists() {
        Config::load(&cli.config).unwrap_or_else(|_| Config::default_config())
    } else {
        Config::default_config()
    };

    // Determine log level: CLI flags take precedence over config
    let log_level = if cli.quiet {
        "error".to_string()
    } else if cli.verbose {
        "debug".to_string()
    } else {
        config.log_level().to_string()
    };

    let filter = EnvFilter::from_default_env().add_directive(
        format!("feature_cache={}", log_level)
            .parse()
            .unwrap_or_else(|_| {
                "feature_cache=info"
                    .parse()
                    .expect("fallback directive is valid")
            }),
    );

    if config.is_json_log() {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init();
    }

    tracing::debug!("Configuration path: {}", cli.config.display());

    match cli.command {
        Commands::Init { path } => {
            feature_cache::cli::commands::init(path)?;
        }
        Commands::Check => {
            feature_cache::cli::commands::check(&cli.config)?;
        }
        Commands::Demo { invisible } => {
            feature_cache::cli::commands::demo(invisible)?;
        }
        Commands::Version => {
            feature_cache::cli::commands::version();
        }
    }

    Ok(())
}
