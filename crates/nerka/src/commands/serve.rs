//! `nerka serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use nerka_config::{CliSettings, Config};
use nerka_server::{run_server, server_config_from_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args, Debug)]
pub(crate) struct ServeArgs {
    /// Directory to serve (overrides config).
    #[arg(value_name = "SOURCE_DIR", conflicts_with = "source_dir")]
    root: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover nerka.toml).
    #[arg(short, long, env = "NERKA_CONFIG")]
    config: Option<PathBuf>,

    /// Directory to serve (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose output (request and link-check logs).
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = self.cli_settings();
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        tracing::debug!(config_path = ?config.config_path, "Configuration loaded");

        if !config.docs_resolved.source_dir.is_dir() {
            return Err(CliError::Server(format!(
                "Source directory not found: {}",
                config.docs_resolved.source_dir.display()
            )));
        }

        output.highlight(&format!(
            "Serving on http://{}:{}/",
            config.server.host, config.server.port
        ));
        output.info(&format!(
            "Source directory: {}",
            config.docs_resolved.source_dir.display()
        ));
        if config.docs_resolved.source_dir.join(".auth").is_file() {
            output.info("Access cookie: required");
        }

        let server_config = server_config_from_config(&config);
        run_server(server_config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }

    /// Build config overrides; the positional directory and `--source-dir`
    /// are interchangeable.
    pub(crate) fn cli_settings(&self) -> CliSettings {
        CliSettings {
            host: self.host.clone(),
            port: self.port,
            source_dir: self.source_dir.clone().or_else(|| self.root.clone()),
        }
    }
}
