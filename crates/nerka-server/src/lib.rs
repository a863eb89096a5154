//! HTTP server for the nerka page server.
//!
//! Serves a directory of Markdown and HTML documents as pages with axum.
//! Every request, whatever its method or path, goes through one handler:
//!
//! ```text
//! request ──► /.auth/<token>  ──► set cookie, 303 to ..
//!         ──► .auth present?  ──► cookie must match, else "no"
//!         ──► stat(path)      ──► 303 to add/remove the trailing slash
//!         ──► Site::resolve + Site::render ──► text/html page
//! ```
//!
//! Responses pass through request tracing, a panic guard, and a weak `ETag`
//! layer answering `If-None-Match` with `304 Not Modified`.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use nerka_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         source_dir: PathBuf::from("notes"),
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```

mod app;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use nerka_site::{Site, SiteConfig};
use nerka_storage::{FsStorage, Storage};
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Directory documents are served from.
    pub source_dir: PathBuf,
    /// Name of the access cookie.
    pub cookie_name: String,
    /// Site name used in page titles.
    pub site_title: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8002,
            source_dir: PathBuf::from("docs"),
            cookie_name: "nerka".to_owned(),
            site_title: "nerka".to_owned(),
        }
    }
}

/// Run the server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address is invalid or the listener fails.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let storage: Arc<dyn Storage> = Arc::new(FsStorage::new(config.source_dir.clone()));
    let state = app_state(storage, &config);
    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, source_dir = %config.source_dir.display(), "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Build the shared handler state over `storage`.
pub(crate) fn app_state(storage: Arc<dyn Storage>, config: &ServerConfig) -> Arc<AppState> {
    let site_config = SiteConfig {
        title: config.site_title.clone(),
    };
    Arc::new(AppState {
        site: Site::new(storage, site_config),
        cookie_name: config.cookie_name.clone(),
    })
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from nerka config.
#[must_use]
pub fn server_config_from_config(config: &nerka_config::Config) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        source_dir: config.docs_resolved.source_dir.clone(),
        cookie_name: config.auth.cookie_name.clone(),
        site_title: config.site.title.clone(),
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_server_config() {
        let config = ServerConfig::default();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8002);
        assert_eq!(config.cookie_name, "nerka");
    }

    #[test]
    fn test_server_config_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nerka.toml");
        std::fs::write(
            &path,
            "[server]\nport = 9000\n\n[auth]\ncookie_name = \"team\"\n\n[site]\ntitle = \"Wiki\"\n",
        )
        .unwrap();
        let config = nerka_config::Config::load(Some(Path::new(&path)), None).unwrap();

        let server_config = server_config_from_config(&config);

        assert_eq!(server_config.port, 9000);
        assert_eq!(server_config.source_dir, dir.path().join("docs"));
        assert_eq!(server_config.cookie_name, "team");
        assert_eq!(server_config.site_title, "Wiki");
    }
}
