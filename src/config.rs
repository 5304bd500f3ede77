// Configuration module
// Resolves server settings once at startup; everything is immutable afterwards.

use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Deserialize;

/// Default listening port when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 6931;

/// Server configuration.
///
/// All values come from the process environment (`BASE_DIR`, `PORT`,
/// `ENABLE_ACCESS_LOG`) with defaults applied for anything unset. The server
/// never changes its working directory; `base_dir` is carried explicitly and
/// used for all path resolution.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Directory tree to serve.
    pub base_dir: PathBuf,
    /// TCP port to bind on all interfaces.
    pub port: u16,
    /// Per-request logging. Off by default: sandboxed-runtime launchers
    /// treat any per-request output as noise.
    pub enable_access_log: bool,
}

impl ServerConfig {
    /// Load configuration from the environment, falling back to defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        let cwd = std::env::current_dir().map_err(|e| {
            config::ConfigError::Message(format!("cannot determine working directory: {e}"))
        })?;

        let settings = config::Config::builder()
            .set_default("base_dir", cwd.to_string_lossy().as_ref())?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("enable_access_log", false)?
            .add_source(config::Environment::default().try_parsing(true))
            .build()?;

        settings.try_deserialize()
    }

    /// Address the listener binds: the configured port on all interfaces.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

/// Read-only state shared by every connection.
#[derive(Debug)]
pub struct AppState {
    pub config: ServerConfig,
    /// Canonicalized `base_dir`. Containment checks during path resolution
    /// compare against this form, so it must be resolved up front.
    pub root: PathBuf,
}

impl AppState {
    /// Validate and canonicalize the configured root directory.
    ///
    /// Fails when the directory is missing or unreadable, which is a fatal
    /// startup error for the caller.
    pub fn new(config: ServerConfig) -> io::Result<Self> {
        let root = config.base_dir.canonicalize().map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("base dir '{}': {e}", config.base_dir.display()),
            )
        })?;

        if !root.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("base dir '{}' is not a directory", root.display()),
            ));
        }

        Ok(Self { config, root })
    }
}
