//! Runtime configuration
//!
//! Both configs read their overrides from the environment:
//! - `TAKEOFF_DATA_DIR`: directory holding `events.json` and `settings.json` (default `data`)
//! - `TAKEOFF_ADDR`: HTTP bind address (default `127.0.0.1:34115`)

use std::env;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

const DATA_DIR_VAR: &str = "TAKEOFF_DATA_DIR";
const ADDR_VAR: &str = "TAKEOFF_ADDR";
const DEFAULT_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 34115);

/// Location of the persisted collections
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the data directory
    pub data_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
        }
    }
}

impl StoreConfig {
    /// Create config with custom data directory
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Config from `TAKEOFF_DATA_DIR`, falling back to `./data`
    pub fn from_env() -> Self {
        match env::var(DATA_DIR_VAR) {
            Ok(dir) if !dir.trim().is_empty() => Self::new(dir),
            _ => Self::default(),
        }
    }

    /// Get the data directory path
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get path to events.json
    pub fn events_path(&self) -> PathBuf {
        self.data_dir.join("events.json")
    }

    /// Get path to settings.json
    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join("settings.json")
    }
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(DEFAULT_ADDR),
        }
    }
}

impl ServerConfig {
    /// Config from `TAKEOFF_ADDR`; an unparseable value is logged and ignored
    pub fn from_env() -> Self {
        match env::var(ADDR_VAR) {
            Ok(raw) => match raw.parse() {
                Ok(addr) => Self { addr },
                Err(e) => {
                    tracing::warn!(value = %raw, error = %e, "ignoring invalid {}", ADDR_VAR);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}
