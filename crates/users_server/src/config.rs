//! Server configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server bind address (e.g., "0.0.0.0:8000")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allow_credentials: bool,
}

fn default_bind_address() -> String {
    "0.0.0.0:8000".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            cors: CorsConfig::default(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        // Deliberately permissive for a demo API: every origin and method,
        // with credentials. Tighten before exposing this anywhere real.
        Self {
            allowed_origins: vec!["*".to_string()],
            allowed_methods: vec!["*".to_string()],
            allow_credentials: true,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub async fn load(path: impl AsRef<Path>) -> ServerResult<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await?;

        toml::from_str(&content).map_err(|e| {
            ServerError::Config(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    /// Load configuration from default locations, falling back to defaults
    /// when no config file exists.
    pub async fn load_default() -> ServerResult<Self> {
        let search_paths = [
            PathBuf::from("users.toml"),
            PathBuf::from("config/users.toml"),
        ];

        for path in &search_paths {
            if path.exists() {
                tracing::info!("Loading config from {}", path.display());
                return Self::load(path).await;
            }
        }

        Ok(Self::default())
    }
}
