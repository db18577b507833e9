/// Client configuration
use fin_core::{FinError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file read when no explicit path is given
pub const DEFAULT_CONFIG_FILE: &str = "fin.toml";

/// Prefix of environment overrides, e.g. `FIN_API__BASE_URL`
pub const ENV_PREFIX: &str = "FIN";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default = "default_api")]
    pub api: ApiSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_logging")]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl AppConfig {
    /// Load configuration from a file and the environment.
    ///
    /// `path` defaults to `fin.toml` in the working directory; a missing
    /// default file is fine, a missing explicit file is an error. Variables
    /// like `FIN_API__BASE_URL` override file values.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path).required(true));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| FinError::Config(e.to_string()))?;

        Self::finish(config)
    }

    /// Parse configuration from TOML text, without environment overrides.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(text, config::FileFormat::Toml))
            .build()
            .map_err(|e| FinError::Config(e.to_string()))?;

        Self::finish(config)
    }

    fn finish(config: config::Config) -> Result<Self> {
        let app: Self = config
            .try_deserialize()
            .map_err(|e| FinError::Config(e.to_string()))?;
        app.validate()?;
        Ok(app)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let url = self.api.base_url.trim();
        if url.is_empty() {
            return Err(FinError::Config(
                "API base URL is required (set FIN_API__BASE_URL)".to_string(),
            ));
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(FinError::Config(format!(
                "API base URL must start with http:// or https://, got {url:?}"
            )));
        }
        if self.api.timeout_secs == 0 || self.api.connect_timeout_secs == 0 {
            return Err(FinError::Config("API timeouts must be non-zero".to_string()));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.api.connect_timeout_secs)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: default_api(),
            storage: default_storage(),
            logging: default_logging(),
        }
    }
}

// Default values
fn default_api() -> ApiSettings {
    ApiSettings {
        base_url: default_base_url(),
        timeout_secs: default_timeout_secs(),
        connect_timeout_secs: default_connect_timeout_secs(),
    }
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        data_dir: default_data_dir(),
    }
}

fn default_logging() -> LoggingSettings {
    LoggingSettings {
        filter: default_log_filter(),
    }
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fin-client")
}

fn default_log_filter() -> String {
    "fin_app=info,fin_session=info,fin_settings=info,fin_server_client=info".to_string()
}
