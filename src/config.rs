use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Start with the sample actors and movies instead of empty collections
    pub load_seed_data: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            load_seed_data: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and config file
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Some("config"), Self::environment())
    }

    /// Environment variables, e.g. MOVIES_SERVER__PORT=8080
    pub fn environment() -> config::Environment {
        config::Environment::with_prefix("MOVIES")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    /// Layer defaults, an optional config file and `environment` in that order
    pub fn load_from(file: Option<&str>, environment: config::Environment) -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        // Add default configuration
        config = config.add_source(config::Config::try_from(&AppConfig::default())?);

        // Add config file if it exists
        if let Some(file) = file {
            config = config.add_source(config::File::with_name(file).required(false));
        }

        config = config.add_source(environment);

        let config = config.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        Ok(app_config)
    }

    /// Get the server bind address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
