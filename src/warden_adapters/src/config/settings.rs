use config::{Config, ConfigError, Environment, File};
use secrecy::Secret;
use serde::Deserialize;

use super::constants::{env, prod};

/// Runtime configuration.
///
/// Built-in defaults, then `config/base.json` when present, then
/// `WARDEN__SECTION__KEY` environment variables (after `.env` is loaded).
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub postgres: PostgresSettings,
    pub hashing: HashingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub address: String,
    #[serde(default)]
    pub allowed_origins: AllowedOrigins,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSettings {
    pub url: Secret<String>,
    pub max_connections: u32,
}

/// Argon2id cost parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct HashingSettings {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashingSettings {
    fn default() -> Self {
        Self {
            memory_kib: 15000,
            iterations: 2,
            parallelism: 1,
        }
    }
}

/// CORS origins allowed to call the service. Empty means CORS is not enabled.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn new(origins: Vec<String>) -> Self {
        Self(origins)
    }

    pub fn contains(&self, origin: &str) -> bool {
        self.0.iter().any(|allowed| allowed == origin)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::build(environment())
    }

    fn build(environment: Environment) -> Result<Self, ConfigError> {
        let hashing = HashingSettings::default();

        Config::builder()
            .set_default("server.address", prod::APP_ADDRESS)?
            .set_default("server.allowed_origins", Vec::<String>::new())?
            .set_default("postgres.url", prod::DATABASE_URL)?
            .set_default(
                "postgres.max_connections",
                i64::from(prod::MAX_DB_CONNECTIONS),
            )?
            .set_default("hashing.memory_kib", i64::from(hashing.memory_kib))?
            .set_default("hashing.iterations", i64::from(hashing.iterations))?
            .set_default("hashing.parallelism", i64::from(hashing.parallelism))?
            .add_source(File::with_name(env::CONFIG_FILE).required(false))
            .add_source(environment)
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix(env::ENV_PREFIX)
        .prefix_separator(env::ENV_SEPARATOR)
        .separator(env::ENV_SEPARATOR)
        .list_separator(",")
        .with_list_parse_key("server.allowed_origins")
        .try_parsing(true)
}
