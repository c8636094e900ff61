pub mod config;
pub mod hashing;
pub mod persistence;

pub use crate::config::{AllowedOrigins, HashingSettings, PostgresSettings, ServerSettings, Settings};
pub use hashing::Argon2PasswordHasher;
pub use persistence::{HashMapUserStore, PostgresUserStore, get_postgres_pool};
