//! # Warden - Authentication Helper Library
//!
//! Facade crate that re-exports the public APIs of the workspace crates.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `HashedPassword`, `User`, tokens
//! - **Ports**: `UserStore`, `PasswordHasher`
//! - **Use cases**: `RegisterUseCase`, `ValidateLoginUseCase`, etc.
//! - **Adapters**: `Argon2PasswordHasher`, `HashMapUserStore`, `PostgresUserStore`
//! - **Service**: `AuthService` for the auth operations, `AuthServer` for HTTP

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use warden_core::*;
}

// Re-export most commonly used core types at the root level
pub use warden_core::{
    Email, HashedPassword, Password, ResetToken, SessionToken, User, UserError, UserId,
};

// ============================================================================
// Ports
// ============================================================================

pub use warden_core::{
    PasswordHasher, PasswordHasherError, UserFilter, UserStore, UserStoreError, UserUpdate,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use warden_application::use_cases::*;
}

pub use warden_application::{
    AuthService, RegisterError, RequestPasswordResetError, ResetPasswordError, ValidateLoginError,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Persistence implementations
    pub mod persistence {
        pub use warden_adapters::persistence::*;
    }

    /// Password hashing implementations
    pub mod hashing {
        pub use warden_adapters::hashing::*;
    }

    /// Configuration
    pub mod config {
        pub use warden_adapters::config::*;
    }
}

pub use warden_adapters::{
    Argon2PasswordHasher, HashMapUserStore, PostgresUserStore, Settings, get_postgres_pool,
};

// ============================================================================
// HTTP Server
// ============================================================================

pub use warden_server::AuthServer;

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
