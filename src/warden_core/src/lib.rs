pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    email::Email,
    hashed_password::HashedPassword,
    password::Password,
    token::{ResetToken, SessionToken},
    user::{User, UserError, UserId},
};

pub use ports::{
    repositories::{UserFilter, UserStore, UserStoreError, UserUpdate},
    services::{PasswordHasher, PasswordHasherError},
};
