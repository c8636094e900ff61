pub mod email;
pub mod hashed_password;
pub mod password;
pub mod token;
pub mod user;
