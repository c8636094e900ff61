pub mod auth_server;
pub mod routes;
mod tracing;

pub use auth_server::AuthServer;
