use color_eyre::eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use warden::{
    Argon2PasswordHasher, AuthServer, AuthService, PostgresUserStore, Settings, get_postgres_pool,
};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let config = Settings::load()?;

    let password_hasher = Argon2PasswordHasher::new(&config.hashing)?;
    let pg_pool = get_postgres_pool(&config.postgres).await?;
    let user_store = PostgresUserStore::new(pg_pool);
    user_store.migrate().await?;
    let auth_service = AuthService::new(user_store, password_hasher);

    let listener = tokio::net::TcpListener::bind(&config.server.address).await?;
    tracing::info!("Starting warden...");

    AuthServer::new(auth_service)
        .run_standalone(listener, config.server.allowed_origins.clone())
        .await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
