use secrecy::{ExposeSecret, Secret};
use sqlx::{PgPool, Postgres, QueryBuilder, postgres::PgPoolOptions};
use warden_core::{
    Email, HashedPassword, ResetToken, SessionToken, User, UserFilter, UserId, UserStore,
    UserStoreError, UserUpdate,
};

use crate::config::PostgresSettings;

const USER_COLUMNS: &str = "id, email, hashed_password, session_id, reset_token";

#[derive(Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresUserStore { pool }
    }

    /// Applies the embedded migrations that create the `users` table.
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!().run(&self.pool).await
    }
}

/// Create a PostgreSQL connection pool from settings
pub async fn get_postgres_pool(settings: &PostgresSettings) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect(settings.url.expose_secret())
        .await
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    email: String,
    hashed_password: String,
    session_id: Option<String>,
    reset_token: Option<String>,
}

impl UserRow {
    fn into_user(self) -> Result<User, UserStoreError> {
        let email = Email::try_from(Secret::from(self.email))
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        Ok(User::from_parts(
            UserId::new(self.id),
            email,
            HashedPassword::new(Secret::from(self.hashed_password)),
            self.session_id.map(SessionToken::from),
            self.reset_token.map(ResetToken::from),
        ))
    }
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn add_user(
        &self,
        email: Email,
        hashed_password: HashedPassword,
    ) -> Result<User, UserStoreError> {
        let query = format!(
            "INSERT INTO users (email, hashed_password) VALUES ($1, $2) RETURNING {USER_COLUMNS}"
        );

        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(email.as_ref().expose_secret())
            .bind(hashed_password.as_ref().expose_secret())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if let Some(db_err) = e.as_database_error() {
                    if db_err.is_unique_violation() {
                        return UserStoreError::UserAlreadyExists;
                    }
                }
                UserStoreError::UnexpectedError(e.to_string())
            })?;

        row.into_user()
    }

    #[tracing::instrument(name = "Retrieving user from PostgreSQL", skip_all)]
    async fn find_user(&self, filter: UserFilter<'_>) -> Result<Option<User>, UserStoreError> {
        let (column, value) = match filter {
            UserFilter::Email(email) => ("email", email.as_ref().expose_secret().as_str()),
            UserFilter::SessionId(token) => ("session_id", token.as_str()),
            UserFilter::ResetToken(token) => ("reset_token", token.as_str()),
        };
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE {column} = $1");

        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        row.map(UserRow::into_user).transpose()
    }

    #[tracing::instrument(name = "Updating user in PostgreSQL", skip(self, update))]
    async fn update_user(&self, id: UserId, update: UserUpdate) -> Result<(), UserStoreError> {
        if update.is_empty() {
            let mut builder: QueryBuilder<Postgres> =
                QueryBuilder::new("SELECT 1 FROM users WHERE id = ");
            builder.push_bind(id.as_i64());
            push_reset_token_guard(&mut builder, update.expected_reset_token);

            let exists = builder
                .build()
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
            return exists.map(|_| ()).ok_or(UserStoreError::UserNotFound);
        }

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE users SET ");
        let mut columns = builder.separated(", ");
        if let Some(hashed_password) = update.hashed_password {
            columns
                .push("hashed_password = ")
                .push_bind_unseparated(hashed_password.as_ref().expose_secret().clone());
        }
        if let Some(session_id) = update.session_id {
            columns
                .push("session_id = ")
                .push_bind_unseparated(session_id.map(|t| t.as_str().to_owned()));
        }
        if let Some(reset_token) = update.reset_token {
            columns
                .push("reset_token = ")
                .push_bind_unseparated(reset_token.map(|t| t.as_str().to_owned()));
        }
        builder.push(" WHERE id = ").push_bind(id.as_i64());
        push_reset_token_guard(&mut builder, update.expected_reset_token);

        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(UserStoreError::UserNotFound);
        }

        Ok(())
    }
}

fn push_reset_token_guard(
    builder: &mut QueryBuilder<'_, Postgres>,
    expected: Option<ResetToken>,
) {
    if let Some(token) = expected {
        builder
            .push(" AND reset_token = ")
            .push_bind(token.as_str().to_owned());
    }
}
