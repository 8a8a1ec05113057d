/**
 * PostgreSQL User Store
 *
 * sqlx-backed implementation of `UserStore`. Uniqueness comes from the
 * `users_username_key` / `users_email_key` indexes created by the
 * migrations in `./migrations`; every UPDATE sets `updated_at = NOW()`.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::auth::password::PasswordHash;
use crate::backend::auth::users::{
    normalize_email, normalize_username, NewUser, StoreError, User, UserStore,
};

const USER_COLUMNS: &str = "id, username, email, full_name, avatar, cover_image, watch_history, \
     password_hash, refresh_token, created_at, updated_at";

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    email: String,
    full_name: String,
    avatar: String,
    cover_image: Option<String>,
    watch_history: Vec<Uuid>,
    password_hash: String,
    refresh_token: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            email: row.email,
            full_name: row.full_name,
            avatar: row.avatar,
            cover_image: row.cover_image,
            watch_history: row.watch_history,
            password_hash: PasswordHash::from_stored(row.password_hash),
            refresh_token: row.refresh_token,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect and bring the schema up to date
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPool::connect(database_url).await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self::new(pool))
    }
}

fn map_insert_error(err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => StoreError::Conflict,
        _ => StoreError::Database(err),
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_username_or_email(
        &self,
        username: Option<&str>,
        email: Option<&str>,
    ) -> Result<Option<User>, StoreError> {
        if username.is_none() && email.is_none() {
            return Ok(None);
        }

        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1 OR email = $2 LIMIT 1"
        ))
        .bind(username.map(normalize_username))
        .bind(email.map(normalize_email))
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }

    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            r#"
            INSERT INTO users (id, username, email, full_name, avatar, cover_image, password_hash)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.full_name)
        .bind(&user.avatar)
        .bind(&user.cover_image)
        .bind(user.password_hash.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_insert_error)?;

        Ok(row.into())
    }

    async fn set_refresh_token(&self, id: Uuid, token: Option<&str>) -> Result<(), StoreError> {
        let result = sqlx::query(
            "UPDATE users SET refresh_token = $1, updated_at = NOW() WHERE id = $2",
        )
        .bind(token)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn rotate_refresh_token(
        &self,
        id: Uuid,
        current: &str,
        next: &str,
    ) -> Result<bool, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET refresh_token = $1, updated_at = NOW()
            WHERE id = $2 AND refresh_token = $3
            "#,
        )
        .bind(next)
        .bind(id)
        .bind(current)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }
}
