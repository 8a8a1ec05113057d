//! PostgreSQL fixtures
//!
//! Database tests run only when `TEST_DATABASE_URL` points at a scratch
//! PostgreSQL instance; otherwise they log and return early. Records use
//! random names so runs never collide and nothing is truncated.

use sqlx::PgPool;
use uuid::Uuid;

use videohub::backend::auth::password::hash_password;
use videohub::backend::auth::users::NewUser;
use videohub::backend::auth::PgUserStore;

pub const TEST_DATABASE_ENV: &str = "TEST_DATABASE_URL";

pub fn test_database_url() -> Option<String> {
    std::env::var(TEST_DATABASE_ENV)
        .ok()
        .filter(|url| !url.trim().is_empty())
}

/// Test database fixture: a migrated pool and a store over it
pub struct TestDatabase {
    pub pool: PgPool,
    pub store: PgUserStore,
}

impl TestDatabase {
    /// `None` when no test database is configured
    pub async fn connect() -> Option<Self> {
        let Some(url) = test_database_url() else {
            eprintln!("{} not set, skipping database test", TEST_DATABASE_ENV);
            return None;
        };
        let pool = PgPool::connect(&url)
            .await
            .expect("Failed to create test database pool");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");
        Some(Self {
            store: PgUserStore::new(pool.clone()),
            pool,
        })
    }
}

/// A `NewUser` with a unique username and email
pub fn unique_user() -> NewUser {
    let tag = Uuid::new_v4().simple().to_string();
    NewUser::new(
        &format!("user_{}", &tag[..12]),
        &format!("{}@example.test", &tag[..12]),
        "Test User",
        "https://cdn.test/avatar.png".to_string(),
        None,
        hash_password("p1").expect("hashing failed"),
    )
}
