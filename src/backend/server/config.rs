/**
 * Server Configuration
 *
 * Picks the user store backend from the loaded `AppConfig`.
 *
 * # Store Selection
 *
 * - `DATABASE_URL` set: PostgreSQL, migrations applied on connect. A
 *   connection or migration failure aborts startup.
 * - `DATABASE_URL` unset: in-memory store. Users are lost on restart, so
 *   this is logged as a warning.
 */

use std::sync::Arc;

use crate::backend::auth::memory_store::MemoryUserStore;
use crate::backend::auth::pg_store::PgUserStore;
use crate::backend::auth::users::{StoreError, UserStore};
use crate::shared::AppConfig;

/// Build the user store described by `config`
///
/// # Example
///
/// ```rust,ignore
/// let store = load_user_store(&config).await?;
/// ```
pub async fn load_user_store(config: &AppConfig) -> Result<Arc<dyn UserStore>, StoreError> {
    match &config.database_url {
        Some(url) => {
            tracing::info!("Connecting to database...");
            let store = PgUserStore::connect(url).await?;
            tracing::info!("Database connected and migrations applied");
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("DATABASE_URL not set. Using in-memory user store; data will not persist.");
            Ok(Arc::new(MemoryUserStore::new()))
        }
    }
}
