/**
 * Server Initialization
 *
 * Wires the configured collaborators into an `AuthService`, wraps it in
 * `AppState`, and builds the router.
 *
 * # Initialization Process
 *
 * 1. Load the user store (PostgreSQL or in-memory)
 * 2. Create the Cloudinary media store from `CloudinaryConfig`
 * 3. Create the token issuer from `AuthConfig`
 * 4. Create the router with all routes and layers
 *
 * `build_app` takes the store and media store as trait objects so tests can
 * run the full router against in-memory fakes.
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::auth::service::AuthService;
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::auth::users::{StoreError, UserStore};
use crate::backend::media::{CloudinaryStore, MediaStore};
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_user_store;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Create the application from configuration
pub async fn create_app(config: &AppConfig) -> Result<Router<()>, StoreError> {
    tracing::info!("Initializing videohub backend server");

    let store = load_user_store(config).await?;
    let media = Arc::new(CloudinaryStore::new(config.cloudinary.clone()));
    tracing::info!("Media uploads go to cloud {}", config.cloudinary.cloud_name);

    Ok(build_app(config, store, media))
}

/// Build the router around explicit collaborators
pub fn build_app(
    config: &AppConfig,
    store: Arc<dyn UserStore>,
    media: Arc<dyn MediaStore>,
) -> Router<()> {
    let issuer = TokenIssuer::new(&config.auth);
    let auth = AuthService::new(store, media, issuer);
    let app_state = AppState::new(auth, config.upload_dir.clone());

    let app = create_router(app_state, config);
    tracing::info!("Router configured");
    app
}
