/**
 * Router Configuration
 *
 * Combines the API routes with the cross-cutting layers and the static
 * file fallback.
 *
 * # Layers (outermost first)
 *
 * 1. `TraceLayer` - request/response spans
 * 2. `CorsLayer` - only when `CORS_ORIGIN` is configured
 * 3. `DefaultBodyLimit` - 16 KiB for JSON bodies
 *
 * # Fallback
 *
 * Anything that is not an API route is served from `public/`.
 */

use axum::{
    extract::DefaultBodyLimit,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

const JSON_BODY_LIMIT: usize = 16 * 1024;
const STATIC_DIR: &str = "public";

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &AppConfig) -> Router<()> {
    let router = configure_api_routes(Router::new(), &app_state, config.max_upload_bytes);

    let router = router
        .fallback_service(ServeDir::new(STATIC_DIR))
        .layer(DefaultBodyLimit::max(JSON_BODY_LIMIT));

    let router = match config.cors_origin.as_deref().map(cors_layer) {
        Some(Some(cors)) => router.layer(cors),
        Some(None) => {
            tracing::warn!("CORS_ORIGIN is not a valid header value; CORS disabled");
            router
        }
        None => router,
    };

    router.layer(TraceLayer::new_for_http()).with_state(app_state)
}

/// Credentialed CORS for a single origin
fn cors_layer(origin: &str) -> Option<CorsLayer> {
    let origin = HeaderValue::from_str(origin).ok()?;
    Some(
        CorsLayer::new()
            .allow_origin(origin)
            .allow_credentials(true)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([CONTENT_TYPE, AUTHORIZATION]),
    )
}
