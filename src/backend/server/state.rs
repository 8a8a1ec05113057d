/**
 * Application State Management
 *
 * `AppState` is the single state container handed to the router. Handlers
 * extract only the part they need through the `FromRef` impls below.
 *
 * # Thread Safety
 *
 * Nothing in here is mutable in-process. `AuthService` is shared behind an
 * `Arc`; all per-user mutable state lives in the `UserStore`, which
 * serializes writes itself.
 *
 * # Example
 *
 * ```rust,ignore
 * use std::sync::Arc;
 * use axum::extract::State;
 * use videohub::backend::auth::service::AuthService;
 *
 * async fn handler(State(auth): State<Arc<AuthService>>) {
 *     // ...
 * }
 * ```
 */

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::service::AuthService;

/// Directory multipart uploads are spooled to before hand-off
#[derive(Clone, Debug)]
pub struct UploadDir(pub PathBuf);

#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,

    pub upload_dir: UploadDir,
}

impl AppState {
    pub fn new(auth: AuthService, upload_dir: PathBuf) -> Self {
        Self {
            auth: Arc::new(auth),
            upload_dir: UploadDir(upload_dir),
        }
    }
}

impl FromRef<AppState> for Arc<AuthService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}

impl FromRef<AppState> for UploadDir {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.upload_dir.clone()
    }
}
