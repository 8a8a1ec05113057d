/**
 * Register Handler
 *
 * POST /api/v1/users/register (multipart/form-data)
 *
 * # Fields
 *
 * - `fullName`, `email`, `username`, `password` - text
 * - `avatar` - file, required
 * - `coverImage` - file, optional
 *
 * Files are spooled to the upload directory under a UUID-prefixed name and
 * handed to the service by path. Once the form is read the service owns
 * those files and removes them; if reading the form fails part-way, the
 * files written so far are removed here.
 */

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    extract::{multipart::Field, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::backend::auth::service::{AuthService, RegisterInput};
use crate::backend::error::BackendError;
use crate::backend::media;
use crate::backend::server::state::UploadDir;
use crate::shared::ApiResponse;

pub async fn register(
    State(auth): State<Arc<AuthService>>,
    State(UploadDir(upload_dir)): State<UploadDir>,
    multipart: Multipart,
) -> Result<impl IntoResponse, BackendError> {
    let mut input = RegisterInput::default();

    if let Err(e) = read_form(multipart, &upload_dir, &mut input).await {
        for path in input.avatar.iter().chain(input.cover_image.iter()) {
            media::discard(path).await;
        }
        return Err(e);
    }

    let user = auth.register(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(201, user, "User registered successfully")),
    ))
}

async fn read_form(
    mut multipart: Multipart,
    upload_dir: &Path,
    input: &mut RegisterInput,
) -> Result<(), BackendError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| BackendError::validation(e.body_text()))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match name.as_str() {
            "avatar" | "coverImage" => {
                let Some(path) = spool(field, upload_dir).await? else {
                    continue;
                };
                let slot = if name == "avatar" {
                    &mut input.avatar
                } else {
                    &mut input.cover_image
                };
                // A repeated file field replaces the earlier one
                if let Some(previous) = slot.replace(path) {
                    media::discard(&previous).await;
                }
            }
            "fullName" | "email" | "username" | "password" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| BackendError::validation(e.body_text()))?;
                let slot = match name.as_str() {
                    "fullName" => &mut input.full_name,
                    "email" => &mut input.email,
                    "username" => &mut input.username,
                    _ => &mut input.password,
                };
                *slot = Some(value);
            }
            other => tracing::debug!("Ignoring unknown register field {}", other),
        }
    }
    Ok(())
}

/// Write a file field to disk; `None` when the field carries no file
async fn spool(mut field: Field<'_>, upload_dir: &Path) -> Result<Option<PathBuf>, BackendError> {
    let file_name = match field.file_name().map(sanitize_file_name) {
        Some(name) if !name.is_empty() => name,
        _ => return Ok(None),
    };

    tokio::fs::create_dir_all(upload_dir)
        .await
        .map_err(|e| BackendError::internal("Could not store upload", e))?;

    let path = upload_dir.join(format!("{}-{}", Uuid::new_v4(), file_name));
    let mut file = tokio::fs::File::create(&path)
        .await
        .map_err(|e| BackendError::internal("Could not store upload", e))?;

    let written = async {
        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|e| BackendError::validation(e.body_text()))?
        {
            file.write_all(&chunk)
                .await
                .map_err(|e| BackendError::internal("Could not store upload", e))?;
        }
        file.flush()
            .await
            .map_err(|e| BackendError::internal("Could not store upload", e))
    }
    .await;

    match written {
        Ok(()) => {
            tracing::debug!("Spooled upload to {}", path.display());
            Ok(Some(path))
        }
        Err(e) => {
            media::discard(&path).await;
            Err(e)
        }
    }
}

/// Keep the last path component and only filename-safe characters
fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default();
    base.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect::<String>()
        .trim_start_matches('.')
        .to_string()
}
