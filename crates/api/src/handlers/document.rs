//! Handlers for group documents.
//!
//! Uploads are stored on local disk under `UPLOAD_DIR/<group_id>/` with a
//! UUID-prefixed, sanitized file name; the row keeps the path.

use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use tripdesk_core::documents::{document_types, sanitize_file_name};
use tripdesk_core::error::CoreError;
use tripdesk_core::types::DbId;
use tripdesk_core::validation::check_one_of;
use tripdesk_db::models::document::{CreateDocument, Document};
use tripdesk_db::repositories::{DocumentRepo, GroupRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Fields collected from the upload form.
#[derive(Debug, Default)]
struct UploadForm {
    file: Option<(String, Option<String>, Vec<u8>)>,
    group_id: Option<String>,
    document_type: Option<String>,
    description: Option<String>,
    uploaded_by: Option<String>,
}

fn non_empty(text: String) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Map a multipart read failure, keeping the size limit distinct from
/// malformed bodies.
fn multipart_error(err: MultipartError, max_upload_bytes: usize) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(format!(
            "Upload exceeds the limit of {max_upload_bytes} bytes"
        ))
    } else {
        AppError::BadRequest(err.body_text())
    }
}

async fn read_form(mut multipart: Multipart, max_upload_bytes: usize) -> AppResult<UploadForm> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, max_upload_bytes))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let content_type = field.content_type().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| multipart_error(e, max_upload_bytes))?;
                form.file = Some((file_name, content_type, data.to_vec()));
            }
            "group_id" | "groupId" | "document_type" | "documentType" | "description"
            | "uploaded_by" | "uploadedBy" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| multipart_error(e, max_upload_bytes))?;
                let value = non_empty(text);
                match name.as_str() {
                    "group_id" | "groupId" => form.group_id = value,
                    "document_type" | "documentType" => form.document_type = value,
                    "description" => form.description = value,
                    _ => form.uploaded_by = value,
                }
            }
            _ => {} // ignore unknown fields
        }
    }

    Ok(form)
}

/// POST /api/upload/document
///
/// Multipart form: `file` (required), `group_id` (required), `document_type`
/// (default `other`), `description`, `uploaded_by`. The camelCase spellings
/// `groupId`, `documentType` and `uploadedBy` are accepted too. A body over
/// `MAX_UPLOAD_BYTES` answers 413.
pub async fn upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<Document>)> {
    let form = read_form(multipart, state.config.max_upload_bytes).await?;

    let (original_name, content_type, data) = form
        .file
        .ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;

    let group_id: DbId = form
        .group_id
        .ok_or_else(|| AppError::BadRequest("Missing required 'group_id' field".into()))?
        .parse()
        .map_err(|_| AppError::BadRequest("'group_id' must be a numeric id".into()))?;

    let document_type = form
        .document_type
        .unwrap_or_else(|| document_types::OTHER.to_string());
    check_one_of("document_type", &document_type, document_types::ALL)?;

    GroupRepo::find_by_id(&state.pool, group_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Group",
            id: group_id,
        }))?;

    let file_name = sanitize_file_name(&original_name);
    let group_dir = state.config.upload_dir.join(group_id.to_string());
    tokio::fs::create_dir_all(&group_dir)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    let file_path = group_dir.join(format!("{}_{file_name}", uuid::Uuid::new_v4()));
    tokio::fs::write(&file_path, &data)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    let input = CreateDocument {
        group_id,
        document_type,
        file_name,
        file_path: file_path.to_string_lossy().to_string(),
        file_size_bytes: data.len() as i64,
        content_type,
        description: form.description,
        uploaded_by: form.uploaded_by,
    };

    match DocumentRepo::create(&state.pool, &input).await {
        Ok(document) => {
            tracing::info!(
                document_id = document.id,
                group_id,
                size = document.file_size_bytes,
                "Document uploaded"
            );
            Ok((StatusCode::CREATED, Json(document)))
        }
        Err(err) => {
            // No row was written, so drop the file.
            if let Err(io_err) = tokio::fs::remove_file(&file_path).await {
                tracing::warn!(path = %file_path.display(), error = %io_err, "Failed to remove upload");
            }
            Err(err.into())
        }
    }
}

/// GET /api/groups/{group_id}/documents
pub async fn list_by_group(
    State(state): State<AppState>,
    Path(group_id): Path<DbId>,
) -> AppResult<Json<Vec<Document>>> {
    let documents = DocumentRepo::list(&state.pool, Some(group_id)).await?;
    Ok(Json(documents))
}

/// GET /api/documents/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Document>> {
    let document = DocumentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Document",
            id,
        }))?;
    Ok(Json(document))
}

/// DELETE /api/documents/{id}
///
/// Removes the row, then the stored file. A missing file is logged, not an error.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let document = DocumentRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Document",
            id,
        }))?;

    if let Err(err) = tokio::fs::remove_file(&document.file_path).await {
        tracing::warn!(
            document_id = id,
            path = %document.file_path,
            error = %err,
            "Failed to remove stored document file"
        );
    }
    Ok(StatusCode::NO_CONTENT)
}
