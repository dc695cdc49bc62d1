//! Uploaded document model.

use serde::Serialize;
use sqlx::FromRow;
use tripdesk_core::types::{DbId, Timestamp};

/// A row from the `documents` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Document {
    pub id: DbId,
    pub group_id: DbId,
    pub document_type: String,
    pub file_name: String,
    /// Server-side storage path. Not exposed to clients.
    #[serde(skip_serializing)]
    pub file_path: String,
    pub file_size_bytes: i64,
    pub content_type: Option<String>,
    pub description: Option<String>,
    pub uploaded_by: Option<String>,
    pub created_at: Timestamp,
}

/// Insert DTO, built by the upload handler after the file is stored.
#[derive(Debug, Clone)]
pub struct CreateDocument {
    pub group_id: DbId,
    pub document_type: String,
    pub file_name: String,
    pub file_path: String,
    pub file_size_bytes: i64,
    pub content_type: Option<String>,
    pub description: Option<String>,
    pub uploaded_by: Option<String>,
}
