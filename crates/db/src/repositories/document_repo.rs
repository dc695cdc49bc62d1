//! Repository for the `documents` table.

use sqlx::PgPool;
use tripdesk_core::types::DbId;

use crate::models::document::{CreateDocument, Document};

const COLUMNS: &str = "id, group_id, document_type, file_name, file_path, file_size_bytes, \
    content_type, description, uploaded_by, created_at";

pub struct DocumentRepo;

impl DocumentRepo {
    pub async fn create(pool: &PgPool, input: &CreateDocument) -> Result<Document, sqlx::Error> {
        let query = format!(
            "INSERT INTO documents (group_id, document_type, file_name, file_path,
                                    file_size_bytes, content_type, description, uploaded_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(input.group_id)
            .bind(&input.document_type)
            .bind(&input.file_name)
            .bind(&input.file_path)
            .bind(input.file_size_bytes)
            .bind(&input.content_type)
            .bind(&input.description)
            .bind(&input.uploaded_by)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Document>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM documents WHERE id = $1");
        sqlx::query_as::<_, Document>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List documents, newest first, filtered to one group when given.
    pub async fn list(pool: &PgPool, group_id: Option<DbId>) -> Result<Vec<Document>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM documents
             WHERE ($1::BIGINT IS NULL OR group_id = $1)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(group_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a document row, returning it so the caller can remove the file.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Document>, sqlx::Error> {
        let query = format!("DELETE FROM documents WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Document>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
