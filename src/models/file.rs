use serde::{Serialize, Deserialize};
use chrono::{DateTime, Utc};

/// One row of `file_metadata`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct FileRecord {
    pub id: i64,
    pub original_filename: String,
    pub system_filename: String,
    pub file_size_bytes: i64,
    pub uploaded_at: DateTime<Utc>,
}

/// Confirmation returned by the ingestion endpoint.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UploadResponse {
    pub message: String,
    pub original_filename: String,
    pub system_filename: String,
    pub file_size_bytes: i64,
    pub uploaded_at: DateTime<Utc>,
}

impl From<FileRecord> for UploadResponse {
    fn from(rec: FileRecord) -> Self {
        Self {
            message: "File uploaded successfully".to_string(),
            original_filename: rec.original_filename,
            system_filename: rec.system_filename,
            file_size_bytes: rec.file_size_bytes,
            uploaded_at: rec.uploaded_at,
        }
    }
}
