use crate::{
    db::Db,
    errors::ApiError,
    models::file::UploadResponse,
    storage::{UploadDir, generate_system_filename},
};
use actix_multipart::Multipart;
use actix_web::{HttpResponse, http::header::{Charset, ContentDisposition}, web};
use futures_util::TryStreamExt as _;

/// Multipart part carrying the document.
const FILE_FIELD: &str = "file";

pub async fn upload_document(
    uploads: web::Data<UploadDir>,
    db: web::Data<Db>,
    mut payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| ApiError::UploadReadFailed(e.to_string()))?
    {
        if field.name() != Some(FILE_FIELD) {
            while field
                .try_next()
                .await
                .map_err(|e| ApiError::UploadReadFailed(e.to_string()))?
                .is_some()
            {}
            continue;
        }
        let resp = save_upload(&uploads, &db, field).await?;
        return Ok(HttpResponse::Ok().json(resp));
    }
    Err(ApiError::UploadReadFailed("no file part".into()))
}

/// Name the client gave the part, from `filename*` (RFC 5987) if present,
/// otherwise from plain `filename`.
fn client_filename(cd: &ContentDisposition) -> Option<String> {
    if let Some(ext) = cd.get_filename_ext() {
        return Some(match ext.charset {
            Charset::Iso_8859_1 => ext.value.iter().map(|&b| char::from(b)).collect(),
            _ => String::from_utf8_lossy(&ext.value).into_owned(),
        });
    }
    cd.get_filename().map(|s| s.to_string())
}

async fn save_upload(
    uploads: &UploadDir,
    db: &Db,
    mut field: actix_multipart::Field,
) -> Result<UploadResponse, ApiError> {
    let original = field
        .content_disposition()
        .and_then(client_filename)
        .ok_or_else(|| ApiError::UploadReadFailed("missing filename".into()))?;
    let system_filename = generate_system_filename(&original);

    let mut data: Vec<u8> = Vec::new();
    while let Some(chunk) = field
        .try_next()
        .await
        .map_err(|e| ApiError::UploadReadFailed(e.to_string()))?
    {
        data.extend_from_slice(&chunk);
    }
    let size = data.len() as i64;

    let path = uploads
        .write(&system_filename, &data)
        .map_err(|e| ApiError::StorageWriteFailed(e.to_string()))?;

    let rec = db
        .insert_file(&original, &system_filename, size, chrono::Utc::now())
        .await
        .map_err(|e| {
            // Bytes stay on disk without a row; nothing removes them.
            log::warn!("orphaned upload left at {}", path.display());
            ApiError::RecordPersistFailed(e.to_string())
        })?;

    log::info!(
        "stored upload {:?} as {} ({} bytes, id {})",
        rec.original_filename, rec.system_filename, rec.file_size_bytes, rec.id
    );
    Ok(rec.into())
}

pub async fn list_files(db: web::Data<Db>) -> Result<HttpResponse, ApiError> {
    let files = db
        .list_files()
        .await
        .map_err(|e| ApiError::StorageReadFailed(e.to_string()))?;
    Ok(HttpResponse::Ok().json(files))
}
