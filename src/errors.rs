use actix_web::{HttpResponse, http::StatusCode, ResponseError};
use thiserror::Error;
use serde::Serialize;

/// Failure kinds surfaced by the HTTP handlers. Every kind is a server-side
/// failure; the client only ever sees a 500 with the cause in `detail`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Upload failed: {0}")]
    UploadReadFailed(String),
    #[error("Upload failed: {0}")]
    StorageWriteFailed(String),
    #[error("Upload failed: {0}")]
    RecordPersistFailed(String),
    #[error("Failed to retrieve files: {0}")]
    StorageReadFailed(String),
}

#[derive(Serialize)]
struct ApiErrBody {
    detail: String
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
    fn error_response(&self) -> HttpResponse {
        log::error!("{self:?}");
        HttpResponse::build(self.status_code()).json(ApiErrBody { detail: self.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn every_kind_is_a_server_error_with_detail() {
        let cases = [
            (ApiError::UploadReadFailed("no file part".into()), "Upload failed: no file part"),
            (ApiError::StorageWriteFailed("disk full".into()), "Upload failed: disk full"),
            (ApiError::RecordPersistFailed("locked".into()), "Upload failed: locked"),
            (ApiError::StorageReadFailed("no such table".into()), "Failed to retrieve files: no such table"),
        ];
        for (err, detail) in cases {
            let resp = err.error_response();
            assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
            let body = to_bytes(resp.into_body()).await.unwrap();
            let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(json["detail"], detail);
        }
    }
}
