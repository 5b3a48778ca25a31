pub mod files;
pub mod pages;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/upload-document", web::post().to(files::upload_document))
        .route("/files", web::get().to(files::list_files))
        .route("/", web::get().to(pages::upload_page))
        .route("/history", web::get().to(pages::history_page));
}
