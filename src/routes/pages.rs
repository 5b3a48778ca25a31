use crate::config::Config;
use actix_files::NamedFile;
use actix_web::web;

pub async fn upload_page(cfg: web::Data<Config>) -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open_async(cfg.page_path("upload.html")).await?)
}

pub async fn history_page(cfg: web::Data<Config>) -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open_async(cfg.page_path("history.html")).await?)
}


#[cfg(test)]
mod shipped_tests {
    use std::path::Path;

    #[test]
    fn shipped_pages_exist() {
        let pages = Path::new(env!("CARGO_MANIFEST_DIR")).join("pages");
        for page in ["upload.html", "history.html"] {
            let html = std::fs::read_to_string(pages.join(page)).unwrap();
            assert!(html.contains("<html"), "{page} is not an html document");
        }
    }
}
