mod config;
mod errors;
mod db;
mod models;
mod routes;
mod storage;

use actix_cors::Cors;
use actix_web::{App, HttpServer};
use crate::config::Config;
use crate::db::Db;
use crate::storage::UploadDir;
use actix_web::middleware::Logger;
use actix_web::web::Data;
use anyhow::Context;
use env_logger::Env;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Init logger to show info by default, but can be overridden by RUST_LOG
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cfg = Config::load()?;

    let db = Db::connect_and_migrate(&cfg.database_path).await
        .with_context(|| format!("database init failed for {}", cfg.database_path))?;
    let uploads = UploadDir::open(&cfg.uploads_dir)
        .with_context(|| format!("cannot create upload directory {}", cfg.uploads_dir))?;

    log::info!("Starting server at {}", cfg.listen);

    let listen_addr = cfg.listen.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(Data::new(cfg.clone()))
            .app_data(Data::new(db.clone()))
            .app_data(Data::new(uploads.clone()))
            .configure(routes::configure)
    })
    .bind(&listen_addr)
    .with_context(|| format!("cannot bind {listen_addr}"))?
    .run()
    .await?;
    Ok(())
}
