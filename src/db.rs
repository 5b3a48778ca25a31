use crate::models::file::FileRecord;
use chrono::{DateTime, Utc};
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions, sqlite::SqliteConnectOptions};
use std::str::FromStr;
use std::time::Duration;

#[derive(Clone)]
pub struct Db(pub SqlitePool);
impl Db {
    pub async fn connect_and_migrate(path: &str) -> anyhow::Result<Self> {
        let opts = SqliteConnectOptions::from_str(&format!("sqlite://{}", path))?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(8)
            .acquire_timeout(Duration::from_secs(10))
            .connect_with(opts).await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Db(pool))
    }

    /// Inserts a new row and returns it as stored, including the assigned id.
    pub async fn insert_file(
        &self,
        original_filename: &str,
        system_filename: &str,
        file_size_bytes: i64,
        uploaded_at: DateTime<Utc>,
    ) -> Result<FileRecord, sqlx::Error> {
        // The pooled connection goes back to the pool when dropped, on both paths.
        let mut conn = self.0.acquire().await?;
        sqlx::query_as::<_, FileRecord>(
            "INSERT INTO file_metadata(original_filename, system_filename, file_size_bytes, uploaded_at)
             VALUES (?, ?, ?, ?)
             RETURNING id, original_filename, system_filename, file_size_bytes, uploaded_at",
        )
        .bind(original_filename)
        .bind(system_filename)
        .bind(file_size_bytes)
        .bind(uploaded_at)
        .fetch_one(&mut *conn)
        .await
    }

    /// All rows, newest upload first. Equal timestamps fall back to id order.
    pub async fn list_files(&self) -> Result<Vec<FileRecord>, sqlx::Error> {
        let mut conn = self.0.acquire().await?;
        sqlx::query_as::<_, FileRecord>(
            "SELECT id, original_filename, system_filename, file_size_bytes, uploaded_at
             FROM file_metadata
             ORDER BY uploaded_at DESC, id DESC",
        )
        .fetch_all(&mut *conn)
        .await
    }
}
