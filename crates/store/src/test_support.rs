//! Fixture databases for tests.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode};
use sqlx::{ConnectOptions, Connection};
use std::path::{Path, PathBuf};

/// Build `fixture.db` inside `dir` by running `sql` against a fresh database.
pub(crate) async fn fixture_file(dir: &Path, sql: &str) -> PathBuf {
    fixture_file_with(dir, sql, SqliteJournalMode::Delete).await
}

/// Like [`fixture_file`], with the database header set to `journal_mode`.
///
/// Closing the connection checkpoints a WAL database, so all content ends
/// up in the main file either way.
pub(crate) async fn fixture_file_with(dir: &Path, sql: &str, journal_mode: SqliteJournalMode) -> PathBuf {
    let path = dir.join("fixture.db");
    let mut conn = SqliteConnectOptions::new()
        .filename(&path)
        .create_if_missing(true)
        .journal_mode(journal_mode)
        .connect()
        .await
        .unwrap();
    sqlx::query(sql).execute(&mut conn).await.unwrap();
    conn.close().await.unwrap();
    path
}

/// Raw bytes of a fixture database, ready to be injected as a resource.
pub(crate) async fn fixture_bytes(sql: &str) -> Vec<u8> {
    fixture_bytes_with(sql, SqliteJournalMode::Delete).await
}

pub(crate) async fn fixture_bytes_with(sql: &str, journal_mode: SqliteJournalMode) -> Vec<u8> {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = fixture_file_with(temp_dir.path(), sql, journal_mode).await;
    std::fs::read(path).unwrap()
}
