//! Database connection management.

use exn::ResultExt;
use futures::TryStreamExt;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection, Executor, FromRow};
use std::path::Path;
use tracing::instrument;

use crate::error::{ErrorKind, Result};
use crate::models::{WebsiteRecord, WebsiteRow};

const LIST_WEBSITES: &str = include_str!("../queries/list_websites.sql");

/// A single, read-only SQLite connection.
///
/// Not pooled. Every listing opens its own connection against its own
/// materialized file, and closes it before that file is removed.
#[derive(Debug)]
pub struct Database {
    conn: SqliteConnection,
}

impl Database {
    /// Open an existing database file read-only.
    ///
    /// The file is never created; a missing or unopenable file fails with
    /// [`ErrorKind::ConnectionOpenFailed`].
    #[instrument(skip_all, fields(path = %path.display()))]
    pub async fn open(path: &Path) -> Result<Self> {
        let conn = Self::base_options()
            .filename(path)
            .connect()
            .await
            .or_raise(|| ErrorKind::ConnectionOpenFailed)?;
        Ok(Self { conn })
    }

    fn base_options() -> SqliteConnectOptions {
        SqliteConnectOptions::new()
            // The bundled database is never modified at run time.
            .read_only(true)
            .create_if_missing(false)
            // Nobody else writes the file either: no locking, and no `-wal`
            // or `-shm` files next to it, even for WAL-mode databases.
            .immutable(true)
    }

    /// Fetch every row of the `weblist` table, in the order SQLite returns
    /// them.
    ///
    /// The first row that fails to decode, including a `NULL` in either
    /// column, aborts the whole listing with [`ErrorKind::RowDecodeFailed`].
    pub async fn websites(&mut self) -> Result<Vec<WebsiteRecord>> {
        // Missing table or not a database: fails here, not mid-scan.
        (&mut self.conn)
            .prepare(LIST_WEBSITES)
            .await
            .or_raise(|| ErrorKind::QueryExecutionFailed)?;
        let mut rows = sqlx::query(LIST_WEBSITES).fetch(&mut self.conn);
        let mut records = Vec::new();
        while let Some(row) = rows.try_next().await.or_raise(|| ErrorKind::RowIterationFailed)? {
            let row = WebsiteRow::from_row(&row).or_raise(|| ErrorKind::RowDecodeFailed)?;
            records.push(WebsiteRecord::try_from(row)?);
        }
        Ok(records)
    }

    /// Close the connection.
    ///
    /// Failing to close cleanly is logged, not returned.
    pub async fn close(self) {
        if let Err(err) = self.conn.close().await {
            tracing::warn!(error = %err, "Failed to close database connection");
        }
    }
}
