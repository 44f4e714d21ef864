//! Listing websites out of a bundled database.

use crate::Database;
use crate::error::{ErrorKind, Result};
use crate::models::WebsiteRecord;
use std::path::Path;
use tracing::instrument;
use weblist_bundle::{Materializer, ResourceSet};

/// Logical path of the database inside the resource set.
pub const DEFAULT_RESOURCE: &str = "foo.db";

/// Files SQLite may create next to a database file.
const SQLITE_COMPANIONS: [&str; 3] = ["-wal", "-shm", "-journal"];

/// Lists [`WebsiteRecord`]s from a database held in a [`ResourceSet`].
///
/// Every call to [`list`](Self::list) materializes the database into a fresh
/// temporary file, opens a connection on it, runs the query, then closes the
/// connection and removes the file. Nothing is cached between calls, so
/// concurrent calls never share a file or a connection.
#[derive(Clone, Debug)]
pub struct RecordStore<R> {
    materializer: Materializer<R>,
    resource: String,
}
impl<R: ResourceSet> RecordStore<R> {
    pub fn new(materializer: Materializer<R>) -> Self {
        Self {
            materializer: materializer.with_companions(SQLITE_COMPANIONS),
            resource: DEFAULT_RESOURCE.to_string(),
        }
    }

    /// Read the database from `path` in the resource set instead of
    /// [`DEFAULT_RESOURCE`].
    pub fn with_resource(mut self, path: impl Into<String>) -> Self {
        self.resource = path.into();
        self
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn materializer(&self) -> &Materializer<R> {
        &self.materializer
    }

    /// List every website in the bundled database.
    ///
    /// An empty table is an empty list, not an error. Materialization
    /// failures are reported as [`ErrorKind::Resource`] carrying the
    /// original bundle error kind.
    #[instrument(skip(self), fields(resource = %self.resource))]
    pub async fn list(&self) -> Result<Vec<WebsiteRecord>> {
        let materialized = self.materializer.extract(&self.resource).map_err(ErrorKind::resource)?;
        let records = list_file(materialized.path()).await;
        // Connection is already closed by `list_file`, whatever the outcome.
        materialized.release();
        records
    }
}

/// List every website in the database file at `path`.
///
/// Opens a read-only connection, runs the query and closes the connection
/// on every exit path.
pub async fn list_file(path: &Path) -> Result<Vec<WebsiteRecord>> {
    let mut db = Database::open(path).await?;
    let records = db.websites().await;
    db.close().await;
    let records = records?;
    tracing::debug!(count = records.len(), "Listed websites");
    Ok(records)
}
