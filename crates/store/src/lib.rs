//! SQLite record store for the bundled website database.
//!
//! The database ships inside the binary as a read-only resource. SQLite only
//! opens files, so each listing goes through the same sequence:
//!
//! 1. Materialize the resource into a temporary file ([`weblist_bundle`]).
//! 2. Open a read-only connection on that file.
//! 3. Run `SELECT website, name FROM weblist` and decode every row.
//! 4. Close the connection, then remove the temporary file.
//!
//! Step 4 happens on every exit path, successful or not.

mod db;
pub mod error;
mod models;
mod store;
#[cfg(test)]
mod test_support;

pub use crate::db::Database;
pub use crate::models::WebsiteRecord;
pub use crate::store::{DEFAULT_RESOURCE, RecordStore, list_file};
