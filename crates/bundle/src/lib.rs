//! Embedded resources, made available as files.
//!
//! Resources baked into the binary are only reachable as bytes. Consumers
//! that insist on a filesystem path get one through [`Materializer::extract`],
//! which writes the bytes to a uniquely named temporary file guarded by
//! [`Materialized`].

pub mod error;
mod materialize;
mod resources;

pub use crate::materialize::{Materialized, Materializer};
pub use crate::resources::{Embedded, ResourceSet, StaticResources};
