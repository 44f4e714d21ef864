//! Materialization of embedded resources onto the host filesystem.
//!
//! Some consumers (a SQLite driver, for one) only accept a file path. The
//! [`Materializer`] copies a resource into a uniquely named temporary file
//! and hands back a [`Materialized`] guard that removes the file again,
//! along with any companion files the consumer left next to it.

use crate::error::{ErrorKind, Result};
use crate::resources::ResourceSet;
use exn::{OptionExt, ResultExt};
use std::ffi::OsString;
use std::io::{ErrorKind as IoErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::{Builder, TempPath};
use tracing::instrument;

/// Copies resources out of a [`ResourceSet`] into temporary files.
#[derive(Clone, Debug)]
pub struct Materializer<R> {
    resources: R,
    temp_dir: Option<PathBuf>,
    companions: Vec<String>,
}
impl<R: ResourceSet> Materializer<R> {
    /// Materialize into the system temporary directory.
    pub fn new(resources: R) -> Self {
        Self { resources, temp_dir: None, companions: Vec::new() }
    }

    /// Materialize into `dir` instead of the system temporary directory.
    /// The directory must already exist.
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = Some(dir.into());
        self
    }

    /// Suffixes of files a consumer may create next to the materialized
    /// file (e.g. `-wal` for SQLite). They are removed together with it.
    pub fn with_companions(mut self, suffixes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.companions.extend(suffixes.into_iter().map(Into::into));
        self
    }

    pub fn resources(&self) -> &R {
        &self.resources
    }

    /// Write the resource at `path` to a new temporary file.
    ///
    /// The returned file is fully written and closed for writing. It is
    /// removed by [`Materialized::release`], or when the guard is dropped.
    ///
    /// Returns [`ErrorKind::ResourceNotFound`] if `path` is not part of the
    /// resource set; no file is created in that case.
    #[instrument(skip(self))]
    pub fn extract(&self, path: &str) -> Result<Materialized> {
        if !self.resources.exists(path) {
            exn::bail!(ErrorKind::ResourceNotFound(path.to_string()));
        }
        let (prefix, suffix) = Self::name_parts(path);
        let mut builder = Builder::new();
        builder.prefix(&prefix).suffix(&suffix);
        let created = match &self.temp_dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        };
        // From here on, an early return drops `file`, which deletes it.
        let mut file = created.or_raise(|| ErrorKind::TempFileCreateFailed)?;
        let data = self
            .resources
            .read(path)
            .ok_or_raise(|| ErrorKind::ResourceReadFailed(path.to_string()))?;
        write_all_to(&mut file, &data)?;
        file.as_file().sync_all().or_raise(|| ErrorKind::TempFileCloseFailed)?;
        // Drops the write handle, keeping only the path.
        let temp = file.into_temp_path();
        tracing::debug!(resource = path, file = %temp.display(), bytes = data.len(), "Resource materialized");
        Ok(Materialized { path: temp, companions: self.companions.clone() })
    }

    /// Split `foo.db` into (`foo-`, `.db`) so temporary files stay
    /// recognisable: `foo-a1B2c3.db`.
    fn name_parts(path: &str) -> (String, String) {
        let path = Path::new(path);
        let stem = path.file_stem().and_then(|s| s.to_str()).filter(|s| !s.is_empty()).unwrap_or("resource");
        let suffix = path.extension().and_then(|s| s.to_str()).map(|ext| format!(".{ext}")).unwrap_or_default();
        (format!("{stem}-"), suffix)
    }
}

fn write_all_to(w: &mut impl Write, data: &[u8]) -> Result<()> {
    w.write_all(data).or_raise(|| ErrorKind::TempFileWriteFailed)?;
    w.flush().or_raise(|| ErrorKind::TempFileCloseFailed)
}

/// Remove `path`, treating a file that is already gone as removed.
fn remove(path: &Path) {
    match std::fs::remove_file(path) {
        Ok(()) => tracing::trace!(file = %path.display(), "Materialized file removed"),
        Err(err) if err.kind() == IoErrorKind::NotFound => {},
        Err(err) => {
            tracing::warn!(file = %path.display(), error = %err, "Failed to remove materialized file");
        },
    }
}

/// A resource copied to disk.
///
/// Owns the file exclusively: nothing else should hold on to [`path`](Self::path)
/// once this guard is released or dropped.
#[derive(Debug)]
pub struct Materialized {
    path: TempPath,
    companions: Vec<String>,
}
impl Materialized {
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn companion_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.companions.iter().map(|suffix| {
            let mut name = OsString::from(self.path.as_os_str());
            name.push(suffix);
            PathBuf::from(name)
        })
    }

    /// Remove the file and its companions from disk.
    ///
    /// Files that are already gone count as removed. Any other failure is
    /// logged and otherwise ignored; there is nothing a caller could do about
    /// it.
    pub fn release(self) {
        remove(&self.path);
        for companion in self.companion_paths() {
            remove(&companion);
        }
    }
}
impl Drop for Materialized {
    fn drop(&mut self) {
        // The main file goes with `TempPath`; companions are ours to remove.
        for companion in self.companion_paths() {
            remove(&companion);
        }
    }
}
impl AsRef<Path> for Materialized {
    fn as_ref(&self) -> &Path {
        self.path()
    }
}
