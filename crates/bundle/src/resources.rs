//! Read-only resource sets.
//!
//! A resource set maps logical paths (e.g. `"foo.db"`) to immutable byte
//! blobs. The production set is embedded into the binary at compile time
//! using [`rust-embed`](rust_embed); tests inject [`StaticResources`] instead.

use rust_embed::Embed;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

/// Immutable, path-addressable store of byte blobs.
pub trait ResourceSet {
    /// All logical paths available in this set.
    fn list(&self) -> Vec<Cow<'static, str>>;

    fn exists(&self, path: &str) -> bool {
        self.list().iter().any(|p| p.as_ref() == path)
    }

    /// Full content of the resource at `path`, or `None` if it cannot be
    /// loaded.
    fn read(&self, path: &str) -> Option<Cow<'static, [u8]>>;
}

/// Adapts a `#[derive(Embed)]` folder into a [`ResourceSet`].
///
/// ```ignore
/// #[derive(rust_embed::Embed)]
/// #[folder = "database/"]
/// struct Database;
///
/// let resources = Embedded::<Database>::new();
/// ```
pub struct Embedded<E> {
    _embed: PhantomData<fn() -> E>,
}
impl<E: Embed> Embedded<E> {
    pub fn new() -> Self {
        Self { _embed: PhantomData }
    }
}
impl<E: Embed> Default for Embedded<E> {
    fn default() -> Self {
        Self::new()
    }
}
impl<E> fmt::Debug for Embedded<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Embedded").field("embed", &std::any::type_name::<E>()).finish()
    }
}
impl<E> Clone for Embedded<E> {
    fn clone(&self) -> Self {
        Self { _embed: PhantomData }
    }
}
impl<E: Embed> ResourceSet for Embedded<E> {
    fn list(&self) -> Vec<Cow<'static, str>> {
        E::iter().collect()
    }

    fn exists(&self, path: &str) -> bool {
        E::iter().any(|p| p.as_ref() == path)
    }

    fn read(&self, path: &str) -> Option<Cow<'static, [u8]>> {
        E::get(path).map(|f| f.data)
    }
}

/// In-memory resource set, populated once at construction.
#[derive(Clone, Debug, Default)]
pub struct StaticResources {
    files: HashMap<String, Cow<'static, [u8]>>,
}
impl StaticResources {
    /// # Example
    ///
    /// ```
    /// use weblist_bundle::{ResourceSet, StaticResources};
    ///
    /// let resources = StaticResources::with_files([("foo.db", b"data".to_vec())]);
    /// assert!(resources.exists("foo.db"));
    /// ```
    pub fn with_files(files: impl IntoIterator<Item = (impl Into<String>, impl Into<Cow<'static, [u8]>>)>) -> Self {
        let files = files.into_iter().map(|(path, data)| (path.into(), data.into())).collect();
        Self { files }
    }
}
impl ResourceSet for StaticResources {
    fn list(&self) -> Vec<Cow<'static, str>> {
        let mut paths: Vec<Cow<'static, str>> = self.files.keys().cloned().map(Cow::Owned).collect();
        paths.sort();
        paths
    }

    fn exists(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    fn read(&self, path: &str) -> Option<Cow<'static, [u8]>> {
        self.files.get(path).cloned()
    }
}
