//! Backend of the weblist desktop shell.
//!
//! [`App`] is the surface a UI layer binds to: a greeting formatter and a
//! listing of the websites held in the database bundled into this binary.

pub mod error;

use rust_embed::Embed;
use std::borrow::Cow;
use tracing::instrument;
use weblist_bundle::{Embedded, Materializer, ResourceSet};
use weblist_config::Config;
use weblist_store::RecordStore;
pub use weblist_store::WebsiteRecord;

/// The database folder, embedded at compile time.
#[derive(Embed)]
#[folder = "database/"]
pub struct BundledDatabase;

/// Resource set backed by [`BundledDatabase`].
pub type Bundled = Embedded<BundledDatabase>;

/// Operations exposed to the UI layer.
#[derive(Clone, Debug)]
pub struct App<R = Bundled> {
    store: RecordStore<R>,
}
impl App<Bundled> {
    /// Application reading from the database bundled into this binary.
    pub fn new(config: &Config) -> Self {
        Self::with_resources(Bundled::new(), config)
    }
}
impl<R: ResourceSet> App<R> {
    /// Application reading from an arbitrary resource set.
    pub fn with_resources(resources: R, config: &Config) -> Self {
        let mut materializer = Materializer::new(resources);
        if let Some(dir) = &config.temp_dir {
            materializer = materializer.with_temp_dir(dir);
        }
        let store = RecordStore::new(materializer).with_resource(&config.database);
        Self { store }
    }

    /// Called once the UI layer is up.
    pub fn startup(&self) {
        tracing::info!(database = self.store.resource(), "Application started");
    }

    pub fn greet(&self, name: &str) -> String {
        format!("Hello {name}, It's show time!")
    }

    /// Every website in the bundled database, in storage order.
    #[instrument(skip(self))]
    pub async fn web_list(&self) -> weblist_store::error::Result<Vec<WebsiteRecord>> {
        self.store.list().await
    }

    /// Logical paths available in the resource set.
    pub fn resources(&self) -> Vec<Cow<'static, str>> {
        self.store.materializer().resources().list()
    }
}
