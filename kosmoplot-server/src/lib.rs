use std::sync::Arc;

use axum::Router;

use crate::{
    context::Context,
    store::{
        MemoryStarStore,
        PgStarStore,
        StarStore,
    },
};

mod api;
mod context;
mod error;
pub mod store;
mod util;

pub use crate::error::Error;

/// Version reported by `/status`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Clone, Default)]
pub struct Builder {
    store: Option<Arc<dyn StarStore>>,
}

impl Builder {
    pub fn with_store(mut self, store: Arc<dyn StarStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub async fn with_connect_db(self, database_url: &str) -> Result<Self, Error> {
        let store = PgStarStore::connect(database_url).await?;
        Ok(self.with_store(Arc::new(store)))
    }

    pub fn with_in_memory(self) -> Self {
        self.with_store(Arc::new(MemoryStarStore::new()))
    }

    /// The configured store, so the caller can close it after serving.
    pub fn store(&self) -> Option<Arc<dyn StarStore>> {
        self.store.clone()
    }

    pub fn build(self) -> Result<Router<()>, Error> {
        let store = self.store.ok_or(Error::NoStore)?;
        let context = Context::new(store);
        Ok(util::trace::with_request_tracing(
            crate::api::router().with_state(context),
        ))
    }
}
