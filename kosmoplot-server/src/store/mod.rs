//! Storage for star documents.
//!
//! Every operation is a single call against the backing store. Deletion in
//! particular locates and removes a record in one atomic step, so a delete
//! never returns a partially removed star.

mod memory;
mod postgres;

use async_trait::async_trait;
use kosmoplot_protocol::{
    filter::StarFilter,
    model::star::{
        NewStar,
        Star,
        StarId,
    },
};

pub use self::{
    memory::MemoryStarStore,
    postgres::PgStarStore,
};
use crate::error::Error;

#[async_trait]
pub trait StarStore: Send + Sync + 'static {
    /// Persists a star and returns it with its freshly assigned id.
    async fn insert(&self, star: NewStar) -> Result<Star, Error>;

    /// Stars matching `filter`, in the store's natural order.
    async fn list(&self, filter: &StarFilter) -> Result<Vec<Star>, Error>;

    async fn get(&self, id: StarId) -> Result<Option<Star>, Error>;

    /// Removes a star and returns what was removed.
    async fn delete(&self, id: StarId) -> Result<Option<Star>, Error>;

    /// Releases the underlying connections. Called once on shutdown.
    async fn close(&self) {}
}
