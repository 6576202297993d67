use async_trait::async_trait;
use kosmoplot_protocol::{
    filter::StarFilter,
    model::star::{
        NewStar,
        Star,
        StarId,
    },
};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::StarStore;
use crate::error::Error;

/// Keeps stars in insertion order in process memory.
#[derive(Debug, Default)]
pub struct MemoryStarStore {
    stars: RwLock<Vec<Star>>,
}

impl MemoryStarStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StarStore for MemoryStarStore {
    async fn insert(&self, star: NewStar) -> Result<Star, Error> {
        let star = Star::new(StarId(Uuid::new_v4()), star);
        self.stars.write().await.push(star.clone());
        Ok(star)
    }

    async fn list(&self, filter: &StarFilter) -> Result<Vec<Star>, Error> {
        let stars = self.stars.read().await;
        Ok(stars
            .iter()
            .filter(|star| filter.matches(star))
            .cloned()
            .collect())
    }

    async fn get(&self, id: StarId) -> Result<Option<Star>, Error> {
        let stars = self.stars.read().await;
        Ok(stars.iter().find(|star| star.id == id).cloned())
    }

    async fn delete(&self, id: StarId) -> Result<Option<Star>, Error> {
        let mut stars = self.stars.write().await;
        let removed = stars
            .iter()
            .position(|star| star.id == id)
            .map(|index| stars.remove(index));
        Ok(removed)
    }
}
