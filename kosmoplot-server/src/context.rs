use std::sync::Arc;

use chrono::{
    DateTime,
    Utc,
};

use crate::store::StarStore;

#[derive(Clone)]
pub struct Context {
    pub up_since: DateTime<Utc>,
    pub store: Arc<dyn StarStore>,
}

impl Context {
    pub fn new(store: Arc<dyn StarStore>) -> Self {
        Self {
            up_since: Utc::now(),
            store,
        }
    }
}
