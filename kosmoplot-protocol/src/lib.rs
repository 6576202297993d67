pub mod filter;
pub mod model;
pub mod validate;

use chrono::{
    DateTime,
    Utc,
};
use semver::Version;
use serde::{
    Deserialize,
    Serialize,
};

#[derive(Debug, Serialize, Deserialize)]
pub struct ServerStatus {
    pub server_version: Version,
    pub up_since: DateTime<Utc>,
}

/// Body of every non-successful response.
///
/// `detail` is a plain message for 404 and 500 responses, and the list of
/// field errors for 422 responses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse<T> {
    pub detail: T,
}

impl<T> ErrorResponse<T> {
    pub fn new(detail: T) -> Self {
        Self { detail }
    }
}
