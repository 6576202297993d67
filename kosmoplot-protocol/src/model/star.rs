use std::{
    fmt,
    str::FromStr,
};

use serde::{
    Deserialize,
    Serialize,
};
use uuid::Uuid;

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::From,
    derive_more::Into,
)]
#[serde(transparent)]
pub struct StarId(pub Uuid);

impl fmt::Display for StarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid star id: {input:?}")]
pub struct ParseStarIdError {
    pub input: String,
    #[source]
    pub source: uuid::Error,
}

impl FromStr for StarId {
    type Err = ParseStarIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::try_parse(s).map(Self).map_err(|source| {
            ParseStarIdError {
                input: s.to_owned(),
                source,
            }
        })
    }
}

/// Catalog attributes of a star, as supplied by a client on creation.
///
/// Inbound JSON goes through [`NewStar::from_json`] rather than serde, so that
/// every failing field is reported.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewStar {
    pub name: String,
    pub constellation: String,
    pub right_ascension: String,
    pub declination: String,
    pub apparent_magnitude: f64,
    pub absolute_magnitude: f64,
    pub distance_light_year: i64,
    #[serde(default)]
    pub spectral_class: Option<String>,
}

/// A stored star: the catalog attributes plus the identifier assigned by the
/// store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, derive_more::Deref)]
pub struct Star {
    pub id: StarId,
    #[deref]
    #[serde(flatten)]
    pub data: NewStar,
}

impl Star {
    pub fn new(id: StarId, data: NewStar) -> Self {
        Self { id, data }
    }
}
