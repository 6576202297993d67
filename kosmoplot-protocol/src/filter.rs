use url::form_urlencoded;

use crate::model::star::NewStar;

/// Filter for listing stars, built from repeated `name` and `constellation`
/// query parameters.
///
/// Constellations take precedence: when any are given, names are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StarFilter {
    pub names: Vec<String>,
    pub constellations: Vec<String>,
}

/// The single predicate a [`StarFilter`] resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Predicate<'a> {
    All,
    NameIn(&'a [String]),
    ConstellationIn(&'a [String]),
}

impl StarFilter {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    pub fn with_constellation(mut self, constellation: impl Into<String>) -> Self {
        self.constellations.push(constellation.into());
        self
    }

    /// Parses a raw query string. Unknown parameters are ignored.
    pub fn from_query(query: &str) -> Self {
        let mut filter = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match &*key {
                "name" => filter.names.push(value.into_owned()),
                "constellation" => filter.constellations.push(value.into_owned()),
                _ => {}
            }
        }
        filter
    }

    pub fn to_query(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for name in &self.names {
            serializer.append_pair("name", name);
        }
        for constellation in &self.constellations {
            serializer.append_pair("constellation", constellation);
        }
        serializer.finish()
    }

    pub fn predicate(&self) -> Predicate<'_> {
        if !self.constellations.is_empty() {
            Predicate::ConstellationIn(&self.constellations)
        }
        else if !self.names.is_empty() {
            Predicate::NameIn(&self.names)
        }
        else {
            Predicate::All
        }
    }

    pub fn matches(&self, star: &NewStar) -> bool {
        match self.predicate() {
            Predicate::All => true,
            Predicate::NameIn(names) => names.contains(&star.name),
            Predicate::ConstellationIn(constellations) => {
                constellations.contains(&star.constellation)
            }
        }
    }
}
