//! Field presence and type checking for inbound star documents.
//!
//! Values are checked against the shape of [`NewStar`] only. There are no
//! range checks on magnitudes or distances.

use serde::{
    Deserialize,
    Serialize,
};
use serde_json::{
    Map,
    Value,
};

use crate::model::star::NewStar;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    Missing,
    StringType,
    FloatType,
    IntType,
    JsonInvalid,
    ModelType,
}

impl FieldErrorKind {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Missing => "Field required",
            Self::StringType => "Input should be a valid string",
            Self::FloatType => "Input should be a valid number",
            Self::IntType => "Input should be a valid integer",
            Self::JsonInvalid => "Invalid JSON",
            Self::ModelType => "Input should be a valid object",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn new(field: Option<&str>, kind: FieldErrorKind) -> Self {
        let mut loc = vec!["body".to_owned()];
        loc.extend(field.map(ToOwned::to_owned));
        Self {
            loc,
            msg: kind.message().to_owned(),
            kind,
        }
    }

    pub fn with_message(mut self, msg: impl Into<String>) -> Self {
        self.msg = msg.into();
        self
    }

    /// The offending field, if the error is about a single field.
    pub fn field(&self) -> Option<&str> {
        self.loc.get(1).map(String::as_str)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[serde(transparent)]
#[error("star failed validation with {} error(s)", .errors.len())]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// The request body could not be parsed as JSON at all.
    pub fn invalid_json(msg: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError::new(None, FieldErrorKind::JsonInvalid).with_message(msg)],
        }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().filter_map(FieldError::field)
    }
}

impl NewStar {
    /// Checks a JSON document against the star schema.
    ///
    /// Unknown fields (including an `id`) are ignored. All failing fields are
    /// reported, not just the first.
    pub fn from_json(value: &Value) -> Result<Self, ValidationErrors> {
        let Some(object) = value.as_object()
        else {
            return Err(ValidationErrors {
                errors: vec![FieldError::new(None, FieldErrorKind::ModelType)],
            });
        };

        let mut fields = Fields::new(object);
        let name = fields.string("name");
        let constellation = fields.string("constellation");
        let right_ascension = fields.string("right_ascension");
        let declination = fields.string("declination");
        let apparent_magnitude = fields.float("apparent_magnitude");
        let absolute_magnitude = fields.float("absolute_magnitude");
        let distance_light_year = fields.integer("distance_light_year");
        let spectral_class = fields.optional_string("spectral_class");

        match (
            name,
            constellation,
            right_ascension,
            declination,
            apparent_magnitude,
            absolute_magnitude,
            distance_light_year,
            spectral_class,
        ) {
            (
                Some(name),
                Some(constellation),
                Some(right_ascension),
                Some(declination),
                Some(apparent_magnitude),
                Some(absolute_magnitude),
                Some(distance_light_year),
                Some(spectral_class),
            ) if fields.errors.errors.is_empty() => {
                Ok(Self {
                    name,
                    constellation,
                    right_ascension,
                    declination,
                    apparent_magnitude,
                    absolute_magnitude,
                    distance_light_year,
                    spectral_class,
                })
            }
            _ => Err(fields.errors),
        }
    }
}

struct Fields<'a> {
    object: &'a Map<String, Value>,
    errors: ValidationErrors,
}

impl<'a> Fields<'a> {
    fn new(object: &'a Map<String, Value>) -> Self {
        Self {
            object,
            errors: ValidationErrors::default(),
        }
    }

    fn fail(&mut self, field: &str, kind: FieldErrorKind) {
        self.errors.errors.push(FieldError::new(Some(field), kind));
    }

    fn required(&mut self, field: &str) -> Option<&'a Value> {
        match self.object.get(field) {
            Some(value) => Some(value),
            None => {
                self.fail(field, FieldErrorKind::Missing);
                None
            }
        }
    }

    fn string(&mut self, field: &str) -> Option<String> {
        match self.required(field)? {
            Value::String(value) => Some(value.clone()),
            _ => {
                self.fail(field, FieldErrorKind::StringType);
                None
            }
        }
    }

    fn float(&mut self, field: &str) -> Option<f64> {
        match self.required(field)?.as_f64() {
            Some(value) => Some(value),
            None => {
                self.fail(field, FieldErrorKind::FloatType);
                None
            }
        }
    }

    fn integer(&mut self, field: &str) -> Option<i64> {
        let value = self.required(field)?;
        match value.as_i64().or_else(|| value.as_f64().and_then(integral)) {
            Some(value) => Some(value),
            None => {
                self.fail(field, FieldErrorKind::IntType);
                None
            }
        }
    }

    /// `Some(None)` for an absent or `null` field, `None` on a type error.
    fn optional_string(&mut self, field: &str) -> Option<Option<String>> {
        match self.object.get(field) {
            None | Some(Value::Null) => Some(None),
            Some(Value::String(value)) => Some(Some(value.clone())),
            Some(_) => {
                self.fail(field, FieldErrorKind::StringType);
                None
            }
        }
    }
}

/// Accepts floats like `8.0` where an integer is expected.
fn integral(value: f64) -> Option<i64> {
    (value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64)
        .then_some(value as i64)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn rigel() -> Value {
        json!({
            "name": "Rigel",
            "constellation": "Orion",
            "right_ascension": "05h 14m 32.3s",
            "declination": "-08° 12′ 06″",
            "apparent_magnitude": 0.13,
            "absolute_magnitude": -7.84,
            "distance_light_year": 863,
            "spectral_class": "B8Ia",
        })
    }

    #[test]
    fn it_accepts_a_complete_star() {
        let star = NewStar::from_json(&rigel()).unwrap();
        assert_eq!(star.name, "Rigel");
        assert_eq!(star.constellation, "Orion");
        assert_eq!(star.apparent_magnitude, 0.13);
        assert_eq!(star.distance_light_year, 863);
        assert_eq!(star.spectral_class.as_deref(), Some("B8Ia"));
    }

    #[test]
    fn spectral_class_is_optional() {
        let mut value = rigel();
        value["spectral_class"] = Value::Null;
        assert_eq!(NewStar::from_json(&value).unwrap().spectral_class, None);

        value.as_object_mut().unwrap().remove("spectral_class");
        assert_eq!(NewStar::from_json(&value).unwrap().spectral_class, None);
    }

    #[test]
    fn it_ignores_unknown_fields_and_client_ids() {
        let mut value = rigel();
        value["id"] = json!("client-chosen");
        value["color"] = json!("blue");
        assert!(NewStar::from_json(&value).is_ok());
    }

    #[test]
    fn missing_distance_is_reported() {
        let mut value = rigel();
        value.as_object_mut().unwrap().remove("distance_light_year");

        let errors = NewStar::from_json(&value).unwrap_err();
        assert_eq!(errors.errors().len(), 1);
        let error = &errors.errors()[0];
        assert_eq!(error.loc, vec!["body", "distance_light_year"]);
        assert_eq!(error.kind, FieldErrorKind::Missing);
    }

    #[test]
    fn every_bad_field_is_reported() {
        let value = json!({
            "name": 42,
            "constellation": "Orion",
            "right_ascension": "05h 14m 32.3s",
            "apparent_magnitude": "bright",
            "absolute_magnitude": -7.84,
            "distance_light_year": 863.5,
            "spectral_class": false,
        });

        let errors = NewStar::from_json(&value).unwrap_err();
        let kinds: Vec<_> = errors
            .errors()
            .iter()
            .map(|error| (error.field().unwrap(), error.kind))
            .collect();
        assert_eq!(
            kinds,
            vec![
                ("name", FieldErrorKind::StringType),
                ("declination", FieldErrorKind::Missing),
                ("apparent_magnitude", FieldErrorKind::FloatType),
                ("distance_light_year", FieldErrorKind::IntType),
                ("spectral_class", FieldErrorKind::StringType),
            ]
        );
    }

    #[test]
    fn integral_floats_count_as_integers() {
        let mut value = rigel();
        value["distance_light_year"] = json!(863.0);
        assert_eq!(
            NewStar::from_json(&value).unwrap().distance_light_year,
            863
        );

        value["apparent_magnitude"] = json!(1);
        assert_eq!(NewStar::from_json(&value).unwrap().apparent_magnitude, 1.0);
    }

    #[test]
    fn non_objects_are_rejected() {
        for value in [json!([]), json!("Rigel"), json!(null), json!(1)] {
            let errors = NewStar::from_json(&value).unwrap_err();
            assert_eq!(errors.errors()[0].kind, FieldErrorKind::ModelType);
            assert_eq!(errors.errors()[0].loc, vec!["body"]);
        }
    }

    #[test]
    fn validation_errors_serialize_as_a_list() {
        let errors = ValidationErrors::invalid_json("expected value at line 1 column 1");
        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            json!([{
                "loc": ["body"],
                "msg": "expected value at line 1 column 1",
                "type": "json_invalid",
            }])
        );
    }
}
