use std::collections::BTreeMap;

use crate::{uri::InvalidUri, Property};

/// Failure of a single property validator, raised at the point of the bad value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
	#[error(transparent)]
	InvalidUri(#[from] InvalidUri),

	#[error("{0}")]
	InvalidValue(String),

	#[error("type value `{value}` is not one of the permitted values: {allowed:?}")]
	InvalidType {
		value: String,
		allowed: Vec<String>,
	},
}

/// Errors collected for one property: its own messages plus those of its nested object, if any
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct FieldErrors {
	pub errors: Vec<String>,
	#[serde(skip_serializing_if = "BTreeMap::is_empty")]
	pub nested: BTreeMap<Property, FieldErrors>,
}

/// Accumulated outcome of a `validate()` pass, keyed by property.
///
/// Failures of nested objects are folded under the parent property's `nested` map rather than
/// flattened, so callers can render errors field by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct ValidationError {
	errors: BTreeMap<Property, FieldErrors>,
}

impl ValidationError {
	pub fn add_error(&mut self, property: &Property, message: impl Into<String>) {
		self.errors
			.entry(property.clone())
			.or_default()
			.errors
			.push(message.into());
	}

	pub fn add_nested_errors(&mut self, property: &Property, nested: ValidationError) {
		self.errors
			.entry(property.clone())
			.or_default()
			.nested
			.extend(nested.errors);
	}

	pub fn is_empty(&self) -> bool {
		self.errors.is_empty()
	}

	pub fn errors(&self) -> &BTreeMap<Property, FieldErrors> {
		&self.errors
	}

	pub fn get(&self, property: &Property) -> Option<&FieldErrors> {
		self.errors.get(property)
	}

	pub fn contains(&self, property: &Property) -> bool {
		self.errors.contains_key(property)
	}

	/// `{property: {"errors": [...], "nested": {...}}}`
	pub fn to_json(&self) -> serde_json::Value {
		serde_json::to_value(self).unwrap_or_default()
	}
}

impl std::fmt::Display for ValidationError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let fields: Vec<&str> = self.errors.keys().map(Property::name).collect();
		write!(f, "validation failed for field(s): {}", fields.join(", "))
	}
}

impl std::error::Error for ValidationError {}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
	#[error(transparent)]
	Value(#[from] ValueError),

	#[error(transparent)]
	Validation(#[from] ValidationError),

	#[error("no type found")]
	NoType,

	#[error("no matching pattern for type(s) {0:?}")]
	NoMatchingPattern(Vec<String>),

	#[error("notification document must be a json object")]
	NotAnObject,

	#[error("malformed json: {0}")]
	Json(#[from] serde_json::Error),
}

impl NotifyError {
	pub fn validation(&self) -> Option<&ValidationError> {
		match self {
			NotifyError::Validation(e) => Some(e),
			_ => None,
		}
	}
}

pub type NotifyResult<T> = Result<T, NotifyError>;

#[cfg(test)]
mod test {
	use super::*;
	use crate::property::{ID, ORIGIN};

	#[test]
	fn nested_errors_fold_under_parent_property() {
		let mut inner = ValidationError::default();
		inner.add_error(&ID, "`id` is a required field");

		let mut outer = ValidationError::default();
		outer.add_nested_errors(&ORIGIN, inner);
		outer.add_error(&ORIGIN, "something else");

		assert_eq!(
			outer.to_json(),
			serde_json::json!({
				"origin": {
					"errors": ["something else"],
					"nested": { "id": { "errors": ["`id` is a required field"] } },
				}
			})
		);
		assert!(!outer.contains(&ID));
	}
}
