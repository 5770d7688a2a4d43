use std::{any::Any, sync::Arc};

use serde_json::{Map, Value};

use crate::{
	property::{ID, TYPE},
	stream::{collapse, string_list},
	ActivityStream, NotifyResult, Property, Registry, ValidationError, Validator, ValueError,
};

/// How nested objects handed out by accessors relate to the document they came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PropertiesBy {
	/// accessors return views sharing the parent document: writes go through
	#[default]
	Reference,
	/// accessors return deep copies: writes stay local
	Value,
}

/// Construction and validation knobs shared by an object and every part reached through it
#[derive(Clone)]
pub struct NotifyOptions {
	pub validate_stream_on_construct: bool,
	pub validate_properties: bool,
	pub properties_by: PropertiesBy,
	pub validators: Arc<Validator>,
	pub registry: Arc<Registry>,
}

impl Default for NotifyOptions {
	fn default() -> Self {
		NotifyOptions {
			validate_stream_on_construct: true,
			validate_properties: true,
			properties_by: PropertiesBy::default(),
			validators: Arc::new(Validator::default()),
			registry: Arc::new(Registry::default()),
		}
	}
}

impl std::fmt::Debug for NotifyOptions {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("NotifyOptions")
			.field("validate_stream_on_construct", &self.validate_stream_on_construct)
			.field("validate_properties", &self.validate_properties)
			.field("properties_by", &self.properties_by)
			.finish_non_exhaustive()
	}
}

/// Per-class type configuration consulted by the shared base logic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kind {
	/// tokens that must always be present in `type`, forced in on construction
	pub type_constant: &'static [&'static str],
	/// written as `type` on construction if none was given
	pub default_type: Option<&'static str>,
	/// if non empty, `type` may only be one of these
	pub allowed_types: &'static [&'static str],
}

impl Kind {
	pub const fn pattern(type_constant: &'static [&'static str]) -> Self {
		Kind { type_constant, default_type: None, allowed_types: &[] }
	}

	pub const fn part(default_type: Option<&'static str>, allowed_types: &'static [&'static str]) -> Self {
		Kind { type_constant: &[], default_type, allowed_types }
	}
}

/// State shared by every notification object: the wrapped document and how to validate it
#[derive(Debug, Clone)]
pub struct NotifyBase {
	stream: ActivityStream,
	options: NotifyOptions,
	validation_context: Option<Property>,
	kind: Kind,
}

impl NotifyBase {
	pub fn new(stream: ActivityStream, options: NotifyOptions, validation_context: Option<Property>, kind: Kind) -> Self {
		let mut base = NotifyBase { stream, options, validation_context, kind };
		if !base.stream.contains(&ID) {
			base.stream.set(&ID, Value::String(format!("urn:uuid:{}", uuid::Uuid::new_v4())));
		}
		base.apply_kind();
		base
	}

	fn apply_kind(&mut self) {
		if !self.kind.type_constant.is_empty() {
			let mut types = self.stream.get(&TYPE).map(|t| string_list(&t)).unwrap_or_default();
			for t in self.kind.type_constant {
				if !types.iter().any(|x| x == t) {
					types.push(t.to_string());
				}
			}
			self.stream.set(&TYPE, collapse(types));
		} else if let Some(default) = self.kind.default_type {
			if !self.stream.contains(&TYPE) {
				self.stream.set(&TYPE, Value::String(default.to_string()));
			}
		}
	}

	pub fn stream(&self) -> &ActivityStream {
		&self.stream
	}

	pub fn options(&self) -> &NotifyOptions {
		&self.options
	}

	pub fn kind(&self) -> &Kind {
		&self.kind
	}

	/// parent property this object is nested under, if any
	pub fn validation_context(&self) -> Option<&Property> {
		self.validation_context.as_ref()
	}

	pub fn get_property(&self, property: &Property) -> Option<Value> {
		self.stream.get(property)
	}

	pub fn get_string(&self, property: &Property) -> Option<String> {
		match self.stream.get(property)? {
			Value::String(s) => Some(s),
			_ => None,
		}
	}

	/// validates then stores `value`; `type` is always checked against the allowed types
	pub fn set_property(&mut self, property: &Property, value: Value) -> Result<(), ValueError> {
		if *property == TYPE && !self.kind.allowed_types.is_empty() {
			let given = string_list(&value);
			if given.is_empty() || given.iter().any(|t| !self.kind.allowed_types.iter().any(|a| a == t)) {
				return Err(ValueError::InvalidType {
					value: match &value {
						Value::String(s) => s.clone(),
						other => other.to_string(),
					},
					allowed: self.kind.allowed_types.iter().map(|t| t.to_string()).collect(),
				});
			}
		}
		if self.options.validate_properties {
			self.validate_property(property, &value)?;
		}
		self.stream.set(property, value);
		Ok(())
	}

	pub fn remove_property(&mut self, property: &Property) -> Option<Value> {
		self.stream.remove(property)
	}

	/// runs the rule registered for `property` in this object's context; no rule means no check
	pub fn validate_property(&self, property: &Property, value: &Value) -> Result<(), ValueError> {
		match self.options.validators.get(property, self.validation_context.as_ref()) {
			Some(check) => check(self, value),
			None => Ok(()),
		}
	}

	/// wraps the object stored under `property` as `T`; a plain string is read as `{"id": ...}`
	pub fn nested<T: NotifyClass>(&self, property: &Property) -> Option<T> {
		let stream = self.nested_stream(property)?;
		Some(T::assemble(stream, self.nested_options(), Some(property.clone())))
	}

	/// options handed to nested parts: they are checked as part of their parent, never on their own
	pub fn nested_options(&self) -> NotifyOptions {
		NotifyOptions { validate_stream_on_construct: false, ..self.options.clone() }
	}

	/// the document under `property`, shared or copied depending on [`PropertiesBy`]
	pub fn nested_stream(&self, property: &Property) -> Option<ActivityStream> {
		let stream = match self.stream.get(property)? {
			Value::String(id) => {
				let mut doc = Map::new();
				doc.insert(ID.name().to_string(), Value::String(id));
				let mut stream = ActivityStream::from_map(doc);
				for ns in self.stream.context() {
					stream.register_namespace(&ns);
				}
				stream
			},
			Value::Object(_) => match self.options.properties_by {
				PropertiesBy::Reference => self.stream.view(property.name()),
				PropertiesBy::Value => self.stream.detached(property.name())?,
			},
			other => {
				tracing::debug!("cannot read '{property}' as a nested object: {other}");
				return None;
			},
		};
		Some(stream)
	}

	/// stores `part`'s document under `property`, carrying over its `@context` entries
	pub fn set_nested(&mut self, property: &Property, part: &dyn Notify) -> Result<(), ValueError> {
		let stream = part.base().stream();
		for ns in stream.context() {
			self.stream.register_namespace(&ns);
		}
		self.set_property(property, Value::Object(stream.doc()))
	}

	pub fn validate_base(&self, acc: &mut ValidationError) {
		self.required_and_validate(acc, &ID, self.get_property(&ID).as_ref());
		self.required_and_validate(acc, &TYPE, self.get_property(&TYPE).as_ref());
	}

	pub fn required_and_validate(&self, acc: &mut ValidationError, property: &Property, value: Option<&Value>) {
		match value {
			None => acc.add_error(property, required_message(property)),
			Some(v) => self.optional_and_validate(acc, property, Some(v)),
		}
	}

	pub fn optional_and_validate(&self, acc: &mut ValidationError, property: &Property, value: Option<&Value>) {
		if let Some(v) = value {
			if let Err(e) = self.validate_property(property, v) {
				acc.add_error(property, e.to_string());
			}
		}
	}

	pub fn required_nested<N: Notify + ?Sized>(&self, acc: &mut ValidationError, property: &Property, part: Option<&N>) {
		match part {
			None => acc.add_error(property, required_message(property)),
			Some(p) => self.optional_nested(acc, property, Some(p)),
		}
	}

	pub fn optional_nested<N: Notify + ?Sized>(&self, acc: &mut ValidationError, property: &Property, part: Option<&N>) {
		if let Some(p) = part {
			if let Err(e) = p.validate() {
				acc.add_nested_errors(property, e);
			}
		}
	}
}

fn required_message(property: &Property) -> String {
	format!("`{property}` is a required field")
}

pub trait Base: Send + Sync + 'static {
	fn base(&self) -> &NotifyBase;
	fn base_mut(&mut self) -> &mut NotifyBase;
	fn as_any(&self) -> &dyn Any;
	fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

/// Any notification object: a pattern or one of its parts
pub trait Notify: Base {
	/// appends this object's problems to `acc`, base checks first
	fn validate_into(&self, acc: &mut ValidationError);

	fn validate(&self) -> Result<(), ValidationError> {
		let mut acc = ValidationError::default();
		self.validate_into(&mut acc);
		if acc.is_empty() {
			Ok(())
		} else {
			Err(acc)
		}
	}

	fn id(&self) -> Option<String> {
		self.base().get_string(&ID)
	}

	fn set_id(&mut self, id: &str) -> Result<(), ValueError> {
		self.base_mut().set_property(&ID, Value::String(id.to_string()))
	}

	fn types(&self) -> Vec<String> {
		self.base().get_property(&TYPE).map(|t| string_list(&t)).unwrap_or_default()
	}

	fn set_type(&mut self, types: &[&str]) -> Result<(), ValueError> {
		let value = collapse(types.iter().map(|t| t.to_string()).collect());
		self.base_mut().set_property(&TYPE, value)
	}

	fn get_property(&self, property: &Property) -> Option<Value> {
		self.base().get_property(property)
	}

	fn set_property(&mut self, property: &Property, value: Value) -> Result<(), ValueError> {
		self.base_mut().set_property(property, value)
	}

	fn to_jsonld(&self) -> Value {
		self.base().stream().to_jsonld()
	}
}

/// A concrete notification class, constructible from a document
pub trait NotifyClass: Notify + Sized {
	const KIND: Kind;

	fn wrap(base: NotifyBase) -> Self;

	fn new() -> Self {
		Self::with_options(NotifyOptions::default())
	}

	fn with_options(options: NotifyOptions) -> Self {
		Self::assemble(ActivityStream::new(), options, None)
	}

	fn from_value(value: Value, options: NotifyOptions) -> NotifyResult<Self> {
		Self::from_stream(ActivityStream::from_value(value)?, options, None)
	}

	/// wraps `stream`, validating it right away if the options ask for it
	fn from_stream(stream: ActivityStream, options: NotifyOptions, validation_context: Option<Property>) -> NotifyResult<Self> {
		let validate = options.validate_stream_on_construct;
		let this = Self::assemble(stream, options, validation_context);
		if validate {
			this.validate()?;
		}
		Ok(this)
	}

	fn assemble(stream: ActivityStream, options: NotifyOptions, validation_context: Option<Property>) -> Self {
		Self::wrap(NotifyBase::new(stream, options, validation_context, Self::KIND))
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{part::NotifyActor, property::ORIGIN, NotifyService};
	use serde_json::json;

	#[test]
	fn missing_id_is_generated() {
		let service = NotifyService::new();
		let id = service.id().expect("id is generated");
		assert!(id.starts_with("urn:uuid:"));
		assert_eq!(id.len(), "urn:uuid:".len() + 36);
		assert_eq!(service.types(), vec!["Service"]);
	}

	#[test]
	fn actor_rejects_unlisted_type_on_set() {
		let mut actor = NotifyActor::new();
		assert!(matches!(actor.set_type(&["NotAllowedType"]), Err(ValueError::InvalidType { .. })));
		assert!(actor.set_type(&["Person"]).is_ok());

		// also when property validation is off
		let mut actor = NotifyActor::with_options(NotifyOptions { validate_properties: false, ..Default::default() });
		assert!(actor.set_type(&["NotAllowedType"]).is_err());
	}

	#[test]
	fn set_property_fails_fast_unless_disabled() {
		let mut service = NotifyService::new();
		assert!(service.set_id("not a uri").is_err());
		assert_eq!(service.id().map(|id| id.starts_with("urn:uuid:")), Some(true));

		let mut service = NotifyService::with_options(NotifyOptions { validate_properties: false, ..Default::default() });
		assert!(service.set_id("not a uri").is_ok());
		assert!(service.validate().is_err());
	}

	#[test]
	fn nested_by_value_does_not_write_through() {
		let doc = json!({ "origin": { "id": "https://a.example/", "type": "Service" } });
		let options = NotifyOptions { validate_stream_on_construct: false, ..Default::default() };

		let by_ref = NotifyBase::new(ActivityStream::from_value(doc.clone()).expect("object"), options.clone(), None, Kind::part(None, &[]));
		let mut origin: NotifyService = by_ref.nested(&ORIGIN).expect("origin present");
		origin.set_id("https://b.example/").expect("valid url");
		assert_eq!(by_ref.get_property(&ORIGIN).expect("origin")["id"], "https://b.example/");

		let options = NotifyOptions { properties_by: PropertiesBy::Value, ..options };
		let by_val = NotifyBase::new(ActivityStream::from_value(doc).expect("object"), options, None, Kind::part(None, &[]));
		let mut origin: NotifyService = by_val.nested(&ORIGIN).expect("origin present");
		origin.set_id("https://b.example/").expect("valid url");
		assert_eq!(by_val.get_property(&ORIGIN).expect("origin")["id"], "https://a.example/");
	}

	#[test]
	fn nested_string_reads_as_id() {
		let doc = json!({ "origin": "https://a.example/" });
		let options = NotifyOptions { validate_stream_on_construct: false, ..Default::default() };
		let base = NotifyBase::new(ActivityStream::from_value(doc).expect("object"), options, None, Kind::part(None, &[]));
		let origin: NotifyService = base.nested(&ORIGIN).expect("origin present");
		assert_eq!(origin.id().as_deref(), Some("https://a.example/"));
		// nested under origin, ids must be urls
		assert_eq!(origin.base().validation_context(), Some(&ORIGIN));
	}
}
