//! Property validation rules.
//!
//! A [`Validator`] maps each property to a [`Rule`]: an optional default check plus overrides that
//! apply when the owning object sits under a given parent property (e.g. `id` must be a
//! dereferenceable url when nested under `origin`, but any absolute uri at top level).

use std::{collections::HashMap, sync::Arc};

use serde_json::Value;

use crate::{
	property::{ACTOR, CITE_AS, CONTEXT, ID, INBOX, IN_REPLY_TO, ITEM, OBJECT, OBJECT_TRIPLE, ORIGIN, RELATIONSHIP_TRIPLE, SUBJECT_TRIPLE, TARGET, TYPE},
	stream::string_list,
	types::{ActivityStreamsType, ACTOR_TYPES},
	uri, NotifyBase, Property, ValueError,
};

/// Check run against a property value, given the object that owns it
pub type ValidatorFn = Arc<dyn Fn(&NotifyBase, &Value) -> Result<(), ValueError> + Send + Sync>;

#[derive(Clone, Default)]
pub struct Rule {
	pub default: Option<ValidatorFn>,
	pub context: HashMap<Property, Rule>,
}

impl Rule {
	pub fn new(check: ValidatorFn) -> Self {
		Rule { default: Some(check), context: HashMap::new() }
	}

	pub fn in_context(mut self, parent: Property, check: ValidatorFn) -> Self {
		self.context.insert(parent, Rule::new(check));
		self
	}

	/// leaves of `other` replace ours, context maps merge recursively
	fn merge(&mut self, other: Rule) {
		if other.default.is_some() {
			self.default = other.default;
		}
		for (parent, rule) in other.context {
			self.context.entry(parent).or_default().merge(rule);
		}
	}
}

impl std::fmt::Debug for Rule {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Rule")
			.field("default", &self.default.is_some())
			.field("context", &self.context)
			.finish()
	}
}

#[derive(Debug, Clone)]
pub struct Validator {
	rules: HashMap<Property, Rule>,
}

impl Default for Validator {
	fn default() -> Self {
		let mut rules = HashMap::new();
		rules.insert(ID, Rule::new(absolute_uri())
			.in_context(CONTEXT, url())
			.in_context(ORIGIN, url())
			.in_context(TARGET, url())
			.in_context(ITEM, url())
		);
		rules.insert(TYPE, Rule::new(type_checker())
			.in_context(ACTOR, one_of(ACTOR_TYPES.iter().copied()))
			.in_context(OBJECT, at_least_one_of(ActivityStreamsType::VALUES.iter().copied()))
			.in_context(CONTEXT, at_least_one_of(ActivityStreamsType::VALUES.iter().copied()))
			.in_context(ITEM, at_least_one_of(ActivityStreamsType::VALUES.iter().copied()))
		);
		rules.insert(CITE_AS, Rule::new(url()));
		rules.insert(INBOX, Rule::new(url()));
		rules.insert(IN_REPLY_TO, Rule::new(absolute_uri()));
		rules.insert(SUBJECT_TRIPLE, Rule::new(absolute_uri()));
		rules.insert(RELATIONSHIP_TRIPLE, Rule::new(absolute_uri()));
		rules.insert(OBJECT_TRIPLE, Rule::new(absolute_uri()));
		Validator { rules }
	}
}

impl Validator {
	/// validator with no rules at all: every value passes
	pub fn empty() -> Self {
		Validator { rules: HashMap::new() }
	}

	/// check for `property` on an object nested under `context`, falling back to the property default
	pub fn get(&self, property: &Property, context: Option<&Property>) -> Option<ValidatorFn> {
		let rule = self.rules.get(property)?;
		context
			.and_then(|ctx| rule.context.get(ctx))
			.and_then(|r| r.default.clone())
			.or_else(|| rule.default.clone())
	}

	pub fn add_rules(&mut self, rules: impl IntoIterator<Item = (Property, Rule)>) {
		for (property, rule) in rules {
			self.rules.entry(property).or_default().merge(rule);
		}
	}

	pub fn rules(&self) -> &HashMap<Property, Rule> {
		&self.rules
	}
}

fn as_str(value: &Value) -> Result<&str, ValueError> {
	value
		.as_str()
		.ok_or_else(|| ValueError::InvalidValue(format!("expected a string, got {value}")))
}

fn render(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}

pub fn absolute_uri() -> ValidatorFn {
	Arc::new(|_, value| Ok(uri::absolute_uri(as_str(value)?)?))
}

pub fn url() -> ValidatorFn {
	Arc::new(|_, value| Ok(uri::url(as_str(value)?)?))
}

fn check_one_of<S: AsRef<str>>(allowed: &[S], value: &Value) -> Result<(), ValueError> {
	match value.as_str() {
		Some(v) if allowed.iter().any(|a| a.as_ref() == v) => Ok(()),
		_ => Err(ValueError::InvalidValue(format!(
			"`{}` is not one of the permitted values: {}",
			render(value),
			allowed.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(", "),
		))),
	}
}

fn check_at_least_one_of<S: AsRef<str>>(allowed: &[S], value: &Value) -> Result<(), ValueError> {
	let given = string_list(value);
	if given.iter().any(|g| allowed.iter().any(|a| a.as_ref() == g)) {
		return Ok(());
	}
	Err(ValueError::InvalidValue(format!(
		"`{}` does not contain any of the permitted values: {}",
		render(value),
		allowed.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(", "),
	)))
}

fn check_contains<S: AsRef<str>>(required: &[S], value: &Value) -> Result<(), ValueError> {
	let given = string_list(value);
	let missing: Vec<&str> = required
		.iter()
		.map(AsRef::as_ref)
		.filter(|r| !given.iter().any(|g| g == r))
		.collect();
	if missing.is_empty() {
		return Ok(());
	}
	Err(ValueError::InvalidValue(format!(
		"`{}` does not contain the required value(s): {}",
		render(value),
		missing.join(", "),
	)))
}

/// value must be a single string equal to one of `allowed`
pub fn one_of(allowed: impl IntoIterator<Item = impl Into<String>>) -> ValidatorFn {
	let allowed: Vec<String> = allowed.into_iter().map(Into::into).collect();
	Arc::new(move |_, value| check_one_of(&allowed, value))
}

/// value, scalar or array, must share at least one entry with `allowed`
pub fn at_least_one_of(allowed: impl IntoIterator<Item = impl Into<String>>) -> ValidatorFn {
	let allowed: Vec<String> = allowed.into_iter().map(Into::into).collect();
	Arc::new(move |_, value| check_at_least_one_of(&allowed, value))
}

/// value, scalar or array, must include every entry of `required`
pub fn contains(required: impl IntoIterator<Item = impl Into<String>>) -> ValidatorFn {
	let required: Vec<String> = required.into_iter().map(Into::into).collect();
	Arc::new(move |_, value| check_contains(&required, value))
}

/// checks `type` against what the owner declares: its allowed types if restricted, else its
/// type constant, else anything goes
pub fn type_checker() -> ValidatorFn {
	Arc::new(|owner, value| {
		let kind = owner.kind();
		if !kind.allowed_types.is_empty() {
			check_one_of(kind.allowed_types, value)
		} else if !kind.type_constant.is_empty() {
			check_contains(kind.type_constant, value)
		} else {
			Ok(())
		}
	})
}
