use crate::{
	getter, notify_class,
	part::{NotifyActor, NotifyObject, NotifyService},
	property::{ACTOR, CONTEXT, IN_REPLY_TO, OBJECT, ORIGIN, SUMMARY, TARGET, TYPE},
	setter,
	stream::string_list,
	types::ActivityStreamsType,
	Base, Kind, Notify, NotifyBase, NotifyClass, ValidationError,
};

/// A complete notification.
///
/// Accessors for nested parts wrap the sub-document anew on every call: with
/// [`crate::PropertiesBy::Reference`] two wrappers of the same field see each other's writes, but
/// they are distinct values.
pub trait Pattern: Notify {
	getter! { origin -> part NotifyService, ORIGIN }
	setter! { origin -> part ORIGIN }

	getter! { target -> part NotifyService, TARGET }
	setter! { target -> part TARGET }

	getter! { actor -> part NotifyActor, ACTOR }
	setter! { actor -> part ACTOR }

	getter! { in_reply_to -> &str IN_REPLY_TO }
	setter! { in_reply_to -> &str IN_REPLY_TO }

	setter! { object -> part OBJECT }
	setter! { context -> part CONTEXT }

	/// `object`, wrapped as the part type this pattern expects
	fn object_part(&self) -> Option<Box<dyn Notify>> {
		self.base()
			.nested::<NotifyObject>(&OBJECT)
			.map(|o| Box::new(o) as Box<dyn Notify>)
	}

	/// `context`, wrapped as the part type this pattern expects
	fn context_part(&self) -> Option<Box<dyn Notify>> {
		self.base()
			.nested::<NotifyObject>(&CONTEXT)
			.map(|o| Box::new(o) as Box<dyn Notify>)
	}

	fn object_id(&self) -> Option<String> {
		self.object_part().and_then(|o| o.id())
	}

	/// checks every pattern shares: `id`, `type`, `origin`, `target` and `object` are required
	fn validate_pattern(&self, acc: &mut ValidationError) {
		let base = self.base();
		base.validate_base(acc);
		base.required_nested(acc, &ORIGIN, self.origin().as_ref());
		base.required_nested(acc, &TARGET, self.target().as_ref());
		base.required_nested(acc, &OBJECT, self.object_part().as_deref());
		base.optional_nested(acc, &ACTOR, self.actor().as_ref());
		base.optional_and_validate(acc, &IN_REPLY_TO, base.get_property(&IN_REPLY_TO).as_ref());
		base.optional_nested(acc, &CONTEXT, self.context_part().as_deref());
	}
}

pub trait Summary: Notify {
	getter! { summary -> &str SUMMARY }
	setter! { summary -> &str SUMMARY }
}

const OBJECT_TYPE: &[&str] = &[ActivityStreamsType::Object.as_str()];

/// Pattern with no specific semantics, the common ground of all others
#[derive(Debug)]
pub struct NotifyPattern {
	base: NotifyBase,
}

notify_class!(NotifyPattern, Kind::pattern(OBJECT_TYPE));

impl NotifyPattern {
	getter! { pub object -> part NotifyObject, OBJECT }
	getter! { pub context -> part NotifyObject, CONTEXT }
}

impl Pattern for NotifyPattern {}

impl Notify for NotifyPattern {
	fn validate_into(&self, acc: &mut ValidationError) {
		self.validate_pattern(acc);
	}
}

/// `object` of a reply: the notification being replied to if its type is a registered pattern,
/// a plain object otherwise
pub enum NestedObject {
	Pattern(Box<dyn Pattern>),
	Object(NotifyObject),
}

impl NestedObject {
	pub fn as_pattern(&self) -> Option<&dyn Pattern> {
		match self {
			NestedObject::Pattern(p) => Some(p.as_ref()),
			NestedObject::Object(_) => None,
		}
	}

	pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
		match self {
			NestedObject::Pattern(p) => p.as_any().downcast_ref(),
			NestedObject::Object(o) => o.as_any().downcast_ref(),
		}
	}
}

impl std::fmt::Debug for NestedObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let variant = match self {
			NestedObject::Pattern(_) => "Pattern",
			NestedObject::Object(_) => "Object",
		};
		f.debug_struct("NestedObject")
			.field("variant", &variant)
			.field("id", &self.id())
			.field("type", &self.types())
			.finish()
	}
}

impl Base for NestedObject {
	fn base(&self) -> &NotifyBase {
		match self {
			NestedObject::Pattern(p) => p.base(),
			NestedObject::Object(o) => o.base(),
		}
	}

	fn base_mut(&mut self) -> &mut NotifyBase {
		match self {
			NestedObject::Pattern(p) => p.base_mut(),
			NestedObject::Object(o) => o.base_mut(),
		}
	}

	fn as_any(&self) -> &dyn std::any::Any {
		self
	}

	fn into_any(self: Box<Self>) -> Box<dyn std::any::Any> {
		self
	}
}

impl Notify for NestedObject {
	fn validate_into(&self, acc: &mut ValidationError) {
		match self {
			NestedObject::Pattern(p) => p.validate_into(acc),
			NestedObject::Object(o) => o.validate_into(acc),
		}
	}
}

/// Patterns whose `object` is itself a notification
pub trait NestedPatternObject: Pattern {
	fn object(&self) -> Option<NestedObject> {
		let base = self.base();
		let stream = base.nested_stream(&OBJECT)?;
		let options = base.nested_options();
		let types = stream.get(&TYPE).map(|t| string_list(&t)).unwrap_or_default();
		if let Some(entry) = options.registry.get_by_types(&types) {
			match (entry.build)(stream.clone(), options.clone(), Some(OBJECT)) {
				Ok(pattern) => return Some(NestedObject::Pattern(pattern)),
				Err(e) => tracing::debug!("could not build nested {}: {e}", entry.name),
			}
		}
		Some(NestedObject::Object(NotifyObject::assemble(stream, options, Some(OBJECT))))
	}

	/// `inReplyTo` must be present and name the nested object
	fn validate_reply_identity(&self, acc: &mut ValidationError) {
		let base = self.base();
		let Some(reply) = self.in_reply_to() else {
			base.required_and_validate(acc, &IN_REPLY_TO, None);
			return;
		};
		let object_id = self.object().and_then(|o| o.id());
		if object_id.as_deref() != Some(reply.as_str()) {
			acc.add_error(&IN_REPLY_TO, format!(
				"Expected inReplyTo id to be the same as the nested object id. inReplyTo: {reply}, object.id: {}",
				object_id.unwrap_or_default(),
			));
		}
	}
}
