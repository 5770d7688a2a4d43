//! Property identifiers and the well-known COAR Notify properties.
//!
//! A property is either a bare name or a name qualified by the namespace that defines it. Documents
//! store values by name only, while namespaces are registered into the document `@context` when a
//! qualified property is written. Validation rules are keyed on the full identifier.

use std::borrow::Cow;

use serde_json::Value;

pub const ACTIVITY_STREAMS_NAMESPACE: &str = "https://www.w3.org/ns/activitystreams";
pub const COAR_NOTIFY_NAMESPACE: &str = "https://coar-notify.net";

/// An entry of a JSON-LD `@context`: either a vocabulary uri or a `{prefix: uri}` mapping
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Namespace {
	Uri(Cow<'static, str>),
	Prefixed {
		prefix: Cow<'static, str>,
		uri: Cow<'static, str>,
	},
}

impl Namespace {
	pub const ACTIVITY_STREAMS: Namespace = Namespace::Uri(Cow::Borrowed(ACTIVITY_STREAMS_NAMESPACE));
	pub const COAR_NOTIFY: Namespace = Namespace::Uri(Cow::Borrowed(COAR_NOTIFY_NAMESPACE));

	pub fn uri(uri: impl Into<String>) -> Self {
		Namespace::Uri(Cow::Owned(uri.into()))
	}

	pub fn prefixed(prefix: impl Into<String>, uri: impl Into<String>) -> Self {
		Namespace::Prefixed {
			prefix: Cow::Owned(prefix.into()),
			uri: Cow::Owned(uri.into()),
		}
	}

	pub fn to_value(&self) -> Value {
		match self {
			Namespace::Uri(uri) => Value::String(uri.to_string()),
			Namespace::Prefixed { prefix, uri } => {
				let mut map = serde_json::Map::new();
				map.insert(prefix.to_string(), Value::String(uri.to_string()));
				Value::Object(map)
			},
		}
	}

	/// reads a raw `@context` value, which may be a single entry or an array of them
	pub fn parse_context(value: &Value) -> Vec<Namespace> {
		match value {
			Value::String(uri) => vec![Namespace::uri(uri.as_str())],
			Value::Object(map) => map
				.iter()
				.filter_map(|(prefix, uri)| match uri.as_str() {
					Some(uri) => Some(Namespace::prefixed(prefix.as_str(), uri)),
					None => {
						tracing::warn!("skipping non-string @context mapping for '{prefix}'");
						None
					},
				})
				.collect(),
			Value::Array(entries) => entries.iter().flat_map(Namespace::parse_context).collect(),
			other => {
				tracing::warn!("ignoring malformed @context entry: {other}");
				Vec::new()
			},
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Property {
	name: Cow<'static, str>,
	namespace: Option<Namespace>,
}

impl Property {
	pub const fn bare(name: &'static str) -> Self {
		Property { name: Cow::Borrowed(name), namespace: None }
	}

	pub const fn namespaced(name: &'static str, namespace: Namespace) -> Self {
		Property { name: Cow::Borrowed(name), namespace: Some(namespace) }
	}

	/// property defined at runtime, for extension vocabularies
	pub fn custom(name: impl Into<String>, namespace: Option<Namespace>) -> Self {
		Property { name: Cow::Owned(name.into()), namespace }
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn namespace(&self) -> Option<&Namespace> {
		self.namespace.as_ref()
	}
}

impl std::fmt::Display for Property {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.name)
	}
}

impl From<&'static str> for Property {
	fn from(name: &'static str) -> Self {
		Property::bare(name)
	}
}

// property names are what ends up as json keys, so validation reports serialize by name
impl serde::Serialize for Property {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.name)
	}
}

pub const ID: Property = Property::namespaced("id", Namespace::ACTIVITY_STREAMS);
pub const TYPE: Property = Property::namespaced("type", Namespace::ACTIVITY_STREAMS);
pub const ORIGIN: Property = Property::namespaced("origin", Namespace::ACTIVITY_STREAMS);
pub const TARGET: Property = Property::namespaced("target", Namespace::ACTIVITY_STREAMS);
pub const OBJECT: Property = Property::namespaced("object", Namespace::ACTIVITY_STREAMS);
pub const ACTOR: Property = Property::namespaced("actor", Namespace::ACTIVITY_STREAMS);
pub const IN_REPLY_TO: Property = Property::namespaced("inReplyTo", Namespace::ACTIVITY_STREAMS);
pub const CONTEXT: Property = Property::namespaced("context", Namespace::ACTIVITY_STREAMS);
pub const SUMMARY: Property = Property::namespaced("summary", Namespace::ACTIVITY_STREAMS);
pub const NAME: Property = Property::namespaced("name", Namespace::ACTIVITY_STREAMS);
pub const MEDIA_TYPE: Property = Property::namespaced("mediaType", Namespace::ACTIVITY_STREAMS);
pub const SUBJECT_TRIPLE: Property = Property::namespaced("as:subject", Namespace::ACTIVITY_STREAMS);
pub const RELATIONSHIP_TRIPLE: Property = Property::namespaced("as:relationship", Namespace::ACTIVITY_STREAMS);
pub const OBJECT_TRIPLE: Property = Property::namespaced("as:object", Namespace::ACTIVITY_STREAMS);

pub const INBOX: Property = Property::namespaced("inbox", Namespace::COAR_NOTIFY);
pub const CITE_AS: Property = Property::namespaced("ietf:cite-as", Namespace::COAR_NOTIFY);
pub const ITEM: Property = Property::namespaced("ietf:item", Namespace::COAR_NOTIFY);
