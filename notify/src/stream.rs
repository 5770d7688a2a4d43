use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::{Map, Value};

use crate::{property::Namespace, NotifyError, NotifyResult, Property};

#[derive(Debug, Default)]
struct Document {
	context: Vec<Namespace>,
	doc: Map<String, Value>,
}

/// Namespace-aware property container over a JSON-LD document.
///
/// `@context` is split out on construction and merged back only by [`ActivityStream::to_jsonld`].
/// Cloning an `ActivityStream`, or taking a [`ActivityStream::view`], shares the underlying
/// document: writes through one handle are visible through all others. Use
/// [`ActivityStream::detached`] for an independent deep copy.
#[derive(Debug, Clone, Default)]
pub struct ActivityStream {
	root: Arc<RwLock<Document>>,
	path: Vec<String>,
}

impl ActivityStream {
	pub fn new() -> Self {
		ActivityStream::default()
	}

	pub fn from_value(value: Value) -> NotifyResult<Self> {
		match value {
			Value::Object(map) => Ok(ActivityStream::from_map(map)),
			_ => Err(NotifyError::NotAnObject),
		}
	}

	pub fn from_map(mut doc: Map<String, Value>) -> Self {
		let context = doc
			.remove("@context")
			.map(|ctx| Namespace::parse_context(&ctx))
			.unwrap_or_default();
		let mut stream = ActivityStream::new();
		{
			let mut root = stream.write();
			root.doc = doc;
		}
		for ns in context {
			stream.register_namespace(&ns);
		}
		stream
	}

	fn read(&self) -> RwLockReadGuard<'_, Document> {
		self.root.read().unwrap_or_else(PoisonError::into_inner)
	}

	fn write(&self) -> RwLockWriteGuard<'_, Document> {
		self.root.write().unwrap_or_else(PoisonError::into_inner)
	}

	fn with_doc<R>(&self, f: impl FnOnce(Option<&Map<String, Value>>) -> R) -> R {
		let root = self.read();
		let mut cur = Some(&root.doc);
		for key in &self.path {
			cur = cur.and_then(|m| m.get(key)).and_then(Value::as_object);
		}
		f(cur)
	}

	fn with_doc_mut<R>(&mut self, f: impl FnOnce(&mut Map<String, Value>) -> R) -> R {
		let mut root = self.write();
		let mut cur = &mut root.doc;
		for key in &self.path {
			let slot = cur.entry(key.clone()).or_insert_with(|| Value::Object(Map::new()));
			if !slot.is_object() {
				tracing::warn!("replacing non-object value at '{key}' to write nested properties");
				*slot = Value::Object(Map::new());
			}
			cur = match slot {
				Value::Object(map) => map,
				_ => unreachable!(),
			};
		}
		f(cur)
	}

	/// value stored under the property name, `null` counts as absent
	pub fn get(&self, property: &Property) -> Option<Value> {
		self.with_doc(|doc| doc?.get(property.name()).filter(|v| !v.is_null()).cloned())
	}

	pub fn contains(&self, property: &Property) -> bool {
		self.get(property).is_some()
	}

	/// stores the value, registering the property namespace into `@context` if it has one
	pub fn set(&mut self, property: &Property, value: Value) {
		if let Some(ns) = property.namespace() {
			self.register_namespace(ns);
		}
		self.with_doc_mut(|doc| doc.insert(property.name().to_string(), value));
	}

	pub fn remove(&mut self, property: &Property) -> Option<Value> {
		self.with_doc_mut(|doc| doc.remove(property.name()))
	}

	/// appends the namespace to `@context` unless already present, keeping first-seen order
	pub fn register_namespace(&mut self, namespace: &Namespace) {
		let mut root = self.write();
		if !root.context.contains(namespace) {
			root.context.push(namespace.clone());
		}
	}

	pub fn context(&self) -> Vec<Namespace> {
		self.read().context.clone()
	}

	/// copy of the wrapped document, without `@context`
	pub fn doc(&self) -> Map<String, Value> {
		self.with_doc(|doc| doc.cloned().unwrap_or_default())
	}

	pub fn to_jsonld(&self) -> Value {
		let context = self.context().iter().map(Namespace::to_value).collect();
		let mut out = Map::new();
		out.insert("@context".to_string(), Value::Array(context));
		out.extend(self.doc());
		Value::Object(out)
	}

	/// handle on the object stored at `key`, sharing this document
	pub fn view(&self, key: &str) -> ActivityStream {
		let mut path = self.path.clone();
		path.push(key.to_string());
		ActivityStream { root: self.root.clone(), path }
	}

	/// independent deep copy of the object stored at `key`, carrying this document's `@context`
	pub fn detached(&self, key: &str) -> Option<ActivityStream> {
		let sub = self.with_doc(|doc| doc?.get(key)?.as_object().cloned())?;
		let stream = ActivityStream::from_map(sub);
		{
			let mut root = stream.write();
			root.context = self.context();
		}
		Some(stream)
	}

	/// true if two handles point into the same document
	pub fn shares_document(&self, other: &ActivityStream) -> bool {
		Arc::ptr_eq(&self.root, &other.root)
	}
}

/// reads a `type`-like value as a list of tokens: a string becomes a single entry
pub fn string_list(value: &Value) -> Vec<String> {
	match value {
		Value::String(s) => vec![s.clone()],
		Value::Array(arr) => arr.iter().filter_map(Value::as_str).map(str::to_string).collect(),
		_ => Vec::new(),
	}
}

/// inverse of [`string_list`]: a single token is stored as a plain string
pub fn collapse(mut values: Vec<String>) -> Value {
	if values.len() == 1 {
		Value::String(values.remove(0))
	} else {
		Value::Array(values.into_iter().map(Value::String).collect())
	}
}
