use std::{any::TypeId, collections::BTreeSet};

use serde_json::Value;

use crate::{
	patterns::{
		Accept, AnnounceEndorsement, AnnounceRelationship, AnnounceReview, AnnounceServiceResult, Reject,
		RequestEndorsement, RequestReview, TentativelyAccept, TentativelyReject, UndoOffer, UnprocessableNotification,
	},
	property::TYPE,
	stream::string_list,
	ActivityStream, NotifyClass, NotifyError, NotifyOptions, NotifyResult, Pattern, Property,
};

pub type PatternBuilder = fn(ActivityStream, NotifyOptions, Option<Property>) -> NotifyResult<Box<dyn Pattern>>;

fn build<P: Pattern + NotifyClass>(stream: ActivityStream, options: NotifyOptions, context: Option<Property>) -> NotifyResult<Box<dyn Pattern>> {
	Ok(Box::new(P::from_stream(stream, options, context)?))
}

#[derive(Clone)]
pub struct PatternEntry {
	pub name: &'static str,
	pub types: BTreeSet<&'static str>,
	pub type_id: TypeId,
	pub build: PatternBuilder,
}

impl PatternEntry {
	pub fn of<P: Pattern + NotifyClass>() -> Self {
		let full = std::any::type_name::<P>();
		PatternEntry {
			name: full.rsplit("::").next().unwrap_or(full),
			types: P::KIND.type_constant.iter().copied().collect(),
			type_id: TypeId::of::<P>(),
			build: build::<P>,
		}
	}

	pub fn is<P: 'static>(&self) -> bool {
		self.type_id == TypeId::of::<P>()
	}
}

impl std::fmt::Debug for PatternEntry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("PatternEntry")
			.field("name", &self.name)
			.field("types", &self.types)
			.finish_non_exhaustive()
	}
}

/// Resolves incoming documents to the pattern that best explains their `type`
#[derive(Debug, Clone)]
pub struct Registry {
	entries: Vec<PatternEntry>,
}

impl Default for Registry {
	fn default() -> Self {
		let mut registry = Registry::empty();
		registry.register::<Accept>();
		registry.register::<AnnounceEndorsement>();
		registry.register::<AnnounceRelationship>();
		registry.register::<AnnounceReview>();
		registry.register::<AnnounceServiceResult>();
		registry.register::<Reject>();
		registry.register::<RequestEndorsement>();
		registry.register::<RequestReview>();
		registry.register::<TentativelyAccept>();
		registry.register::<TentativelyReject>();
		registry.register::<UnprocessableNotification>();
		registry.register::<UndoOffer>();
		registry
	}
}

impl Registry {
	pub fn empty() -> Self {
		Registry { entries: Vec::new() }
	}

	/// adds `P`, replacing whatever was registered for the same set of types
	pub fn register<P: Pattern + NotifyClass>(&mut self) {
		let entry = PatternEntry::of::<P>();
		match self.entries.iter_mut().find(|e| e.types == entry.types) {
			Some(existing) => {
				tracing::debug!("pattern {} replaces {} for types {:?}", entry.name, existing.name, entry.types);
				*existing = entry;
			},
			None => self.entries.push(entry),
		}
	}

	pub fn deregister<P: 'static>(&mut self) {
		self.entries.retain(|e| !e.is::<P>());
	}

	pub fn patterns(&self) -> impl Iterator<Item = &PatternEntry> {
		self.entries.iter()
	}

	/// most specific pattern whose types are all among `types`; ties go to the first registered
	pub fn get_by_types<S: AsRef<str>>(&self, types: &[S]) -> Option<&PatternEntry> {
		let incoming: BTreeSet<&str> = types.iter().map(AsRef::as_ref).collect();
		let mut best: Option<(&PatternEntry, usize)> = None;
		for entry in &self.entries {
			if !entry.types.iter().all(|t| incoming.contains(t)) {
				continue;
			}
			let diff = incoming.len() - entry.types.len();
			if diff == 0 {
				return Some(entry);
			}
			if best.map_or(true, |(_, d)| diff < d) {
				best = Some((entry, diff));
			}
		}
		best.map(|(entry, _)| entry)
	}

	/// resolves and builds the pattern for a whole document
	pub fn get_by_object(&self, document: Value, options: NotifyOptions) -> NotifyResult<Box<dyn Pattern>> {
		let stream = ActivityStream::from_value(document)?;
		let types = stream.get(&TYPE).map(|t| string_list(&t)).unwrap_or_default();
		if types.is_empty() {
			return Err(NotifyError::NoType);
		}
		let Some(entry) = self.get_by_types(&types) else {
			return Err(NotifyError::NoMatchingPattern(types));
		};
		tracing::debug!("resolved {types:?} to {}", entry.name);
		(entry.build)(stream, options, None)
	}
}
