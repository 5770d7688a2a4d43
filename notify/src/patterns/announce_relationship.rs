use crate::{
	getter, notify_class, part,
	part::NotifyItem,
	pattern::Pattern,
	property::{CONTEXT, MEDIA_TYPE, OBJECT, OBJECT_TRIPLE, RELATIONSHIP_TRIPLE, SUBJECT_TRIPLE, TYPE},
	types::{ActivityStreamsType, NotifyType},
	Base, Kind, Notify, NotifyBase, ValidationError,
};

const ANNOUNCE_RELATIONSHIP: &[&str] = &[ActivityStreamsType::Announce.as_str(), NotifyType::RelationshipAction.as_str()];

/// Announces a relationship between two resources, stated as a triple in `object`
#[derive(Debug)]
pub struct AnnounceRelationship {
	base: NotifyBase,
}

notify_class!(AnnounceRelationship, Kind::pattern(ANNOUNCE_RELATIONSHIP));

impl AnnounceRelationship {
	getter! { pub object -> part AnnounceRelationshipObject, OBJECT }
	getter! { pub context -> part AnnounceRelationshipContext, CONTEXT }
}

impl Pattern for AnnounceRelationship {
	fn object_part(&self) -> Option<Box<dyn Notify>> {
		self.object().map(|o| Box::new(o) as Box<dyn Notify>)
	}

	fn context_part(&self) -> Option<Box<dyn Notify>> {
		self.context().map(|c| Box::new(c) as Box<dyn Notify>)
	}
}

impl Notify for AnnounceRelationship {
	fn validate_into(&self, acc: &mut ValidationError) {
		self.validate_pattern(acc);
		if !self.base().stream().contains(&CONTEXT) {
			self.base().required_nested::<AnnounceRelationshipContext>(acc, &CONTEXT, None);
		}
	}
}

part! {
	pub struct AnnounceRelationshipObject : Object<NotifyItem> {
		validates: [],
		requires: [TYPE, SUBJECT_TRIPLE, RELATIONSHIP_TRIPLE, OBJECT_TRIPLE],
	}
}

part! {
	pub struct AnnounceRelationshipContext : Object<AnnounceRelationshipItem> {
		validates: [TYPE],
		requires: [],
	}
}

part! {
	pub struct AnnounceRelationshipItem : Item {
		validates: [],
		requires: [TYPE, MEDIA_TYPE],
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{fixtures, part::{Object, Triple}, NotifyClass, NotifyOptions};

	#[test]
	fn triple_is_read_from_object() {
		let announce = AnnounceRelationship::from_value(fixtures::announce_relationship(), NotifyOptions::default())
			.expect("valid fixture");
		let triple = announce.object().expect("object present").triple();
		assert_eq!(triple, Triple {
			subject: Some("https://research-organisation.org/repository/item/201203/421/".into()),
			relationship: Some("http://purl.org/vocab/frbr/core#supplement".into()),
			object: Some("https://another-research-organisation.org/repository/datasets/item/201203421/".into()),
		});
	}

	#[test]
	fn every_triple_component_is_required() {
		let mut doc = fixtures::announce_relationship();
		doc["object"].as_object_mut().expect("object").remove("as:relationship");
		let err = AnnounceRelationship::from_value(doc, NotifyOptions::default()).expect_err("incomplete triple");
		let object = err.validation().and_then(|v| v.get(&OBJECT)).expect("errors under object");
		assert_eq!(object.nested.keys().collect::<Vec<_>>(), vec![&RELATIONSHIP_TRIPLE]);
	}

	#[test]
	fn triple_components_must_be_uris() {
		let announce = AnnounceRelationship::from_value(fixtures::announce_relationship(), NotifyOptions::default())
			.expect("valid fixture");
		let mut object = announce.object().expect("object present");
		assert!(object.set_triple("not a uri", "https://example.org/rel", "https://example.org/o").is_err());
		object
			.set_triple("https://example.org/s", "https://example.org/rel", "https://example.org/o")
			.expect("valid uris");
		assert_eq!(announce.object().expect("object present").triple().subject.as_deref(), Some("https://example.org/s"));
	}
}
