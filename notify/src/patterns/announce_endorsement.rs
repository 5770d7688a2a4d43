use crate::{
	getter, notify_class, part,
	part::NotifyObject,
	pattern::Pattern,
	property::{CONTEXT, MEDIA_TYPE, OBJECT, TYPE},
	types::{ActivityStreamsType, NotifyType},
	Base, Kind, Notify, NotifyBase, ValidationError,
};

const ANNOUNCE_ENDORSEMENT: &[&str] = &[ActivityStreamsType::Announce.as_str(), NotifyType::EndorsementAction.as_str()];

/// Announces that the resource in `context` has been endorsed; `object` is the endorsement itself
#[derive(Debug)]
pub struct AnnounceEndorsement {
	base: NotifyBase,
}

notify_class!(AnnounceEndorsement, Kind::pattern(ANNOUNCE_ENDORSEMENT));

impl AnnounceEndorsement {
	getter! { pub object -> part NotifyObject, OBJECT }
	getter! { pub context -> part AnnounceEndorsementContext, CONTEXT }
}

impl Pattern for AnnounceEndorsement {
	fn context_part(&self) -> Option<Box<dyn Notify>> {
		self.context().map(|c| Box::new(c) as Box<dyn Notify>)
	}
}

impl Notify for AnnounceEndorsement {
	fn validate_into(&self, acc: &mut ValidationError) {
		self.validate_pattern(acc);
		if !self.base().stream().contains(&CONTEXT) {
			self.base().required_nested::<AnnounceEndorsementContext>(acc, &CONTEXT, None);
		}
	}
}

part! {
	pub struct AnnounceEndorsementContext : Object<AnnounceEndorsementItem> {
		validates: [TYPE],
		requires: [],
	}
}

part! {
	pub struct AnnounceEndorsementItem : Item {
		validates: [],
		requires: [TYPE, MEDIA_TYPE],
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{fixtures, part::Object, NotifyClass, NotifyOptions};

	#[test]
	fn context_is_required() {
		let mut announce = AnnounceEndorsement::from_value(fixtures::announce_endorsement(), NotifyOptions::default())
			.expect("valid fixture");
		assert_eq!(
			announce.context().and_then(|c| c.cite_as()).as_deref(),
			Some("https://doi.org/10.5555/12345680")
		);
		announce.base_mut().remove_property(&CONTEXT);
		let err = announce.validate().expect_err("context missing");
		assert_eq!(err.get(&CONTEXT).expect("keyed on context").errors, vec!["`context` is a required field"]);
	}

	#[test]
	fn context_item_needs_media_type() {
		let mut doc = fixtures::announce_endorsement();
		doc["context"]["ietf:item"].as_object_mut().expect("item object").remove("mediaType");
		let err = AnnounceEndorsement::from_value(doc, NotifyOptions::default()).expect_err("missing mediaType");
		let context = err.validation().and_then(|v| v.get(&CONTEXT)).expect("errors under context");
		assert!(context.errors.is_empty());
		assert!(!context.nested.is_empty());
	}
}
