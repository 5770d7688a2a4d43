use crate::{
	getter, notify_class, part,
	part::NotifyItem,
	pattern::Pattern,
	property::{CONTEXT, MEDIA_TYPE, OBJECT, TYPE},
	types::ActivityStreamsType,
	Base, Kind, Notify, NotifyBase, ValidationError,
};

const ANNOUNCE: &[&str] = &[ActivityStreamsType::Announce.as_str()];

/// Announces the outcome of some service applied to the resource in `context`
#[derive(Debug)]
pub struct AnnounceServiceResult {
	base: NotifyBase,
}

notify_class!(AnnounceServiceResult, Kind::pattern(ANNOUNCE));

impl AnnounceServiceResult {
	getter! { pub object -> part AnnounceServiceResultObject, OBJECT }
	getter! { pub context -> part AnnounceServiceResultContext, CONTEXT }
}

impl Pattern for AnnounceServiceResult {
	fn object_part(&self) -> Option<Box<dyn Notify>> {
		self.object().map(|o| Box::new(o) as Box<dyn Notify>)
	}

	fn context_part(&self) -> Option<Box<dyn Notify>> {
		self.context().map(|c| Box::new(c) as Box<dyn Notify>)
	}
}

impl Notify for AnnounceServiceResult {
	fn validate_into(&self, acc: &mut ValidationError) {
		self.validate_pattern(acc);
		if !self.base().stream().contains(&CONTEXT) {
			self.base().required_nested::<AnnounceServiceResultContext>(acc, &CONTEXT, None);
		}
	}
}

part! {
	pub struct AnnounceServiceResultObject : Object<NotifyItem> {
		validates: [],
		requires: [TYPE],
	}
}

part! {
	pub struct AnnounceServiceResultContext : Object<AnnounceServiceResultItem> {
		validates: [TYPE],
		requires: [],
	}
}

part! {
	pub struct AnnounceServiceResultItem : Item {
		validates: [],
		requires: [TYPE, MEDIA_TYPE],
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{fixtures, NotifyClass, NotifyOptions};

	#[test]
	fn context_id_must_be_a_url() {
		let mut doc = fixtures::announce_service_result();
		doc["context"]["id"] = serde_json::json!("urn:uuid:0370c0fb-bb78-4a9b-87f5-bed307a509dd");
		let err = AnnounceServiceResult::from_value(doc, NotifyOptions::default()).expect_err("urn is not a url");
		let context = err.validation().and_then(|v| v.get(&CONTEXT)).expect("errors under context");
		assert!(context.nested.contains_key(&crate::property::ID));
	}
}
