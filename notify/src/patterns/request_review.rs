use crate::{
	getter, notify_class, part,
	pattern::Pattern,
	property::{MEDIA_TYPE, OBJECT, TYPE},
	types::{ActivityStreamsType, NotifyType},
	Kind, Notify, NotifyBase, ValidationError,
};

const OFFER_REVIEW: &[&str] = &[ActivityStreamsType::Offer.as_str(), NotifyType::ReviewAction.as_str()];

/// Asks a review service to review the resource described by `object`
#[derive(Debug)]
pub struct RequestReview {
	base: NotifyBase,
}

notify_class!(RequestReview, Kind::pattern(OFFER_REVIEW));

impl RequestReview {
	getter! { pub object -> part RequestReviewObject, OBJECT }
}

impl Pattern for RequestReview {
	fn object_part(&self) -> Option<Box<dyn Notify>> {
		self.object().map(|o| Box::new(o) as Box<dyn Notify>)
	}
}

impl Notify for RequestReview {
	fn validate_into(&self, acc: &mut ValidationError) {
		self.validate_pattern(acc);
	}
}

part! {
	pub struct RequestReviewObject : Object<RequestReviewItem> {
		validates: [TYPE],
		requires: [],
	}
}

part! {
	pub struct RequestReviewItem : Item {
		validates: [],
		requires: [TYPE, MEDIA_TYPE],
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{
		fixtures,
		part::{Item, NotifyItem, NotifyObject, NotifyService, Object, Service},
		property::{ID, ITEM},
		NotifyClass, NotifyOptions,
	};

	#[test]
	fn item_needs_type_and_media_type() {
		let offer = RequestReview::from_value(fixtures::request_review(), NotifyOptions::default()).expect("valid fixture");
		let item = offer.object().and_then(|o| o.item()).expect("item present");
		assert_eq!(item.media_type().as_deref(), Some("application/pdf"));

		let mut doc = fixtures::request_review();
		doc["object"]["ietf:item"].as_object_mut().expect("item object").remove("mediaType");
		let err = RequestReview::from_value(doc, NotifyOptions::default()).expect_err("missing mediaType");
		let object = err.validation().and_then(|v| v.get(&OBJECT)).expect("errors under object");
		assert!(object.nested.get(&ITEM).expect("errors under item").nested.contains_key(&MEDIA_TYPE));
	}

	#[test]
	fn build_from_parts() {
		let mut origin = NotifyService::new();
		origin.set_id("https://research-organisation.org/repository").expect("valid url");
		origin.set_inbox("https://research-organisation.org/inbox/").expect("valid url");

		let mut target = NotifyService::new();
		target.set_id("https://review-service.com/system").expect("valid url");
		target.set_inbox("https://review-service.com/inbox/").expect("valid url");

		let mut item = NotifyItem::new();
		item.set_id("https://research-organisation.org/repository/preprint/201203/421/content.pdf").expect("valid uri");
		item.set_type(&["Article", "sorg:ScholarlyArticle"]).expect("no allowed types on items");
		item.set_media_type("application/pdf").expect("no rule on mediaType");

		let mut object = NotifyObject::new();
		object.set_id("https://research-organisation.org/repository/preprint/201203/421/").expect("valid uri");
		object.set_type(&["Page", "sorg:AboutPage"]).expect("no allowed types on objects");
		object.set_cite_as("https://doi.org/10.5555/12345680").expect("valid url");
		object.set_item(&item).expect("no rule on item");

		let mut offer = RequestReview::new();
		offer.set_origin(&origin).expect("no rule on origin");
		offer.set_target(&target).expect("no rule on target");
		offer.set_object(&object).expect("no rule on object");

		offer.validate().expect("assembled offer is valid");
		assert_eq!(offer.origin().and_then(|o| o.inbox()).as_deref(), Some("https://research-organisation.org/inbox/"));
		assert_eq!(offer.object().and_then(|o| o.cite_as()).as_deref(), Some("https://doi.org/10.5555/12345680"));
		assert_eq!(offer.types(), vec!["Offer", "coar-notify:ReviewAction"]);
		let doc = offer.to_jsonld();
		assert_eq!(doc["@context"], serde_json::json!([crate::property::ACTIVITY_STREAMS_NAMESPACE, crate::property::COAR_NOTIFY_NAMESPACE]));
		assert!(doc["object"]["ietf:item"][ID.name()].is_string());
	}
}
