use crate::{
	getter, notify_class, part,
	part::NotifyItem,
	pattern::Pattern,
	property::{CONTEXT, MEDIA_TYPE, OBJECT, TYPE},
	types::{ActivityStreamsType, NotifyType},
	Base, Kind, Notify, NotifyBase, ValidationError,
};

const ANNOUNCE_REVIEW: &[&str] = &[ActivityStreamsType::Announce.as_str(), NotifyType::ReviewAction.as_str()];

/// Announces a review (`object`) of the resource in `context`
#[derive(Debug)]
pub struct AnnounceReview {
	base: NotifyBase,
}

notify_class!(AnnounceReview, Kind::pattern(ANNOUNCE_REVIEW));

impl AnnounceReview {
	getter! { pub object -> part AnnounceReviewObject, OBJECT }
	getter! { pub context -> part AnnounceReviewContext, CONTEXT }
}

impl Pattern for AnnounceReview {
	fn object_part(&self) -> Option<Box<dyn Notify>> {
		self.object().map(|o| Box::new(o) as Box<dyn Notify>)
	}

	fn context_part(&self) -> Option<Box<dyn Notify>> {
		self.context().map(|c| Box::new(c) as Box<dyn Notify>)
	}
}

impl Notify for AnnounceReview {
	fn validate_into(&self, acc: &mut ValidationError) {
		self.validate_pattern(acc);
		if !self.base().stream().contains(&CONTEXT) {
			self.base().required_nested::<AnnounceReviewContext>(acc, &CONTEXT, None);
		}
	}
}

part! {
	/// The review being announced
	pub struct AnnounceReviewObject : Object<NotifyItem> {
		validates: [],
		requires: [TYPE],
	}
}

part! {
	pub struct AnnounceReviewContext : Object<AnnounceReviewItem> {
		validates: [TYPE],
		requires: [],
	}
}

part! {
	pub struct AnnounceReviewItem : Item {
		validates: [],
		requires: [TYPE, MEDIA_TYPE],
	}
}
