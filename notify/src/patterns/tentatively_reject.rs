use crate::{
	notify_class,
	pattern::{NestedPatternObject, Pattern, Summary},
	types::ActivityStreamsType,
	Kind, Notify, NotifyBase, ValidationError,
};

const TENTATIVE_REJECT: &[&str] = &[ActivityStreamsType::TentativeReject.as_str()];

/// Provisional refusal: the request may be resubmitted after changes described in `summary`
#[derive(Debug)]
pub struct TentativelyReject {
	base: NotifyBase,
}

notify_class!(TentativelyReject, Kind::pattern(TENTATIVE_REJECT));

impl NestedPatternObject for TentativelyReject {}
impl Summary for TentativelyReject {}

impl Pattern for TentativelyReject {
	fn object_part(&self) -> Option<Box<dyn Notify>> {
		NestedPatternObject::object(self).map(|o| Box::new(o) as Box<dyn Notify>)
	}
}

impl Notify for TentativelyReject {
	fn validate_into(&self, acc: &mut ValidationError) {
		self.validate_pattern(acc);
		self.validate_reply_identity(acc);
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{fixtures, patterns::RequestReview, NotifyClass, NotifyOptions};

	#[test]
	fn nested_offer_is_the_rejected_request() {
		let tentative = TentativelyReject::from_value(fixtures::tentatively_reject(), NotifyOptions::default())
			.expect("valid fixture");
		let object = NestedPatternObject::object(&tentative).expect("object present");
		assert!(object.downcast_ref::<RequestReview>().is_some());
		assert_eq!(tentative.object_id(), tentative.in_reply_to());
	}
}
