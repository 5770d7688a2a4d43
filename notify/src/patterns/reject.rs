use crate::{
	notify_class,
	pattern::{NestedPatternObject, Pattern},
	types::ActivityStreamsType,
	Kind, Notify, NotifyBase, ValidationError,
};

const REJECT: &[&str] = &[ActivityStreamsType::Reject.as_str()];

/// Refusal of a previously received request. Unlike [`crate::patterns::Accept`], nothing ties
/// `inReplyTo` to the rejected notification.
#[derive(Debug)]
pub struct Reject {
	base: NotifyBase,
}

notify_class!(Reject, Kind::pattern(REJECT));

impl NestedPatternObject for Reject {}

impl Pattern for Reject {
	fn object_part(&self) -> Option<Box<dyn Notify>> {
		NestedPatternObject::object(self).map(|o| Box::new(o) as Box<dyn Notify>)
	}
}

impl Notify for Reject {
	fn validate_into(&self, acc: &mut ValidationError) {
		self.validate_pattern(acc);
	}
}
