use crate::{
	notify_class,
	pattern::{NestedPatternObject, Pattern},
	types::ActivityStreamsType,
	Kind, Notify, NotifyBase, ValidationError,
};

const ACCEPT: &[&str] = &[ActivityStreamsType::Accept.as_str()];

/// Acceptance of a previously received request. `inReplyTo` must name the accepted notification,
/// which is carried in full as `object`.
#[derive(Debug)]
pub struct Accept {
	base: NotifyBase,
}

notify_class!(Accept, Kind::pattern(ACCEPT));

impl NestedPatternObject for Accept {}

impl Pattern for Accept {
	fn object_part(&self) -> Option<Box<dyn Notify>> {
		NestedPatternObject::object(self).map(|o| Box::new(o) as Box<dyn Notify>)
	}
}

impl Notify for Accept {
	fn validate_into(&self, acc: &mut ValidationError) {
		self.validate_pattern(acc);
		self.validate_reply_identity(acc);
	}
}
