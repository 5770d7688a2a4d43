use crate::{
	notify_class,
	pattern::{NestedPatternObject, Pattern, Summary},
	types::ActivityStreamsType,
	Kind, Notify, NotifyBase, ValidationError,
};

const TENTATIVE_ACCEPT: &[&str] = &[ActivityStreamsType::TentativeAccept.as_str()];

/// Provisional acceptance, usually pending conditions described in `summary`
#[derive(Debug)]
pub struct TentativelyAccept {
	base: NotifyBase,
}

notify_class!(TentativelyAccept, Kind::pattern(TENTATIVE_ACCEPT));

impl NestedPatternObject for TentativelyAccept {}
impl Summary for TentativelyAccept {}

impl Pattern for TentativelyAccept {
	fn object_part(&self) -> Option<Box<dyn Notify>> {
		NestedPatternObject::object(self).map(|o| Box::new(o) as Box<dyn Notify>)
	}
}

impl Notify for TentativelyAccept {
	fn validate_into(&self, acc: &mut ValidationError) {
		self.validate_pattern(acc);
		self.validate_reply_identity(acc);
	}
}
