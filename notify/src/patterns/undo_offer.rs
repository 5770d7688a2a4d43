use crate::{
	notify_class,
	pattern::{NestedPatternObject, Pattern, Summary},
	types::ActivityStreamsType,
	Kind, Notify, NotifyBase, ValidationError,
};

const UNDO: &[&str] = &[ActivityStreamsType::Undo.as_str()];

/// Withdrawal of an offer sent earlier
#[derive(Debug)]
pub struct UndoOffer {
	base: NotifyBase,
}

notify_class!(UndoOffer, Kind::pattern(UNDO));

impl NestedPatternObject for UndoOffer {}
impl Summary for UndoOffer {}

impl Pattern for UndoOffer {
	fn object_part(&self) -> Option<Box<dyn Notify>> {
		NestedPatternObject::object(self).map(|o| Box::new(o) as Box<dyn Notify>)
	}
}

impl Notify for UndoOffer {
	fn validate_into(&self, acc: &mut ValidationError) {
		self.validate_pattern(acc);
		self.validate_reply_identity(acc);
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{fixtures, property::IN_REPLY_TO, NotifyClass, NotifyOptions};

	#[test]
	fn withdrawn_offer_must_be_the_one_replied_to() {
		let mut undo = UndoOffer::from_value(fixtures::undo_offer(), NotifyOptions::default()).expect("valid fixture");
		assert!(undo.validate().is_ok());
		undo.set_in_reply_to("https://example.org/other").expect("absolute uri");
		let err = undo.validate().expect_err("ids differ");
		assert!(err.get(&IN_REPLY_TO).expect("keyed on inReplyTo").errors[0].contains("https://example.org/other"));
	}
}
