use crate::{
	notify_class,
	pattern::{Pattern, Summary},
	property::{IN_REPLY_TO, SUMMARY},
	types::{ActivityStreamsType, NotifyType},
	Base, Kind, Notify, NotifyBase, ValidationError,
};

const UNPROCESSABLE: &[&str] = &[
	ActivityStreamsType::Flag.as_str(),
	NotifyType::UnprocessableNotification.as_str(),
];

/// Sent back when a received notification could not be processed; `summary` says why
#[derive(Debug)]
pub struct UnprocessableNotification {
	base: NotifyBase,
}

notify_class!(UnprocessableNotification, Kind::pattern(UNPROCESSABLE));

impl Pattern for UnprocessableNotification {}
impl Summary for UnprocessableNotification {}

impl Notify for UnprocessableNotification {
	fn validate_into(&self, acc: &mut ValidationError) {
		self.validate_pattern(acc);
		let base = self.base();
		base.required_and_validate(acc, &IN_REPLY_TO, base.get_property(&IN_REPLY_TO).as_ref());
		base.required_and_validate(acc, &SUMMARY, base.get_property(&SUMMARY).as_ref());
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{fixtures, NotifyClass, NotifyOptions};

	#[test]
	fn summary_and_in_reply_to_are_required() {
		let mut flag = UnprocessableNotification::from_value(fixtures::unprocessable_notification(), NotifyOptions::default())
			.expect("valid fixture");
		flag.base_mut().remove_property(&SUMMARY);
		flag.base_mut().remove_property(&IN_REPLY_TO);
		let err = flag.validate().expect_err("both missing");
		assert!(err.contains(&SUMMARY));
		assert!(err.contains(&IN_REPLY_TO));
		assert_eq!(err.errors().len(), 2);
	}

	#[test]
	fn in_reply_to_need_not_match_object() {
		let mut flag = UnprocessableNotification::from_value(fixtures::unprocessable_notification(), NotifyOptions::default())
			.expect("valid fixture");
		flag.set_in_reply_to("urn:uuid:00000000-0000-0000-0000-000000000000").expect("absolute uri");
		flag.set_summary("Unable to process URL: http://www.example.com/broken").expect("no rule on summary");
		assert!(flag.validate().is_ok());
	}
}
