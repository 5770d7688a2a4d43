use crate::{notify_class, types::ActivityStreamsType, Base, Kind, Notify, NotifyBase, ValidationError};

#[derive(Debug)]
pub struct NotifyService {
	base: NotifyBase,
}

notify_class!(NotifyService, Kind::part(Some(ActivityStreamsType::Service.as_str()), &[]));

impl super::Service for NotifyService {}

impl Notify for NotifyService {
	fn validate_into(&self, acc: &mut ValidationError) {
		self.base().validate_base(acc);
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{part::Service, property::ORIGIN, ActivityStream, NotifyClass, NotifyOptions};

	#[test]
	fn inbox_must_be_a_url() {
		let mut service = NotifyService::new();
		assert!(service.set_inbox("urn:uuid:abc").is_err());
		service.set_inbox("https://overlay-journal.com/inbox/").expect("valid url");
		assert_eq!(service.inbox().as_deref(), Some("https://overlay-journal.com/inbox/"));
	}

	#[test]
	fn id_must_be_a_url_under_origin() {
		let stream = ActivityStream::from_value(serde_json::json!({ "id": "urn:uuid:abc", "type": "Service" })).expect("object");
		let options = NotifyOptions::default();
		assert!(NotifyService::from_stream(stream.clone(), options.clone(), None).is_ok());
		let err = NotifyService::from_stream(stream, options, Some(ORIGIN)).expect_err("urn is not a url");
		assert!(err.validation().is_some_and(|v| v.contains(&crate::property::ID)));
	}
}
