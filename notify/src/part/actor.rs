use crate::{notify_class, types::{ActivityStreamsType, ACTOR_TYPES}, Base, Kind, Notify, NotifyBase, ValidationError};

/// Party responsible for a notification; its type is restricted to [`ACTOR_TYPES`]
#[derive(Debug)]
pub struct NotifyActor {
	base: NotifyBase,
}

notify_class!(NotifyActor, Kind::part(Some(ActivityStreamsType::Service.as_str()), ACTOR_TYPES));

impl super::Actor for NotifyActor {}

impl Notify for NotifyActor {
	fn validate_into(&self, acc: &mut ValidationError) {
		self.base().validate_base(acc);
	}
}
