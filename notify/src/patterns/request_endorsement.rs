use crate::{
	getter, notify_class, part,
	pattern::Pattern,
	property::{MEDIA_TYPE, OBJECT, TYPE},
	types::{ActivityStreamsType, NotifyType},
	Kind, Notify, NotifyBase, ValidationError,
};

const OFFER_ENDORSEMENT: &[&str] = &[ActivityStreamsType::Offer.as_str(), NotifyType::EndorsementAction.as_str()];

/// Asks an overlay service to endorse the resource described by `object`
#[derive(Debug)]
pub struct RequestEndorsement {
	base: NotifyBase,
}

notify_class!(RequestEndorsement, Kind::pattern(OFFER_ENDORSEMENT));

impl RequestEndorsement {
	getter! { pub object -> part RequestEndorsementObject, OBJECT }
}

impl Pattern for RequestEndorsement {
	fn object_part(&self) -> Option<Box<dyn Notify>> {
		self.object().map(|o| Box::new(o) as Box<dyn Notify>)
	}
}

impl Notify for RequestEndorsement {
	fn validate_into(&self, acc: &mut ValidationError) {
		self.validate_pattern(acc);
	}
}

part! {
	pub struct RequestEndorsementObject : Object<RequestEndorsementItem> {
		validates: [TYPE],
		requires: [],
	}
}

part! {
	pub struct RequestEndorsementItem : Item {
		validates: [],
		requires: [TYPE, MEDIA_TYPE],
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{fixtures, part::{Item, Object}, NotifyClass, NotifyOptions, PropertiesBy};

	#[test]
	fn item_is_specialised() {
		let offer = RequestEndorsement::from_value(fixtures::request_endorsement(), NotifyOptions::default())
			.expect("valid fixture");
		let item: RequestEndorsementItem = offer.object().and_then(|o| o.item()).expect("item present");
		assert_eq!(item.media_type().as_deref(), Some("application/pdf"));
	}

	#[test]
	fn copies_do_not_write_back() {
		let options = NotifyOptions { properties_by: PropertiesBy::Value, ..Default::default() };
		let offer = RequestEndorsement::from_value(fixtures::request_endorsement(), options).expect("valid fixture");
		let mut object = offer.object().expect("object present");
		object.set_cite_as("https://doi.org/10.5555/00000000").expect("valid url");
		assert_eq!(offer.object().and_then(|o| o.cite_as()).as_deref(), Some("https://doi.org/10.5555/12345680"));
	}
}
