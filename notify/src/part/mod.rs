//! Pattern parts: the nested objects a notification is made of.

mod actor;
mod item;
mod object;
mod service;

pub use actor::NotifyActor;
pub use item::NotifyItem;
pub use object::NotifyObject;
pub use service::NotifyService;

use crate::{
	getter,
	property::{CITE_AS, INBOX, ITEM, MEDIA_TYPE, NAME, OBJECT_TRIPLE, RELATIONSHIP_TRIPLE, SUBJECT_TRIPLE},
	setter, Notify, NotifyClass, ValueError,
};

/// `origin` and `target`: a system able to send or receive notifications
pub trait Service: Notify {
	getter! { inbox -> &str INBOX }
	setter! { inbox -> &str INBOX }
}

pub trait Actor: Notify {
	getter! { name -> &str NAME }
	setter! { name -> &str NAME }
}

/// `as:subject`, `as:relationship`, `as:object` of an asserted relationship
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Triple {
	pub subject: Option<String>,
	pub relationship: Option<String>,
	pub object: Option<String>,
}

/// `object` or `context` of a pattern: the resource the notification is about
pub trait Object: Notify {
	type Item: Item + NotifyClass;

	fn item(&self) -> Option<Self::Item> {
		self.base().nested::<Self::Item>(&ITEM)
	}

	setter! { item -> part ITEM }

	getter! { cite_as -> &str CITE_AS }
	setter! { cite_as -> &str CITE_AS }

	fn triple(&self) -> Triple {
		Triple {
			subject: self.base().get_string(&SUBJECT_TRIPLE),
			relationship: self.base().get_string(&RELATIONSHIP_TRIPLE),
			object: self.base().get_string(&OBJECT_TRIPLE),
		}
	}

	/// each component is validated as it is stored, stopping at the first bad one
	fn set_triple(&mut self, subject: &str, relationship: &str, object: &str) -> Result<(), ValueError> {
		let base = self.base_mut();
		base.set_property(&SUBJECT_TRIPLE, subject.into())?;
		base.set_property(&RELATIONSHIP_TRIPLE, relationship.into())?;
		base.set_property(&OBJECT_TRIPLE, object.into())?;
		Ok(())
	}
}

/// `ietf:item` of an object: a concrete rendition of the resource
pub trait Item: Notify {
	getter! { media_type -> &str MEDIA_TYPE }
	setter! { media_type -> &str MEDIA_TYPE }
}
