use crate::{part, property::TYPE};

use super::NotifyItem;

part! {
	/// Object or context with no pattern-specific constraints
	pub struct NotifyObject : Object<NotifyItem> {
		validates: [TYPE],
		requires: [],
	}
}
