use crate::{part, property::TYPE};

part! {
	pub struct NotifyItem : Item {
		validates: [TYPE],
		requires: [],
	}
}
