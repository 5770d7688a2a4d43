use crate::strenum;

strenum! {
	pub enum ActivityStreamsType {
		Accept,
		Activity,
		Add,
		Announce,
		Application,
		Arrive,
		Article,
		Audio,
		Block,
		Collection,
		CollectionPage,
		Create,
		Delete,
		Dislike,
		Document,
		Event,
		Flag,
		Follow,
		Group,
		Ignore,
		Image,
		IntransitiveActivity,
		Invite,
		Join,
		Leave,
		Like,
		Link,
		Listen,
		Mention,
		Move,
		Note,
		Object,
		Offer,
		OrderedCollection,
		OrderedCollectionPage,
		Organization,
		Page,
		Person,
		Place,
		Profile,
		Question,
		Read,
		Reject,
		Relationship,
		Remove,
		Service,
		TentativeAccept,
		TentativeReject,
		Tombstone,
		Travel,
		Undo,
		Update,
		Video,
		View,
	};

	pub enum NotifyType {
		EndorsementAction = "coar-notify:EndorsementAction",
		IngestAction = "coar-notify:IngestAction",
		RelationshipAction = "coar-notify:RelationshipAction",
		ReviewAction = "coar-notify:ReviewAction",
		UnprocessableNotification = "coar-notify:UnprocessableNotification",
	};

	pub enum SchemaOrgType {
		AboutPage = "sorg:AboutPage",
		Dataset = "sorg:Dataset",
		Review = "sorg:Review",
		ScholarlyArticle = "sorg:ScholarlyArticle",
		WebPage = "sorg:WebPage",
	};
}

/// types an actor may declare: the only closed enumeration in the protocol
pub const ACTOR_TYPES: &[&str] = &[
	ActivityStreamsType::Service.as_str(),
	ActivityStreamsType::Application.as_str(),
	ActivityStreamsType::Group.as_str(),
	ActivityStreamsType::Organization.as_str(),
	ActivityStreamsType::Person.as_str(),
];
