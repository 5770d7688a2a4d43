//! Canonical notifications for every pattern, after the COAR Notify 1.0.1 examples.
//!
//! Object, context and item types always carry an ActivityStreams token next to the schema.org
//! one, as nested types are checked against the ActivityStreams vocabulary.

use serde_json::{json, Value};

use crate::property::{ACTIVITY_STREAMS_NAMESPACE, COAR_NOTIFY_NAMESPACE};

pub const OFFER_ID: &str = "urn:uuid:0370c0fb-bb78-4a9b-87f5-bed307a509dd";
pub const ACCEPT_ID: &str = "urn:uuid:4fb3af44-d4f8-4226-9475-2d09c2d8d9e0";

fn context() -> Value {
	json!([ACTIVITY_STREAMS_NAMESPACE, COAR_NOTIFY_NAMESPACE])
}

fn repository() -> Value {
	json!({
		"id": "https://research-organisation.org/repository",
		"inbox": "https://research-organisation.org/inbox/",
		"type": "Service",
	})
}

fn journal() -> Value {
	json!({
		"id": "https://overlay-journal.com/system",
		"inbox": "https://overlay-journal.com/inbox/",
		"type": "Service",
	})
}

fn author() -> Value {
	json!({
		"id": "https://orcid.org/0000-0002-1825-0097",
		"name": "Josiah Carberry",
		"type": "Person",
	})
}

fn journal_actor() -> Value {
	json!({
		"id": "https://overlay-journal.com",
		"name": "Overlay Journal",
		"type": "Service",
	})
}

fn preprint() -> Value {
	json!({
		"id": "https://research-organisation.org/repository/preprint/201203/421/",
		"ietf:cite-as": "https://doi.org/10.5555/12345680",
		"ietf:item": {
			"id": "https://research-organisation.org/repository/preprint/201203/421/content.pdf",
			"mediaType": "application/pdf",
			"type": ["Article", "sorg:ScholarlyArticle"],
		},
		"type": ["Page", "sorg:AboutPage"],
	})
}

fn without_context(mut doc: Value) -> Value {
	if let Some(map) = doc.as_object_mut() {
		map.remove("@context");
	}
	doc
}

pub fn request_review() -> Value {
	json!({
		"@context": context(),
		"actor": author(),
		"id": OFFER_ID,
		"object": preprint(),
		"origin": repository(),
		"target": journal(),
		"type": ["Offer", "coar-notify:ReviewAction"],
	})
}

pub fn request_endorsement() -> Value {
	json!({
		"@context": context(),
		"actor": author(),
		"id": "urn:uuid:0370c0fb-bb78-4a9b-87f5-bed307a509de",
		"object": preprint(),
		"origin": repository(),
		"target": journal(),
		"type": ["Offer", "coar-notify:EndorsementAction"],
	})
}

pub fn accept() -> Value {
	json!({
		"@context": context(),
		"actor": journal_actor(),
		"id": ACCEPT_ID,
		"inReplyTo": OFFER_ID,
		"object": without_context(request_review()),
		"origin": journal(),
		"target": repository(),
		"type": "Accept",
	})
}

pub fn reject() -> Value {
	json!({
		"@context": context(),
		"actor": journal_actor(),
		"id": "urn:uuid:668f26e0-2c8d-4117-a0d2-ee713523bcb1",
		"inReplyTo": OFFER_ID,
		"object": without_context(request_review()),
		"origin": journal(),
		"target": repository(),
		"type": "Reject",
	})
}

pub fn tentatively_accept() -> Value {
	json!({
		"@context": context(),
		"actor": journal_actor(),
		"id": "urn:uuid:4fb3af44-d4f8-4226-9475-2d09c2d8d9e1",
		"inReplyTo": OFFER_ID,
		"object": without_context(request_review()),
		"origin": journal(),
		"summary": "The offer has been tentatively accepted, subject to further review.",
		"target": repository(),
		"type": "TentativeAccept",
	})
}

pub fn tentatively_reject() -> Value {
	json!({
		"@context": context(),
		"actor": journal_actor(),
		"id": "urn:uuid:4fb3af44-d4f8-4226-9475-2d09c2d8d9e2",
		"inReplyTo": OFFER_ID,
		"object": without_context(request_review()),
		"origin": journal(),
		"summary": "The offer has been tentatively rejected, subject to further review.",
		"target": repository(),
		"type": "TentativeReject",
	})
}

pub fn undo_offer() -> Value {
	json!({
		"@context": context(),
		"actor": author(),
		"id": "urn:uuid:46956915-e3fb-4520-8ae5-f2e11cc1b8c7",
		"inReplyTo": OFFER_ID,
		"object": without_context(request_review()),
		"origin": repository(),
		"summary": "The offer has been withdrawn because it was submitted in error.",
		"target": journal(),
		"type": "Undo",
	})
}

pub fn unprocessable_notification() -> Value {
	json!({
		"@context": context(),
		"actor": journal_actor(),
		"id": "urn:uuid:46956915-e3fb-4520-8ae5-f2e11cc1b8c8",
		"inReplyTo": OFFER_ID,
		"object": { "id": OFFER_ID },
		"origin": journal(),
		"summary": "Unable to process URL: http://www.example.com/broken",
		"target": repository(),
		"type": ["Flag", "coar-notify:UnprocessableNotification"],
	})
}

pub fn announce_endorsement() -> Value {
	json!({
		"@context": context(),
		"actor": journal_actor(),
		"context": preprint(),
		"id": "urn:uuid:94ecae35-dcfd-4182-8550-22c7164fe23f",
		"inReplyTo": "urn:uuid:0370c0fb-bb78-4a9b-87f5-bed307a509de",
		"object": {
			"id": "https://overlay-journal.com/articles/00001/",
			"ietf:cite-as": "https://overlay-journal.com/articles/00001/",
			"type": ["Page", "sorg:WebPage"],
		},
		"origin": journal(),
		"target": repository(),
		"type": ["Announce", "coar-notify:EndorsementAction"],
	})
}

pub fn announce_review() -> Value {
	json!({
		"@context": context(),
		"actor": journal_actor(),
		"context": preprint(),
		"id": "urn:uuid:94ecae35-dcfd-4182-8550-22c7164fe23e",
		"inReplyTo": OFFER_ID,
		"object": {
			"id": "https://review-service.com/review/geo/202103/0021",
			"ietf:cite-as": "https://doi.org/10.3214/987654",
			"type": ["Document", "sorg:Review"],
		},
		"origin": journal(),
		"target": repository(),
		"type": ["Announce", "coar-notify:ReviewAction"],
	})
}

pub fn announce_relationship() -> Value {
	json!({
		"@context": context(),
		"actor": author(),
		"context": {
			"id": "https://another-research-organisation.org/repository/datasets/item/201203421/",
			"ietf:cite-as": "https://doi.org/10.5555/999555666",
			"ietf:item": {
				"id": "https://another-research-organisation.org/repository/datasets/item/201203421/data_archive.zip",
				"mediaType": "application/zip",
				"type": ["Object", "sorg:Dataset"],
			},
			"type": ["Page", "sorg:AboutPage"],
		},
		"id": "urn:uuid:94ecae35-dcfd-4182-8550-22c7164fe24f",
		"object": {
			"as:object": "https://another-research-organisation.org/repository/datasets/item/201203421/",
			"as:relationship": "http://purl.org/vocab/frbr/core#supplement",
			"as:subject": "https://research-organisation.org/repository/item/201203/421/",
			"id": "urn:uuid:74FFB356-0632-44D9-B176-888DA85758DC",
			"type": "Relationship",
		},
		"origin": repository(),
		"target": {
			"id": "https://another-research-organisation.org/repository",
			"inbox": "https://another-research-organisation.org/inbox/",
			"type": "Service",
		},
		"type": ["Announce", "coar-notify:RelationshipAction"],
	})
}

pub fn announce_service_result() -> Value {
	json!({
		"@context": context(),
		"actor": journal_actor(),
		"context": {
			"id": "https://research-organisation.org/repository/preprint/201203/421/",
			"type": ["Page", "sorg:AboutPage"],
		},
		"id": "urn:uuid:94ecae35-dcfd-4182-8550-22c7164fe25f",
		"inReplyTo": OFFER_ID,
		"object": {
			"id": "https://overlay-journal.com/information-page",
			"type": ["Page", "sorg:WebPage"],
		},
		"origin": journal(),
		"target": repository(),
		"type": "Announce",
	})
}

/// every fixture, named after the pattern it resolves to
pub fn all() -> Vec<(&'static str, Value)> {
	vec![
		("Accept", accept()),
		("AnnounceEndorsement", announce_endorsement()),
		("AnnounceRelationship", announce_relationship()),
		("AnnounceReview", announce_review()),
		("AnnounceServiceResult", announce_service_result()),
		("Reject", reject()),
		("RequestEndorsement", request_endorsement()),
		("RequestReview", request_review()),
		("TentativelyAccept", tentatively_accept()),
		("TentativelyReject", tentatively_reject()),
		("UnprocessableNotification", unprocessable_notification()),
		("UndoOffer", undo_offer()),
	]
}
