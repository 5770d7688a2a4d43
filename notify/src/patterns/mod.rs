//! The twelve COAR Notify patterns and their specialised parts.

mod accept;
mod announce_endorsement;
mod announce_relationship;
mod announce_review;
mod announce_service_result;
mod reject;
mod request_endorsement;
mod request_review;
mod tentatively_accept;
mod tentatively_reject;
mod undo_offer;
mod unprocessable_notification;

pub use accept::Accept;
pub use announce_endorsement::{AnnounceEndorsement, AnnounceEndorsementContext, AnnounceEndorsementItem};
pub use announce_relationship::{AnnounceRelationship, AnnounceRelationshipContext, AnnounceRelationshipItem, AnnounceRelationshipObject};
pub use announce_review::{AnnounceReview, AnnounceReviewContext, AnnounceReviewItem, AnnounceReviewObject};
pub use announce_service_result::{AnnounceServiceResult, AnnounceServiceResultContext, AnnounceServiceResultItem, AnnounceServiceResultObject};
pub use reject::Reject;
pub use request_endorsement::{RequestEndorsement, RequestEndorsementItem, RequestEndorsementObject};
pub use request_review::{RequestReview, RequestReviewItem, RequestReviewObject};
pub use tentatively_accept::TentativelyAccept;
pub use tentatively_reject::TentativelyReject;
pub use undo_offer::UndoOffer;
pub use unprocessable_notification::UnprocessableNotification;
