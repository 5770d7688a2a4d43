use axum::{
	extract::{Path, State},
	http::{header::{CONTENT_TYPE, LOCATION}, StatusCode},
	response::{IntoResponse, Response},
};
use coarnotify_core::client::CONTENT_TYPE_LD_JSON;

use crate::{ApiError, ApiResult, Inbox};

pub async fn post(
	State(inbox): State<Inbox>,
	body: String,
) -> ApiResult<Response> {
	let receipt = inbox.server().receive_str(&body, inbox.validate()).await?;
	let status = StatusCode::from_u16(receipt.status).unwrap_or(StatusCode::ACCEPTED);
	Ok(match receipt.location {
		Some(location) => (status, [(LOCATION, location)]).into_response(),
		None => status.into_response(),
	})
}

pub async fn get(
	State(inbox): State<Inbox>,
	Path(id): Path<String>,
) -> ApiResult<Response> {
	let notification = inbox.server()
		.binding()
		.load(&id)
		.await?
		.ok_or_else(ApiError::not_found)?;

	Ok((
		[(CONTENT_TYPE, CONTENT_TYPE_LD_JSON)],
		axum::Json(notification),
	).into_response())
}

#[cfg(test)]
mod test {
	use axum::{body::Body, http::Request};
	use coarnotify::{fixtures, NotifyOptions};
	use coarnotify_core::{NotifyServer, StoreBinding};
	use tower::ServiceExt;

	use super::*;

	const BASE: &str = "https://inbox.example";

	fn scratch() -> std::path::PathBuf {
		std::env::temp_dir().join(format!("coarnotify-routes-{}", uuid::Uuid::new_v4()))
	}

	fn app(dir: &std::path::Path) -> axum::Router {
		let server = NotifyServer::new(StoreBinding::new(dir, BASE), NotifyOptions::default());
		crate::router(Inbox::new(server, true))
	}

	fn deliver(body: String) -> Request<Body> {
		Request::post("/inbox")
			.header(CONTENT_TYPE, CONTENT_TYPE_LD_JSON)
			.body(Body::from(body))
			.expect("valid request")
	}

	async fn json_body(response: Response) -> serde_json::Value {
		let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("readable body");
		serde_json::from_slice(&bytes).expect("json body")
	}

	#[tokio::test]
	async fn posted_notification_is_stored_and_served() {
		let dir = scratch();
		let app = app(&dir);

		let response = app.clone().oneshot(deliver(fixtures::announce_review().to_string())).await.expect("infallible");
		assert_eq!(response.status(), StatusCode::CREATED);
		let location = response.headers()
			.get(LOCATION)
			.and_then(|h| h.to_str().ok())
			.expect("created has a location")
			.to_string();
		let path = location.strip_prefix(BASE).expect("location under base url");

		let response = app
			.oneshot(Request::get(path).body(Body::empty()).expect("valid request"))
			.await
			.expect("infallible");
		assert_eq!(response.status(), StatusCode::OK);
		assert_eq!(
			response.headers().get(CONTENT_TYPE).and_then(|h| h.to_str().ok()),
			Some(CONTENT_TYPE_LD_JSON),
		);
		let stored = json_body(response).await;
		assert_eq!(stored["id"], fixtures::announce_review()["id"]);

		let _ = tokio::fs::remove_dir_all(dir).await;
	}

	#[tokio::test]
	async fn invalid_notification_lists_its_errors() {
		let dir = scratch();
		let mut doc = fixtures::request_review();
		doc.as_object_mut().expect("object").remove("target");

		let response = app(&dir).oneshot(deliver(doc.to_string())).await.expect("infallible");
		assert_eq!(response.status(), StatusCode::BAD_REQUEST);
		let body = json_body(response).await;
		assert_eq!(body["description"], "Invalid notification");
		assert_eq!(body["status"], 400);
		assert!(body["errors"]["target"]["errors"].is_array());
	}

	#[tokio::test]
	async fn garbage_and_unknown_types_are_bad_requests() {
		let dir = scratch();
		let app = app(&dir);

		let response = app.clone().oneshot(deliver("not json at all".into())).await.expect("infallible");
		assert_eq!(response.status(), StatusCode::BAD_REQUEST);
		assert_eq!(json_body(response).await["description"], "Malformed notification");

		let response = app.oneshot(deliver(r#"{"type":"Like"}"#.into())).await.expect("infallible");
		assert_eq!(response.status(), StatusCode::BAD_REQUEST);
		assert_eq!(json_body(response).await["description"], "Unrecognised notification");
	}

	#[tokio::test]
	async fn unknown_notifications_are_not_found() {
		let dir = scratch();
		let response = app(&dir)
			.oneshot(Request::get(format!("/inbox/{}", uuid::Uuid::new_v4())).body(Body::empty()).expect("valid request"))
			.await
			.expect("infallible");
		assert_eq!(response.status(), StatusCode::NOT_FOUND);
	}
}
