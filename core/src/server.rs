use coarnotify::{Notify, NotifyError, NotifyOptions, Pattern, ValidationError};
use serde_json::Value;

/// What the service binding reports back for an accepted notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
	pub status: u16,
	pub location: Option<String>,
}

impl Receipt {
	pub fn created(location: impl Into<String>) -> Self {
		Receipt { status: 201, location: Some(location.into()) }
	}

	pub fn accepted() -> Self {
		Receipt { status: 202, location: None }
	}
}

/// Error surfaced at the inbox boundary: a status and a terse message, with the detailed cause
/// kept aside for logs
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ServerError {
	pub status: u16,
	pub message: String,
	#[source]
	pub cause: Option<NotifyError>,
}

impl ServerError {
	pub fn new(status: u16, message: impl Into<String>) -> Self {
		ServerError { status, message: message.into(), cause: None }
	}

	pub fn with_cause(mut self, cause: NotifyError) -> Self {
		self.cause = Some(cause);
		self
	}

	pub fn validation_errors(&self) -> Option<&ValidationError> {
		self.cause.as_ref().and_then(NotifyError::validation)
	}
}

/// Application logic run for every notification that reaches the inbox
#[async_trait::async_trait]
pub trait ServiceBinding: Send + Sync {
	async fn notification_received(&self, notification: Box<dyn Pattern>) -> Result<Receipt, ServerError>;
}

pub struct NotifyServer<B: ServiceBinding> {
	binding: B,
	options: NotifyOptions,
}

impl<B: ServiceBinding> NotifyServer<B> {
	pub fn new(binding: B, options: NotifyOptions) -> Self {
		NotifyServer { binding, options }
	}

	pub fn binding(&self) -> &B {
		&self.binding
	}

	pub fn options(&self) -> &NotifyOptions {
		&self.options
	}

	pub async fn receive_str(&self, raw: &str, validate: bool) -> Result<Receipt, ServerError> {
		let document: Value = serde_json::from_str(raw)
			.map_err(|e| ServerError::new(400, "Malformed notification").with_cause(e.into()))?;
		self.receive(document, validate).await
	}

	/// resolves `document` to its pattern, optionally validates it, then hands it to the binding
	pub async fn receive(&self, document: Value, validate: bool) -> Result<Receipt, ServerError> {
		let options = NotifyOptions { validate_stream_on_construct: false, ..self.options.clone() };
		let notification = self.options.registry
			.get_by_object(document, options)
			.map_err(|e| {
				tracing::warn!("could not resolve incoming notification: {e}");
				ServerError::new(400, "Unrecognised notification").with_cause(e)
			})?;

		if validate {
			if let Err(e) = notification.validate() {
				tracing::warn!("rejecting invalid notification {}: {e}", notification.id().unwrap_or_default());
				return Err(ServerError::new(400, "Invalid notification").with_cause(e.into()));
			}
		}

		tracing::debug!("dispatching notification {} to service binding", notification.id().unwrap_or_default());
		self.binding.notification_received(notification).await
	}
}

#[cfg(test)]
mod test {
	use std::sync::Mutex;

	use coarnotify::{fixtures, patterns::Accept, prelude::*, property::ORIGIN};

	use super::*;

	#[derive(Default)]
	struct Collect {
		received: Mutex<Vec<(Option<String>, bool)>>,
	}

	#[async_trait::async_trait]
	impl ServiceBinding for Collect {
		async fn notification_received(&self, notification: Box<dyn Pattern>) -> Result<Receipt, ServerError> {
			let is_accept = notification.as_any().downcast_ref::<Accept>().is_some();
			self.received.lock().expect("poisoned").push((notification.id(), is_accept));
			Ok(Receipt::created("https://inbox.example/1"))
		}
	}

	#[tokio::test]
	async fn resolved_pattern_reaches_the_binding() {
		let server = NotifyServer::new(Collect::default(), NotifyOptions::default());
		let receipt = server.receive(fixtures::accept(), true).await.expect("valid fixture");
		assert_eq!(receipt, Receipt::created("https://inbox.example/1"));
		let received = server.binding().received.lock().expect("poisoned");
		assert_eq!(received.as_slice(), &[(Some(fixtures::ACCEPT_ID.to_string()), true)]);
	}

	struct Acknowledge;

	#[async_trait::async_trait]
	impl ServiceBinding for Acknowledge {
		async fn notification_received(&self, _notification: Box<dyn Pattern>) -> Result<Receipt, ServerError> {
			Ok(Receipt::accepted())
		}
	}

	#[tokio::test]
	async fn accepted_receipts_carry_no_location() {
		let server = NotifyServer::new(Acknowledge, NotifyOptions::default());
		let receipt = server.receive(fixtures::tentatively_accept(), true).await.expect("valid fixture");
		assert_eq!(receipt.status, 202);
		assert!(receipt.location.is_none());
	}

	#[tokio::test]
	async fn invalid_notification_is_a_terse_400() {
		let server = NotifyServer::new(Collect::default(), NotifyOptions::default());
		let mut doc = fixtures::accept();
		doc.as_object_mut().expect("object").remove("origin");

		let err = server.receive(doc.clone(), true).await.expect_err("origin missing");
		assert_eq!(err.status, 400);
		assert_eq!(err.to_string(), "Invalid notification");
		assert!(err.validation_errors().is_some_and(|v| v.contains(&ORIGIN)));
		assert!(server.binding().received.lock().expect("poisoned").is_empty());

		// the binding still gets it when validation is skipped
		server.receive(doc, false).await.expect("not validated");
		assert_eq!(server.binding().received.lock().expect("poisoned").len(), 1);
	}

	#[tokio::test]
	async fn unknown_types_and_bad_json_are_rejected() {
		let server = NotifyServer::new(Collect::default(), NotifyOptions::default());
		let err = server.receive(serde_json::json!({ "type": "Like" }), true).await.expect_err("no such pattern");
		assert_eq!(err.status, 400);
		assert!(matches!(err.cause, Some(NotifyError::NoMatchingPattern(_))));

		let err = server.receive_str("{ not json", true).await.expect_err("malformed");
		assert!(matches!(err.cause, Some(NotifyError::Json(_))));

		let raw = fixtures::accept().to_string();
		assert!(server.receive_str(&raw, true).await.is_ok());
	}
}
