use std::{sync::Arc, time::Duration};

use coarnotify::{part::Service, Notify, Pattern, ValidationError};
use reqwest::header::{CONTENT_TYPE, LOCATION};

use crate::config::ClientConfig;

pub const CONTENT_TYPE_LD_JSON: &str = "application/ld+json;profile=\"https://www.w3.org/ns/activitystreams\"";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
	#[error("no inbox url given, configured or found in notification target")]
	NoInbox,

	#[error("refusing to send invalid notification: {0}")]
	Refused(ValidationError),

	#[error("inbox responded with unexpected status {0}")]
	Status(u16),

	#[error("error delivering notification: {0:?}")]
	Transport(#[from] reqwest::Error),
}

impl ClientError {
	/// per-field problems of a notification refused before sending
	pub fn validation_errors(&self) -> Option<&ValidationError> {
		match self {
			ClientError::Refused(e) => Some(e),
			_ => None,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
	Created,
	Accepted,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct NotifyResponse {
	pub action: Action,
	pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
	pub status: u16,
	pub location: Option<String>,
}

/// Delivers a serialized notification to an inbox
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
	async fn post(&self, url: &str, body: String) -> Result<TransportResponse, ClientError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
	client: reqwest::Client,
}

impl ReqwestTransport {
	pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, ClientError> {
		let client = reqwest::Client::builder()
			.user_agent(user_agent)
			.timeout(timeout)
			.build()?;
		Ok(ReqwestTransport { client })
	}
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
	async fn post(&self, url: &str, body: String) -> Result<TransportResponse, ClientError> {
		let response = self.client
			.post(url)
			.header(CONTENT_TYPE, CONTENT_TYPE_LD_JSON)
			.body(body)
			.send()
			.await?;

		let location = response
			.headers()
			.get(LOCATION)
			.and_then(|h| h.to_str().ok())
			.map(str::to_string);

		Ok(TransportResponse { status: response.status().as_u16(), location })
	}
}

/// Sends notifications to COAR Notify inboxes
#[derive(Clone)]
pub struct NotifyClient {
	transport: Arc<dyn Transport>,
	inbox: Option<String>,
}

impl NotifyClient {
	pub fn new(transport: impl Transport + 'static, inbox: Option<String>) -> Self {
		NotifyClient { transport: Arc::new(transport), inbox }
	}

	pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
		let transport = ReqwestTransport::new(&config.user_agent, Duration::from_secs(config.timeout_seconds))?;
		Ok(NotifyClient::new(transport, config.inbox.clone()))
	}

	pub fn inbox(&self) -> Option<&str> {
		self.inbox.as_deref()
	}

	/// posts `notification` to `inbox`, else to the client default inbox, else to the inbox of
	/// the notification target
	pub async fn send(&self, notification: &dyn Pattern, inbox: Option<&str>, validate: bool) -> Result<NotifyResponse, ClientError> {
		let inbox = inbox
			.map(str::to_string)
			.or_else(|| self.inbox.clone())
			.or_else(|| notification.target().and_then(|t| t.inbox()))
			.ok_or(ClientError::NoInbox)?;

		if validate {
			notification.validate().map_err(ClientError::Refused)?;
		}

		let body = notification.to_jsonld().to_string();
		tracing::info!("sending notification {} to {inbox}", notification.id().unwrap_or_default());
		let response = self.transport.post(&inbox, body).await?;

		match response.status {
			201 => Ok(NotifyResponse { action: Action::Created, location: response.location }),
			202 => Ok(NotifyResponse { action: Action::Accepted, location: None }),
			status => {
				tracing::warn!("inbox {inbox} refused notification with status {status}");
				Err(ClientError::Status(status))
			},
		}
	}
}
