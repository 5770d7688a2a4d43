use axum::http::StatusCode;
use coarnotify_core::{ServerError, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
	#[error("{0}")]
	Server(#[from] ServerError),

	#[error("notification store error: {0}")]
	Store(#[from] StoreError),

	// wrapper error to return arbitrary status codes
	#[error("{0}")]
	Status(StatusCode),
}

impl ApiError {
	pub fn not_found() -> Self {
		Self::Status(StatusCode::NOT_FOUND)
	}
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<StatusCode> for ApiError {
	fn from(value: StatusCode) -> Self {
		ApiError::Status(value)
	}
}

impl axum::response::IntoResponse for ApiError {
	fn into_response(self) -> axum::response::Response {
		tracing::debug!("emitting error response: {self:?}");
		let descr = self.to_string();
		match self {
			ApiError::Status(status) => status.into_response(),
			ApiError::Server(e) => {
				let status = StatusCode::from_u16(e.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
				let mut body = serde_json::json!({
					"error": "notification",
					"status": status.as_u16(),
					"description": descr,
				});
				if let Some(errors) = e.validation_errors() {
					body["errors"] = errors.to_json();
				}
				(status, axum::Json(body)).into_response()
			},
			ApiError::Store(e) => (
				StatusCode::INTERNAL_SERVER_ERROR,
				axum::Json(serde_json::json!({
					"error": "store",
					"status": 500,
					"description": descr,
					"inner": format!("{e:#?}"),
				}))
			).into_response(),
		}
	}
}
