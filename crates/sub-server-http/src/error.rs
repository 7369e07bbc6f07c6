// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! HTTP error handling and response formatting.
//!
//! Every failure leaves the server as `{"diagnostic": {...}}`, with the status
//! chosen by the diagnostic's kind.

use axum::{
	Json,
	extract::{FromRequest, Request, rejection::JsonRejection},
	http::StatusCode,
	response::{IntoResponse, Response},
};
use palcraft_type::{
	Diagnostic, Error, ErrorKind,
	diagnostic::{internal::internal, validation::invalid_body},
	error,
};
use serde::Serialize;

/// JSON diagnostic error response body.
#[derive(Debug, Serialize)]
pub struct DiagnosticResponse {
	pub diagnostic: Diagnostic,
}

/// Application error type that converts to HTTP responses.
#[derive(Debug)]
pub enum AppError {
	/// Failure reported by the storage, catalog or crafting layers.
	Engine(Error),
	/// The blocking task running a request panicked or was cancelled.
	TaskPanic(String),
}

impl From<Error> for AppError {
	fn from(e: Error) -> Self {
		AppError::Engine(e)
	}
}

impl std::fmt::Display for AppError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			AppError::Engine(e) => write!(f, "{}", e),
			AppError::TaskPanic(msg) => write!(f, "Task failed: {}", msg),
		}
	}
}

impl std::error::Error for AppError {}

pub fn status_for(kind: ErrorKind) -> StatusCode {
	match kind {
		ErrorKind::NotFound => StatusCode::NOT_FOUND,
		ErrorKind::Validation => StatusCode::BAD_REQUEST,
		ErrorKind::Conflict => StatusCode::CONFLICT,
		ErrorKind::Execution => StatusCode::BAD_REQUEST,
		ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
	}
}

impl IntoResponse for AppError {
	fn into_response(self) -> Response {
		let diagnostic = match self {
			AppError::Engine(error) => {
				tracing::debug!(code = %error.code, "request failed");
				error.diagnostic()
			}
			AppError::TaskPanic(msg) => {
				tracing::error!("Request task failed: {}", msg);
				internal(msg)
			}
		};

		let status = status_for(diagnostic.kind());
		(status, Json(DiagnosticResponse {
			diagnostic,
		}))
			.into_response()
	}
}

/// JSON body extractor whose rejections are reported as diagnostics.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
	Json<T>: FromRequest<S, Rejection = JsonRejection>,
	S: Send + Sync,
{
	type Rejection = AppError;

	async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
		match Json::<T>::from_request(req, state).await {
			Ok(Json(value)) => Ok(Self(value)),
			Err(rejection) => Err(AppError::Engine(error!(invalid_body(rejection.body_text())))),
		}
	}
}

#[cfg(test)]
mod tests {
	use palcraft_type::diagnostic::{catalog, store, validation};

	use super::*;

	#[test]
	fn test_status_by_kind() {
		let cases = [
			(catalog::table_not_found("t"), StatusCode::NOT_FOUND),
			(validation::empty_table_name(), StatusCode::BAD_REQUEST),
			(catalog::table_already_exists("t", "table t already exists"), StatusCode::CONFLICT),
			(store::execution_failed("syntax error"), StatusCode::BAD_REQUEST),
			(internal("boom"), StatusCode::INTERNAL_SERVER_ERROR),
		];
		for (diagnostic, status) in cases {
			let response = AppError::from(error!(diagnostic)).into_response();
			assert_eq!(response.status(), status);
		}
	}

	#[test]
	fn test_task_panic_is_internal() {
		let response = AppError::TaskPanic("worker gone".to_string()).into_response();
		assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
	}

	#[test]
	fn test_diagnostic_response_serialization() {
		let body = DiagnosticResponse {
			diagnostic: catalog::table_not_found("gadgets"),
		};
		let json = serde_json::to_value(&body).unwrap();
		assert_eq!(json["diagnostic"]["code"], "CATALOG_001");
	}
}
