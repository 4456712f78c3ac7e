use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, error};
use derive_more::derive::{Display, Error};
use serde::Serialize;

use crate::domain::forwarder::ForwardError;

#[derive(Serialize)]
struct ErrorResponse {
	#[serde(rename = "statusCode")]
	status_code: u16,
	error:       String,
	message:     String,
}

#[derive(Debug, Display, Error, PartialEq)]
pub enum ApiError {
	#[display("Could not connect to the database.")]
	DatabaseConnectionError,
	#[display("The payment processor rejected the payment.")]
	PaymentRejected,
	#[display("No payment processor is available.")]
	ProcessorUnavailable,
	#[display("Request data is invalid.")]
	BadClientDataError,
	#[display("Internal server error.")]
	InternalServerError,
}

impl ApiError {
	pub fn name(&self) -> String {
		match self {
			ApiError::DatabaseConnectionError => "Insufficient Storage".to_string(),
			ApiError::PaymentRejected => "Unprocessable Entity".to_string(),
			ApiError::ProcessorUnavailable => "Service Unavailable".to_string(),
			ApiError::BadClientDataError => "Bad request".to_string(),
			ApiError::InternalServerError => "Internal Server Error".to_string(),
		}
	}
}

impl error::ResponseError for ApiError {
	fn error_response(&self) -> HttpResponse {
		HttpResponse::build(self.status_code())
			.content_type(ContentType::json())
			.json(ErrorResponse {
				status_code: self.status_code().as_u16(),
				error:       self.to_string(),
				message:     self.name(),
			})
	}

	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::DatabaseConnectionError => StatusCode::INSUFFICIENT_STORAGE,
			ApiError::PaymentRejected => StatusCode::UNPROCESSABLE_ENTITY,
			ApiError::ProcessorUnavailable => StatusCode::SERVICE_UNAVAILABLE,
			ApiError::BadClientDataError => StatusCode::BAD_REQUEST,
			ApiError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl From<ForwardError> for ApiError {
	fn from(e: ForwardError) -> Self {
		match e {
			ForwardError::ClientRejected { .. } => ApiError::PaymentRejected,
			ForwardError::ProcessorUnavailable { .. } => {
				ApiError::ProcessorUnavailable
			}
			ForwardError::InvalidProcessor { .. } => ApiError::InternalServerError,
		}
	}
}

impl From<Box<dyn std::error::Error + Send>> for ApiError {
	fn from(_: Box<dyn std::error::Error + Send>) -> Self {
		ApiError::DatabaseConnectionError
	}
}
