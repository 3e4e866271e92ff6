use std::{borrow::Cow, fmt};

use axum::{
	extract::rejection::FormRejection,
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use serde::Serialize;

/// A response body describing an error.
///
/// Most endpoints answer with a bare string. Validation and
/// authorization failures use a small JSON object instead.
#[derive(Debug, PartialEq, Eq)]
pub enum Message {
	Text(Cow<'static, str>),
	Error(Cow<'static, str>),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
	error: &'a str,
}

impl IntoResponse for Message {
	fn into_response(self) -> Response {
		match self {
			Self::Text(text) => text.into_owned().into_response(),
			Self::Error(error) => Json(ErrorBody { error: &error }).into_response(),
		}
	}
}

/// Describes how a route-specific error is presented to the client.
pub trait ErrorShape: std::error::Error {
	fn status(&self) -> StatusCode;

	fn message(&self) -> Message;
}

/// Errors shared by every route.
///
/// The Display implementation is never sent to the client, so it can show
/// sensitive information.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
	#[error("form error: {0}")]
	Form(#[from] FormRejection),
	#[error("database error: {0}")]
	Database(#[from] sqlx::Error),
	#[error("password hash error: {0}")]
	Hash(#[from] argon2::password_hash::Error),
	#[error("token error: {0}")]
	Token(#[from] jsonwebtoken::errors::Error),
}

impl AppError {
	pub fn status(&self) -> StatusCode {
		match self {
			Self::Form(rejection) => rejection.status(),
			Self::Database(..) | Self::Hash(..) | Self::Token(..) => {
				StatusCode::INTERNAL_SERVER_ERROR
			}
		}
	}

	pub fn message(&self) -> Message {
		match self {
			Self::Form(rejection) => Message::Error(rejection.body_text().into()),
			Self::Database(..) | Self::Hash(..) | Self::Token(..) => {
				Message::Error("internal server error".into())
			}
		}
	}
}

impl IntoResponse for AppError {
	fn into_response(self) -> Response {
		let status = self.status();

		if status.is_server_error() {
			tracing::error!(error = %self, "request failed");
		}

		(status, self.message()).into_response()
	}
}

/// The error returned by a route: either one of its own errors or a shared one.
#[derive(Debug)]
pub enum RouteError<E> {
	App(AppError),
	Route(E),
}

impl<E: fmt::Display> fmt::Display for RouteError<E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::App(error) => error.fmt(f),
			Self::Route(error) => error.fmt(f),
		}
	}
}

impl<E: ErrorShape> From<E> for RouteError<E> {
	fn from(error: E) -> Self {
		Self::Route(error)
	}
}

impl<E> From<AppError> for RouteError<E> {
	fn from(error: AppError) -> Self {
		Self::App(error)
	}
}

impl<E> From<sqlx::Error> for RouteError<E> {
	fn from(error: sqlx::Error) -> Self {
		Self::App(AppError::Database(error))
	}
}

impl<E: ErrorShape> IntoResponse for RouteError<E> {
	fn into_response(self) -> Response {
		match self {
			Self::App(error) => error.into_response(),
			Self::Route(error) => (error.status(), error.message()).into_response(),
		}
	}
}
