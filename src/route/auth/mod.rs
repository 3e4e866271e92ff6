use axum::{http::StatusCode, routing::post, Router};

use crate::{
	error::{self, Message},
	validate::Violation,
	AppState,
};

pub mod model;
pub mod route;

/// Sent when a username or password breaks the credential format.
pub const BAD_PARAMETER: &str = "User's name can only contain digits and letters and must be \
                                 at least 6 characters long, 20 characters at max";

/// An error that can occur during authentication.
///
/// Note that the messages are presented to the client, so they should not contain
/// sensitive information.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("invalid registration: {0}")]
	InvalidRegistration(Violation),
	#[error("{0}")]
	MissingCredential(Violation),
	#[error("This user already exists")]
	UserExists,
	#[error("No such user")]
	NoSuchUser,
	#[error("Wrong password")]
	WrongPassword,
	#[error("Missing Authorization header")]
	MissingToken,
	#[error("Invalid or expired token")]
	InvalidToken,
}

pub type RouteError = error::RouteError<Error>;

pub fn routes() -> Router<AppState> {
	use route::*;

	Router::new()
		.route("/register", post(register))
		.route("/login", post(login))
}

impl error::ErrorShape for Error {
	fn status(&self) -> StatusCode {
		match self {
			Self::InvalidRegistration(..) | Self::MissingCredential(..) | Self::UserExists => {
				StatusCode::BAD_REQUEST
			}
			Self::NoSuchUser | Self::WrongPassword | Self::MissingToken | Self::InvalidToken => {
				StatusCode::UNAUTHORIZED
			}
		}
	}

	fn message(&self) -> Message {
		match self {
			Self::InvalidRegistration(violation @ Violation::MissingParameter(..)) => {
				Message::Error(violation.to_string().into())
			}
			Self::InvalidRegistration(..) => Message::Error(BAD_PARAMETER.into()),
			Self::MissingToken | Self::InvalidToken => Message::Error(self.to_string().into()),
			Self::MissingCredential(..)
			| Self::UserExists
			| Self::NoSuchUser
			| Self::WrongPassword => Message::Text(self.to_string().into()),
		}
	}
}
