use axum::{
	http::StatusCode,
	routing::{delete, get, patch, put},
	Router,
};

use crate::{
	error::{self, Message},
	validate::Violation,
	AppState,
};

pub mod model;
pub mod route;

/// Sent when a joke is longer than the limit on [`model::CreateJokeInput`].
pub const TOO_LONG: &str = "Joke content can't be longer than 900 characters";

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("No joke content present")]
	MissingContent,
	#[error("{}", TOO_LONG)]
	TooLong,
	#[error("joke_id is a required parameter")]
	MissingJokeId,
	#[error("joke_id must be an integer")]
	BadJokeId,
	#[error("joke_id and content are required")]
	MissingPatchFields,
	#[error("Nothing found")]
	NotFound,
	#[error("Nothing to patch")]
	NothingToPatch,
	#[error("Nothing to delete")]
	NothingToDelete,
}

pub type RouteError = error::RouteError<Error>;

impl From<Violation> for Error {
	fn from(violation: Violation) -> Self {
		match violation {
			Violation::MissingParameter("content") => Self::MissingContent,
			Violation::MissingParameter(..) => Self::MissingJokeId,
			Violation::BadParameter(..) => Self::BadJokeId,
			Violation::BadLength(..) => Self::TooLong,
		}
	}
}

pub fn routes() -> Router<AppState> {
	use route::*;

	Router::new()
		.route("/create-joke", put(create_joke))
		.route("/get-joke-by-id", get(get_joke_by_id))
		.route("/my-jokes", get(get_my_jokes))
		.route("/update-joke", patch(update_joke))
		.route("/delete-joke", delete(delete_joke))
}

impl error::ErrorShape for Error {
	fn status(&self) -> StatusCode {
		match self {
			Self::MissingContent
			| Self::TooLong
			| Self::MissingJokeId
			| Self::BadJokeId
			| Self::MissingPatchFields => StatusCode::BAD_REQUEST,
			Self::NotFound | Self::NothingToPatch | Self::NothingToDelete => StatusCode::NOT_FOUND,
		}
	}

	fn message(&self) -> Message {
		Message::Text(self.to_string().into())
	}
}
