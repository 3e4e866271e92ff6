use axum::{http::StatusCode, routing::get, Router};

use crate::AppState;

pub mod auth;
pub mod joke;

pub fn routes() -> Router<AppState> {
	Router::new()
		.route("/", get(index))
		.merge(auth::routes())
		.merge(joke::routes())
}

/// There is nothing to show at the root.
async fn index() -> StatusCode {
	StatusCode::NO_CONTENT
}
