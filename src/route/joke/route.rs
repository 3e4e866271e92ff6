use std::collections::BTreeMap;

use axum::{
	extract::State,
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};

use crate::{
	error::AppError,
	extract::{Form, Session},
	model::Joke,
	validate::Violation,
	AppState,
};

use super::{model, Error, RouteError};

/// Creates a new joke owned by the authenticated user.
#[tracing::instrument(skip_all, fields(user_id = session.user.id))]
pub async fn create_joke(
	State(state): State<AppState>,
	session: Session,
	input: Result<Form<model::CreateJokeInput>, AppError>,
) -> Result<impl IntoResponse, RouteError> {
	session.record_action(&state.database).await;

	let Form(input) = input?;
	let content = input.checked().map_err(Error::from)?;

	let joke_id = sqlx::query_scalar::<_, i64>(
		r"
			INSERT INTO joke (user_id, content) VALUES (?, ?) RETURNING joke_id
		",
	)
	.bind(session.user.id)
	.bind(content)
	.fetch_one(&state.database)
	.await?;

	tracing::debug!(joke_id, "created joke");

	Ok((StatusCode::CREATED, "Joke created"))
}

/// Returns the content of one of the authenticated user's jokes.
#[tracing::instrument(skip_all, fields(user_id = session.user.id))]
pub async fn get_joke_by_id(
	State(state): State<AppState>,
	session: Session,
	input: Result<Form<model::JokeIdInput>, AppError>,
) -> Result<String, RouteError> {
	session.record_action(&state.database).await;

	let Form(input) = input?;
	let joke_id = input.checked().map_err(Error::from)?;

	let joke = sqlx::query_as::<_, Joke>(
		r"
			SELECT * FROM joke
			WHERE joke_id = ? AND user_id = ?
		",
	)
	.bind(joke_id)
	.bind(session.user.id)
	.fetch_optional(&state.database)
	.await?
	.ok_or(Error::NotFound)?;

	Ok(joke.content)
}

/// Returns every joke owned by the authenticated user, keyed by joke id.
#[tracing::instrument(skip_all, fields(user_id = session.user.id))]
pub async fn get_my_jokes(
	State(state): State<AppState>,
	session: Session,
) -> Result<Response, RouteError> {
	session.record_action(&state.database).await;

	let jokes = sqlx::query_as::<_, Joke>(
		r"
			SELECT * FROM joke
			WHERE user_id = ?
			ORDER BY joke_id
		",
	)
	.bind(session.user.id)
	.fetch_all(&state.database)
	.await?;

	if jokes.is_empty() {
		return Ok(StatusCode::NO_CONTENT.into_response());
	}

	let jokes = jokes
		.into_iter()
		.map(|joke| (joke.joke_id, joke.content))
		.collect::<BTreeMap<_, _>>();

	Ok(Json(jokes).into_response())
}

/// Replaces the content of one of the authenticated user's jokes.
#[tracing::instrument(skip_all, fields(user_id = session.user.id))]
pub async fn update_joke(
	State(state): State<AppState>,
	session: Session,
	input: Result<Form<model::UpdateJokeInput>, AppError>,
) -> Result<StatusCode, RouteError> {
	session.record_action(&state.database).await;

	let Form(input) = input?;
	let (joke_id, content) = input.checked().map_err(|violation| match violation {
		Violation::MissingParameter(..) => Error::MissingPatchFields,
		violation => violation.into(),
	})?;

	let status = sqlx::query(
		r"
			UPDATE joke SET content = ?
			WHERE joke_id = ? AND user_id = ?
		",
	)
	.bind(content)
	.bind(joke_id)
	.bind(session.user.id)
	.execute(&state.database)
	.await?;

	if status.rows_affected() == 0 {
		return Err(Error::NothingToPatch.into());
	}

	Ok(StatusCode::NO_CONTENT)
}

/// Deletes one of the authenticated user's jokes.
#[tracing::instrument(skip_all, fields(user_id = session.user.id))]
pub async fn delete_joke(
	State(state): State<AppState>,
	session: Session,
	input: Result<Form<model::JokeIdInput>, AppError>,
) -> Result<StatusCode, RouteError> {
	session.record_action(&state.database).await;

	let Form(input) = input?;
	let joke_id = input.checked().map_err(Error::from)?;

	let status = sqlx::query(
		r"
			DELETE FROM joke
			WHERE joke_id = ? AND user_id = ?
		",
	)
	.bind(joke_id)
	.bind(session.user.id)
	.execute(&state.database)
	.await?;

	if status.rows_affected() == 0 {
		return Err(Error::NothingToDelete.into());
	}

	Ok(StatusCode::NO_CONTENT)
}
