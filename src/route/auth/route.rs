use argon2::{
	password_hash::{self, rand_core::OsRng, SaltString},
	PasswordHash, PasswordHasher, PasswordVerifier,
};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{error::AppError, extract::Form, model::User, AppState};

use super::{model, Error, RouteError};

/// Registers a new account.
#[tracing::instrument(skip_all)]
pub async fn register(
	State(state): State<AppState>,
	Form(input): Form<model::RegisterInput>,
) -> Result<impl IntoResponse, RouteError> {
	let (username, password) = input.credentials().map_err(Error::InvalidRegistration)?;

	let salt = SaltString::generate(&mut OsRng);
	let hashed = state
		.hasher
		.hash_password(password.as_bytes(), &salt)
		.map_err(AppError::Hash)?
		.to_string();

	let user_id = sqlx::query_scalar::<_, i64>(
		r#"
			INSERT INTO "user" (username, password) VALUES (?, ?) RETURNING id
		"#,
	)
	.bind(username)
	.bind(&hashed)
	.fetch_one(&state.database)
	.await
	.map_err(|e| match e {
		sqlx::Error::Database(ref d) if d.is_unique_violation() => Error::UserExists.into(),
		e => RouteError::from(e),
	})?;

	tracing::info!(user_id, username, "registered user");

	Ok((StatusCode::CREATED, "User created"))
}

/// Logs in to an account, returning an access token.
#[tracing::instrument(skip_all)]
pub async fn login(
	State(state): State<AppState>,
	Form(input): Form<model::LoginInput>,
) -> Result<Json<model::AccessToken>, RouteError> {
	let (username, password) = input.credentials().map_err(Error::MissingCredential)?;

	let user = sqlx::query_as::<_, User>(r#"SELECT * FROM "user" WHERE username = ?"#)
		.bind(username)
		.fetch_optional(&state.database)
		.await?
		.ok_or(Error::NoSuchUser)?;

	let hashed = PasswordHash::new(&user.password).map_err(AppError::Hash)?;

	match state.hasher.verify_password(password.as_bytes(), &hashed) {
		Ok(()) => {}
		Err(password_hash::Error::Password) => return Err(Error::WrongPassword.into()),
		Err(e) => return Err(AppError::Hash(e).into()),
	}

	let access_token = state.keys.issue(user.id).map_err(AppError::Token)?;

	Ok(Json(model::AccessToken { access_token }))
}
