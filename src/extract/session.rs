use std::net::SocketAddr;

use axum::{
	extract::{ConnectInfo, FromRef, FromRequestParts},
	http::{header, request},
};

use crate::{
	action,
	error::RouteError,
	model,
	route::auth,
	token::{self, AUTHORIZATION_PREFIX},
	Database,
};

const FORWARDED_FOR: &str = "x-forwarded-for";
const UNKNOWN_IP: &str = "unknown";

/// Extracts the authenticated user from a bearer token.
///
/// If the `Authorization` header is absent, a [`auth::Error::MissingToken`] is returned.
/// If the token is malformed, expired, or names a user that no longer exists,
/// a [`auth::Error::InvalidToken`] is returned.
///
/// ```rust
/// async fn route(session: Session) {
///   println!("{:?}", session.user);
/// }
/// ```
#[derive(Debug)]
pub struct Session {
	pub user: model::User,
	/// The address the request came from.
	pub ip: String,
	/// The path that was requested.
	pub path: String,
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for Session
where
	Database: FromRef<S>,
	token::Keys: FromRef<S>,
	S: Sync + Send,
{
	type Rejection = RouteError<auth::Error>;

	async fn from_request_parts(
		parts: &mut request::Parts,
		state: &S,
	) -> Result<Self, Self::Rejection> {
		let authorization = parts
			.headers
			.get(header::AUTHORIZATION)
			.ok_or(auth::Error::MissingToken)?;

		let bearer = authorization
			.to_str()
			.ok()
			.and_then(|value| value.strip_prefix(AUTHORIZATION_PREFIX))
			.ok_or(auth::Error::InvalidToken)?;

		let claims = token::Keys::from_ref(state)
			.verify(bearer.trim())
			.map_err(|_| auth::Error::InvalidToken)?;

		let database = Database::from_ref(state);
		let user = sqlx::query_as::<_, model::User>(r#"SELECT * FROM "user" WHERE id = ?"#)
			.bind(claims.sub)
			.fetch_optional(&database)
			.await?
			.ok_or(auth::Error::InvalidToken)?;

		Ok(Self {
			user,
			ip: client_ip(parts),
			path: parts.uri.path().to_owned(),
		})
	}
}

impl Session {
	/// Writes an audit record for this request.
	///
	/// Failing to write the record never fails the request.
	pub async fn record_action(&self, database: &Database) {
		match action::record(database, self.user.id, &self.ip, &self.path).await {
			Ok(action) => tracing::debug!(
				action_id = action.id,
				user_id = action.user_id,
				ip = %action.user_ip_address,
				path = %action.action_path,
				time = %action.action_time,
				"recorded action"
			),
			Err(error) => tracing::error!(
				user_id = self.user.id,
				path = %self.path,
				%error,
				"failed to record action"
			),
		}
	}
}

/// The peer address, then the first forwarded hop, then [`UNKNOWN_IP`].
fn client_ip(parts: &request::Parts) -> String {
	if let Some(ConnectInfo(addr)) = parts.extensions.get::<ConnectInfo<SocketAddr>>() {
		return addr.ip().to_string();
	}

	parts
		.headers
		.get(FORWARDED_FOR)
		.and_then(|value| value.to_str().ok())
		.and_then(|value| value.split(',').next())
		.map(str::trim)
		.filter(|value| !value.is_empty())
		.map_or_else(|| UNKNOWN_IP.to_owned(), str::to_owned)
}
