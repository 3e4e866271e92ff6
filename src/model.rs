/// A registered user.
///
/// The `password` field is an Argon2 PHC string.
#[derive(Debug, sqlx::FromRow)]
pub struct User {
	pub id: i64,
	#[allow(dead_code)]
	pub username: String,
	pub password: String,
}

/// A joke, only visible to the user that created it.
#[derive(Debug, sqlx::FromRow)]
pub struct Joke {
	pub joke_id: i64,
	#[allow(dead_code)]
	pub user_id: i64,
	pub content: String,
}

/// An audit record of a single authenticated request.
#[derive(Debug, sqlx::FromRow)]
pub struct Action {
	pub id: i64,
	pub user_ip_address: String,
	pub action_time: chrono::DateTime<chrono::Utc>,
	pub action_path: String,
	pub user_id: i64,
}
