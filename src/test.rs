pub use axum::http::{header, HeaderValue, StatusCode};
pub use axum_test::{TestResponse, TestServer};
pub use serde_json::json;

pub use crate::Database;

use argon2::{Algorithm, Argon2, Params, Version};
use sqlx::sqlite::SqlitePoolOptions;

use crate::{token, State};

/// An empty in-memory database with all migrations applied.
///
/// The pool holds a single connection that never expires, since every
/// in-memory connection is its own database.
pub async fn database() -> Database {
	let database = SqlitePoolOptions::new()
		.max_connections(1)
		.min_connections(1)
		.idle_timeout(None)
		.max_lifetime(None)
		.connect("sqlite::memory:")
		.await
		.unwrap();

	sqlx::migrate!().run(&database).await.unwrap();

	database
}

/// A test server for the full application, with cheap hashing parameters.
pub fn app(database: Database) -> TestServer {
	let state = State {
		database,
		hasher: Argon2::new(
			Algorithm::Argon2id,
			Version::V0x13,
			Params::new(1024, 1, 1, None).unwrap(),
		),
		keys: token::Keys::new(b"test-secret", chrono::Duration::minutes(15)),
	};

	TestServer::new(crate::app(state)).unwrap()
}

pub fn bearer(token: &str) -> HeaderValue {
	HeaderValue::from_str(&format!("Bearer {token}")).unwrap()
}

pub async fn register(app: &TestServer, username: &str, password: &str) -> TestResponse {
	app.post("/register")
		.form(&json!({ "username": username, "password": password }))
		.await
}

pub async fn login(app: &TestServer, username: &str, password: &str) -> TestResponse {
	app.post("/login")
		.form(&json!({ "username": username, "password": password }))
		.await
}

pub async fn access_token(app: &TestServer, username: &str, password: &str) -> String {
	let body = login(app, username, password)
		.await
		.json::<serde_json::Value>();

	body["access_token"].as_str().unwrap().to_owned()
}

/// Registers `username` with a fixed password and returns an access token.
pub async fn signed_up(app: &TestServer, username: &str) -> String {
	let response = register(app, username, "hunter2hunter").await;
	assert_eq!(response.status_code(), StatusCode::CREATED);

	access_token(app, username, "hunter2hunter").await
}

pub async fn create_joke(app: &TestServer, token: &str, content: &str) -> TestResponse {
	app.put("/create-joke")
		.add_header(header::AUTHORIZATION, bearer(token))
		.form(&json!({ "content": content }))
		.await
}

/// Inserts a user row directly, bypassing registration.
pub async fn insert_user(database: &Database, username: &str) -> i64 {
	sqlx::query_scalar(r#"INSERT INTO "user" (username, password) VALUES (?, '') RETURNING id"#)
		.bind(username)
		.fetch_one(database)
		.await
		.unwrap()
}

pub async fn user_id(database: &Database, username: &str) -> i64 {
	sqlx::query_scalar(r#"SELECT id FROM "user" WHERE username = ?"#)
		.bind(username)
		.fetch_one(database)
		.await
		.unwrap()
}

pub async fn user_count(database: &Database, username: &str) -> i64 {
	sqlx::query_scalar(r#"SELECT COUNT(*) FROM "user" WHERE username = ?"#)
		.bind(username)
		.fetch_one(database)
		.await
		.unwrap()
}

pub async fn action_count(database: &Database, user_id: i64) -> i64 {
	sqlx::query_scalar("SELECT COUNT(*) FROM action WHERE user_id = ?")
		.bind(user_id)
		.fetch_one(database)
		.await
		.unwrap()
}

pub async fn joke_content(database: &Database, joke_id: i64) -> Option<String> {
	sqlx::query_scalar("SELECT content FROM joke WHERE joke_id = ?")
		.bind(joke_id)
		.fetch_optional(database)
		.await
		.unwrap()
}
