#![warn(clippy::pedantic)]

mod action;
mod config;
mod error;
mod extract;
mod model;
mod route;
mod token;
mod trace;
mod validate;

#[cfg(test)]
mod test;

use std::{net::SocketAddr, str::FromStr};

use argon2::Argon2;
use axum::Router;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub type Database = sqlx::Pool<sqlx::Sqlite>;
pub type AppState = State;

/// The shared application state.
///
/// This is the only state shared between requests. It is built once at
/// startup and cloned into every handler.
#[derive(Clone, axum::extract::FromRef)]
pub struct State {
	pub database: Database,
	pub hasher: Argon2<'static>,
	pub keys: token::Keys,
}

/// Builds the application router with its middleware.
pub fn app(state: AppState) -> Router {
	route::routes()
		.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
		.with_state(state)
}

async fn shutdown_signal() {
	if let Err(error) = tokio::signal::ctrl_c().await {
		tracing::error!(%error, "failed to listen for shutdown signal");
	}

	tracing::info!("shutting down");
}

#[tokio::main]
async fn main() {
	dotenvy::dotenv().ok();
	trace::init_tracing_subscriber();

	let config = config::Config::from_env().expect("invalid configuration");

	let options = SqliteConnectOptions::from_str(&config.database_url)
		.expect("DATABASE_URL must be a sqlite url")
		.create_if_missing(true);

	let database = SqlitePoolOptions::new()
		.max_connections(config.max_connections)
		.connect_with(options)
		.await
		.expect("failed to connect to database");

	sqlx::migrate!()
		.run(&database)
		.await
		.expect("failed to run migrations");

	let state = State {
		database,
		hasher: Argon2::default(),
		keys: token::Keys::new(config.jwt_secret.as_bytes(), config.token_ttl),
	};

	let listener = tokio::net::TcpListener::bind((config.host, config.port))
		.await
		.expect("failed to bind to port");

	tracing::info!("listening on {}:{}", config.host, config.port);

	axum::serve(
		listener,
		app(state).into_make_service_with_connect_info::<SocketAddr>(),
	)
	.with_graceful_shutdown(shutdown_signal())
	.await
	.expect("server error");
}
