use std::{net::IpAddr, str::FromStr};

/// An error raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("{0} must be set")]
	Missing(&'static str),
	#[error("{name} has an invalid value: {value:?}")]
	Invalid { name: &'static str, value: String },
}

/// Process-wide configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
	pub database_url: String,
	pub max_connections: u32,
	pub host: IpAddr,
	pub port: u16,
	pub jwt_secret: String,
	pub token_ttl: chrono::Duration,
}

impl Config {
	/// Reads the configuration from environment variables.
	pub fn from_env() -> Result<Self, Error> {
		Self::from_lookup(|name| std::env::var(name).ok())
	}

	fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
		let database_url = lookup("DATABASE_URL").ok_or(Error::Missing("DATABASE_URL"))?;
		let jwt_secret = lookup("JWT_SECRET")
			.filter(|secret| !secret.is_empty())
			.ok_or(Error::Missing("JWT_SECRET"))?;

		let expiry_minutes: i64 = parse(&lookup, "JWT_EXPIRY_MINUTES", 15)?;

		if expiry_minutes <= 0 {
			return Err(Error::Invalid {
				name: "JWT_EXPIRY_MINUTES",
				value: expiry_minutes.to_string(),
			});
		}

		Ok(Self {
			database_url,
			max_connections: parse(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?,
			host: parse(&lookup, "HOST", IpAddr::from([127, 0, 0, 1]))?,
			port: parse(&lookup, "PORT", 3000)?,
			jwt_secret,
			token_ttl: chrono::Duration::minutes(expiry_minutes),
		})
	}
}

fn parse<T: FromStr>(
	lookup: &impl Fn(&str) -> Option<String>,
	name: &'static str,
	default: T,
) -> Result<T, Error> {
	let Some(value) = lookup(name) else {
		return Ok(default);
	};

	value.parse().map_err(|_| Error::Invalid { name, value })
}

#[cfg(test)]
mod test {
	use std::collections::HashMap;

	use super::*;

	fn config(vars: &[(&str, &str)]) -> Result<Config, Error> {
		let vars = vars
			.iter()
			.map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
			.collect::<HashMap<_, _>>();

		Config::from_lookup(|name| vars.get(name).cloned())
	}

	#[test]
	fn test_defaults() {
		let config = config(&[("DATABASE_URL", "sqlite::memory:"), ("JWT_SECRET", "s3cret")]).unwrap();

		assert_eq!(config.port, 3000);
		assert_eq!(config.max_connections, 5);
		assert_eq!(config.host, IpAddr::from([127, 0, 0, 1]));
		assert_eq!(config.token_ttl, chrono::Duration::minutes(15));
	}

	#[test]
	fn test_overrides() {
		let config = config(&[
			("DATABASE_URL", "sqlite::memory:"),
			("JWT_SECRET", "s3cret"),
			("PORT", "8080"),
			("HOST", "0.0.0.0"),
			("JWT_EXPIRY_MINUTES", "60"),
		])
		.unwrap();

		assert_eq!(config.port, 8080);
		assert_eq!(config.host, IpAddr::from([0, 0, 0, 0]));
		assert_eq!(config.token_ttl, chrono::Duration::hours(1));
	}

	#[test]
	fn test_missing_required() {
		assert!(matches!(
			config(&[("JWT_SECRET", "s3cret")]),
			Err(Error::Missing("DATABASE_URL"))
		));
		assert!(matches!(
			config(&[("DATABASE_URL", "sqlite::memory:"), ("JWT_SECRET", "")]),
			Err(Error::Missing("JWT_SECRET"))
		));
	}

	#[test]
	fn test_invalid_values() {
		assert!(matches!(
			config(&[
				("DATABASE_URL", "sqlite::memory:"),
				("JWT_SECRET", "s3cret"),
				("PORT", "http"),
			]),
			Err(Error::Invalid { name: "PORT", .. })
		));
		assert!(matches!(
			config(&[
				("DATABASE_URL", "sqlite::memory:"),
				("JWT_SECRET", "s3cret"),
				("JWT_EXPIRY_MINUTES", "0"),
			]),
			Err(Error::Invalid {
				name: "JWT_EXPIRY_MINUTES",
				..
			})
		));
	}
}
