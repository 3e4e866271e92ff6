use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validate::{self, validate_alphanumeric, Violation};

/// Usernames and passwords are alphanumeric, 6 to 20 characters long.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct RegisterInput {
	#[validate(
		required,
		length(min = 6, max = 20),
		custom(function = "validate_alphanumeric")
	)]
	pub username: Option<String>,
	#[validate(
		required,
		length(min = 6, max = 20),
		custom(function = "validate_alphanumeric")
	)]
	pub password: Option<String>,
}

impl RegisterInput {
	/// Returns the username and password if both are present and well-formed.
	pub fn credentials(&self) -> Result<(&str, &str), Violation> {
		validate::check(self, &["username", "password"])?;

		Ok((
			validate::required("username", self.username.as_deref())?,
			validate::required("password", self.password.as_deref())?,
		))
	}
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct LoginInput {
	#[validate(required)]
	pub username: Option<String>,
	#[validate(required)]
	pub password: Option<String>,
}

impl LoginInput {
	/// Returns the username and password if both are present.
	pub fn credentials(&self) -> Result<(&str, &str), Violation> {
		validate::check(self, &["username", "password"])?;

		Ok((
			validate::required("username", self.username.as_deref())?,
			validate::required("password", self.password.as_deref())?,
		))
	}
}

/// The body of a successful login.
#[derive(Debug, Serialize)]
pub struct AccessToken {
	pub access_token: String,
}

#[cfg(test)]
mod test {
	use super::*;

	fn register(username: &str, password: &str) -> RegisterInput {
		RegisterInput {
			username: Some(username.into()),
			password: Some(password.into()),
		}
	}

	#[test]
	fn test_credential_bounds_are_inclusive() {
		assert!(register("abcdef", &"a".repeat(20)).credentials().is_ok());

		assert_eq!(
			register("abcde", "hunter2hunter").credentials(),
			Err(Violation::BadLength("username"))
		);
		assert_eq!(
			register("johnsmith", &"a".repeat(21)).credentials(),
			Err(Violation::BadLength("password"))
		);
	}

	#[test]
	fn test_credentials_must_be_alphanumeric() {
		for value in ["john doe1", "john_doe", "john-doe", "hunter2!"] {
			assert_eq!(
				register("johnsmith", value).credentials(),
				Err(Violation::BadParameter("password")),
				"{value:?} should be rejected"
			);
		}
	}

	#[test]
	fn test_register_checks_presence_first() {
		let input = RegisterInput {
			username: Some("a b".into()),
			password: None,
		};

		assert_eq!(
			input.credentials(),
			Err(Violation::MissingParameter("password"))
		);
	}

	#[test]
	fn test_login_only_checks_presence() {
		let input = LoginInput {
			username: Some("a b".into()),
			password: Some(String::new()),
		};

		assert_eq!(input.credentials(), Ok(("a b", "")));
		assert_eq!(
			LoginInput::default().credentials(),
			Err(Violation::MissingParameter("username"))
		);
	}
}
