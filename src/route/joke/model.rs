use serde::Deserialize;
use validator::Validate;

use crate::validate::{self, validate_integer, Violation};

/// A joke is at most 900 characters long.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateJokeInput {
	#[validate(required, length(max = 900))]
	pub content: Option<String>,
}

impl CreateJokeInput {
	pub fn checked(&self) -> Result<&str, Violation> {
		validate::check(self, &["content"])?;
		validate::required("content", self.content.as_deref())
	}
}

/// Addresses a single joke by its id.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct JokeIdInput {
	#[validate(required, custom(function = "validate_integer"))]
	pub joke_id: Option<String>,
}

impl JokeIdInput {
	pub fn checked(&self) -> Result<i64, Violation> {
		validate::check(self, &["joke_id"])?;

		let joke_id = validate::required("joke_id", self.joke_id.as_deref())?;
		validate::integer("joke_id", joke_id)
	}
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateJokeInput {
	#[validate(required, custom(function = "validate_integer"))]
	pub joke_id: Option<String>,
	#[validate(required, length(max = 900))]
	pub content: Option<String>,
}

impl UpdateJokeInput {
	/// Both fields are checked for presence before either is checked for format.
	pub fn checked(&self) -> Result<(i64, &str), Violation> {
		validate::check(self, &["joke_id", "content"])?;

		let joke_id = validate::required("joke_id", self.joke_id.as_deref())?;
		let content = validate::required("content", self.content.as_deref())?;

		Ok((validate::integer("joke_id", joke_id)?, content))
	}
}
