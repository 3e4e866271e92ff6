use validator::{Validate, ValidationError, ValidationErrors};

/// The first rule a request field failed.
///
/// Handlers only ever report one of these, even when several fields fail.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
	#[error("{0} is a required parameter")]
	MissingParameter(&'static str),
	#[error("{0} has an invalid format")]
	BadParameter(&'static str),
	#[error("{0} has an invalid length")]
	BadLength(&'static str),
}

pub fn validate_alphanumeric(value: &str) -> Result<(), ValidationError> {
	if value.chars().any(|c| !c.is_alphanumeric()) {
		return Err(ValidationError::new("alphanumeric"));
	}

	Ok(())
}

pub fn validate_integer(value: &str) -> Result<(), ValidationError> {
	if value.trim().parse::<i64>().is_err() {
		return Err(ValidationError::new("integer"));
	}

	Ok(())
}

/// Runs the derived rules of `input` and reports the first failure.
///
/// A missing field in `fields` wins over any other failure, then fields are
/// considered in the order given.
pub fn check<T: Validate>(input: &T, fields: &[&'static str]) -> Result<(), Violation> {
	input.validate().map_err(|errors| first_violation(&errors, fields))
}

fn first_violation(errors: &ValidationErrors, fields: &[&'static str]) -> Violation {
	let errors = errors.field_errors();

	let missing = fields.iter().copied().find(|field| {
		errors
			.get(field)
			.is_some_and(|e| e.iter().any(|e| e.code == "required"))
	});

	if let Some(field) = missing {
		return Violation::MissingParameter(field);
	}

	let failed = fields
		.iter()
		.copied()
		.find_map(|field| Some((field, errors.get(field)?.first()?)))
		.or_else(|| {
			errors
				.iter()
				.find_map(|(field, e)| Some((*field, e.first()?)))
		});

	match failed {
		Some((field, error)) if error.code == "length" => Violation::BadLength(field),
		Some((field, _)) => Violation::BadParameter(field),
		None => Violation::BadParameter(fields.first().copied().unwrap_or("request")),
	}
}

/// Returns the field value, or [`Violation::MissingParameter`] if it is absent.
pub fn required<'a>(name: &'static str, value: Option<&'a str>) -> Result<&'a str, Violation> {
	value.ok_or(Violation::MissingParameter(name))
}

/// Parses an integer field such as a resource id.
pub fn integer(name: &'static str, value: &str) -> Result<i64, Violation> {
	value
		.trim()
		.parse()
		.map_err(|_| Violation::BadParameter(name))
}
