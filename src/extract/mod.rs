mod session;

pub use session::Session;

use axum::{
	extract::{FromRequest, Request},
	http::{header, Method},
};
use serde::de;

use crate::error::AppError;

/// Extractor that deserializes a url-encoded form.
///
/// For `GET` requests the fields are read from the query string. A request
/// without a body deserializes to `T::default()`, so every field of `T`
/// should be an `Option` and presence is checked by the handler.
///
/// Take `Result<Form<T>, AppError>` instead when the handler has to run
/// even if the body cannot be read.
///
/// ```rust
/// async fn route(Form(input): Form<Input>) {
///   // ...
/// }
/// ```
pub struct Form<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for Form<T>
where
	T: de::DeserializeOwned + Default,
	S: Send + Sync,
{
	type Rejection = AppError;

	async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
		if req.method() != Method::GET && !req.headers().contains_key(header::CONTENT_TYPE) {
			return Ok(Self(T::default()));
		}

		let result = axum::Form::<T>::from_request(req, state).await?.0;

		Ok(Self(result))
	}
}
