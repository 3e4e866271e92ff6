use chrono::Utc;
use jsonwebtoken::{errors::Error, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

pub const AUTHORIZATION_PREFIX: &str = "Bearer ";

/// The claims carried by an access token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
	/// The id of the authenticated user.
	pub sub: i64,
	pub iat: i64,
	pub exp: i64,
}

/// Signing and verification keys for access tokens.
///
/// Tokens are stateless, so verifying one never touches the database.
#[derive(Clone)]
pub struct Keys {
	encoding: EncodingKey,
	decoding: DecodingKey,
	ttl: chrono::Duration,
}

impl Keys {
	pub fn new(secret: &[u8], ttl: chrono::Duration) -> Self {
		Self {
			encoding: EncodingKey::from_secret(secret),
			decoding: DecodingKey::from_secret(secret),
			ttl,
		}
	}

	/// Issues a signed token whose subject is `user_id`.
	pub fn issue(&self, user_id: i64) -> Result<String, Error> {
		let now = Utc::now();
		let claims = Claims {
			sub: user_id,
			iat: now.timestamp(),
			exp: (now + self.ttl).timestamp(),
		};

		jsonwebtoken::encode(&Header::default(), &claims, &self.encoding)
	}

	/// Verifies the signature and expiry of a token, returning its claims.
	pub fn verify(&self, token: &str) -> Result<Claims, Error> {
		jsonwebtoken::decode::<Claims>(token, &self.decoding, &Validation::default())
			.map(|data| data.claims)
	}
}

#[cfg(test)]
mod test {
	use jsonwebtoken::errors::ErrorKind;

	use super::*;

	fn keys(secret: &str, minutes: i64) -> Keys {
		Keys::new(secret.as_bytes(), chrono::Duration::minutes(minutes))
	}

	#[test]
	fn test_issued_token_carries_subject() {
		let keys = keys("s3cret", 15);
		let token = keys.issue(42).unwrap();
		let claims = keys.verify(&token).unwrap();

		assert_eq!(claims.sub, 42);
		assert_eq!(claims.exp - claims.iat, 15 * 60);
	}

	#[test]
	fn test_rejects_foreign_signature() {
		let token = keys("s3cret", 15).issue(1).unwrap();
		let error = keys("other", 15).verify(&token).unwrap_err();

		assert!(matches!(error.kind(), ErrorKind::InvalidSignature));
	}

	#[test]
	fn test_rejects_expired_token() {
		let keys = keys("s3cret", -10);
		let token = keys.issue(1).unwrap();
		let error = keys.verify(&token).unwrap_err();

		assert!(matches!(error.kind(), ErrorKind::ExpiredSignature));
	}

	#[test]
	fn test_rejects_garbage() {
		assert!(keys("s3cret", 15).verify("not.a.token").is_err());
	}
}
