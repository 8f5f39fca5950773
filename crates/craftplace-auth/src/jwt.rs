//! Signed access tokens.
//!
//! Tokens are compact JWS strings signed with HMAC-SHA256 over a JSON
//! [`Payload`]. Verification is stateless: a token is valid when its signature
//! checks out and its payload has not expired. There is no revocation list.
//!
//! # Verification order
//!
//! 1. Format, algorithm and signature. Anything that is not an HS256 token
//!    signed with this service's key, including `alg: none`, is
//!    [`AuthError::InvalidToken`].
//! 2. Expiry: [`AuthError::ExpiredToken`] once `now > expired_at`.
//! 3. Role: [`AuthError::IncorrectRole`] when the embedded role differs from the
//!    one the caller requires.
//!
//! # Example
//!
//! ```ignore
//! use chrono::Duration;
//! use craftplace_auth::{JwtTokenMaker, Role, TokenMaker};
//!
//! let maker = JwtTokenMaker::new(&jwt_config.secret)?;
//! let token = maker.create_token(user_id, Role::User, Duration::hours(1))?;
//! let payload = maker.verify_token(&token, &Role::User)?;
//! ```

use std::fmt;

use chrono::Duration;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::{debug, instrument};
use uuid::Uuid;

use craftplace_config::JwtConfig;

use crate::error::AuthError;
use crate::payload::{Payload, Role};

/// Shortest accepted signing secret, in bytes. Matches the HS256 output size.
pub const MIN_SECRET_KEY_SIZE: usize = 32;

const ALGORITHM: Algorithm = Algorithm::HS256;

/// Issues and verifies access tokens.
pub trait TokenMaker: fmt::Debug + Send + Sync {
    /// Issues a token for `user_id` in `role`, valid for `duration`.
    fn create_token(&self, user_id: Uuid, role: Role, duration: Duration)
    -> Result<String, AuthError>;

    /// Verifies `token` and returns its payload if it was issued for `expected_role`.
    fn verify_token(&self, token: &str, expected_role: &Role) -> Result<Payload, AuthError>;
}

/// HS256 [`TokenMaker`] holding the service's signing secret.
#[derive(Clone)]
pub struct JwtTokenMaker {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl fmt::Debug for JwtTokenMaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenMaker")
            .field("algorithm", &ALGORITHM)
            .finish_non_exhaustive()
    }
}

impl JwtTokenMaker {
    /// Creates a token maker for `secret_key`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidKeySize`] if the secret is shorter than
    /// [`MIN_SECRET_KEY_SIZE`] bytes.
    pub fn new(secret_key: &str) -> Result<Self, AuthError> {
        if secret_key.len() < MIN_SECRET_KEY_SIZE {
            return Err(AuthError::InvalidKeySize {
                actual: secret_key.len(),
                min: MIN_SECRET_KEY_SIZE,
            });
        }

        // Expiry lives in the payload and is checked after the signature, so the
        // registered `exp` claim is neither required nor validated here.
        let mut validation = Validation::new(ALGORITHM);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret_key.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret_key.as_bytes()),
            validation,
        })
    }

    pub fn from_config(config: &JwtConfig) -> Result<Self, AuthError> {
        Self::new(&config.secret)
    }
}

impl TokenMaker for JwtTokenMaker {
    #[instrument(skip(self, role), fields(role = %role))]
    fn create_token(
        &self,
        user_id: Uuid,
        role: Role,
        duration: Duration,
    ) -> Result<String, AuthError> {
        if user_id.is_nil() {
            return Err(AuthError::NilSubject);
        }

        let payload = Payload::new(user_id, role, duration)?;

        encode(&Header::new(ALGORITHM), &payload, &self.encoding_key).map_err(AuthError::Signing)
    }

    #[instrument(skip(self, token, expected_role), fields(expected_role = %expected_role))]
    fn verify_token(&self, token: &str, expected_role: &Role) -> Result<Payload, AuthError> {
        let payload = decode::<Payload>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!(error = %e, "Token rejected");
                AuthError::InvalidToken
            })?;

        if payload.is_expired() {
            debug!(person_id = %payload.person_id(), "Token expired");
            return Err(AuthError::ExpiredToken);
        }

        if payload.role() != expected_role {
            debug!(
                person_id = %payload.person_id(),
                role = %payload.role(),
                "Token role mismatch"
            );
            return Err(AuthError::IncorrectRole);
        }

        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "12345678901234567890123456789012";

    fn get_test_maker() -> JwtTokenMaker {
        JwtTokenMaker::new(TEST_SECRET).unwrap()
    }

    #[test]
    fn test_create_and_verify_token() {
        let maker = get_test_maker();
        let user_id = Uuid::new_v4();
        let duration = Duration::minutes(1);
        let expected_expiry = chrono::Utc::now() + duration;

        let token = maker.create_token(user_id, Role::User, duration).unwrap();
        assert!(!token.is_empty());

        let payload = maker.verify_token(&token, &Role::User).unwrap();
        assert_eq!(payload.person_id(), user_id);
        assert_eq!(payload.role(), &Role::User);

        let drift = (payload.expired_at() - expected_expiry).num_milliseconds().abs();
        assert!(drift < 1000, "expiry drifted by {}ms", drift);
    }

    #[test]
    fn test_expired_token() {
        let maker = get_test_maker();
        let token = maker
            .create_token(Uuid::new_v4(), Role::User, Duration::minutes(-1))
            .unwrap();

        let result = maker.verify_token(&token, &Role::User);
        assert!(matches!(result, Err(AuthError::ExpiredToken)));
    }

    #[test]
    fn test_incorrect_role() {
        let maker = get_test_maker();
        let token = maker
            .create_token(Uuid::new_v4(), Role::User, Duration::minutes(1))
            .unwrap();

        let result = maker.verify_token(&token, &Role::from("admin_role"));
        assert!(matches!(result, Err(AuthError::IncorrectRole)));
    }

    #[test]
    fn test_expiry_checked_before_role() {
        let maker = get_test_maker();
        let token = maker
            .create_token(Uuid::new_v4(), Role::User, Duration::minutes(-1))
            .unwrap();

        let result = maker.verify_token(&token, &Role::from("admin_role"));
        assert!(matches!(result, Err(AuthError::ExpiredToken)));
    }

    #[test]
    fn test_signature_checked_before_expiry() {
        let token = get_test_maker()
            .create_token(Uuid::new_v4(), Role::User, Duration::minutes(-1))
            .unwrap();

        let other = JwtTokenMaker::new("different-secret-key-at-least-32-characters").unwrap();
        assert!(matches!(
            other.verify_token(&token, &Role::User),
            Err(AuthError::InvalidToken)
        ));
        assert!(matches!(
            other.verify_token(&token, &Role::from("x")),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_zero_duration_expired() {
        let maker = get_test_maker();
        let token = maker
            .create_token(Uuid::new_v4(), Role::User, Duration::zero())
            .unwrap();

        // now > expired_at as soon as any time passes after issue
        std::thread::sleep(std::time::Duration::from_millis(5));
        let result = maker.verify_token(&token, &Role::User);
        assert!(matches!(result, Err(AuthError::ExpiredToken)));
    }

    #[test]
    fn test_short_secret_rejected() {
        let result = JwtTokenMaker::new("short_key");
        match result {
            Err(err @ AuthError::InvalidKeySize { actual: 9, min: 32 }) => {
                assert!(err.to_string().contains("invalid key size"));
            }
            other => panic!("expected InvalidKeySize, got {:?}", other),
        }
    }

    #[test]
    fn test_secret_of_exact_minimum_size_accepted() {
        assert!(JwtTokenMaker::new(&"k".repeat(MIN_SECRET_KEY_SIZE)).is_ok());
        assert!(JwtTokenMaker::new(&"k".repeat(MIN_SECRET_KEY_SIZE - 1)).is_err());
    }

    #[test]
    fn test_nil_subject_rejected() {
        let maker = get_test_maker();
        let result = maker.create_token(Uuid::nil(), Role::User, Duration::minutes(1));
        assert!(matches!(result, Err(AuthError::NilSubject)));
    }

    #[test]
    fn test_empty_token() {
        let result = get_test_maker().verify_token("", &Role::User);
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_malformed_token() {
        let result = get_test_maker().verify_token("malformed.jwt.token", &Role::User);
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_wrong_secret() {
        let token = get_test_maker()
            .create_token(Uuid::new_v4(), Role::User, Duration::minutes(1))
            .unwrap();

        let other = JwtTokenMaker::new("different-secret-key-at-least-32-characters").unwrap();
        let result = other.verify_token(&token, &Role::User);
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let maker = get_test_maker();
        let token = maker
            .create_token(Uuid::new_v4(), Role::User, Duration::minutes(1))
            .unwrap();
        let other = maker
            .create_token(Uuid::new_v4(), Role::User, Duration::minutes(1))
            .unwrap();

        // Splice the second token's payload under the first token's signature.
        let parts: Vec<&str> = token.split('.').collect();
        let other_parts: Vec<&str> = other.split('.').collect();
        let forged = format!("{}.{}.{}", parts[0], other_parts[1], parts[2]);

        let result = maker.verify_token(&forged, &Role::User);
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_other_hmac_algorithm_rejected() {
        let payload = Payload::new(Uuid::new_v4(), Role::User, Duration::minutes(1)).unwrap();
        let token = encode(
            &Header::new(Algorithm::HS512),
            &payload,
            &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .unwrap();

        let result = get_test_maker().verify_token(&token, &Role::User);
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_unsigned_token_rejected() {
        // header {"alg":"none","typ":"JWT"}, payload for role "user" expiring in 2099
        let token = "eyJhbGciOiJub25lIiwidHlwIjoiSldUIn0.eyJwZXJzb25faWQiOiI4YzBmM2I1ZS0yZjRhLTRkN2MtOWIxZS0zYTZkNWYyYzFlOTAiLCJyb2xlIjoidXNlciIsImlzc3VlZF9hdCI6IjIwMjQtMDEtMDFUMDA6MDA6MDBaIiwiZXhwaXJlZF9hdCI6IjIwOTktMDEtMDFUMDA6MDA6MDBaIn0.";

        let result = get_test_maker().verify_token(token, &Role::User);
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_tokens_are_unique_per_issue() {
        let maker = get_test_maker();
        let user_id = Uuid::new_v4();

        let first = maker.create_token(user_id, Role::User, Duration::minutes(1)).unwrap();
        let second = maker.create_token(user_id, Role::User, Duration::minutes(1)).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_debug_hides_keys() {
        let debug = format!("{:?}", get_test_maker());
        assert!(!debug.contains(TEST_SECRET));
    }
}
