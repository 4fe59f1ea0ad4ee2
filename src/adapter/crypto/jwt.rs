use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::application::app_error::{AppError, AppResult};
use crate::application::interface::crypto::TokenVerifier;
use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// HS256 verifier for tokens issued by the account service.
#[derive(Clone)]
pub struct JwtTokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenVerifier {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::default(),
        }
    }
}

impl TokenVerifier for JwtTokenVerifier {
    fn verify(&self, token: &str) -> AppResult<Id<User>> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            warn!(error = %e, "Token rejected");
            AppError::InvalidToken
        })?;

        Id::try_from(token_data.claims.sub).map_err(|_| AppError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use jsonwebtoken::{EncodingKey, Header, encode};
    use rstest::{fixture, rstest};

    use super::{Claims, JwtTokenVerifier};
    use crate::application::app_error::AppError;
    use crate::application::interface::crypto::TokenVerifier;

    const SECRET: &str = "test-secret";
    const USER_ID: &str = "019c47ec-183d-744e-b11d-cd409015bf13";

    fn sign(sub: &str, secret: &str, expires_in: Duration) -> String {
        let now = Utc::now();
        let claims = Claims {
            sub: sub.to_string(),
            iat: now.timestamp(),
            exp: (now + expires_in).timestamp(),
        };
        encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes())).unwrap()
    }

    #[fixture]
    fn verifier() -> JwtTokenVerifier {
        JwtTokenVerifier::new(SECRET)
    }

    #[rstest]
    fn test_verify_valid_token(verifier: JwtTokenVerifier) {
        let token = sign(USER_ID, SECRET, Duration::hours(1));

        let user_id = verifier.verify(&token).unwrap();

        assert_eq!(user_id.to_string(), USER_ID);
    }

    #[rstest]
    #[case::wrong_secret(sign(USER_ID, "other-secret", Duration::hours(1)))]
    #[case::expired(sign(USER_ID, SECRET, Duration::hours(-2)))]
    #[case::subject_not_uuid(sign("jane", SECRET, Duration::hours(1)))]
    #[case::garbage("not.a.token".to_string())]
    fn test_verify_rejects(verifier: JwtTokenVerifier, #[case] token: String) {
        let result = verifier.verify(&token);

        assert!(matches!(result.unwrap_err(), AppError::InvalidToken));
    }
}
