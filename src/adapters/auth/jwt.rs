//! HS256 JWT adapter for the `SessionValidator` port.
//!
//! Tokens are issued by the identity service and signed with a shared
//! secret. A token is accepted when:
//!
//! - the signature verifies against the configured secret
//! - `iss` and `aud` match the configured values
//! - `exp` is in the future
//! - `sub` is a positive numeric user id and `login` is present

use async_trait::async_trait;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Claims carried by access tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Numeric user id
    pub sub: String,
    pub login: String,
    pub iss: String,
    pub aud: String,
    pub exp: i64,
}

/// Validates bearer tokens signed with the shared HMAC secret.
pub struct JwtSessionValidator {
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
}

impl JwtSessionValidator {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.expose_secret().as_bytes()),
            validation,
            issuer: config.issuer.clone(),
        }
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let data = decode::<AccessClaims>(token, &self.decoding_key, &self.validation).map_err(
            |e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token expired");
                    AuthError::TokenExpired
                }
                ErrorKind::InvalidIssuer => {
                    tracing::warn!("Invalid issuer in token");
                    AuthError::InvalidToken
                }
                ErrorKind::InvalidAudience => {
                    tracing::warn!("Invalid audience in token");
                    AuthError::InvalidToken
                }
                _ => {
                    tracing::warn!("Token validation failed: {}", e);
                    AuthError::InvalidToken
                }
            },
        )?;
        let claims = data.claims;

        let id = claims
            .sub
            .parse::<UserId>()
            .map_err(|_| {
                tracing::warn!("Invalid user id in token subject: {}", claims.sub);
                AuthError::InvalidToken
            })?;

        if claims.login.trim().is_empty() {
            tracing::warn!("Token missing login claim");
            return Err(AuthError::InvalidToken);
        }

        Ok(AuthenticatedUser::new(id, claims.login))
    }
}

impl std::fmt::Debug for JwtSessionValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSessionValidator")
            .field("issuer", &self.issuer)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use secrecy::SecretString;

    const SECRET: &str = "test-secret-with-enough-length-0123456789";

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: SecretString::new(SECRET.to_string()),
            issuer: "auth-service".to_string(),
            audience: "contacts-api".to_string(),
        }
    }

    fn claims() -> AccessClaims {
        AccessClaims {
            sub: "1".to_string(),
            login: "ivanov".to_string(),
            iss: "auth-service".to_string(),
            aud: "contacts-api".to_string(),
            exp: chrono::Utc::now().timestamp() + 3600,
        }
    }

    fn sign(claims: &AccessClaims, secret: &str) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn valid_token_yields_user() {
        let validator = JwtSessionValidator::new(&config());

        let user = validator.validate(&sign(&claims(), SECRET)).await.unwrap();

        assert_eq!(user.id.as_i64(), 1);
        assert_eq!(user.login, "ivanov");
    }

    #[tokio::test]
    async fn wrong_secret_is_rejected() {
        let validator = JwtSessionValidator::new(&config());

        let err = validator
            .validate(&sign(&claims(), "some-other-secret"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::InvalidToken));
    }

    #[tokio::test]
    async fn expired_token_is_reported_as_expired() {
        let validator = JwtSessionValidator::new(&config());
        let expired = AccessClaims {
            exp: chrono::Utc::now().timestamp() - 3600,
            ..claims()
        };

        let err = validator.validate(&sign(&expired, SECRET)).await.unwrap_err();

        assert!(matches!(err, AuthError::TokenExpired));
    }

    #[tokio::test]
    async fn wrong_audience_is_rejected() {
        let validator = JwtSessionValidator::new(&config());
        let foreign = AccessClaims {
            aud: "billing-api".to_string(),
            ..claims()
        };

        let err = validator.validate(&sign(&foreign, SECRET)).await.unwrap_err();

        assert!(matches!(err, AuthError::InvalidToken));
    }

    #[tokio::test]
    async fn wrong_issuer_is_rejected() {
        let validator = JwtSessionValidator::new(&config());
        let foreign = AccessClaims {
            iss: "someone-else".to_string(),
            ..claims()
        };

        let err = validator.validate(&sign(&foreign, SECRET)).await.unwrap_err();

        assert!(matches!(err, AuthError::InvalidToken));
    }

    #[tokio::test]
    async fn non_numeric_subject_is_rejected() {
        let validator = JwtSessionValidator::new(&config());
        let odd = AccessClaims {
            sub: "user-abc".to_string(),
            ..claims()
        };

        let err = validator.validate(&sign(&odd, SECRET)).await.unwrap_err();

        assert!(matches!(err, AuthError::InvalidToken));
    }

    #[tokio::test]
    async fn garbage_token_is_rejected() {
        let validator = JwtSessionValidator::new(&config());

        let err = validator.validate("not.a.jwt").await.unwrap_err();

        assert!(matches!(err, AuthError::InvalidToken));
    }

    #[test]
    fn debug_does_not_leak_secret() {
        let debug = format!("{:?}", JwtSessionValidator::new(&config()));
        assert!(!debug.contains(SECRET));
    }
}
