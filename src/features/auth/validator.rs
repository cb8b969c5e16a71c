use super::model::{AuthenticatedUser, Claims};
use crate::core::config::AuthConfig;
use crate::core::error::AppError;
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};

pub struct JwtValidator {
    decoding_key: DecodingKey,
    issuer: String,
    audience: String,
    leeway: u64,
}

impl JwtValidator {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            leeway: config.jwt_leeway.as_secs(),
        }
    }

    pub fn validate_token(&self, token: &str) -> Result<AuthenticatedUser, AppError> {
        let header = decode_header(token).map_err(|e| AppError::Auth(e.to_string()))?;

        if header.alg != Algorithm::HS256 {
            return Err(AppError::Auth(format!(
                "Unsupported algorithm: {:?}. Only HS256 is allowed",
                header.alg
            )));
        }

        // Setup validation
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);
        validation.leeway = self.leeway;

        // Decode and validate token
        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| AppError::Auth(e.to_string()))?;

        let claims = token_data.claims;

        Ok(AuthenticatedUser {
            account_id: claims.sub,
            email: claims.email,
            roles: claims.roles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::services::TokenService;
    use crate::shared::constants::ROLE_HOST;
    use std::time::Duration;

    fn config(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            issuer: "quizbase".to_string(),
            audience: "quizbase-api".to_string(),
            token_ttl: Duration::from_secs(3600),
            jwt_leeway: Duration::from_secs(0),
        }
    }

    const SECRET: &str = "unit-test-secret-key-with-32-bytes!!";

    #[test]
    fn issued_token_round_trips() {
        let token_service = TokenService::new(config(SECRET));
        let issued = token_service
            .issue(
                "acct-1",
                Some("host@example.com"),
                &[ROLE_HOST.to_string()],
            )
            .unwrap();

        let validator = JwtValidator::new(&config(SECRET));
        let user = validator.validate_token(&issued.access_token).unwrap();

        assert_eq!(user.account_id, "acct-1");
        assert_eq!(user.email.as_deref(), Some("host@example.com"));
        assert!(user.is_host());
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token_service = TokenService::new(config("another-secret-key-that-is-32-bytes!"));
        let issued = token_service.issue("acct-1", None, &[]).unwrap();

        let validator = JwtValidator::new(&config(SECRET));
        assert!(matches!(
            validator.validate_token(&issued.access_token),
            Err(AppError::Auth(_))
        ));
    }

    #[test]
    fn tampered_token_is_rejected() {
        let token_service = TokenService::new(config(SECRET));
        let issued = token_service.issue("acct-1", None, &[]).unwrap();

        let mut tampered = issued.access_token;
        tampered.pop();
        tampered.push('A');

        let validator = JwtValidator::new(&config(SECRET));
        assert!(validator.validate_token(&tampered).is_err());
    }

    #[test]
    fn wrong_audience_is_rejected() {
        let token_service = TokenService::new(config(SECRET));
        let issued = token_service.issue("acct-1", None, &[]).unwrap();

        let mut other = config(SECRET);
        other.audience = "some-other-api".to_string();
        let validator = JwtValidator::new(&other);
        assert!(matches!(
            validator.validate_token(&issued.access_token),
            Err(AppError::Auth(_))
        ));
    }
}
