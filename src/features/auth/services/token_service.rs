use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::model::Claims;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

/// A freshly signed access token plus the metadata clients need to use it.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Service for signing HS256 access tokens for authenticated accounts.
pub struct TokenService {
    config: AuthConfig,
    encoding_key: EncodingKey,
}

impl TokenService {
    pub fn new(config: AuthConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        Self {
            config,
            encoding_key,
        }
    }

    /// Sign an access token for the given account.
    pub fn issue(
        &self,
        account_id: &str,
        email: Option<&str>,
        roles: &[String],
    ) -> Result<IssuedToken> {
        let now = chrono::Utc::now().timestamp() as u64;
        let ttl = self.config.token_ttl.as_secs();

        let claims = Claims {
            sub: account_id.to_string(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
            iat: now,
            exp: now + ttl,
            email: email.map(|e| e.to_string()),
            roles: roles.to_vec(),
        };

        let access_token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign access token: {}", e)))?;

        Ok(IssuedToken {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: ttl as i64,
        })
    }
}
