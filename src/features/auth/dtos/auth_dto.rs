use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::auth::model::AuthenticatedUser;
use crate::shared::validation::USERNAME_REGEX;

/// Request DTO for user registration
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterRequestDto {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    #[validate(
        length(min = 1, max = 50, message = "Username must be 1-50 characters"),
        regex(
            path = *USERNAME_REGEX,
            message = "Username must start with a letter or underscore and contain only letters, digits and underscores"
        )
    )]
    pub username: Option<String>,
}

/// Request DTO for user login
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequestDto {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Response DTO for authentication (register/login)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthResponseDto {
    /// JWT access token
    pub access_token: String,
    /// Token type (always "Bearer")
    pub token_type: String,
    /// Token expiry time in seconds
    pub expires_in: i64,
    /// Authenticated user info
    pub user: AuthUserDto,
}

/// User info included in auth response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthUserDto {
    /// Identity provider user ID
    pub id: String,
    /// Username (optional)
    pub username: Option<String>,
    /// Email address (optional)
    pub email: Option<String>,
    /// Assigned roles ("host" unlocks catalog management)
    pub roles: Vec<String>,
}

/// Response DTO for the /me endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MeResponseDto {
    pub account_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub roles: Vec<String>,
    pub is_host: bool,
}

impl From<AuthenticatedUser> for MeResponseDto {
    fn from(user: AuthenticatedUser) -> Self {
        let is_host = user.is_host();
        Self {
            account_id: user.account_id,
            email: user.email,
            roles: user.roles,
            is_host,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::internet::en::SafeEmail;
    use fake::Fake;
    use validator::Validate;

    #[test]
    fn register_dto_accepts_valid_input() {
        let dto = RegisterRequestDto {
            email: SafeEmail().fake(),
            password: "long-enough-password".to_string(),
            username: Some("quiz_host".to_string()),
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn register_dto_rejects_short_password() {
        let dto = RegisterRequestDto {
            email: SafeEmail().fake(),
            password: "short".to_string(),
            username: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn register_dto_rejects_invalid_username() {
        let dto = RegisterRequestDto {
            email: SafeEmail().fake(),
            password: "long-enough-password".to_string(),
            username: Some("9lives".to_string()),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn login_dto_rejects_malformed_email() {
        let dto = LoginRequestDto {
            email: "not-an-email".to_string(),
            password: "whatever".to_string(),
        };
        assert!(dto.validate().is_err());
    }
}
