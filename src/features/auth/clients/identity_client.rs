use crate::core::config::IdentityConfig;
use crate::core::error::{AppError, Result};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// User record returned by the identity provider's management API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityUser {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub is_suspended: bool,
}

/// Request to create a new user in the identity provider
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateUserRequest<'a> {
    email: &'a str,
    password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<&'a str>,
}

/// Request to verify user password
#[derive(Debug, Serialize)]
struct VerifyPasswordRequest<'a> {
    password: &'a str,
}

/// Identity provider error response
#[derive(Debug, Deserialize)]
struct IdentityErrorResponse {
    #[serde(default)]
    message: String,
}

/// Client for the identity provider's management API.
///
/// Credential storage and password policy live entirely on the provider
/// side; this client only relays outcomes.
pub struct IdentityClient {
    config: IdentityConfig,
    http_client: reqwest::Client,
}

impl IdentityClient {
    pub fn new(config: IdentityConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Create a new user account.
    ///
    /// Returns Conflict if the email is already registered.
    pub async fn create_user(
        &self,
        email: &str,
        password: &str,
        username: Option<&str>,
    ) -> Result<IdentityUser> {
        let url = format!("{}/api/users", self.config.base_url);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&CreateUserRequest {
                email,
                password,
                username,
            })
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Identity provider unreachable: {}", e))
            })?;

        match response.status() {
            StatusCode::OK | StatusCode::CREATED => response.json::<IdentityUser>().await.map_err(|e| {
                AppError::ExternalServiceError(format!(
                    "Invalid identity provider response: {}",
                    e
                ))
            }),
            StatusCode::CONFLICT => {
                Err(AppError::Conflict("Email already registered".to_string()))
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let message = response
                    .json::<IdentityErrorResponse>()
                    .await
                    .map(|e| e.message)
                    .unwrap_or_else(|_| "Registration rejected".to_string());
                Err(AppError::Validation(message))
            }
            status => Err(AppError::ExternalServiceError(format!(
                "Identity provider returned {}",
                status
            ))),
        }
    }

    /// Find a user by email. Returns None if no account matches.
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<IdentityUser>> {
        let url = format!("{}/api/users", self.config.base_url);

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&self.config.api_key)
            .query(&[("email", email)])
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Identity provider unreachable: {}", e))
            })?;

        if !response.status().is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "Identity provider returned {}",
                response.status()
            )));
        }

        let users = response.json::<Vec<IdentityUser>>().await.map_err(|e| {
            AppError::ExternalServiceError(format!("Invalid identity provider response: {}", e))
        })?;

        Ok(users.into_iter().next())
    }

    /// Verify a user's password. Returns false on a wrong password.
    pub async fn verify_password(&self, user_id: &str, password: &str) -> Result<bool> {
        let url = format!(
            "{}/api/users/{}/password/verify",
            self.config.base_url, user_id
        );

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&VerifyPasswordRequest { password })
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Identity provider unreachable: {}", e))
            })?;

        match response.status() {
            StatusCode::OK | StatusCode::NO_CONTENT => Ok(true),
            StatusCode::UNAUTHORIZED | StatusCode::UNPROCESSABLE_ENTITY => Ok(false),
            status => Err(AppError::ExternalServiceError(format!(
                "Identity provider returned {}",
                status
            ))),
        }
    }
}
