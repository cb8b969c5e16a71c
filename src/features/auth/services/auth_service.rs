use crate::core::error::{AppError, Result};
use crate::features::auth::clients::{IdentityClient, IdentityUser};
use crate::features::auth::dtos::{
    AuthResponseDto, AuthUserDto, LoginRequestDto, MeResponseDto, RegisterRequestDto,
};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::auth::services::TokenService;
use sqlx::PgPool;
use std::sync::Arc;

/// Service for authentication operations (register, login, logout)
pub struct AuthService {
    identity_client: Arc<IdentityClient>,
    token_service: Arc<TokenService>,
    pool: PgPool,
}

impl AuthService {
    pub fn new(
        identity_client: Arc<IdentityClient>,
        token_service: Arc<TokenService>,
        pool: PgPool,
    ) -> Self {
        Self {
            identity_client,
            token_service,
            pool,
        }
    }

    /// Register a new user with the identity provider and issue a token
    pub async fn register(&self, dto: RegisterRequestDto) -> Result<AuthResponseDto> {
        let user = self
            .identity_client
            .create_user(&dto.email, &dto.password, dto.username.as_deref())
            .await?;

        tracing::info!("Account registered: id={}", user.id);

        self.issue_for(user)
    }

    /// Login with email and password
    pub async fn login(&self, dto: LoginRequestDto) -> Result<AuthResponseDto> {
        let user = self
            .identity_client
            .find_user_by_email(&dto.email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if user.is_suspended {
            return Err(AppError::Forbidden("Account is suspended".to_string()));
        }

        let password_valid = self
            .identity_client
            .verify_password(&user.id, &dto.password)
            .await?;

        if !password_valid {
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        self.issue_for(user)
    }

    /// Get current user info (for /me endpoint)
    pub async fn get_current_user(&self, user: AuthenticatedUser) -> Result<MeResponseDto> {
        Ok(user.into())
    }

    /// End the interactive session.
    ///
    /// Access tokens are stateless, so the token itself is discarded client
    /// side; the server drops any in-progress quiz attempt for the account.
    pub async fn logout(&self, user: &AuthenticatedUser) -> Result<()> {
        sqlx::query("DELETE FROM quiz_sessions WHERE account_id = $1")
            .bind(&user.account_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        tracing::info!("Account logged out: id={}", user.account_id);
        Ok(())
    }

    fn issue_for(&self, user: IdentityUser) -> Result<AuthResponseDto> {
        let issued =
            self.token_service
                .issue(&user.id, user.email.as_deref(), &user.roles)?;

        Ok(AuthResponseDto {
            access_token: issued.access_token,
            token_type: issued.token_type,
            expires_in: issued.expires_in,
            user: AuthUserDto {
                id: user.id,
                username: user.username,
                email: user.email,
                roles: user.roles,
            },
        })
    }
}
