use chrono::Utc;
use uuid::Uuid;
use vaxcamp_auth::password::{hash_secret, verify_secret};
use vaxcamp_auth::token::issue_access_token;
use vaxcamp_domain::user::UserRole;

use crate::domain::repository::UserRepository;
use crate::domain::types::{MIN_PASSWORD_LEN, User, normalize_email, validate_email};
use crate::error::ApiError;

/// A freshly issued session: the account plus its bearer token.
#[derive(Debug)]
pub struct AuthOutput {
    pub user: User,
    pub access_token: String,
    /// Absolute expiry, seconds since the UNIX epoch.
    pub access_token_exp: u64,
}

fn hash_password(plain: &str) -> Result<String, ApiError> {
    hash_secret(plain).map_err(|e| ApiError::Internal(anyhow::anyhow!("hash password: {e}")))
}

// ── Register ─────────────────────────────────────────────────────────────────

pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone_number: Option<String>,
    pub external_id: Option<String>,
    pub address: Option<String>,
}

pub struct RegisterUseCase<U: UserRepository> {
    pub users: U,
    pub jwt_secret: String,
}

impl<U: UserRepository> RegisterUseCase<U> {
    pub async fn execute(&self, input: RegisterInput) -> Result<AuthOutput, ApiError> {
        let name = input.name.trim().to_owned();
        if name.is_empty() {
            return Err(ApiError::Validation("name is required"));
        }

        let email = normalize_email(&input.email);
        if !validate_email(&email) {
            return Err(ApiError::Validation("invalid email address"));
        }

        if input.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ApiError::Validation(
                "password must be at least 8 characters",
            ));
        }

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(ApiError::EmailTaken);
        }

        let external_id = input
            .external_id
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_owned);

        if let Some(external_id) = &external_id {
            if self.users.find_by_external_id(external_id).await?.is_some() {
                return Err(ApiError::ExternalIdTaken);
            }
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::now_v7(),
            name,
            email,
            password_hash: hash_password(&input.password)?,
            role: UserRole::Beneficiary,
            phone_number: input.phone_number.filter(|v| !v.trim().is_empty()),
            external_id,
            address: input.address.filter(|v| !v.trim().is_empty()),
            created_at: now,
            updated_at: now,
        };

        self.users.create(&user).await?;

        let (access_token, access_token_exp) =
            issue_access_token(user.id, user.role, &self.jwt_secret)
                .map_err(|e| ApiError::Internal(e.into()))?;

        Ok(AuthOutput {
            user,
            access_token,
            access_token_exp,
        })
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

pub struct LoginUseCase<U: UserRepository> {
    pub users: U,
    pub jwt_secret: String,
}

impl<U: UserRepository> LoginUseCase<U> {
    pub async fn execute(&self, input: LoginInput) -> Result<AuthOutput, ApiError> {
        let email = normalize_email(&input.email);

        // Unknown email and wrong password answer identically.
        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(ApiError::InvalidCredentials)?;

        if !verify_secret(&input.password, &user.password_hash) {
            return Err(ApiError::InvalidCredentials);
        }

        let (access_token, access_token_exp) =
            issue_access_token(user.id, user.role, &self.jwt_secret)
                .map_err(|e| ApiError::Internal(e.into()))?;

        Ok(AuthOutput {
            user,
            access_token,
            access_token_exp,
        })
    }
}
