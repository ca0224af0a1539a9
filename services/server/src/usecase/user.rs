use uuid::Uuid;
use vaxcamp_auth::password::hash_secret;
use vaxcamp_domain::{pagination::PageRequest, user::UserRole};

use crate::domain::repository::UserRepository;
use crate::domain::types::{MIN_PASSWORD_LEN, ProfileChanges, User};
use crate::error::ApiError;

// ── Own profile ──────────────────────────────────────────────────────────────

pub struct GetProfileUseCase<U: UserRepository> {
    pub repo: U,
}

impl<U: UserRepository> GetProfileUseCase<U> {
    pub async fn execute(&self, caller_id: Uuid) -> Result<User, ApiError> {
        self.repo
            .find_by_id(caller_id)
            .await?
            .ok_or(ApiError::UserNotFound)
    }
}

pub struct UpdateProfileInput {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub password: Option<String>,
}

pub struct UpdateProfileUseCase<U: UserRepository> {
    pub repo: U,
}

impl<U: UserRepository> UpdateProfileUseCase<U> {
    pub async fn execute(
        &self,
        caller_id: Uuid,
        input: UpdateProfileInput,
    ) -> Result<(), ApiError> {
        let name = match input.name {
            Some(name) => {
                let name = name.trim().to_owned();
                if name.is_empty() {
                    return Err(ApiError::Validation("name is required"));
                }
                Some(name)
            }
            None => None,
        };

        let password_hash = match input.password {
            Some(password) => {
                if password.chars().count() < MIN_PASSWORD_LEN {
                    return Err(ApiError::Validation(
                        "password must be at least 8 characters",
                    ));
                }
                let hash = hash_secret(&password)
                    .map_err(|e| ApiError::Internal(anyhow::anyhow!("hash password: {e}")))?;
                Some(hash)
            }
            None => None,
        };

        let changes = ProfileChanges {
            name,
            phone_number: input.phone_number,
            address: input.address,
            password_hash,
        };

        if changes.is_empty() {
            return Err(ApiError::Validation("no fields to update"));
        }

        if self.repo.find_by_id(caller_id).await?.is_none() {
            return Err(ApiError::UserNotFound);
        }

        self.repo.update_profile(caller_id, &changes).await?;

        Ok(())
    }
}

// ── Directory (admin) ────────────────────────────────────────────────────────

pub struct ListUsersUseCase<U: UserRepository> {
    pub repo: U,
}

impl<U: UserRepository> ListUsersUseCase<U> {
    pub async fn execute(&self, page: PageRequest) -> Result<Vec<User>, ApiError> {
        self.repo.list(page).await
    }
}

pub struct GetUserUseCase<U: UserRepository> {
    pub repo: U,
}

impl<U: UserRepository> GetUserUseCase<U> {
    pub async fn execute(&self, user_id: Uuid) -> Result<User, ApiError> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(ApiError::UserNotFound)
    }
}

pub struct ListUsersByRoleUseCase<U: UserRepository> {
    pub repo: U,
}

impl<U: UserRepository> ListUsersByRoleUseCase<U> {
    pub async fn execute(&self, role: UserRole, page: PageRequest) -> Result<Vec<User>, ApiError> {
        self.repo.list_by_role(role, page).await
    }
}

pub struct UpdateRoleUseCase<U: UserRepository> {
    pub repo: U,
}

impl<U: UserRepository> UpdateRoleUseCase<U> {
    pub async fn execute(&self, user_id: Uuid, role: UserRole) -> Result<(), ApiError> {
        if self.repo.find_by_id(user_id).await?.is_none() {
            return Err(ApiError::UserNotFound);
        }

        self.repo.update_role(user_id, role).await?;

        Ok(())
    }
}
