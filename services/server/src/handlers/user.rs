use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vaxcamp_auth::identity::Identity;
use vaxcamp_domain::{pagination::PageRequest, user::UserRole};

use crate::domain::types::User;
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::user::{
    GetProfileUseCase, GetUserUseCase, ListUsersByRoleUseCase, ListUsersUseCase,
    UpdateProfileInput, UpdateProfileUseCase, UpdateRoleUseCase,
};

// ── GET /api/users/profile ───────────────────────────────────────────────────

#[derive(Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub phone_number: Option<String>,
    pub external_id: Option<String>,
    pub address: Option<String>,
    #[serde(serialize_with = "vaxcamp_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "vaxcamp_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            role: user.role,
            phone_number: user.phone_number,
            external_id: user.external_id,
            address: user.address,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

pub async fn get_profile(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, ApiError> {
    let usecase = GetProfileUseCase {
        repo: state.user_repo(),
    };
    let user = usecase.execute(identity.user_id).await?;
    Ok(Json(user.into()))
}

// ── PUT /api/users/profile ───────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub password: Option<String>,
}

pub async fn update_profile(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<StatusCode, ApiError> {
    let usecase = UpdateProfileUseCase {
        repo: state.user_repo(),
    };
    usecase
        .execute(
            identity.user_id,
            UpdateProfileInput {
                name: body.name,
                phone_number: body.phone_number,
                address: body.address,
                password: body.password,
            },
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /api/users ───────────────────────────────────────────────────────────

pub async fn list_users(
    identity: Identity,
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    if identity.role != UserRole::Admin {
        return Err(ApiError::Forbidden);
    }
    let usecase = ListUsersUseCase {
        repo: state.user_repo(),
    };
    let users = usecase.execute(page).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

// ── GET /api/users/{id} ──────────────────────────────────────────────────────

pub async fn get_user(
    identity: Identity,
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserResponse>, ApiError> {
    if identity.role != UserRole::Admin {
        return Err(ApiError::Forbidden);
    }
    let usecase = GetUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase.execute(user_id).await?;
    Ok(Json(user.into()))
}

// ── GET /api/users/role/{role} ───────────────────────────────────────────────

pub async fn list_users_by_role(
    identity: Identity,
    State(state): State<AppState>,
    Path(role): Path<String>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    if identity.role != UserRole::Admin {
        return Err(ApiError::Forbidden);
    }
    let role = UserRole::from_name(&role).ok_or(ApiError::Validation("unknown role name"))?;
    let usecase = ListUsersByRoleUseCase {
        repo: state.user_repo(),
    };
    let users = usecase.execute(role, page).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

// ── PUT /api/users/{id}/role ─────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateRoleRequest {
    pub role: String,
}

pub async fn update_role(
    identity: Identity,
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(body): Json<UpdateRoleRequest>,
) -> Result<StatusCode, ApiError> {
    if identity.role != UserRole::Admin {
        return Err(ApiError::Forbidden);
    }
    let role = UserRole::from_name(&body.role).ok_or(ApiError::Validation("unknown role name"))?;
    let usecase = UpdateRoleUseCase {
        repo: state.user_repo(),
    };
    usecase.execute(user_id, role).await?;
    Ok(StatusCode::NO_CONTENT)
}
