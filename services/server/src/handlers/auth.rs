use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use vaxcamp_domain::user::UserRole;

use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::auth::{AuthOutput, LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};

// ── POST /api/auth/register ──────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone_number: Option<String>,
    pub external_id: Option<String>,
    pub address: Option<String>,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub token: String,
    pub token_exp: u64,
}

impl From<AuthOutput> for AuthResponse {
    fn from(out: AuthOutput) -> Self {
        Self {
            id: out.user.id.to_string(),
            name: out.user.name,
            email: out.user.email,
            role: out.user.role,
            token: out.access_token,
            token_exp: out.access_token_exp,
        }
    }
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let usecase = RegisterUseCase {
        users: state.user_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let out = usecase
        .execute(RegisterInput {
            name: body.name,
            email: body.email,
            password: body.password,
            phone_number: body.phone_number,
            external_id: body.external_id,
            address: body.address,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(out.into())))
}

// ── POST /api/auth/login ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let usecase = LoginUseCase {
        users: state.user_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let out = usecase
        .execute(LoginInput {
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok(Json(out.into()))
}
