use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vaxcamp_auth::identity::Identity;
use vaxcamp_domain::{pagination::PageRequest, user::UserRole};

use crate::domain::types::Vaccine;
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::vaccine::{
    CreateVaccineInput, CreateVaccineUseCase, DeleteVaccineUseCase, GetVaccineUseCase,
    ListVaccinesUseCase, UpdateVaccineInput, UpdateVaccineUseCase,
};

// ── POST /api/vaccines ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateVaccineRequest {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub total_doses: i64,
}

#[derive(Serialize)]
pub struct VaccineResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub total_doses: i64,
    #[serde(serialize_with = "vaxcamp_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "vaxcamp_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Vaccine> for VaccineResponse {
    fn from(vaccine: Vaccine) -> Self {
        Self {
            id: vaccine.id.to_string(),
            name: vaccine.name,
            description: vaccine.description,
            total_doses: vaccine.total_doses,
            created_at: vaccine.created_at,
            updated_at: vaccine.updated_at,
        }
    }
}

pub async fn create_vaccine(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateVaccineRequest>,
) -> Result<(StatusCode, Json<VaccineResponse>), ApiError> {
    if identity.role != UserRole::Admin {
        return Err(ApiError::Forbidden);
    }
    let usecase = CreateVaccineUseCase {
        repo: state.vaccine_repo(),
    };
    let vaccine = usecase
        .execute(CreateVaccineInput {
            name: body.name,
            description: body.description,
            total_doses: body.total_doses,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(vaccine.into())))
}

// ── GET /api/vaccines ────────────────────────────────────────────────────────

pub async fn list_vaccines(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Vec<VaccineResponse>>, ApiError> {
    let usecase = ListVaccinesUseCase {
        repo: state.vaccine_repo(),
    };
    let vaccines = usecase.execute(page).await?;
    Ok(Json(
        vaccines.into_iter().map(VaccineResponse::from).collect(),
    ))
}

// ── GET /api/vaccines/{id} ───────────────────────────────────────────────────

pub async fn get_vaccine(
    State(state): State<AppState>,
    Path(vaccine_id): Path<Uuid>,
) -> Result<Json<VaccineResponse>, ApiError> {
    let usecase = GetVaccineUseCase {
        repo: state.vaccine_repo(),
    };
    let vaccine = usecase.execute(vaccine_id).await?;
    Ok(Json(vaccine.into()))
}

// ── PUT /api/vaccines/{id} ───────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateVaccineRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub total_doses: Option<i64>,
}

pub async fn update_vaccine(
    identity: Identity,
    State(state): State<AppState>,
    Path(vaccine_id): Path<Uuid>,
    Json(body): Json<UpdateVaccineRequest>,
) -> Result<StatusCode, ApiError> {
    if identity.role != UserRole::Admin {
        return Err(ApiError::Forbidden);
    }
    let usecase = UpdateVaccineUseCase {
        repo: state.vaccine_repo(),
    };
    usecase
        .execute(
            vaccine_id,
            UpdateVaccineInput {
                name: body.name,
                description: body.description,
                total_doses: body.total_doses,
            },
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /api/vaccines/{id} ────────────────────────────────────────────────

pub async fn delete_vaccine(
    identity: Identity,
    State(state): State<AppState>,
    Path(vaccine_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if identity.role != UserRole::Admin {
        return Err(ApiError::Forbidden);
    }
    let usecase = DeleteVaccineUseCase {
        vaccines: state.vaccine_repo(),
        appointments: state.appointment_repo(),
    };
    usecase.execute(vaccine_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
