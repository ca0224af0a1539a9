use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vaxcamp_auth::identity::Identity;
use vaxcamp_domain::{appointment::AppointmentStatus, pagination::PageRequest};

use crate::domain::types::{Appointment, AppointmentDetail};
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::appointment::{
    BookAppointmentInput, BookAppointmentUseCase, DeleteAppointmentUseCase,
    MyAppointmentsUseCase, UpdateAppointmentStatusUseCase,
};

// ── POST /api/appointments ───────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct BookAppointmentRequest {
    pub camp_id: Uuid,
    pub vaccine_id: Uuid,
    pub slot_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Serialize)]
pub struct AppointmentResponse {
    pub id: String,
    pub beneficiary_id: String,
    pub camp_id: String,
    pub vaccine_id: String,
    #[serde(serialize_with = "vaxcamp_core::serde::to_rfc3339_ms")]
    pub slot_at: chrono::DateTime<chrono::Utc>,
    pub status: AppointmentStatus,
    #[serde(serialize_with = "vaxcamp_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Appointment> for AppointmentResponse {
    fn from(appt: Appointment) -> Self {
        Self {
            id: appt.id.to_string(),
            beneficiary_id: appt.beneficiary_id.to_string(),
            camp_id: appt.camp_id.to_string(),
            vaccine_id: appt.vaccine_id.to_string(),
            slot_at: appt.slot_at,
            status: appt.status,
            created_at: appt.created_at,
        }
    }
}

pub async fn book_appointment(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<BookAppointmentRequest>,
) -> Result<(StatusCode, Json<AppointmentResponse>), ApiError> {
    let usecase = BookAppointmentUseCase {
        camps: state.camp_repo(),
        vaccines: state.vaccine_repo(),
        appointments: state.appointment_repo(),
    };
    let appointment = usecase
        .execute(
            identity.user_id,
            BookAppointmentInput {
                camp_id: body.camp_id,
                vaccine_id: body.vaccine_id,
                slot_at: body.slot_at,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(appointment.into())))
}

// ── GET /api/appointments/myappointments ─────────────────────────────────────

#[derive(Serialize)]
pub struct MyAppointmentResponse {
    pub id: String,
    pub camp_id: String,
    pub camp_name: String,
    pub camp_address: String,
    pub vaccine_id: String,
    pub vaccine_name: String,
    #[serde(serialize_with = "vaxcamp_core::serde::to_rfc3339_ms")]
    pub slot_at: chrono::DateTime<chrono::Utc>,
    pub status: AppointmentStatus,
    #[serde(serialize_with = "vaxcamp_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<AppointmentDetail> for MyAppointmentResponse {
    fn from(detail: AppointmentDetail) -> Self {
        Self {
            id: detail.id.to_string(),
            camp_id: detail.camp_id.to_string(),
            camp_name: detail.camp_name,
            camp_address: detail.camp_address,
            vaccine_id: detail.vaccine_id.to_string(),
            vaccine_name: detail.vaccine_name,
            slot_at: detail.slot_at,
            status: detail.status,
            created_at: detail.created_at,
        }
    }
}

pub async fn my_appointments(
    identity: Identity,
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Vec<MyAppointmentResponse>>, ApiError> {
    let usecase = MyAppointmentsUseCase {
        repo: state.appointment_repo(),
    };
    let appointments = usecase.execute(identity.user_id, page).await?;
    Ok(Json(
        appointments
            .into_iter()
            .map(MyAppointmentResponse::from)
            .collect(),
    ))
}

// ── PUT /api/appointments/{id}/status ────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

pub async fn update_appointment_status(
    identity: Identity,
    State(state): State<AppState>,
    Path(appointment_id): Path<Uuid>,
    Json(body): Json<UpdateStatusRequest>,
) -> Result<StatusCode, ApiError> {
    let status = AppointmentStatus::from_name(&body.status)
        .ok_or(ApiError::Validation("unknown appointment status"))?;
    let usecase = UpdateAppointmentStatusUseCase {
        repo: state.appointment_repo(),
    };
    usecase
        .execute(appointment_id, identity.user_id, identity.role, status)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /api/appointments/{id} ────────────────────────────────────────────

pub async fn delete_appointment(
    identity: Identity,
    State(state): State<AppState>,
    Path(appointment_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let usecase = DeleteAppointmentUseCase {
        repo: state.appointment_repo(),
    };
    usecase
        .execute(appointment_id, identity.user_id, identity.role)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
