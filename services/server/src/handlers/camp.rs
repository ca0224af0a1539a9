use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vaxcamp_auth::identity::Identity;
use vaxcamp_domain::{
    camp::{CampStatus, GeoPoint},
    pagination::PageRequest,
    user::UserRole,
};

use crate::domain::types::{
    Camp, CampAppointment, CampSummary, InventoryLine, InventoryLineDetail, StaffMember,
    StaffSession,
};
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::camp::{
    AddStaffUseCase, CampDetailUseCase, CreateCampInput, CreateCampUseCase, DeleteCampUseCase,
    GetCampUseCase, ListCampsUseCase, ListStaffUseCase, MyCampsUseCase, StaffLoginInput,
    StaffLoginUseCase, UpdateCampInput, UpdateCampUseCase,
};

#[derive(Deserialize)]
pub struct InventoryLineRequest {
    pub vaccine_id: Uuid,
    pub quantity: i32,
}

impl From<InventoryLineRequest> for InventoryLine {
    fn from(line: InventoryLineRequest) -> Self {
        Self {
            vaccine_id: line.vaccine_id,
            quantity: line.quantity,
        }
    }
}

#[derive(Serialize)]
pub struct OrganizerResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Serialize)]
pub struct InventoryResponse {
    pub vaccine_id: String,
    pub vaccine_name: String,
    pub quantity: i32,
}

impl From<InventoryLineDetail> for InventoryResponse {
    fn from(line: InventoryLineDetail) -> Self {
        Self {
            vaccine_id: line.vaccine_id.to_string(),
            vaccine_name: line.vaccine_name,
            quantity: line.quantity,
        }
    }
}

// ── POST /api/camps ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateCampRequest {
    pub name: String,
    pub location: GeoPoint,
    pub address: String,
    pub starts_at: chrono::DateTime<chrono::Utc>,
    pub ends_at: chrono::DateTime<chrono::Utc>,
    pub access_code: String,
    pub staff_pin: String,
    #[serde(default)]
    pub staff: Vec<String>,
    #[serde(default)]
    pub inventory: Vec<InventoryLineRequest>,
}

/// Owner's view of a camp, access code included.
#[derive(Serialize)]
pub struct OwnedCampResponse {
    pub id: String,
    pub name: String,
    pub location: GeoPoint,
    pub address: String,
    #[serde(serialize_with = "vaxcamp_core::serde::to_rfc3339_ms")]
    pub starts_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "vaxcamp_core::serde::to_rfc3339_ms")]
    pub ends_at: chrono::DateTime<chrono::Utc>,
    pub status: CampStatus,
    pub access_code: String,
    #[serde(serialize_with = "vaxcamp_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "vaxcamp_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Camp> for OwnedCampResponse {
    fn from(camp: Camp) -> Self {
        Self {
            id: camp.id.to_string(),
            name: camp.name,
            location: camp.location,
            address: camp.address,
            starts_at: camp.starts_at,
            ends_at: camp.ends_at,
            status: camp.status,
            access_code: camp.access_code,
            created_at: camp.created_at,
            updated_at: camp.updated_at,
        }
    }
}

pub async fn create_camp(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateCampRequest>,
) -> Result<(StatusCode, Json<OwnedCampResponse>), ApiError> {
    if identity.role < UserRole::Organizer {
        return Err(ApiError::Forbidden);
    }
    let usecase = CreateCampUseCase {
        camps: state.camp_repo(),
        users: state.user_repo(),
        vaccines: state.vaccine_repo(),
    };
    let camp = usecase
        .execute(
            identity.user_id,
            CreateCampInput {
                name: body.name,
                location: body.location,
                address: body.address,
                starts_at: body.starts_at,
                ends_at: body.ends_at,
                access_code: body.access_code,
                staff_pin: body.staff_pin,
                staff_emails: body.staff,
                inventory: body.inventory.into_iter().map(Into::into).collect(),
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(camp.into())))
}

// ── GET /api/camps ───────────────────────────────────────────────────────────

/// Public view of a camp. No access code, no PIN material.
#[derive(Serialize)]
pub struct CampResponse {
    pub id: String,
    pub name: String,
    pub organizer: OrganizerResponse,
    pub location: GeoPoint,
    pub address: String,
    #[serde(serialize_with = "vaxcamp_core::serde::to_rfc3339_ms")]
    pub starts_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "vaxcamp_core::serde::to_rfc3339_ms")]
    pub ends_at: chrono::DateTime<chrono::Utc>,
    pub status: CampStatus,
}

impl From<CampSummary> for CampResponse {
    fn from(summary: CampSummary) -> Self {
        Self {
            id: summary.camp.id.to_string(),
            name: summary.camp.name,
            organizer: OrganizerResponse {
                id: summary.camp.organizer_id.to_string(),
                name: summary.organizer_name,
                email: summary.organizer_email,
            },
            location: summary.camp.location,
            address: summary.camp.address,
            starts_at: summary.camp.starts_at,
            ends_at: summary.camp.ends_at,
            status: summary.camp.status,
        }
    }
}

pub async fn list_camps(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Vec<CampResponse>>, ApiError> {
    let usecase = ListCampsUseCase {
        repo: state.camp_repo(),
    };
    let camps = usecase.execute(page).await?;
    Ok(Json(camps.into_iter().map(CampResponse::from).collect()))
}

// ── GET /api/camps/{id} ──────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct CampWithInventoryResponse {
    #[serde(flatten)]
    pub camp: CampResponse,
    pub inventory: Vec<InventoryResponse>,
}

pub async fn get_camp(
    State(state): State<AppState>,
    Path(camp_id): Path<Uuid>,
) -> Result<Json<CampWithInventoryResponse>, ApiError> {
    let usecase = GetCampUseCase {
        camps: state.camp_repo(),
        users: state.user_repo(),
    };
    let view = usecase.execute(camp_id).await?;
    Ok(Json(CampWithInventoryResponse {
        camp: CampSummary {
            camp: view.camp,
            organizer_name: view.organizer_name,
            organizer_email: view.organizer_email,
        }
        .into(),
        inventory: view.inventory.into_iter().map(Into::into).collect(),
    }))
}

// ── PUT /api/camps/{id} ──────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateCampRequest {
    pub name: Option<String>,
    pub location: Option<GeoPoint>,
    pub address: Option<String>,
    pub starts_at: Option<chrono::DateTime<chrono::Utc>>,
    pub ends_at: Option<chrono::DateTime<chrono::Utc>>,
    pub status: Option<String>,
    pub staff_pin: Option<String>,
    pub staff: Option<Vec<String>>,
    pub inventory: Option<Vec<InventoryLineRequest>>,
}

pub async fn update_camp(
    identity: Identity,
    State(state): State<AppState>,
    Path(camp_id): Path<Uuid>,
    Json(body): Json<UpdateCampRequest>,
) -> Result<StatusCode, ApiError> {
    let status = match body.status.as_deref() {
        Some(name) => {
            Some(CampStatus::from_name(name).ok_or(ApiError::Validation("unknown camp status"))?)
        }
        None => None,
    };
    let usecase = UpdateCampUseCase {
        camps: state.camp_repo(),
        users: state.user_repo(),
        vaccines: state.vaccine_repo(),
    };
    usecase
        .execute(
            camp_id,
            identity.user_id,
            identity.role,
            UpdateCampInput {
                name: body.name,
                location: body.location,
                address: body.address,
                starts_at: body.starts_at,
                ends_at: body.ends_at,
                status,
                staff_pin: body.staff_pin,
                staff_emails: body.staff,
                inventory: body
                    .inventory
                    .map(|lines| lines.into_iter().map(Into::into).collect()),
            },
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /api/camps/{id} ───────────────────────────────────────────────────

pub async fn delete_camp(
    identity: Identity,
    State(state): State<AppState>,
    Path(camp_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let usecase = DeleteCampUseCase {
        repo: state.camp_repo(),
    };
    usecase
        .execute(camp_id, identity.user_id, identity.role)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── POST /api/camps/staff-login ──────────────────────────────────────────────

#[derive(Deserialize)]
pub struct StaffLoginRequest {
    pub access_code: String,
    pub staff_email: String,
    pub staff_pin: String,
}

#[derive(Serialize)]
pub struct StaffSessionResponse {
    pub camp_id: String,
    pub camp_name: String,
    pub staff_name: String,
    pub staff_email: String,
}

impl From<StaffSession> for StaffSessionResponse {
    fn from(session: StaffSession) -> Self {
        Self {
            camp_id: session.camp_id.to_string(),
            camp_name: session.camp_name,
            staff_name: session.staff_name,
            staff_email: session.staff_email,
        }
    }
}

pub async fn staff_login(
    State(state): State<AppState>,
    Json(body): Json<StaffLoginRequest>,
) -> Result<Json<StaffSessionResponse>, ApiError> {
    let usecase = StaffLoginUseCase {
        camps: state.camp_repo(),
        users: state.user_repo(),
    };
    let session = usecase
        .execute(StaffLoginInput {
            access_code: body.access_code,
            staff_email: body.staff_email,
            staff_pin: body.staff_pin,
        })
        .await?;
    Ok(Json(session.into()))
}

// ── PUT /api/camps/{id}/addstaff ─────────────────────────────────────────────

#[derive(Deserialize)]
pub struct AddStaffRequest {
    pub email: String,
}

pub async fn add_staff(
    identity: Identity,
    State(state): State<AppState>,
    Path(camp_id): Path<Uuid>,
    Json(body): Json<AddStaffRequest>,
) -> Result<StatusCode, ApiError> {
    let usecase = AddStaffUseCase {
        camps: state.camp_repo(),
        users: state.user_repo(),
    };
    usecase
        .execute(camp_id, identity.user_id, identity.role, &body.email)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /api/camps/{id}/staff ────────────────────────────────────────────────

#[derive(Serialize)]
pub struct StaffResponse {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(serialize_with = "vaxcamp_core::serde::to_rfc3339_ms")]
    pub added_at: chrono::DateTime<chrono::Utc>,
}

impl From<StaffMember> for StaffResponse {
    fn from(member: StaffMember) -> Self {
        Self {
            user_id: member.user_id.to_string(),
            name: member.name,
            email: member.email,
            role: member.role,
            added_at: member.added_at,
        }
    }
}

pub async fn list_staff(
    _identity: Identity,
    State(state): State<AppState>,
    Path(camp_id): Path<Uuid>,
) -> Result<Json<Vec<StaffResponse>>, ApiError> {
    let usecase = ListStaffUseCase {
        repo: state.camp_repo(),
    };
    let staff = usecase.execute(camp_id).await?;
    Ok(Json(staff.into_iter().map(StaffResponse::from).collect()))
}

// ── GET /api/camps/{id}/detail ───────────────────────────────────────────────

#[derive(Serialize)]
pub struct CampAppointmentResponse {
    pub id: String,
    pub beneficiary_id: String,
    pub beneficiary_name: String,
    pub beneficiary_email: String,
    pub vaccine_name: String,
    #[serde(serialize_with = "vaxcamp_core::serde::to_rfc3339_ms")]
    pub slot_at: chrono::DateTime<chrono::Utc>,
    pub status: vaxcamp_domain::appointment::AppointmentStatus,
}

impl From<CampAppointment> for CampAppointmentResponse {
    fn from(appt: CampAppointment) -> Self {
        Self {
            id: appt.id.to_string(),
            beneficiary_id: appt.beneficiary_id.to_string(),
            beneficiary_name: appt.beneficiary_name,
            beneficiary_email: appt.beneficiary_email,
            vaccine_name: appt.vaccine_name,
            slot_at: appt.slot_at,
            status: appt.status,
        }
    }
}

#[derive(Serialize)]
pub struct CampDetailResponse {
    #[serde(flatten)]
    pub camp: CampResponse,
    pub staff: Vec<StaffResponse>,
    pub inventory: Vec<InventoryResponse>,
    pub appointments: Vec<CampAppointmentResponse>,
}

pub async fn get_camp_detail(
    _identity: Identity,
    State(state): State<AppState>,
    Path(camp_id): Path<Uuid>,
) -> Result<Json<CampDetailResponse>, ApiError> {
    let usecase = CampDetailUseCase {
        camps: state.camp_repo(),
        users: state.user_repo(),
        appointments: state.appointment_repo(),
    };
    let detail = usecase.execute(camp_id).await?;
    Ok(Json(CampDetailResponse {
        camp: CampSummary {
            camp: detail.camp,
            organizer_name: detail.organizer_name,
            organizer_email: detail.organizer_email,
        }
        .into(),
        staff: detail.staff.into_iter().map(Into::into).collect(),
        inventory: detail.inventory.into_iter().map(Into::into).collect(),
        appointments: detail.appointments.into_iter().map(Into::into).collect(),
    }))
}

// ── GET /api/camps/mycamps ───────────────────────────────────────────────────

#[derive(Serialize)]
pub struct MyCampsResponse {
    pub camps: Vec<OwnedCampResponse>,
    pub profile: crate::handlers::user::UserResponse,
}

pub async fn my_camps(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<MyCampsResponse>, ApiError> {
    let usecase = MyCampsUseCase {
        camps: state.camp_repo(),
        users: state.user_repo(),
    };
    let out = usecase.execute(identity.user_id).await?;
    Ok(Json(MyCampsResponse {
        camps: out.camps.into_iter().map(Into::into).collect(),
        profile: out.profile.into(),
    }))
}
