use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use vaxcamp_domain::appointment::AppointmentStatus;

/// Vaxcamp API error variants.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("user not found")]
    UserNotFound,
    #[error("camp not found")]
    CampNotFound,
    #[error("vaccine not found")]
    VaccineNotFound,
    #[error("appointment not found")]
    AppointmentNotFound,
    #[error("email already registered")]
    EmailTaken,
    #[error("external id already registered")]
    ExternalIdTaken,
    #[error("access code already taken")]
    AccessCodeTaken,
    #[error("vaccine name already taken")]
    VaccineNameTaken,
    #[error("staff member already added")]
    StaffAlreadyAdded,
    #[error("vaccine not available at this camp")]
    VaccineUnavailable,
    #[error("vaccine is referenced by appointments")]
    VaccineInUse,
    #[error("cannot change appointment status from {from} to {to}")]
    IllegalTransition {
        from: AppointmentStatus,
        to: AppointmentStatus,
    },
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("invalid staff credentials")]
    InvalidStaffCredentials,
    #[error("forbidden")]
    Forbidden,
    #[error("{0}")]
    Validation(&'static str),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::CampNotFound => "CAMP_NOT_FOUND",
            Self::VaccineNotFound => "VACCINE_NOT_FOUND",
            Self::AppointmentNotFound => "APPOINTMENT_NOT_FOUND",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::ExternalIdTaken => "EXTERNAL_ID_TAKEN",
            Self::AccessCodeTaken => "ACCESS_CODE_TAKEN",
            Self::VaccineNameTaken => "VACCINE_NAME_TAKEN",
            Self::StaffAlreadyAdded => "STAFF_ALREADY_ADDED",
            Self::VaccineUnavailable => "VACCINE_UNAVAILABLE",
            Self::VaccineInUse => "VACCINE_IN_USE",
            Self::IllegalTransition { .. } => "ILLEGAL_TRANSITION",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidStaffCredentials => "INVALID_STAFF_CREDENTIALS",
            Self::Forbidden => "FORBIDDEN",
            Self::Validation(_) => "VALIDATION",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UserNotFound
            | Self::CampNotFound
            | Self::VaccineNotFound
            | Self::AppointmentNotFound => StatusCode::NOT_FOUND,
            Self::EmailTaken
            | Self::ExternalIdTaken
            | Self::AccessCodeTaken
            | Self::VaccineNameTaken
            | Self::StaffAlreadyAdded
            | Self::VaccineUnavailable
            | Self::VaccineInUse
            | Self::IllegalTransition { .. } => StatusCode::CONFLICT,
            Self::InvalidCredentials | Self::InvalidStaffCredentials => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
