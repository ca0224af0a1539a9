use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use vaxcamp_auth::identity::JwtSecret;

use crate::infra::db::{
    DbAppointmentRepository, DbCampRepository, DbUserRepository, DbVaccineRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn vaccine_repo(&self) -> DbVaccineRepository {
        DbVaccineRepository {
            db: self.db.clone(),
        }
    }

    pub fn camp_repo(&self) -> DbCampRepository {
        DbCampRepository {
            db: self.db.clone(),
        }
    }

    pub fn appointment_repo(&self) -> DbAppointmentRepository {
        DbAppointmentRepository {
            db: self.db.clone(),
        }
    }
}

impl FromRef<AppState> for JwtSecret {
    fn from_ref(state: &AppState) -> Self {
        JwtSecret(state.jwt_secret.clone())
    }
}

// The readiness probe extracts the pool directly.
impl FromRef<AppState> for DatabaseConnection {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}
