use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use vaxcamp_core::health::{healthz, readyz};
use vaxcamp_core::middleware::request_id_layer;

use crate::handlers::{
    appointment::{
        book_appointment, delete_appointment, my_appointments, update_appointment_status,
    },
    auth::{login, register},
    camp::{
        add_staff, create_camp, delete_camp, get_camp, get_camp_detail, list_camps, list_staff,
        my_camps, staff_login, update_camp,
    },
    user::{get_profile, get_user, list_users, list_users_by_role, update_profile, update_role},
    vaccine::{create_vaccine, delete_vaccine, get_vaccine, list_vaccines, update_vaccine},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Auth
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        // Users
        .route("/api/users", get(list_users))
        .route("/api/users/profile", get(get_profile))
        .route("/api/users/profile", put(update_profile))
        .route("/api/users/role/{role}", get(list_users_by_role))
        .route("/api/users/{id}", get(get_user))
        .route("/api/users/{id}/role", put(update_role))
        // Camps
        .route("/api/camps", get(list_camps))
        .route("/api/camps", post(create_camp))
        .route("/api/camps/staff-login", post(staff_login))
        .route("/api/camps/mycamps", get(my_camps))
        .route("/api/camps/{id}", get(get_camp))
        .route("/api/camps/{id}", put(update_camp))
        .route("/api/camps/{id}", delete(delete_camp))
        .route("/api/camps/{id}/addstaff", put(add_staff))
        .route("/api/camps/{id}/staff", get(list_staff))
        .route("/api/camps/{id}/detail", get(get_camp_detail))
        // Vaccines
        .route("/api/vaccines", get(list_vaccines))
        .route("/api/vaccines", post(create_vaccine))
        .route("/api/vaccines/{id}", get(get_vaccine))
        .route("/api/vaccines/{id}", put(update_vaccine))
        .route("/api/vaccines/{id}", delete(delete_vaccine))
        // Appointments
        .route("/api/appointments", post(book_appointment))
        .route("/api/appointments/myappointments", get(my_appointments))
        .route(
            "/api/appointments/{id}/status",
            put(update_appointment_status),
        )
        .route("/api/appointments/{id}", delete(delete_appointment))
        // Request-id layer sits outside the trace layer.
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
