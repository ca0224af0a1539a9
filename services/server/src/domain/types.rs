use chrono::{DateTime, Utc};
use uuid::Uuid;

use vaxcamp_domain::appointment::AppointmentStatus;
use vaxcamp_domain::camp::{CampStatus, GeoPoint};
use vaxcamp_domain::user::UserRole;

/// Registered account. `password_hash` is an Argon2id PHC string and never
/// leaves the service.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub phone_number: Option<String>,
    pub external_id: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial self-service profile update. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub password_hash: Option<String>,
}

impl ProfileChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone_number.is_none()
            && self.address.is_none()
            && self.password_hash.is_none()
    }
}

/// Vaccine catalog entry.
#[derive(Debug, Clone)]
pub struct Vaccine {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub total_doses: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial vaccine update. Presence decides: `Some(0)` doses is applied.
#[derive(Debug, Clone, Default)]
pub struct VaccineChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub total_doses: Option<i64>,
}

impl VaccineChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.total_doses.is_none()
    }
}

/// Vaccination camp.
#[derive(Debug, Clone)]
pub struct Camp {
    pub id: Uuid,
    pub name: String,
    pub organizer_id: Uuid,
    pub location: GeoPoint,
    pub address: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub status: CampStatus,
    pub access_code: String,
    pub staff_pin_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Camp {
    /// Whether `caller` may mutate this camp: the owning organizer or an admin.
    pub fn can_be_managed_by(&self, caller_id: Uuid, caller_role: UserRole) -> bool {
        caller_role == UserRole::Admin || self.organizer_id == caller_id
    }
}

/// Camp joined with its organizer's public identity for display.
#[derive(Debug, Clone)]
pub struct CampSummary {
    pub camp: Camp,
    pub organizer_name: String,
    pub organizer_email: String,
}

/// One vaccine allocation line in a camp inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryLine {
    pub vaccine_id: Uuid,
    pub quantity: i32,
}

/// Inventory line joined with the vaccine name for display.
#[derive(Debug, Clone)]
pub struct InventoryLineDetail {
    pub vaccine_id: Uuid,
    pub vaccine_name: String,
    pub quantity: i32,
}

/// Rostered staff member with resolved identity.
#[derive(Debug, Clone)]
pub struct StaffMember {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub added_at: DateTime<Utc>,
}

/// Partial camp update.
///
/// Scalar `None` fields are left untouched. `staff_ids` and `inventory`
/// replace the whole roster/inventory when set; `Some(vec![])` empties it,
/// `None` leaves it alone. Presence in the request body, not truthiness of
/// the value, decides.
#[derive(Debug, Clone, Default)]
pub struct CampChanges {
    pub name: Option<String>,
    pub location: Option<GeoPoint>,
    pub address: Option<String>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub status: Option<CampStatus>,
    pub staff_pin_hash: Option<String>,
    pub staff_ids: Option<Vec<Uuid>>,
    pub inventory: Option<Vec<InventoryLine>>,
}

impl CampChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.location.is_none()
            && self.address.is_none()
            && self.starts_at.is_none()
            && self.ends_at.is_none()
            && self.status.is_none()
            && self.staff_pin_hash.is_none()
            && self.staff_ids.is_none()
            && self.inventory.is_none()
    }
}

/// Booked appointment.
#[derive(Debug, Clone)]
pub struct Appointment {
    pub id: Uuid,
    pub beneficiary_id: Uuid,
    pub camp_id: Uuid,
    pub vaccine_id: Uuid,
    pub slot_at: DateTime<Utc>,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Appointment joined with camp and vaccine display fields (beneficiary view).
#[derive(Debug, Clone)]
pub struct AppointmentDetail {
    pub id: Uuid,
    pub camp_id: Uuid,
    pub camp_name: String,
    pub camp_address: String,
    pub vaccine_id: Uuid,
    pub vaccine_name: String,
    pub slot_at: DateTime<Utc>,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

/// Appointment joined with beneficiary and vaccine display fields (camp view).
#[derive(Debug, Clone)]
pub struct CampAppointment {
    pub id: Uuid,
    pub beneficiary_id: Uuid,
    pub beneficiary_name: String,
    pub beneficiary_email: String,
    pub vaccine_name: String,
    pub slot_at: DateTime<Utc>,
    pub status: AppointmentStatus,
}

/// Session payload returned by a successful staff login.
///
/// Deliberately not a signed token: the camp terminal holds it for the
/// duration of a shift and re-authenticates with the camp PIN afterwards.
#[derive(Debug, Clone)]
pub struct StaffSession {
    pub camp_id: Uuid,
    pub camp_name: String,
    pub staff_name: String,
    pub staff_email: String,
}

/// Minimum account password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Minimum camp staff PIN length.
pub const MIN_STAFF_PIN_LEN: usize = 4;

/// Canonical form for stored and compared email addresses.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Validate an email address: one `@`, non-empty local part, dotted domain.
pub fn validate_email(email: &str) -> bool {
    let (local, domain) = match email.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };
    if local.is_empty() || domain.len() < 3 {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
