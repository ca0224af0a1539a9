#![allow(async_fn_in_trait)]

use uuid::Uuid;

use vaxcamp_domain::appointment::AppointmentStatus;
use vaxcamp_domain::pagination::PageRequest;
use vaxcamp_domain::user::UserRole;

use crate::domain::types::{
    Appointment, AppointmentDetail, Camp, CampAppointment, CampChanges, CampSummary, InventoryLine,
    InventoryLineDetail, ProfileChanges, StaffMember, User, Vaccine, VaccineChanges,
};
use crate::error::ApiError;

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError>;
    /// Lookup by normalized (lowercased) email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError>;
    async fn find_by_external_id(&self, external_id: &str) -> Result<Option<User>, ApiError>;
    async fn list(&self, page: PageRequest) -> Result<Vec<User>, ApiError>;
    async fn list_by_role(&self, role: UserRole, page: PageRequest) -> Result<Vec<User>, ApiError>;
    async fn create(&self, user: &User) -> Result<(), ApiError>;
    async fn update_profile(&self, id: Uuid, changes: &ProfileChanges) -> Result<(), ApiError>;
    async fn update_role(&self, id: Uuid, role: UserRole) -> Result<(), ApiError>;
}

/// Repository for the vaccine catalog.
pub trait VaccineRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Vaccine>, ApiError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Vaccine>, ApiError>;
    async fn list(&self, page: PageRequest) -> Result<Vec<Vaccine>, ApiError>;
    async fn create(&self, vaccine: &Vaccine) -> Result<(), ApiError>;
    async fn update(&self, id: Uuid, changes: &VaccineChanges) -> Result<(), ApiError>;
    /// Hard delete. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, ApiError>;
}

/// Repository for camps, their staff rosters, and their inventories.
pub trait CampRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Camp>, ApiError>;
    async fn find_by_access_code(&self, access_code: &str) -> Result<Option<Camp>, ApiError>;
    /// Camps joined with organizer identity, newest first.
    async fn list(&self, page: PageRequest) -> Result<Vec<CampSummary>, ApiError>;
    async fn list_by_organizer(&self, organizer_id: Uuid) -> Result<Vec<Camp>, ApiError>;
    /// Insert the camp together with its staff and inventory rows in one
    /// transaction.
    async fn create(
        &self,
        camp: &Camp,
        staff_ids: &[Uuid],
        inventory: &[InventoryLine],
    ) -> Result<(), ApiError>;
    /// Apply a partial update in one transaction. Roster/inventory rows are
    /// replaced wholesale only when the corresponding change field is set.
    async fn update(&self, id: Uuid, changes: &CampChanges) -> Result<(), ApiError>;
    /// Hard delete; staff, inventory, and appointment rows cascade.
    /// Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, ApiError>;

    async fn list_staff(&self, camp_id: Uuid) -> Result<Vec<StaffMember>, ApiError>;
    async fn is_staff(&self, camp_id: Uuid, user_id: Uuid) -> Result<bool, ApiError>;
    async fn add_staff(&self, camp_id: Uuid, user_id: Uuid) -> Result<(), ApiError>;

    async fn list_inventory(&self, camp_id: Uuid) -> Result<Vec<InventoryLineDetail>, ApiError>;
}

/// Repository for the appointment ledger.
pub trait AppointmentRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Appointment>, ApiError>;
    /// The beneficiary's appointments joined with camp and vaccine display
    /// fields, newest slot first.
    async fn list_for_beneficiary(
        &self,
        beneficiary_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<AppointmentDetail>, ApiError>;
    /// Every appointment referencing a camp, joined with beneficiary and
    /// vaccine display fields.
    async fn list_for_camp(&self, camp_id: Uuid) -> Result<Vec<CampAppointment>, ApiError>;
    /// Insert the appointment and decrement the matching camp inventory line
    /// in one transaction. Returns `false` without inserting when the line
    /// is missing or already at zero.
    async fn create_reserving_dose(&self, appointment: &Appointment) -> Result<bool, ApiError>;
    /// Set the status. When `restock` is set, the reserved dose is returned
    /// to the camp inventory line in the same transaction.
    async fn update_status(
        &self,
        appointment: &Appointment,
        status: AppointmentStatus,
        restock: bool,
    ) -> Result<(), ApiError>;
    /// Delete the appointment, restocking like [`Self::update_status`].
    /// Returns `true` if a row was deleted.
    async fn delete(&self, appointment: &Appointment, restock: bool) -> Result<bool, ApiError>;
    /// Whether any appointment references the vaccine.
    async fn exists_for_vaccine(&self, vaccine_id: Uuid) -> Result<bool, ApiError>;
}
