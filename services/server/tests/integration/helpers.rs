use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use vaxcamp_domain::appointment::AppointmentStatus;
use vaxcamp_domain::camp::{CampStatus, GeoPoint};
use vaxcamp_domain::pagination::PageRequest;
use vaxcamp_domain::user::UserRole;
use vaxcamp_server::domain::repository::{
    AppointmentRepository, CampRepository, UserRepository, VaccineRepository,
};
use vaxcamp_server::domain::types::{
    Appointment, AppointmentDetail, Camp, CampAppointment, CampChanges, CampSummary, InventoryLine,
    InventoryLineDetail, ProfileChanges, StaffMember, User, Vaccine, VaccineChanges,
};
use vaxcamp_server::error::ApiError;

/// One camp inventory row, keyed by camp and vaccine.
#[derive(Debug, Clone)]
pub struct InventoryRow {
    pub camp_id: Uuid,
    pub vaccine_id: Uuid,
    pub quantity: i32,
}

/// One camp roster row.
#[derive(Debug, Clone)]
pub struct StaffRow {
    pub camp_id: Uuid,
    pub user_id: Uuid,
    pub added_at: DateTime<Utc>,
}

// ── MockUserRepo ─────────────────────────────────────────────────────────────

pub struct MockUserRepo {
    pub users: Arc<Mutex<Vec<User>>>,
}

impl MockUserRepo {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Returns a shared handle to the internal user list for post-execution inspection.
    pub fn users_handle(&self) -> Arc<Mutex<Vec<User>>> {
        Arc::clone(&self.users)
    }
}

impl UserRepository for MockUserRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_external_id(&self, external_id: &str) -> Result<Option<User>, ApiError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.external_id.as_deref() == Some(external_id))
            .cloned())
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<User>, ApiError> {
        let PageRequest { per_page, page } = page.clamped();
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .skip(((page - 1) * per_page) as usize)
            .take(per_page as usize)
            .cloned()
            .collect())
    }

    async fn list_by_role(&self, role: UserRole, page: PageRequest) -> Result<Vec<User>, ApiError> {
        let PageRequest { per_page, page } = page.clamped();
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.role == role)
            .skip(((page - 1) * per_page) as usize)
            .take(per_page as usize)
            .cloned()
            .collect())
    }

    async fn create(&self, user: &User) -> Result<(), ApiError> {
        self.users.lock().unwrap().push(user.clone());
        Ok(())
    }

    async fn update_profile(&self, id: Uuid, changes: &ProfileChanges) -> Result<(), ApiError> {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.id == id) {
            if let Some(name) = &changes.name {
                user.name = name.clone();
            }
            if let Some(phone_number) = &changes.phone_number {
                user.phone_number = Some(phone_number.clone());
            }
            if let Some(address) = &changes.address {
                user.address = Some(address.clone());
            }
            if let Some(password_hash) = &changes.password_hash {
                user.password_hash = password_hash.clone();
            }
            user.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn update_role(&self, id: Uuid, role: UserRole) -> Result<(), ApiError> {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.id == id) {
            user.role = role;
            user.updated_at = Utc::now();
        }
        Ok(())
    }
}

// ── MockVaccineRepo ──────────────────────────────────────────────────────────

pub struct MockVaccineRepo {
    pub vaccines: Arc<Mutex<Vec<Vaccine>>>,
}

impl MockVaccineRepo {
    pub fn new(vaccines: Vec<Vaccine>) -> Self {
        Self {
            vaccines: Arc::new(Mutex::new(vaccines)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Returns a shared handle to the internal catalog for post-execution inspection.
    pub fn vaccines_handle(&self) -> Arc<Mutex<Vec<Vaccine>>> {
        Arc::clone(&self.vaccines)
    }
}

impl VaccineRepository for MockVaccineRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Vaccine>, ApiError> {
        Ok(self
            .vaccines
            .lock()
            .unwrap()
            .iter()
            .find(|v| v.id == id)
            .cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Vaccine>, ApiError> {
        Ok(self
            .vaccines
            .lock()
            .unwrap()
            .iter()
            .find(|v| v.name == name)
            .cloned())
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Vaccine>, ApiError> {
        let PageRequest { per_page, page } = page.clamped();
        Ok(self
            .vaccines
            .lock()
            .unwrap()
            .iter()
            .skip(((page - 1) * per_page) as usize)
            .take(per_page as usize)
            .cloned()
            .collect())
    }

    async fn create(&self, vaccine: &Vaccine) -> Result<(), ApiError> {
        self.vaccines.lock().unwrap().push(vaccine.clone());
        Ok(())
    }

    async fn update(&self, id: Uuid, changes: &VaccineChanges) -> Result<(), ApiError> {
        let mut vaccines = self.vaccines.lock().unwrap();
        if let Some(vaccine) = vaccines.iter_mut().find(|v| v.id == id) {
            if let Some(name) = &changes.name {
                vaccine.name = name.clone();
            }
            if let Some(description) = &changes.description {
                vaccine.description = Some(description.clone());
            }
            if let Some(total_doses) = changes.total_doses {
                vaccine.total_doses = total_doses;
            }
            vaccine.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let mut vaccines = self.vaccines.lock().unwrap();
        let before = vaccines.len();
        vaccines.retain(|v| v.id != id);
        Ok(vaccines.len() < before)
    }
}

// ── MockCampRepo ─────────────────────────────────────────────────────────────

pub struct MockCampRepo {
    pub camps: Arc<Mutex<Vec<Camp>>>,
    pub staff: Arc<Mutex<Vec<StaffRow>>>,
    pub inventory: Arc<Mutex<Vec<InventoryRow>>>,
    /// Users resolved against for organizer and roster joins.
    pub directory: Vec<User>,
    /// Vaccines resolved against for inventory joins.
    pub catalog: Vec<Vaccine>,
}

impl MockCampRepo {
    pub fn new(camps: Vec<Camp>) -> Self {
        Self {
            camps: Arc::new(Mutex::new(camps)),
            staff: Arc::new(Mutex::new(vec![])),
            inventory: Arc::new(Mutex::new(vec![])),
            directory: vec![],
            catalog: vec![],
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn camps_handle(&self) -> Arc<Mutex<Vec<Camp>>> {
        Arc::clone(&self.camps)
    }

    pub fn staff_handle(&self) -> Arc<Mutex<Vec<StaffRow>>> {
        Arc::clone(&self.staff)
    }

    pub fn inventory_handle(&self) -> Arc<Mutex<Vec<InventoryRow>>> {
        Arc::clone(&self.inventory)
    }

    fn resolve_user(&self, user_id: Uuid) -> Result<&User, ApiError> {
        self.directory
            .iter()
            .find(|u| u.id == user_id)
            .ok_or_else(|| ApiError::Internal(anyhow::anyhow!("user {user_id} not in directory")))
    }
}

impl CampRepository for MockCampRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Camp>, ApiError> {
        Ok(self.camps.lock().unwrap().iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_access_code(&self, access_code: &str) -> Result<Option<Camp>, ApiError> {
        Ok(self
            .camps
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.access_code == access_code)
            .cloned())
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<CampSummary>, ApiError> {
        let PageRequest { per_page, page } = page.clamped();
        let camps = self.camps.lock().unwrap();
        camps
            .iter()
            .skip(((page - 1) * per_page) as usize)
            .take(per_page as usize)
            .map(|camp| {
                let organizer = self.resolve_user(camp.organizer_id)?;
                Ok(CampSummary {
                    camp: camp.clone(),
                    organizer_name: organizer.name.clone(),
                    organizer_email: organizer.email.clone(),
                })
            })
            .collect()
    }

    async fn list_by_organizer(&self, organizer_id: Uuid) -> Result<Vec<Camp>, ApiError> {
        Ok(self
            .camps
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.organizer_id == organizer_id)
            .cloned()
            .collect())
    }

    async fn create(
        &self,
        camp: &Camp,
        staff_ids: &[Uuid],
        inventory: &[InventoryLine],
    ) -> Result<(), ApiError> {
        self.camps.lock().unwrap().push(camp.clone());
        let mut staff = self.staff.lock().unwrap();
        for user_id in staff_ids {
            staff.push(StaffRow {
                camp_id: camp.id,
                user_id: *user_id,
                added_at: camp.created_at,
            });
        }
        let mut rows = self.inventory.lock().unwrap();
        for line in inventory {
            rows.push(InventoryRow {
                camp_id: camp.id,
                vaccine_id: line.vaccine_id,
                quantity: line.quantity,
            });
        }
        Ok(())
    }

    async fn update(&self, id: Uuid, changes: &CampChanges) -> Result<(), ApiError> {
        let mut camps = self.camps.lock().unwrap();
        if let Some(camp) = camps.iter_mut().find(|c| c.id == id) {
            if let Some(name) = &changes.name {
                camp.name = name.clone();
            }
            if let Some(location) = changes.location {
                camp.location = location;
            }
            if let Some(address) = &changes.address {
                camp.address = address.clone();
            }
            if let Some(starts_at) = changes.starts_at {
                camp.starts_at = starts_at;
            }
            if let Some(ends_at) = changes.ends_at {
                camp.ends_at = ends_at;
            }
            if let Some(status) = changes.status {
                camp.status = status;
            }
            if let Some(staff_pin_hash) = &changes.staff_pin_hash {
                camp.staff_pin_hash = staff_pin_hash.clone();
            }
            camp.updated_at = Utc::now();
        }
        if let Some(staff_ids) = &changes.staff_ids {
            let mut staff = self.staff.lock().unwrap();
            staff.retain(|row| row.camp_id != id);
            for user_id in staff_ids {
                staff.push(StaffRow {
                    camp_id: id,
                    user_id: *user_id,
                    added_at: Utc::now(),
                });
            }
        }
        if let Some(lines) = &changes.inventory {
            let mut rows = self.inventory.lock().unwrap();
            rows.retain(|row| row.camp_id != id);
            for line in lines {
                rows.push(InventoryRow {
                    camp_id: id,
                    vaccine_id: line.vaccine_id,
                    quantity: line.quantity,
                });
            }
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let mut camps = self.camps.lock().unwrap();
        let before = camps.len();
        camps.retain(|c| c.id != id);
        self.staff.lock().unwrap().retain(|row| row.camp_id != id);
        self.inventory.lock().unwrap().retain(|row| row.camp_id != id);
        Ok(camps.len() < before)
    }

    async fn list_staff(&self, camp_id: Uuid) -> Result<Vec<StaffMember>, ApiError> {
        let staff = self.staff.lock().unwrap();
        staff
            .iter()
            .filter(|row| row.camp_id == camp_id)
            .map(|row| {
                let user = self.resolve_user(row.user_id)?;
                Ok(StaffMember {
                    user_id: user.id,
                    name: user.name.clone(),
                    email: user.email.clone(),
                    role: user.role,
                    added_at: row.added_at,
                })
            })
            .collect()
    }

    async fn is_staff(&self, camp_id: Uuid, user_id: Uuid) -> Result<bool, ApiError> {
        Ok(self
            .staff
            .lock()
            .unwrap()
            .iter()
            .any(|row| row.camp_id == camp_id && row.user_id == user_id))
    }

    async fn add_staff(&self, camp_id: Uuid, user_id: Uuid) -> Result<(), ApiError> {
        self.staff.lock().unwrap().push(StaffRow {
            camp_id,
            user_id,
            added_at: Utc::now(),
        });
        Ok(())
    }

    async fn list_inventory(&self, camp_id: Uuid) -> Result<Vec<InventoryLineDetail>, ApiError> {
        let rows = self.inventory.lock().unwrap();
        rows.iter()
            .filter(|row| row.camp_id == camp_id)
            .map(|row| {
                let vaccine = self
                    .catalog
                    .iter()
                    .find(|v| v.id == row.vaccine_id)
                    .ok_or_else(|| {
                        ApiError::Internal(anyhow::anyhow!(
                            "vaccine {} not in catalog",
                            row.vaccine_id
                        ))
                    })?;
                Ok(InventoryLineDetail {
                    vaccine_id: row.vaccine_id,
                    vaccine_name: vaccine.name.clone(),
                    quantity: row.quantity,
                })
            })
            .collect()
    }
}

// ── MockAppointmentRepo ──────────────────────────────────────────────────────

pub struct MockAppointmentRepo {
    pub appointments: Arc<Mutex<Vec<Appointment>>>,
    pub inventory: Arc<Mutex<Vec<InventoryRow>>>,
    /// Camps resolved against for the beneficiary listing join.
    pub camps: Vec<Camp>,
    /// Vaccines resolved against for listing joins.
    pub catalog: Vec<Vaccine>,
    /// Users resolved against for the camp listing join.
    pub directory: Vec<User>,
}

impl MockAppointmentRepo {
    pub fn new(appointments: Vec<Appointment>, inventory: Vec<InventoryRow>) -> Self {
        Self {
            appointments: Arc::new(Mutex::new(appointments)),
            inventory: Arc::new(Mutex::new(inventory)),
            camps: vec![],
            catalog: vec![],
            directory: vec![],
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![], vec![])
    }

    pub fn appointments_handle(&self) -> Arc<Mutex<Vec<Appointment>>> {
        Arc::clone(&self.appointments)
    }

    pub fn inventory_handle(&self) -> Arc<Mutex<Vec<InventoryRow>>> {
        Arc::clone(&self.inventory)
    }

    fn restock_line(&self, camp_id: Uuid, vaccine_id: Uuid) {
        let mut rows = self.inventory.lock().unwrap();
        if let Some(row) = rows
            .iter_mut()
            .find(|r| r.camp_id == camp_id && r.vaccine_id == vaccine_id)
        {
            row.quantity += 1;
        }
    }
}

impl AppointmentRepository for MockAppointmentRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Appointment>, ApiError> {
        Ok(self
            .appointments
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn list_for_beneficiary(
        &self,
        beneficiary_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<AppointmentDetail>, ApiError> {
        let PageRequest { per_page, page } = page.clamped();
        let appointments = self.appointments.lock().unwrap();
        let mut details = appointments
            .iter()
            .filter(|a| a.beneficiary_id == beneficiary_id)
            .map(|a| {
                let camp = self
                    .camps
                    .iter()
                    .find(|c| c.id == a.camp_id)
                    .ok_or_else(|| {
                        ApiError::Internal(anyhow::anyhow!("camp {} not seeded", a.camp_id))
                    })?;
                let vaccine = self
                    .catalog
                    .iter()
                    .find(|v| v.id == a.vaccine_id)
                    .ok_or_else(|| {
                        ApiError::Internal(anyhow::anyhow!("vaccine {} not seeded", a.vaccine_id))
                    })?;
                Ok(AppointmentDetail {
                    id: a.id,
                    camp_id: camp.id,
                    camp_name: camp.name.clone(),
                    camp_address: camp.address.clone(),
                    vaccine_id: vaccine.id,
                    vaccine_name: vaccine.name.clone(),
                    slot_at: a.slot_at,
                    status: a.status,
                    created_at: a.created_at,
                })
            })
            .collect::<Result<Vec<_>, ApiError>>()?;
        details.sort_by(|a, b| b.slot_at.cmp(&a.slot_at));
        Ok(details
            .into_iter()
            .skip(((page - 1) * per_page) as usize)
            .take(per_page as usize)
            .collect())
    }

    async fn list_for_camp(&self, camp_id: Uuid) -> Result<Vec<CampAppointment>, ApiError> {
        let appointments = self.appointments.lock().unwrap();
        appointments
            .iter()
            .filter(|a| a.camp_id == camp_id)
            .map(|a| {
                let beneficiary = self
                    .directory
                    .iter()
                    .find(|u| u.id == a.beneficiary_id)
                    .ok_or_else(|| {
                        ApiError::Internal(anyhow::anyhow!("user {} not seeded", a.beneficiary_id))
                    })?;
                let vaccine = self
                    .catalog
                    .iter()
                    .find(|v| v.id == a.vaccine_id)
                    .ok_or_else(|| {
                        ApiError::Internal(anyhow::anyhow!("vaccine {} not seeded", a.vaccine_id))
                    })?;
                Ok(CampAppointment {
                    id: a.id,
                    beneficiary_id: beneficiary.id,
                    beneficiary_name: beneficiary.name.clone(),
                    beneficiary_email: beneficiary.email.clone(),
                    vaccine_name: vaccine.name.clone(),
                    slot_at: a.slot_at,
                    status: a.status,
                })
            })
            .collect()
    }

    async fn create_reserving_dose(&self, appointment: &Appointment) -> Result<bool, ApiError> {
        let mut rows = self.inventory.lock().unwrap();
        match rows.iter_mut().find(|r| {
            r.camp_id == appointment.camp_id
                && r.vaccine_id == appointment.vaccine_id
                && r.quantity > 0
        }) {
            Some(row) => {
                row.quantity -= 1;
                self.appointments.lock().unwrap().push(appointment.clone());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn update_status(
        &self,
        appointment: &Appointment,
        status: AppointmentStatus,
        restock: bool,
    ) -> Result<(), ApiError> {
        {
            let mut appointments = self.appointments.lock().unwrap();
            if let Some(a) = appointments.iter_mut().find(|a| a.id == appointment.id) {
                a.status = status;
                a.updated_at = Utc::now();
            }
        }
        if restock {
            self.restock_line(appointment.camp_id, appointment.vaccine_id);
        }
        Ok(())
    }

    async fn delete(&self, appointment: &Appointment, restock: bool) -> Result<bool, ApiError> {
        let removed = {
            let mut appointments = self.appointments.lock().unwrap();
            let before = appointments.len();
            appointments.retain(|a| a.id != appointment.id);
            appointments.len() < before
        };
        if removed && restock {
            self.restock_line(appointment.camp_id, appointment.vaccine_id);
        }
        Ok(removed)
    }

    async fn exists_for_vaccine(&self, vaccine_id: Uuid) -> Result<bool, ApiError> {
        Ok(self
            .appointments
            .lock()
            .unwrap()
            .iter()
            .any(|a| a.vaccine_id == vaccine_id))
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub fn test_user(role: UserRole) -> User {
    let id = Uuid::new_v4();
    let now = Utc::now();
    User {
        id,
        name: "Asha Rao".to_owned(),
        email: format!("user-{id}@example.com"),
        password_hash: "$argon2id$unused".to_owned(),
        role,
        phone_number: None,
        external_id: None,
        address: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn test_vaccine(name: &str) -> Vaccine {
    let now = Utc::now();
    Vaccine {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        description: None,
        total_doses: 10_000,
        created_at: now,
        updated_at: now,
    }
}

pub fn test_camp(organizer_id: Uuid) -> Camp {
    let id = Uuid::new_v4();
    let now = Utc::now();
    Camp {
        id,
        name: "Ward 12 Vaccination Drive".to_owned(),
        organizer_id,
        location: GeoPoint {
            longitude: 77.2090,
            latitude: 28.6139,
        },
        address: "Community Hall, Ward 12".to_owned(),
        starts_at: now + Duration::days(1),
        ends_at: now + Duration::days(3),
        status: CampStatus::Upcoming,
        access_code: format!("CAMP-{id}"),
        staff_pin_hash: "$argon2id$unused".to_owned(),
        created_at: now,
        updated_at: now,
    }
}

pub fn test_appointment(beneficiary_id: Uuid, camp_id: Uuid, vaccine_id: Uuid) -> Appointment {
    let now = Utc::now();
    Appointment {
        id: Uuid::new_v4(),
        beneficiary_id,
        camp_id,
        vaccine_id,
        slot_at: now + Duration::days(2),
        status: AppointmentStatus::Scheduled,
        created_at: now,
        updated_at: now,
    }
}

pub const TEST_JWT_SECRET: &str = "test-jwt-secret-for-unit-tests-only";
