use chrono::{DateTime, Utc};
use uuid::Uuid;
use vaxcamp_auth::password::{hash_secret, verify_secret};
use vaxcamp_domain::{
    camp::{CampStatus, GeoPoint},
    pagination::PageRequest,
    user::UserRole,
};

use crate::domain::repository::{
    AppointmentRepository, CampRepository, UserRepository, VaccineRepository,
};
use crate::domain::types::{
    Camp, CampAppointment, CampChanges, CampSummary, InventoryLine, InventoryLineDetail,
    MIN_STAFF_PIN_LEN, StaffMember, StaffSession, User, normalize_email,
};
use crate::error::ApiError;

/// Resolves roster emails to user ids, in input order.
///
/// Every email must belong to a registered account and may appear only once.
async fn resolve_staff_ids<U: UserRepository>(
    users: &U,
    emails: &[String],
) -> Result<Vec<Uuid>, ApiError> {
    let mut staff_ids = Vec::with_capacity(emails.len());

    for email in emails {
        let email = normalize_email(email);
        let user = users
            .find_by_email(&email)
            .await?
            .ok_or(ApiError::UserNotFound)?;

        if staff_ids.contains(&user.id) {
            return Err(ApiError::StaffAlreadyAdded);
        }
        staff_ids.push(user.id);
    }

    Ok(staff_ids)
}

async fn validate_inventory<V: VaccineRepository>(
    vaccines: &V,
    lines: &[InventoryLine],
) -> Result<(), ApiError> {
    for (idx, line) in lines.iter().enumerate() {
        if line.quantity < 0 {
            return Err(ApiError::Validation("inventory quantity must be non-negative"));
        }
        if lines[..idx].iter().any(|l| l.vaccine_id == line.vaccine_id) {
            return Err(ApiError::Validation("duplicate vaccine in inventory"));
        }
        if vaccines.find_by_id(line.vaccine_id).await?.is_none() {
            return Err(ApiError::VaccineNotFound);
        }
    }

    Ok(())
}

fn hash_staff_pin(pin: &str) -> Result<String, ApiError> {
    if pin.chars().count() < MIN_STAFF_PIN_LEN {
        return Err(ApiError::Validation("staff PIN must be at least 4 characters"));
    }
    hash_secret(pin).map_err(|e| ApiError::Internal(anyhow::anyhow!("hash staff pin: {e}")))
}

// ── Create ───────────────────────────────────────────────────────────────────

pub struct CreateCampInput {
    pub name: String,
    pub location: GeoPoint,
    pub address: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub access_code: String,
    pub staff_pin: String,
    pub staff_emails: Vec<String>,
    pub inventory: Vec<InventoryLine>,
}

pub struct CreateCampUseCase<C: CampRepository, U: UserRepository, V: VaccineRepository> {
    pub camps: C,
    pub users: U,
    pub vaccines: V,
}

impl<C: CampRepository, U: UserRepository, V: VaccineRepository> CreateCampUseCase<C, U, V> {
    pub async fn execute(
        &self,
        organizer_id: Uuid,
        input: CreateCampInput,
    ) -> Result<Camp, ApiError> {
        let name = input.name.trim().to_owned();
        if name.is_empty() {
            return Err(ApiError::Validation("camp name is required"));
        }
        let address = input.address.trim().to_owned();
        if address.is_empty() {
            return Err(ApiError::Validation("camp address is required"));
        }
        if !input.location.is_valid() {
            return Err(ApiError::Validation("coordinates out of range"));
        }
        if input.starts_at >= input.ends_at {
            return Err(ApiError::Validation("camp must end after it starts"));
        }

        let access_code = input.access_code.trim().to_owned();
        if access_code.is_empty() {
            return Err(ApiError::Validation("access code is required"));
        }
        if self.camps.find_by_access_code(&access_code).await?.is_some() {
            return Err(ApiError::AccessCodeTaken);
        }

        let staff_pin_hash = hash_staff_pin(&input.staff_pin)?;
        let staff_ids = resolve_staff_ids(&self.users, &input.staff_emails).await?;
        validate_inventory(&self.vaccines, &input.inventory).await?;

        let now = Utc::now();
        let camp = Camp {
            id: Uuid::now_v7(),
            name,
            organizer_id,
            location: input.location,
            address,
            starts_at: input.starts_at,
            ends_at: input.ends_at,
            status: CampStatus::Upcoming,
            access_code,
            staff_pin_hash,
            created_at: now,
            updated_at: now,
        };

        self.camps.create(&camp, &staff_ids, &input.inventory).await?;

        Ok(camp)
    }
}

// ── List / get ───────────────────────────────────────────────────────────────

pub struct ListCampsUseCase<C: CampRepository> {
    pub repo: C,
}

impl<C: CampRepository> ListCampsUseCase<C> {
    pub async fn execute(&self, page: PageRequest) -> Result<Vec<CampSummary>, ApiError> {
        self.repo.list(page).await
    }
}

/// Public camp view: summary plus the inventory lines.
#[derive(Debug)]
pub struct CampView {
    pub camp: Camp,
    pub organizer_name: String,
    pub organizer_email: String,
    pub inventory: Vec<InventoryLineDetail>,
}

pub struct GetCampUseCase<C: CampRepository, U: UserRepository> {
    pub camps: C,
    pub users: U,
}

impl<C: CampRepository, U: UserRepository> GetCampUseCase<C, U> {
    pub async fn execute(&self, camp_id: Uuid) -> Result<CampView, ApiError> {
        let camp = self
            .camps
            .find_by_id(camp_id)
            .await?
            .ok_or(ApiError::CampNotFound)?;

        let organizer = self
            .users
            .find_by_id(camp.organizer_id)
            .await?
            .ok_or_else(|| {
                ApiError::Internal(anyhow::anyhow!("organizer missing for camp {camp_id}"))
            })?;

        let inventory = self.camps.list_inventory(camp_id).await?;

        Ok(CampView {
            camp,
            organizer_name: organizer.name,
            organizer_email: organizer.email,
            inventory,
        })
    }
}

// ── Update / delete ──────────────────────────────────────────────────────────

pub struct UpdateCampInput {
    pub name: Option<String>,
    pub location: Option<GeoPoint>,
    pub address: Option<String>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub status: Option<CampStatus>,
    pub staff_pin: Option<String>,
    /// `Some` replaces the whole roster, `None` leaves it untouched.
    pub staff_emails: Option<Vec<String>>,
    /// `Some` replaces all inventory lines, `None` leaves them untouched.
    pub inventory: Option<Vec<InventoryLine>>,
}

pub struct UpdateCampUseCase<C: CampRepository, U: UserRepository, V: VaccineRepository> {
    pub camps: C,
    pub users: U,
    pub vaccines: V,
}

impl<C: CampRepository, U: UserRepository, V: VaccineRepository> UpdateCampUseCase<C, U, V> {
    pub async fn execute(
        &self,
        camp_id: Uuid,
        caller_id: Uuid,
        caller_role: UserRole,
        input: UpdateCampInput,
    ) -> Result<(), ApiError> {
        let camp = self
            .camps
            .find_by_id(camp_id)
            .await?
            .ok_or(ApiError::CampNotFound)?;

        if !camp.can_be_managed_by(caller_id, caller_role) {
            return Err(ApiError::Forbidden);
        }

        let name = match input.name {
            Some(name) => {
                let name = name.trim().to_owned();
                if name.is_empty() {
                    return Err(ApiError::Validation("camp name is required"));
                }
                Some(name)
            }
            None => None,
        };

        let address = match input.address {
            Some(address) => {
                let address = address.trim().to_owned();
                if address.is_empty() {
                    return Err(ApiError::Validation("camp address is required"));
                }
                Some(address)
            }
            None => None,
        };

        if let Some(location) = &input.location {
            if !location.is_valid() {
                return Err(ApiError::Validation("coordinates out of range"));
            }
        }

        // The window stays ordered even when only one edge moves.
        let starts_at = input.starts_at.unwrap_or(camp.starts_at);
        let ends_at = input.ends_at.unwrap_or(camp.ends_at);
        if starts_at >= ends_at {
            return Err(ApiError::Validation("camp must end after it starts"));
        }

        let staff_pin_hash = match input.staff_pin {
            Some(pin) => Some(hash_staff_pin(&pin)?),
            None => None,
        };

        let staff_ids = match input.staff_emails {
            Some(emails) => Some(resolve_staff_ids(&self.users, &emails).await?),
            None => None,
        };

        if let Some(lines) = &input.inventory {
            validate_inventory(&self.vaccines, lines).await?;
        }

        let changes = CampChanges {
            name,
            location: input.location,
            address,
            starts_at: input.starts_at,
            ends_at: input.ends_at,
            status: input.status,
            staff_pin_hash,
            staff_ids,
            inventory: input.inventory,
        };

        if changes.is_empty() {
            return Err(ApiError::Validation("no fields to update"));
        }

        self.camps.update(camp_id, &changes).await?;

        Ok(())
    }
}

pub struct DeleteCampUseCase<C: CampRepository> {
    pub repo: C,
}

impl<C: CampRepository> DeleteCampUseCase<C> {
    pub async fn execute(
        &self,
        camp_id: Uuid,
        caller_id: Uuid,
        caller_role: UserRole,
    ) -> Result<(), ApiError> {
        let camp = self
            .repo
            .find_by_id(camp_id)
            .await?
            .ok_or(ApiError::CampNotFound)?;

        if !camp.can_be_managed_by(caller_id, caller_role) {
            return Err(ApiError::Forbidden);
        }

        if !self.repo.delete(camp_id).await? {
            return Err(ApiError::CampNotFound);
        }

        Ok(())
    }
}

// ── Staff ────────────────────────────────────────────────────────────────────

pub struct StaffLoginInput {
    pub access_code: String,
    pub staff_email: String,
    pub staff_pin: String,
}

pub struct StaffLoginUseCase<C: CampRepository, U: UserRepository> {
    pub camps: C,
    pub users: U,
}

impl<C: CampRepository, U: UserRepository> StaffLoginUseCase<C, U> {
    /// Check-in desk sign-on: camp access code, roster membership and the
    /// camp PIN must all line up.
    pub async fn execute(&self, input: StaffLoginInput) -> Result<StaffSession, ApiError> {
        let camp = self
            .camps
            .find_by_access_code(input.access_code.trim())
            .await?
            .ok_or(ApiError::CampNotFound)?;

        let email = normalize_email(&input.staff_email);
        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(ApiError::InvalidStaffCredentials)?;

        if !self.camps.is_staff(camp.id, user.id).await? {
            return Err(ApiError::InvalidStaffCredentials);
        }

        if !verify_secret(&input.staff_pin, &camp.staff_pin_hash) {
            return Err(ApiError::InvalidStaffCredentials);
        }

        Ok(StaffSession {
            camp_id: camp.id,
            camp_name: camp.name,
            staff_name: user.name,
            staff_email: user.email,
        })
    }
}

pub struct AddStaffUseCase<C: CampRepository, U: UserRepository> {
    pub camps: C,
    pub users: U,
}

impl<C: CampRepository, U: UserRepository> AddStaffUseCase<C, U> {
    pub async fn execute(
        &self,
        camp_id: Uuid,
        caller_id: Uuid,
        caller_role: UserRole,
        staff_email: &str,
    ) -> Result<(), ApiError> {
        let camp = self
            .camps
            .find_by_id(camp_id)
            .await?
            .ok_or(ApiError::CampNotFound)?;

        if !camp.can_be_managed_by(caller_id, caller_role) {
            return Err(ApiError::Forbidden);
        }

        let email = normalize_email(staff_email);
        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(ApiError::UserNotFound)?;

        if self.camps.is_staff(camp.id, user.id).await? {
            return Err(ApiError::StaffAlreadyAdded);
        }

        self.camps.add_staff(camp.id, user.id).await?;

        Ok(())
    }
}

pub struct ListStaffUseCase<C: CampRepository> {
    pub repo: C,
}

impl<C: CampRepository> ListStaffUseCase<C> {
    pub async fn execute(&self, camp_id: Uuid) -> Result<Vec<StaffMember>, ApiError> {
        if self.repo.find_by_id(camp_id).await?.is_none() {
            return Err(ApiError::CampNotFound);
        }

        self.repo.list_staff(camp_id).await
    }
}

// ── Organizer views ──────────────────────────────────────────────────────────

/// Everything the organizer dashboard shows for one camp.
#[derive(Debug)]
pub struct CampDetailOutput {
    pub camp: Camp,
    pub organizer_name: String,
    pub organizer_email: String,
    pub staff: Vec<StaffMember>,
    pub inventory: Vec<InventoryLineDetail>,
    pub appointments: Vec<CampAppointment>,
}

pub struct CampDetailUseCase<C: CampRepository, U: UserRepository, A: AppointmentRepository> {
    pub camps: C,
    pub users: U,
    pub appointments: A,
}

impl<C: CampRepository, U: UserRepository, A: AppointmentRepository> CampDetailUseCase<C, U, A> {
    pub async fn execute(&self, camp_id: Uuid) -> Result<CampDetailOutput, ApiError> {
        let camp = self
            .camps
            .find_by_id(camp_id)
            .await?
            .ok_or(ApiError::CampNotFound)?;

        let organizer = self
            .users
            .find_by_id(camp.organizer_id)
            .await?
            .ok_or_else(|| {
                ApiError::Internal(anyhow::anyhow!("organizer missing for camp {camp_id}"))
            })?;

        let staff = self.camps.list_staff(camp.id).await?;
        let inventory = self.camps.list_inventory(camp.id).await?;
        let appointments = self.appointments.list_for_camp(camp.id).await?;

        Ok(CampDetailOutput {
            camp,
            organizer_name: organizer.name,
            organizer_email: organizer.email,
            staff,
            inventory,
            appointments,
        })
    }
}

#[derive(Debug)]
pub struct MyCampsOutput {
    pub camps: Vec<Camp>,
    pub profile: User,
}

pub struct MyCampsUseCase<C: CampRepository, U: UserRepository> {
    pub camps: C,
    pub users: U,
}

impl<C: CampRepository, U: UserRepository> MyCampsUseCase<C, U> {
    pub async fn execute(&self, caller_id: Uuid) -> Result<MyCampsOutput, ApiError> {
        let profile = self
            .users
            .find_by_id(caller_id)
            .await?
            .ok_or(ApiError::UserNotFound)?;

        let camps = self.camps.list_by_organizer(caller_id).await?;

        Ok(MyCampsOutput { camps, profile })
    }
}
