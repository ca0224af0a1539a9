use std::collections::HashMap;

use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait, sea_query::Expr,
};
use uuid::Uuid;

use vaxcamp_domain::{
    appointment::AppointmentStatus,
    camp::{CampStatus, GeoPoint},
    pagination::PageRequest,
    user::UserRole,
};
use vaxcamp_schema::{appointments, camp_inventory, camp_staff, camps, users, vaccines};

use crate::domain::repository::{
    AppointmentRepository, CampRepository, UserRepository, VaccineRepository,
};
use crate::domain::types::{
    Appointment, AppointmentDetail, Camp, CampAppointment, CampChanges, CampSummary,
    InventoryLine, InventoryLineDetail, ProfileChanges, StaffMember, User, Vaccine,
    VaccineChanges,
};
use crate::error::ApiError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        model.map(user_from_model).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        model.map(user_from_model).transpose()
    }

    async fn find_by_external_id(&self, external_id: &str) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find()
            .filter(users::Column::ExternalId.eq(external_id))
            .one(&self.db)
            .await
            .context("find user by external id")?;
        model.map(user_from_model).transpose()
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<User>, ApiError> {
        let PageRequest { per_page, page } = page.clamped();
        let models = users::Entity::find()
            .order_by_desc(users::Column::CreatedAt)
            .offset(((page - 1) * per_page) as u64)
            .limit(per_page as u64)
            .all(&self.db)
            .await
            .context("list users")?;
        models.into_iter().map(user_from_model).collect()
    }

    async fn list_by_role(&self, role: UserRole, page: PageRequest) -> Result<Vec<User>, ApiError> {
        let PageRequest { per_page, page } = page.clamped();
        let models = users::Entity::find()
            .filter(users::Column::Role.eq(role.as_u8() as i16))
            .order_by_desc(users::Column::CreatedAt)
            .offset(((page - 1) * per_page) as u64)
            .limit(per_page as u64)
            .all(&self.db)
            .await
            .context("list users by role")?;
        models.into_iter().map(user_from_model).collect()
    }

    async fn create(&self, user: &User) -> Result<(), ApiError> {
        users::ActiveModel {
            id: Set(user.id),
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            role: Set(user.role.as_u8() as i16),
            phone_number: Set(user.phone_number.clone()),
            external_id: Set(user.external_id.clone()),
            address: Set(user.address.clone()),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create user")?;
        Ok(())
    }

    async fn update_profile(&self, id: Uuid, changes: &ProfileChanges) -> Result<(), ApiError> {
        let mut am = users::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(name) = &changes.name {
            am.name = Set(name.clone());
        }
        if let Some(phone_number) = &changes.phone_number {
            am.phone_number = Set(Some(phone_number.clone()));
        }
        if let Some(address) = &changes.address {
            am.address = Set(Some(address.clone()));
        }
        if let Some(password_hash) = &changes.password_hash {
            am.password_hash = Set(password_hash.clone());
        }
        am.updated_at = Set(Utc::now());
        am.update(&self.db).await.context("update user profile")?;
        Ok(())
    }

    async fn update_role(&self, id: Uuid, role: UserRole) -> Result<(), ApiError> {
        users::ActiveModel {
            id: Set(id),
            role: Set(role.as_u8() as i16),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("update user role")?;
        Ok(())
    }
}

fn user_from_model(model: users::Model) -> Result<User, ApiError> {
    let role = UserRole::from_u8(model.role as u8).ok_or_else(|| {
        anyhow::anyhow!("user {} has unknown role value {}", model.id, model.role)
    })?;
    Ok(User {
        id: model.id,
        name: model.name,
        email: model.email,
        password_hash: model.password_hash,
        role,
        phone_number: model.phone_number,
        external_id: model.external_id,
        address: model.address,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

// ── Vaccine repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbVaccineRepository {
    pub db: DatabaseConnection,
}

impl VaccineRepository for DbVaccineRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Vaccine>, ApiError> {
        let model = vaccines::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find vaccine by id")?;
        Ok(model.map(vaccine_from_model))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Vaccine>, ApiError> {
        let model = vaccines::Entity::find()
            .filter(vaccines::Column::Name.eq(name))
            .one(&self.db)
            .await
            .context("find vaccine by name")?;
        Ok(model.map(vaccine_from_model))
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Vaccine>, ApiError> {
        let PageRequest { per_page, page } = page.clamped();
        let models = vaccines::Entity::find()
            .order_by_asc(vaccines::Column::Name)
            .offset(((page - 1) * per_page) as u64)
            .limit(per_page as u64)
            .all(&self.db)
            .await
            .context("list vaccines")?;
        Ok(models.into_iter().map(vaccine_from_model).collect())
    }

    async fn create(&self, vaccine: &Vaccine) -> Result<(), ApiError> {
        vaccines::ActiveModel {
            id: Set(vaccine.id),
            name: Set(vaccine.name.clone()),
            description: Set(vaccine.description.clone()),
            total_doses: Set(vaccine.total_doses),
            created_at: Set(vaccine.created_at),
            updated_at: Set(vaccine.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create vaccine")?;
        Ok(())
    }

    async fn update(&self, id: Uuid, changes: &VaccineChanges) -> Result<(), ApiError> {
        let mut am = vaccines::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(name) = &changes.name {
            am.name = Set(name.clone());
        }
        if let Some(description) = &changes.description {
            am.description = Set(Some(description.clone()));
        }
        if let Some(total_doses) = changes.total_doses {
            am.total_doses = Set(total_doses);
        }
        am.updated_at = Set(Utc::now());
        am.update(&self.db).await.context("update vaccine")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let result = vaccines::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete vaccine")?;
        Ok(result.rows_affected > 0)
    }
}

fn vaccine_from_model(model: vaccines::Model) -> Vaccine {
    Vaccine {
        id: model.id,
        name: model.name,
        description: model.description,
        total_doses: model.total_doses,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Camp repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCampRepository {
    pub db: DatabaseConnection,
}

impl CampRepository for DbCampRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Camp>, ApiError> {
        let model = camps::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find camp by id")?;
        model.map(camp_from_model).transpose()
    }

    async fn find_by_access_code(&self, access_code: &str) -> Result<Option<Camp>, ApiError> {
        let model = camps::Entity::find()
            .filter(camps::Column::AccessCode.eq(access_code))
            .one(&self.db)
            .await
            .context("find camp by access code")?;
        model.map(camp_from_model).transpose()
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<CampSummary>, ApiError> {
        let PageRequest { per_page, page } = page.clamped();
        let rows = camps::Entity::find()
            .find_also_related(users::Entity)
            .order_by_desc(camps::Column::CreatedAt)
            .offset(((page - 1) * per_page) as u64)
            .limit(per_page as u64)
            .all(&self.db)
            .await
            .context("list camps")?;

        let mut summaries = Vec::with_capacity(rows.len());
        for (camp, organizer) in rows {
            let organizer = organizer
                .ok_or_else(|| anyhow::anyhow!("organizer missing for camp {}", camp.id))?;
            summaries.push(CampSummary {
                camp: camp_from_model(camp)?,
                organizer_name: organizer.name,
                organizer_email: organizer.email,
            });
        }
        Ok(summaries)
    }

    async fn list_by_organizer(&self, organizer_id: Uuid) -> Result<Vec<Camp>, ApiError> {
        let models = camps::Entity::find()
            .filter(camps::Column::OrganizerId.eq(organizer_id))
            .order_by_desc(camps::Column::StartsAt)
            .all(&self.db)
            .await
            .context("list camps by organizer")?;
        models.into_iter().map(camp_from_model).collect()
    }

    async fn create(
        &self,
        camp: &Camp,
        staff_ids: &[Uuid],
        inventory: &[InventoryLine],
    ) -> Result<(), ApiError> {
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                let camp = camp.clone();
                let staff_ids = staff_ids.to_vec();
                let inventory = inventory.to_vec();
                Box::pin(async move {
                    camps::ActiveModel {
                        id: Set(camp.id),
                        name: Set(camp.name.clone()),
                        organizer_id: Set(camp.organizer_id),
                        longitude: Set(camp.location.longitude),
                        latitude: Set(camp.location.latitude),
                        address: Set(camp.address.clone()),
                        starts_at: Set(camp.starts_at),
                        ends_at: Set(camp.ends_at),
                        status: Set(camp.status.as_u8() as i16),
                        access_code: Set(camp.access_code.clone()),
                        staff_pin_hash: Set(camp.staff_pin_hash.clone()),
                        created_at: Set(camp.created_at),
                        updated_at: Set(camp.updated_at),
                    }
                    .insert(txn)
                    .await?;

                    for user_id in staff_ids {
                        camp_staff::ActiveModel {
                            camp_id: Set(camp.id),
                            user_id: Set(user_id),
                            added_at: Set(camp.created_at),
                        }
                        .insert(txn)
                        .await?;
                    }

                    for line in inventory {
                        camp_inventory::ActiveModel {
                            camp_id: Set(camp.id),
                            vaccine_id: Set(line.vaccine_id),
                            quantity: Set(line.quantity),
                        }
                        .insert(txn)
                        .await?;
                    }
                    Ok(())
                })
            })
            .await
            .context("create camp")?;
        Ok(())
    }

    async fn update(&self, id: Uuid, changes: &CampChanges) -> Result<(), ApiError> {
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                let changes = changes.clone();
                Box::pin(async move {
                    let mut am = camps::ActiveModel {
                        id: Set(id),
                        ..Default::default()
                    };
                    if let Some(name) = changes.name {
                        am.name = Set(name);
                    }
                    if let Some(location) = changes.location {
                        am.longitude = Set(location.longitude);
                        am.latitude = Set(location.latitude);
                    }
                    if let Some(address) = changes.address {
                        am.address = Set(address);
                    }
                    if let Some(starts_at) = changes.starts_at {
                        am.starts_at = Set(starts_at);
                    }
                    if let Some(ends_at) = changes.ends_at {
                        am.ends_at = Set(ends_at);
                    }
                    if let Some(status) = changes.status {
                        am.status = Set(status.as_u8() as i16);
                    }
                    if let Some(staff_pin_hash) = changes.staff_pin_hash {
                        am.staff_pin_hash = Set(staff_pin_hash);
                    }
                    am.updated_at = Set(Utc::now());
                    am.update(txn).await?;

                    if let Some(staff_ids) = changes.staff_ids {
                        camp_staff::Entity::delete_many()
                            .filter(camp_staff::Column::CampId.eq(id))
                            .exec(txn)
                            .await?;
                        let added_at = Utc::now();
                        for user_id in staff_ids {
                            camp_staff::ActiveModel {
                                camp_id: Set(id),
                                user_id: Set(user_id),
                                added_at: Set(added_at),
                            }
                            .insert(txn)
                            .await?;
                        }
                    }

                    if let Some(lines) = changes.inventory {
                        camp_inventory::Entity::delete_many()
                            .filter(camp_inventory::Column::CampId.eq(id))
                            .exec(txn)
                            .await?;
                        for line in lines {
                            camp_inventory::ActiveModel {
                                camp_id: Set(id),
                                vaccine_id: Set(line.vaccine_id),
                                quantity: Set(line.quantity),
                            }
                            .insert(txn)
                            .await?;
                        }
                    }
                    Ok(())
                })
            })
            .await
            .context("update camp")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let result = camps::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete camp")?;
        Ok(result.rows_affected > 0)
    }

    async fn list_staff(&self, camp_id: Uuid) -> Result<Vec<StaffMember>, ApiError> {
        let memberships = camp_staff::Entity::find()
            .filter(camp_staff::Column::CampId.eq(camp_id))
            .order_by_asc(camp_staff::Column::AddedAt)
            .all(&self.db)
            .await
            .context("list camp staff")?;

        let user_ids: Vec<Uuid> = memberships.iter().map(|m| m.user_id).collect();
        let users_by_id: HashMap<Uuid, users::Model> = users::Entity::find()
            .filter(users::Column::Id.is_in(user_ids))
            .all(&self.db)
            .await
            .context("load staff accounts")?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let mut staff = Vec::with_capacity(memberships.len());
        for membership in memberships {
            let user = users_by_id.get(&membership.user_id).ok_or_else(|| {
                anyhow::anyhow!(
                    "staff account {} missing for camp {camp_id}",
                    membership.user_id
                )
            })?;
            let role = UserRole::from_u8(user.role as u8).ok_or_else(|| {
                anyhow::anyhow!("user {} has unknown role value {}", user.id, user.role)
            })?;
            staff.push(StaffMember {
                user_id: membership.user_id,
                name: user.name.clone(),
                email: user.email.clone(),
                role,
                added_at: membership.added_at,
            });
        }
        Ok(staff)
    }

    async fn is_staff(&self, camp_id: Uuid, user_id: Uuid) -> Result<bool, ApiError> {
        let membership = camp_staff::Entity::find_by_id((camp_id, user_id))
            .one(&self.db)
            .await
            .context("check camp staff membership")?;
        Ok(membership.is_some())
    }

    async fn add_staff(&self, camp_id: Uuid, user_id: Uuid) -> Result<(), ApiError> {
        camp_staff::ActiveModel {
            camp_id: Set(camp_id),
            user_id: Set(user_id),
            added_at: Set(Utc::now()),
        }
        .insert(&self.db)
        .await
        .context("add camp staff")?;
        Ok(())
    }

    async fn list_inventory(&self, camp_id: Uuid) -> Result<Vec<InventoryLineDetail>, ApiError> {
        let rows = camp_inventory::Entity::find()
            .filter(camp_inventory::Column::CampId.eq(camp_id))
            .find_also_related(vaccines::Entity)
            .all(&self.db)
            .await
            .context("list camp inventory")?;

        let mut lines = Vec::with_capacity(rows.len());
        for (line, vaccine) in rows {
            let vaccine = vaccine.ok_or_else(|| {
                anyhow::anyhow!("vaccine {} missing for camp {camp_id}", line.vaccine_id)
            })?;
            lines.push(InventoryLineDetail {
                vaccine_id: line.vaccine_id,
                vaccine_name: vaccine.name,
                quantity: line.quantity,
            });
        }
        lines.sort_by(|a, b| a.vaccine_name.cmp(&b.vaccine_name));
        Ok(lines)
    }
}

fn camp_from_model(model: camps::Model) -> Result<Camp, ApiError> {
    let status = CampStatus::from_u8(model.status as u8).ok_or_else(|| {
        anyhow::anyhow!("camp {} has unknown status value {}", model.id, model.status)
    })?;
    Ok(Camp {
        id: model.id,
        name: model.name,
        organizer_id: model.organizer_id,
        location: GeoPoint {
            longitude: model.longitude,
            latitude: model.latitude,
        },
        address: model.address,
        starts_at: model.starts_at,
        ends_at: model.ends_at,
        status,
        access_code: model.access_code,
        staff_pin_hash: model.staff_pin_hash,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

// ── Appointment repository ───────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAppointmentRepository {
    pub db: DatabaseConnection,
}

impl AppointmentRepository for DbAppointmentRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Appointment>, ApiError> {
        let model = appointments::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find appointment by id")?;
        model.map(appointment_from_model).transpose()
    }

    async fn list_for_beneficiary(
        &self,
        beneficiary_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<AppointmentDetail>, ApiError> {
        let PageRequest { per_page, page } = page.clamped();
        let models = appointments::Entity::find()
            .filter(appointments::Column::BeneficiaryId.eq(beneficiary_id))
            .order_by_desc(appointments::Column::SlotAt)
            .offset(((page - 1) * per_page) as u64)
            .limit(per_page as u64)
            .all(&self.db)
            .await
            .context("list appointments for beneficiary")?;

        let camp_ids: Vec<Uuid> = models.iter().map(|m| m.camp_id).collect();
        let camps_by_id: HashMap<Uuid, camps::Model> = camps::Entity::find()
            .filter(camps::Column::Id.is_in(camp_ids))
            .all(&self.db)
            .await
            .context("load camps for appointments")?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        let vaccine_ids: Vec<Uuid> = models.iter().map(|m| m.vaccine_id).collect();
        let vaccines_by_id: HashMap<Uuid, vaccines::Model> = vaccines::Entity::find()
            .filter(vaccines::Column::Id.is_in(vaccine_ids))
            .all(&self.db)
            .await
            .context("load vaccines for appointments")?
            .into_iter()
            .map(|v| (v.id, v))
            .collect();

        let mut details = Vec::with_capacity(models.len());
        for model in models {
            let camp = camps_by_id
                .get(&model.camp_id)
                .ok_or_else(|| anyhow::anyhow!("camp missing for appointment {}", model.id))?;
            let vaccine = vaccines_by_id
                .get(&model.vaccine_id)
                .ok_or_else(|| anyhow::anyhow!("vaccine missing for appointment {}", model.id))?;
            let status = appointment_status_from_column(model.status, model.id)?;
            details.push(AppointmentDetail {
                id: model.id,
                camp_id: model.camp_id,
                camp_name: camp.name.clone(),
                camp_address: camp.address.clone(),
                vaccine_id: model.vaccine_id,
                vaccine_name: vaccine.name.clone(),
                slot_at: model.slot_at,
                status,
                created_at: model.created_at,
            });
        }
        Ok(details)
    }

    async fn list_for_camp(&self, camp_id: Uuid) -> Result<Vec<CampAppointment>, ApiError> {
        let models = appointments::Entity::find()
            .filter(appointments::Column::CampId.eq(camp_id))
            .order_by_asc(appointments::Column::SlotAt)
            .all(&self.db)
            .await
            .context("list appointments for camp")?;

        let beneficiary_ids: Vec<Uuid> = models.iter().map(|m| m.beneficiary_id).collect();
        let users_by_id: HashMap<Uuid, users::Model> = users::Entity::find()
            .filter(users::Column::Id.is_in(beneficiary_ids))
            .all(&self.db)
            .await
            .context("load beneficiaries for appointments")?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let vaccine_ids: Vec<Uuid> = models.iter().map(|m| m.vaccine_id).collect();
        let vaccines_by_id: HashMap<Uuid, vaccines::Model> = vaccines::Entity::find()
            .filter(vaccines::Column::Id.is_in(vaccine_ids))
            .all(&self.db)
            .await
            .context("load vaccines for appointments")?
            .into_iter()
            .map(|v| (v.id, v))
            .collect();

        let mut entries = Vec::with_capacity(models.len());
        for model in models {
            let beneficiary = users_by_id.get(&model.beneficiary_id).ok_or_else(|| {
                anyhow::anyhow!("beneficiary missing for appointment {}", model.id)
            })?;
            let vaccine = vaccines_by_id
                .get(&model.vaccine_id)
                .ok_or_else(|| anyhow::anyhow!("vaccine missing for appointment {}", model.id))?;
            let status = appointment_status_from_column(model.status, model.id)?;
            entries.push(CampAppointment {
                id: model.id,
                beneficiary_id: model.beneficiary_id,
                beneficiary_name: beneficiary.name.clone(),
                beneficiary_email: beneficiary.email.clone(),
                vaccine_name: vaccine.name.clone(),
                slot_at: model.slot_at,
                status,
            });
        }
        Ok(entries)
    }

    async fn create_reserving_dose(&self, appointment: &Appointment) -> Result<bool, ApiError> {
        let reserved = self
            .db
            .transaction::<_, bool, sea_orm::DbErr>(|txn| {
                let appointment = appointment.clone();
                Box::pin(async move {
                    // Guarded decrement: touches no row once the line is at zero.
                    let result = camp_inventory::Entity::update_many()
                        .filter(camp_inventory::Column::CampId.eq(appointment.camp_id))
                        .filter(camp_inventory::Column::VaccineId.eq(appointment.vaccine_id))
                        .filter(camp_inventory::Column::Quantity.gt(0))
                        .col_expr(
                            camp_inventory::Column::Quantity,
                            Expr::col(camp_inventory::Column::Quantity).sub(1),
                        )
                        .exec(txn)
                        .await?;
                    if result.rows_affected == 0 {
                        return Ok(false);
                    }

                    appointments::ActiveModel {
                        id: Set(appointment.id),
                        beneficiary_id: Set(appointment.beneficiary_id),
                        camp_id: Set(appointment.camp_id),
                        vaccine_id: Set(appointment.vaccine_id),
                        slot_at: Set(appointment.slot_at),
                        status: Set(appointment.status.as_u8() as i16),
                        created_at: Set(appointment.created_at),
                        updated_at: Set(appointment.updated_at),
                    }
                    .insert(txn)
                    .await?;

                    Ok(true)
                })
            })
            .await
            .context("book appointment")?;
        Ok(reserved)
    }

    async fn update_status(
        &self,
        appointment: &Appointment,
        status: AppointmentStatus,
        restock: bool,
    ) -> Result<(), ApiError> {
        if !restock {
            appointments::ActiveModel {
                id: Set(appointment.id),
                status: Set(status.as_u8() as i16),
                updated_at: Set(Utc::now()),
                ..Default::default()
            }
            .update(&self.db)
            .await
            .context("update appointment status")?;
            return Ok(());
        }

        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                let appointment = appointment.clone();
                Box::pin(async move {
                    appointments::ActiveModel {
                        id: Set(appointment.id),
                        status: Set(status.as_u8() as i16),
                        updated_at: Set(Utc::now()),
                        ..Default::default()
                    }
                    .update(txn)
                    .await?;

                    // No-op when the line was removed by an inventory rewrite.
                    let _ = camp_inventory::Entity::update_many()
                        .filter(camp_inventory::Column::CampId.eq(appointment.camp_id))
                        .filter(camp_inventory::Column::VaccineId.eq(appointment.vaccine_id))
                        .col_expr(
                            camp_inventory::Column::Quantity,
                            Expr::col(camp_inventory::Column::Quantity).add(1),
                        )
                        .exec(txn)
                        .await?;
                    Ok(())
                })
            })
            .await
            .context("update appointment status")?;
        Ok(())
    }

    async fn delete(&self, appointment: &Appointment, restock: bool) -> Result<bool, ApiError> {
        if !restock {
            let result = appointments::Entity::delete_by_id(appointment.id)
                .exec(&self.db)
                .await
                .context("delete appointment")?;
            return Ok(result.rows_affected > 0);
        }

        let deleted = self
            .db
            .transaction::<_, bool, sea_orm::DbErr>(|txn| {
                let appointment = appointment.clone();
                Box::pin(async move {
                    let result = appointments::Entity::delete_by_id(appointment.id)
                        .exec(txn)
                        .await?;
                    if result.rows_affected == 0 {
                        return Ok(false);
                    }

                    let _ = camp_inventory::Entity::update_many()
                        .filter(camp_inventory::Column::CampId.eq(appointment.camp_id))
                        .filter(camp_inventory::Column::VaccineId.eq(appointment.vaccine_id))
                        .col_expr(
                            camp_inventory::Column::Quantity,
                            Expr::col(camp_inventory::Column::Quantity).add(1),
                        )
                        .exec(txn)
                        .await?;
                    Ok(true)
                })
            })
            .await
            .context("delete appointment")?;
        Ok(deleted)
    }

    async fn exists_for_vaccine(&self, vaccine_id: Uuid) -> Result<bool, ApiError> {
        let count = appointments::Entity::find()
            .filter(appointments::Column::VaccineId.eq(vaccine_id))
            .count(&self.db)
            .await
            .context("count appointments for vaccine")?;
        Ok(count > 0)
    }
}

fn appointment_from_model(model: appointments::Model) -> Result<Appointment, ApiError> {
    let status = appointment_status_from_column(model.status, model.id)?;
    Ok(Appointment {
        id: model.id,
        beneficiary_id: model.beneficiary_id,
        camp_id: model.camp_id,
        vaccine_id: model.vaccine_id,
        slot_at: model.slot_at,
        status,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

fn appointment_status_from_column(value: i16, id: Uuid) -> Result<AppointmentStatus, ApiError> {
    AppointmentStatus::from_u8(value as u8)
        .ok_or_else(|| anyhow::anyhow!("appointment {id} has unknown status value {value}").into())
}
