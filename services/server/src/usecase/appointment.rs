use chrono::{DateTime, Utc};
use uuid::Uuid;
use vaxcamp_domain::{appointment::AppointmentStatus, pagination::PageRequest, user::UserRole};

use crate::domain::repository::{AppointmentRepository, CampRepository, VaccineRepository};
use crate::domain::types::{Appointment, AppointmentDetail};
use crate::error::ApiError;

// ── Book ─────────────────────────────────────────────────────────────────────

pub struct BookAppointmentInput {
    pub camp_id: Uuid,
    pub vaccine_id: Uuid,
    pub slot_at: DateTime<Utc>,
}

pub struct BookAppointmentUseCase<C: CampRepository, V: VaccineRepository, A: AppointmentRepository>
{
    pub camps: C,
    pub vaccines: V,
    pub appointments: A,
}

impl<C: CampRepository, V: VaccineRepository, A: AppointmentRepository>
    BookAppointmentUseCase<C, V, A>
{
    pub async fn execute(
        &self,
        beneficiary_id: Uuid,
        input: BookAppointmentInput,
    ) -> Result<Appointment, ApiError> {
        if self.camps.find_by_id(input.camp_id).await?.is_none() {
            return Err(ApiError::CampNotFound);
        }
        if self.vaccines.find_by_id(input.vaccine_id).await?.is_none() {
            return Err(ApiError::VaccineNotFound);
        }

        let now = Utc::now();
        let appointment = Appointment {
            id: Uuid::now_v7(),
            beneficiary_id,
            camp_id: input.camp_id,
            vaccine_id: input.vaccine_id,
            slot_at: input.slot_at,
            status: AppointmentStatus::Scheduled,
            created_at: now,
            updated_at: now,
        };

        // Insert and dose decrement land in one transaction.
        let reserved = self.appointments.create_reserving_dose(&appointment).await?;
        if !reserved {
            return Err(ApiError::VaccineUnavailable);
        }

        Ok(appointment)
    }
}

// ── List ─────────────────────────────────────────────────────────────────────

pub struct MyAppointmentsUseCase<A: AppointmentRepository> {
    pub repo: A,
}

impl<A: AppointmentRepository> MyAppointmentsUseCase<A> {
    pub async fn execute(
        &self,
        beneficiary_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<AppointmentDetail>, ApiError> {
        self.repo.list_for_beneficiary(beneficiary_id, page).await
    }
}

// ── Status ───────────────────────────────────────────────────────────────────

pub struct UpdateAppointmentStatusUseCase<A: AppointmentRepository> {
    pub repo: A,
}

impl<A: AppointmentRepository> UpdateAppointmentStatusUseCase<A> {
    pub async fn execute(
        &self,
        appointment_id: Uuid,
        caller_id: Uuid,
        caller_role: UserRole,
        status: AppointmentStatus,
    ) -> Result<(), ApiError> {
        let appointment = self
            .repo
            .find_by_id(appointment_id)
            .await?
            .ok_or(ApiError::AppointmentNotFound)?;

        // Camp staff drive the full lifecycle. A beneficiary may only cancel
        // their own booking.
        if caller_role < UserRole::Vaccinator {
            let cancelling_own = appointment.beneficiary_id == caller_id
                && status == AppointmentStatus::Cancelled;
            if !cancelling_own {
                return Err(ApiError::Forbidden);
            }
        }

        if !appointment.status.can_transition_to(status) {
            return Err(ApiError::IllegalTransition {
                from: appointment.status,
                to: status,
            });
        }

        let restock = status == AppointmentStatus::Cancelled;
        self.repo.update_status(&appointment, status, restock).await?;

        Ok(())
    }
}

// ── Delete ───────────────────────────────────────────────────────────────────

pub struct DeleteAppointmentUseCase<A: AppointmentRepository> {
    pub repo: A,
}

impl<A: AppointmentRepository> DeleteAppointmentUseCase<A> {
    pub async fn execute(
        &self,
        appointment_id: Uuid,
        caller_id: Uuid,
        caller_role: UserRole,
    ) -> Result<(), ApiError> {
        let appointment = self
            .repo
            .find_by_id(appointment_id)
            .await?
            .ok_or(ApiError::AppointmentNotFound)?;

        let owns = appointment.beneficiary_id == caller_id;
        if !owns && caller_role != UserRole::Admin {
            return Err(ApiError::Forbidden);
        }

        // Erasing a booking that still holds a dose puts it back on the shelf.
        let restock = appointment.status == AppointmentStatus::Scheduled;
        if !self.repo.delete(&appointment, restock).await? {
            return Err(ApiError::AppointmentNotFound);
        }

        Ok(())
    }
}
