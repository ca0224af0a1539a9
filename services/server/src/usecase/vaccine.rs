use chrono::Utc;
use uuid::Uuid;
use vaxcamp_domain::pagination::PageRequest;

use crate::domain::repository::{AppointmentRepository, VaccineRepository};
use crate::domain::types::{Vaccine, VaccineChanges};
use crate::error::ApiError;

pub struct CreateVaccineInput {
    pub name: String,
    pub description: Option<String>,
    pub total_doses: i64,
}

pub struct CreateVaccineUseCase<V: VaccineRepository> {
    pub repo: V,
}

impl<V: VaccineRepository> CreateVaccineUseCase<V> {
    pub async fn execute(&self, input: CreateVaccineInput) -> Result<Vaccine, ApiError> {
        let name = input.name.trim().to_owned();
        if name.is_empty() {
            return Err(ApiError::Validation("vaccine name is required"));
        }
        if input.total_doses < 0 {
            return Err(ApiError::Validation("total doses must be non-negative"));
        }

        if self.repo.find_by_name(&name).await?.is_some() {
            return Err(ApiError::VaccineNameTaken);
        }

        let now = Utc::now();
        let vaccine = Vaccine {
            id: Uuid::now_v7(),
            name,
            description: input.description.filter(|v| !v.trim().is_empty()),
            total_doses: input.total_doses,
            created_at: now,
            updated_at: now,
        };

        self.repo.create(&vaccine).await?;

        Ok(vaccine)
    }
}

pub struct ListVaccinesUseCase<V: VaccineRepository> {
    pub repo: V,
}

impl<V: VaccineRepository> ListVaccinesUseCase<V> {
    pub async fn execute(&self, page: PageRequest) -> Result<Vec<Vaccine>, ApiError> {
        self.repo.list(page).await
    }
}

pub struct GetVaccineUseCase<V: VaccineRepository> {
    pub repo: V,
}

impl<V: VaccineRepository> GetVaccineUseCase<V> {
    pub async fn execute(&self, vaccine_id: Uuid) -> Result<Vaccine, ApiError> {
        self.repo
            .find_by_id(vaccine_id)
            .await?
            .ok_or(ApiError::VaccineNotFound)
    }
}

pub struct UpdateVaccineInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub total_doses: Option<i64>,
}

pub struct UpdateVaccineUseCase<V: VaccineRepository> {
    pub repo: V,
}

impl<V: VaccineRepository> UpdateVaccineUseCase<V> {
    pub async fn execute(
        &self,
        vaccine_id: Uuid,
        input: UpdateVaccineInput,
    ) -> Result<(), ApiError> {
        let vaccine = self
            .repo
            .find_by_id(vaccine_id)
            .await?
            .ok_or(ApiError::VaccineNotFound)?;

        let name = match input.name {
            Some(name) => {
                let name = name.trim().to_owned();
                if name.is_empty() {
                    return Err(ApiError::Validation("vaccine name is required"));
                }
                if name != vaccine.name {
                    if let Some(other) = self.repo.find_by_name(&name).await? {
                        if other.id != vaccine.id {
                            return Err(ApiError::VaccineNameTaken);
                        }
                    }
                }
                Some(name)
            }
            None => None,
        };

        if let Some(total_doses) = input.total_doses {
            if total_doses < 0 {
                return Err(ApiError::Validation("total doses must be non-negative"));
            }
        }

        let changes = VaccineChanges {
            name,
            description: input.description,
            total_doses: input.total_doses,
        };

        if changes.is_empty() {
            return Err(ApiError::Validation("no fields to update"));
        }

        self.repo.update(vaccine_id, &changes).await?;

        Ok(())
    }
}

pub struct DeleteVaccineUseCase<V: VaccineRepository, A: AppointmentRepository> {
    pub vaccines: V,
    pub appointments: A,
}

impl<V: VaccineRepository, A: AppointmentRepository> DeleteVaccineUseCase<V, A> {
    pub async fn execute(&self, vaccine_id: Uuid) -> Result<(), ApiError> {
        if self.vaccines.find_by_id(vaccine_id).await?.is_none() {
            return Err(ApiError::VaccineNotFound);
        }

        // Appointment rows keep a restrict FK on the vaccine.
        if self.appointments.exists_for_vaccine(vaccine_id).await? {
            return Err(ApiError::VaccineInUse);
        }

        if !self.vaccines.delete(vaccine_id).await? {
            return Err(ApiError::VaccineNotFound);
        }

        Ok(())
    }
}
