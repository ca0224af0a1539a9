use sea_orm::entity::prelude::*;

/// Booked vaccination slot.
///
/// `status` holds the wire value of
/// [`vaxcamp_domain::appointment::AppointmentStatus`]; rows keep their
/// terminal state as an auditable record rather than being deleted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "appointments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub beneficiary_id: Uuid,
    pub camp_id: Uuid,
    pub vaccine_id: Uuid,
    pub slot_at: chrono::DateTime<chrono::Utc>,
    pub status: i16,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::BeneficiaryId",
        to = "super::users::Column::Id"
    )]
    Beneficiary,
    #[sea_orm(
        belongs_to = "super::camps::Entity",
        from = "Column::CampId",
        to = "super::camps::Column::Id"
    )]
    Camp,
    #[sea_orm(
        belongs_to = "super::vaccines::Entity",
        from = "Column::VaccineId",
        to = "super::vaccines::Column::Id"
    )]
    Vaccine,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Beneficiary.def()
    }
}

impl Related<super::camps::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Camp.def()
    }
}

impl Related<super::vaccines::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vaccine.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
