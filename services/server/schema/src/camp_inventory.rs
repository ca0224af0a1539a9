use sea_orm::entity::prelude::*;

/// Doses of one vaccine allocated to one camp.
///
/// `quantity` never goes below zero; bookings decrement it with a guarded
/// update inside the booking transaction.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "camp_inventory")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub camp_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub vaccine_id: Uuid,
    pub quantity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
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
