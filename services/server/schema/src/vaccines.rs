use sea_orm::entity::prelude::*;

/// Vaccine catalog entry.
///
/// `total_doses` counts doses across the whole system, independent of any
/// per-camp inventory allocation.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vaccines")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub description: Option<String>,
    pub total_doses: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::camp_inventory::Entity")]
    CampInventory,
    #[sea_orm(has_many = "super::appointments::Entity")]
    Appointments,
}

impl Related<super::camp_inventory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CampInventory.def()
    }
}

impl Related<super::appointments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Appointments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
