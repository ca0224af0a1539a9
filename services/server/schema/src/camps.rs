use sea_orm::entity::prelude::*;

/// Vaccination camp hosted by an organizer.
///
/// `access_code` is the public lookup key staff use at the camp terminal;
/// the shared staff PIN is stored only as an Argon2id hash.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "camps")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub organizer_id: Uuid,
    pub longitude: f64,
    pub latitude: f64,
    pub address: String,
    pub starts_at: chrono::DateTime<chrono::Utc>,
    pub ends_at: chrono::DateTime<chrono::Utc>,
    pub status: i16,
    #[sea_orm(unique)]
    pub access_code: String,
    pub staff_pin_hash: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::OrganizerId",
        to = "super::users::Column::Id"
    )]
    Organizer,
    #[sea_orm(has_many = "super::camp_staff::Entity")]
    CampStaff,
    #[sea_orm(has_many = "super::camp_inventory::Entity")]
    CampInventory,
    #[sea_orm(has_many = "super::appointments::Entity")]
    Appointments,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organizer.def()
    }
}

impl Related<super::camp_staff::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CampStaff.def()
    }
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
