use sea_orm::entity::prelude::*;

/// User account: beneficiaries, camp staff, organizers, and admins.
///
/// `password_hash` holds an Argon2id PHC string; plaintext is never stored.
/// `external_id` is an optional government-issued identifier, unique when set.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub role: i16,
    pub phone_number: Option<String>,
    #[sea_orm(unique)]
    pub external_id: Option<String>,
    pub address: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::camps::Entity")]
    Camps,
    #[sea_orm(has_many = "super::camp_staff::Entity")]
    CampStaff,
    #[sea_orm(has_many = "super::appointments::Entity")]
    Appointments,
}

impl Related<super::camps::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Camps.def()
    }
}

impl Related<super::camp_staff::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CampStaff.def()
    }
}

impl Related<super::appointments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Appointments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
