use sea_orm::entity::prelude::*;

/// Roster membership: which users may operate a camp's staff terminal.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "camp_staff")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub camp_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: Uuid,
    pub added_at: chrono::DateTime<chrono::Utc>,
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
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::camps::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Camp.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
