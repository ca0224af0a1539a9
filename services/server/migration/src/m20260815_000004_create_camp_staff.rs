use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CampStaff::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(CampStaff::CampId).uuid().not_null())
                    .col(ColumnDef::new(CampStaff::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(CampStaff::AddedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(CampStaff::CampId)
                            .col(CampStaff::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CampStaff::Table, CampStaff::CampId)
                            .to(Camps::Table, Camps::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CampStaff::Table, CampStaff::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CampStaff::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum CampStaff {
    Table,
    CampId,
    UserId,
    AddedAt,
}

#[derive(Iden)]
enum Camps {
    Table,
    Id,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
