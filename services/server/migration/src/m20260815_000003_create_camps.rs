use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Camps::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Camps::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Camps::Name).string().not_null())
                    .col(ColumnDef::new(Camps::OrganizerId).uuid().not_null())
                    .col(ColumnDef::new(Camps::Longitude).double().not_null())
                    .col(ColumnDef::new(Camps::Latitude).double().not_null())
                    .col(ColumnDef::new(Camps::Address).string().not_null())
                    .col(
                        ColumnDef::new(Camps::StartsAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Camps::EndsAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Camps::Status)
                            .small_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Camps::AccessCode)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Camps::StaffPinHash).string().not_null())
                    .col(
                        ColumnDef::new(Camps::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Camps::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Camps::Table, Camps::OrganizerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Camps::Table)
                    .col(Camps::OrganizerId)
                    .name("idx_camps_organizer_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_camps_organizer_id").to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Camps::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Camps {
    Table,
    Id,
    Name,
    OrganizerId,
    Longitude,
    Latitude,
    Address,
    StartsAt,
    EndsAt,
    Status,
    AccessCode,
    StaffPinHash,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
