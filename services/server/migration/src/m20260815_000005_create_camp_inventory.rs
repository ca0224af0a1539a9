use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CampInventory::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(CampInventory::CampId).uuid().not_null())
                    .col(ColumnDef::new(CampInventory::VaccineId).uuid().not_null())
                    .col(
                        ColumnDef::new(CampInventory::Quantity)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(CampInventory::Quantity).gte(0)),
                    )
                    .primary_key(
                        Index::create()
                            .col(CampInventory::CampId)
                            .col(CampInventory::VaccineId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CampInventory::Table, CampInventory::CampId)
                            .to(Camps::Table, Camps::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CampInventory::Table, CampInventory::VaccineId)
                            .to(Vaccines::Table, Vaccines::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CampInventory::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum CampInventory {
    Table,
    CampId,
    VaccineId,
    Quantity,
}

#[derive(Iden)]
enum Camps {
    Table,
    Id,
}

#[derive(Iden)]
enum Vaccines {
    Table,
    Id,
}
