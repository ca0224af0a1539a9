use sea_orm_migration::prelude::*;

mod m20260815_000001_create_users;
mod m20260815_000002_create_vaccines;
mod m20260815_000003_create_camps;
mod m20260815_000004_create_camp_staff;
mod m20260815_000005_create_camp_inventory;
mod m20260815_000006_create_appointments;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260815_000001_create_users::Migration),
            Box::new(m20260815_000002_create_vaccines::Migration),
            Box::new(m20260815_000003_create_camps::Migration),
            Box::new(m20260815_000004_create_camp_staff::Migration),
            Box::new(m20260815_000005_create_camp_inventory::Migration),
            Box::new(m20260815_000006_create_appointments::Migration),
        ]
    }
}
