//! sea-orm entity definitions for the Vaxcamp database.

pub mod appointments;
pub mod camp_inventory;
pub mod camp_staff;
pub mod camps;
pub mod users;
pub mod vaccines;
