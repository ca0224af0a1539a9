pub mod appointment;
pub mod auth;
pub mod camp;
pub mod user;
pub mod vaccine;
