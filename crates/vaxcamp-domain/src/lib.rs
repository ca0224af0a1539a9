//! Domain types shared across the Vaxcamp platform.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; never in `infra/` or `handlers/`.

pub mod appointment;
pub mod camp;
pub mod pagination;
pub mod user;
