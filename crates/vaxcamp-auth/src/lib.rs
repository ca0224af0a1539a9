//! Authentication machinery for the Vaxcamp platform.
//!
//! Provides JWT issuing and validation, Argon2 secret hashing, and the
//! bearer-token `Identity` extractor used by every protected handler.

pub mod identity;
pub mod password;
pub mod token;
