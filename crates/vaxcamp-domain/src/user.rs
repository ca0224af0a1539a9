//! User domain types.

use serde::{Deserialize, Serialize};

/// User permission level.
///
/// Wire format: `i16` column / lowercase string in JSON
/// (0 = Beneficiary, 1 = Vaccinator, 2 = Organizer, 3 = Admin).
/// Ordered by privilege so handlers can gate with `<` / `>=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Beneficiary = 0,
    Vaccinator = 1,
    Organizer = 2,
    Admin = 3,
}

impl UserRole {
    /// Convert from `u8` wire value. Returns `None` for unknown values.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Beneficiary),
            1 => Some(Self::Vaccinator),
            2 => Some(Self::Organizer),
            3 => Some(Self::Admin),
            _ => None,
        }
    }

    /// Convert to `u8` wire value.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Parse from the lowercase name used in paths and JSON.
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "beneficiary" => Some(Self::Beneficiary),
            "vaccinator" => Some(Self::Vaccinator),
            "organizer" => Some(Self::Organizer),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

impl Default for UserRole {
    fn default() -> Self {
        Self::Beneficiary
    }
}

impl PartialOrd for UserRole {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UserRole {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_u8().cmp(&other.as_u8())
    }
}
