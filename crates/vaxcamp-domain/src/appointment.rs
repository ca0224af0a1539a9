//! Appointment domain types.

use serde::{Deserialize, Serialize};

/// State of a booked appointment.
///
/// Wire format: `i16` column / camelCase string in JSON
/// (0 = Scheduled, 1 = Completed, 2 = Cancelled, 3 = NoShow).
///
/// `Scheduled` is the only non-terminal state. Once an appointment is
/// completed, cancelled, or marked no-show it can never change again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AppointmentStatus {
    Scheduled = 0,
    Completed = 1,
    Cancelled = 2,
    NoShow = 3,
}

impl AppointmentStatus {
    /// Convert from `u8` wire value. Returns `None` for unknown values.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Scheduled),
            1 => Some(Self::Completed),
            2 => Some(Self::Cancelled),
            3 => Some(Self::NoShow),
            _ => None,
        }
    }

    /// Convert to `u8` wire value.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// The camelCase name used on the wire.
    pub fn as_name(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::NoShow => "noShow",
        }
    }

    /// Parse a wire name. Returns `None` for anything else.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "scheduled" => Some(Self::Scheduled),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            "noShow" => Some(Self::NoShow),
            _ => None,
        }
    }

    /// Whether the appointment can move from `self` to `next`.
    ///
    /// Only `Scheduled` appointments may change state; every other state
    /// is terminal. Re-asserting the current state is not a transition.
    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (
                Self::Scheduled,
                Self::Completed | Self::Cancelled | Self::NoShow
            )
        )
    }

    /// Whether this state permits no further transitions.
    pub fn is_terminal(self) -> bool {
        self != Self::Scheduled
    }
}

impl Default for AppointmentStatus {
    fn default() -> Self {
        Self::Scheduled
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_name())
    }
}
