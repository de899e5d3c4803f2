use crate::shared::core::primitives::{BookingDate, Slot};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub type AppointmentId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl AppointmentStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Cancelled | Self::Completed)
    }

    /// `pending -> confirmed | cancelled`, `confirmed -> completed | cancelled`.
    /// Re-applying the current status is allowed; a terminal status never moves.
    pub fn can_transition_to(self, next: Self) -> bool {
        use AppointmentStatus::*;
        if self == next {
            return true;
        }
        !self.is_terminal()
            && matches!(
                (self, next),
                (Pending, Confirmed) | (Pending, Cancelled) | (Confirmed, Completed) | (Confirmed, Cancelled)
            )
    }

    /// Whether an appointment in this status holds its slot.
    pub fn occupies_slot(self) -> bool {
        self != Self::Cancelled
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: AppointmentId,
    pub user_id: String,
    pub service_id: String,
    pub date: BookingDate,
    pub slot: Slot,
    pub status: AppointmentStatus,
    pub customer_name: String,
    pub phone: String,
    pub customer_comment: Option<String>,
    pub admin_note: Option<String>,
    /// Minor currency units.
    pub adjusted_price: Option<i64>,
    pub created_at: i64,
}
