use crate::modules::appointments::core::appointment::Appointment;
use crate::shared::core::primitives::{BookingDate, Slot};

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("sign in to book an appointment")]
    NotAuthenticated,

    #[error("invalid booking request: {0}")]
    InvalidInput(String),

    #[error("slot {slot} on {date} is no longer available")]
    SlotUnavailable { date: BookingDate, slot: Slot },

    #[error("could not save the appointment: {0}")]
    PersistenceFailed(String),
}

#[derive(Debug)]
pub enum Decision {
    Accepted { appointment: Appointment },
    Rejected { reason: BookingError },
}
