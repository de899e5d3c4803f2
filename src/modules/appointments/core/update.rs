use crate::modules::appointments::core::appointment::{Appointment, AppointmentStatus};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UpdateError {
    #[error("update changes nothing")]
    Empty,

    #[error("adjusted price must not be negative, got {0}")]
    NegativePrice(i64),

    #[error("cannot move an appointment from {from} to {to}")]
    InvalidTransition {
        from: AppointmentStatus,
        to: AppointmentStatus,
    },
}

/// The fields an admin may change on an appointment. Anything else in the
/// payload is rejected when it is deserialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppointmentUpdate {
    pub status: Option<AppointmentStatus>,
    pub admin_note: Option<String>,
    pub adjusted_price: Option<i64>,
}

impl AppointmentUpdate {
    pub fn status(status: AppointmentStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), UpdateError> {
        if self.status.is_none() && self.admin_note.is_none() && self.adjusted_price.is_none() {
            return Err(UpdateError::Empty);
        }
        match self.adjusted_price {
            Some(price) if price < 0 => Err(UpdateError::NegativePrice(price)),
            _ => Ok(()),
        }
    }

    /// Checks the update against the current record and returns the record
    /// as it will look afterwards.
    pub fn apply(&self, current: &Appointment) -> Result<Appointment, UpdateError> {
        self.validate()?;
        let mut next = current.clone();
        if let Some(status) = self.status {
            if !current.status.can_transition_to(status) {
                return Err(UpdateError::InvalidTransition {
                    from: current.status,
                    to: status,
                });
            }
            next.status = status;
        }
        if let Some(note) = &self.admin_note {
            next.admin_note = Some(note.clone());
        }
        if let Some(price) = self.adjusted_price {
            next.adjusted_price = Some(price);
        }
        Ok(next)
    }
}
