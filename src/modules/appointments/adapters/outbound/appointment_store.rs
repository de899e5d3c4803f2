use crate::modules::appointments::core::appointment::{Appointment, AppointmentId};
use crate::modules::appointments::core::update::{AppointmentUpdate, UpdateError};
use crate::shared::core::primitives::{BookingDate, Slot};
use async_trait::async_trait;
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppointmentStoreError {
    #[error("slot {slot} on {date} is already booked")]
    SlotTaken { date: BookingDate, slot: Slot },

    #[error("appointment {0} not found")]
    NotFound(AppointmentId),

    #[error(transparent)]
    Rejected(#[from] UpdateError),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Single-row writes only. `insert` enforces that at most one appointment
/// holding a slot exists per `(date, slot)`.
#[async_trait]
pub trait AppointmentStore: Send + Sync {
    async fn insert(&self, appointment: &Appointment) -> Result<AppointmentId, AppointmentStoreError>;

    /// Slots held on `date` by appointments that are not cancelled.
    async fn occupied_slots(&self, date: BookingDate) -> Result<BTreeSet<Slot>, AppointmentStoreError>;

    /// All appointments ordered by date, then slot.
    async fn list(&self) -> Result<Vec<Appointment>, AppointmentStoreError>;

    async fn find(&self, id: AppointmentId) -> Result<Option<Appointment>, AppointmentStoreError>;

    async fn update(
        &self,
        id: AppointmentId,
        update: &AppointmentUpdate,
    ) -> Result<Appointment, AppointmentStoreError>;
}
