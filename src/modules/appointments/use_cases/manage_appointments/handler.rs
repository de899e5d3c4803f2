use crate::modules::accounts::core::session::{Session, require_admin};
use crate::modules::appointments::adapters::outbound::appointment_store::{
    AppointmentStore, AppointmentStoreError,
};
use crate::modules::appointments::core::appointment::{Appointment, AppointmentId};
use crate::modules::appointments::core::update::{AppointmentUpdate, UpdateError};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ManageAppointmentsError {
    #[error("admin access required")]
    AccessDenied,

    #[error("appointment {0} not found")]
    NotFound(AppointmentId),

    #[error("{0}")]
    InvalidTransition(UpdateError),

    #[error("invalid update: {0}")]
    InvalidUpdate(UpdateError),

    #[error("appointment store failed: {0}")]
    Persistence(String),
}

impl From<UpdateError> for ManageAppointmentsError {
    fn from(error: UpdateError) -> Self {
        match error {
            UpdateError::InvalidTransition { .. } => Self::InvalidTransition(error),
            other => Self::InvalidUpdate(other),
        }
    }
}

impl From<AppointmentStoreError> for ManageAppointmentsError {
    fn from(error: AppointmentStoreError) -> Self {
        match error {
            AppointmentStoreError::NotFound(id) => Self::NotFound(id),
            AppointmentStoreError::Rejected(e) => e.into(),
            other => Self::Persistence(other.to_string()),
        }
    }
}

/// Admin-only view over every appointment. The role check runs before any
/// store call, so a client never learns whether appointments exist.
pub struct ManageAppointmentsHandler<TAppointments>
where
    TAppointments: AppointmentStore + 'static,
{
    appointments: Arc<TAppointments>,
}

impl<TAppointments> ManageAppointmentsHandler<TAppointments>
where
    TAppointments: AppointmentStore + 'static,
{
    pub fn new(appointments: Arc<TAppointments>) -> Self {
        Self { appointments }
    }

    pub async fn list(
        &self,
        session: Option<&Session>,
    ) -> Result<Vec<Appointment>, ManageAppointmentsError> {
        require_admin(session).map_err(|_| ManageAppointmentsError::AccessDenied)?;
        Ok(self.appointments.list().await?)
    }

    pub async fn update(
        &self,
        session: Option<&Session>,
        id: AppointmentId,
        update: AppointmentUpdate,
    ) -> Result<Appointment, ManageAppointmentsError> {
        let admin =
            require_admin(session).map_err(|_| ManageAppointmentsError::AccessDenied)?;
        update.validate()?;

        let current = self
            .appointments
            .find(id)
            .await?
            .ok_or(ManageAppointmentsError::NotFound(id))?;
        update.apply(&current)?;

        let updated = self.appointments.update(id, &update).await?;
        tracing::info!(
            appointment_id = %id,
            admin = %admin.user_id,
            from = %current.status,
            to = %updated.status,
            "appointment updated"
        );
        Ok(updated)
    }
}
