use crate::modules::accounts::core::session::Session;
use crate::modules::appointments::adapters::outbound::appointment_store::{
    AppointmentStore, AppointmentStoreError,
};
use crate::modules::appointments::core::appointment::AppointmentId;
use crate::modules::appointments::core::availability::{OccupancySet, SlotTemplate};
use crate::modules::appointments::use_cases::submit_booking::decide::{
    BookingContext, decide_booking, validate_request,
};
use crate::modules::appointments::use_cases::submit_booking::decision::{BookingError, Decision};
use crate::modules::appointments::use_cases::submit_booking::request::AppointmentRequest;
use crate::modules::catalog::adapters::outbound::catalog_store::CatalogStore;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

pub struct SubmitBookingHandler<TAppointments, TCatalog>
where
    TAppointments: AppointmentStore + 'static,
    TCatalog: CatalogStore + 'static,
{
    template: SlotTemplate,
    appointments: Arc<TAppointments>,
    catalog: Arc<TCatalog>,
}

impl<TAppointments, TCatalog> SubmitBookingHandler<TAppointments, TCatalog>
where
    TAppointments: AppointmentStore + 'static,
    TCatalog: CatalogStore + 'static,
{
    pub fn new(template: SlotTemplate, appointments: Arc<TAppointments>, catalog: Arc<TCatalog>) -> Self {
        Self {
            template,
            appointments,
            catalog,
        }
    }

    /// Availability is recomputed from the store on every call; whatever the
    /// client saw when it rendered the picker is not trusted. Failures are
    /// reported once, never retried.
    pub async fn handle(
        &self,
        session: Option<&Session>,
        request: AppointmentRequest,
    ) -> Result<AppointmentId, BookingError> {
        let (session, request) = validate_request(session, &request)?;

        let service = self
            .catalog
            .find(&request.service_id)
            .await
            .map_err(|e| BookingError::PersistenceFailed(e.to_string()))?;
        let occupied = self
            .appointments
            .occupied_slots(request.date)
            .await
            .map_err(|e| BookingError::PersistenceFailed(e.to_string()))?;
        let occupancy = OccupancySet::for_date(request.date, occupied);

        let context = BookingContext {
            service: service.as_ref(),
            template: &self.template,
            occupancy: &occupancy,
            appointment_id: Uuid::now_v7(),
            now: Utc::now().timestamp_millis(),
        };

        let appointment = match decide_booking(session, request, context) {
            Decision::Accepted { appointment } => appointment,
            Decision::Rejected { reason } => {
                tracing::info!(user_id = %session.user_id, %reason, "booking rejected");
                return Err(reason);
            }
        };

        match self.appointments.insert(&appointment).await {
            Ok(id) => {
                tracing::info!(
                    appointment_id = %id,
                    user_id = %appointment.user_id,
                    date = %appointment.date,
                    slot = %appointment.slot,
                    "appointment booked"
                );
                Ok(id)
            }
            Err(AppointmentStoreError::SlotTaken { date, slot }) => {
                tracing::info!(%date, %slot, "slot taken by a concurrent booking");
                Err(BookingError::SlotUnavailable { date, slot })
            }
            Err(e) => {
                tracing::error!(error = %e, "appointment insert failed");
                Err(BookingError::PersistenceFailed(e.to_string()))
            }
        }
    }
}
