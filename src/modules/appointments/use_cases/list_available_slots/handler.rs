use crate::modules::appointments::adapters::outbound::appointment_store::{
    AppointmentStore, AppointmentStoreError,
};
use crate::modules::appointments::core::availability::{
    OccupancySet, SlotTemplate, available_slots,
};
use crate::shared::core::primitives::{BookingDate, Slot};
use std::sync::Arc;

pub struct ListAvailableSlotsHandler<TAppointments>
where
    TAppointments: AppointmentStore + 'static,
{
    template: SlotTemplate,
    appointments: Arc<TAppointments>,
}

impl<TAppointments> ListAvailableSlotsHandler<TAppointments>
where
    TAppointments: AppointmentStore + 'static,
{
    pub fn new(template: SlotTemplate, appointments: Arc<TAppointments>) -> Self {
        Self {
            template,
            appointments,
        }
    }

    /// An empty result means the day is fully booked.
    pub async fn handle(&self, date: BookingDate) -> Result<Vec<Slot>, AppointmentStoreError> {
        let occupied = self.appointments.occupied_slots(date).await?;
        let occupancy = OccupancySet::for_date(date, occupied);
        Ok(available_slots(date, &self.template, &occupancy))
    }
}
