// In memory implementation of the AppointmentStore port.
//
// Purpose
// - Support handler tests and local development without the hosted database.
//
// Responsibilities
// - Keep appointments in insertion order.
// - Enforce the (date, slot) uniqueness constraint on insert, so the second
//   of two racing writers fails cleanly.
// - Offer failure injection: offline mode, insert delay, call counters.

use crate::modules::appointments::adapters::outbound::appointment_store::{
    AppointmentStore, AppointmentStoreError,
};
use crate::modules::appointments::core::appointment::{Appointment, AppointmentId};
use crate::modules::appointments::core::update::AppointmentUpdate;
use crate::shared::core::primitives::{BookingDate, Slot};
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryAppointmentStore {
    rows: RwLock<Vec<Appointment>>,
    offline: bool,
    inserts_fail: bool,
    delay_insert_ms: AtomicU64,
    calls: AtomicUsize,
    insert_calls: AtomicUsize,
}

impl InMemoryAppointmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    /// Makes every insert fail as a dropped network call would, leaving reads intact.
    pub fn fail_inserts(&mut self) {
        self.inserts_fail = true;
    }

    pub fn set_delay_insert_ms(&self, ms: u64) {
        self.delay_insert_ms.store(ms, Ordering::SeqCst);
    }

    /// Every port call, reads included.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    fn enter(&self) -> Result<(), AppointmentStoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.offline {
            return Err(AppointmentStoreError::Backend(
                "Appointment store offline".into(),
            ));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl AppointmentStore for InMemoryAppointmentStore {
    async fn insert(&self, appointment: &Appointment) -> Result<AppointmentId, AppointmentStoreError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        self.enter()?;
        if self.inserts_fail {
            return Err(AppointmentStoreError::Backend(
                "network error while inserting appointment".into(),
            ));
        }
        let delay = self.delay_insert_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(delay)).await;
        }
        let mut rows = self.rows.write().await;
        let taken = appointment.status.occupies_slot()
            && rows.iter().any(|row| {
                row.status.occupies_slot() && row.date == appointment.date && row.slot == appointment.slot
            });
        if taken {
            return Err(AppointmentStoreError::SlotTaken {
                date: appointment.date,
                slot: appointment.slot,
            });
        }
        rows.push(appointment.clone());
        Ok(appointment.id)
    }

    async fn occupied_slots(&self, date: BookingDate) -> Result<BTreeSet<Slot>, AppointmentStoreError> {
        self.enter()?;
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|row| row.date == date && row.status.occupies_slot())
            .map(|row| row.slot)
            .collect())
    }

    async fn list(&self) -> Result<Vec<Appointment>, AppointmentStoreError> {
        self.enter()?;
        let mut rows = self.rows.read().await.clone();
        rows.sort_by_key(|row| (row.date, row.slot));
        Ok(rows)
    }

    async fn find(&self, id: AppointmentId) -> Result<Option<Appointment>, AppointmentStoreError> {
        self.enter()?;
        Ok(self.rows.read().await.iter().find(|row| row.id == id).cloned())
    }

    async fn update(
        &self,
        id: AppointmentId,
        update: &AppointmentUpdate,
    ) -> Result<Appointment, AppointmentStoreError> {
        self.enter()?;
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or(AppointmentStoreError::NotFound(id))?;
        *row = update.apply(row)?;
        Ok(row.clone())
    }
}
