use crate::modules::accounts::adapters::outbound::identity_provider::IdentityProvider;
use crate::modules::accounts::adapters::outbound::identity_provider_in_memory::InMemoryIdentityProvider;
use crate::modules::accounts::adapters::outbound::profile_store_in_memory::InMemoryProfileStore;
use crate::modules::accounts::adapters::outbound::session_storage::SessionStorage;
use crate::modules::accounts::adapters::outbound::session_storage_in_memory::InMemorySessionStorage;
use crate::modules::accounts::core::session::Role;
use crate::modules::accounts::use_cases::session_gate::handler::SessionGate;
use crate::modules::accounts::use_cases::update_profile_settings::handler::UpdateProfileSettingsHandler;
use crate::modules::appointments::adapters::outbound::appointment_store_in_memory::InMemoryAppointmentStore;
use crate::modules::appointments::core::availability::SlotTemplate;
use crate::modules::appointments::use_cases::list_available_slots::handler::ListAvailableSlotsHandler;
use crate::modules::appointments::use_cases::manage_appointments::handler::ManageAppointmentsHandler;
use crate::modules::appointments::use_cases::submit_booking::handler::SubmitBookingHandler;
use crate::modules::catalog::adapters::outbound::catalog_store::CatalogStore;
use crate::modules::catalog::adapters::outbound::catalog_store_in_memory::InMemoryCatalogStore;
use crate::modules::catalog::core::service::studio_services;
use std::sync::Arc;

pub type Gate = SessionGate<InMemoryIdentityProvider, InMemoryProfileStore>;

/// Concrete adapters behind every port. Kept apart from `AppState` so the
/// shell and tests can swap one of them before wiring.
#[derive(Clone)]
pub struct Backends {
    pub identity: Arc<InMemoryIdentityProvider>,
    pub profiles: Arc<InMemoryProfileStore>,
    pub sessions: Arc<dyn SessionStorage>,
    pub appointments: Arc<InMemoryAppointmentStore>,
    pub catalog: Arc<InMemoryCatalogStore>,
}

impl Backends {
    pub fn in_memory() -> Self {
        let profiles = Arc::new(InMemoryProfileStore::new());
        let identity = InMemoryIdentityProvider::new().with_signup_trigger(profiles.clone());
        Self {
            identity: Arc::new(identity),
            profiles,
            sessions: Arc::new(InMemorySessionStorage::new()),
            appointments: Arc::new(InMemoryAppointmentStore::new()),
            catalog: Arc::new(InMemoryCatalogStore::with_services(studio_services())),
        }
    }

    /// Creates an account and promotes it to admin. Leaves nobody signed in.
    pub async fn seed_admin(&self, email: &str, password: &str) -> anyhow::Result<()> {
        let user = self.identity.sign_up(email, password).await?;
        self.profiles.set_role(&user.user_id, Some(Role::Admin)).await?;
        self.identity.sign_out(&user.user_id).await?;
        tracing::info!(user_id = %user.user_id, %email, "admin account seeded");
        Ok(())
    }
}

#[derive(Clone)]
pub struct AppState {
    pub gate: Arc<Gate>,
    pub catalog: Arc<dyn CatalogStore>,
    pub list_slots_handler: Arc<ListAvailableSlotsHandler<InMemoryAppointmentStore>>,
    pub submit_booking_handler:
        Arc<SubmitBookingHandler<InMemoryAppointmentStore, InMemoryCatalogStore>>,
    pub manage_appointments_handler: Arc<ManageAppointmentsHandler<InMemoryAppointmentStore>>,
    pub profile_settings_handler: Arc<UpdateProfileSettingsHandler<InMemoryProfileStore>>,
}

impl AppState {
    pub fn new(template: SlotTemplate, backends: &Backends) -> Self {
        let gate = Arc::new(SessionGate::new(
            backends.identity.clone(),
            backends.profiles.clone(),
            backends.sessions.clone(),
        ));
        Self {
            gate,
            catalog: backends.catalog.clone(),
            list_slots_handler: Arc::new(ListAvailableSlotsHandler::new(
                template.clone(),
                backends.appointments.clone(),
            )),
            submit_booking_handler: Arc::new(SubmitBookingHandler::new(
                template,
                backends.appointments.clone(),
                backends.catalog.clone(),
            )),
            manage_appointments_handler: Arc::new(ManageAppointmentsHandler::new(
                backends.appointments.clone(),
            )),
            profile_settings_handler: Arc::new(UpdateProfileSettingsHandler::new(
                backends.profiles.clone(),
            )),
        }
    }
}
