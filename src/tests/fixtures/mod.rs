pub mod appointments;
pub mod requests;
pub mod sessions;
pub mod state;
