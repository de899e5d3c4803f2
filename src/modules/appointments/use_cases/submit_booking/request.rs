use serde::Deserialize;

/// What the booking form submits. Fields arrive as raw text and are only
/// trusted after validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppointmentRequest {
    pub date: String,
    pub slot: String,
    pub service_id: String,
    pub customer_name: String,
    pub phone: String,
    #[serde(default)]
    pub notes: Option<String>,
}
