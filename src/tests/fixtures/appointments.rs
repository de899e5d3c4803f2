use crate::modules::appointments::core::appointment::{Appointment, AppointmentStatus};
use uuid::Uuid;

/// A canonical pending appointment for 2026-03-01 at 09:00.
pub fn make_pending_appointment() -> Appointment {
    make_appointment_at("2026-03-01", "09:00")
}

pub fn make_appointment_at(date: &str, slot: &str) -> Appointment {
    Appointment {
        id: Uuid::now_v7(),
        user_id: "user-fixed-0001".to_string(),
        service_id: "bodas".to_string(),
        date: date.parse().unwrap(),
        slot: slot.parse().unwrap(),
        status: AppointmentStatus::Pending,
        customer_name: "Ana Martínez".to_string(),
        phone: "+50370000000".to_string(),
        customer_comment: None,
        admin_note: None,
        adjusted_price: None,
        created_at: 1_700_000_000_000,
    }
}
