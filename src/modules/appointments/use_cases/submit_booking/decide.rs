use crate::modules::accounts::core::session::Session;
use crate::modules::appointments::core::appointment::{Appointment, AppointmentId, AppointmentStatus};
use crate::modules::appointments::core::availability::{OccupancySet, SlotTemplate, available_slots};
use crate::modules::appointments::use_cases::submit_booking::decision::{BookingError, Decision};
use crate::modules::appointments::use_cases::submit_booking::request::AppointmentRequest;
use crate::modules::catalog::core::service::ServiceRecord;
use crate::shared::core::primitives::{BookingDate, Slot};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub date: BookingDate,
    pub slot: Slot,
    pub service_id: String,
    pub customer_name: String,
    pub phone: String,
    pub notes: Option<String>,
}

fn required<'a>(field: &str, value: &'a str) -> Result<&'a str, BookingError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(BookingError::InvalidInput(format!("{field} is required")));
    }
    Ok(value)
}

/// Checks that need no store: the caller is signed in and the form is
/// complete and well formed. Runs before any store call.
pub fn validate_request<'a>(
    session: Option<&'a Session>,
    request: &AppointmentRequest,
) -> Result<(&'a Session, ValidatedRequest), BookingError> {
    let session = session.ok_or(BookingError::NotAuthenticated)?;

    let service_id = required("service_id", &request.service_id)?;
    let slot = required("slot", &request.slot)?;
    let phone = required("phone", &request.phone)?;
    let customer_name = required("customer_name", &request.customer_name)?;

    let slot = slot
        .parse::<Slot>()
        .map_err(|e| BookingError::InvalidInput(e.to_string()))?;
    let date = request
        .date
        .trim()
        .parse::<BookingDate>()
        .map_err(|e| BookingError::InvalidInput(e.to_string()))?;

    let notes = request
        .notes
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string);

    Ok((
        session,
        ValidatedRequest {
            date,
            slot,
            service_id: service_id.to_string(),
            customer_name: customer_name.to_string(),
            phone: phone.to_string(),
            notes,
        },
    ))
}

pub struct BookingContext<'a> {
    pub service: Option<&'a ServiceRecord>,
    pub template: &'a SlotTemplate,
    pub occupancy: &'a OccupancySet,
    pub appointment_id: AppointmentId,
    pub now: i64,
}

/// Decides a validated request against freshly loaded catalog and occupancy.
pub fn decide_booking(
    session: &Session,
    request: ValidatedRequest,
    context: BookingContext<'_>,
) -> Decision {
    match context.service {
        None => {
            return Decision::Rejected {
                reason: BookingError::InvalidInput(format!(
                    "unknown service {}",
                    request.service_id
                )),
            };
        }
        Some(service) if !service.is_active => {
            return Decision::Rejected {
                reason: BookingError::InvalidInput(format!(
                    "service {} is not bookable",
                    request.service_id
                )),
            };
        }
        Some(_) => {}
    }

    if !available_slots(request.date, context.template, context.occupancy).contains(&request.slot) {
        return Decision::Rejected {
            reason: BookingError::SlotUnavailable {
                date: request.date,
                slot: request.slot,
            },
        };
    }

    Decision::Accepted {
        appointment: Appointment {
            id: context.appointment_id,
            user_id: session.user_id.clone(),
            service_id: request.service_id,
            date: request.date,
            slot: request.slot,
            status: AppointmentStatus::Pending,
            customer_name: request.customer_name,
            phone: request.phone,
            customer_comment: request.notes,
            admin_note: None,
            adjusted_price: None,
            created_at: context.now,
        },
    }
}
