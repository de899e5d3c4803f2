use crate::modules::appointments::use_cases::submit_booking::request::AppointmentRequest;

pub struct AppointmentRequestBuilder {
    inner: AppointmentRequest,
}

impl Default for AppointmentRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl AppointmentRequestBuilder {
    /// Defaults to a complete request for `bodas` on 2026-03-01 at 09:00.
    pub fn new() -> Self {
        Self {
            inner: AppointmentRequest {
                date: "2026-03-01".to_string(),
                slot: "09:00".to_string(),
                service_id: "bodas".to_string(),
                customer_name: "Ana Martínez".to_string(),
                phone: "+50370000000".to_string(),
                notes: None,
            },
        }
    }

    pub fn date(mut self, v: impl Into<String>) -> Self {
        self.inner.date = v.into();
        self
    }

    pub fn slot(mut self, v: impl Into<String>) -> Self {
        self.inner.slot = v.into();
        self
    }

    pub fn service_id(mut self, v: impl Into<String>) -> Self {
        self.inner.service_id = v.into();
        self
    }

    pub fn customer_name(mut self, v: impl Into<String>) -> Self {
        self.inner.customer_name = v.into();
        self
    }

    pub fn phone(mut self, v: impl Into<String>) -> Self {
        self.inner.phone = v.into();
        self
    }

    pub fn notes(mut self, v: Option<&str>) -> Self {
        self.inner.notes = v.map(str::to_string);
        self
    }

    pub fn build(self) -> AppointmentRequest {
        self.inner
    }
}

#[cfg(test)]
mod appointment_request_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = AppointmentRequestBuilder::default()
            .date("2026-04-10")
            .slot("17:00")
            .service_id("fotos")
            .customer_name("Lucía")
            .phone("+50371111111")
            .notes(Some("sesión exterior"))
            .build();

        assert_eq!(custom.date, "2026-04-10");
        assert_eq!(custom.slot, "17:00");
        assert_eq!(custom.service_id, "fotos");
        assert_eq!(custom.customer_name, "Lucía");
        assert_eq!(custom.phone, "+50371111111");
        assert_eq!(custom.notes.as_deref(), Some("sesión exterior"));
    }
}
