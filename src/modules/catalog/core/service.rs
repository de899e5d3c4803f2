use serde::{Deserialize, Serialize};

/// A bookable studio service. Maintained by admins outside the booking flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    /// Minor currency units.
    pub price: i64,
    pub duration_minutes: u32,
    pub thumbnail_url: Option<String>,
    pub is_active: bool,
}

impl ServiceRecord {
    pub fn new(slug: &str, name: &str, price: i64, duration_minutes: u32) -> Self {
        Self {
            id: slug.to_string(),
            name: name.to_string(),
            slug: slug.to_string(),
            description: String::new(),
            price,
            duration_minutes,
            thumbnail_url: None,
            is_active: true,
        }
    }
}

/// The services offered on the studio's booking form.
pub fn studio_services() -> Vec<ServiceRecord> {
    vec![
        ServiceRecord::new("bodas", "Maquillaje para Bodas", 8000, 120),
        ServiceRecord::new("quince", "Maquillaje para 15 Años", 6000, 90),
        ServiceRecord::new("eventos", "Eventos Especiales", 4500, 60),
        ServiceRecord::new("fotos", "Maquillaje para Fotos", 4000, 60),
        ServiceRecord::new("artistico", "Maquillaje Artístico", 5000, 90),
    ]
}
