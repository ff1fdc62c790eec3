//! Hard-coded catalog of bookable services.
//!
//! Purely informational: durations here never feed into the availability
//! check.

use crate::models::service::Service;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceCatalog {
    services: Vec<Service>,
}

impl ServiceCatalog {
    pub fn new(services: Vec<Service>) -> Self {
        Self { services }
    }

    pub fn seeded() -> Self {
        Self::new(vec![
            Service::new(1, "Corte de Cabelo", 30),
            Service::new(2, "Manicure", 45),
        ])
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn get(&self, id: u32) -> Option<&Service> {
        self.services.iter().find(|service| service.id == id)
    }
}
