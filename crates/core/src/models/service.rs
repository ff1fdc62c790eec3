use serde::{Deserialize, Serialize};

/// A bookable service offered by the business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: u32,
    pub name: String,
    pub duration_minutes: u32,
}

impl Service {
    pub fn new(id: u32, name: impl Into<String>, duration_minutes: u32) -> Self {
        Self {
            id,
            name: name.into(),
            duration_minutes,
        }
    }

    /// Human readable label, e.g. `Manicure (45 min)`.
    pub fn label(&self) -> String {
        format!("{} ({} min)", self.name, self.duration_minutes)
    }
}
