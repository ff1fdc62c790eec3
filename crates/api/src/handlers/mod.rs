pub mod availability;
pub mod services;
