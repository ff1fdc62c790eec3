//! Natural-language answers returned to the calling agent.
//!
//! The text is read by a language model, not parsed, so each answer is a
//! single sentence opening with a capitalised verdict.

use agenda_core::{
    availability::BusySchedule,
    catalog::ServiceCatalog,
    errors::SchedulingError,
    models::slot::{AvailabilityRequest, AvailabilityStatus},
};

pub fn availability_message(request: &AvailabilityRequest, status: AvailabilityStatus) -> String {
    match status {
        AvailabilityStatus::Free => format!(
            "DISPONÍVEL: O horário das {} no dia {} está livre.",
            request.hour, request.date
        ),
        AvailabilityStatus::Occupied => format!(
            "INDISPONÍVEL: O horário das {} no dia {} já está ocupado. Sugira outro horário.",
            request.hour, request.date
        ),
    }
}

pub fn invalid_request_message(error: &SchedulingError) -> String {
    let detail = match error {
        SchedulingError::Validation(detail) => detail.clone(),
        other => other.to_string(),
    };
    format!("FORMATO INVÁLIDO: {detail}. Informe a data como YYYY-MM-DD e a hora como HH:MM.")
}

/// Validates the request and answers it against `schedule`.
///
/// `Err` carries the text to hand back as a tool error.
pub fn answer_availability(
    schedule: &BusySchedule,
    request: &AvailabilityRequest,
) -> Result<String, String> {
    request
        .validate()
        .map_err(|error| invalid_request_message(&error))?;

    Ok(availability_message(request, schedule.status(request)))
}

pub fn services_message(catalog: &ServiceCatalog) -> String {
    if catalog.services().is_empty() {
        return "Nenhum serviço cadastrado.".to_string();
    }

    catalog
        .services()
        .iter()
        .map(|service| format!("{} - {}", service.id, service.label()))
        .collect::<Vec<_>>()
        .join("\n")
}
