use std::sync::Arc;

use agenda_core::{
    availability::BusySchedule, catalog::ServiceCatalog, models::slot::AvailabilityRequest,
};
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use tracing::debug;

use crate::messages;

/// Name the server announces during the MCP handshake.
pub const SERVER_NAME: &str = "SchedulingAI";

const INSTRUCTIONS: &str = "Servidor de agendamento. Sempre chame check_schedule_availability \
antes de tentar realizar qualquer agendamento e, se o horário estiver ocupado, sugira outro \
horário ao cliente. Use list_services para conhecer os serviços oferecidos.";

/// MCP tool handler backed by the in-memory busy schedule.
///
/// Cloning is cheap; the schedule and catalog are shared.
#[derive(Clone)]
pub struct SchedulingTools {
    schedule: Arc<BusySchedule>,
    catalog: Arc<ServiceCatalog>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl SchedulingTools {
    pub fn new(schedule: BusySchedule, catalog: ServiceCatalog) -> Self {
        Self {
            schedule: Arc::new(schedule),
            catalog: Arc::new(catalog),
            tool_router: Self::tool_router(),
        }
    }

    pub fn seeded() -> Self {
        Self::new(BusySchedule::seeded(), ServiceCatalog::seeded())
    }

    #[tool(
        description = "Verifica se existe disponibilidade para agendar um serviço em uma data e \
hora específicas. Use esta ferramenta antes de tentar realizar qualquer agendamento."
    )]
    pub async fn check_schedule_availability(
        &self,
        Parameters(request): Parameters<AvailabilityRequest>,
    ) -> Result<CallToolResult, McpError> {
        match messages::answer_availability(&self.schedule, &request) {
            Ok(text) => {
                debug!(date = %request.date, hour = %request.hour, "Answered availability tool call");
                Ok(CallToolResult::success(vec![Content::text(text)]))
            }
            Err(text) => {
                debug!(date = %request.date, hour = %request.hour, "Rejected malformed tool call");
                Ok(CallToolResult::error(vec![Content::text(text)]))
            }
        }
    }

    #[tool(description = "Lista os serviços oferecidos, com o código e a duração de cada um.")]
    pub async fn list_services(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(
            messages::services_message(&self.catalog),
        )]))
    }
}

#[tool_handler]
impl ServerHandler for SchedulingTools {
    fn get_info(&self) -> ServerInfo {
        let mut server_info = Implementation::from_build_env();
        server_info.name = SERVER_NAME.to_string();

        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info,
            ..Default::default()
        }
    }
}
