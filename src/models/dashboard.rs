use super::ticket::{RepairTicket, TicketSummary};
use serde::{Deserialize, Serialize};

/// Everything the dashboard needs for one refresh of the repair panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub recent: Vec<RepairTicket>,
    pub summary: TicketSummary,
    pub generated_at: i64,
}
