use crate::models::ticket::{FaultCategory, Priority, RepairTicket, TicketStatus};
use chrono::NaiveDate;

/// Demo tickets the dashboard starts with, newest-first as displayed.
pub fn demo_tickets() -> Vec<RepairTicket> {
    vec![
        ticket(
            "RPR-001",
            "Crane A",
            FaultCategory::Hydraulic,
            Priority::High,
            TicketStatus::Open,
            "Hydraulic arm moving slowly, possible leak in main cylinder",
            "Mike Johnson",
            (2025, 7, 13),
            Some("Maintenance Team"),
            2800,
        ),
        ticket(
            "RPR-002",
            "Generator",
            FaultCategory::Electrical,
            Priority::Critical,
            TicketStatus::InProgress,
            "Backup generator not starting, electrical fault detected",
            "Sarah Wilson",
            (2025, 7, 14),
            Some("Electrical Team"),
            1200,
        ),
        ticket(
            "RPR-003",
            "Concrete Pump",
            FaultCategory::Mechanical,
            Priority::Medium,
            TicketStatus::Open,
            "Unusual noise from pump motor, requires inspection",
            "Carlos Martinez",
            (2025, 7, 12),
            None,
            800,
        ),
        ticket(
            "RPR-004",
            "Elevator",
            FaultCategory::Safety,
            Priority::High,
            TicketStatus::InProgress,
            "Emergency stop button not functioning properly",
            "Lisa Chen",
            (2025, 7, 11),
            Some("Safety Team"),
            600,
        ),
        ticket(
            "RPR-005",
            "Excavator",
            FaultCategory::Maintenance,
            Priority::Low,
            TicketStatus::Open,
            "Scheduled 500-hour maintenance due",
            "System Auto",
            (2025, 7, 10),
            None,
            1500,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn ticket(
    id: &str,
    equipment: &str,
    category: FaultCategory,
    priority: Priority,
    status: TicketStatus,
    description: &str,
    reporter: &str,
    (year, month, day): (i32, u32, u32),
    assignee: Option<&str>,
    estimated_cost: u64,
) -> RepairTicket {
    RepairTicket {
        id: id.to_string(),
        equipment: equipment.to_string(),
        category,
        priority,
        status,
        description: description.to_string(),
        reporter: reporter.to_string(),
        reported_on: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        assignee: assignee.map(str::to_string),
        estimated_cost,
    }
}
