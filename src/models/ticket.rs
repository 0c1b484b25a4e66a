use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketStatus {
    Open,
    #[serde(rename = "In Progress", alias = "InProgress")]
    InProgress,
    Completed,
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TicketStatus::Open => "Open",
            TicketStatus::InProgress => "In Progress",
            TicketStatus::Completed => "Completed",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
        };
        f.write_str(label)
    }
}

/// Fault category reported on a repair. The known set is open-ended: any
/// other label the form sends is kept verbatim as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FaultCategory {
    Hydraulic,
    Electrical,
    Mechanical,
    Safety,
    Maintenance,
    Other(String),
}

impl FaultCategory {
    pub fn as_str(&self) -> &str {
        match self {
            FaultCategory::Hydraulic => "Hydraulic",
            FaultCategory::Electrical => "Electrical",
            FaultCategory::Mechanical => "Mechanical",
            FaultCategory::Safety => "Safety",
            FaultCategory::Maintenance => "Maintenance",
            FaultCategory::Other(label) => label,
        }
    }
}

impl From<String> for FaultCategory {
    fn from(value: String) -> Self {
        let trimmed = value.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "hydraulic" => FaultCategory::Hydraulic,
            "electrical" => FaultCategory::Electrical,
            "mechanical" => FaultCategory::Mechanical,
            "safety" => FaultCategory::Safety,
            "maintenance" => FaultCategory::Maintenance,
            _ => FaultCategory::Other(trimmed.to_string()),
        }
    }
}

impl From<&str> for FaultCategory {
    fn from(value: &str) -> Self {
        FaultCategory::from(value.to_string())
    }
}

impl From<FaultCategory> for String {
    fn from(value: FaultCategory) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for FaultCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepairTicket {
    pub id: String,
    pub equipment: String,
    pub category: FaultCategory,
    pub priority: Priority,
    pub status: TicketStatus,
    pub description: String,
    pub reporter: String,
    pub reported_on: NaiveDate,
    pub assignee: Option<String>,
    pub estimated_cost: u64,
}

/// Fields captured by the repair form. Equipment, category and description
/// are required; everything else may be left blank.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTicket {
    #[serde(default)]
    pub equipment: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub reporter: String,
    #[serde(default)]
    pub estimated_cost: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketField {
    Equipment,
    Category,
    Description,
}

impl fmt::Display for TicketField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TicketField::Equipment => "equipment",
            TicketField::Category => "category",
            TicketField::Description => "description",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketSummary {
    pub open: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl TicketSummary {
    pub fn total(&self) -> usize {
        self.open + self.in_progress + self.completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_uses_dashboard_labels_on_the_wire() {
        assert_eq!(serde_json::to_value(TicketStatus::InProgress).unwrap(), json!("In Progress"));
        let parsed: TicketStatus = serde_json::from_value(json!("InProgress")).unwrap();
        assert_eq!(parsed, TicketStatus::InProgress);
    }

    #[test]
    fn unknown_categories_are_kept_verbatim() {
        assert_eq!(FaultCategory::from("  hydraulic "), FaultCategory::Hydraulic);
        assert_eq!(
            FaultCategory::from("Structural"),
            FaultCategory::Other("Structural".to_string())
        );
        assert_eq!(serde_json::to_value(FaultCategory::Safety).unwrap(), json!("Safety"));
    }

    #[test]
    fn new_ticket_defaults_optional_fields() {
        let parsed: NewTicket = serde_json::from_value(json!({
            "equipment": "Crane A",
            "category": "Hydraulic",
            "description": "Slow boom"
        }))
        .unwrap();

        assert_eq!(parsed.priority, Priority::Medium);
        assert!(parsed.reporter.is_empty());
        assert!(parsed.estimated_cost.is_none());
    }
}
