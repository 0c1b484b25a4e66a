use crate::error::TicketError;
use crate::models::ticket::*;
use crate::tickets::lifecycle::check_transition;
use chrono::NaiveDate;
use std::collections::VecDeque;

/// Placeholder cost used when a submission carries no estimate.
pub const DEFAULT_ESTIMATED_COST: u64 = 1000;

const ID_PREFIX: &str = "RPR-";

/// In-memory repair tickets, newest first.
///
/// Identifiers come from a monotonic counter kept next to the sequence, so a
/// number handed out once is never issued again.
#[derive(Debug, Default)]
pub struct TicketStore {
    tickets: VecDeque<RepairTicket>,
    last_sequence: u64,
}

impl TicketStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the five demo tickets `RPR-001`..`RPR-005`.
    pub fn seeded() -> Self {
        Self::from_tickets(crate::tickets::seed::demo_tickets())
    }

    /// Builds a store from tickets already in display order. The counter
    /// resumes after the highest `RPR-` number present.
    pub fn from_tickets(tickets: Vec<RepairTicket>) -> Self {
        let last_sequence = tickets
            .iter()
            .filter_map(|t| parse_sequence(&t.id))
            .max()
            .unwrap_or(0)
            .max(tickets.len() as u64);

        Self {
            tickets: tickets.into(),
            last_sequence,
        }
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    pub fn list_recent(&self, n: usize) -> Vec<RepairTicket> {
        self.tickets.iter().take(n).cloned().collect()
    }

    pub fn list_by_status(&self, status: TicketStatus) -> Vec<RepairTicket> {
        self.tickets
            .iter()
            .filter(|t| t.status == status)
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&RepairTicket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    pub fn summary(&self) -> TicketSummary {
        self.tickets
            .iter()
            .fold(TicketSummary::default(), |mut acc, t| {
                match t.status {
                    TicketStatus::Open => acc.open += 1,
                    TicketStatus::InProgress => acc.in_progress += 1,
                    TicketStatus::Completed => acc.completed += 1,
                }
                acc
            })
    }

    /// Validates and records a new ticket reported today.
    pub fn submit(&mut self, fields: NewTicket) -> Result<RepairTicket, TicketError> {
        self.submit_on(fields, chrono::Local::now().date_naive())
    }

    pub fn submit_on(
        &mut self,
        fields: NewTicket,
        reported_on: NaiveDate,
    ) -> Result<RepairTicket, TicketError> {
        let missing = missing_fields(&fields);
        if !missing.is_empty() {
            return Err(TicketError::Validation { missing });
        }

        let ticket = RepairTicket {
            id: self.next_id(),
            equipment: fields.equipment.trim().to_string(),
            category: FaultCategory::from(fields.category),
            priority: fields.priority,
            status: TicketStatus::Open,
            description: fields.description.trim().to_string(),
            reporter: fields.reporter.trim().to_string(),
            reported_on,
            assignee: None,
            estimated_cost: fields.estimated_cost.unwrap_or(DEFAULT_ESTIMATED_COST),
        };

        self.tickets.push_front(ticket.clone());
        Ok(ticket)
    }

    pub fn update_status(
        &mut self,
        id: &str,
        status: TicketStatus,
    ) -> Result<RepairTicket, TicketError> {
        let ticket = self.get_mut(id)?;
        check_transition(ticket.status, status)?;
        ticket.status = status;
        Ok(ticket.clone())
    }

    /// Sets the assignee; `None` or a blank name clears it.
    pub fn assign(
        &mut self,
        id: &str,
        assignee: Option<String>,
    ) -> Result<RepairTicket, TicketError> {
        let ticket = self.get_mut(id)?;
        if ticket.status == TicketStatus::Completed {
            return Err(TicketError::Closed(ticket.id.clone()));
        }

        ticket.assignee = assignee
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());
        Ok(ticket.clone())
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut RepairTicket, TicketError> {
        self.tickets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| TicketError::NotFound(id.to_string()))
    }

    fn next_id(&mut self) -> String {
        self.last_sequence += 1;
        format!("{ID_PREFIX}{:03}", self.last_sequence)
    }
}

fn missing_fields(fields: &NewTicket) -> Vec<TicketField> {
    let mut missing = Vec::new();
    if fields.equipment.trim().is_empty() {
        missing.push(TicketField::Equipment);
    }
    if fields.category.trim().is_empty() {
        missing.push(TicketField::Category);
    }
    if fields.description.trim().is_empty() {
        missing.push(TicketField::Description);
    }
    missing
}

fn parse_sequence(id: &str) -> Option<u64> {
    id.strip_prefix(ID_PREFIX)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crane_repair(description: &str) -> NewTicket {
        NewTicket {
            equipment: "Crane A".to_string(),
            category: "Hydraulic".to_string(),
            priority: Priority::High,
            description: description.to_string(),
            reporter: "Mike Johnson".to_string(),
            estimated_cost: None,
        }
    }

    fn ids(tickets: &[RepairTicket]) -> Vec<&str> {
        tickets.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn seeded_store_matches_dashboard_counters() {
        let store = TicketStore::seeded();

        assert_eq!(
            store.summary(),
            TicketSummary {
                open: 3,
                in_progress: 2,
                completed: 0
            }
        );
        assert_eq!(ids(&store.list_recent(3)), vec!["RPR-001", "RPR-002", "RPR-003"]);
    }

    #[test]
    fn list_recent_is_a_prefix_of_store_order() {
        let store = TicketStore::seeded();
        let all = store.list_recent(usize::MAX);
        assert_eq!(all.len(), 5);

        for n in 0..=7 {
            let recent = store.list_recent(n);
            assert_eq!(recent.len(), n.min(5));
            assert_eq!(recent[..], all[..recent.len()]);
        }
    }

    #[test]
    fn submit_creates_open_unassigned_ticket_at_front() {
        let mut store = TicketStore::seeded();
        let today = NaiveDate::from_ymd_opt(2025, 7, 15).unwrap();

        let created = store
            .submit_on(crane_repair("Boom hose leaking"), today)
            .expect("valid submission");

        assert_eq!(created.id, "RPR-006");
        assert_eq!(created.status, TicketStatus::Open);
        assert_eq!(created.assignee, None);
        assert_eq!(created.reported_on, today);
        assert_eq!(created.estimated_cost, DEFAULT_ESTIMATED_COST);
        assert_eq!(store.len(), 6);
        assert_eq!(store.list_recent(1)[0].id, "RPR-006");
    }

    #[test]
    fn submit_keeps_caller_supplied_cost() {
        let mut store = TicketStore::new();
        let created = store
            .submit(NewTicket {
                estimated_cost: Some(4200),
                ..crane_repair("Replace seals")
            })
            .unwrap();

        assert_eq!(created.id, "RPR-001");
        assert_eq!(created.estimated_cost, 4200);
    }

    #[test]
    fn empty_description_is_rejected_without_mutation() {
        let mut store = TicketStore::seeded();

        let err = store.submit(crane_repair("")).unwrap_err();

        assert_eq!(
            err,
            TicketError::Validation {
                missing: vec![TicketField::Description]
            }
        );
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn validation_reports_all_missing_fields() {
        let mut store = TicketStore::new();
        let err = store
            .submit(NewTicket {
                equipment: "   ".to_string(),
                ..NewTicket::default()
            })
            .unwrap_err();

        assert_eq!(
            err,
            TicketError::Validation {
                missing: vec![
                    TicketField::Equipment,
                    TicketField::Category,
                    TicketField::Description
                ]
            }
        );
        assert!(store.is_empty());
    }

    #[test]
    fn identifiers_strictly_increase_across_submissions() {
        let mut store = TicketStore::seeded();
        let mut previous = 5;

        for i in 0..20 {
            let created = store.submit(crane_repair(&format!("issue {i}"))).unwrap();
            let seq = parse_sequence(&created.id).unwrap();
            assert!(seq > previous);
            previous = seq;
        }

        let summary = store.summary();
        assert_eq!(summary.total(), store.len());
        assert_eq!(summary.open, 23);
    }

    #[test]
    fn counter_resumes_after_highest_existing_id() {
        let mut seed = crate::tickets::seed::demo_tickets();
        seed.truncate(2);
        seed[0].id = "RPR-041".to_string();

        let mut store = TicketStore::from_tickets(seed);
        let created = store.submit(crane_repair("Check pins")).unwrap();
        assert_eq!(created.id, "RPR-042");
    }

    #[test]
    fn counter_handles_sequences_beyond_u32() {
        let mut seed = crate::tickets::seed::demo_tickets();
        seed[0].id = "RPR-4294967295".to_string();

        let mut store = TicketStore::from_tickets(seed);
        let created = store.submit(crane_repair("Inspect slew ring")).unwrap();
        assert_eq!(created.id, "RPR-4294967296");
    }

    #[test]
    fn list_by_status_filters_in_store_order() {
        let store = TicketStore::seeded();
        assert_eq!(
            ids(&store.list_by_status(TicketStatus::InProgress)),
            vec!["RPR-002", "RPR-004"]
        );
        assert!(store.list_by_status(TicketStatus::Completed).is_empty());
    }

    #[test]
    fn status_updates_follow_lifecycle() {
        let mut store = TicketStore::seeded();

        let done = store.update_status("RPR-002", TicketStatus::Completed).unwrap();
        assert_eq!(done.status, TicketStatus::Completed);
        assert_eq!(store.summary().completed, 1);

        let err = store.update_status("RPR-002", TicketStatus::Open).unwrap_err();
        assert!(matches!(err, TicketError::InvalidTransition { .. }));

        assert_eq!(
            store.update_status("RPR-999", TicketStatus::InProgress),
            Err(TicketError::NotFound("RPR-999".to_string()))
        );
    }

    #[test]
    fn assign_sets_and_clears_assignee() {
        let mut store = TicketStore::seeded();

        let assigned = store
            .assign("RPR-003", Some(" Pump Crew ".to_string()))
            .unwrap();
        assert_eq!(assigned.assignee.as_deref(), Some("Pump Crew"));

        let cleared = store.assign("RPR-003", Some(String::new())).unwrap();
        assert_eq!(cleared.assignee, None);

        store.update_status("RPR-003", TicketStatus::Completed).unwrap();
        assert_eq!(
            store.assign("RPR-003", Some("Late Crew".to_string())),
            Err(TicketError::Closed("RPR-003".to_string()))
        );
    }
}
