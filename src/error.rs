use crate::models::ticket::{TicketField, TicketStatus};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TicketError {
    #[error("VALIDATION_FAILED: missing required field(s): {}", join_fields(.missing))]
    Validation { missing: Vec<TicketField> },

    #[error("NOT_FOUND: no repair ticket with id {0}")]
    NotFound(String),

    #[error("INVALID_TRANSITION: cannot move a ticket from {from} to {to}")]
    InvalidTransition { from: TicketStatus, to: TicketStatus },

    #[error("TICKET_CLOSED: ticket {0} is completed and cannot be reassigned")]
    Closed(String),
}

fn join_fields(fields: &[TicketField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
