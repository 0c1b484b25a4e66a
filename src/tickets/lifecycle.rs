use crate::error::TicketError;
use crate::models::ticket::TicketStatus;

/// Status moves are forward-only: Open → In Progress → Completed, with
/// Open → Completed allowed for quick fixes. Re-applying the current status
/// is accepted as a no-op.
pub fn can_transition(from: TicketStatus, to: TicketStatus) -> bool {
    use TicketStatus::*;

    from == to
        || matches!(
            (from, to),
            (Open, InProgress) | (Open, Completed) | (InProgress, Completed)
        )
}

pub fn check_transition(from: TicketStatus, to: TicketStatus) -> Result<(), TicketError> {
    if can_transition(from, to) {
        Ok(())
    } else {
        Err(TicketError::InvalidTransition { from, to })
    }
}
