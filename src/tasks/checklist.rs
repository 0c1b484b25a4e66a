use crate::models::task::SiteTask;

/// Today's site checklist. Items are fixed; only their completion flag moves.
#[derive(Debug, Default)]
pub struct TaskChecklist {
    tasks: Vec<SiteTask>,
}

impl TaskChecklist {
    pub fn seeded() -> Self {
        let task = |id, title: &str, due: &str| SiteTask {
            id,
            title: title.to_string(),
            due: due.to_string(),
            completed: false,
        };

        Self {
            tasks: vec![
                task(1, "Review level 3 rebar placement", "Today"),
                task(2, "Confirm concrete pour schedule", "Today"),
                task(3, "Sign off scaffold inspection", "Tomorrow"),
                task(4, "Update site safety briefing", "Friday"),
            ],
        }
    }

    pub fn list(&self) -> Vec<SiteTask> {
        self.tasks.clone()
    }

    /// Sets the completion flag, returning the updated task or `None` when
    /// the id is unknown.
    pub fn set_completed(&mut self, id: u32, completed: bool) -> Option<SiteTask> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.completed = completed;
        Some(task.clone())
    }
}

/// Status-bar text shown after a checklist toggle.
pub fn toggle_message(task: &SiteTask) -> &'static str {
    if task.completed {
        "Task completed"
    } else {
        "Task reopened"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_checklist_starts_open() {
        let checklist = TaskChecklist::seeded();
        assert_eq!(checklist.list().len(), 4);
        assert!(checklist.list().iter().all(|t| !t.completed));
    }

    #[test]
    fn toggling_reports_completed_then_reopened() {
        let mut checklist = TaskChecklist::seeded();

        let done = checklist.set_completed(2, true).expect("known task");
        assert_eq!(toggle_message(&done), "Task completed");

        let reopened = checklist.set_completed(2, false).expect("known task");
        assert_eq!(toggle_message(&reopened), "Task reopened");
        assert!(checklist.set_completed(99, true).is_none());
    }
}
