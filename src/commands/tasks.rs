use crate::models::task::SiteTask;
use crate::tasks::checklist::{toggle_message, TaskChecklist};
use std::sync::Mutex;
use tauri::Emitter;

#[tauri::command]
pub async fn list_tasks(checklist: tauri::State<'_, Mutex<TaskChecklist>>) -> Result<Vec<SiteTask>, String> {
    let tasks = checklist
        .lock()
        .map_err(|_| "Checklist lock error".to_string())?
        .list();
    Ok(tasks)
}

#[tauri::command]
pub async fn toggle_task(
    id: u32,
    completed: bool,
    checklist: tauri::State<'_, Mutex<TaskChecklist>>,
    app: tauri::AppHandle,
) -> Result<SiteTask, String> {
    let task = toggle_task_internal(checklist.inner(), id, completed)?;
    let _ = app.emit("status_message", toggle_message(&task));
    Ok(task)
}

pub fn toggle_task_internal(
    checklist: &Mutex<TaskChecklist>,
    id: u32,
    completed: bool,
) -> Result<SiteTask, String> {
    let task = checklist
        .lock()
        .map_err(|_| "Checklist lock error".to_string())?
        .set_completed(id, completed)
        .ok_or(format!("NOT_FOUND: no checklist task with id {id}"))?;
    log::info!("task {} marked {}", task.id, if task.completed { "done" } else { "open" });
    Ok(task)
}
