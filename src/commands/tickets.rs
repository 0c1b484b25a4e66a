use crate::commands::settings::{current_settings, EffectiveSettings};
use crate::models::dashboard::DashboardSnapshot;
use crate::models::ticket::*;
use crate::tickets::store::TicketStore;
use std::sync::{Arc, Mutex, MutexGuard};
use tauri::Emitter;

#[tauri::command]
pub async fn list_recent_tickets(
    limit: Option<usize>,
    store: tauri::State<'_, Arc<Mutex<TicketStore>>>,
    settings: tauri::State<'_, Mutex<EffectiveSettings>>,
) -> Result<Vec<RepairTicket>, String> {
    let limit = match limit {
        Some(limit) => limit,
        None => current_settings(settings.inner())?.recent_window,
    };
    list_recent_internal(store.inner(), limit)
}

pub fn list_recent_internal(
    store: &Arc<Mutex<TicketStore>>,
    limit: usize,
) -> Result<Vec<RepairTicket>, String> {
    Ok(lock_store(store)?.list_recent(limit))
}

#[tauri::command]
pub async fn ticket_summary(
    store: tauri::State<'_, Arc<Mutex<TicketStore>>>,
) -> Result<TicketSummary, String> {
    summary_internal(store.inner())
}

pub fn summary_internal(store: &Arc<Mutex<TicketStore>>) -> Result<TicketSummary, String> {
    Ok(lock_store(store)?.summary())
}

#[tauri::command]
pub async fn list_tickets_by_status(
    status: TicketStatus,
    store: tauri::State<'_, Arc<Mutex<TicketStore>>>,
) -> Result<Vec<RepairTicket>, String> {
    let tickets = lock_store(store.inner())?.list_by_status(status);
    Ok(tickets)
}

#[tauri::command]
pub async fn get_ticket(
    id: String,
    store: tauri::State<'_, Arc<Mutex<TicketStore>>>,
) -> Result<RepairTicket, String> {
    get_ticket_internal(store.inner(), &id)
}

pub fn get_ticket_internal(store: &Arc<Mutex<TicketStore>>, id: &str) -> Result<RepairTicket, String> {
    lock_store(store)?
        .get(id)
        .cloned()
        .ok_or(format!("NOT_FOUND: no repair ticket with id {id}"))
}

#[tauri::command]
pub async fn submit_ticket(
    ticket: NewTicket,
    store: tauri::State<'_, Arc<Mutex<TicketStore>>>,
    settings: tauri::State<'_, Mutex<EffectiveSettings>>,
    app: tauri::AppHandle,
) -> Result<RepairTicket, String> {
    let default_cost = current_settings(settings.inner())?.default_estimated_cost;
    let created = submit_ticket_internal(store.inner(), ticket, default_cost)?;

    let _ = app.emit("status_message", format!("New repair {} submitted", created.id));
    notify_tickets_changed(&app, store.inner());

    Ok(created)
}

/// Records a submission, filling a missing cost estimate with `default_cost`.
/// Validation failures leave the store untouched.
pub fn submit_ticket_internal(
    store: &Arc<Mutex<TicketStore>>,
    mut ticket: NewTicket,
    default_cost: u64,
) -> Result<RepairTicket, String> {
    ticket.estimated_cost.get_or_insert(default_cost);

    let mut store_lock = lock_store(store)?;
    match store_lock.submit(ticket) {
        Ok(created) => {
            log::info!(
                "repair {} submitted for {} ({}, {})",
                created.id,
                created.equipment,
                created.category,
                created.priority
            );
            Ok(created)
        }
        Err(e) => {
            log::warn!("repair submission rejected: {e}");
            Err(e.to_string())
        }
    }
}

#[tauri::command]
pub async fn update_ticket_status(
    id: String,
    status: TicketStatus,
    store: tauri::State<'_, Arc<Mutex<TicketStore>>>,
    app: tauri::AppHandle,
) -> Result<RepairTicket, String> {
    let updated = update_status_internal(store.inner(), &id, status)?;

    let _ = app.emit("status_message", format!("Repair {} marked {}", updated.id, updated.status));
    notify_tickets_changed(&app, store.inner());

    Ok(updated)
}

pub fn update_status_internal(
    store: &Arc<Mutex<TicketStore>>,
    id: &str,
    status: TicketStatus,
) -> Result<RepairTicket, String> {
    let updated = lock_store(store)?
        .update_status(id, status)
        .map_err(|e| e.to_string())?;
    log::info!("repair {} is now {}", updated.id, updated.status);
    Ok(updated)
}

#[tauri::command]
pub async fn assign_ticket(
    id: String,
    assignee: Option<String>,
    store: tauri::State<'_, Arc<Mutex<TicketStore>>>,
    app: tauri::AppHandle,
) -> Result<RepairTicket, String> {
    let updated = assign_internal(store.inner(), &id, assignee)?;
    notify_tickets_changed(&app, store.inner());
    Ok(updated)
}

pub fn assign_internal(
    store: &Arc<Mutex<TicketStore>>,
    id: &str,
    assignee: Option<String>,
) -> Result<RepairTicket, String> {
    let updated = lock_store(store)?
        .assign(id, assignee)
        .map_err(|e| e.to_string())?;
    log::info!(
        "repair {} assigned to {}",
        updated.id,
        updated.assignee.as_deref().unwrap_or("nobody")
    );
    Ok(updated)
}

#[tauri::command]
pub async fn get_dashboard(
    store: tauri::State<'_, Arc<Mutex<TicketStore>>>,
    settings: tauri::State<'_, Mutex<EffectiveSettings>>,
) -> Result<DashboardSnapshot, String> {
    let window = current_settings(settings.inner())?.recent_window;
    dashboard_internal(store.inner(), window)
}

pub fn dashboard_internal(
    store: &Arc<Mutex<TicketStore>>,
    recent_window: usize,
) -> Result<DashboardSnapshot, String> {
    let store_lock = lock_store(store)?;
    Ok(DashboardSnapshot {
        recent: store_lock.list_recent(recent_window),
        summary: store_lock.summary(),
        generated_at: chrono::Utc::now().timestamp(),
    })
}

fn lock_store(store: &Arc<Mutex<TicketStore>>) -> Result<MutexGuard<'_, TicketStore>, String> {
    store.lock().map_err(|_| "Store lock error".to_string())
}

fn notify_tickets_changed(app: &tauri::AppHandle, store: &Arc<Mutex<TicketStore>>) {
    match summary_internal(store) {
        Ok(summary) => {
            let _ = app.emit("tickets_changed", summary);
        }
        Err(e) => log::warn!("could not publish ticket summary: {e}"),
    }
}
