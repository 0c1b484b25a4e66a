pub mod commands;
pub mod error;
pub mod models;
pub mod tasks;
pub mod tickets;

use commands::{
    feed::{start_activity_feed, FeedState},
    settings::{get_settings, load_app_settings, save_settings},
    tasks::{list_tasks, toggle_task},
    tickets::{
        assign_ticket, get_dashboard, get_ticket, list_recent_tickets, list_tickets_by_status,
        submit_ticket, ticket_summary, update_ticket_status,
    },
};
use std::sync::{Arc, Mutex};
use tasks::checklist::TaskChecklist;
use tauri::Manager;
use tickets::store::TicketStore;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let store = TicketStore::seeded();
    log::info!("repair board ready with {} tickets", store.len());

    tauri::Builder::default()
        .manage(Arc::new(Mutex::new(store)))
        .manage(Mutex::new(TaskChecklist::seeded()))
        .manage(FeedState::default())
        .setup(|app| {
            let settings = load_app_settings(app.handle());
            app.manage(Mutex::new(settings));
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            list_recent_tickets,
            ticket_summary,
            list_tickets_by_status,
            get_ticket,
            submit_ticket,
            update_ticket_status,
            assign_ticket,
            get_dashboard,
            list_tasks,
            toggle_task,
            get_settings,
            save_settings,
            start_activity_feed,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
