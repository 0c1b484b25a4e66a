use crate::commands::settings::{current_settings, EffectiveSettings};
use crate::models::activity::{ActivityNotification, SyncStatus};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tauri::Emitter;

const SITE_UPDATES: &[&str] = &[
    "Sarah updated structural drawings",
    "Mike completed foundation inspection",
    "New message from the project manager",
    "Material delivery scheduled for tomorrow",
    "Weather alert: Rain expected",
    "Quality inspection passed",
];

/// Guards the feed so a reloaded front end cannot start a second set of timers.
#[derive(Debug, Default)]
pub struct FeedState {
    started: AtomicBool,
}

#[derive(Debug, Clone)]
pub enum FeedEvent {
    Notification(ActivityNotification),
    Sync(SyncStatus),
}

#[tauri::command]
pub async fn start_activity_feed(
    feed: tauri::State<'_, FeedState>,
    settings: tauri::State<'_, Mutex<EffectiveSettings>>,
    app: tauri::AppHandle,
) -> Result<bool, String> {
    let settings = current_settings(settings.inner())?;
    let app_handle = app.clone();

    Ok(start_activity_feed_internal(feed.inner(), &settings, move |event| {
        let _ = match event {
            FeedEvent::Notification(notification) => {
                app_handle.emit("activity_notification", notification)
            }
            FeedEvent::Sync(status) => app_handle.emit("sync_status", status),
        };
    }))
}

/// Spawns the collaboration-update and sync-heartbeat timers. Returns `false`
/// when the feed was already running.
pub fn start_activity_feed_internal<F>(
    feed: &FeedState,
    settings: &EffectiveSettings,
    emit: F,
) -> bool
where
    F: Fn(FeedEvent) + Clone + Send + 'static,
{
    if feed.started.swap(true, Ordering::SeqCst) {
        return false;
    }

    log::info!(
        "starting activity feed (notifications every {}s at {}%, sync every {}s)",
        settings.notification_interval_secs,
        settings.notification_chance,
        settings.sync_interval_secs
    );

    if settings.notifications_enabled {
        let emit_update = emit.clone();
        let period = Duration::from_secs(settings.notification_interval_secs);
        let chance = settings.notification_chance;

        tauri::async_runtime::spawn(async move {
            let mut rng = StdRng::from_os_rng();
            let mut ticker = tokio::time::interval(period);
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if let Some(message) = pick_site_update(&mut rng, chance) {
                    emit_update(FeedEvent::Notification(site_update(message)));
                }
            }
        });
    }

    let period = Duration::from_secs(settings.sync_interval_secs);
    tauri::async_runtime::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            emit(FeedEvent::Sync(SyncStatus {
                state: "synced".to_string(),
                at: chrono::Utc::now().timestamp(),
            }));
        }
    });

    true
}

/// Rolls against `chance_percent` and, on a hit, picks one canned update.
pub fn pick_site_update<R: Rng>(rng: &mut R, chance_percent: u8) -> Option<&'static str> {
    if rng.random_range(0..100u8) >= chance_percent {
        return None;
    }
    Some(SITE_UPDATES[rng.random_range(0..SITE_UPDATES.len())])
}

pub fn site_update(message: &str) -> ActivityNotification {
    ActivityNotification {
        id: uuid::Uuid::new_v4().to_string(),
        message: message.to_string(),
        kind: "info".to_string(),
        at: chrono::Utc::now().timestamp(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_chance_never_notifies() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!((0..500).all(|_| pick_site_update(&mut rng, 0).is_none()));
    }

    #[test]
    fn full_chance_always_picks_a_known_update() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let message = pick_site_update(&mut rng, 100).expect("always notifies");
            assert!(SITE_UPDATES.contains(&message));
        }
    }

    #[test]
    fn site_updates_get_unique_ids() {
        let a = site_update("Quality inspection passed");
        let b = site_update("Quality inspection passed");
        assert_ne!(a.id, b.id);
        assert_eq!(a.kind, "info");
    }
}
