use crate::tickets::store::DEFAULT_ESTIMATED_COST;
use serde_json::{json, Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tauri::Manager;

const SETTINGS_SCHEMA_VERSION: i64 = 1;
const SETTINGS_FILE: &str = "settings.json";

pub const DEFAULT_RECENT_WINDOW: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveSettings {
    pub recent_window: usize,
    pub default_estimated_cost: u64,
    pub notifications_enabled: bool,
    pub notification_interval_secs: u64,
    pub notification_chance: u8,
    pub sync_interval_secs: u64,
}

impl Default for EffectiveSettings {
    fn default() -> Self {
        Self::from_value(&default_settings())
    }
}

impl EffectiveSettings {
    fn from_value(settings: &Value) -> Self {
        let u64_of = |key: &str, default: u64| settings.get(key).and_then(Value::as_u64).unwrap_or(default);

        Self {
            recent_window: u64_of("recentWindow", DEFAULT_RECENT_WINDOW as u64) as usize,
            default_estimated_cost: u64_of("defaultEstimatedCost", DEFAULT_ESTIMATED_COST),
            notifications_enabled: settings
                .get("notificationsEnabled")
                .and_then(Value::as_bool)
                .unwrap_or(true),
            notification_interval_secs: u64_of("notificationIntervalSecs", 15),
            notification_chance: u64_of("notificationChance", 20).min(100) as u8,
            sync_interval_secs: u64_of("syncIntervalSecs", 5),
        }
    }
}

#[tauri::command]
pub async fn get_settings(app: tauri::AppHandle) -> Result<Value, String> {
    load_settings_from_disk(&config_dir(&app)?)
}

#[tauri::command]
pub async fn save_settings(
    app: tauri::AppHandle,
    settings: Value,
    current: tauri::State<'_, Mutex<EffectiveSettings>>,
) -> Result<Value, String> {
    let saved = save_settings_to_disk(&config_dir(&app)?, settings)?;
    refresh_effective_settings(current.inner(), &saved)?;
    log::info!("dashboard settings saved");
    Ok(saved)
}

/// Snapshot of the settings loaded at startup or by the last save.
pub fn current_settings(current: &Mutex<EffectiveSettings>) -> Result<EffectiveSettings, String> {
    current
        .lock()
        .map(|settings| settings.clone())
        .map_err(|_| "Settings lock error".to_string())
}

pub fn refresh_effective_settings(
    current: &Mutex<EffectiveSettings>,
    saved: &Value,
) -> Result<EffectiveSettings, String> {
    let effective = EffectiveSettings::from_value(saved);
    let mut current_lock = current.lock().map_err(|_| "Settings lock error".to_string())?;
    *current_lock = effective.clone();
    Ok(effective)
}

pub fn config_dir(app: &tauri::AppHandle) -> Result<PathBuf, String> {
    app.path()
        .app_config_dir()
        .map_err(|e| format!("CONFIG_DIR_UNAVAILABLE: {e}"))
}

/// Reads settings once for the managed state, falling back to defaults when
/// the config directory or file cannot be used.
pub fn load_app_settings(app: &tauri::AppHandle) -> EffectiveSettings {
    match config_dir(app).and_then(|dir| load_effective_settings(&dir)) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("using default settings: {e}");
            EffectiveSettings::default()
        }
    }
}

pub fn load_effective_settings(config_dir: &Path) -> Result<EffectiveSettings, String> {
    let settings = load_settings_from_disk(config_dir)?;
    Ok(EffectiveSettings::from_value(&settings))
}

pub fn load_settings_from_disk(config_dir: &Path) -> Result<Value, String> {
    let path = settings_path(config_dir);
    ensure_config_dir(config_dir)?;

    let original = if path.exists() {
        let raw = fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read settings.json: {e}"))?;
        serde_json::from_str::<Value>(&raw).unwrap_or_else(|e| {
            log::warn!("settings.json is not valid JSON, resetting to defaults: {e}");
            json!({})
        })
    } else {
        json!({})
    };

    let migrated = migrate_settings(original.clone());
    if migrated != original || !path.exists() {
        write_settings_file(&path, &migrated)?;
    }

    Ok(migrated)
}

pub fn save_settings_to_disk(config_dir: &Path, settings: Value) -> Result<Value, String> {
    let path = settings_path(config_dir);
    ensure_config_dir(config_dir)?;

    let mut merged = load_settings_from_disk(config_dir).unwrap_or_else(|_| default_settings());
    merge_settings(&mut merged, &settings);

    let migrated = migrate_settings(merged);
    write_settings_file(&path, &migrated)?;
    Ok(migrated)
}

fn settings_path(config_dir: &Path) -> PathBuf {
    config_dir.join(SETTINGS_FILE)
}

fn ensure_config_dir(config_dir: &Path) -> Result<(), String> {
    fs::create_dir_all(config_dir)
        .map_err(|e| format!("Failed to create config directory: {e}"))
}

fn write_settings_file(path: &Path, settings: &Value) -> Result<(), String> {
    let raw = serde_json::to_string_pretty(settings)
        .map_err(|e| format!("Failed to serialize settings: {e}"))?;
    fs::write(path, raw)
        .map_err(|e| format!("Failed to write settings.json: {e}"))
}

fn migrate_settings(input: Value) -> Value {
    let mut out = match input {
        Value::Object(map) => Value::Object(map),
        _ => Value::Object(Map::new()),
    };

    deep_merge_defaults(&mut out, &default_settings());
    sanitize_settings(&mut out);

    if let Some(obj) = out.as_object_mut() {
        obj.insert("schema_version".to_string(), json!(SETTINGS_SCHEMA_VERSION));
    }

    out
}

fn default_settings() -> Value {
    json!({
        "schema_version": SETTINGS_SCHEMA_VERSION,
        "recentWindow": DEFAULT_RECENT_WINDOW,
        "defaultEstimatedCost": DEFAULT_ESTIMATED_COST,
        "notificationsEnabled": true,
        "notificationIntervalSecs": 15,
        "notificationChance": 20,
        "syncIntervalSecs": 5
    })
}

fn deep_merge_defaults(target: &mut Value, defaults: &Value) {
    let (Some(target_obj), Some(default_obj)) = (target.as_object_mut(), defaults.as_object()) else {
        return;
    };

    for (key, default_value) in default_obj {
        match target_obj.get_mut(key) {
            Some(existing) => {
                if existing.is_object() && default_value.is_object() {
                    deep_merge_defaults(existing, default_value);
                }
            }
            None => {
                target_obj.insert(key.clone(), default_value.clone());
            }
        }
    }
}

fn merge_settings(target: &mut Value, incoming: &Value) {
    match (target, incoming) {
        (Value::Object(target_obj), Value::Object(incoming_obj)) => {
            for (key, value) in incoming_obj {
                if let Some(existing) = target_obj.get_mut(key) {
                    merge_settings(existing, value);
                } else {
                    target_obj.insert(key.clone(), value.clone());
                }
            }
        }
        (target_slot, incoming_value) => {
            *target_slot = incoming_value.clone();
        }
    }
}

fn sanitize_settings(settings: &mut Value) {
    let Some(obj) = settings.as_object_mut() else {
        return;
    };

    clamp_u64(obj, "recentWindow", 1, 50, DEFAULT_RECENT_WINDOW as u64);
    clamp_u64(obj, "defaultEstimatedCost", 0, 1_000_000, DEFAULT_ESTIMATED_COST);
    clamp_u64(obj, "notificationIntervalSecs", 5, 3600, 15);
    clamp_u64(obj, "notificationChance", 0, 100, 20);
    clamp_u64(obj, "syncIntervalSecs", 1, 600, 5);

    ensure_bool(obj, "notificationsEnabled", true);
}

fn clamp_u64(map: &mut Map<String, Value>, key: &str, min: u64, max: u64, default: u64) {
    let raw = map.get(key).and_then(Value::as_u64).unwrap_or(default);
    map.insert(key.to_string(), json!(raw.clamp(min, max)));
}

fn ensure_bool(map: &mut Map<String, Value>, key: &str, default: bool) {
    let value = map.get(key).and_then(Value::as_bool).unwrap_or(default);
    map.insert(key.to_string(), json!(value));
}
