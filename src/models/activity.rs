use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityNotification {
    pub id: String,
    pub message: String,
    pub kind: String, // "info" | "success" | "error"
    pub at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncStatus {
    pub state: String,
    pub at: i64,
}
