use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteTask {
    pub id: u32,
    pub title: String,
    pub due: String,
    pub completed: bool,
}
