//! Event model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use super::ids::{EventId, GroupId, UserId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// `None` for parish-wide events
    #[serde(default)]
    pub group_id: Option<GroupId>,
    pub creator_id: UserId,
}

impl Event {
    pub fn is_parish_wide(&self) -> bool {
        self.group_id.is_none()
    }
}
