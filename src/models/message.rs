//! Group chat message model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use super::ids::{GroupId, MessageId, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    #[default]
    Text,
    Image,
    Document,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: MessageId,
    pub group_id: GroupId,
    pub sender_id: UserId,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, rename = "type")]
    pub kind: MessageType,
}
