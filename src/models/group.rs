//! Group model

use serde::{Deserialize, Serialize};
use super::ids::{GroupId, UserId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parent_group_id: Option<GroupId>,
    #[serde(default)]
    pub members: Vec<UserId>,
    #[serde(default)]
    pub admins: Vec<UserId>,
    #[serde(default)]
    pub can_members_post: bool,
}

impl Group {
    pub fn has_member(&self, user_id: &UserId) -> bool {
        self.members.contains(user_id)
    }

    pub fn has_admin(&self, user_id: &UserId) -> bool {
        self.admins.contains(user_id)
    }

    pub fn is_root(&self) -> bool {
        self.parent_group_id.is_none()
    }
}
