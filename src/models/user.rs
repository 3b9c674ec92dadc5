//! User model

use std::fmt;
use serde::{Deserialize, Serialize};
use super::ids::{GroupId, UserId};

/// Global role of a user.
///
/// Group-scoped admin rights are not a role; they come from being listed in
/// [`crate::models::Group::admins`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    AdminGeneral,
    AdminGroup,
    UserStandard,
}

impl Role {
    /// Label shown next to a user's name
    pub fn label(&self) -> &'static str {
        match self {
            Role::AdminGeneral => "Administrador General",
            Role::AdminGroup => "Administrador de Grupo",
            Role::UserStandard => "Usuario Estándar",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub groups: Vec<GroupId>,
}

impl User {
    /// First word of the display name, used in compact member lists
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    pub fn belongs_to(&self, group_id: &GroupId) -> bool {
        self.groups.contains(group_id)
    }
}
