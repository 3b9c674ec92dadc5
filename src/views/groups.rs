//! Group tree and group detail

use std::fmt;
use crate::data::Snapshot;
use crate::models::{Group, GroupId, Role, User};
use crate::services::hierarchy::group_tree;
use crate::services::permissions::{
    can_create_group, can_manage_group, can_request_join, effective_display_role, is_member,
};
use crate::utils::errors::Result;

#[derive(Debug, Clone)]
pub struct GroupTreeEntry<'a> {
    pub group: &'a Group,
    pub level: usize,
    pub is_member: bool,
}

#[derive(Debug, Clone)]
pub struct MemberEntry<'a> {
    pub user: &'a User,
    pub display_role: Role,
}

#[derive(Debug, Clone)]
pub struct GroupDetail<'a> {
    pub group: &'a Group,
    pub members: Vec<MemberEntry<'a>>,
    pub can_manage: bool,
    pub can_request_join: bool,
}

impl<'a> GroupDetail<'a> {
    pub fn build(snapshot: &'a Snapshot, user: &User, group: &'a Group) -> Self {
        let members = snapshot
            .members_of(group)
            .into_iter()
            .map(|member| MemberEntry {
                user: member,
                display_role: effective_display_role(member, group),
            })
            .collect();

        Self {
            group,
            members,
            can_manage: can_manage_group(user, group),
            can_request_join: can_request_join(user, group),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GroupsView<'a> {
    pub tree: Vec<GroupTreeEntry<'a>>,
    pub can_create_group: bool,
    pub selected: Option<GroupDetail<'a>>,
}

impl<'a> GroupsView<'a> {
    pub fn build(
        snapshot: &'a Snapshot,
        user: &'a User,
        max_depth: usize,
        selected: Option<&GroupId>,
    ) -> Result<Self> {
        let tree = group_tree(snapshot.groups(), max_depth)
            .into_iter()
            .map(|node| GroupTreeEntry {
                group: node.group,
                level: node.level,
                is_member: is_member(user, node.group),
            })
            .collect();

        let selected = match selected {
            Some(group_id) => {
                let group = snapshot.require_group(group_id)?;
                Some(GroupDetail::build(snapshot, user, group))
            }
            None => None,
        };

        Ok(Self {
            tree,
            can_create_group: can_create_group(user),
            selected,
        })
    }
}

impl fmt::Display for GroupDetail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.group.name)?;
        writeln!(f, "{}", self.group.description)?;
        writeln!(f)?;
        write!(f, "Miembros ({})", self.members.len())?;
        if self.can_manage {
            write!(f, "  [Gestionar Miembros]")?;
        }
        writeln!(f)?;
        for member in &self.members {
            writeln!(f, "  - {} ({})", member.user.name, member.display_role)?;
        }
        if self.can_request_join {
            writeln!(f)?;
            writeln!(f, "[Solicitar Unirse al Grupo]")?;
        }
        Ok(())
    }
}

impl fmt::Display for GroupsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grupos Parroquiales")?;
        if self.can_create_group {
            write!(f, "  [+]")?;
        }
        writeln!(f)?;
        for entry in &self.tree {
            let marker = if entry.is_member { '●' } else { '○' };
            writeln!(f, "{}{} {}", "  ".repeat(entry.level + 1), marker, entry.group.name)?;
        }

        writeln!(f)?;
        match &self.selected {
            Some(detail) => write!(f, "{}", detail),
            None => writeln!(f, "Selecciona un grupo para ver sus detalles y miembros."),
        }
    }
}
