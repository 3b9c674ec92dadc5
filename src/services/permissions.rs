//! Authorization rules for group actions
//!
//! General admins may always post and manage. Group admins hold rights only
//! in groups that list them in `admins`; the ADMIN_GROUP role by itself is
//! enough to post anywhere, but not to manage.

use crate::models::{Group, Role, User};
use crate::utils::logging::log_permission_check;

/// Whether `user` may post into `group`. No group selected means no posting.
pub fn can_post(user: &User, group: Option<&Group>) -> bool {
    let allowed = match group {
        None => false,
        Some(group) => {
            user.role != Role::UserStandard || group.can_members_post || group.has_admin(&user.id)
        }
    };
    log_permission_check(&user.id, "post", group.map(|g| &g.id), allowed);
    allowed
}

/// Whether `user` may manage the members of `group`
pub fn can_manage_group(user: &User, group: &Group) -> bool {
    let allowed = user.role == Role::AdminGeneral || group.has_admin(&user.id);
    log_permission_check(&user.id, "manage_group", Some(&group.id), allowed);
    allowed
}

/// Whether `user` may create new groups
pub fn can_create_group(user: &User) -> bool {
    user.role == Role::AdminGeneral
}

/// Whether `user` is listed as a member of `group`
pub fn is_member(user: &User, group: &Group) -> bool {
    group.has_member(&user.id)
}

/// Users outside a group are offered to request joining it
pub fn can_request_join(user: &User, group: &Group) -> bool {
    !is_member(user, group)
}

/// Role shown next to `user` inside `group`. Not an authorization decision.
pub fn effective_display_role(user: &User, group: &Group) -> Role {
    if user.role == Role::UserStandard && group.has_admin(&user.id) {
        Role::AdminGroup
    } else {
        user.role
    }
}

/// Groups listing `user` as a member, in input order
pub fn member_groups<'a>(user: &User, groups: &'a [Group]) -> Vec<&'a Group> {
    groups.iter().filter(|group| is_member(user, group)).collect()
}
