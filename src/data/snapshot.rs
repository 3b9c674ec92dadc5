//! In-memory snapshot of users, groups, events and messages
//!
//! A snapshot is validated once when it is built. After that every query
//! can assume ids are unique and references resolve.

use std::collections::{HashMap, HashSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use crate::models::{Event, EventId, Group, GroupId, Message, User, UserId};
use crate::services::hierarchy::is_own_ancestor;
use crate::utils::errors::{ParishError, Result, SnapshotIssue};
use crate::utils::helpers::is_valid_email;
use crate::utils::logging::log_membership_drift;

/// Serialized form of a snapshot file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotData {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone)]
pub struct Snapshot {
    users: Vec<User>,
    groups: Vec<Group>,
    events: Vec<Event>,
    messages: Vec<Message>,
}

impl Snapshot {
    /// Validate `data` and build a snapshot from it.
    ///
    /// `Group.members` is the source of truth for membership: each user's
    /// `groups` list is rebuilt from the member lists.
    pub fn from_data(data: SnapshotData) -> Result<Self> {
        let issues = validate(&data);
        if !issues.is_empty() {
            return Err(ParishError::InvalidSnapshot(issues));
        }

        let SnapshotData { mut users, groups, events, messages } = data;
        for user in &mut users {
            let derived: Vec<GroupId> = groups
                .iter()
                .filter(|group| group.has_member(&user.id))
                .map(|group| group.id.clone())
                .collect();

            let declared: HashSet<&GroupId> = user.groups.iter().collect();
            let derived_set: HashSet<&GroupId> = derived.iter().collect();
            if declared != derived_set {
                log_membership_drift(&user.id, &user.groups, &derived);
            }
            user.groups = derived;
        }

        for event in &events {
            if event.end_time < event.start_time {
                warn!(event_id = %event.id, "Event ends before it starts");
            }
        }

        debug!(users = users.len(), groups = groups.len(), "Snapshot built");
        Ok(Self { users, groups, events, messages })
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn find_user(&self, user_id: &UserId) -> Option<&User> {
        self.users.iter().find(|user| &user.id == user_id)
    }

    pub fn find_group(&self, group_id: &GroupId) -> Option<&Group> {
        self.groups.iter().find(|group| &group.id == group_id)
    }

    pub fn find_event(&self, event_id: &EventId) -> Option<&Event> {
        self.events.iter().find(|event| &event.id == event_id)
    }

    /// Like [`Snapshot::find_user`] but failing with `UserNotFound`
    pub fn require_user(&self, user_id: &UserId) -> Result<&User> {
        self.find_user(user_id)
            .ok_or_else(|| ParishError::UserNotFound { user_id: user_id.clone() })
    }

    /// Like [`Snapshot::find_group`] but failing with `GroupNotFound`
    pub fn require_group(&self, group_id: &GroupId) -> Result<&Group> {
        self.find_group(group_id)
            .ok_or_else(|| ParishError::GroupNotFound { group_id: group_id.clone() })
    }

    /// Like [`Snapshot::find_event`] but failing with `EventNotFound`
    pub fn require_event(&self, event_id: &EventId) -> Result<&Event> {
        self.find_event(event_id)
            .ok_or_else(|| ParishError::EventNotFound { event_id: event_id.clone() })
    }

    /// Users listed in `group.members`, in user collection order
    pub fn members_of(&self, group: &Group) -> Vec<&User> {
        self.users.iter().filter(|user| group.has_member(&user.id)).collect()
    }

    /// Append a message to a known group from a known sender
    pub fn push_message(&mut self, message: Message) -> Result<()> {
        self.require_group(&message.group_id)?;
        self.require_user(&message.sender_id)?;
        self.messages.push(message);
        Ok(())
    }
}

/// Every problem found in `data`, in collection order
pub fn validate(data: &SnapshotData) -> Vec<SnapshotIssue> {
    let mut issues = Vec::new();

    let mut user_ids: HashSet<&UserId> = HashSet::new();
    for user in &data.users {
        if !user_ids.insert(&user.id) {
            issues.push(SnapshotIssue::DuplicateUser(user.id.clone()));
        }
        if !is_valid_email(&user.email) {
            issues.push(SnapshotIssue::InvalidEmail {
                user_id: user.id.clone(),
                email: user.email.clone(),
            });
        }
    }

    let mut groups_by_id: HashMap<&GroupId, &Group> = HashMap::new();
    for group in &data.groups {
        if groups_by_id.insert(&group.id, group).is_some() {
            issues.push(SnapshotIssue::DuplicateGroup(group.id.clone()));
        }
    }

    for group in &data.groups {
        if let Some(parent_id) = &group.parent_group_id {
            if parent_id != &group.id && !groups_by_id.contains_key(parent_id) {
                issues.push(SnapshotIssue::UnknownParent {
                    group_id: group.id.clone(),
                    parent_id: parent_id.clone(),
                });
            } else if is_own_ancestor(&data.groups, group) {
                issues.push(SnapshotIssue::ParentCycle { group_id: group.id.clone() });
            }
        }
        for member in &group.members {
            if !user_ids.contains(member) {
                issues.push(SnapshotIssue::UnknownMember {
                    group_id: group.id.clone(),
                    user_id: member.clone(),
                });
            }
        }
        for admin in &group.admins {
            if !user_ids.contains(admin) {
                issues.push(SnapshotIssue::UnknownAdmin {
                    group_id: group.id.clone(),
                    user_id: admin.clone(),
                });
            }
        }
    }

    let mut event_ids: HashSet<&EventId> = HashSet::new();
    for event in &data.events {
        if !event_ids.insert(&event.id) {
            issues.push(SnapshotIssue::DuplicateEvent(event.id.clone()));
        }
        if let Some(group_id) = &event.group_id {
            if !groups_by_id.contains_key(group_id) {
                issues.push(SnapshotIssue::EventUnknownGroup {
                    event_id: event.id.clone(),
                    group_id: group_id.clone(),
                });
            }
        }
        if !user_ids.contains(&event.creator_id) {
            issues.push(SnapshotIssue::EventUnknownCreator {
                event_id: event.id.clone(),
                user_id: event.creator_id.clone(),
            });
        }
    }

    let mut message_ids = HashSet::new();
    for message in &data.messages {
        if !message_ids.insert(&message.id) {
            issues.push(SnapshotIssue::DuplicateMessage(message.id.clone()));
        }
        if !groups_by_id.contains_key(&message.group_id) {
            issues.push(SnapshotIssue::MessageUnknownGroup {
                message_id: message.id.clone(),
                group_id: message.group_id.clone(),
            });
        }
        if !user_ids.contains(&message.sender_id) {
            issues.push(SnapshotIssue::MessageUnknownSender {
                message_id: message.id.clone(),
                user_id: message.sender_id.clone(),
            });
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crate::data::seed;
    use crate::models::{MessageId, MessageType, Role};

    #[test]
    fn test_seed_snapshot_is_valid() {
        let data = seed::snapshot_data(Utc::now());
        assert!(validate(&data).is_empty());
    }

    #[test]
    fn test_self_parented_group_rejected() {
        let mut data = seed::snapshot_data(Utc::now());
        data.groups[0].parent_group_id = Some(data.groups[0].id.clone());
        let issues = validate(&data);
        assert_eq!(issues, vec![SnapshotIssue::ParentCycle { group_id: GroupId::new("g1") }]);
    }

    #[test]
    fn test_two_group_cycle_reports_both() {
        let mut data = seed::snapshot_data(Utc::now());
        // g3 already points at g1
        data.groups[0].parent_group_id = Some(GroupId::new("g3"));
        let issues = validate(&data);
        assert_eq!(
            issues,
            vec![
                SnapshotIssue::ParentCycle { group_id: GroupId::new("g1") },
                SnapshotIssue::ParentCycle { group_id: GroupId::new("g3") },
            ]
        );
    }

    #[test]
    fn test_dangling_references_rejected() {
        let mut data = seed::snapshot_data(Utc::now());
        data.messages[0].group_id = GroupId::new("g404");
        data.events[0].creator_id = UserId::new("u404");
        data.groups[1].admins.push(UserId::new("u404"));
        let issues = validate(&data);
        assert!(issues.contains(&SnapshotIssue::MessageUnknownGroup {
            message_id: MessageId::new("m1"),
            group_id: GroupId::new("g404"),
        }));
        assert!(issues.contains(&SnapshotIssue::EventUnknownCreator {
            event_id: EventId::new("e1"),
            user_id: UserId::new("u404"),
        }));
        assert!(issues.contains(&SnapshotIssue::UnknownAdmin {
            group_id: GroupId::new("g2"),
            user_id: UserId::new("u404"),
        }));
    }

    #[test]
    fn test_duplicate_ids_and_bad_email() {
        let mut data = seed::snapshot_data(Utc::now());
        let mut twin = data.users[0].clone();
        twin.email = "nowhere".to_string();
        data.users.push(twin);
        let issues = validate(&data);
        assert_eq!(
            issues,
            vec![
                SnapshotIssue::DuplicateUser(UserId::new("u1")),
                SnapshotIssue::InvalidEmail {
                    user_id: UserId::new("u1"),
                    email: "nowhere".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_user_groups_rebuilt_from_members() {
        let mut data = seed::snapshot_data(Utc::now());
        // u3 claims g2 but g2 does not list u3
        data.users[2].groups = vec![GroupId::new("g2"), GroupId::new("g1")];
        let snapshot = Snapshot::from_data(data).unwrap();
        let u3 = snapshot.find_user(&UserId::new("u3")).unwrap();
        assert_eq!(u3.groups, vec![GroupId::new("g1"), GroupId::new("g4")]);
    }

    #[test]
    fn test_push_message_requires_known_group() {
        let mut snapshot = Snapshot::from_data(seed::snapshot_data(Utc::now())).unwrap();
        let message = Message {
            id: MessageId::new("m9"),
            group_id: GroupId::new("g404"),
            sender_id: UserId::new("u1"),
            content: "Hola".to_string(),
            timestamp: Utc::now(),
            kind: MessageType::Text,
        };
        assert!(matches!(snapshot.push_message(message), Err(ParishError::GroupNotFound { .. })));
        assert_eq!(snapshot.messages().len(), 5);
    }

    #[test]
    fn test_require_event_reports_missing_id() {
        let snapshot = Snapshot::from_data(seed::snapshot_data(Utc::now())).unwrap();
        assert_eq!(snapshot.require_event(&EventId::new("e3")).unwrap().title, "Ensayo del Coro");
        assert!(matches!(
            snapshot.require_event(&EventId::new("e404")),
            Err(ParishError::EventNotFound { event_id }) if event_id.as_str() == "e404"
        ));
    }

    #[test]
    fn test_members_of_keeps_user_order() {
        let snapshot = Snapshot::from_data(seed::snapshot_data(Utc::now())).unwrap();
        let g2 = snapshot.find_group(&GroupId::new("g2")).unwrap();
        let members: Vec<(&str, Role)> = snapshot
            .members_of(g2)
            .iter()
            .map(|u| (u.id.as_str(), u.role))
            .collect();
        assert_eq!(
            members,
            vec![
                ("u1", Role::AdminGeneral),
                ("u4", Role::UserStandard),
                ("u5", Role::UserStandard),
                ("u6", Role::AdminGroup),
            ]
        );
    }
}
