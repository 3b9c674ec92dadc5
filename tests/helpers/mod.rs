//! Test helpers for building users, groups, events and messages
//!
//! Builders start from a minimal record and are adjusted with `with_*`
//! methods, keeping each test's setup down to the fields it cares about.

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use ParishHub::models::{
    Event, EventId, Group, GroupId, Message, MessageId, MessageType, Role, User, UserId,
};

/// Fixed instant used as `now` across integration tests
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 11, 20, 12, 0, 0).unwrap()
}

pub struct TestUser(User);

impl TestUser {
    pub fn new(id: &str, role: Role) -> Self {
        Self(User {
            id: UserId::new(id),
            name: format!("Usuario {}", id),
            email: format!("{}@parroquia.com", id),
            role,
            groups: vec![],
        })
    }

    pub fn with_groups(mut self, groups: &[&str]) -> Self {
        self.0.groups = groups.iter().map(|g| GroupId::new(*g)).collect();
        self
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.0.email = email.to_string();
        self
    }

    pub fn build(self) -> User {
        self.0
    }
}

pub struct TestGroup(Group);

impl TestGroup {
    pub fn new(id: &str) -> Self {
        Self(Group {
            id: GroupId::new(id),
            name: format!("Grupo {}", id),
            description: String::new(),
            parent_group_id: None,
            members: vec![],
            admins: vec![],
            can_members_post: false,
        })
    }

    pub fn with_parent(mut self, parent: &str) -> Self {
        self.0.parent_group_id = Some(GroupId::new(parent));
        self
    }

    pub fn with_members(mut self, members: &[&str]) -> Self {
        self.0.members = members.iter().map(|u| UserId::new(*u)).collect();
        self
    }

    pub fn with_admins(mut self, admins: &[&str]) -> Self {
        self.0.admins = admins.iter().map(|u| UserId::new(*u)).collect();
        self
    }

    pub fn open_posting(mut self) -> Self {
        self.0.can_members_post = true;
        self
    }

    pub fn build(self) -> Group {
        self.0
    }
}

pub fn test_event(id: &str, group: Option<&str>, start: DateTime<Utc>) -> Event {
    Event {
        id: EventId::new(id),
        title: format!("Evento {}", id),
        description: String::new(),
        start_time: start,
        end_time: start + Duration::hours(1),
        group_id: group.map(GroupId::new),
        creator_id: UserId::new("u1"),
    }
}

pub fn test_message(id: &str, group: &str, sender: &str, timestamp: DateTime<Utc>) -> Message {
    Message {
        id: MessageId::new(id),
        group_id: GroupId::new(group),
        sender_id: UserId::new(sender),
        content: format!("Mensaje {}", id),
        timestamp,
        kind: MessageType::Text,
    }
}
