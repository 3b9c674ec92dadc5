//! Group chat: the user's groups, the selected thread and posting

use std::fmt;
use chrono::{DateTime, Utc};
use crate::data::Snapshot;
use crate::models::{Group, GroupId, Message, MessageId, MessageType, User, UserId};
use crate::services::permissions::{can_post, member_groups};
use crate::services::visibility::visible_messages;
use crate::utils::errors::{ParishError, Result};
use crate::utils::helpers::{format_time, generate_uuid};
use crate::utils::logging::log_message_sent;

const UNKNOWN_SENDER: &str = "Desconocido";

#[derive(Debug, Clone)]
pub struct ChatLine<'a> {
    pub message: &'a Message,
    pub sender_name: &'a str,
    /// Sent by the acting user
    pub is_own: bool,
}

#[derive(Debug, Clone)]
pub struct ChatView<'a> {
    pub user: &'a User,
    /// Groups listing the user as a member
    pub groups: Vec<&'a Group>,
    pub selected: Option<&'a Group>,
    /// First names of the selected group's members
    pub member_names: Vec<&'a str>,
    pub lines: Vec<ChatLine<'a>>,
    pub can_post: bool,
}

impl<'a> ChatView<'a> {
    /// Without an explicit selection the user's first group is opened
    pub fn build(
        snapshot: &'a Snapshot,
        user: &'a User,
        selected: Option<&GroupId>,
    ) -> Result<Self> {
        let groups = member_groups(user, snapshot.groups());
        let selected = match selected {
            Some(group_id) => Some(snapshot.require_group(group_id)?),
            None => groups.first().copied(),
        };

        let (member_names, lines) = match selected {
            Some(group) => {
                let names = snapshot.members_of(group).into_iter().map(User::first_name).collect();
                let lines = visible_messages(group, snapshot.messages())
                    .into_iter()
                    .map(|message| ChatLine {
                        message,
                        sender_name: snapshot
                            .find_user(&message.sender_id)
                            .map(|sender| sender.name.as_str())
                            .unwrap_or(UNKNOWN_SENDER),
                        is_own: message.sender_id == user.id,
                    })
                    .collect();
                (names, lines)
            }
            None => (Vec::new(), Vec::new()),
        };

        Ok(Self {
            user,
            groups,
            selected,
            member_names,
            lines,
            can_post: can_post(user, selected),
        })
    }
}

/// Post `content` as a text message from `user_id` into `group_id`.
///
/// Content is trimmed; empty content and users without posting rights are
/// rejected. The message only lives in `snapshot`.
pub fn send_message(
    snapshot: &mut Snapshot,
    user_id: &UserId,
    group_id: Option<&GroupId>,
    content: &str,
    now: DateTime<Utc>,
) -> Result<Message> {
    let content = content.trim();
    if content.is_empty() {
        return Err(ParishError::InvalidInput("Message content is empty".to_string()));
    }

    let user = snapshot.require_user(user_id)?;
    let Some(group_id) = group_id else {
        return Err(ParishError::PermissionDenied("No group selected".to_string()));
    };
    let group = snapshot.require_group(group_id)?;
    if !can_post(user, Some(group)) {
        return Err(ParishError::PermissionDenied(format!(
            "Only administrators can post in {}",
            group.name
        )));
    }

    let message = Message {
        id: MessageId::new(generate_uuid()),
        group_id: group.id.clone(),
        sender_id: user.id.clone(),
        content: content.to_string(),
        timestamp: now,
        kind: MessageType::Text,
    };
    snapshot.push_message(message.clone())?;
    log_message_sent(
        &message.id,
        &message.group_id,
        &message.sender_id,
        message.content.chars().count(),
    );

    Ok(message)
}

impl fmt::Display for ChatView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mis Grupos")?;
        for group in &self.groups {
            let is_selected = self.selected.map(|s| s.id == group.id).unwrap_or(false);
            let marker = if is_selected { '>' } else { ' ' };
            writeln!(f, " {} {}", marker, group.name)?;
        }
        writeln!(f)?;

        let Some(group) = self.selected else {
            return writeln!(f, "Selecciona un grupo para comenzar a chatear.");
        };

        writeln!(f, "{}", group.name)?;
        writeln!(f, "{}", self.member_names.join(", "))?;
        writeln!(f)?;
        for line in &self.lines {
            let sender = if line.is_own { "Tú" } else { line.sender_name };
            writeln!(
                f,
                "[{}] {}: {}",
                format_time(line.message.timestamp),
                sender,
                line.message.content
            )?;
        }
        if !self.can_post {
            writeln!(f)?;
            writeln!(f, "Solo los administradores pueden enviar mensajes en este grupo.")?;
        }
        Ok(())
    }
}
