//! Built-in reference dataset
//!
//! Six users, five groups, five events scheduled relative to `now` and a few
//! chat messages. Used when no snapshot file is configured.

use chrono::{DateTime, Duration, Utc};
use crate::models::{
    Event, EventId, Group, GroupId, Message, MessageId, MessageType, Role, User, UserId,
};
use crate::utils::errors::Result;
use super::snapshot::{Snapshot, SnapshotData};

fn ids<T: From<&'static str>>(values: &[&'static str]) -> Vec<T> {
    values.iter().map(|v| T::from(*v)).collect()
}

fn user(id: &'static str, name: &str, email: &str, role: Role, groups: &[&'static str]) -> User {
    User {
        id: UserId::from(id),
        name: name.to_string(),
        email: email.to_string(),
        role,
        groups: ids(groups),
    }
}

fn group(
    id: &'static str,
    name: &str,
    description: &str,
    parent: Option<&'static str>,
    members: &[&'static str],
    admins: &[&'static str],
    can_members_post: bool,
) -> Group {
    Group {
        id: GroupId::from(id),
        name: name.to_string(),
        description: description.to_string(),
        parent_group_id: parent.map(GroupId::from),
        members: ids(members),
        admins: ids(admins),
        can_members_post,
    }
}

fn event(
    id: &'static str,
    title: &str,
    description: &str,
    start: DateTime<Utc>,
    group: Option<&'static str>,
    creator: &'static str,
) -> Event {
    Event {
        id: EventId::from(id),
        title: title.to_string(),
        description: description.to_string(),
        start_time: start,
        end_time: start,
        group_id: group.map(GroupId::from),
        creator_id: UserId::from(creator),
    }
}

fn message(
    id: &'static str,
    group: &'static str,
    sender: &'static str,
    content: &str,
    timestamp: DateTime<Utc>,
) -> Message {
    Message {
        id: MessageId::from(id),
        group_id: GroupId::from(group),
        sender_id: UserId::from(sender),
        content: content.to_string(),
        timestamp,
        kind: MessageType::Text,
    }
}

pub fn snapshot_data(now: DateTime<Utc>) -> SnapshotData {
    let users = vec![
        user(
            "u1",
            "Admin General",
            "admin@parroquia.com",
            Role::AdminGeneral,
            &["g1", "g2", "g3", "g4", "g5"],
        ),
        user("u2", "Juan Pérez", "juan.perez@email.com", Role::AdminGroup, &["g1", "g3"]),
        user("u3", "María García", "maria.garcia@email.com", Role::UserStandard, &["g1", "g4"]),
        user("u4", "Carlos López", "carlos.lopez@email.com", Role::UserStandard, &["g2"]),
        user(
            "u5",
            "Ana Martínez",
            "ana.martinez@email.com",
            Role::UserStandard,
            &["g1", "g2", "g5"],
        ),
        user("u6", "Pedro Rodríguez", "pedro.r@email.com", Role::AdminGroup, &["g2"]),
    ];

    let groups = vec![
        group(
            "g1",
            "Grupo de Jóvenes",
            "Actividades y reuniones para los jóvenes de la parroquia.",
            None,
            &["u1", "u2", "u3", "u5"],
            &["u2"],
            true,
        ),
        group(
            "g2",
            "Coro Parroquial",
            "Ensayos y participación en las misas.",
            None,
            &["u1", "u4", "u5", "u6"],
            &["u6"],
            false,
        ),
        group(
            "g3",
            "Catequesis de Confirmación",
            "Preparación para el sacramento de la Confirmación.",
            Some("g1"),
            &["u1", "u2"],
            &["u2"],
            true,
        ),
        group(
            "g4",
            "Cáritas Parroquial",
            "Acciones de caridad y ayuda a los necesitados.",
            None,
            &["u1", "u3"],
            &["u1"],
            false,
        ),
        group(
            "g5",
            "Lectores",
            "Grupo de lectores para las celebraciones.",
            None,
            &["u1", "u5"],
            &["u1"],
            true,
        ),
    ];

    let events = vec![
        event(
            "e1",
            "Misa Dominical",
            "Celebración principal de la semana.",
            now + Duration::days(2),
            None,
            "u1",
        ),
        event(
            "e2",
            "Reunión de Jóvenes",
            "Planificación de actividades del mes.",
            now + Duration::days(5),
            Some("g1"),
            "u2",
        ),
        event(
            "e3",
            "Ensayo del Coro",
            "Preparación para la misa de Navidad.",
            now + Duration::days(3),
            Some("g2"),
            "u6",
        ),
        event(
            "e4",
            "Recogida de Alimentos",
            "Campaña de recogida de alimentos no perecederos.",
            now + Duration::days(10),
            Some("g4"),
            "u1",
        ),
        event(
            "e5",
            "Catequesis",
            "Sesión semanal de catequesis.",
            now + Duration::days(6),
            Some("g3"),
            "u2",
        ),
    ];

    let messages = vec![
        message(
            "m1",
            "g1",
            "u2",
            "Hola a todos! Recuerden la reunión de este viernes.",
            now - Duration::hours(24),
        ),
        message("m2", "g1", "u3", "Allí estaré!", now - Duration::hours(23)),
        message(
            "m3",
            "g1",
            "u5",
            "Yo también, gracias por el recordatorio!",
            now - Duration::hours(22),
        ),
        message(
            "m4",
            "g2",
            "u6",
            "Por favor, no olviden repasar las partituras para el ensayo.",
            now - Duration::hours(5),
        ),
        message(
            "m5",
            "g2",
            "u6",
            "El ensayo es a las 19:00 en el salón parroquial.",
            now - Duration::hours(4),
        ),
    ];

    SnapshotData { users, groups, events, messages }
}

/// Reference dataset as a validated snapshot
pub fn snapshot(now: DateTime<Utc>) -> Result<Snapshot> {
    Snapshot::from_data(snapshot_data(now))
}
