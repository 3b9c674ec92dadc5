//! Event and message visibility rules
//!
//! Parish-wide events are visible to everyone; group events only to users
//! whose group list contains the event's group. Messages are filtered by
//! group only; reading a group's chat is not access-controlled.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use crate::models::{Event, Group, Message, User};

/// Whether `user` may see `event`
pub fn is_event_visible(user: &User, event: &Event) -> bool {
    match &event.group_id {
        None => true,
        Some(group_id) => user.belongs_to(group_id),
    }
}

/// Events visible to `user`, in input order
pub fn visible_events<'a>(user: &User, events: &'a [Event]) -> Vec<&'a Event> {
    events.iter().filter(|event| is_event_visible(user, event)).collect()
}

/// Visible events starting after `now`, earliest first, at most `limit`
pub fn upcoming_events<'a>(
    user: &User,
    events: &'a [Event],
    now: DateTime<Utc>,
    limit: usize,
) -> Vec<&'a Event> {
    let mut upcoming: Vec<&Event> = visible_events(user, events)
        .into_iter()
        .filter(|event| event.start_time > now)
        .collect();
    upcoming.sort_by_key(|event| event.start_time);
    upcoming.truncate(limit);
    upcoming
}

/// Visible events with `now < start_time <= now + window`, in input order.
///
/// A window reaching past the representable range covers every future event.
pub fn events_within<'a>(
    user: &User,
    events: &'a [Event],
    now: DateTime<Utc>,
    window: Duration,
) -> Vec<&'a Event> {
    let limit = now.checked_add_signed(window).unwrap_or(DateTime::<Utc>::MAX_UTC);
    visible_events(user, events)
        .into_iter()
        .filter(|event| event.start_time > now && event.start_time <= limit)
        .collect()
}

/// Visible events starting on `date` (UTC), in input order
pub fn events_on_day<'a>(user: &User, events: &'a [Event], date: NaiveDate) -> Vec<&'a Event> {
    visible_events(user, events)
        .into_iter()
        .filter(|event| event.start_time.date_naive() == date)
        .collect()
}

/// Messages posted to `group`, oldest first.
///
/// The sort is stable, so messages sharing a timestamp keep input order.
pub fn visible_messages<'a>(group: &Group, messages: &'a [Message]) -> Vec<&'a Message> {
    let mut thread: Vec<&Message> = messages
        .iter()
        .filter(|message| message.group_id == group.id)
        .collect();
    thread.sort_by_key(|message| message.timestamp);
    thread
}
