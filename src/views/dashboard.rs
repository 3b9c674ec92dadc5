//! Dashboard: upcoming events and the short-term reminder banner

use std::fmt;
use chrono::{DateTime, Duration, Utc};
use crate::config::DashboardConfig;
use crate::data::Snapshot;
use crate::models::{Event, User};
use crate::services::visibility::{events_within, upcoming_events};
use crate::utils::helpers::{format_datetime, plural_s, truncate_text};

/// Characters of an event description shown under its title
const DESCRIPTION_PREVIEW: usize = 80;

#[derive(Debug, Clone)]
pub struct DashboardView<'a> {
    pub user: &'a User,
    /// Earliest visible future events, at most `upcoming_limit`
    pub upcoming: Vec<&'a Event>,
    /// Visible events starting within the reminder window
    pub reminders: Vec<&'a Event>,
    pub reminder_window_hours: i64,
}

impl<'a> DashboardView<'a> {
    pub fn build(
        snapshot: &'a Snapshot,
        user: &'a User,
        config: &DashboardConfig,
        now: DateTime<Utc>,
    ) -> Self {
        let window = Duration::try_hours(config.reminder_window_hours).unwrap_or(Duration::MAX);
        Self {
            user,
            upcoming: upcoming_events(user, snapshot.events(), now, config.upcoming_limit),
            reminders: events_within(user, snapshot.events(), now, window),
            reminder_window_hours: config.reminder_window_hours,
        }
    }

    /// Reminder banner text, `None` when nothing starts within the window
    pub fn reminder_banner(&self) -> Option<String> {
        let count = self.reminders.len();
        if count == 0 {
            return None;
        }
        Some(format!(
            "Tienes {} evento{} en las próximas {} horas.",
            count,
            plural_s(count),
            self.reminder_window_hours
        ))
    }
}

impl fmt::Display for DashboardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bienvenido, {}!", self.user.name)?;
        writeln!(f, "Aquí tienes un resumen de la actividad reciente en tu parroquia.")?;

        if let Some(banner) = self.reminder_banner() {
            writeln!(f)?;
            writeln!(f, "Recordatorio de eventos: {}", banner)?;
        }

        writeln!(f)?;
        writeln!(f, "Próximos Eventos")?;
        if self.upcoming.is_empty() {
            writeln!(f, "  No hay eventos próximos.")?;
        }
        for event in &self.upcoming {
            writeln!(f, "  * {} ({})", event.title, format_datetime(event.start_time))?;
            if !event.description.is_empty() {
                writeln!(f, "    {}", truncate_text(&event.description, DESCRIPTION_PREVIEW))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use crate::config::Settings;
    use crate::data::{seed, Snapshot};
    use crate::models::UserId;
    use crate::utils::clock::{Clock, FixedClock};

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2024, 11, 20, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_dashboard_for_standard_user() {
        let now = clock().now();
        let snapshot = seed::snapshot(now).unwrap();
        let u3 = snapshot.find_user(&UserId::new("u3")).unwrap();
        let view = DashboardView::build(&snapshot, u3, &Settings::default().dashboard, now);

        // e1 (+2d, parish-wide), e2 (+5d, g1), e4 (+10d, g4)
        let upcoming: Vec<&str> = view.upcoming.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(upcoming, vec!["e1", "e2", "e4"]);

        // e1 starts exactly 48h from now
        assert_eq!(view.reminders.len(), 1);
        assert_eq!(
            view.reminder_banner().as_deref(),
            Some("Tienes 1 evento en las próximas 48 horas.")
        );

        let text = view.to_string();
        assert!(text.starts_with("Bienvenido, María García!"));
        assert!(text.contains("Misa Dominical (22/11/2024 12:00)"));
        assert!(!text.contains("Ensayo del Coro"));
    }

    #[test]
    fn test_no_banner_without_reminders() {
        let now = clock().now();
        let snapshot = seed::snapshot(now).unwrap();
        let u4 = snapshot.find_user(&UserId::new("u4")).unwrap();
        let mut config = Settings::default().dashboard;
        config.reminder_window_hours = 24;
        let view = DashboardView::build(&snapshot, u4, &config, now);
        assert!(view.reminder_banner().is_none());
        assert!(!view.to_string().contains("Recordatorio"));
    }

    #[test]
    fn test_oversized_window_covers_every_future_event() {
        let now = clock().now();
        let snapshot = seed::snapshot(now).unwrap();
        let u1 = snapshot.find_user(&UserId::new("u1")).unwrap();
        let mut config = Settings::default().dashboard;
        config.reminder_window_hours = 100_000_000_000;

        let view = DashboardView::build(&snapshot, u1, &config, now);
        assert_eq!(view.reminders.len(), 5);
    }

    #[test]
    fn test_long_descriptions_are_shortened() {
        let now = clock().now();
        let mut data = seed::snapshot_data(now);
        data.events[0].description = "Celebración ".repeat(20);
        let snapshot = Snapshot::from_data(data).unwrap();
        let u3 = snapshot.find_user(&UserId::new("u3")).unwrap();

        let config = Settings::default().dashboard;
        let text = DashboardView::build(&snapshot, u3, &config, now).to_string();
        let preview = text
            .lines()
            .find(|line| line.trim_start().starts_with("Celebración"))
            .unwrap();
        assert!(preview.ends_with("..."));
        assert_eq!(preview.trim_start().chars().count(), DESCRIPTION_PREVIEW);
    }
}
