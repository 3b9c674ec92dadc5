//! Month calendar of visible events

use std::fmt;
use chrono::{Datelike, NaiveDate};
use crate::data::Snapshot;
use crate::models::{Event, EventId, User};
use crate::services::visibility::{events_on_day, is_event_visible};
use crate::utils::errors::{ParishError, Result};
use crate::utils::helpers::format_time;

const WEEKDAYS: [&str; 7] = ["Dom", "Lun", "Mar", "Mié", "Jue", "Vie", "Sáb"];
const MONTHS: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio",
    "julio", "agosto", "septiembre", "octubre", "noviembre", "diciembre",
];

#[derive(Debug, Clone)]
pub struct CalendarDay<'a> {
    pub day: u32,
    pub events: Vec<&'a Event>,
}

#[derive(Debug, Clone)]
pub struct CalendarView<'a> {
    snapshot: &'a Snapshot,
    user: &'a User,
    pub year: i32,
    pub month: u32,
    /// Empty cells before day 1 (Sunday = 0)
    pub leading_blanks: u32,
    pub days: Vec<CalendarDay<'a>>,
    pub selected_day: Option<u32>,
}

impl<'a> CalendarView<'a> {
    pub fn build(snapshot: &'a Snapshot, user: &'a User, year: i32, month: u32) -> Result<Self> {
        let first = first_of_month(year, month)?;
        let days = (1..=days_in_month(first))
            .filter_map(|day| first.with_day(day))
            .map(|date| CalendarDay {
                day: date.day(),
                events: events_on_day(user, snapshot.events(), date),
            })
            .collect();

        Ok(Self {
            snapshot,
            user,
            year,
            month,
            leading_blanks: first.weekday().num_days_from_sunday(),
            days,
            selected_day: None,
        })
    }

    /// The month of `event_id` with its start day selected.
    ///
    /// An event hidden from `user` is reported as not found.
    pub fn for_event(snapshot: &'a Snapshot, user: &'a User, event_id: &EventId) -> Result<Self> {
        let event = snapshot.require_event(event_id)?;
        if !is_event_visible(user, event) {
            return Err(ParishError::EventNotFound { event_id: event_id.clone() });
        }

        let start = event.start_time.date_naive();
        let mut view = Self::build(snapshot, user, start.year(), start.month())?;
        view.select_day(start.day());
        Ok(view)
    }

    pub fn days_in_month(&self) -> u32 {
        self.days.len() as u32
    }

    /// Events on `day`; days outside the month have none
    pub fn select_day(&mut self, day: u32) -> &[&'a Event] {
        match self.days.iter().position(|d| d.day == day) {
            Some(index) => {
                self.selected_day = Some(day);
                &self.days[index].events
            }
            None => {
                self.selected_day = None;
                &[]
            }
        }
    }

    pub fn selected_events(&self) -> &[&'a Event] {
        self.selected_day
            .and_then(|day| self.days.iter().find(|d| d.day == day))
            .map(|d| d.events.as_slice())
            .unwrap_or(&[])
    }

    /// Move `offset` months forward (or back) and clear the selection
    pub fn shift_month(&self, offset: i32) -> Result<Self> {
        let index = self.year * 12 + (self.month as i32 - 1) + offset;
        let year = index.div_euclid(12);
        let month = index.rem_euclid(12) as u32 + 1;
        Self::build(self.snapshot, self.user, year, month)
    }

    pub fn title(&self) -> String {
        let name = MONTHS.get(self.month as usize - 1).copied().unwrap_or("");
        format!("{} de {}", name, self.year)
    }
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| ParishError::InvalidInput(format!("Invalid month {}-{:02}", year, month)))
}

fn days_in_month(first: NaiveDate) -> u32 {
    let next = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    next.and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

impl fmt::Display for CalendarView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title())?;
        writeln!(f, "{}", WEEKDAYS.map(|d| format!("{:>4}", d)).join(""))?;

        let mut cells: Vec<String> = (0..self.leading_blanks).map(|_| "    ".to_string()).collect();
        for day in &self.days {
            let marker = if day.events.is_empty() { ' ' } else { '*' };
            cells.push(format!("{:>3}{}", day.day, marker));
        }
        for week in cells.chunks(7) {
            writeln!(f, "{}", week.join(""))?;
        }

        let selected = self.selected_events();
        writeln!(f)?;
        match self.selected_day {
            Some(day) => {
                writeln!(f, "Eventos del día {:02}/{:02}/{}", day, self.month, self.year)?
            }
            None => writeln!(f, "Selecciona un día para ver los eventos.")?,
        }
        if self.selected_day.is_some() && selected.is_empty() {
            writeln!(f, "  Sin eventos.")?;
        }
        for event in selected {
            writeln!(
                f,
                "  * {} ({} - {})",
                event.title,
                format_time(event.start_time),
                format_time(event.end_time)
            )?;
        }
        Ok(())
    }
}
