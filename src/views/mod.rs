//! View models for the four screens
//!
//! Each view is computed from a snapshot, the acting user and `now`, and
//! renders itself as plain text through `Display`.

pub mod dashboard;
pub mod calendar;
pub mod groups;
pub mod chat;

use serde::{Deserialize, Serialize};

pub use dashboard::DashboardView;
pub use calendar::{CalendarView, CalendarDay};
pub use groups::{GroupsView, GroupDetail, GroupTreeEntry, MemberEntry};
pub use chat::{ChatView, ChatLine, send_message};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    Dashboard,
    Groups,
    Calendar,
    Chat,
}

impl ViewKind {
    pub fn title(&self) -> &'static str {
        match self {
            ViewKind::Dashboard => "Inicio",
            ViewKind::Groups => "Gestión de Grupos",
            ViewKind::Calendar => "Calendario de Eventos",
            ViewKind::Chat => "Mensajería",
        }
    }
}
