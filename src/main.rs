//! ParishHub
//!
//! Terminal entry point: renders one screen for one user

use std::time::Duration;
use chrono::{Datelike, NaiveDate};
use clap::Parser;
use tracing::{info, warn, error};

use ParishHub::{
    config::Settings,
    data::{load_snapshot, seed, Snapshot},
    models::{EventId, GroupId, UserId},
    utils::{logging, Clock, SystemClock},
    views::{send_message, CalendarView, ChatView, DashboardView, GroupsView, ViewKind},
};

#[derive(Debug, Parser)]
#[command(name = "parish-hub", version, about = "Parish groups, events and group chat")]
struct Cli {
    /// Configuration file (defaults to ./config.toml when present)
    #[arg(long)]
    config: Option<String>,
    /// Acting user id, overrides `app.current_user`
    #[arg(long, env = "PARISH_USER")]
    user: Option<String>,
    /// Screen to render, overrides `app.default_view`
    #[arg(long, value_enum)]
    view: Option<ViewKind>,
    /// Group to open in the groups or chat screen
    #[arg(long)]
    group: Option<String>,
    /// Open the calendar on the day of this event
    #[arg(long, conflicts_with = "month")]
    event: Option<String>,
    /// Calendar month as YYYY-MM
    #[arg(long, value_parser = parse_month)]
    month: Option<(i32, u32)>,
    /// Post a message into the chat group before rendering
    #[arg(long)]
    send: Option<String>,
    /// Re-render on the configured refresh interval until Ctrl-C
    #[arg(long)]
    watch: bool,
}

fn parse_month(s: &str) -> Result<(i32, u32), String> {
    let date = NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .map_err(|_| format!("`{s}` isn't a month in YYYY-MM form"))?;
    Ok((date.year(), date.month()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // Load configuration
    let mut settings = match &cli.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::new()?,
    };
    if let Some(user) = &cli.user {
        settings.app.current_user = user.clone();
    }
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;
    info!("Starting {}", ParishHub::info());

    let clock = SystemClock;
    let mut snapshot = match &settings.data.snapshot_path {
        Some(path) => load_snapshot(path).await?,
        None => {
            info!("No snapshot configured, using seed data");
            seed::snapshot(clock.now())?
        }
    };

    let user_id = UserId::new(settings.app.current_user.clone());
    let group_id = cli.group.as_deref().map(GroupId::from);
    let mut view = cli.view.unwrap_or(settings.app.default_view);
    if cli.event.is_some() {
        view = ViewKind::Calendar;
    }

    if let Some(content) = &cli.send {
        let message =
            send_message(&mut snapshot, &user_id, group_id.as_ref(), content, clock.now())?;
        info!(message_id = %message.id, "Message posted");
        view = ViewKind::Chat;
    }

    let render = |snapshot: &Snapshot| {
        print_view(snapshot, &settings, &cli, view, &user_id, group_id.as_ref(), &clock)
    };
    render(&snapshot)?;

    if !cli.watch {
        return Ok(());
    }

    let period = Duration::from_secs(settings.dashboard.refresh_interval_seconds);
    info!(seconds = period.as_secs(), "Watching, press Ctrl-C to stop");
    let mut interval = tokio::time::interval(period);
    // The first tick completes immediately
    interval.tick().await;

    loop {
        tokio::select! {
            _ = interval.tick() => {
                if let Err(e) = render(&snapshot) {
                    error!(error = %e, "Failed to render view");
                    if !e.is_recoverable() {
                        return Err(e.into());
                    }
                }
            }
            result = tokio::signal::ctrl_c() => {
                if let Err(e) = result {
                    warn!(error = %e, "Failed to listen for Ctrl-C");
                }
                break;
            }
        }
    }

    info!("ParishHub has been shut down.");
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn print_view(
    snapshot: &Snapshot,
    settings: &Settings,
    cli: &Cli,
    view: ViewKind,
    user_id: &UserId,
    group_id: Option<&GroupId>,
    clock: &dyn Clock,
) -> ParishHub::Result<()> {
    let now = clock.now();
    let user = snapshot.require_user(user_id)?;

    let body = match view {
        ViewKind::Dashboard => {
            DashboardView::build(snapshot, user, &settings.dashboard, now).to_string()
        }
        ViewKind::Groups => {
            let depth = settings.groups.max_tree_depth;
            GroupsView::build(snapshot, user, depth, group_id)?.to_string()
        }
        ViewKind::Calendar => match &cli.event {
            Some(event_id) => {
                CalendarView::for_event(snapshot, user, &EventId::from(event_id.as_str()))?
                    .to_string()
            }
            None => {
                let (year, month) = cli.month.unwrap_or((now.year(), now.month()));
                let mut calendar = CalendarView::build(snapshot, user, year, month)?;
                if cli.month.is_none() {
                    calendar.select_day(now.day());
                }
                calendar.to_string()
            }
        },
        ViewKind::Chat => ChatView::build(snapshot, user, group_id)?.to_string(),
    };

    println!("{} | {} ({})", view.title(), user.name, user.role);
    println!();
    print!("{}", body);
    Ok(())
}
