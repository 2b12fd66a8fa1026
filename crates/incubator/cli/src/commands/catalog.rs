//! Catalog listings: startups, mentors, events

use crate::error::CliResult;
use crate::output::{self, OutputFormat};
use incubator_runtime::{calendar, progress_ranking, Incubator};
use incubator_types::Event;
use tabled::Tabled;

#[derive(Tabled)]
struct StartupRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Founder")]
    founder: String,
    #[tabled(rename = "Stage")]
    stage: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Funding")]
    funding: String,
}

#[derive(Tabled)]
struct MentorRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Expertise")]
    expertise: String,
    #[tabled(rename = "Startups")]
    startups: usize,
}

#[derive(Tabled)]
struct EventRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Type")]
    event_type: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Attendees")]
    attendees: usize,
}

/// Startups ranked by progress
pub fn list_startups(incubator: &Incubator, format: OutputFormat) -> CliResult<()> {
    let ranked = progress_ranking(incubator.catalog());
    let rows: Vec<StartupRow> = ranked
        .iter()
        .map(|s| StartupRow {
            id: s.id.to_string(),
            name: s.name.clone(),
            founder: s.founder_name.clone(),
            stage: s.stage.to_string(),
            progress: format!("{}%", s.progress),
            funding: format!(
                "{} / {}",
                s.funding_received.thousands(),
                s.funding_needed.thousands()
            ),
        })
        .collect();
    output::print_output(&ranked, rows, format)
}

pub fn list_mentors(incubator: &Incubator, format: OutputFormat) -> CliResult<()> {
    let mentors = &incubator.catalog().mentors;
    let rows: Vec<MentorRow> = mentors
        .iter()
        .map(|m| MentorRow {
            id: m.id.to_string(),
            name: m.name.clone(),
            email: m.email.clone(),
            expertise: m.expertise.join(", "),
            startups: m.assigned_startups.len(),
        })
        .collect();
    output::print_output(mentors, rows, format)
}

/// Events in date order
pub fn list_events(incubator: &Incubator, format: OutputFormat) -> CliResult<()> {
    let events: Vec<&Event> = calendar(incubator.catalog())
        .into_values()
        .flatten()
        .collect();
    let rows: Vec<EventRow> = events
        .iter()
        .map(|e| EventRow {
            date: e.date.format("%Y-%m-%d").to_string(),
            title: e.title.clone(),
            event_type: e.event_type.to_string(),
            location: e.location.clone(),
            attendees: e.attendees.len(),
        })
        .collect();
    output::print_output(&events, rows, format)
}
