//! Role dashboards

use crate::error::{CliError, CliResult};
use crate::output::{self, OutputFormat};
use colored::Colorize;
use incubator_runtime::{AdminDashboard, Dashboard, FounderDashboard, Incubator, MentorDashboard};
use incubator_types::{Role, User};
use tabled::Tabled;

#[derive(Tabled)]
struct PoolRow {
    #[tabled(rename = "Pool")]
    pool: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Capacity")]
    capacity: u64,
    #[tabled(rename = "Allocated")]
    allocated: u64,
    #[tabled(rename = "Remaining")]
    remaining: i64,
    #[tabled(rename = "Tier")]
    tier: String,
}

#[derive(Tabled)]
struct StartupRow {
    #[tabled(rename = "Startup")]
    name: String,
    #[tabled(rename = "Stage")]
    stage: String,
    #[tabled(rename = "Progress")]
    progress: String,
}

/// Execute the dashboard command
pub fn execute(
    incubator: &Incubator,
    role: Role,
    email: Option<String>,
    format: OutputFormat,
) -> CliResult<()> {
    let user = resolve_user(incubator, role, email)?;
    let dashboard = incubator.dashboard(&user)?;

    match format {
        OutputFormat::Table => {
            let menu: Vec<&str> = dashboard.sections().iter().map(|s| s.label(role)).collect();
            match &dashboard {
                Dashboard::Admin(view) => show_admin(view),
                Dashboard::Mentor(view) => show_mentor(view),
                Dashboard::Founder(view) => show_founder(view),
            }
            println!();
            println!("{} {}", "Sections:".bold(), menu.join(" | ").dimmed());
            Ok(())
        }
        _ => output::print_structured(&dashboard, format),
    }
}

/// Build the signed-in user. Without an email the first matching record is used.
fn resolve_user(incubator: &Incubator, role: Role, email: Option<String>) -> CliResult<User> {
    let catalog = incubator.catalog();
    let user = match (role, email) {
        (Role::Admin, email) => User::new(
            "Administrator",
            email.unwrap_or_else(|| "admin@incubator.local".into()),
            role,
        ),
        (Role::Mentor, Some(email)) => User::new("Mentor", email, role),
        (Role::Founder, Some(email)) => User::new("Founder", email, role),
        (Role::Mentor, None) => {
            let mentor = catalog.mentors.first().ok_or_else(|| {
                CliError::InvalidArgument("no mentors registered; pass --email".into())
            })?;
            User::new(mentor.name.clone(), mentor.email.clone(), role)
        }
        (Role::Founder, None) => {
            let startup = catalog.startups.first().ok_or_else(|| {
                CliError::InvalidArgument("no startups registered; pass --email".into())
            })?;
            User::new(startup.founder_name.clone(), startup.founder_email.clone(), role)
        }
    };
    Ok(user)
}

fn show_admin(view: &AdminDashboard) {
    let m = &view.metrics;
    output::print_header("Admin Dashboard");
    println!("  Startups:          {}", m.total_startups);
    println!("  Mentors:           {}", m.mentor_count);
    println!("  Average progress:  {}%", m.average_progress);
    println!("  Total funding:     {}", m.total_funding.thousands());
    println!("  Allocated funding: {}", m.allocated_funding.thousands());
    println!("  Events:            {}", m.event_count);
    println!();

    let stages: Vec<String> = view
        .stages
        .stages
        .iter()
        .map(|c| format!("{} {}", c.stage, c.count))
        .collect();
    println!("{} {}", "Stages:".bold(), stages.join(", "));
    println!();

    let rows: Vec<PoolRow> = view
        .pools
        .iter()
        .map(|p| PoolRow {
            pool: p.pool.to_string(),
            name: p.name.clone(),
            capacity: p.capacity,
            allocated: p.allocated,
            remaining: p.remaining,
            tier: format!("{} ({:.1}%)", p.utilization.tier, p.utilization.percent),
        })
        .collect();
    output::print_table(rows);

    for pool in &view.over_allocated {
        output::print_warning(&format!("{} is over-allocated", pool));
    }
}

fn show_mentor(view: &MentorDashboard) {
    output::print_header(&format!("Mentor Dashboard - {}", view.mentor.name));
    println!("  Assigned startups:    {}", view.assigned.len());
    println!("  Expertise areas:      {}", view.mentor.expertise.join(", "));
    println!("  Avg startup progress: {}%", view.average_progress);
    println!();

    let rows: Vec<StartupRow> = view
        .assigned
        .iter()
        .map(|s| StartupRow {
            name: s.name.clone(),
            stage: s.stage.to_string(),
            progress: format!("{}%", s.progress),
        })
        .collect();
    output::print_table(rows);

    for event in &view.events {
        output::print_info(&format!("{} {} ({})", event.date, event.title, event.location));
    }
}

fn show_founder(view: &FounderDashboard) {
    let s = &view.startup;
    output::print_header(&format!("Founder Dashboard - {}", s.name));
    println!("  Stage:     {}", s.stage);
    println!("  Progress:  {}%", s.progress);
    println!(
        "  Funding:   {} allocated, {} / {} received",
        view.funding_allocated.thousands(),
        s.funding_received.thousands(),
        s.funding_needed.thousands()
    );
    match &view.mentor {
        Some(mentor) => println!("  Mentor:    {} <{}>", mentor.name, mentor.email),
        None => println!("  Mentor:    {}", "not assigned".dimmed()),
    }
    println!();

    for share in view.funding.iter().chain(view.resources.iter()) {
        println!("  {} {}: {}", "•".cyan(), share.name, share.amount);
    }
    for event in &view.events {
        output::print_info(&format!("{} {} ({})", event.date, event.title, event.location));
    }
}
