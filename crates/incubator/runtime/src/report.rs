//! Programme reports and their text and CSV renderings

use crate::metrics::OverviewMetrics;
use chrono::{DateTime, Utc};
use incubator_types::{
    format_thousands, AllocationPool, Amount, Catalog, IncubatorError, RoundStatus, Stage,
};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::Write;

/// Which sections a report carries
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    Performance,
    Progress,
    Funding,
    Comprehensive,
}

impl ReportKind {
    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::Performance => "Performance Report",
            ReportKind::Progress => "Progress Report",
            ReportKind::Funding => "Funding Report",
            ReportKind::Comprehensive => "Comprehensive Report",
        }
    }

    fn includes_metrics(&self) -> bool {
        matches!(self, ReportKind::Performance | ReportKind::Comprehensive)
    }

    fn includes_progress(&self) -> bool {
        matches!(self, ReportKind::Progress | ReportKind::Comprehensive)
    }

    fn includes_funding(&self) -> bool {
        matches!(self, ReportKind::Funding | ReportKind::Comprehensive)
    }
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ReportKind::Performance => "performance",
            ReportKind::Progress => "progress",
            ReportKind::Funding => "funding",
            ReportKind::Comprehensive => "comprehensive",
        };
        write!(f, "{}", label)
    }
}

impl std::str::FromStr for ReportKind {
    type Err = IncubatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "performance" => Ok(ReportKind::Performance),
            "progress" => Ok(ReportKind::Progress),
            "funding" => Ok(ReportKind::Funding),
            "comprehensive" => Ok(ReportKind::Comprehensive),
            other => Err(IncubatorError::InvalidInput(format!(
                "unknown report kind: {}",
                other
            ))),
        }
    }
}

/// Headline figures carried by every report
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMetrics {
    pub total_startups: usize,
    pub active_mentors: usize,
    pub average_progress: u8,
    pub total_funding: Amount,
    pub allocated_funding: Amount,
}

impl From<OverviewMetrics> for ReportMetrics {
    fn from(metrics: OverviewMetrics) -> Self {
        Self {
            total_startups: metrics.total_startups,
            active_mentors: metrics.mentor_count,
            average_progress: metrics.average_progress,
            total_funding: metrics.total_funding,
            allocated_funding: metrics.allocated_funding,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartupDetail {
    pub name: String,
    pub founder: String,
    pub stage: Stage,
    pub progress: u8,
    pub funding_received: Amount,
    pub funding_needed: Amount,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundingDetail {
    pub round_name: String,
    pub total: Amount,
    pub allocated: Amount,
    /// Signed: negative when the round is over-allocated
    pub remaining: i64,
    pub status: RoundStatus,
    pub over_allocated: bool,
}

/// A generated report
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    pub kind: ReportKind,
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub period: String,
    pub metrics: ReportMetrics,
    pub startups: Vec<StartupDetail>,
    pub funding: Vec<FundingDetail>,
}

/// Snapshot the catalog into a report
pub fn generate_report(
    catalog: &Catalog,
    kind: ReportKind,
    period: impl Into<String>,
    generated_at: DateTime<Utc>,
) -> ReportData {
    let startups = catalog
        .startups
        .iter()
        .map(|s| StartupDetail {
            name: s.name.clone(),
            founder: s.founder_name.clone(),
            stage: s.stage,
            progress: s.progress,
            funding_received: s.funding_received,
            funding_needed: s.funding_needed,
        })
        .collect();

    let funding = catalog
        .funding_rounds
        .iter()
        .map(|r| FundingDetail {
            round_name: r.name.clone(),
            total: r.total_amount,
            allocated: r.allocated_amount(),
            remaining: r.remaining(),
            status: r.status,
            over_allocated: r.is_over_allocated(),
        })
        .collect();

    ReportData {
        kind,
        title: kind.title().to_string(),
        generated_at,
        period: period.into(),
        metrics: OverviewMetrics::compute(catalog).into(),
        startups,
        funding,
    }
}

/// Markdown-style text rendering; sections depend on the report kind
pub fn render_text(report: &ReportData) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_text(&mut out, report);
    out
}

fn write_text(out: &mut String, report: &ReportData) -> std::fmt::Result {
    writeln!(out, "# {}", report.title)?;
    writeln!(out)?;
    writeln!(out, "Generated: {}", report.generated_at.format("%Y-%m-%d"))?;
    writeln!(out, "Period: {}", report.period)?;
    writeln!(out)?;

    if report.kind.includes_metrics() {
        let m = &report.metrics;
        writeln!(out, "## Performance Metrics")?;
        writeln!(out)?;
        writeln!(out, "- Total Startups: {}", m.total_startups)?;
        writeln!(out, "- Active Mentors: {}", m.active_mentors)?;
        writeln!(out, "- Average Progress: {}%", m.average_progress)?;
        writeln!(out, "- Total Funding Available: {}", m.total_funding.thousands())?;
        writeln!(out, "- Allocated Funding: {}", m.allocated_funding.thousands())?;
        writeln!(out)?;
    }

    if report.kind.includes_progress() {
        writeln!(out, "## Startup Progress")?;
        writeln!(out)?;
        for s in &report.startups {
            writeln!(out, "### {}", s.name)?;
            writeln!(out, "- Founder: {}", s.founder)?;
            writeln!(out, "- Stage: {}", s.stage)?;
            writeln!(out, "- Progress: {}%", s.progress)?;
            writeln!(
                out,
                "- Funding: {} / {}",
                s.funding_received.thousands(),
                s.funding_needed.thousands()
            )?;
            writeln!(out)?;
        }
    }

    if report.kind.includes_funding() {
        writeln!(out, "## Funding Summary")?;
        writeln!(out)?;
        for r in &report.funding {
            writeln!(out, "### {}", r.round_name)?;
            writeln!(out, "- Total: {}", r.total.thousands())?;
            writeln!(out, "- Allocated: {}", r.allocated.thousands())?;
            writeln!(out, "- Remaining: {}", format_thousands(r.remaining as i128))?;
            writeln!(out, "- Status: {}", r.status)?;
            if r.over_allocated {
                writeln!(out, "- Warning: over-allocated")?;
            }
            writeln!(out)?;
        }
    }

    Ok(())
}

/// CSV export: header block, metrics block, startup table
pub fn to_csv(report: &ReportData) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_csv(&mut out, report);
    out
}

fn write_csv(out: &mut String, report: &ReportData) -> std::fmt::Result {
    let m = &report.metrics;

    writeln!(out, "{}", csv_field(&report.title))?;
    writeln!(out, "Generated,{}", report.generated_at.format("%Y-%m-%d"))?;
    writeln!(out, "Period,{}", csv_field(&report.period))?;
    writeln!(out)?;

    writeln!(out, "Metrics")?;
    writeln!(out, "Total Startups,{}", m.total_startups)?;
    writeln!(out, "Active Mentors,{}", m.active_mentors)?;
    writeln!(out, "Average Progress,{}%", m.average_progress)?;
    writeln!(out, "Total Funding,{}", m.total_funding.thousands())?;
    writeln!(out, "Allocated Funding,{}", m.allocated_funding.thousands())?;
    writeln!(out)?;

    writeln!(out, "Startup Details")?;
    writeln!(
        out,
        "Name,Founder,Stage,Progress,Funding Received,Funding Needed"
    )?;
    for s in &report.startups {
        writeln!(
            out,
            "{},{},{},{}%,{},{}",
            csv_field(&s.name),
            csv_field(&s.founder),
            s.stage,
            s.progress,
            s.funding_received.thousands(),
            s.funding_needed.thousands()
        )?;
    }

    Ok(())
}

/// Quote a field containing a comma, quote or line break
fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}
