//! Read-only projections over the catalog

use chrono::NaiveDate;
use incubator_types::{AllocationPool, Amount, Catalog, Event, Stage, Startup};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Headline figures for the admin overview and reports
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewMetrics {
    pub total_startups: usize,
    pub mentor_count: usize,
    /// Mean progress, rounded half away from zero
    pub average_progress: u8,
    /// Sum of funding round totals
    pub total_funding: Amount,
    /// Sum of funding round allocations
    pub allocated_funding: Amount,
    pub event_count: usize,
    pub resource_count: usize,
}

impl OverviewMetrics {
    pub fn compute(catalog: &Catalog) -> Self {
        Self {
            total_startups: catalog.startups.len(),
            mentor_count: catalog.mentors.len(),
            average_progress: average_progress(catalog.startups.iter()),
            total_funding: catalog.funding_rounds.iter().map(|r| r.total_amount).sum(),
            allocated_funding: catalog
                .funding_rounds
                .iter()
                .map(|r| Amount(r.allocated()))
                .sum(),
            event_count: catalog.events.len(),
            resource_count: catalog.resources.len(),
        }
    }
}

/// Average progress of a set of startups; 0 when empty
pub fn average_progress<'a>(startups: impl IntoIterator<Item = &'a Startup>) -> u8 {
    let (sum, count) = startups
        .into_iter()
        .fold((0u64, 0u64), |(sum, count), s| (sum + s.progress as u64, count + 1));
    if count == 0 {
        return 0;
    }
    (sum as f64 / count as f64).round() as u8
}

/// Number of startups in a stage
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageCount {
    pub stage: Stage,
    pub count: usize,
}

/// Startup counts for every stage, in stage order
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageBreakdown {
    pub stages: Vec<StageCount>,
}

impl StageBreakdown {
    pub fn compute(catalog: &Catalog) -> Self {
        let stages = Stage::ALL
            .iter()
            .map(|&stage| StageCount {
                stage,
                count: catalog.startups.iter().filter(|s| s.stage == stage).count(),
            })
            .collect();
        Self { stages }
    }

    pub fn count(&self, stage: Stage) -> usize {
        self.stages
            .iter()
            .find(|c| c.stage == stage)
            .map(|c| c.count)
            .unwrap_or(0)
    }
}

/// Startups ordered by progress, highest first. Ties keep catalog order.
pub fn progress_ranking(catalog: &Catalog) -> Vec<&Startup> {
    let mut ranked: Vec<&Startup> = catalog.startups.iter().collect();
    ranked.sort_by(|a, b| b.progress.cmp(&a.progress));
    ranked
}

/// Events grouped by date, earliest first
pub fn calendar(catalog: &Catalog) -> BTreeMap<NaiveDate, Vec<&Event>> {
    let mut days: BTreeMap<NaiveDate, Vec<&Event>> = BTreeMap::new();
    for event in &catalog.events {
        days.entry(event.date).or_default().push(event);
    }
    days
}
