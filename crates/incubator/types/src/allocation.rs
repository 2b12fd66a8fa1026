//! Allocation pools and line items
//!
//! A pool is anything with a capacity that can be split among startups.
//! The allocated figure of a pool is never set on its own: it is derived
//! from the stored line items every time they are replaced.

use crate::{FundingRoundId, ResourceId, StartupId};
use serde::{Deserialize, Serialize};

/// A proposed allocation as submitted by a caller
///
/// The amount is signed: forms can produce zero or negative entries,
/// which the ledger drops rather than stores.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposedLine {
    pub recipient: StartupId,
    pub amount: i64,
}

impl ProposedLine {
    pub fn new(recipient: impl Into<StartupId>, amount: i64) -> Self {
        Self {
            recipient: recipient.into(),
            amount,
        }
    }
}

/// A stored allocation line (amount is always positive)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationLine {
    /// The startup receiving the allocation
    pub recipient: StartupId,
    /// Allocated amount (currency units or resource count)
    pub amount: u64,
}

impl AllocationLine {
    pub fn new(recipient: StartupId, amount: u64) -> Self {
        Self { recipient, amount }
    }
}

/// Sum of line amounts, saturating.
pub fn sum_lines(lines: &[AllocationLine]) -> u64 {
    lines
        .iter()
        .fold(0u64, |acc, line| acc.saturating_add(line.amount))
}

/// Canonical stored form of a line list.
///
/// A repeated recipient keeps its first position and takes its last
/// amount; zero-amount lines are then discarded.
pub fn canonical_lines(lines: Vec<AllocationLine>) -> Vec<AllocationLine> {
    let mut merged: Vec<AllocationLine> = Vec::with_capacity(lines.len());
    for line in lines {
        match merged.iter_mut().find(|m| m.recipient == line.recipient) {
            Some(existing) => existing.amount = line.amount,
            None => merged.push(line),
        }
    }
    merged.retain(|line| line.amount > 0);
    merged
}

/// Which kind of pool an id refers to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolKind {
    FundingRound,
    Resource,
}

/// Reference to an allocatable pool
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum PoolId {
    Funding(FundingRoundId),
    Resource(ResourceId),
}

impl PoolId {
    pub fn kind(&self) -> PoolKind {
        match self {
            PoolId::Funding(_) => PoolKind::FundingRound,
            PoolId::Resource(_) => PoolKind::Resource,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PoolId::Funding(id) => id.as_str(),
            PoolId::Resource(id) => id.as_str(),
        }
    }
}

impl std::fmt::Display for PoolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<FundingRoundId> for PoolId {
    fn from(id: FundingRoundId) -> Self {
        PoolId::Funding(id)
    }
}

impl From<ResourceId> for PoolId {
    fn from(id: ResourceId) -> Self {
        PoolId::Resource(id)
    }
}

/// Common view over funding rounds and resources
pub trait AllocationPool {
    fn pool_id(&self) -> PoolId;

    fn name(&self) -> &str;

    /// Total capacity (round total or resource availability)
    fn capacity(&self) -> u64;

    /// Derived allocated figure
    fn allocated(&self) -> u64;

    fn lines(&self) -> &[AllocationLine];

    /// Replace every line item and re-derive the allocated figure.
    ///
    /// Duplicate recipients collapse to the last amount and zero-amount
    /// lines are discarded (see [`canonical_lines`]).
    fn replace_lines(&mut self, lines: Vec<AllocationLine>);

    /// Remaining capacity as reported for this kind of pool
    fn remaining(&self) -> i64;

    fn is_over_allocated(&self) -> bool {
        self.allocated() > self.capacity()
    }

    /// How far the allocation exceeds capacity (zero when within capacity)
    fn over_by(&self) -> u64 {
        self.allocated().saturating_sub(self.capacity())
    }

    fn line_for(&self, recipient: &StartupId) -> Option<&AllocationLine> {
        self.lines().iter().find(|line| &line.recipient == recipient)
    }
}

/// Presentation tier for a utilization percentage
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UtilizationTier {
    /// Comfortably within capacity
    #[default]
    Normal,
    /// Approaching capacity
    Warning,
    /// At or near capacity
    Critical,
    /// Allocated beyond capacity
    Over,
}

impl std::fmt::Display for UtilizationTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            UtilizationTier::Normal => "normal",
            UtilizationTier::Warning => "warning",
            UtilizationTier::Critical => "critical",
            UtilizationTier::Over => "over",
        };
        write!(f, "{}", label)
    }
}

/// Utilization of a pool at query time
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Utilization {
    /// allocated / capacity * 100, or 0 when capacity is 0
    pub percent: f64,
    pub tier: UtilizationTier,
    pub over_allocated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_lines() {
        let lines = vec![
            AllocationLine::new(StartupId::new("s1"), 25_000),
            AllocationLine::new(StartupId::new("s2"), 150_000),
        ];
        assert_eq!(sum_lines(&lines), 175_000);
        assert_eq!(sum_lines(&[]), 0);
    }

    #[test]
    fn test_canonical_lines_last_write_wins() {
        let s1 = StartupId::new("s1");
        let s2 = StartupId::new("s2");
        let lines = canonical_lines(vec![
            AllocationLine::new(s1.clone(), 300),
            AllocationLine::new(s2.clone(), 0),
            AllocationLine::new(s1.clone(), 500),
        ]);
        assert_eq!(lines, vec![AllocationLine::new(s1, 500)]);
    }

    #[test]
    fn test_pool_id_kind_and_display() {
        let round: PoolId = FundingRoundId::new("fund-1").into();
        assert_eq!(round.kind(), PoolKind::FundingRound);
        assert_eq!(format!("{}", round), "fund-1");

        let res: PoolId = ResourceId::new("res-1").into();
        assert_eq!(res.kind(), PoolKind::Resource);
    }

    #[test]
    fn test_tier_display() {
        assert_eq!(UtilizationTier::Over.to_string(), "over");
        assert_eq!(UtilizationTier::default(), UtilizationTier::Normal);
    }
}
