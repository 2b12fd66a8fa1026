//! Funding rounds
//!
//! A funding round is a pool of money split among startups. Its
//! `allocated_amount` is private: the only way to change it is to replace
//! the line items, so it always equals their sum.

use crate::{
    canonical_lines, signed_difference, sum_lines, AllocationLine, AllocationPool, Amount,
    FundingRoundId, PoolId,
};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a funding round
///
/// Advanced only by administrative action. Allocation changes are not
/// gated on status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoundStatus {
    #[default]
    Open,
    Closed,
    Completed,
}

impl std::fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RoundStatus::Open => "open",
            RoundStatus::Closed => "closed",
            RoundStatus::Completed => "completed",
        };
        write!(f, "{}", label)
    }
}

impl std::str::FromStr for RoundStatus {
    type Err = crate::IncubatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "open" => Ok(RoundStatus::Open),
            "closed" => Ok(RoundStatus::Closed),
            "completed" => Ok(RoundStatus::Completed),
            other => Err(crate::IncubatorError::InvalidInput(format!(
                "unknown round status: {}",
                other
            ))),
        }
    }
}

/// A funding round and its allocations
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "FundingRoundRecord")]
pub struct FundingRound {
    pub id: FundingRoundId,
    pub name: String,
    /// Capacity of the round
    pub total_amount: Amount,
    allocated_amount: Amount,
    allocations: Vec<AllocationLine>,
    pub status: RoundStatus,
}

impl FundingRound {
    /// Create an open round with no allocations
    pub fn new(name: impl Into<String>, total_amount: Amount) -> Self {
        Self {
            id: FundingRoundId::generate(),
            name: name.into(),
            total_amount,
            allocated_amount: Amount::zero(),
            allocations: Vec::new(),
            status: RoundStatus::Open,
        }
    }

    pub fn with_id(mut self, id: FundingRoundId) -> Self {
        self.id = id;
        self
    }

    pub fn with_status(mut self, status: RoundStatus) -> Self {
        self.status = status;
        self
    }

    pub fn allocated_amount(&self) -> Amount {
        self.allocated_amount
    }

    pub fn allocations(&self) -> &[AllocationLine] {
        &self.allocations
    }
}

impl AllocationPool for FundingRound {
    fn pool_id(&self) -> PoolId {
        PoolId::Funding(self.id.clone())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn capacity(&self) -> u64 {
        self.total_amount.0
    }

    fn allocated(&self) -> u64 {
        self.allocated_amount.0
    }

    fn lines(&self) -> &[AllocationLine] {
        &self.allocations
    }

    fn replace_lines(&mut self, lines: Vec<AllocationLine>) {
        let lines = canonical_lines(lines);
        self.allocated_amount = Amount(sum_lines(&lines));
        self.allocations = lines;
    }

    /// Signed: a negative value means the round is over-allocated
    fn remaining(&self) -> i64 {
        signed_difference(self.total_amount.0, self.allocated_amount.0)
    }
}

/// Wire form; the aggregate is re-derived on load
#[derive(Deserialize)]
struct FundingRoundRecord {
    id: FundingRoundId,
    name: String,
    total_amount: Amount,
    #[serde(default)]
    allocations: Vec<AllocationLine>,
    #[serde(default)]
    status: RoundStatus,
}

impl From<FundingRoundRecord> for FundingRound {
    fn from(record: FundingRoundRecord) -> Self {
        let mut round = FundingRound::new(record.name, record.total_amount)
            .with_id(record.id)
            .with_status(record.status);
        round.replace_lines(record.allocations);
        round
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StartupId;

    fn line(id: &str, amount: u64) -> AllocationLine {
        AllocationLine::new(StartupId::new(id), amount)
    }

    #[test]
    fn test_new_round_is_empty_and_open() {
        let round = FundingRound::new("Seed Round 2024", Amount::new(500_000));
        assert_eq!(round.allocated_amount(), Amount::zero());
        assert!(round.allocations().is_empty());
        assert_eq!(round.status, RoundStatus::Open);
        assert_eq!(round.remaining(), 500_000);
    }

    #[test]
    fn test_replace_lines_derives_total() {
        let mut round = FundingRound::new("Seed", Amount::new(100));
        round.replace_lines(vec![line("a", 40), line("b", 0), line("c", 80)]);

        assert_eq!(round.allocated_amount(), Amount::new(120));
        assert_eq!(round.allocations().len(), 2);
        assert_eq!(round.remaining(), -20);
        assert!(round.is_over_allocated());
        assert_eq!(round.over_by(), 20);
    }

    #[test]
    fn test_deserialize_rederives_allocated() {
        let json = r#"{
            "id": "fund-1",
            "name": "Seed",
            "total_amount": 1000,
            "allocated_amount": 999999,
            "allocations": [{"recipient": "s1", "amount": 300}],
            "status": "closed"
        }"#;
        let round: FundingRound = serde_json::from_str(json).unwrap();
        assert_eq!(round.allocated_amount(), Amount::new(300));
        assert_eq!(round.status, RoundStatus::Closed);
    }

    #[test]
    fn test_deserialize_collapses_duplicate_recipients() {
        let json = r#"{
            "id": "fund-1",
            "name": "Seed",
            "total_amount": 1000,
            "allocations": [
                {"recipient": "s1", "amount": 300},
                {"recipient": "s2", "amount": 100},
                {"recipient": "s1", "amount": 500}
            ]
        }"#;
        let round: FundingRound = serde_json::from_str(json).unwrap();

        assert_eq!(round.allocations().len(), 2);
        assert_eq!(round.allocations()[0], line("s1", 500));
        assert_eq!(round.allocated_amount(), Amount::new(600));
        assert_eq!(round.line_for(&StartupId::new("s1")).unwrap().amount, 500);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("Completed".parse::<RoundStatus>().unwrap(), RoundStatus::Completed);
        assert!("paused".parse::<RoundStatus>().is_err());
    }
}
