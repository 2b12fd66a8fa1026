//! Allocation Ledger: line-item accounting for funding rounds and resources
//!
//! Every mutation replaces a pool's whole line-item list and re-derives its
//! allocated figure in the same step, so queries never re-sum. Capacity is
//! a soft constraint: over-allocation is accepted, logged, and reported in
//! the outcome, never rejected.

use crate::config::LedgerConfig;
use incubator_types::{
    AllocationLine, AllocationPool, Amount, Catalog, IncubatorError, IncubatorResult, PoolId,
    ProposedLine, ResourceId, StartupId, Utilization, UtilizationTier,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Aggregate view of a pool after a ledger operation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AllocationOutcome {
    pub pool: PoolId,
    pub name: String,
    pub capacity: u64,
    pub allocated: u64,
    /// Signed for funding rounds, clamped at zero for resources
    pub remaining: i64,
    /// Amount allocated beyond capacity (zero when within capacity)
    pub over_by: u64,
    pub utilization: Utilization,
    pub lines: Vec<AllocationLine>,
}

impl AllocationOutcome {
    pub fn is_over_allocated(&self) -> bool {
        self.utilization.over_allocated
    }
}

/// Stateless allocation policy applied to pools held in a [`Catalog`]
#[derive(Clone, Debug, Default)]
pub struct AllocationLedger {
    config: LedgerConfig,
}

impl AllocationLedger {
    pub fn new(config: LedgerConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(LedgerConfig::default())
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    // --- Mutations ---

    /// Replace a pool's line items with the proposed set.
    ///
    /// Duplicate recipients resolve to the last proposed amount. Lines whose
    /// final amount is zero or negative are dropped.
    pub fn set_allocations<I>(
        &self,
        catalog: &mut Catalog,
        pool_id: &PoolId,
        proposed: I,
    ) -> IncubatorResult<AllocationOutcome>
    where
        I: IntoIterator<Item = ProposedLine>,
    {
        let pool = catalog
            .pool_mut(pool_id)
            .ok_or_else(|| pool_not_found(pool_id))?;

        let lines = normalize_lines(proposed);
        pool.replace_lines(lines);

        info!(
            pool = %pool_id,
            lines = pool.lines().len(),
            allocated = pool.allocated(),
            capacity = pool.capacity(),
            "Allocations replaced"
        );

        let outcome = self.outcome(&*pool);
        self.warn_if_over(&outcome);
        Ok(outcome)
    }

    /// Remove one recipient's line from a pool.
    ///
    /// A recipient without a line is a no-op; an unknown pool is an error.
    pub fn delete_recipient_allocation(
        &self,
        catalog: &mut Catalog,
        pool_id: &PoolId,
        recipient: &StartupId,
    ) -> IncubatorResult<AllocationOutcome> {
        let pool = catalog
            .pool_mut(pool_id)
            .ok_or_else(|| pool_not_found(pool_id))?;

        if pool.line_for(recipient).is_none() {
            debug!(pool = %pool_id, recipient = %recipient, "No allocation line to remove");
            return Ok(self.outcome(&*pool));
        }

        let lines: Vec<AllocationLine> = pool
            .lines()
            .iter()
            .filter(|line| &line.recipient != recipient)
            .cloned()
            .collect();
        pool.replace_lines(lines);

        info!(
            pool = %pool_id,
            recipient = %recipient,
            allocated = pool.allocated(),
            "Allocation line removed"
        );

        Ok(self.outcome(&*pool))
    }

    /// Set a resource's bulk allocated count (not attributed to recipients).
    ///
    /// The count is not clamped to availability.
    pub fn set_resource_allocated(
        &self,
        catalog: &mut Catalog,
        resource_id: &ResourceId,
        count: u64,
    ) -> IncubatorResult<AllocationOutcome> {
        let resource = catalog
            .resource_mut(resource_id)
            .ok_or_else(|| IncubatorError::ResourceNotFound(resource_id.clone()))?;

        resource.set_allocated(count);

        info!(
            resource = %resource_id,
            allocated = count,
            availability = resource.availability,
            "Resource allocation updated"
        );

        let outcome = self.outcome(&*resource);
        self.warn_if_over(&outcome);
        Ok(outcome)
    }

    // --- Queries ---

    /// Current aggregate for a pool
    pub fn summary(
        &self,
        catalog: &Catalog,
        pool_id: &PoolId,
    ) -> IncubatorResult<AllocationOutcome> {
        catalog
            .pool(pool_id)
            .map(|pool| self.outcome(pool))
            .ok_or_else(|| pool_not_found(pool_id))
    }

    /// Aggregates for every pool, funding rounds first
    pub fn summaries(&self, catalog: &Catalog) -> Vec<AllocationOutcome> {
        catalog.pools().map(|pool| self.outcome(pool)).collect()
    }

    /// Utilization percentage and presentation tier for a pool
    pub fn utilization(&self, pool: &dyn AllocationPool) -> Utilization {
        let capacity = pool.capacity();
        let allocated = pool.allocated();

        let percent = if capacity == 0 {
            0.0
        } else {
            allocated as f64 / capacity as f64 * 100.0
        };
        let over_allocated = allocated > capacity;

        Utilization {
            percent,
            tier: self.tier_for(percent, over_allocated),
            over_allocated,
        }
    }

    /// Tier a percentage against the configured breakpoints
    pub fn tier_for(&self, percent: f64, over_allocated: bool) -> UtilizationTier {
        if over_allocated || percent > 100.0 {
            UtilizationTier::Over
        } else if percent >= self.config.critical_threshold {
            UtilizationTier::Critical
        } else if percent >= self.config.warning_threshold {
            UtilizationTier::Warning
        } else {
            UtilizationTier::Normal
        }
    }

    /// Funding a startup holds across every round
    pub fn recipient_funding(&self, catalog: &Catalog, recipient: &StartupId) -> Amount {
        catalog
            .funding_rounds
            .iter()
            .filter_map(|round| round.line_for(recipient))
            .map(|line| Amount(line.amount))
            .sum()
    }

    /// Snapshot a pool into an outcome
    pub fn outcome(&self, pool: &dyn AllocationPool) -> AllocationOutcome {
        AllocationOutcome {
            pool: pool.pool_id(),
            name: pool.name().to_string(),
            capacity: pool.capacity(),
            allocated: pool.allocated(),
            remaining: pool.remaining(),
            over_by: pool.over_by(),
            utilization: self.utilization(pool),
            lines: pool.lines().to_vec(),
        }
    }

    fn warn_if_over(&self, outcome: &AllocationOutcome) {
        if outcome.is_over_allocated() {
            warn!(
                pool = %outcome.pool,
                allocated = outcome.allocated,
                capacity = outcome.capacity,
                over_by = outcome.over_by,
                "Pool over-allocated"
            );
        }
    }
}

/// Resolve duplicates (last write wins, first position kept) and drop
/// non-positive amounts.
pub fn normalize_lines<I>(proposed: I) -> Vec<AllocationLine>
where
    I: IntoIterator<Item = ProposedLine>,
{
    let mut order: Vec<(StartupId, i64)> = Vec::new();
    let mut positions: HashMap<StartupId, usize> = HashMap::new();

    for line in proposed {
        match positions.get(&line.recipient) {
            Some(&index) => order[index].1 = line.amount,
            None => {
                positions.insert(line.recipient.clone(), order.len());
                order.push((line.recipient, line.amount));
            }
        }
    }

    order
        .into_iter()
        .filter_map(|(recipient, amount)| {
            if amount <= 0 {
                debug!(recipient = %recipient, amount, "Dropping non-positive allocation line");
                return None;
            }
            Some(AllocationLine::new(recipient, amount as u64))
        })
        .collect()
}

fn pool_not_found(pool_id: &PoolId) -> IncubatorError {
    match pool_id {
        PoolId::Funding(id) => IncubatorError::FundingRoundNotFound(id.clone()),
        PoolId::Resource(id) => IncubatorError::ResourceNotFound(id.clone()),
    }
}
