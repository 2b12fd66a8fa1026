//! Property tests: a pool's allocated figure always equals the sum of its
//! stored line items, whatever the proposed input looks like.

use incubator_runtime::{AllocationLedger, LedgerConfig};
use incubator_types::{
    AllocationPool, Amount, Catalog, FundingRound, FundingRoundId, PoolId, ProposedLine, Resource,
    ResourceId, ResourceType,
};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

/// A proposed line over a small recipient set so duplicates are common.
fn arb_line() -> impl Strategy<Value = ProposedLine> {
    ("s[0-5]", -1_000i64..1_000_000).prop_map(|(recipient, amount)| {
        ProposedLine::new(recipient.as_str(), amount)
    })
}

fn arb_lines() -> impl Strategy<Value = Vec<ProposedLine>> {
    prop::collection::vec(arb_line(), 0..20)
}

fn catalog(capacity: u64) -> (Catalog, PoolId, PoolId) {
    let mut catalog = Catalog::new();
    catalog.insert_funding_round(
        FundingRound::new("Seed", Amount::new(capacity)).with_id(FundingRoundId::new("fund-1")),
    );
    catalog.insert_resource(
        Resource::new("Desk", ResourceType::OfficeSpace, capacity)
            .with_id(ResourceId::new("res-1")),
    );
    (
        catalog,
        PoolId::Funding(FundingRoundId::new("fund-1")),
        PoolId::Resource(ResourceId::new("res-1")),
    )
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// Allocated equals the sum of stored lines, and no stored line is non-positive.
    #[test]
    fn allocated_is_sum_of_positive_lines(lines in arb_lines(), capacity in 0u64..2_000_000) {
        let ledger = AllocationLedger::with_defaults();
        let (mut catalog, funding, resource) = catalog(capacity);

        for pool in [&funding, &resource] {
            let outcome = ledger.set_allocations(&mut catalog, pool, lines.clone()).unwrap();
            let stored: u64 = outcome.lines.iter().map(|l| l.amount).sum();

            prop_assert_eq!(outcome.allocated, stored);
            prop_assert!(outcome.lines.iter().all(|l| l.amount > 0));
            prop_assert_eq!(catalog.pool(pool).unwrap().allocated(), stored);
        }
    }

    /// Recipients are unique within a pool after normalization.
    #[test]
    fn stored_recipients_are_unique(lines in arb_lines()) {
        let ledger = AllocationLedger::with_defaults();
        let (mut catalog, funding, _) = catalog(1_000_000);

        let outcome = ledger.set_allocations(&mut catalog, &funding, lines).unwrap();
        let mut recipients: Vec<_> = outcome.lines.iter().map(|l| l.recipient.clone()).collect();
        let before = recipients.len();
        recipients.sort();
        recipients.dedup();
        prop_assert_eq!(recipients.len(), before);
    }

    /// Applying the same proposal twice leaves the pool unchanged.
    #[test]
    fn set_allocations_is_idempotent(lines in arb_lines()) {
        let ledger = AllocationLedger::with_defaults();
        let (mut catalog, funding, _) = catalog(500_000);

        let first = ledger.set_allocations(&mut catalog, &funding, lines.clone()).unwrap();
        let second = ledger.set_allocations(&mut catalog, &funding, lines).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Utilization is always finite, and zero for a zero-capacity pool.
    #[test]
    fn utilization_is_finite(lines in arb_lines(), capacity in 0u64..1_000) {
        let ledger = AllocationLedger::new(LedgerConfig::default());
        let (mut catalog, funding, _) = catalog(capacity);

        let outcome = ledger.set_allocations(&mut catalog, &funding, lines).unwrap();
        prop_assert!(outcome.utilization.percent.is_finite());
        if capacity == 0 {
            prop_assert_eq!(outcome.utilization.percent, 0.0);
        }
    }

    /// Over-allocation never fails; funding remaining goes negative, resource
    /// remaining stays clamped at zero.
    #[test]
    fn over_allocation_is_accepted(extra in 1u64..100_000, capacity in 1u64..100_000) {
        let ledger = AllocationLedger::with_defaults();
        let (mut catalog, funding, resource) = catalog(capacity);
        let proposal = vec![ProposedLine::new("s1", (capacity + extra) as i64)];

        let outcome = ledger.set_allocations(&mut catalog, &funding, proposal.clone()).unwrap();
        prop_assert!(outcome.is_over_allocated());
        prop_assert_eq!(outcome.remaining, -(extra as i64));
        prop_assert_eq!(outcome.over_by, extra);

        let outcome = ledger.set_allocations(&mut catalog, &resource, proposal).unwrap();
        prop_assert!(outcome.is_over_allocated());
        prop_assert_eq!(outcome.remaining, 0);
        prop_assert_eq!(outcome.over_by, extra);
    }

    /// Removing a recipient with no line leaves the aggregate unchanged.
    #[test]
    fn deleting_absent_recipient_is_noop(lines in arb_lines()) {
        let ledger = AllocationLedger::with_defaults();
        let (mut catalog, funding, _) = catalog(500_000);

        let before = ledger.set_allocations(&mut catalog, &funding, lines).unwrap();
        let after = ledger
            .delete_recipient_allocation(&mut catalog, &funding, &"absent".into())
            .unwrap();
        prop_assert_eq!(before, after);
    }
}
