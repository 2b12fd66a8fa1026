//! Incubator: the state container
//!
//! Owns the catalog (through the [`CatalogManager`]) and the
//! [`AllocationLedger`] policy. Instances are independent; nothing is
//! global, so several can coexist in one process or test.

use crate::{
    catalog_manager::{CatalogManager, ResourceDraft, StartupRemoval},
    config::LedgerConfig,
    dashboard::Dashboard,
    ledger::{AllocationLedger, AllocationOutcome},
    report::{generate_report, ReportData, ReportKind},
    seed::sample_catalog,
};
use chrono::{DateTime, Utc};
use incubator_types::{
    Amount, Catalog, Event, EventDraft, EventId, FundingRound, FundingRoundId, IncubatorError,
    IncubatorResult, Mentor, MentorId, MentorProfile, PoolId, ProposedLine, Resource, ResourceId,
    RoundStatus, StartupId, StartupRegistration, User,
};
use tracing::info;

/// The incubator: records plus allocation policy
pub struct Incubator {
    catalog: CatalogManager,
    ledger: AllocationLedger,
}

impl Incubator {
    /// Create an empty incubator with default ledger thresholds
    pub fn new() -> Self {
        Self::with_config(Catalog::new(), LedgerConfig::default())
    }

    /// Create from an existing catalog and ledger configuration
    pub fn with_config(catalog: Catalog, config: LedgerConfig) -> Self {
        info!(
            startups = catalog.startups.len(),
            pools = catalog.pools().count(),
            "Incubator created"
        );

        Self {
            catalog: CatalogManager::from_catalog(catalog),
            ledger: AllocationLedger::new(config),
        }
    }

    /// Create seeded with sample mentors, resources and a funding round
    pub fn with_sample_data(config: LedgerConfig) -> Self {
        Self::with_config(sample_catalog(), config)
    }

    pub fn catalog(&self) -> &Catalog {
        self.catalog.catalog()
    }

    pub fn ledger(&self) -> &AllocationLedger {
        &self.ledger
    }

    // =========================================================================
    // STARTUPS & MENTORS
    // =========================================================================

    pub fn register_startup(
        &mut self,
        registration: StartupRegistration,
    ) -> IncubatorResult<StartupId> {
        self.catalog.register_startup(registration)
    }

    pub fn update_progress(&mut self, id: &StartupId, progress: u8) -> IncubatorResult<()> {
        self.catalog.update_progress(id, progress)
    }

    pub fn delete_startup(&mut self, id: &StartupId) -> IncubatorResult<StartupRemoval> {
        self.catalog.delete_startup(id)
    }

    pub fn add_mentor(&mut self, profile: MentorProfile) -> IncubatorResult<MentorId> {
        self.catalog.add_mentor(profile)
    }

    pub fn assign_startups(
        &mut self,
        mentor: &MentorId,
        startups: Vec<StartupId>,
    ) -> IncubatorResult<()> {
        self.catalog.assign_startups(mentor, startups)
    }

    pub fn delete_mentor(&mut self, id: &MentorId) -> IncubatorResult<Mentor> {
        self.catalog.delete_mentor(id)
    }

    // =========================================================================
    // EVENTS
    // =========================================================================

    pub fn create_event(&mut self, draft: EventDraft) -> IncubatorResult<EventId> {
        self.catalog.create_event(draft)
    }

    pub fn toggle_attendance(
        &mut self,
        event: &EventId,
        startup: &StartupId,
    ) -> IncubatorResult<bool> {
        self.catalog.toggle_attendance(event, startup)
    }

    pub fn delete_event(&mut self, id: &EventId) -> IncubatorResult<Event> {
        self.catalog.delete_event(id)
    }

    // =========================================================================
    // POOLS
    // =========================================================================

    pub fn add_resource(&mut self, draft: ResourceDraft) -> IncubatorResult<ResourceId> {
        self.catalog.add_resource(draft)
    }

    pub fn delete_resource(&mut self, id: &ResourceId) -> IncubatorResult<Resource> {
        self.catalog.delete_resource(id)
    }

    pub fn create_funding_round(
        &mut self,
        name: impl Into<String>,
        total: Amount,
    ) -> IncubatorResult<FundingRoundId> {
        self.catalog.create_funding_round(name, total)
    }

    pub fn set_round_status(
        &mut self,
        id: &FundingRoundId,
        status: RoundStatus,
    ) -> IncubatorResult<()> {
        self.catalog.set_round_status(id, status)
    }

    pub fn delete_funding_round(&mut self, id: &FundingRoundId) -> IncubatorResult<FundingRound> {
        self.catalog.delete_funding_round(id)
    }

    // =========================================================================
    // ALLOCATION
    // =========================================================================

    pub fn set_allocations<I>(
        &mut self,
        pool: &PoolId,
        proposed: I,
    ) -> IncubatorResult<AllocationOutcome>
    where
        I: IntoIterator<Item = ProposedLine>,
    {
        self.ledger
            .set_allocations(self.catalog.catalog_mut(), pool, proposed)
    }

    pub fn delete_recipient_allocation(
        &mut self,
        pool: &PoolId,
        recipient: &StartupId,
    ) -> IncubatorResult<AllocationOutcome> {
        self.ledger
            .delete_recipient_allocation(self.catalog.catalog_mut(), pool, recipient)
    }

    pub fn set_resource_allocated(
        &mut self,
        resource: &ResourceId,
        count: u64,
    ) -> IncubatorResult<AllocationOutcome> {
        self.ledger
            .set_resource_allocated(self.catalog.catalog_mut(), resource, count)
    }

    pub fn summary(&self, pool: &PoolId) -> IncubatorResult<AllocationOutcome> {
        self.ledger.summary(self.catalog(), pool)
    }

    pub fn summaries(&self) -> Vec<AllocationOutcome> {
        self.ledger.summaries(self.catalog())
    }

    /// Resolve a bare pool key such as `fund-1` or `res-2`
    pub fn resolve_pool(&self, key: &str) -> IncubatorResult<PoolId> {
        self.catalog()
            .resolve_pool(key)
            .ok_or_else(|| IncubatorError::PoolNotFound(key.to_string()))
    }

    // =========================================================================
    // VIEWS
    // =========================================================================

    pub fn dashboard(&self, user: &User) -> IncubatorResult<Dashboard> {
        Dashboard::for_user(self.catalog(), &self.ledger, user)
    }

    pub fn report(
        &self,
        kind: ReportKind,
        period: impl Into<String>,
        generated_at: DateTime<Utc>,
    ) -> ReportData {
        generate_report(self.catalog(), kind, period, generated_at)
    }
}

impl Default for Incubator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_through_container() {
        let mut incubator = Incubator::with_sample_data(LedgerConfig::default());
        let pool = incubator.resolve_pool("fund-1").unwrap();

        let outcome = incubator
            .set_allocations(
                &pool,
                vec![
                    ProposedLine::new("s1", 25_000),
                    ProposedLine::new("s2", 150_000),
                    ProposedLine::new("s3", -10),
                ],
            )
            .unwrap();
        assert_eq!(outcome.allocated, 175_000);
        assert_eq!(outcome.lines.len(), 2);
        assert_eq!(outcome.remaining, 325_000);

        let outcome = incubator
            .delete_recipient_allocation(&pool, &StartupId::new("s1"))
            .unwrap();
        assert_eq!(outcome.allocated, 150_000);
    }

    #[test]
    fn test_instances_are_independent() {
        let mut a = Incubator::with_sample_data(LedgerConfig::default());
        let b = Incubator::with_sample_data(LedgerConfig::default());

        let res = ResourceId::new("res-2");
        a.set_resource_allocated(&res, 7).unwrap();

        assert_eq!(a.summary(&PoolId::Resource(res.clone())).unwrap().allocated, 7);
        assert_eq!(b.summary(&PoolId::Resource(res)).unwrap().allocated, 2);
    }

    #[test]
    fn test_resolve_unknown_pool_key() {
        let incubator = Incubator::with_sample_data(LedgerConfig::default());
        assert_eq!(
            incubator.resolve_pool("res-2").unwrap(),
            PoolId::Resource(ResourceId::new("res-2"))
        );
        assert_eq!(
            incubator.resolve_pool("pool-9").unwrap_err(),
            IncubatorError::PoolNotFound("pool-9".into())
        );
    }

    #[test]
    fn test_unknown_pool_is_not_found() {
        let mut incubator = Incubator::new();
        let pool = PoolId::Funding(FundingRoundId::new("fund-404"));
        let err = incubator.set_allocations(&pool, Vec::new()).unwrap_err();
        assert!(err.is_not_found());
    }
}
