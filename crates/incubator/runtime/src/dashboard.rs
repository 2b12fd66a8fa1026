//! Role dashboards
//!
//! One projection per role. [`Dashboard::for_user`] is the single place
//! that switches on [`Role`].

use crate::ledger::{AllocationLedger, AllocationOutcome};
use crate::metrics::{average_progress, OverviewMetrics, StageBreakdown};
use incubator_types::{
    AllocationPool, Amount, Catalog, Event, IncubatorError, IncubatorResult, Mentor, PoolId, Role,
    Section, Startup, User,
};
use serde::{Deserialize, Serialize};

/// Admin view: programme-wide figures and every pool
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AdminDashboard {
    pub metrics: OverviewMetrics,
    pub stages: StageBreakdown,
    pub pools: Vec<AllocationOutcome>,
    /// Pools currently allocated beyond capacity
    pub over_allocated: Vec<PoolId>,
}

/// Mentor view: the mentor's own startups
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MentorDashboard {
    pub mentor: Mentor,
    pub assigned: Vec<Startup>,
    pub average_progress: u8,
    /// Events attended by any assigned startup
    pub events: Vec<Event>,
}

/// A recipient's share of one pool
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolShare {
    pub pool: PoolId,
    pub name: String,
    pub amount: u64,
}

/// Founder view: the founder's startup and what it has been given
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FounderDashboard {
    pub startup: Startup,
    pub mentor: Option<Mentor>,
    pub funding: Vec<PoolShare>,
    pub funding_allocated: Amount,
    pub resources: Vec<PoolShare>,
    pub events: Vec<Event>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Dashboard {
    Admin(AdminDashboard),
    Mentor(MentorDashboard),
    Founder(FounderDashboard),
}

impl Dashboard {
    /// Build the dashboard for a signed-in user.
    ///
    /// Mentors and founders are matched to their record by email.
    pub fn for_user(
        catalog: &Catalog,
        ledger: &AllocationLedger,
        user: &User,
    ) -> IncubatorResult<Self> {
        match user.role {
            Role::Admin => Ok(Dashboard::Admin(admin(catalog, ledger))),
            Role::Mentor => mentor(catalog, &user.email).map(Dashboard::Mentor),
            Role::Founder => founder(catalog, ledger, &user.email).map(Dashboard::Founder),
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Dashboard::Admin(_) => Role::Admin,
            Dashboard::Mentor(_) => Role::Mentor,
            Dashboard::Founder(_) => Role::Founder,
        }
    }

    /// Navigation sections for this dashboard
    pub fn sections(&self) -> &'static [Section] {
        self.role().sections()
    }
}

fn admin(catalog: &Catalog, ledger: &AllocationLedger) -> AdminDashboard {
    let pools = ledger.summaries(catalog);
    let over_allocated = pools
        .iter()
        .filter(|p| p.is_over_allocated())
        .map(|p| p.pool.clone())
        .collect();

    AdminDashboard {
        metrics: OverviewMetrics::compute(catalog),
        stages: StageBreakdown::compute(catalog),
        pools,
        over_allocated,
    }
}

fn mentor(catalog: &Catalog, email: &str) -> IncubatorResult<MentorDashboard> {
    let mentor = catalog
        .mentor_by_email(email)
        .ok_or_else(|| IncubatorError::UserNotFound(email.to_string()))?;

    // Assigned ids without a matching startup are skipped
    let assigned: Vec<Startup> = mentor
        .assigned_startups
        .iter()
        .filter_map(|id| catalog.startup(id))
        .cloned()
        .collect();

    let events = catalog
        .events
        .iter()
        .filter(|e| assigned.iter().any(|s| e.is_attending(&s.id)))
        .cloned()
        .collect();

    Ok(MentorDashboard {
        mentor: mentor.clone(),
        average_progress: average_progress(&assigned),
        assigned,
        events,
    })
}

fn founder(
    catalog: &Catalog,
    ledger: &AllocationLedger,
    email: &str,
) -> IncubatorResult<FounderDashboard> {
    let startup = catalog
        .startup_by_founder_email(email)
        .ok_or_else(|| IncubatorError::UserNotFound(email.to_string()))?;

    let share = |pool: &dyn AllocationPool| {
        pool.line_for(&startup.id).map(|line| PoolShare {
            pool: pool.pool_id(),
            name: pool.name().to_string(),
            amount: line.amount,
        })
    };

    let funding = catalog
        .funding_rounds
        .iter()
        .filter_map(|r| share(r as &dyn AllocationPool))
        .collect();
    let resources = catalog
        .resources
        .iter()
        .filter_map(|r| share(r as &dyn AllocationPool))
        .collect();

    let mentor = startup
        .mentor_id
        .as_ref()
        .and_then(|id| catalog.mentor(id))
        .cloned();

    let events = catalog
        .events
        .iter()
        .filter(|e| e.is_attending(&startup.id))
        .cloned()
        .collect();

    Ok(FounderDashboard {
        startup: startup.clone(),
        mentor,
        funding,
        funding_allocated: ledger.recipient_funding(catalog, &startup.id),
        resources,
        events,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog_manager::CatalogManager;
    use chrono::NaiveDate;
    use incubator_types::{
        Amount, EventDraft, MentorProfile, ProposedLine, ResourceType, StartupRegistration,
    };

    fn setup() -> (CatalogManager, AllocationLedger) {
        let mut mgr = CatalogManager::new();
        let ledger = AllocationLedger::with_defaults();

        let startup = mgr
            .register_startup(StartupRegistration::new("Acme", "Ada", "ada@acme.io"))
            .unwrap();
        let mentor = mgr
            .add_mentor(MentorProfile::new("Sarah Chen", "sarah@mentors.com"))
            .unwrap();
        mgr.assign_startups(&mentor, vec![startup.clone()]).unwrap();

        let round = mgr.create_funding_round("Seed", Amount::new(1000)).unwrap();
        ledger
            .set_allocations(
                mgr.catalog_mut(),
                &PoolId::Funding(round),
                vec![ProposedLine::new(startup.clone(), 1200)],
            )
            .unwrap();

        let desk = mgr
            .add_resource(crate::catalog_manager::ResourceDraft::new(
                "Desk",
                ResourceType::OfficeSpace,
                10,
            ))
            .unwrap();
        ledger
            .set_allocations(
                mgr.catalog_mut(),
                &PoolId::Resource(desk),
                vec![ProposedLine::new(startup.clone(), 2)],
            )
            .unwrap();

        let date = NaiveDate::from_ymd_opt(2024, 11, 2).unwrap();
        let event = mgr
            .create_event(EventDraft::new("Demo Day", date, "Hall"))
            .unwrap();
        mgr.toggle_attendance(&event, &startup).unwrap();

        (mgr, ledger)
    }

    #[test]
    fn test_admin_dashboard_flags_over_allocation() {
        let (mgr, ledger) = setup();
        let user = User::new("Admin", "admin@incubator.io", Role::Admin);

        let dashboard = Dashboard::for_user(mgr.catalog(), &ledger, &user).unwrap();
        let Dashboard::Admin(admin) = dashboard else {
            panic!("expected admin dashboard");
        };
        assert_eq!(admin.metrics.total_startups, 1);
        assert_eq!(admin.pools.len(), 2);
        assert_eq!(admin.over_allocated.len(), 1);
    }

    #[test]
    fn test_mentor_dashboard_by_email() {
        let (mgr, ledger) = setup();
        let user = User::new("Sarah", "SARAH@mentors.com", Role::Mentor);

        let dashboard = Dashboard::for_user(mgr.catalog(), &ledger, &user).unwrap();
        assert_eq!(dashboard.sections(), Role::Mentor.sections());
        let Dashboard::Mentor(view) = dashboard else {
            panic!("expected mentor dashboard");
        };
        assert_eq!(view.assigned.len(), 1);
        assert_eq!(view.average_progress, 10);
        assert_eq!(view.events.len(), 1);
    }

    #[test]
    fn test_founder_dashboard_shares() {
        let (mgr, ledger) = setup();
        let user = User::new("Ada", "ada@acme.io", Role::Founder);

        let Dashboard::Founder(view) = Dashboard::for_user(mgr.catalog(), &ledger, &user).unwrap()
        else {
            panic!("expected founder dashboard");
        };
        assert_eq!(view.funding_allocated, Amount::new(1200));
        assert_eq!(view.funding.len(), 1);
        assert_eq!(view.resources[0].amount, 2);
        assert_eq!(view.mentor.map(|m| m.name), Some("Sarah Chen".to_string()));
    }

    #[test]
    fn test_unknown_user_email() {
        let (mgr, ledger) = setup();
        let user = User::new("Ghost", "ghost@nowhere.io", Role::Founder);
        let err = Dashboard::for_user(mgr.catalog(), &ledger, &user).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_dashboard_serializes_with_role_tag() {
        let (mgr, ledger) = setup();
        let user = User::new("Admin", "admin@incubator.io", Role::Admin);
        let dashboard = Dashboard::for_user(mgr.catalog(), &ledger, &user).unwrap();
        let json = serde_json::to_value(&dashboard).unwrap();
        assert_eq!(json["role"], "admin");
    }
}
