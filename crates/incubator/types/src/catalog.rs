//! The record catalog
//!
//! Holds every startup, mentor, event, resource and funding round in
//! insertion order. It is a data structure, not an execution engine:
//! validation and logging live in the runtime managers.

use crate::{
    AllocationPool, Event, EventId, FundingRound, FundingRoundId, Mentor, MentorId, PoolId,
    Resource, ResourceId, Startup, StartupId,
};
use serde::{Deserialize, Serialize};

/// Something that still points at a startup id
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum StartupReference {
    /// Listed in a mentor's assigned startups
    MentorAssignment(MentorId),
    /// Listed as an event attendee
    EventAttendance(EventId),
    /// Holds a line item in an allocation pool
    PoolLine(PoolId),
}

/// All incubator records
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub startups: Vec<Startup>,
    pub mentors: Vec<Mentor>,
    pub events: Vec<Event>,
    pub resources: Vec<Resource>,
    pub funding_rounds: Vec<FundingRound>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Startups ---

    pub fn startup(&self, id: &StartupId) -> Option<&Startup> {
        self.startups.iter().find(|s| &s.id == id)
    }

    pub fn startup_mut(&mut self, id: &StartupId) -> Option<&mut Startup> {
        self.startups.iter_mut().find(|s| &s.id == id)
    }

    pub fn startup_by_founder_email(&self, email: &str) -> Option<&Startup> {
        self.startups
            .iter()
            .find(|s| s.founder_email.eq_ignore_ascii_case(email))
    }

    pub fn insert_startup(&mut self, startup: Startup) {
        self.startups.push(startup);
    }

    pub fn remove_startup(&mut self, id: &StartupId) -> Option<Startup> {
        let index = self.startups.iter().position(|s| &s.id == id)?;
        Some(self.startups.remove(index))
    }

    // --- Mentors ---

    pub fn mentor(&self, id: &MentorId) -> Option<&Mentor> {
        self.mentors.iter().find(|m| &m.id == id)
    }

    pub fn mentor_mut(&mut self, id: &MentorId) -> Option<&mut Mentor> {
        self.mentors.iter_mut().find(|m| &m.id == id)
    }

    pub fn mentor_by_email(&self, email: &str) -> Option<&Mentor> {
        self.mentors
            .iter()
            .find(|m| m.email.eq_ignore_ascii_case(email))
    }

    pub fn insert_mentor(&mut self, mentor: Mentor) {
        self.mentors.push(mentor);
    }

    pub fn remove_mentor(&mut self, id: &MentorId) -> Option<Mentor> {
        let index = self.mentors.iter().position(|m| &m.id == id)?;
        Some(self.mentors.remove(index))
    }

    // --- Events ---

    pub fn event(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|e| &e.id == id)
    }

    pub fn event_mut(&mut self, id: &EventId) -> Option<&mut Event> {
        self.events.iter_mut().find(|e| &e.id == id)
    }

    pub fn insert_event(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn remove_event(&mut self, id: &EventId) -> Option<Event> {
        let index = self.events.iter().position(|e| &e.id == id)?;
        Some(self.events.remove(index))
    }

    // --- Resources ---

    pub fn resource(&self, id: &ResourceId) -> Option<&Resource> {
        self.resources.iter().find(|r| &r.id == id)
    }

    pub fn resource_mut(&mut self, id: &ResourceId) -> Option<&mut Resource> {
        self.resources.iter_mut().find(|r| &r.id == id)
    }

    pub fn insert_resource(&mut self, resource: Resource) {
        self.resources.push(resource);
    }

    pub fn remove_resource(&mut self, id: &ResourceId) -> Option<Resource> {
        let index = self.resources.iter().position(|r| &r.id == id)?;
        Some(self.resources.remove(index))
    }

    // --- Funding rounds ---

    pub fn funding_round(&self, id: &FundingRoundId) -> Option<&FundingRound> {
        self.funding_rounds.iter().find(|r| &r.id == id)
    }

    pub fn funding_round_mut(&mut self, id: &FundingRoundId) -> Option<&mut FundingRound> {
        self.funding_rounds.iter_mut().find(|r| &r.id == id)
    }

    pub fn insert_funding_round(&mut self, round: FundingRound) {
        self.funding_rounds.push(round);
    }

    pub fn remove_funding_round(&mut self, id: &FundingRoundId) -> Option<FundingRound> {
        let index = self.funding_rounds.iter().position(|r| &r.id == id)?;
        Some(self.funding_rounds.remove(index))
    }

    // --- Pools ---

    pub fn pool(&self, id: &PoolId) -> Option<&dyn AllocationPool> {
        match id {
            PoolId::Funding(round) => self
                .funding_round(round)
                .map(|r| r as &dyn AllocationPool),
            PoolId::Resource(resource) => {
                self.resource(resource).map(|r| r as &dyn AllocationPool)
            }
        }
    }

    pub fn pool_mut(&mut self, id: &PoolId) -> Option<&mut dyn AllocationPool> {
        match id {
            PoolId::Funding(round) => self
                .funding_round_mut(round)
                .map(|r| r as &mut dyn AllocationPool),
            PoolId::Resource(resource) => self
                .resource_mut(resource)
                .map(|r| r as &mut dyn AllocationPool),
        }
    }

    /// Resolve a bare pool key. Funding rounds are checked first.
    pub fn resolve_pool(&self, key: &str) -> Option<PoolId> {
        let round = FundingRoundId::new(key);
        if self.funding_round(&round).is_some() {
            return Some(PoolId::Funding(round));
        }
        let resource = ResourceId::new(key);
        if self.resource(&resource).is_some() {
            return Some(PoolId::Resource(resource));
        }
        None
    }

    /// Every pool, funding rounds first
    pub fn pools(&self) -> impl Iterator<Item = &dyn AllocationPool> {
        self.funding_rounds
            .iter()
            .map(|r| r as &dyn AllocationPool)
            .chain(self.resources.iter().map(|r| r as &dyn AllocationPool))
    }

    /// Records that still reference a startup id
    pub fn references_to(&self, startup: &StartupId) -> Vec<StartupReference> {
        let mentors = self
            .mentors
            .iter()
            .filter(|m| m.is_assigned(startup))
            .map(|m| StartupReference::MentorAssignment(m.id.clone()));
        let events = self
            .events
            .iter()
            .filter(|e| e.is_attending(startup))
            .map(|e| StartupReference::EventAttendance(e.id.clone()));
        let pools = self
            .pools()
            .filter(|p| p.line_for(startup).is_some())
            .map(|p| StartupReference::PoolLine(p.pool_id()));

        mentors.chain(events).chain(pools).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AllocationLine, Amount, ResourceType};

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.insert_funding_round(
            FundingRound::new("Seed", Amount::new(1000)).with_id(FundingRoundId::new("fund-1")),
        );
        catalog.insert_resource(
            Resource::new("Desk", ResourceType::OfficeSpace, 20)
                .with_id(ResourceId::new("res-1")),
        );
        catalog
    }

    #[test]
    fn test_resolve_pool() {
        let catalog = catalog();
        assert_eq!(
            catalog.resolve_pool("fund-1"),
            Some(PoolId::Funding(FundingRoundId::new("fund-1")))
        );
        assert_eq!(
            catalog.resolve_pool("res-1"),
            Some(PoolId::Resource(ResourceId::new("res-1")))
        );
        assert_eq!(catalog.resolve_pool("nope"), None);
    }

    #[test]
    fn test_pool_mut_replaces_lines() {
        let mut catalog = catalog();
        let id = PoolId::Funding(FundingRoundId::new("fund-1"));
        catalog
            .pool_mut(&id)
            .unwrap()
            .replace_lines(vec![AllocationLine::new(StartupId::new("s1"), 400)]);

        let round = catalog.funding_round(&FundingRoundId::new("fund-1")).unwrap();
        assert_eq!(round.allocated_amount(), Amount::new(400));
        assert_eq!(catalog.pools().count(), 2);
    }

    #[test]
    fn test_references_to_finds_pool_lines() {
        let mut catalog = catalog();
        let s1 = StartupId::new("s1");
        let id = PoolId::Resource(ResourceId::new("res-1"));
        catalog
            .pool_mut(&id)
            .unwrap()
            .replace_lines(vec![AllocationLine::new(s1.clone(), 2)]);

        assert_eq!(
            catalog.references_to(&s1),
            vec![StartupReference::PoolLine(id)]
        );
        assert!(catalog.references_to(&StartupId::new("s2")).is_empty());
    }

    #[test]
    fn test_remove_missing_returns_none() {
        let mut catalog = catalog();
        assert!(catalog.remove_startup(&StartupId::new("ghost")).is_none());
        assert!(catalog
            .remove_funding_round(&FundingRoundId::new("fund-1"))
            .is_some());
        assert!(catalog.funding_rounds.is_empty());
    }
}
