//! Catalog Manager: record lifecycle for the incubator
//!
//! Owns the [`Catalog`] and performs required-field validation at the
//! boundary. Deletions never cascade: whatever still points at a removed
//! startup is reported back to the caller.

use incubator_types::{
    Amount, Catalog, Event, EventDraft, EventId, FundingRound, FundingRoundId, IncubatorError,
    IncubatorResult, Mentor, MentorId, MentorProfile, Resource, ResourceId, ResourceType,
    RoundStatus, Startup, StartupId, StartupReference, StartupRegistration, MAX_PROGRESS,
};
use std::collections::HashSet;
use tracing::{info, warn};

/// Input for adding a resource
#[derive(Clone, Debug)]
pub struct ResourceDraft {
    pub name: String,
    pub resource_type: ResourceType,
    pub availability: u64,
    pub description: String,
}

impl ResourceDraft {
    pub fn new(name: impl Into<String>, resource_type: ResourceType, availability: u64) -> Self {
        Self {
            name: name.into(),
            resource_type,
            availability,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Result of deleting a startup
#[derive(Clone, Debug)]
pub struct StartupRemoval {
    pub startup: Startup,
    /// References left dangling by the deletion
    pub dangling: Vec<StartupReference>,
}

/// Manages catalog records
pub struct CatalogManager {
    catalog: Catalog,
}

impl CatalogManager {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::new(),
        }
    }

    pub fn from_catalog(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    pub fn into_catalog(self) -> Catalog {
        self.catalog
    }

    // --- Startups ---

    pub fn register_startup(
        &mut self,
        registration: StartupRegistration,
    ) -> IncubatorResult<StartupId> {
        let startup = Startup::from_registration(registration)?;
        let id = startup.id.clone();

        info!(startup = %id, name = %startup.name, stage = %startup.stage, "Startup registered");

        self.catalog.insert_startup(startup);
        Ok(id)
    }

    pub fn update_progress(&mut self, id: &StartupId, progress: u8) -> IncubatorResult<()> {
        if progress > MAX_PROGRESS {
            return Err(IncubatorError::InvalidInput(format!(
                "progress {} exceeds {}",
                progress, MAX_PROGRESS
            )));
        }

        let startup = self
            .catalog
            .startup_mut(id)
            .ok_or_else(|| IncubatorError::StartupNotFound(id.clone()))?;
        startup.progress = progress;

        info!(startup = %id, progress, "Startup progress updated");
        Ok(())
    }

    /// Remove a startup. References elsewhere are left in place.
    pub fn delete_startup(&mut self, id: &StartupId) -> IncubatorResult<StartupRemoval> {
        let startup = self
            .catalog
            .remove_startup(id)
            .ok_or_else(|| IncubatorError::StartupNotFound(id.clone()))?;

        let dangling = self.catalog.references_to(id);
        if dangling.is_empty() {
            info!(startup = %id, "Startup deleted");
        } else {
            warn!(
                startup = %id,
                references = dangling.len(),
                "Startup deleted with dangling references"
            );
        }

        Ok(StartupRemoval { startup, dangling })
    }

    // --- Mentors ---

    pub fn add_mentor(&mut self, profile: MentorProfile) -> IncubatorResult<MentorId> {
        let mentor = Mentor::from_profile(profile)?;
        let id = mentor.id.clone();

        info!(mentor = %id, name = %mentor.name, "Mentor added");

        self.catalog.insert_mentor(mentor);
        Ok(id)
    }

    /// Replace a mentor's assigned startups.
    ///
    /// Known startups get their `mentor_id` updated to match; unknown ids
    /// are kept on the mentor as-is. A startup has at most one mentor, so
    /// listed ids are taken off every other mentor.
    pub fn assign_startups(
        &mut self,
        mentor_id: &MentorId,
        startups: Vec<StartupId>,
    ) -> IncubatorResult<()> {
        let mut seen = HashSet::new();
        let assigned: Vec<StartupId> = startups
            .into_iter()
            .filter(|id| seen.insert(id.clone()))
            .collect();

        let mentor = self
            .catalog
            .mentor_mut(mentor_id)
            .ok_or_else(|| IncubatorError::MentorNotFound(mentor_id.clone()))?;
        mentor.assigned_startups = assigned.clone();

        for other in self.catalog.mentors.iter_mut() {
            if &other.id == mentor_id {
                continue;
            }
            let before = other.assigned_startups.len();
            other.assigned_startups.retain(|id| !assigned.contains(id));
            let moved = before - other.assigned_startups.len();
            if moved > 0 {
                info!(
                    from = %other.id,
                    to = %mentor_id,
                    moved,
                    "Startups reassigned between mentors"
                );
            }
        }

        for startup in self.catalog.startups.iter_mut() {
            if assigned.contains(&startup.id) {
                startup.mentor_id = Some(mentor_id.clone());
            } else if startup.mentor_id.as_ref() == Some(mentor_id) {
                startup.mentor_id = None;
            }
        }

        info!(mentor = %mentor_id, assigned = assigned.len(), "Mentor assignments replaced");
        Ok(())
    }

    pub fn delete_mentor(&mut self, id: &MentorId) -> IncubatorResult<Mentor> {
        let mentor = self
            .catalog
            .remove_mentor(id)
            .ok_or_else(|| IncubatorError::MentorNotFound(id.clone()))?;

        info!(mentor = %id, "Mentor deleted");
        Ok(mentor)
    }

    // --- Events ---

    pub fn create_event(&mut self, draft: EventDraft) -> IncubatorResult<EventId> {
        let event = Event::from_draft(draft)?;
        let id = event.id.clone();

        info!(event = %id, title = %event.title, date = %event.date, "Event created");

        self.catalog.insert_event(event);
        Ok(id)
    }

    /// Add the startup to the attendee list, or remove it if present.
    ///
    /// Returns whether the startup attends afterwards.
    pub fn toggle_attendance(
        &mut self,
        event_id: &EventId,
        startup: &StartupId,
    ) -> IncubatorResult<bool> {
        let event = self
            .catalog
            .event_mut(event_id)
            .ok_or_else(|| IncubatorError::EventNotFound(event_id.clone()))?;

        let attending = if event.is_attending(startup) {
            event.attendees.retain(|id| id != startup);
            false
        } else {
            event.attendees.push(startup.clone());
            true
        };

        info!(event = %event_id, startup = %startup, attending, "Attendance toggled");
        Ok(attending)
    }

    pub fn delete_event(&mut self, id: &EventId) -> IncubatorResult<Event> {
        let event = self
            .catalog
            .remove_event(id)
            .ok_or_else(|| IncubatorError::EventNotFound(id.clone()))?;

        info!(event = %id, "Event deleted");
        Ok(event)
    }

    // --- Resources ---

    pub fn add_resource(&mut self, draft: ResourceDraft) -> IncubatorResult<ResourceId> {
        if draft.name.trim().is_empty() {
            return Err(IncubatorError::MissingField("name"));
        }

        let resource = Resource::new(draft.name.trim(), draft.resource_type, draft.availability)
            .with_description(draft.description);
        let id = resource.id.clone();

        info!(
            resource = %id,
            resource_type = %resource.resource_type,
            availability = resource.availability,
            "Resource added"
        );

        self.catalog.insert_resource(resource);
        Ok(id)
    }

    pub fn delete_resource(&mut self, id: &ResourceId) -> IncubatorResult<Resource> {
        let resource = self
            .catalog
            .remove_resource(id)
            .ok_or_else(|| IncubatorError::ResourceNotFound(id.clone()))?;

        info!(resource = %id, "Resource deleted");
        Ok(resource)
    }

    // --- Funding rounds ---

    pub fn create_funding_round(
        &mut self,
        name: impl Into<String>,
        total_amount: Amount,
    ) -> IncubatorResult<FundingRoundId> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(IncubatorError::MissingField("name"));
        }

        let round = FundingRound::new(name.trim(), total_amount);
        let id = round.id.clone();

        info!(round = %id, total = total_amount.0, "Funding round created");

        self.catalog.insert_funding_round(round);
        Ok(id)
    }

    /// Administrative status change. Any transition is accepted.
    pub fn set_round_status(
        &mut self,
        id: &FundingRoundId,
        status: RoundStatus,
    ) -> IncubatorResult<()> {
        let round = self
            .catalog
            .funding_round_mut(id)
            .ok_or_else(|| IncubatorError::FundingRoundNotFound(id.clone()))?;

        let previous = round.status;
        round.status = status;

        info!(round = %id, from = %previous, to = %status, "Funding round status changed");
        Ok(())
    }

    pub fn delete_funding_round(&mut self, id: &FundingRoundId) -> IncubatorResult<FundingRound> {
        let round = self
            .catalog
            .remove_funding_round(id)
            .ok_or_else(|| IncubatorError::FundingRoundNotFound(id.clone()))?;

        info!(round = %id, "Funding round deleted");
        Ok(round)
    }
}

impl Default for CatalogManager {
    fn default() -> Self {
        Self::new()
    }
}
