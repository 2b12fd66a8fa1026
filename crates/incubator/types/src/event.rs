//! Programme events and attendance

use crate::startup::require;
use crate::{EventId, IncubatorResult, StartupId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of programme event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    #[default]
    Workshop,
    Networking,
    Pitch,
    Mentoring,
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EventType::Workshop => "workshop",
            EventType::Networking => "networking",
            EventType::Pitch => "pitch",
            EventType::Mentoring => "mentoring",
        };
        write!(f, "{}", label)
    }
}

/// A scheduled event
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub location: String,
    pub event_type: EventType,
    /// Startups attending
    pub attendees: Vec<StartupId>,
}

impl Event {
    pub fn from_draft(draft: EventDraft) -> IncubatorResult<Self> {
        draft.validate()?;
        let date = draft
            .date
            .ok_or(crate::IncubatorError::MissingField("date"))?;
        Ok(Self {
            id: EventId::generate(),
            title: draft.title.trim().to_string(),
            description: draft.description,
            date,
            location: draft.location.trim().to_string(),
            event_type: draft.event_type,
            attendees: Vec::new(),
        })
    }

    pub fn with_id(mut self, id: EventId) -> Self {
        self.id = id;
        self
    }

    pub fn is_attending(&self, startup: &StartupId) -> bool {
        self.attendees.contains(startup)
    }
}

/// Form submitted when creating an event
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub date: Option<NaiveDate>,
    pub location: String,
    pub event_type: EventType,
}

impl EventDraft {
    pub fn new(title: impl Into<String>, date: NaiveDate, location: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: Some(date),
            location: location.into(),
            ..Default::default()
        }
    }

    pub fn with_type(mut self, event_type: EventType) -> Self {
        self.event_type = event_type;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Required fields: title, date, location
    pub fn validate(&self) -> IncubatorResult<()> {
        require("title", &self.title)?;
        if self.date.is_none() {
            return Err(crate::IncubatorError::MissingField("date"));
        }
        require("location", &self.location)?;
        Ok(())
    }
}
