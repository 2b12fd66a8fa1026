//! Mentors and their startup assignments

use crate::startup::require;
use crate::{IncubatorResult, MentorId, StartupId};
use serde::{Deserialize, Serialize};

/// A mentor in the incubator network
///
/// No capacity limit is enforced on `assigned_startups`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Mentor {
    pub id: MentorId,
    pub name: String,
    pub email: String,
    pub expertise: Vec<String>,
    pub assigned_startups: Vec<StartupId>,
    pub bio: String,
}

impl Mentor {
    pub fn from_profile(profile: MentorProfile) -> IncubatorResult<Self> {
        profile.validate()?;
        Ok(Self {
            id: MentorId::generate(),
            name: profile.name.trim().to_string(),
            email: profile.email.trim().to_string(),
            expertise: profile.expertise,
            assigned_startups: Vec::new(),
            bio: profile.bio,
        })
    }

    pub fn with_id(mut self, id: MentorId) -> Self {
        self.id = id;
        self
    }

    pub fn is_assigned(&self, startup: &StartupId) -> bool {
        self.assigned_startups.contains(startup)
    }
}

/// Profile submitted when adding a mentor
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MentorProfile {
    pub name: String,
    pub email: String,
    pub expertise: Vec<String>,
    pub bio: String,
}

impl MentorProfile {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    pub fn with_expertise(mut self, area: impl Into<String>) -> Self {
        self.expertise.push(area.into());
        self
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = bio.into();
        self
    }

    pub fn validate(&self) -> IncubatorResult<()> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        Ok(())
    }
}
