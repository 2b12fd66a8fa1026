//! Users, roles and the navigation each role sees

use crate::UserId;
use serde::{Deserialize, Serialize};

/// Dashboard role
///
/// Closed set: every view that differs by role matches on this enum once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Mentor,
    Founder,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Mentor, Role::Founder];

    /// Navigation sections available to this role, in menu order
    pub fn sections(&self) -> &'static [Section] {
        match self {
            Role::Admin => &[
                Section::Overview,
                Section::Startups,
                Section::Mentors,
                Section::Events,
                Section::Resources,
                Section::Funding,
                Section::Reports,
            ],
            Role::Mentor => &[
                Section::Overview,
                Section::Startups,
                Section::Messages,
                Section::Events,
            ],
            Role::Founder => &[
                Section::Overview,
                Section::Profile,
                Section::Mentor,
                Section::Resources,
                Section::Funding,
            ],
        }
    }

    pub fn can_view(&self, section: Section) -> bool {
        self.sections().contains(&section)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Role::Admin => "admin",
            Role::Mentor => "mentor",
            Role::Founder => "founder",
        };
        write!(f, "{}", label)
    }
}

impl std::str::FromStr for Role {
    type Err = crate::IncubatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "mentor" => Ok(Role::Mentor),
            "founder" => Ok(Role::Founder),
            other => Err(crate::IncubatorError::InvalidInput(format!(
                "unknown role: {}",
                other
            ))),
        }
    }
}

/// A dashboard section
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Overview,
    Startups,
    Mentors,
    Events,
    Resources,
    Funding,
    Reports,
    Messages,
    Profile,
    Mentor,
}

impl Section {
    /// Menu label; the same section reads differently per role
    pub fn label(&self, role: Role) -> &'static str {
        match (self, role) {
            (Section::Overview, Role::Founder) => "Dashboard",
            (Section::Overview, _) => "Overview",
            (Section::Startups, Role::Mentor) => "My Startups",
            (Section::Startups, _) => "Startups",
            (Section::Mentors, _) => "Mentors",
            (Section::Events, _) => "Events",
            (Section::Resources, _) => "Resources",
            (Section::Funding, _) => "Funding",
            (Section::Reports, _) => "Reports",
            (Section::Messages, _) => "Messages",
            (Section::Profile, _) => "My Profile",
            (Section::Mentor, _) => "Mentor",
        }
    }
}

/// A signed-in dashboard user
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            id: UserId::generate(),
            email: email.into(),
            name: name.into(),
            role,
        }
    }
}
