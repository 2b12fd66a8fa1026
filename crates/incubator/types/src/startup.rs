//! Startups: the recipients of every allocation

use crate::{Amount, IncubatorError, IncubatorResult, MentorId, StartupId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Progress assigned to a freshly registered startup
pub const INITIAL_PROGRESS: u8 = 10;

/// Upper bound for the progress percentage
pub const MAX_PROGRESS: u8 = 100;

/// Maturity stage of a startup
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    #[default]
    Idea,
    Mvp,
    Growth,
    Scaling,
}

impl Stage {
    pub const ALL: [Stage; 4] = [Stage::Idea, Stage::Mvp, Stage::Growth, Stage::Scaling];
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Stage::Idea => "idea",
            Stage::Mvp => "mvp",
            Stage::Growth => "growth",
            Stage::Scaling => "scaling",
        };
        write!(f, "{}", label)
    }
}

impl std::str::FromStr for Stage {
    type Err = IncubatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "idea" => Ok(Stage::Idea),
            "mvp" => Ok(Stage::Mvp),
            "growth" => Ok(Stage::Growth),
            "scaling" => Ok(Stage::Scaling),
            other => Err(IncubatorError::InvalidInput(format!("unknown stage: {}", other))),
        }
    }
}

/// A startup enrolled in the programme
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Startup {
    pub id: StartupId,
    pub name: String,
    pub description: String,
    pub founder_name: String,
    pub founder_email: String,
    pub industry: String,
    pub stage: Stage,
    /// Assigned mentor, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mentor_id: Option<MentorId>,
    pub funding_needed: Amount,
    pub funding_received: Amount,
    /// Completion percentage, 0-100
    pub progress: u8,
    pub created_at: DateTime<Utc>,
}

impl Startup {
    /// Build a startup from a validated registration
    pub fn from_registration(registration: StartupRegistration) -> IncubatorResult<Self> {
        registration.validate()?;
        Ok(Self {
            id: StartupId::generate(),
            name: registration.name.trim().to_string(),
            description: registration.description,
            founder_name: registration.founder_name.trim().to_string(),
            founder_email: registration.founder_email.trim().to_string(),
            industry: registration.industry,
            stage: registration.stage,
            mentor_id: None,
            funding_needed: registration.funding_needed,
            funding_received: Amount::zero(),
            progress: INITIAL_PROGRESS,
            created_at: Utc::now(),
        })
    }

    pub fn with_id(mut self, id: StartupId) -> Self {
        self.id = id;
        self
    }

    /// Funding received as a percentage of funding needed
    pub fn funding_ratio(&self) -> f64 {
        if self.funding_needed.is_zero() {
            return 0.0;
        }
        self.funding_received.0 as f64 / self.funding_needed.0 as f64 * 100.0
    }
}

/// Registration form submitted by a founder
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StartupRegistration {
    pub name: String,
    pub description: String,
    pub founder_name: String,
    pub founder_email: String,
    pub industry: String,
    pub stage: Stage,
    pub funding_needed: Amount,
}

impl StartupRegistration {
    pub fn new(
        name: impl Into<String>,
        founder_name: impl Into<String>,
        founder_email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            founder_name: founder_name.into(),
            founder_email: founder_email.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = industry.into();
        self
    }

    pub fn with_stage(mut self, stage: Stage) -> Self {
        self.stage = stage;
        self
    }

    pub fn with_funding_needed(mut self, amount: Amount) -> Self {
        self.funding_needed = amount;
        self
    }

    /// Required fields: name, founder name, founder email
    pub fn validate(&self) -> IncubatorResult<()> {
        require("name", &self.name)?;
        require("founder_name", &self.founder_name)?;
        require("founder_email", &self.founder_email)?;
        Ok(())
    }
}

/// Reject blank required fields
pub(crate) fn require(field: &'static str, value: &str) -> IncubatorResult<()> {
    if value.trim().is_empty() {
        return Err(IncubatorError::MissingField(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_defaults() {
        let startup = Startup::from_registration(
            StartupRegistration::new("TechVenture Inc", "Ada", "ada@techventure.io")
                .with_funding_needed(Amount::new(200_000)),
        )
        .unwrap();

        assert_eq!(startup.progress, INITIAL_PROGRESS);
        assert_eq!(startup.funding_received, Amount::zero());
        assert_eq!(startup.stage, Stage::Idea);
        assert!(startup.mentor_id.is_none());
        assert!(startup.id.as_str().starts_with("startup-"));
    }

    #[test]
    fn test_registration_requires_founder_email() {
        let result =
            Startup::from_registration(StartupRegistration::new("TechVenture", "Ada", "   "));
        assert!(matches!(
            result,
            Err(IncubatorError::MissingField("founder_email"))
        ));
    }

    #[test]
    fn test_funding_ratio_handles_zero_need() {
        let mut startup =
            Startup::from_registration(StartupRegistration::new("A", "B", "c@d.e")).unwrap();
        assert_eq!(startup.funding_ratio(), 0.0);

        startup.funding_needed = Amount::new(200);
        startup.funding_received = Amount::new(50);
        assert_eq!(startup.funding_ratio(), 25.0);
    }

    #[test]
    fn test_stage_parse() {
        assert_eq!("MVP".parse::<Stage>().unwrap(), Stage::Mvp);
        assert!("seed".parse::<Stage>().is_err());
    }
}
