//! Error types for the incubator layer

use crate::{EventId, FundingRoundId, MentorId, ResourceId, StartupId};

/// Errors that can occur in incubator operations
///
/// Over-allocation is deliberately absent: it is a warning state carried
/// by allocation outcomes, never a failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IncubatorError {
    #[error("Startup not found: {0}")]
    StartupNotFound(StartupId),

    #[error("Mentor not found: {0}")]
    MentorNotFound(MentorId),

    #[error("Event not found: {0}")]
    EventNotFound(EventId),

    #[error("Resource not found: {0}")]
    ResourceNotFound(ResourceId),

    #[error("Funding round not found: {0}")]
    FundingRoundNotFound(FundingRoundId),

    #[error("Allocation pool not found: {0}")]
    PoolNotFound(String),

    /// No mentor or startup record matches a user's email
    #[error("No record for user: {0}")]
    UserNotFound(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl IncubatorError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            IncubatorError::StartupNotFound(_)
                | IncubatorError::MentorNotFound(_)
                | IncubatorError::EventNotFound(_)
                | IncubatorError::ResourceNotFound(_)
                | IncubatorError::FundingRoundNotFound(_)
                | IncubatorError::PoolNotFound(_)
                | IncubatorError::UserNotFound(_)
        )
    }
}

/// Result type alias for incubator operations
pub type IncubatorResult<T> = Result<T, IncubatorError>;
