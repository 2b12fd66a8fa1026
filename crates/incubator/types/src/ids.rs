//! Identifier newtypes
//!
//! Every catalog record is keyed by a string id. Generated ids carry a
//! kind prefix (`startup-…`, `round-…`) so they stay readable in reports.

use serde::{Deserialize, Serialize};

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Generate a new random id with the kind prefix
            pub fn generate() -> Self {
                Self(format!(concat!($prefix, "-{}"), uuid::Uuid::new_v4()))
            }

            /// Create an id from a known string
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }
    };
}

record_id!(
    /// Unique identifier for a startup (the allocation recipient)
    StartupId,
    "startup"
);
record_id!(
    /// Unique identifier for a mentor
    MentorId,
    "mentor"
);
record_id!(
    /// Unique identifier for a programme event
    EventId,
    "event"
);
record_id!(
    /// Unique identifier for a shared resource
    ResourceId,
    "res"
);
record_id!(
    /// Unique identifier for a funding round
    FundingRoundId,
    "round"
);
record_id!(
    /// Unique identifier for a dashboard user
    UserId,
    "user"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_carry_prefix() {
        let id = StartupId::generate();
        assert!(id.as_str().starts_with("startup-"));
        assert_ne!(id, StartupId::generate());

        assert!(FundingRoundId::generate().as_str().starts_with("round-"));
        assert!(ResourceId::generate().as_str().starts_with("res-"));
    }

    #[test]
    fn test_display_and_from() {
        let id: MentorId = "mentor-1".into();
        assert_eq!(format!("{}", id), "mentor-1");
        assert_eq!(id, MentorId::new("mentor-1"));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&EventId::new("event-7")).unwrap();
        assert_eq!(json, "\"event-7\"");
    }
}
