//! Shared resources (desks, rooms, credits, services)
//!
//! In the simple case a resource only tracks a bulk `allocated` count.
//! When it is allocated through line items the count is derived from them,
//! exactly like a funding round.

use crate::{canonical_lines, sum_lines, AllocationLine, AllocationPool, PoolId, ResourceId};
use serde::{Deserialize, Serialize};

/// Category of a shared resource
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceType {
    OfficeSpace,
    Software,
    Equipment,
    Service,
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ResourceType::OfficeSpace => "office-space",
            ResourceType::Software => "software",
            ResourceType::Equipment => "equipment",
            ResourceType::Service => "service",
        };
        write!(f, "{}", label)
    }
}

impl std::str::FromStr for ResourceType {
    type Err = crate::IncubatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "office-space" | "office_space" => Ok(ResourceType::OfficeSpace),
            "software" => Ok(ResourceType::Software),
            "equipment" => Ok(ResourceType::Equipment),
            "service" => Ok(ResourceType::Service),
            other => Err(crate::IncubatorError::InvalidInput(format!(
                "unknown resource type: {}",
                other
            ))),
        }
    }
}

/// A shared resource pool
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "ResourceRecord")]
pub struct Resource {
    pub id: ResourceId,
    pub name: String,
    pub resource_type: ResourceType,
    /// Capacity of the resource
    pub availability: u64,
    allocated: u64,
    allocations: Vec<AllocationLine>,
    pub description: String,
}

impl Resource {
    /// Create a resource with nothing allocated
    pub fn new(name: impl Into<String>, resource_type: ResourceType, availability: u64) -> Self {
        Self {
            id: ResourceId::generate(),
            name: name.into(),
            resource_type,
            availability,
            allocated: 0,
            allocations: Vec::new(),
            description: String::new(),
        }
    }

    pub fn with_id(mut self, id: ResourceId) -> Self {
        self.id = id;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Start from a bulk allocated count
    pub fn with_allocated(mut self, allocated: u64) -> Self {
        self.set_allocated(allocated);
        self
    }

    /// Set the bulk allocated count.
    ///
    /// A bulk count is not attributed to recipients, so any line items are
    /// cleared.
    pub fn set_allocated(&mut self, allocated: u64) {
        self.allocations.clear();
        self.allocated = allocated;
    }

    pub fn allocations(&self) -> &[AllocationLine] {
        &self.allocations
    }
}

impl AllocationPool for Resource {
    fn pool_id(&self) -> PoolId {
        PoolId::Resource(self.id.clone())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn capacity(&self) -> u64 {
        self.availability
    }

    fn allocated(&self) -> u64 {
        self.allocated
    }

    fn lines(&self) -> &[AllocationLine] {
        &self.allocations
    }

    fn replace_lines(&mut self, lines: Vec<AllocationLine>) {
        let lines = canonical_lines(lines);
        self.allocated = sum_lines(&lines);
        self.allocations = lines;
    }

    /// Clamped at zero; the excess is reported by `over_by`
    fn remaining(&self) -> i64 {
        self.availability
            .saturating_sub(self.allocated)
            .min(i64::MAX as u64) as i64
    }
}

/// Wire form; line items, when present, take precedence over the bulk count
#[derive(Deserialize)]
struct ResourceRecord {
    id: ResourceId,
    name: String,
    resource_type: ResourceType,
    availability: u64,
    #[serde(default)]
    allocated: u64,
    #[serde(default)]
    allocations: Vec<AllocationLine>,
    #[serde(default)]
    description: String,
}

impl From<ResourceRecord> for Resource {
    fn from(record: ResourceRecord) -> Self {
        let mut resource = Resource::new(record.name, record.resource_type, record.availability)
            .with_id(record.id)
            .with_description(record.description)
            .with_allocated(record.allocated);
        if !record.allocations.is_empty() {
            resource.replace_lines(record.allocations);
        }
        resource
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StartupId;

    #[test]
    fn test_bulk_allocation_over_capacity() {
        let mut desk = Resource::new("Desk", ResourceType::OfficeSpace, 20).with_allocated(5);
        assert_eq!(desk.remaining(), 15);

        desk.set_allocated(25);
        assert_eq!(desk.allocated(), 25);
        assert_eq!(desk.remaining(), 0);
        assert!(desk.is_over_allocated());
        assert_eq!(desk.over_by(), 5);
    }

    #[test]
    fn test_bulk_count_clears_lines() {
        let mut room = Resource::new("Meeting Room", ResourceType::OfficeSpace, 5);
        room.replace_lines(vec![
            AllocationLine::new(StartupId::new("s1"), 2),
            AllocationLine::new(StartupId::new("s2"), 1),
        ]);
        assert_eq!(room.allocated(), 3);

        room.set_allocated(4);
        assert!(room.allocations().is_empty());
        assert_eq!(room.allocated(), 4);
    }

    #[test]
    fn test_replace_lines_keeps_last_duplicate() {
        let mut room = Resource::new("Meeting Room", ResourceType::OfficeSpace, 5);
        room.replace_lines(vec![
            AllocationLine::new(StartupId::new("s1"), 2),
            AllocationLine::new(StartupId::new("s1"), 0),
            AllocationLine::new(StartupId::new("s2"), 1),
        ]);
        assert_eq!(room.allocations(), &[AllocationLine::new(StartupId::new("s2"), 1)]);
        assert_eq!(room.allocated(), 1);
    }

    #[test]
    fn test_resource_type_round_trip_labels() {
        assert_eq!(ResourceType::OfficeSpace.to_string(), "office-space");
        assert_eq!(
            "office-space".parse::<ResourceType>().unwrap(),
            ResourceType::OfficeSpace
        );
        assert!("lab".parse::<ResourceType>().is_err());
    }
}
