//! Sample data for demos and the CLI

use incubator_types::{
    Amount, Catalog, FundingRound, FundingRoundId, Mentor, MentorId, Resource, ResourceId,
    ResourceType, RoundStatus,
};

fn mentor(id: &str, name: &str, email: &str, expertise: &[&str], bio: &str) -> Mentor {
    Mentor {
        id: MentorId::new(id),
        name: name.to_string(),
        email: email.to_string(),
        expertise: expertise.iter().map(|e| e.to_string()).collect(),
        assigned_startups: Vec::new(),
        bio: bio.to_string(),
    }
}

/// A catalog with two mentors, three resources and one open funding round
pub fn sample_catalog() -> Catalog {
    let mut catalog = Catalog::new();

    catalog.insert_mentor(mentor(
        "mentor-1",
        "Sarah Chen",
        "sarah@mentors.com",
        &["Product Strategy", "Growth Marketing", "B2B SaaS"],
        "Former VP of Product at TechCorp with 15 years experience",
    ));
    catalog.insert_mentor(mentor(
        "mentor-2",
        "James Wilson",
        "james@mentors.com",
        &["Fundraising", "Finance", "Operations"],
        "Serial entrepreneur and investor",
    ));

    catalog.insert_resource(
        Resource::new("Office Space - Desk", ResourceType::OfficeSpace, 20)
            .with_id(ResourceId::new("res-1"))
            .with_allocated(5)
            .with_description("Dedicated desk in shared office"),
    );
    catalog.insert_resource(
        Resource::new("Meeting Room", ResourceType::OfficeSpace, 5)
            .with_id(ResourceId::new("res-2"))
            .with_allocated(2)
            .with_description("Private meeting room for 8 people"),
    );
    catalog.insert_resource(
        Resource::new("AWS Credits", ResourceType::Software, 50_000)
            .with_id(ResourceId::new("res-3"))
            .with_allocated(15_000)
            .with_description("Cloud computing credits"),
    );

    catalog.insert_funding_round(
        FundingRound::new("Seed Round 2024", Amount::new(500_000))
            .with_id(FundingRoundId::new("fund-1"))
            .with_status(RoundStatus::Open),
    );

    catalog
}
