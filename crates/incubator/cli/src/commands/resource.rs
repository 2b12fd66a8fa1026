//! Resource commands

use super::{funding::show_outcome, parse_line};
use crate::error::CliResult;
use crate::output::{self, OutputFormat};
use incubator_runtime::Incubator;
use incubator_types::{PoolId, ProposedLine, ResourceId};
use tabled::Tabled;

/// Resource subcommands
#[derive(clap::Subcommand)]
pub enum ResourceCommands {
    /// List resources with utilization
    List,

    /// Set a resource's allocated count
    Allocate {
        /// Resource ID
        resource: String,

        /// Allocated count (not limited to availability)
        count: u64,
    },

    /// Replace a resource's per-startup allocations
    Assign {
        /// Resource ID
        resource: String,

        /// Allocation lines as RECIPIENT=COUNT
        #[arg(required = true, value_parser = parse_line)]
        lines: Vec<ProposedLine>,
    },
}

#[derive(Tabled)]
struct ResourceRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    resource_type: String,
    #[tabled(rename = "Available")]
    availability: u64,
    #[tabled(rename = "Allocated")]
    allocated: u64,
    #[tabled(rename = "Remaining")]
    remaining: i64,
    #[tabled(rename = "Utilization")]
    utilization: String,
}

/// Execute resource command
pub fn execute(
    command: ResourceCommands,
    incubator: &mut Incubator,
    format: OutputFormat,
) -> CliResult<()> {
    match command {
        ResourceCommands::List => list_resources(incubator, format),
        ResourceCommands::Allocate { resource, count } => {
            let outcome = incubator.set_resource_allocated(&ResourceId::new(resource), count)?;
            show_outcome(&outcome, "Resource allocation updated", format)
        }
        ResourceCommands::Assign { resource, lines } => {
            let pool = PoolId::Resource(ResourceId::new(resource));
            let outcome = incubator.set_allocations(&pool, lines)?;
            show_outcome(&outcome, "Allocations replaced", format)
        }
    }
}

fn list_resources(incubator: &Incubator, format: OutputFormat) -> CliResult<()> {
    let catalog = incubator.catalog();
    let outcomes: Vec<_> = catalog
        .resources
        .iter()
        .map(|r| (r, incubator.ledger().outcome(r)))
        .collect();

    let rows: Vec<ResourceRow> = outcomes
        .iter()
        .map(|(r, o)| ResourceRow {
            id: r.id.to_string(),
            name: r.name.clone(),
            resource_type: r.resource_type.to_string(),
            availability: o.capacity,
            allocated: o.allocated,
            remaining: o.remaining,
            utilization: format!("{:.1}% {}", o.utilization.percent, o.utilization.tier),
        })
        .collect();

    let summaries: Vec<_> = outcomes.into_iter().map(|(_, o)| o).collect();
    output::print_output(&summaries, rows, format)
}
