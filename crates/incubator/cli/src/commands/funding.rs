//! Funding round commands

use super::parse_line;
use crate::error::CliResult;
use crate::output::{self, OutputFormat};
use incubator_runtime::{AllocationOutcome, Incubator};
use incubator_types::{
    format_thousands, AllocationPool, FundingRoundId, PoolId, ProposedLine, StartupId,
};
use tabled::Tabled;

/// Funding subcommands
#[derive(clap::Subcommand)]
pub enum FundingCommands {
    /// List funding rounds
    List,

    /// Replace a round's allocations
    Allocate {
        /// Funding round ID
        round: String,

        /// Allocation lines as RECIPIENT=AMOUNT
        #[arg(required = true, value_parser = parse_line)]
        lines: Vec<ProposedLine>,
    },

    /// Remove one recipient's allocation from a round
    Remove {
        /// Funding round ID
        round: String,

        /// Startup ID to remove
        recipient: String,

        /// Lines to apply before removing, as RECIPIENT=AMOUNT
        #[arg(short, long = "line", value_parser = parse_line)]
        lines: Vec<ProposedLine>,
    },
}

#[derive(Tabled)]
struct RoundRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Allocated")]
    allocated: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Status")]
    status: String,
}

#[derive(Tabled)]
pub(crate) struct LineRow {
    #[tabled(rename = "Recipient")]
    recipient: String,
    #[tabled(rename = "Amount")]
    amount: u64,
}

/// Execute funding command
pub fn execute(
    command: FundingCommands,
    incubator: &mut Incubator,
    format: OutputFormat,
) -> CliResult<()> {
    match command {
        FundingCommands::List => list_rounds(incubator, format),
        FundingCommands::Allocate { round, lines } => {
            let pool = PoolId::Funding(FundingRoundId::new(round));
            let outcome = incubator.set_allocations(&pool, lines)?;
            show_outcome(&outcome, "Allocations replaced", format)
        }
        FundingCommands::Remove {
            round,
            recipient,
            lines,
        } => {
            let pool = PoolId::Funding(FundingRoundId::new(round));
            if !lines.is_empty() {
                incubator.set_allocations(&pool, lines)?;
            }
            let outcome = incubator.delete_recipient_allocation(&pool, &StartupId::new(recipient))?;
            show_outcome(&outcome, "Allocation removed", format)
        }
    }
}

fn list_rounds(incubator: &Incubator, format: OutputFormat) -> CliResult<()> {
    let rounds = &incubator.catalog().funding_rounds;
    let rows: Vec<RoundRow> = rounds
        .iter()
        .map(|r| RoundRow {
            id: r.id.to_string(),
            name: r.name.clone(),
            total: r.total_amount.thousands(),
            allocated: r.allocated_amount().thousands(),
            remaining: format_thousands(r.remaining() as i128),
            status: r.status.to_string(),
        })
        .collect();
    output::print_output(rounds, rows, format)
}

/// Print a pool outcome after a ledger mutation
pub(crate) fn show_outcome(
    outcome: &AllocationOutcome,
    message: &str,
    format: OutputFormat,
) -> CliResult<()> {
    match format {
        OutputFormat::Table => {
            output::print_success(&format!("{}: {}", message, outcome.pool));
            let rows: Vec<LineRow> = outcome
                .lines
                .iter()
                .map(|l| LineRow {
                    recipient: l.recipient.to_string(),
                    amount: l.amount,
                })
                .collect();
            output::print_table(rows);
            println!(
                "  Allocated {} of {}, remaining {}, utilization {}",
                outcome.allocated,
                outcome.capacity,
                outcome.remaining,
                output::utilization_label(outcome.utilization.percent, outcome.utilization.tier)
            );
        }
        _ => output::print_structured(outcome, format)?,
    }

    if outcome.is_over_allocated() && matches!(format, OutputFormat::Table) {
        output::print_warning(&format!(
            "{} is over-allocated by {}",
            outcome.name, outcome.over_by
        ));
    }
    Ok(())
}
