//! CLI command implementations

pub mod catalog;
pub mod dashboard;
pub mod funding;
pub mod report;
pub mod resource;

use crate::error::CliError;
use incubator_types::ProposedLine;

/// Parse a `RECIPIENT=AMOUNT` argument
pub fn parse_line(arg: &str) -> Result<ProposedLine, CliError> {
    let (recipient, amount) = arg.split_once('=').ok_or_else(|| {
        CliError::InvalidArgument(format!("expected RECIPIENT=AMOUNT, got '{}'", arg))
    })?;

    let recipient = recipient.trim();
    if recipient.is_empty() {
        return Err(CliError::InvalidArgument(format!("missing recipient in '{}'", arg)));
    }

    let amount: i64 = amount
        .trim()
        .parse()
        .map_err(|_| CliError::InvalidArgument(format!("invalid amount in '{}'", arg)))?;

    Ok(ProposedLine::new(recipient, amount))
}
