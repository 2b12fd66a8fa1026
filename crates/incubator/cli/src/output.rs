//! Output formatting utilities

use crate::error::CliResult;
use colored::*;
use incubator_types::UtilizationTier;
use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, clap::ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Print table rows, or the structured data behind them for json/yaml
pub fn print_output<D, T>(data: &D, rows: Vec<T>, format: OutputFormat) -> CliResult<()>
where
    D: Serialize + ?Sized,
    T: Tabled,
{
    match format {
        OutputFormat::Table => {
            print_table(rows);
            Ok(())
        }
        _ => print_structured(data, format),
    }
}

pub fn print_table<T: Tabled>(rows: Vec<T>) {
    if rows.is_empty() {
        println!("{}", "No results".dimmed());
    } else {
        println!("{}", Table::new(rows));
    }
}

/// Print a value as JSON or YAML. Table falls back to pretty JSON.
pub fn print_structured<T: Serialize + ?Sized>(data: &T, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table | OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(data)?);
        }
    }
    Ok(())
}

pub fn print_header(title: &str) {
    println!("{}", title.bold().cyan());
    println!("{}", "=".repeat(title.chars().count().max(40)));
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// Utilization percentage coloured by tier
pub fn utilization_label(percent: f64, tier: UtilizationTier) -> ColoredString {
    let text = format!("{:.1}%", percent);
    match tier {
        UtilizationTier::Normal => text.green(),
        UtilizationTier::Warning => text.yellow(),
        UtilizationTier::Critical => text.red(),
        UtilizationTier::Over => text.red().bold(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_default() {
        let format = OutputFormat::default();
        assert!(matches!(format, OutputFormat::Table));
    }

    #[test]
    fn test_utilization_label_text() {
        colored::control::set_override(false);
        assert_eq!(
            utilization_label(125.0, UtilizationTier::Over).to_string(),
            "125.0%"
        );
    }
}
