//! Output formatting utilities.

use colored::Colorize;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// A finished command result, ready to print in any format.
pub struct Rendered<'a, T: Serialize> {
    /// Section title shown above the table.
    pub title: &'a str,
    /// Rows for table and CSV output.
    pub rows: Vec<KeyValue>,
    /// Structured value for JSON output.
    pub value: &'a T,
    /// Single-line value for minimal output.
    pub minimal: String,
}

impl<T: Serialize> Rendered<'_, T> {
    /// Prints in the requested format.
    pub fn print(&self, format: OutputFormat, quiet: bool) -> anyhow::Result<()> {
        match format {
            OutputFormat::Table => {
                if !quiet {
                    print_header(self.title);
                }
                print_table(&self.rows)
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(self.value)?);
                Ok(())
            }
            OutputFormat::Csv => print_csv(&self.rows),
            OutputFormat::Minimal => {
                println!("{}", self.minimal);
                Ok(())
            }
        }
    }
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    if data.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
    Ok(())
}

/// Prints data as CSV.
fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Formats a decimal as a percentage string.
pub fn format_percent(value: Decimal) -> String {
    format!("{}%", value.normalize())
}

/// Formats a monetary amount, padding to at least two decimals.
pub fn format_amount(value: Decimal) -> String {
    let mut padded = value;
    if padded.scale() < 2 {
        padded.rescale(2);
    }
    padded.to_string()
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    #[serde(rename = "metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a key-value pair for a monetary amount.
    pub fn amount(key: impl Into<String>, value: Decimal) -> Self {
        Self::new(key, format_amount(value))
    }

    /// Creates a key-value pair for a value already in percent.
    pub fn percent(key: impl Into<String>, value: Decimal) -> Self {
        Self::new(key, format_percent(value))
    }
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}
