//! Output formatting utilities.

use colored::Colorize;
use credex_core::MeasureMap;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// Prints rows as a table or CSV, or `json` as pretty JSON.
///
/// JSON keeps the natural shape of the result; tables and CSV use the
/// flattened rows.
pub fn print_output<J, T>(json: &J, rows: &[T], format: OutputFormat) -> anyhow::Result<()>
where
    J: Serialize + ?Sized,
    T: Serialize + Tabled,
{
    match format {
        OutputFormat::Table => print_table(rows),
        OutputFormat::Json => print_json(json),
        OutputFormat::Csv => print_csv(rows),
    }
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(rows: &[T]) -> anyhow::Result<()> {
    if rows.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
    Ok(())
}

/// Prints data as JSON.
fn print_json<J: Serialize + ?Sized>(data: &J) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints data as CSV.
fn print_csv<T: Serialize>(rows: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// One measure value for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct MeasureRow {
    #[tabled(rename = "Measure")]
    pub measure: String,
    #[tabled(rename = "Value")]
    pub value: f64,
}

impl MeasureRow {
    /// Converts a measure map into rows, in key order.
    pub fn from_map(values: &MeasureMap) -> Vec<Self> {
        values
            .iter()
            .map(|(measure, value)| Self {
                measure: measure.to_string(),
                value: *value,
            })
            .collect()
    }
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Setting")]
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
}
