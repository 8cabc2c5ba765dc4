//! Schedule command implementation
//!
//! Generates a work rota over an inclusive date range.

use calendar_core::types::{Date, DateRange};
use calendar_schedules::schedules::{CyclePattern, WorkSchedule};
use clap::ValueEnum;
use tracing::info;

use crate::Result;

/// How generated dates are printed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One DD-MM-YYYY date per line
    Dmy,
    /// One YYYY-MM-DD date per line
    Iso,
    /// The full rota as a JSON document
    Json,
}

/// Run the schedule command
pub fn run(start: Date, end: Date, work: i64, off: i64, format: OutputFormat) -> Result<()> {
    info!("Generating rota...");
    info!("  Range: {} to {}", start, end);
    info!("  Cycle: {} on / {} off", work, off);

    let output = render(start, end, work, off, format)?;
    if !output.is_empty() {
        println!("{}", output);
    }

    info!("Rota complete");
    Ok(())
}

/// Generates the rota and renders it in `format`.
pub fn render(start: Date, end: Date, work: i64, off: i64, format: OutputFormat) -> Result<String> {
    let pattern = CyclePattern::new(work, off)?;
    let rota = WorkSchedule::generate(DateRange::new(start, end), pattern);

    let output = match format {
        OutputFormat::Dmy => rota.format_dates().join("\n"),
        OutputFormat::Iso => rota
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => serde_json::to_string_pretty(&rota)?,
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;

    fn dmy(s: &str) -> Date {
        Date::parse_dmy(s).unwrap()
    }

    #[test]
    fn test_render_dmy() {
        let out = render(dmy("01-01-2024"), dmy("15-01-2024"), 1, 3, OutputFormat::Dmy).unwrap();
        assert_eq!(out, "01-01-2024\n05-01-2024\n09-01-2024\n13-01-2024");
    }

    #[test]
    fn test_render_iso() {
        let out = render(dmy("01-01-2024"), dmy("05-01-2024"), 1, 1, OutputFormat::Iso).unwrap();
        assert_eq!(out, "2024-01-01\n2024-01-03\n2024-01-05");
    }

    #[test]
    fn test_render_json() {
        let out = render(dmy("01-01-2024"), dmy("03-01-2024"), 2, 1, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["dates"], serde_json::json!(["2024-01-01", "2024-01-02"]));
        assert_eq!(value["pattern"]["off_length"], 1);
    }

    #[test]
    fn test_render_reversed_range_is_empty() {
        let out = render(dmy("15-01-2024"), dmy("01-01-2024"), 1, 3, OutputFormat::Dmy).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_render_rejects_zero_work() {
        let result = render(dmy("01-01-2024"), dmy("15-01-2024"), 0, 3, OutputFormat::Dmy);
        assert!(matches!(result, Err(CliError::Schedule(_))));
    }
}
