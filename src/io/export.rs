//! CSV export for production plans.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::dispatch::types::AllocationPlan;

/// Column header for CSV plan export.
const HEADER: [&str; 2] = ["name", "p"];

/// Exports a plan to a CSV file at the given path.
///
/// Writes a header row followed by one row per plan entry, in merit order.
///
/// # Arguments
///
/// * `plan` - Allocation plan to export
/// * `path` - Output file path
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(plan: &AllocationPlan, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(plan, buf)
}

/// Writes a plan as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(plan: &AllocationPlan, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER)?;
    for entry in plan {
        let p = format!("{:.1}", entry.p);
        wtr.write_record([entry.name.as_str(), p.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::types::AllocationEntry;

    fn make_plan() -> AllocationPlan {
        AllocationPlan::from(vec![
            AllocationEntry::new("windpark1", 90.0),
            AllocationEntry::new("windpark2", 21.6),
            AllocationEntry::new("gasfiredbig1", 368.4),
        ])
    }

    fn render(plan: &AllocationPlan) -> String {
        let mut buf = Vec::new();
        write_csv(plan, &mut buf).expect("csv export should succeed");
        String::from_utf8(buf).expect("csv output should be valid UTF-8")
    }

    #[test]
    fn header_then_one_row_per_entry() {
        let output = render(&make_plan());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            ["name,p", "windpark1,90.0", "windpark2,21.6", "gasfiredbig1,368.4"]
        );
    }

    #[test]
    fn empty_plan_writes_header_only() {
        let output = render(&AllocationPlan::default());
        assert_eq!(output.lines().collect::<Vec<_>>(), ["name,p"]);
    }

    #[test]
    fn names_with_commas_are_quoted() {
        let plan = AllocationPlan::from(vec![AllocationEntry::new("park, north", 12.5)]);
        let output = render(&plan);

        let mut rdr = csv::ReaderBuilder::new().from_reader(output.as_bytes());
        let records: Vec<csv::StringRecord> = rdr.records().filter_map(Result::ok).collect();
        assert_eq!(records.len(), 1);
        assert_eq!(&records[0][0], "park, north");
        assert_eq!(records[0][1].parse::<f64>().ok(), Some(12.5));
    }
}
