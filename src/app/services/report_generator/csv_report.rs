//! CSV report: sections written one after another
//!
//! Each section starts with a row holding its title, followed by its header
//! row and data rows, and ends with an empty row.

use super::sections::build_sections;
use crate::Result;
use crate::app::services::aggregators::CatalogSummary;
use std::io::Write;

/// Write the CSV report
pub fn generate<W: Write>(summary: &CatalogSummary, writer: &mut W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(writer);

    for section in build_sections(summary) {
        csv_writer.write_record([section.title])?;
        csv_writer.write_record(&section.headers)?;
        for row in &section.rows {
            csv_writer.write_record(row.iter().map(|cell| cell.render()))?;
        }
        csv_writer.write_record([""])?;
    }

    csv_writer.flush()?;
    Ok(())
}
