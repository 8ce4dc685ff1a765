//! Plain-text report: one aligned table per section

use super::sections::{ReportSection, build_sections};
use crate::Result;
use crate::app::services::aggregators::CatalogSummary;
use std::io::Write;

/// Write the text report
pub fn generate<W: Write>(summary: &CatalogSummary, writer: &mut W) -> Result<()> {
    for section in build_sections(summary) {
        write_section(&section, writer)?;
        writeln!(writer)?;
    }
    Ok(())
}

fn write_section<W: Write>(section: &ReportSection, writer: &mut W) -> Result<()> {
    writeln!(writer, "{}", section.title)?;

    if section.rows.is_empty() {
        writeln!(writer, "(no data)")?;
        return Ok(());
    }

    let widths: Vec<usize> = section
        .headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            section
                .rows
                .iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.render().chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header_line: Vec<String> = section
        .headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| format!("{:<width$}", header, width = *width))
        .collect();
    writeln!(writer, "{}", header_line.join("  ").trim_end())?;

    for row in &section.rows {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| {
                if cell.is_numeric() {
                    format!("{:>width$}", cell.render(), width = *width)
                } else {
                    format!("{:<width$}", cell.render(), width = *width)
                }
            })
            .collect();
        writeln!(writer, "{}", line.join("  ").trim_end())?;
    }

    Ok(())
}
