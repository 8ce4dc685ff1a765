//! Excel report generation.

use super::sections::{Cell, build_sections};
use crate::{Error, Result};
use crate::app::services::aggregators::CatalogSummary;
use rust_xlsxwriter::{Format, Workbook};
use std::io::Write;

/// Excel's per-cell string length limit
const MAX_CELL_CHARS: usize = 32_767;

/// Generate an Excel workbook with one worksheet per section
///
/// # Errors
///
/// Returns an error if the workbook cannot be built or written
pub fn generate<W: Write>(summary: &CatalogSummary, writer: &mut W) -> Result<()> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    for section in build_sections(summary) {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(section.title)?;

        for (col, header) in section.headers.iter().enumerate() {
            let c = u16::try_from(col).unwrap_or(u16::MAX);
            worksheet.write_string_with_format(0, c, *header, &bold)?;
        }

        for (row_index, row) in section.rows.iter().enumerate() {
            let r = u32::try_from(row_index + 1).unwrap_or(u32::MAX);
            for (col, cell) in row.iter().enumerate() {
                let c = u16::try_from(col).unwrap_or(u16::MAX);
                match cell {
                    Cell::Text(text) => {
                        worksheet.write_string(r, c, truncate_cell(text))?;
                    }
                    Cell::Integer(value) => {
                        worksheet.write_number(r, c, *value as f64)?;
                    }
                    Cell::Decimal(value) => {
                        worksheet.write_number(r, c, *value)?;
                    }
                }
            }
        }
    }

    let buffer = workbook
        .save_to_buffer()
        .map_err(|e| Error::report_writing("Failed to build Excel workbook", e))?;
    writer.write_all(&buffer)?;
    Ok(())
}

/// Clip text to the longest string a cell can hold
fn truncate_cell(text: &str) -> &str {
    match text.char_indices().nth(MAX_CELL_CHARS) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
