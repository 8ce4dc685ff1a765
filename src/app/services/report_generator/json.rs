//! JSON report: the full summary, pretty-printed

use crate::Result;
use crate::app::services::aggregators::CatalogSummary;
use std::io::Write;

/// Write the JSON report
pub fn generate<W: Write>(summary: &CatalogSummary, writer: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, summary)?;
    writeln!(writer)?;
    Ok(())
}
