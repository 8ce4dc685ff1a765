//! Tests for the catalog loader


/// Header row of the real catalog export
pub const HEADER: &str =
    "show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in,description";

/// Build CSV content from the standard header and data lines
pub fn csv_content(lines: &[&str]) -> String {
    let mut content = String::from(HEADER);
    for line in lines {
        content.push('\n');
        content.push_str(line);
    }
    content.push('\n');
    content
}
