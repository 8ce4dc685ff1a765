//! Tabular report sections
//!
//! Every report format renders the same ordered list of sections built here
//! from a [`CatalogSummary`], so formats differ only in layout.

use crate::app::services::aggregators::CatalogSummary;

/// Separator used when a list of titles is written into one cell
pub const TITLE_SEPARATOR: &str = "; ";

/// One table cell
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Integer(i64),
    Decimal(f64),
}

impl Cell {
    /// Plain-text rendering used by the text and CSV reports
    pub fn render(&self) -> String {
        match self {
            Cell::Text(text) => text.clone(),
            Cell::Integer(value) => value.to_string(),
            Cell::Decimal(value) => format!("{:.2}", value),
        }
    }

    /// Right-align numbers in text tables
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Cell::Text(_))
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<usize> for Cell {
    fn from(value: usize) -> Self {
        Cell::Integer(value as i64)
    }
}

impl From<u32> for Cell {
    fn from(value: u32) -> Self {
        Cell::Integer(i64::from(value))
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Cell::Integer(i64::from(value))
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Decimal(value)
    }
}

/// A titled table of one aggregate
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSection {
    pub title: &'static str,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<Cell>>,
}

impl ReportSection {
    fn new(title: &'static str, headers: &[&'static str]) -> Self {
        Self {
            title,
            headers: headers.to_vec(),
            rows: Vec::new(),
        }
    }

    fn row(mut self, cells: Vec<Cell>) -> Self {
        self.rows.push(cells);
        self
    }

    fn rows<I>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = Vec<Cell>>,
    {
        self.rows.extend(rows);
        self
    }
}

fn join_titles(titles: &[String]) -> Cell {
    Cell::Text(titles.join(TITLE_SEPARATOR))
}

/// Build the report sections in their fixed order
pub fn build_sections(summary: &CatalogSummary) -> Vec<ReportSection> {
    vec![
        ReportSection::new("Columns", &["Column"]).rows(
            summary
                .columns
                .iter()
                .map(|column| vec![Cell::from(column.as_str())]),
        ),
        ReportSection::new("Total Movies", &["Count", "Percentage"]).row(vec![
            summary.movies.count.into(),
            summary.movies.percentage.into(),
        ]),
        ReportSection::new("Total Series", &["Count", "Percentage"]).row(vec![
            summary.series.count.into(),
            summary.series.percentage.into(),
        ]),
        ReportSection::new("Top Directors", &["Director", "Count"]).rows(
            summary
                .top_directors
                .iter()
                .map(|d| vec![d.director.as_str().into(), d.count.into()]),
        ),
        ReportSection::new("Directors as Actors", &["Director", "Count", "Titles"]).rows(
            summary.directors_as_actors.iter().map(|d| {
                vec![
                    d.director.as_str().into(),
                    d.count.into(),
                    join_titles(&d.titles),
                ]
            }),
        ),
        ReportSection::new("Titles by Year", &["Year", "Count", "Percentage"]).rows(
            summary
                .titles_by_year
                .iter()
                .map(|y| vec![y.year.into(), y.count.into(), y.percentage.into()]),
        ),
        ReportSection::new("Titles by Rating", &["Rating", "Total", "Titles"]).rows(
            summary.titles_by_rating.iter().map(|r| {
                vec![
                    r.rating.as_str().into(),
                    r.total.into(),
                    join_titles(&r.titles),
                ]
            }),
        ),
        ReportSection::new("Longest Movies", &["Title", "Duration (min)"]).rows(
            summary
                .longest_movies
                .iter()
                .map(|m| vec![m.title.as_str().into(), m.duration.into()]),
        ),
        ReportSection::new("Longest Series", &["Title", "Seasons"]).rows(
            summary
                .longest_series
                .iter()
                .map(|s| vec![s.title.as_str().into(), s.seasons.into()]),
        ),
        ReportSection::new(
            "Titles by Country",
            &["Country", "Total", "Percentage", "Titles"],
        )
        .rows(summary.titles_by_country.iter().map(|c| {
            vec![
                c.country.as_str().into(),
                c.total.into(),
                c.percentage.into(),
                join_titles(&c.titles),
            ]
        })),
    ]
}
