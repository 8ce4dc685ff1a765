//! Tests for writing report files to disk

use super::*;
use crate::app::services::report_generator::{ReportFormat, ReportGenerator};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_report_path_layout() {
    let generator = ReportGenerator::with_timestamp("/reports", "2024-01-02_03-04-05");

    assert_eq!(
        generator.report_path(ReportFormat::Csv),
        PathBuf::from("/reports/csv/catalog_report_2024-01-02_03-04-05.csv")
    );
    assert_eq!(
        generator.report_path(ReportFormat::Xlsx),
        PathBuf::from("/reports/xlsx/catalog_report_2024-01-02_03-04-05.xlsx")
    );
}

#[test]
fn test_generate_writes_all_formats() {
    let temp_dir = TempDir::new().unwrap();
    let generator = ReportGenerator::with_timestamp(temp_dir.path(), "test");

    let paths = generator
        .generate(&sample_summary(), ReportFormat::all())
        .unwrap();

    assert_eq!(paths.len(), 4);
    for (path, format) in paths.iter().zip(ReportFormat::all()) {
        assert!(path.exists(), "missing {}", path.display());
        assert_eq!(
            path.extension().and_then(|e| e.to_str()),
            Some(format.extension())
        );
        assert!(std::fs::metadata(path).unwrap().len() > 0);
    }

    let text = std::fs::read_to_string(&paths[0]).unwrap();
    assert!(text.contains("Titles by Year"));
}

#[test]
fn test_generate_subset_of_formats() {
    let temp_dir = TempDir::new().unwrap();
    let generator = ReportGenerator::with_timestamp(temp_dir.path(), "subset");

    let paths = generator
        .generate(&empty_summary(), &[ReportFormat::Json])
        .unwrap();

    assert_eq!(paths.len(), 1);
    assert!(temp_dir.path().join("json").is_dir());
    assert!(!temp_dir.path().join("txt").exists());
}

#[test]
fn test_new_uses_timestamp_in_name() {
    let generator = ReportGenerator::new("out");
    let name = generator
        .report_path(ReportFormat::Txt)
        .file_name()
        .unwrap()
        .to_string_lossy()
        .to_string();

    assert!(name.starts_with("catalog_report_"));
    assert!(name.ends_with(".txt"));
    assert_eq!(generator.output_dir(), std::path::Path::new("out"));
}
