use tempfile::TempDir;

use facescan_signup::core::export::export_csv;
use facescan_signup::{HttpCollector, JsonFileStore, SignupSubmitter};

#[tokio::test]
async fn test_export_writes_csv_with_header_and_rows() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp_dir.path(), "facescan_signups");
    let submitter = SignupSubmitter::<HttpCollector, _>::new(None, store.clone());

    submitter.submit("a@b.com").await.unwrap();
    submitter.submit("c@d.com").await.unwrap();

    let output_path = temp_dir.path().join("signups.csv");
    let count = export_csv(&store, output_path.to_str().unwrap()).await.unwrap();

    assert_eq!(count, 2);

    let content = std::fs::read_to_string(&output_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "email,timestamp");
    assert!(lines[1].starts_with("a@b.com,"));
    assert!(lines[2].starts_with("c@d.com,"));
}

#[tokio::test]
async fn test_export_of_empty_store_writes_header_only() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp_dir.path(), "facescan_signups");

    let output_path = temp_dir.path().join("signups.csv");
    let count = export_csv(&store, output_path.to_str().unwrap()).await.unwrap();

    assert_eq!(count, 0);

    let content = std::fs::read_to_string(&output_path).unwrap();
    assert_eq!(content.trim(), "email,timestamp");
}

#[tokio::test]
async fn test_export_creates_missing_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp_dir.path(), "facescan_signups");
    let submitter = SignupSubmitter::<HttpCollector, _>::new(None, store.clone());

    submitter.submit("a@b.com").await.unwrap();

    let output_path = temp_dir.path().join("exports/2026/signups.csv");
    let count = export_csv(&store, output_path.to_str().unwrap()).await.unwrap();

    assert_eq!(count, 1);
    assert!(output_path.exists());
}
