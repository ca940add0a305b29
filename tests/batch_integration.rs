//! Integration tests for folder modes.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use walkdir::WalkDir;

use codeassist::batch::{self, BatchMode};
use codeassist::client::mock::MockClient;
use codeassist::client::{CompletionError, ERROR_SENTINEL_PREFIX};
use codeassist::core::config::Settings;
use codeassist::ui::output::RecordingReporter;

/// Build `<tmp>/proj` with a mix of supported and unsupported files.
fn project() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let root = dir.path().join("proj");
    for (rel, content) in [
        ("main.py", "print('main')"),
        ("lib/util.rs", "fn util() {}"),
        ("lib/deep/view.TSX", "export {}"),
        ("web/index.html", "<html></html>"),
        ("README.md", "# readme"),
        ("Makefile", "all:"),
        ("data/blob.bin", "\u{1}\u{2}"),
    ] {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    (dir, root)
}

fn snapshot(root: &Path) -> Vec<(PathBuf, String)> {
    let mut entries: Vec<_> = walkdir_files(root)
        .into_iter()
        .map(|p| {
            let content = fs::read_to_string(root.join(&p)).unwrap_or_default();
            (p, content)
        })
        .collect();
    entries.sort();
    entries
}

fn walkdir_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .map(|e| e.unwrap())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
        .collect()
}

#[tokio::test]
async fn refactor_folder_mirrors_supported_files_only() {
    let (dir, root) = project();
    let client = MockClient::replying("REFACTORED");
    let reporter = RecordingReporter::new();

    let summary = batch::process(
        &root,
        BatchMode::Refactor,
        &client,
        &Settings::default(),
        &reporter,
    )
    .await
    .unwrap()
    .expect("folder exists");

    let out = dir.path().join("proj_refactored");
    assert_eq!(summary.output_root, out);
    assert_eq!(summary.processed, 4);
    assert_eq!(summary.failed, 0);

    let mut written = walkdir_files(&out);
    written.sort();
    assert_eq!(
        written,
        vec![
            PathBuf::from("lib/deep/view.TSX"),
            PathBuf::from("lib/util.rs"),
            PathBuf::from("main.py"),
            PathBuf::from("web/index.html"),
        ]
    );
    for rel in &written {
        assert_eq!(fs::read_to_string(out.join(rel)).unwrap(), "REFACTORED");
    }
    assert_eq!(client.call_count(), 4);
}

#[tokio::test]
async fn source_tree_is_untouched() {
    let (_dir, root) = project();
    let before = snapshot(&root);

    batch::process(
        &root,
        BatchMode::Rewrite,
        &MockClient::replying("X"),
        &Settings::default(),
        &RecordingReporter::new(),
    )
    .await
    .unwrap();

    assert_eq!(snapshot(&root), before);
}

#[tokio::test]
async fn always_failing_client_still_writes_every_file() {
    let (dir, root) = project();
    let client = MockClient::failing(CompletionError::NetworkError("connection refused".into()));
    let reporter = RecordingReporter::new();

    let summary = batch::process(
        &root,
        BatchMode::Fix,
        &client,
        &Settings::default(),
        &reporter,
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(summary.processed, 4);
    assert_eq!(summary.failed, 4);

    let out = dir.path().join("proj_fixed");
    for rel in walkdir_files(&out) {
        let content = fs::read_to_string(out.join(&rel)).unwrap();
        assert!(content.starts_with(ERROR_SENTINEL_PREFIX), "{}", rel.display());
        assert!(content.contains("connection refused"));
    }
    assert!(reporter
        .lines()
        .iter()
        .any(|l| l.starts_with("[WARN]") && l.contains("4 of 4")));
}

#[tokio::test]
async fn missing_folder_reports_and_does_nothing() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("nope");
    let client = MockClient::replying("X");
    let reporter = RecordingReporter::new();

    let summary = batch::process(
        &root,
        BatchMode::Fix,
        &client,
        &Settings::default(),
        &reporter,
    )
    .await
    .unwrap();

    assert!(summary.is_none());
    assert_eq!(client.call_count(), 0);
    assert!(!dir.path().join("nope_fixed").exists());
    assert!(reporter.lines()[0].starts_with("[ERROR] Folder not found or not a directory"));
}

#[tokio::test]
async fn files_processed_in_lexicographic_order() {
    let (_dir, root) = project();
    let client = MockClient::replying("X");

    batch::process(
        &root,
        BatchMode::Refactor,
        &client,
        &Settings::default(),
        &RecordingReporter::new(),
    )
    .await
    .unwrap();

    let order: Vec<bool> = client
        .prompts()
        .iter()
        .map(|p| p.contains("view.TSX"))
        .collect();
    assert_eq!(order, vec![true, false, false, false]);
}
