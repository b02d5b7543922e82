use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn learn_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("learn");
    path
}

const GUIDE: &str = "# Memory\n\nWorking memory holds a handful of items at once. It fades quickly without rehearsal.\n\nLong-term memory is durable but slower to write.\n\n# Practice\n\nRetrieval practice strengthens recall. Spacing sessions apart helps even more.";

fn setup_test_env() -> (TempDir, PathBuf, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().to_path_buf();

    let config_dir = root.join("config");
    fs::create_dir_all(&config_dir).unwrap();
    let config_path = config_dir.join("learn.toml");
    fs::write(
        &config_path,
        "[chunking]\nmin_chunk_size = 50\nmax_chunk_size = 400\n\n[output]\nformat = \"text\"\n",
    )
    .unwrap();

    let doc_path = root.join("guide.md");
    fs::write(&doc_path, GUIDE).unwrap();

    (tmp, config_path, doc_path)
}

fn run_learn(config_path: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = learn_binary();
    let output = Command::new(&binary)
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run learn binary at {:?}: {}", binary, e));

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();
    (stdout, stderr, success)
}

#[test]
fn test_chunk_text_output() {
    let (_tmp, config_path, doc) = setup_test_env();

    let (stdout, stderr, success) = run_learn(&config_path, &["chunk", doc.to_str().unwrap()]);
    assert!(success, "chunk failed: stdout={}, stderr={}", stdout, stderr);
    assert!(stdout.contains("Chunk 1: Memory (1 min)"));
    assert!(stdout.contains("Chunk 2: Practice (1 min)"));
    assert!(!stdout.contains("Chunk 3"));
}

#[test]
fn test_chunk_json_is_lossless() {
    let (_tmp, config_path, doc) = setup_test_env();

    let (stdout, _, success) = run_learn(
        &config_path,
        &["chunk", doc.to_str().unwrap(), "--format", "json"],
    );
    assert!(success);
    let chunks: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let contents: Vec<&str> = chunks
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["content"].as_str().unwrap())
        .collect();
    assert_eq!(contents.join("\n\n"), GUIDE);
    assert_eq!(chunks[0]["title"], "Memory");
}

#[test]
fn test_chunk_flags_override_config() {
    let (_tmp, config_path, doc) = setup_test_env();

    // A large minimum still lets top-level headings split.
    let (stdout, _, success) = run_learn(
        &config_path,
        &["chunk", doc.to_str().unwrap(), "--min", "5000", "--max", "9000"],
    );
    assert!(success);
    assert!(stdout.contains("Chunk 2: Practice"));
}

#[test]
fn test_inverted_flags_fail() {
    let (_tmp, config_path, doc) = setup_test_env();

    let (_, stderr, success) = run_learn(
        &config_path,
        &["chunk", doc.to_str().unwrap(), "--min", "900", "--max", "100"],
    );
    assert!(!success);
    assert!(stderr.contains("min_chunk_size"), "stderr: {}", stderr);
}

#[test]
fn test_chunk_reads_stdin() {
    let (_tmp, config_path, _doc) = setup_test_env();

    use std::io::Write;
    let mut child = Command::new(learn_binary())
        .arg("--config")
        .arg(&config_path)
        .args(["chunk", "-", "--format", "json"])
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"Para one sentence. Still para one.\n\nPara two.")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let chunks: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(chunks.as_array().unwrap().len(), 1);
    assert_eq!(chunks[0]["title"], "Introduction");
}

#[test]
fn test_empty_document_has_no_chunks() {
    let (tmp, config_path, _doc) = setup_test_env();
    let empty = tmp.path().join("empty.md");
    fs::write(&empty, "").unwrap();

    let (stdout, stderr, success) = run_learn(&config_path, &["chunk", empty.to_str().unwrap()]);
    assert!(success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("No chunks"));
}

#[test]
fn test_missing_document_fails() {
    let (tmp, config_path, _doc) = setup_test_env();
    let missing = tmp.path().join("nope.md");

    let (_, stderr, success) = run_learn(&config_path, &["stats", missing.to_str().unwrap()]);
    assert!(!success);
    assert!(stderr.contains("nope.md"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let (tmp, _config_path, doc) = setup_test_env();
    let missing = tmp.path().join("config").join("absent.toml");

    let (_, stderr, success) = run_learn(&missing, &["chunk", doc.to_str().unwrap()]);
    assert!(!success);
    assert!(stderr.contains("Failed to read config file"));
}

#[test]
fn test_export_csv_to_file() {
    let (tmp, config_path, doc) = setup_test_env();
    let out = tmp.path().join("out").join("guide.csv");

    let (_, stderr, success) = run_learn(
        &config_path,
        &[
            "export",
            doc.to_str().unwrap(),
            "--format",
            "csv",
            "--output",
            out.to_str().unwrap(),
        ],
    );
    assert!(success, "export failed: {}", stderr);
    assert!(stderr.contains("Exported 2 chunks"));

    let csv = fs::read_to_string(&out).unwrap();
    assert!(csv.starts_with("index,title,content,estimated_time\n"));
    assert!(csv.contains("0,\"Memory\","));
    assert!(csv.contains("1,\"Practice\","));
}

#[test]
fn test_export_json_stdout() {
    let (_tmp, config_path, doc) = setup_test_env();

    let (stdout, _, success) = run_learn(&config_path, &["export", doc.to_str().unwrap()]);
    assert!(success);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["total_minutes"], 2);
    assert_eq!(value["chunks"][1]["index"], 1);
}

#[test]
fn test_highlight() {
    let (_tmp, config_path, doc) = setup_test_env();

    let (stdout, _, success) = run_learn(
        &config_path,
        &["highlight", doc.to_str().unwrap(), "--phrase", "MEMORY"],
    );
    assert!(success);
    assert!(stdout.contains(r#"# <span class="highlight">Memory</span>"#));
    assert!(stdout.contains(r#"Working <span class="highlight">memory</span>"#));
}

#[test]
fn test_progress_text_and_json() {
    let (_tmp, config_path, doc) = setup_test_env();

    let (stdout, _, success) = run_learn(
        &config_path,
        &["progress", doc.to_str().unwrap(), "--completed", "0"],
    );
    assert!(success);
    assert!(stdout.contains("Progress: 1 / 2 chunks (50% completed)"));
    assert!(stdout.contains("[x] 1. Memory"));
    assert!(stdout.contains("[ ] 2. Practice"));

    let (stdout, _, success) = run_learn(
        &config_path,
        &[
            "progress",
            doc.to_str().unwrap(),
            "--completed",
            "1",
            "--format",
            "json",
        ],
    );
    assert!(success);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["summary"]["completed_minutes"], 1);
    assert_eq!(value["summary"]["remaining_minutes"], 1);
}

#[test]
fn test_progress_out_of_range() {
    let (_tmp, config_path, doc) = setup_test_env();

    let (_, stderr, success) = run_learn(
        &config_path,
        &["progress", doc.to_str().unwrap(), "--completed", "7"],
    );
    assert!(!success);
    assert!(stderr.contains("out of range"));
}

#[test]
fn test_stats() {
    let (_tmp, config_path, doc) = setup_test_env();

    let (stdout, _, success) = run_learn(&config_path, &["stats", doc.to_str().unwrap()]);
    assert!(success);
    assert!(stdout.contains("Document Stats"));
    assert!(stdout.contains("  Chunks:        2\n"));
    assert!(stdout.contains("  Headings:      2\n"));
    assert!(stdout.contains("  Bounds:        50..400 chars\n"));
}
