use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

// ============================================================================
// Help and Version Tests
// ============================================================================

#[test]
fn test_help_flag() {
    cargo_bin_cmd!("registrar-gen")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--output"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("registrar-gen")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("registrar-gen"));
}

#[test]
fn test_inputs_are_required() {
    cargo_bin_cmd!("registrar-gen").assert().failure();
}

// ============================================================================
// Generation Tests
// ============================================================================

#[test]
fn test_writes_sources_to_output_dir() {
    let temp_dir = TempDir::new().unwrap();

    cargo_bin_cmd!("registrar-gen")
        .arg(fixture("core.json"))
        .arg(fixture("modules.yaml"))
        .arg("--output")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Generated"))
        .stderr(predicate::str::contains("3 files"));

    for path in [
        "com/example/core/CoreModule.java",
        "com/example/feed/FeedModule.java",
        "com/example/search/SearchModule.java",
    ] {
        assert!(temp_dir.path().join(path).exists(), "missing {}", path);
    }
}

#[test]
fn test_dry_run_prints_and_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("out");

    cargo_bin_cmd!("registrar-gen")
        .arg(fixture("modules.yaml"))
        .arg("-o")
        .arg(&output)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== com/example/feed/FeedModule.java ==="))
        .stdout(predicate::str::contains("public class SearchModule extends ModuleContainer"));

    assert!(!output.exists());
}

#[test]
fn test_indent_option() {
    cargo_bin_cmd!("registrar-gen")
        .arg(fixture("modules.yaml"))
        .args(["--dry-run", "--indent", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\n  public SearchModule() {\n"));
}

#[test]
fn test_config_file_overrides_banner() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("registrar.toml");
    fs::write(&config, "banner = \"Owned by the build.\"\n").unwrap();

    cargo_bin_cmd!("registrar-gen")
        .arg(fixture("modules.yaml"))
        .arg("--config")
        .arg(&config)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains(" * Owned by the build."));
}

// ============================================================================
// Error Tests
// ============================================================================

#[test]
fn test_invalid_module_fails_without_output() {
    let temp_dir = TempDir::new().unwrap();

    cargo_bin_cmd!("registrar-gen")
        .arg(fixture("modules.yaml"))
        .arg(fixture("invalid.json"))
        .arg("--output")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("BrokenModule"));

    assert!(!temp_dir.path().join("com").exists());
}

#[test]
fn test_missing_input_fails() {
    cargo_bin_cmd!("registrar-gen")
        .arg("does-not-exist.json")
        .arg("--dry-run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.json"));
}

#[test]
fn test_unknown_config_key_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("registrar.toml");
    fs::write(&config, "tabs = true\n").unwrap();

    cargo_bin_cmd!("registrar-gen")
        .arg(fixture("modules.yaml"))
        .arg("--config")
        .arg(&config)
        .arg("--dry-run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ConfigError"));
}
