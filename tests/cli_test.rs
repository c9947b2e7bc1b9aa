// Command-line tests for the typechart binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixtures_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Binary running inside an empty directory so no stray typechart.toml is picked up
fn typechart(workdir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("typechart").unwrap();
    cmd.current_dir(workdir.path());
    cmd.env_remove("TYPECHART_LOG_LEVEL").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_generate_to_stdout() {
    let dir = TempDir::new().unwrap();
    let expected = std::fs::read_to_string(fixtures_path("shop_expected.md")).unwrap();

    typechart(&dir)
        .arg("generate")
        .arg(fixtures_path("shop_catalog.json"))
        .args(["--namespace", "Shop", "--stdout"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_generate_writes_markdown_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("docs");

    typechart(&dir)
        .arg("generate")
        .arg(fixtures_path("zoo"))
        .args(["-n", "com.zoo", "-s", "model", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Diagram written to:"))
        .stdout(predicate::str::contains("com.zoo.model.md"));

    let written = std::fs::read_to_string(out.join("com.zoo.model.md")).unwrap();
    let expected = std::fs::read_to_string(fixtures_path("zoo_expected.md")).unwrap();
    assert_eq!(written, expected);
}

#[test]
fn test_generate_honours_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.toml");
    std::fs::write(&config, "[diagram]\ndirection = \"LR\"\n").unwrap();

    typechart(&dir)
        .arg("generate")
        .arg(fixtures_path("shop_catalog.json"))
        .args(["-n", "Shop", "--stdout", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("direction LR"));
}

#[test]
fn test_generate_picks_up_local_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("typechart.toml"),
        "[output]\ndirectory = \"uml\"\n",
    )
    .unwrap();

    typechart(&dir)
        .arg("generate")
        .arg(fixtures_path("shop_catalog.json"))
        .args(["-n", "Shop"])
        .assert()
        .success();

    assert!(dir.path().join("uml").join("Shop.Database.Entities.md").exists());
}

#[test]
fn test_list_types() {
    let dir = TempDir::new().unwrap();

    typechart(&dir)
        .arg("list")
        .arg(fixtures_path("zoo"))
        .args(["-n", "com.zoo", "-s", "model"])
        .assert()
        .success()
        .stdout("class Animal\nclass Dog\nclass Keeper\ninterface Pet\nenum Species\n");
}

#[test]
fn test_version() {
    let dir = TempDir::new().unwrap();

    typechart(&dir)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("typechart "));
}

#[test]
fn test_missing_source_fails() {
    let dir = TempDir::new().unwrap();

    typechart(&dir)
        .args(["generate", "/nonexistent/catalog.json", "-n", "Shop", "--stdout"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("/nonexistent/catalog.json"));
}

#[test]
fn test_unknown_namespace_fails() {
    let dir = TempDir::new().unwrap();

    typechart(&dir)
        .arg("generate")
        .arg(fixtures_path("shop_catalog.json"))
        .args(["-n", "Bank", "--stdout"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Bank"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_unknown_format_fails() {
    let dir = TempDir::new().unwrap();

    typechart(&dir)
        .arg("generate")
        .arg(fixtures_path("shop_catalog.json"))
        .args(["-n", "Shop", "--format", "yaml", "--stdout"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown catalog format"));
}

#[test]
fn test_missing_namespace_is_usage_error() {
    let dir = TempDir::new().unwrap();

    typechart(&dir)
        .arg("generate")
        .arg(fixtures_path("shop_catalog.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("--namespace"));
}
