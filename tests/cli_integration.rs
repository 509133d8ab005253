use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Runs the binary with HOME and XDG_CONFIG_HOME pointed at a scratch dir so
/// a developer's own config never leaks into the assertions.
fn opendork(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("opendork").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn dry_run_prints_google_url() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;

    opendork(&home)
        .args(["search", "Breaking", "Bad", "S01", "--type", "video", "--date", "week", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "https://www.google.com/search?q=Breaking%20Bad%20S01%20intitle%3A%22index%20of%22",
        ))
        .stdout(predicate::str::contains("filetype%3Amkv"))
        .stdout(predicate::str::contains("&tbs=qdr:w"));

    Ok(())
}

#[test]
fn filepursuit_gets_plain_phrase() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;

    opendork(&home)
        .args(["search", "ubuntu iso", "-e", "filepursuit", "-t", "software", "--dry-run"])
        .assert()
        .success()
        .stdout("https://filepursuit.com/pursuit?q=ubuntu%20iso&type=archive\n");

    Ok(())
}

#[test]
fn short_query_fails_without_url() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;

    opendork(&home)
        .args(["search", "x", "--dry-run"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Query must be at least 2 characters"));

    Ok(())
}

#[test]
fn json_report_on_failure() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;

    let output = opendork(&home)
        .args(["search", "<>", "--dry-run", "--output", "json"])
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();
    let report: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(report["success"], false);
    assert_eq!(report["error"]["kind"], "empty_query");
    assert_eq!(report["error"]["message"], "Please enter a search query");
    assert!(report.get("url").is_none());

    Ok(())
}

#[test]
fn multi_engine_dry_run_opens_each_engine() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    let config = home.path().join("opendork.toml");
    fs::write(&config, "[dispatch]\nmulti_engine_delay_ms = 0\n")?;

    opendork(&home)
        .arg("--config")
        .arg(&config)
        .args(["search", "dune", "--engines", "google,altavista,brave", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://www.google.com/search?q=dune"))
        .stdout(predicate::str::contains("https://search.brave.com/search?q=dune"))
        .stdout(predicate::str::contains("Skipped unknown engines: altavista"));

    Ok(())
}

#[test]
fn preview_reports_dropped_date_filter() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;

    opendork(&home)
        .args(["preview", "dune", "-e", "yandex", "-d", "month"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Engine: Yandex"))
        .stdout(predicate::str::contains("Time filter: Any time"))
        .stdout(predicate::str::contains("Query: dune intitle:\"index of\""));

    Ok(())
}

#[test]
fn config_defaults_apply() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    let config = home.path().join("opendork.toml");
    fs::write(
        &config,
        "[search]\ndefault_engine = \"duckduckgo\"\ndate_filter = \"past_year\"\n",
    )?;

    opendork(&home)
        .arg("--config")
        .arg(&config)
        .args(["search", "dune", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("https://duckduckgo.com/?q=dune"))
        .stdout(predicate::str::ends_with("&df=y\n"));

    Ok(())
}

#[test]
fn malformed_config_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    let config = home.path().join("broken.toml");
    fs::write(&config, "[search\n")?;

    opendork(&home)
        .arg("--config")
        .arg(&config)
        .args(["search", "dune", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));

    Ok(())
}

#[test]
fn config_init_then_show() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    let config = home.path().join("nested/opendork.toml");

    opendork(&home)
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(config.exists());

    opendork(&home)
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    opendork(&home)
        .arg("--config")
        .arg(&config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default_engine = \"google\""))
        .stdout(predicate::str::contains("max_extensions = 5"));

    Ok(())
}

#[test]
fn list_commands() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;

    opendork(&home)
        .args(["list", "types"])
        .assert()
        .success()
        .stdout(predicate::str::contains("subtitles"));

    opendork(&home)
        .args(["list", "engines", "--long"])
        .assert()
        .success()
        .stdout(predicate::str::contains("*google"))
        .stdout(predicate::str::contains("freshness"));

    opendork(&home)
        .args(["list", "dates"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Past week"));

    Ok(())
}

#[test]
fn unknown_type_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;

    opendork(&home)
        .args(["search", "dune", "-t", "fonts", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown file type: fonts"));

    Ok(())
}

#[test]
fn completions_are_generated() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;

    opendork(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("opendork"));

    Ok(())
}

#[test]
fn preview_covers_every_selected_engine() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;

    opendork(&home)
        .args(["preview", "dune", "--engines", "google,brave"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Engine: Google"))
        .stdout(predicate::str::contains("Engine: Brave"));

    let output = opendork(&home)
        .args(["preview", "dune", "--engines", "google,brave", "--output", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let previews: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(previews.as_array().map(Vec::len), Some(2));
    assert_eq!(previews[1]["engine"], "Brave");

    Ok(())
}

#[test]
fn only_unknown_engines_searches_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;

    opendork(&home)
        .args(["search", "dune", "--engines", "altavista,lycos", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://").not())
        .stdout(predicate::str::contains("nothing was searched"));

    Ok(())
}
