use atlas_domain::config::LoggingConfig;
use atlas_logger::Logger;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn from_config_writes_json_lines() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("atlas-logs");

    let config =
        LoggingConfig { level: "debug".to_owned(), directory: Some(log_dir.clone()), json: true };
    let logger = Logger::from_config("explorer-from-config", &config)?;
    assert!(logger.guard().is_some());

    tracing::info!(region = "Europe", "region loaded");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(log_file)?;
    let first = contents.lines().next().expect("at least one record");
    assert!(first.starts_with('{'), "expected a JSON record, got {first}");
    assert!(first.contains("region loaded"));

    Ok(())
}
