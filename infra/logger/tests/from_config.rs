use gway_domain::config::LoggingConfig;
use gway_logger::{Logger, LoggerError};
use serial_test::serial;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
#[serial]
fn site_config_drives_file_output() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let log_dir = tmp.path().join("logs");
    let config = LoggingConfig {
        level: "debug".to_owned(),
        directives: Some("gway=debug".to_owned()),
        console: false,
        dir: Some(log_dir.clone()),
        json: true,
        max_files: 2,
    };

    let logger = Logger::from_config("greenway-site", &config)?;
    assert!(logger.writes_files());

    tracing::info!(form = "attorney", "lead submitted");
    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .ok_or("no log file written")?;
    let contents = fs::read_to_string(&log_file)?;
    assert!(contents.lines().any(|line| line.starts_with('{') && line.contains("lead submitted")));

    Ok(())
}

#[test]
#[serial]
fn unknown_level_is_rejected_before_install() {
    let config = LoggingConfig { level: "chatty".to_owned(), ..LoggingConfig::default() };

    let err = Logger::from_config("greenway-site", &config).expect_err("bad level");
    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    assert!(err.to_string().contains("logging.level"));
}

#[test]
#[serial]
fn disabling_every_output_is_rejected() {
    let config = LoggingConfig { console: false, dir: None, ..LoggingConfig::default() };

    let err = Logger::from_config("greenway-site", &config).expect_err("no outputs");
    assert!(err.to_string().contains("Neither console nor file output"));
}
