// Initializes the global subscriber, so this file holds a single test.

use jsly_config::infrastructure::logging::{LogConfig, LogFormat, LoggerImpl, RotationPolicy};
use jsly_config::ConfigProvider;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_file_logging_records_provider_events() {
    let temp_dir = TempDir::new().unwrap();

    let config = LogConfig {
        level: "info".to_string(),
        format: LogFormat::Json,
        log_dir: Some(temp_dir.path().to_path_buf()),
        rotation: RotationPolicy::Never,
    };

    let logger = LoggerImpl::init(&config).unwrap();
    ConfigProvider::builtin().unwrap();

    // Dropping the guard flushes the non-blocking writer
    drop(logger);

    let contents = fs::read_to_string(temp_dir.path().join("jsly-config.log")).unwrap();
    assert!(contents.contains("site configuration validated"));
    assert!(contents.contains("\"code_icons\":42"));

    // A second global subscriber cannot be installed
    assert!(LoggerImpl::init(&config).is_err());
}
