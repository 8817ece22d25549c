// Integration tests for loading YAML configs end to end

mod common;

use common::{after_timestamp, captured_logger, file_logger, flush_and_read, temp_dir, write_file};
use datascience::{read_yaml, ConfigError};
use serde::Deserialize;

#[test]
fn test_config_yaml_scenario() {
    let tmp = temp_dir();
    let (logger, console) = captured_logger(tmp.path());
    let path = write_file(tmp.path(), "config.yaml", "artifacts_root: artifacts\nbatch_size: 32\n");

    let config = read_yaml(&logger, &path).unwrap();

    assert_eq!(config.field("artifacts_root").unwrap(), "artifacts");
    assert_eq!(config.field("batch_size").unwrap(), &32);
    assert_eq!(config["artifacts_root"], "artifacts");
    assert_eq!(config["batch_size"], 32);

    let file_contents = flush_and_read(logger);
    let console_contents = console.contents();
    let file_lines: Vec<&str> = file_contents.lines().collect();
    let console_lines: Vec<&str> = console_contents.lines().collect();
    assert_eq!(file_lines.len(), 1, "exactly one file line expected: {file_contents}");
    assert_eq!(console_lines.len(), 1, "exactly one console line expected: {console_contents}");

    let expected = format!("INFO: yaml file is loaded successfully {}]", path.display());
    for line in [file_lines[0], console_lines[0]] {
        assert!(line.starts_with('['), "{line}");
        assert_eq!(after_timestamp(line), expected);
    }
}

#[test]
fn test_every_top_level_key_matches() {
    let tmp = temp_dir();
    let logger = file_logger(tmp.path());
    let path = write_file(
        tmp.path(),
        "params.yaml",
        r"
ElasticNet:
  alpha: 0.2
  l1_ratio: 0.1
target_column: quality
features: [fixed_acidity, volatile_acidity]
shuffle: false
",
    );

    let config = read_yaml(&logger, &path).unwrap();

    for key in ["ElasticNet", "target_column", "features", "shuffle"] {
        assert_eq!(config.field(key).unwrap(), &config[key], "key {key}");
    }
    assert_eq!(config["ElasticNet"]["alpha"], 0.2);
    assert_eq!(config["features"][1], "volatile_acidity");
    assert_eq!(config["shuffle"].as_bool(), Some(false));
}

#[test]
fn test_schema_binding() {
    #[derive(Debug, Deserialize)]
    struct DataIngestionConfig {
        root_dir: String,
        source_url: String,
    }

    let tmp = temp_dir();
    let logger = file_logger(tmp.path());
    let path = write_file(
        tmp.path(),
        "config.yaml",
        "data_ingestion:\n  root_dir: artifacts/data_ingestion\n  source_url: https://example.com/data.zip\n",
    );

    let config = read_yaml(&logger, &path).unwrap();
    let ingestion: DataIngestionConfig = config["data_ingestion"]
        .as_box()
        .expect("mapping")
        .extract()
        .unwrap();

    assert_eq!(ingestion.root_dir, "artifacts/data_ingestion");
    assert_eq!(ingestion.source_url, "https://example.com/data.zip");
}

#[test]
fn test_error_kinds() {
    let tmp = temp_dir();
    let logger = file_logger(tmp.path());

    let empty = write_file(tmp.path(), "empty.yaml", "");
    let err = read_yaml(&logger, &empty).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyDocument));
    assert_eq!(err.to_string(), "yaml file is empty");

    let null = write_file(tmp.path(), "null.yaml", "null");
    assert!(matches!(read_yaml(&logger, &null), Err(ConfigError::EmptyDocument)));

    let missing = read_yaml(&logger, tmp.path().join("missing.yaml")).unwrap_err();
    assert!(missing.is_not_found());

    let broken = write_file(tmp.path(), "broken.yaml", "key: [unclosed\n");
    assert!(matches!(read_yaml(&logger, &broken), Err(ConfigError::Parse(_))));

    assert!(flush_and_read(logger).is_empty(), "failures must not be logged");
}
