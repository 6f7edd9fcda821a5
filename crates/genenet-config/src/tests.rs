use super::*;
use std::io::Write;

#[test]
fn test_empty_file_uses_defaults() {
    let config = Config::from_toml_str("").unwrap();
    assert_eq!(config.server.port, 3001);
    assert_eq!(config.string_db.species, 9606);
    assert_eq!(config.string_db.base_url, "https://string-db.org");
    assert_eq!(config.layout.seed, 42);
    assert_eq!(config.dashboard.preview_rows, 10);
}

#[test]
fn test_partial_section_keeps_other_defaults() {
    let config = Config::from_toml_str(
        r#"
        [string_db]
        species = 10090

        [layout]
        seed = 7
        "#,
    )
    .unwrap();
    assert_eq!(config.string_db.species, 10090);
    assert_eq!(config.string_db.timeout_secs, 30);
    assert_eq!(config.layout.seed, 7);
    assert_eq!(config.layout.iterations, 50);
}

#[test]
fn test_zero_cache_capacity_rejected() {
    let err = Config::from_toml_str("[string_db]\ncache_capacity = 0\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "string_db.cache_capacity", .. }));
}

#[test]
fn test_malformed_toml_rejected() {
    assert!(matches!(
        Config::from_toml_str("[server\nport = 1"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[server]\nhost = \"0.0.0.0\"\nport = 8080").unwrap();
    let config = Config::load_from(file.path()).unwrap();
    assert_eq!(config.bind_addr(), "0.0.0.0:8080");
}

#[test]
fn test_load_from_missing_file() {
    let err = Config::load_from("/definitely/not/here/genenet.toml").unwrap_err();
    assert!(matches!(err, ConfigError::NotFound(_)));
}
