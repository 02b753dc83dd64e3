use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_no_config_file_when_load_then_defaults() {
    // Given
    let _env = setup_config_dir();
    let _url = EnvGuard::remove("INTAKE_BACKEND_URL");
    let _key = EnvGuard::remove("INTAKE_BACKEND_KEY");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(config.backend.url, "");
    assert_eq!(config.backend.table, "records");
    assert_eq!(config.backend.bucket, "uploads");
    assert!(config.backend.key.is_none());
}

#[test]
#[serial]
fn given_config_toml_when_load_then_values_read() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
[backend]
url = "https://abc.supabase.co"
table = "submissions"

[logging]
colored = false
"#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(config.backend.url, "https://abc.supabase.co");
    assert_eq!(config.backend.table, "submissions");
    assert!(!config.logging.colored);
    // untouched sections keep their defaults
    assert_eq!(config.backend.bucket, "uploads");
}

#[test]
#[serial]
fn given_env_override_when_load_then_env_wins() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "[backend]\nurl = \"https://from-file\"\n",
    )
    .unwrap();
    let _url = EnvGuard::set("INTAKE_BACKEND_URL", "https://from-env");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(config.backend.url, "https://from-env");
}

#[test]
#[serial]
fn given_key_from_env_when_load_then_key_set() {
    // Given
    let _env = setup_config_dir();
    let _key = EnvGuard::set("INTAKE_BACKEND_KEY", "anon-key");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(config.backend.key.as_deref(), Some("anon-key"));
}

#[test]
#[serial]
fn given_url_and_key_when_validate_then_ok() {
    // Given
    let _env = setup_config_dir();
    let _url = EnvGuard::set("INTAKE_BACKEND_URL", "https://abc.supabase.co");
    let _key = EnvGuard::set("INTAKE_BACKEND_KEY", "anon-key");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_missing_key_when_validate_then_error() {
    // Given
    let _env = setup_config_dir();
    let _url = EnvGuard::set("INTAKE_BACKEND_URL", "https://abc.supabase.co");
    let _key = EnvGuard::remove("INTAKE_BACKEND_KEY");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[backend\nurl=").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
}
