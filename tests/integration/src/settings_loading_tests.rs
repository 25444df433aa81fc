//! End-to-end settings loading scenarios
//!
//! These drive the full pipeline — pattern expansion, classification,
//! template rendering, parsing, resolution, and store application — against
//! real files in temp directories. Set `RUST_LOG=envconf_loader=debug` to
//! see the per-file diagnostics while running them.

use envconf_core::{Environments, SettingsStore, Sym};
use envconf_loader::{ConfigLoader, Error};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use std::sync::Once;
use tempfile::TempDir;

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn loads_a_full_settings_directory() {
    init_tracing();
    let temp = TempDir::new().unwrap();

    // File-level scoping.
    write(
        temp.path(),
        "10_database.yml",
        "\
development:
  database_url: postgres://localhost/app_dev
production:
  database_url: postgres://db.internal/app
  pool_size: 20
",
    );
    // Key-level scoping mixed with plain settings.
    write(
        temp.path(),
        "20_app.yml",
        "\
app_name: demo
log_level:
  development: debug
  production: warn
features:
  uploads: true
  beta: false
",
    );

    let mut store = SettingsStore::new();
    let loader = ConfigLoader::new("production");
    loader
        .load_patterns(
            [temp.path().join("*.yml").to_string_lossy().into_owned()],
            &mut store,
        )
        .unwrap();

    assert_eq!(
        store.get("database_url").unwrap().as_str(),
        Some("postgres://db.internal/app")
    );
    assert_eq!(store.get("pool_size").unwrap().as_i64(), Some(20));
    assert_eq!(store.get("app_name").unwrap().as_str(), Some("demo"));
    assert_eq!(store.get("log_level").unwrap().as_str(), Some("warn"));

    let features = store.get(Sym("features")).unwrap().as_map().unwrap();
    assert_eq!(features.get(Sym("uploads")).unwrap().as_bool(), Some(true));
    assert_eq!(features.get("beta").unwrap().as_bool(), Some(false));
}

#[test]
fn second_file_wins_on_shared_keys() {
    init_tracing();
    let temp = TempDir::new().unwrap();
    write(temp.path(), "base.yml", "timeout: 10\nretries: 3\n");
    write(temp.path(), "override.yml", "timeout: 60\n");

    let mut store = SettingsStore::new();
    let loader = ConfigLoader::new("production");
    loader
        .load_patterns(
            [
                temp.path().join("base.yml").to_string_lossy().into_owned(),
                temp.path()
                    .join("override.yml")
                    .to_string_lossy()
                    .into_owned(),
            ],
            &mut store,
        )
        .unwrap();

    assert_eq!(store.get("timeout").unwrap().as_i64(), Some(60));
    assert_eq!(store.get("retries").unwrap().as_i64(), Some(3));
}

#[test]
fn unsupported_file_type_fails_the_load() {
    init_tracing();
    let temp = TempDir::new().unwrap();
    write(temp.path(), "settings.txt", "foo: bar\n");

    let mut store = SettingsStore::new();
    let loader = ConfigLoader::new("production");
    let err = loader
        .load_patterns(
            [temp.path().join("*.txt").to_string_lossy().into_owned()],
            &mut store,
        )
        .unwrap_err();

    assert!(matches!(err, Error::UnsupportedFileType { .. }));
    assert!(store.is_empty());
}

#[test]
fn templated_and_plain_files_combine() {
    init_tracing();
    let temp = TempDir::new().unwrap();
    write(temp.path(), "static.yml", "region: eu-west-1\n");
    write(
        temp.path(),
        "secrets.yml.tmpl",
        "api_token: ${ENVCONF_E2E_TOKEN}\n",
    );
    unsafe { std::env::set_var("ENVCONF_E2E_TOKEN", "sekrit") };

    let mut store = SettingsStore::new();
    let loader = ConfigLoader::new("test");
    loader
        .load_patterns(
            [
                temp.path().join("static.yml").to_string_lossy().into_owned(),
                temp.path()
                    .join("secrets.yml.tmpl")
                    .to_string_lossy()
                    .into_owned(),
            ],
            &mut store,
        )
        .unwrap();

    assert_eq!(store.get("region").unwrap().as_str(), Some("eu-west-1"));
    assert_eq!(store.get("api_token").unwrap().as_str(), Some("sekrit"));
}

#[test]
fn host_registered_environment_selects_its_branch() {
    init_tracing();
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        "settings.yml",
        "\
staging:
  host: staging.example.com
production:
  host: example.com
",
    );

    let mut store = SettingsStore::new();
    let environments =
        Environments::from_names(["test", "production", "development", "staging"]);
    let loader = ConfigLoader::with_environments("staging", environments);
    loader
        .load_file(&temp.path().join("settings.yml"), &mut store)
        .unwrap();

    assert_eq!(
        store.get("host").unwrap().as_str(),
        Some("staging.example.com")
    );
}

#[test]
fn missing_environment_branch_loads_nothing_without_error() {
    init_tracing();
    let temp = TempDir::new().unwrap();
    write(temp.path(), "settings.yml", "development:\n  verbose: true\n");

    let mut store = SettingsStore::new();
    ConfigLoader::new("production")
        .load_file(&temp.path().join("settings.yml"), &mut store)
        .unwrap();

    assert!(store.is_empty());
}
