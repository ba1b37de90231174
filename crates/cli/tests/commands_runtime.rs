use std::env;
use std::sync::{Mutex, OnceLock};

use leavedesk_cli::commands::{applications, config, doctor, migrate};
use serde_json::Value;
use tempfile::TempDir;

#[test]
fn migrate_creates_the_schema_in_a_fresh_database() {
    let dir = TempDir::new().expect("tempdir");
    let url = database_url(&dir);

    with_env(&[("LEAVEDESK_DATABASE_URL", url.as_str())], || {
        let result = migrate::run();
        assert_eq!(result.exit_code, 0, "expected successful migrate run");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["command"], "migrate");
        assert_eq!(payload["status"], "ok");
        assert_eq!(payload["message"], "leave_applications table is ready");
    });

    assert!(dir.path().join("leave_applications.db").exists());
}

#[test]
fn migrate_is_repeatable() {
    let dir = TempDir::new().expect("tempdir");
    let url = database_url(&dir);

    with_env(&[("LEAVEDESK_DATABASE_URL", url.as_str())], || {
        assert_eq!(migrate::run().exit_code, 0);
        assert_eq!(migrate::run().exit_code, 0);
    });
}

#[test]
fn migrate_returns_config_failure_for_non_sqlite_url() {
    with_env(&[("LEAVEDESK_DATABASE_URL", "postgres://localhost/leave")], || {
        let result = migrate::run();
        assert_eq!(result.exit_code, 2, "expected config validation failure code");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["status"], "error");
        assert_eq!(payload["error_class"], "config_validation");
    });
}

#[test]
fn applications_lists_columns_of_an_empty_store() {
    let dir = TempDir::new().expect("tempdir");
    let url = database_url(&dir);

    with_env(&[("LEAVEDESK_DATABASE_URL", url.as_str())], || {
        assert_eq!(migrate::run().exit_code, 0);

        let result = applications::run(true);
        assert_eq!(result.exit_code, 0);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["count"], 0);
        assert_eq!(
            payload["columns"],
            serde_json::json!(["id", "leave_type", "start_date", "end_date", "reason", "leave_days"])
        );

        let human = applications::run(false);
        assert!(human.output.contains("LEAVE APPLICATIONS IN DATABASE"));
        assert!(human.output.contains("Columns: id, leave_type"));
    });
}

#[test]
fn applications_reports_missing_schema() {
    let dir = TempDir::new().expect("tempdir");
    let url = database_url(&dir);
    std::fs::write(dir.path().join("leave_applications.db"), b"").expect("empty database file");

    with_env(&[("LEAVEDESK_DATABASE_URL", url.as_str())], || {
        let result = applications::run(true);
        assert_eq!(result.exit_code, 5);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["error_class"], "schema_missing");
    });
}

#[test]
fn doctor_passes_after_migrate() {
    let dir = TempDir::new().expect("tempdir");
    let url = database_url(&dir);

    with_env(&[("LEAVEDESK_DATABASE_URL", url.as_str())], || {
        assert_eq!(migrate::run().exit_code, 0);

        let result = doctor::run(true);
        assert_eq!(result.exit_code, 0, "{}", result.output);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["overall_status"], "pass");
        assert_eq!(payload["checks"].as_array().map(Vec::len), Some(3));
    });
}

#[test]
fn doctor_flags_missing_database_file() {
    let dir = TempDir::new().expect("tempdir");
    let url = database_url(&dir);

    with_env(&[("LEAVEDESK_DATABASE_URL", url.as_str())], || {
        let result = doctor::run(true);
        assert_eq!(result.exit_code, 1);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["overall_status"], "fail");
        assert_eq!(payload["checks"][1]["name"], "database_connectivity");
        assert_eq!(payload["checks"][1]["status"], "fail");
        assert_eq!(payload["checks"][2]["status"], "skipped");
    });
}

#[test]
fn config_reports_env_source_for_aliases() {
    with_env(&[("LEAVEDESK_LOG_LEVEL", "debug")], || {
        let output = config::run();
        assert!(output.contains("- logging.level = debug (source: env (LEAVEDESK_LOG_LEVEL))"));
        assert!(output.contains("- server.port = 5055 (source: default)"));
    });
}

fn database_url(dir: &TempDir) -> String {
    format!("sqlite://{}", dir.path().join("leave_applications.db").display())
}

fn parse_payload(output: &str) -> Value {
    serde_json::from_str(output).expect("command output should be valid JSON")
}

fn with_env(vars: &[(&str, &str)], test_fn: impl FnOnce()) {
    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    let _guard =
        ENV_LOCK.get_or_init(|| Mutex::new(())).lock().expect("env mutex should not be poisoned");

    let keys = [
        "LEAVEDESK_DATABASE_URL",
        "LEAVEDESK_DATABASE_TIMEOUT_SECS",
        "LEAVEDESK_SERVER_BIND_ADDRESS",
        "LEAVEDESK_SERVER_PORT",
        "LEAVEDESK_SERVER_GRACEFUL_SHUTDOWN_SECS",
        "LEAVEDESK_LOGGING_LEVEL",
        "LEAVEDESK_LOGGING_FORMAT",
        "LEAVEDESK_LOG_LEVEL",
        "LEAVEDESK_LOG_FORMAT",
    ];

    let previous_values: Vec<(&str, Option<String>)> =
        keys.iter().map(|key| (*key, env::var(key).ok())).collect();

    for key in &keys {
        env::remove_var(key);
    }
    for (key, value) in vars {
        env::set_var(key, value);
    }

    test_fn();

    for (key, value) in previous_values {
        if let Some(value) = value {
            env::set_var(key, value);
        } else {
            env::remove_var(key);
        }
    }
}
