mod support;

use assert_cmd::Command;
use predicates::prelude::*;
use support::config::write_temp_config;

fn coinrelay() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_coinrelay"));
    cmd.env_remove("TELEGRAM_BOT_TOKEN")
        .env_remove("COINGECKO_API_KEY")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_subcommands() {
    coinrelay()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("prices"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn check_config_accepts_valid_file() {
    let (_dir, path) = write_temp_config(
        "[market]\ntop_n = 3\n\n[telegram.channel]\nname = \"@prices\"\nauto_post = true\n",
    );

    coinrelay()
        .args(["check", "config", "-c"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("@prices"))
        .stdout(predicate::str::contains("TELEGRAM_BOT_TOKEN"));
}

#[test]
fn check_config_reports_token_from_environment() {
    let (_dir, path) = write_temp_config("");

    coinrelay()
        .env("TELEGRAM_BOT_TOKEN", "123456:test-token")
        .args(["check", "config", "-c"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Telegram bot token detected"));
}

#[test]
fn check_config_json_is_machine_readable() {
    let (_dir, path) = write_temp_config("[schedule]\ninterval_secs = 120\n");

    let output = coinrelay()
        .args(["--json", "check", "config", "-c"])
        .arg(&path)
        .output()
        .expect("run coinrelay");

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value["command"], "check.config");
    assert_eq!(value["status"], "valid");
    assert_eq!(value["interval_secs"], 120);
    assert_eq!(value["initial_delay_secs"], 3);
    assert_eq!(value["top_n"], 5);
    assert_eq!(value["token_present"], false);
}

#[test]
fn check_config_rejects_invalid_values() {
    let (_dir, path) = write_temp_config("[schedule]\ninterval_secs = 0\n");

    coinrelay()
        .args(["check", "config", "-c"])
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("interval_secs"));
}

#[test]
fn missing_config_file_fails() {
    let dir = tempfile::TempDir::new().expect("temp dir");

    coinrelay()
        .args(["check", "config", "-c"])
        .arg(dir.path().join("absent.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn run_requires_bot_token() {
    let (_dir, path) = write_temp_config("");

    coinrelay()
        .args(["run", "-c"])
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("TELEGRAM_BOT_TOKEN"));
}

#[test]
fn errors_are_json_in_json_mode() {
    let (_dir, path) = write_temp_config("");

    let output = coinrelay()
        .args(["--json", "run", "-c"])
        .arg(&path)
        .output()
        .expect("run coinrelay");

    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value =
        serde_json::from_slice(&output.stderr).expect("stderr should be JSON");
    assert_eq!(value["event"], "error");
    assert!(value["message"]
        .as_str()
        .is_some_and(|m| m.contains("TELEGRAM_BOT_TOKEN")));
}

#[test]
fn unknown_subcommand_is_rejected() {
    coinrelay()
        .arg("trade")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}
