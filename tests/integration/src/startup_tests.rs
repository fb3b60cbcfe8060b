//! Startup contract for the alfresco-mcp binary
//!
//! Configuration comes entirely from the environment; any missing or invalid
//! value must terminate the process with a nonzero status and a diagnostic,
//! before anything touches the network. Closing stdin immediately means a
//! successfully configured server exits cleanly without handling a message.

use assert_cmd::Command;
use predicates::prelude::*;

use alfresco_client::config::{ENV_HOST, ENV_PASSWORD, ENV_USERNAME};

fn alfresco_mcp() -> Command {
    let mut cmd = Command::cargo_bin("alfresco-mcp").unwrap();
    cmd.env_remove(ENV_HOST)
        .env_remove(ENV_USERNAME)
        .env_remove(ENV_PASSWORD);
    cmd
}

// Unroutable but syntactically valid; startup never dials it.
const TEST_HOST: &str = "http://127.0.0.1:1";

#[test]
fn missing_host_exits_nonzero_naming_the_variable() {
    alfresco_mcp()
        .env(ENV_USERNAME, "admin")
        .env(ENV_PASSWORD, "admin")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Missing required environment variable: ALFRESCO_HOST",
        ));
}

#[test]
fn missing_username_exits_nonzero_naming_the_variable() {
    alfresco_mcp()
        .env(ENV_HOST, TEST_HOST)
        .env(ENV_PASSWORD, "admin")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Missing required environment variable: ALFRESCO_USERNAME",
        ));
}

#[test]
fn missing_password_exits_nonzero_naming_the_variable() {
    alfresco_mcp()
        .env(ENV_HOST, TEST_HOST)
        .env(ENV_USERNAME, "admin")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Missing required environment variable: ALFRESCO_PASSWORD",
        ));
}

#[test]
fn invalid_host_url_exits_nonzero_with_distinct_diagnostic() {
    alfresco_mcp()
        .env(ENV_HOST, "not-a-url")
        .env(ENV_USERNAME, "admin")
        .env(ENV_PASSWORD, "admin")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid Alfresco host URL"));
}

#[test]
fn valid_configuration_runs_until_stdin_closes() {
    alfresco_mcp()
        .env(ENV_HOST, TEST_HOST)
        .env(ENV_USERNAME, "admin")
        .env(ENV_PASSWORD, "admin")
        .write_stdin("")
        .assert()
        .success();
}
