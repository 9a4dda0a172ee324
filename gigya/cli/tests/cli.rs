//! Command-line behavior that needs no network access.

use assert_cmd::Command;
use predicates::prelude::*;

fn gigya() -> Command {
    let mut cmd = Command::cargo_bin("gigya").unwrap();
    cmd.env_remove("GIGYA_API_KEY")
        .env_remove("GIGYA_API_SECRET")
        .env_remove("GIGYA_DOMAIN")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_credentials() {
    gigya()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GIGYA_API_KEY"));
}

#[test]
fn unknown_namespace_is_rejected() {
    gigya()
        .arg("abc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("undefined method `abc`"));
}

#[test]
fn missing_credentials_are_reported() {
    gigya()
        .args(["socialize_getUserInfo", "UID=_guid_1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GIGYA_API_KEY"));
}

#[test]
fn nameless_parameter_is_rejected() {
    gigya()
        .args(["socialize_getUserInfo", "=oops"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no name"));
}
