use assert_cmd::cargo::{self};
use predicates::str::contains;

#[test]
fn prints_help() {
    let mut cmd = cargo::cargo_bin_cmd!("userdesk");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(contains("userdesk"))
        .stdout(contains("--page-size"))
        .stdout(contains("--offline"));
}

#[test]
fn rejects_zero_page_size() {
    let mut cmd = cargo::cargo_bin_cmd!("userdesk");
    cmd.args(["--page-size", "0"])
        .assert()
        .failure()
        .stderr(contains("page-size"));
}

#[test]
fn rejects_unparsable_endpoint() {
    let mut cmd = cargo::cargo_bin_cmd!("userdesk");
    cmd.args(["--url", "http://[::1"])
        .env_remove("USERDESK_LOG")
        .assert()
        .failure()
        .stderr(contains("invalid collection endpoint"));
}
