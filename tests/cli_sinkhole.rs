//! Sinkhole writes 127.0.0.1 while the message says "sinkhole".

mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

#[test]
fn sinkhole_add_writes_loopback() {
    let dir = common::temp_hosts_dir();
    let path = common::write_hosts(&dir, "");

    Command::cargo_bin("hostman")
        .unwrap()
        .env("HOSTMAN_HOSTS_FILE", &path)
        .args(["ads.example.com", "--sinkhole"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ads.example.com added to sinkhole"));

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "127.0.0.1 ads.example.com\n"
    );
}

#[test]
fn sinkhole_update_says_sinkhole_not_address() {
    let dir = common::temp_hosts_dir();
    let path = common::write_hosts(&dir, "1.2.3.4 ads.example.com\n");

    Command::cargo_bin("hostman")
        .unwrap()
        .env("HOSTMAN_HOSTS_FILE", &path)
        .args(["ads.example.com", "-s"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ads.example.com updated to sinkhole"));

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "127.0.0.1 ads.example.com\n"
    );
}

#[test]
fn sinkhole_overrides_explicit_ip() {
    let dir = common::temp_hosts_dir();
    let path = common::write_hosts(&dir, "");

    Command::cargo_bin("hostman")
        .unwrap()
        .env("HOSTMAN_HOSTS_FILE", &path)
        .args(["ads.example.com", "-i", "9.9.9.9", "-s"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "127.0.0.1 ads.example.com\n"
    );
}
