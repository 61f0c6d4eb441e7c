//! Integration tests for the PassVault CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.
//! The master password comes from `PASSVAULT_PASSWORD` so nothing
//! prompts; entry passwords are passed inline or generated.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

const MASTER: &str = "integration-master";

/// Helper: a Command for the passvault binary, pointed at `dir`.
fn passvault(dir: &TempDir, master: &str) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("passvault").expect("binary should exist");
    cmd.env("PASSVAULT_PASSWORD", master)
        .env("PASSVAULT_DIR", dir.path())
        .env_remove("RUST_LOG");
    cmd
}

fn add_example(dir: &TempDir) {
    passvault(dir, MASTER)
        .args([
            "add",
            "--site",
            "example.com",
            "--username",
            "alice",
            "--password",
            "Xy9!qT2zP@1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("entry 1"));
}

#[test]
fn help_flag_shows_usage() {
    let tmp = TempDir::new().unwrap();
    passvault(&tmp, MASTER)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Encrypted local password manager"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("edit"))
        .stdout(predicate::str::contains("delete"))
        .stdout(predicate::str::contains("copy"))
        .stdout(predicate::str::contains("generate"));
}

#[test]
fn no_args_shows_help() {
    let tmp = TempDir::new().unwrap();
    passvault(&tmp, MASTER)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn list_on_fresh_directory_is_empty() {
    let tmp = TempDir::new().unwrap();
    passvault(&tmp, MASTER)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 entries"));

    tmp.child("encrypted_data.dat")
        .assert(predicate::path::missing());
}

#[test]
fn add_creates_vault_and_list_masks_password() {
    let tmp = TempDir::new().unwrap();
    add_example(&tmp);

    tmp.child("encrypted_data.dat")
        .assert(predicate::path::exists());

    passvault(&tmp, MASTER)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("example.com"))
        .stdout(predicate::str::contains("alice"))
        .stdout(predicate::str::contains("***********"))
        .stdout(predicate::str::contains("Xy9!qT2zP@1").not());

    passvault(&tmp, MASTER)
        .args(["list", "--show-passwords"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Xy9!qT2zP@1"));
}

#[test]
fn wrong_master_password_warns_and_shows_nothing() {
    let tmp = TempDir::new().unwrap();
    add_example(&tmp);

    passvault(&tmp, "not-the-master")
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("wrong master password"))
        .stdout(predicate::str::contains("example.com").not());
}

#[test]
fn wrong_master_password_does_not_overwrite_without_confirmation() {
    let tmp = TempDir::new().unwrap();
    add_example(&tmp);
    let before = std::fs::read(tmp.child("encrypted_data.dat").path()).unwrap();

    // No terminal to confirm on, so the overwrite prompt fails.
    passvault(&tmp, "not-the-master")
        .args(["add", "--site", "evil", "--username", "x", "--password", "y"])
        .assert()
        .failure();

    let after = std::fs::read(tmp.child("encrypted_data.dat").path()).unwrap();
    assert_eq!(before, after);
}

#[test]
fn search_filters_entries() {
    let tmp = TempDir::new().unwrap();
    add_example(&tmp);
    passvault(&tmp, MASTER)
        .args([
            "add", "--site", "bank.test", "--username", "bob", "--password", "pw", "--note",
            "savings",
        ])
        .assert()
        .success();

    passvault(&tmp, MASTER)
        .args(["list", "--search", "SAVINGS"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 of 2 entries"))
        .stdout(predicate::str::contains("bank.test"))
        .stdout(predicate::str::contains("example.com").not());
}

#[test]
fn show_prints_all_fields() {
    let tmp = TempDir::new().unwrap();
    add_example(&tmp);

    passvault(&tmp, MASTER)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Xy9!qT2zP@1"))
        .stdout(predicate::str::contains("alice"));
}

#[test]
fn show_out_of_range_fails() {
    let tmp = TempDir::new().unwrap();
    add_example(&tmp);

    passvault(&tmp, MASTER)
        .args(["show", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no entry 2"));

    passvault(&tmp, MASTER)
        .args(["show", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("start at 1"));
}

#[test]
fn edit_updates_only_given_fields() {
    let tmp = TempDir::new().unwrap();
    add_example(&tmp);

    passvault(&tmp, MASTER)
        .args(["edit", "1", "--note", "personal"])
        .assert()
        .success();

    passvault(&tmp, MASTER)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("personal"))
        .stdout(predicate::str::contains("Xy9!qT2zP@1"));
}

#[test]
fn delete_with_force_removes_entry() {
    let tmp = TempDir::new().unwrap();
    add_example(&tmp);

    passvault(&tmp, MASTER)
        .args(["delete", "1", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 remaining"));

    passvault(&tmp, MASTER)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 entries"));
}

#[test]
fn add_with_generated_password() {
    let tmp = TempDir::new().unwrap();
    passvault(&tmp, MASTER)
        .args([
            "add", "--site", "gen.test", "--username", "u", "--generate", "--length", "24",
        ])
        .assert()
        .success();

    passvault(&tmp, MASTER)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("*".repeat(24)));
}

#[test]
fn add_rejects_blank_site() {
    let tmp = TempDir::new().unwrap();
    passvault(&tmp, MASTER)
        .args(["add", "--site", " ", "--username", "u", "--password", "p"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("site cannot be empty"));
}

#[test]
fn generate_prints_password_of_requested_length() {
    let tmp = TempDir::new().unwrap();
    let output = passvault(&tmp, MASTER)
        .args(["generate", "--length", "20"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim_end_matches('\n').chars().count(), 20);
}

#[test]
fn generate_uses_configured_length() {
    let tmp = TempDir::new().unwrap();
    tmp.child("passvault.toml")
        .write_str("password_length = 30\n")
        .unwrap();

    let output = passvault(&tmp, MASTER).arg("generate").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim_end_matches('\n').chars().count(), 30);
}

#[test]
fn file_option_selects_another_vault() {
    let tmp = TempDir::new().unwrap();
    passvault(&tmp, MASTER)
        .args([
            "--file", "work.dat", "add", "--site", "w", "--username", "u", "--password", "p",
        ])
        .assert()
        .success();

    tmp.child("work.dat").assert(predicate::path::exists());
    tmp.child("encrypted_data.dat")
        .assert(predicate::path::missing());
}

#[test]
fn completions_for_bash() {
    let tmp = TempDir::new().unwrap();
    passvault(&tmp, MASTER)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("passvault"));
}

#[test]
fn piped_password_keeps_trailing_spaces() {
    let tmp = TempDir::new().unwrap();
    passvault(&tmp, MASTER)
        .args(["add", "--site", "s", "--username", "u"])
        .write_stdin("pass word  \n")
        .assert()
        .success();

    let vault = tmp.path().join("encrypted_data.dat");
    let (session, fallback) = passvault::vault::Session::open(&vault, MASTER);
    assert!(fallback.is_none());
    assert_eq!(session.records().get(0).unwrap().password, "pass word  ");
}
