use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn translates_text_to_morse_by_default() {
    let mut cmd = Command::cargo_bin("ditdah").unwrap();
    cmd.arg("translate")
        .arg("SOS")
        .assert()
        .success()
        .stdout(predicate::str::contains("... --- ..."));
}

#[test]
fn translates_morse_to_plain_text() {
    let mut cmd = Command::cargo_bin("ditdah").unwrap();
    cmd.arg("translate")
        .arg("-t")
        .arg("plain")
        .arg("... --- ...")
        .assert()
        .success()
        .stdout(predicate::str::contains("SOS"));
}

#[test]
fn short_target_spellings_work() {
    let mut cmd = Command::cargo_bin("ditdah").unwrap();
    cmd.arg("translate")
        .arg("-t")
        .arg("m")
        .arg("E")
        .assert()
        .success()
        .stdout(predicate::str::contains("."));

    let mut cmd = Command::cargo_bin("ditdah").unwrap();
    cmd.arg("translate")
        .arg("-t")
        .arg("p")
        .arg(".")
        .assert()
        .success()
        .stdout(predicate::str::contains("E"));
}

#[test]
fn round_trips_a_sentence() {
    let mut cmd = Command::cargo_bin("ditdah").unwrap();
    let out = cmd
        .arg("translate")
        .arg("hello world")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let morse = String::from_utf8(out).unwrap().trim().to_string();

    let mut cmd = Command::cargo_bin("ditdah").unwrap();
    cmd.arg("translate")
        .arg("--target")
        .arg("plain")
        .arg(&morse)
        .assert()
        .success()
        .stdout(predicate::str::contains("HELLO WORLD"));
}

#[test]
fn american_flag_selects_the_american_table() {
    let mut cmd = Command::cargo_bin("ditdah").unwrap();
    cmd.arg("translate")
        .arg("--american")
        .arg("C")
        .assert()
        .success()
        .stdout(predicate::str::contains(".._."));
}

#[test]
fn invalid_target_fails_before_converting() {
    let mut cmd = Command::cargo_bin("ditdah").unwrap();
    cmd.arg("translate")
        .arg("-t")
        .arg("binary")
        .arg("SOS")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid translation target: binary"));
}

#[test]
fn too_many_arguments_fails() {
    let mut cmd = Command::cargo_bin("ditdah").unwrap();
    cmd.arg("translate")
        .arg("SOS")
        .arg("TEST")
        .assert()
        .failure()
        .stderr(predicate::str::contains("too many arguments"));
}

#[test]
fn unknown_characters_warn_but_still_translate() {
    let mut cmd = Command::cargo_bin("ditdah").unwrap();
    cmd.arg("translate")
        .arg("A%B")
        .assert()
        .success()
        .stdout(predicate::str::contains(".- -..."))
        .stderr(predicate::str::contains("%"));
}
