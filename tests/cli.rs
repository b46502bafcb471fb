use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn dojo_runs_the_full_tour_by_default() {
    let mut cmd = Command::cargo_bin("dojo").expect("binary exists");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Hello, ninjas!"))
        .stdout(predicate::str::contains("you scored 225.6 points"))
        .stdout(predicate::str::contains("[20 25 30 35 45 50 60 75]"));
}

#[test]
fn dojo_tour_output_is_deterministic() {
    let first = Command::cargo_bin("dojo")
        .expect("binary exists")
        .arg("tour")
        .output()
        .expect("run tour");
    let second = Command::cargo_bin("dojo")
        .expect("binary exists")
        .arg("tour")
        .output()
        .expect("run tour");
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn dojo_list_names_every_section() {
    let mut cmd = Command::cargo_bin("dojo").expect("binary exists");
    cmd.arg("list");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Hello"))
        .stdout(predicate::str::contains("Bits & Memory"))
        .stdout(predicate::str::contains("Slices"))
        .stdout(predicate::str::contains("Sorting"));
}

#[test]
fn dojo_section_renders_one_section_only() {
    let mut cmd = Command::cargo_bin("dojo").expect("binary exists");
    cmd.arg("section").arg("sorting");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--- Sorting ---"))
        .stdout(predicate::str::contains("bowser is at index 0"))
        .stdout(predicate::str::contains("Hello, ninjas!").not());
}

#[test]
fn dojo_section_rejects_unknown_names() {
    let mut cmd = Command::cargo_bin("dojo").expect("binary exists");
    cmd.arg("section").arg("warp zone");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("warp zone"));
}
