use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use assert_cmd::Command;
use tempfile::tempdir;

fn write_dataset(dir: &Path) {
    fs::write(
        dir.join("people.csv"),
        "id,name,birth\n\
         102,Kevin Bacon,1958\n\
         158,Tom Hanks,1956\n\
         398,Sally Field,1946\n\
         501,Emma Gray,1980\n\
         502,Emma Gray,1991\n",
    )
    .unwrap();
    fs::write(
        dir.join("movies.csv"),
        "id,title,year\n\
         112384,Apollo 13,1995\n\
         109830,Forrest Gump,1994\n",
    )
    .unwrap();
    fs::write(
        dir.join("stars.csv"),
        "person_id,movie_id\n\
         102,112384\n\
         158,112384\n\
         158,109830\n\
         398,109830\n\
         501,112384\n",
    )
    .unwrap();
}

#[test]
fn build_saves_a_snapshot_that_degrees_can_reuse() {
    let dir = tempdir().unwrap();
    write_dataset(dir.path());
    let snapshot = dir.path().join("store.json");

    let mut build = Command::cargo_bin("costar-degrees").unwrap();
    build.arg("build")
        .arg("--data").arg(dir.path())
        .arg("--save").arg(&snapshot);
    build.assert().success().stdout(predicate::str::contains("Loaded 5 people and 2 movies."));
    assert!(snapshot.exists());

    // Query against the snapshot only; the CSVs are not reread.
    let mut degrees = Command::cargo_bin("costar-degrees").unwrap();
    degrees.arg("degrees")
        .arg("--store").arg(&snapshot)
        .arg("--source").arg("Kevin Bacon")
        .arg("--target").arg("Sally Field");
    degrees.assert().success().stdout(predicate::str::contains("2 degrees of separation."));
}

#[test]
fn costars_lists_direct_collaborators() {
    let dir = tempdir().unwrap();
    write_dataset(dir.path());

    let mut cmd = Command::cargo_bin("costar-degrees").unwrap();
    cmd.arg("costars")
        .arg("--data").arg(dir.path())
        .arg("--name").arg("Tom Hanks");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Kevin Bacon"))
        .stdout(predicate::str::contains("Sally Field"))
        // Self must be filtered out of the listing.
        .stdout(predicate::str::contains("Tom Hanks").not());
}

#[test]
fn config_default_format_switches_output_to_json() {
    let dir = tempdir().unwrap();
    write_dataset(dir.path());
    let cfg = dir.path().join("costar-degrees.toml");
    fs::write(&cfg, "[query]\ndefault_format = \"json\"\n").unwrap();

    let mut cmd = Command::cargo_bin("costar-degrees").unwrap();
    cmd.arg("degrees")
        .arg("--data").arg(dir.path())
        .arg("--config").arg(&cfg)
        .arg("--source").arg("Kevin Bacon")
        .arg("--target").arg("Tom Hanks");
    cmd.assert().success().stdout(predicate::str::contains("\"connected\": true"));
}

#[test]
fn config_can_supply_the_dataset_directory() {
    let dir = tempdir().unwrap();
    write_dataset(dir.path());
    let cfg = dir.path().join("costar-degrees.toml");
    fs::write(&cfg, format!("[data]\ndir = \"{}\"\n", dir.path().display())).unwrap();

    let mut cmd = Command::cargo_bin("costar-degrees").unwrap();
    cmd.arg("degrees")
        .arg("--config").arg(&cfg)
        .arg("--source").arg("Kevin Bacon")
        .arg("--target").arg("Tom Hanks");
    cmd.assert().success().stdout(predicate::str::contains("1 degrees of separation."));
}

#[test]
fn names_are_prompted_when_flags_are_omitted() {
    let dir = tempdir().unwrap();
    write_dataset(dir.path());

    let mut cmd = Command::cargo_bin("costar-degrees").unwrap();
    cmd.arg("degrees").arg("--data").arg(dir.path());
    cmd.write_stdin("Kevin Bacon\nTom Hanks\n");
    cmd.assert().success().stdout(predicate::str::contains("1 degrees of separation."));
}

#[test]
fn ambiguous_name_prompts_for_an_id() {
    let dir = tempdir().unwrap();
    write_dataset(dir.path());

    // Two people share the name Emma Gray; pick the one in Apollo 13.
    let mut cmd = Command::cargo_bin("costar-degrees").unwrap();
    cmd.arg("degrees")
        .arg("--data").arg(dir.path())
        .arg("--source").arg("Emma Gray")
        .arg("--target").arg("Kevin Bacon");
    cmd.write_stdin("501\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Which 'Emma Gray'?"))
        .stdout(predicate::str::contains("1 degrees of separation."));
}

#[test]
fn ambiguous_name_with_bad_choice_fails() {
    let dir = tempdir().unwrap();
    write_dataset(dir.path());

    let mut cmd = Command::cargo_bin("costar-degrees").unwrap();
    cmd.arg("degrees")
        .arg("--data").arg(dir.path())
        .arg("--source").arg("Emma Gray")
        .arg("--target").arg("Kevin Bacon");
    // 102 exists but is not one of the Emma Gray candidates.
    cmd.write_stdin("102\n");
    cmd.assert().failure().stderr(predicate::str::contains("Person not found."));
}
