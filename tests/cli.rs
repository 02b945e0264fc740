use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A setwise command isolated from the user's home and environment.
fn setwise(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("setwise").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("SETWISE_WORKOUTS")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn list_shows_bundled_workouts() {
    let home = TempDir::new().unwrap();

    setwise(&home)
        .args(["list", "--output", "pretty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("full-body"))
        .stdout(predicate::str::contains("Quick Core"));
}

#[test]
fn list_json_is_parseable() {
    let home = TempDir::new().unwrap();

    let output = setwise(&home).args(["ls", "-o", "json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(value["count"].as_u64().unwrap() >= 1);
}

#[test]
fn plan_by_name_is_case_insensitive() {
    let home = TempDir::new().unwrap();

    setwise(&home)
        .args(["plan", "quick core"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dead Bug"))
        .stdout(predicate::str::contains("Side Plank"));
}

#[test]
fn plan_unknown_workout_fails() {
    let home = TempDir::new().unwrap();

    setwise(&home)
        .args(["plan", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No workout named 'nope'"));
}

#[test]
fn plan_without_name_or_default_fails() {
    let home = TempDir::new().unwrap();

    setwise(&home)
        .arg("plan")
        .assert()
        .failure()
        .stderr(predicate::str::contains("workouts.default"));
}

#[test]
fn custom_workout_file() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("mine.json");
    std::fs::write(
        &file,
        r#"{"workouts": [{"id": "legs", "name": "Leg Day", "sections": [
            {"id": "main", "name": "Main", "exercises": [
                {"type": "reps", "id": "squat", "name": "Goblet Squat", "sets": 3,
                 "restAfterSet": 90, "reps": {"min": 8, "max": 10}}
            ]}
        ]}]}"#,
    )
    .unwrap();

    setwise(&home)
        .args(["plan", "legs", "-o", "json", "--workouts"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Goblet Squat"))
        .stdout(predicate::str::contains("\"total_exercises\": 1"));
}

#[test]
fn default_workout_from_config() {
    let home = TempDir::new().unwrap();
    let root = home.path().join(".setwise");
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(
        root.join("config.yaml"),
        "workouts:\n  default: mobility\ngeneral:\n  default_output: json\n",
    )
    .unwrap();

    setwise(&home)
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": \"mobility\""));
}

#[test]
fn config_init_then_path() {
    let home = TempDir::new().unwrap();

    setwise(&home).args(["config", "init"]).assert().success();
    assert!(home.path().join(".setwise/config.yaml").exists());

    setwise(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    setwise(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.yaml"));
}

#[test]
fn completions_for_bash() {
    let home = TempDir::new().unwrap();

    setwise(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("setwise"));
}

#[test]
fn run_with_unopenable_log_file_warns_and_stays_quiet() {
    let home = TempDir::new().unwrap();
    std::fs::create_dir_all(home.path().join(".setwise/setwise.log")).unwrap();

    setwise(&home)
        .args(["-v", "run", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot open log file"))
        .stderr(predicate::str::contains("logging disabled"))
        .stderr(predicate::str::contains("DEBUG").not())
        .stderr(predicate::str::contains("no config file").not());
}

#[test]
fn verbose_logs_debug_to_stderr() {
    let home = TempDir::new().unwrap();

    setwise(&home)
        .args(["-v", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("no config file"));
}

#[test]
fn rust_log_overrides_verbose() {
    let home = TempDir::new().unwrap();

    setwise(&home)
        .args(["-v", "list"])
        .env("RUST_LOG", "error")
        .assert()
        .success()
        .stderr(predicate::str::contains("no config file").not());
}
