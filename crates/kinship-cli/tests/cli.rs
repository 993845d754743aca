use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const FAMILY_YAML: &str = r#"
people:
  Boris: { gender: m }
  Vera: { gender: f }
  Ivan: { gender: m }
  Olga: { gender: f }
  Petr: { gender: m }
  Anna: { gender: f }
  Hermit: { gender: m }
families:
  - parents: [Boris, Vera]
    children: [Ivan]
  - parents: [Ivan, Olga]
    children: [Petr, Anna]
"#;

struct Fixture {
    dir: TempDir,
    file: PathBuf,
}

impl Fixture {
    fn new(content: &str, file_name: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join(file_name);
        std::fs::write(&file, content).unwrap();
        Self { dir, file }
    }

    fn family() -> Self {
        Self::new(FAMILY_YAML, "family.yml")
    }

    fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("kinship").unwrap();
        cmd.env_remove("RUST_LOG")
            .arg("--config")
            .arg(self.config_path())
            .arg("--file")
            .arg(&self.file);
        cmd
    }
}

fn write_config(path: &Path, content: &str) {
    std::fs::write(path, content).unwrap();
}

#[test]
fn query_child_lists_parents_siblings_and_grandparents() {
    let fixture = Fixture::family();

    fixture
        .cmd()
        .args(["query", "Petr"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Petr (m) has the following relatives:"))
        .stdout(predicate::str::contains("Parents: Ivan (m), Olga (f)"))
        .stdout(predicate::str::contains("Siblings: Anna (f)"))
        .stdout(predicate::str::contains("Grandparents: Boris (m), Vera (f)"))
        .stdout(predicate::str::contains("Spouse").not());
}

#[test]
fn query_parent_lists_spouse_and_children() {
    let fixture = Fixture::family();

    fixture
        .cmd()
        .args(["query", "Ivan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Spouse: Olga (f)"))
        .stdout(predicate::str::contains("Parents: Boris (m), Vera (f)"))
        .stdout(predicate::str::contains("Children: Petr (m), Anna (f)"));
}

#[test]
fn query_unknown_name_fails() {
    let fixture = Fixture::family();

    fixture
        .cmd()
        .args(["query", "Unknown"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Name 'Unknown' is not present in the family tree",
        ))
        .stderr(predicate::str::contains("Not found: Unknown"));
}

#[test]
fn query_json_output() {
    let fixture = Fixture::family();

    let output = fixture
        .cmd()
        .args(["--format", "json", "query", "Anna"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["name"], "Anna");
    assert_eq!(value["gender"], "f");
    assert_eq!(value["relatives"]["siblings"][0], "Petr");
    assert!(value["relatives"].get("spouse").is_none());
}

#[test]
fn shell_answers_until_exit() {
    let fixture = Fixture::family();

    fixture
        .cmd()
        .write_stdin("Hermit\nNobody\nEXIT\nPetr\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hermit (m) has the following relatives:"))
        .stdout(predicate::str::contains("(no known relatives)"))
        .stdout(predicate::str::contains(
            "Name 'Nobody' is not present in the family tree",
        ))
        .stdout(predicate::str::contains("Petr (m) has").not());
}

#[test]
fn shell_uses_configured_exit_command() {
    let fixture = Fixture::family();
    write_config(&fixture.config_path(), "exit_command = \"quit\"\n");

    fixture
        .cmd()
        .arg("shell")
        .write_stdin("exit\nQuit\nPetr\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("or 'quit' to quit"))
        .stdout(predicate::str::contains("Name 'exit' is not present"))
        .stdout(predicate::str::contains("Petr (m) has").not());
}

#[test]
fn people_lists_sorted_names() {
    let fixture = Fixture::family();

    fixture
        .cmd()
        .arg("people")
        .assert()
        .success()
        .stdout(predicate::str::contains("People (7 found):"))
        .stdout(predicate::str::is_match(r"(?s)Anna \(f\).*Boris \(m\).*Vera \(f\)").unwrap());
}

#[test]
fn json_input_is_supported() {
    let json = r#"{
        "people": {"Ivan": {"gender": "m"}, "Olga": {"gender": "f"}},
        "families": [{"parents": ["Ivan", "Olga"]}]
    }"#;
    let fixture = Fixture::new(json, "family.json");

    fixture
        .cmd()
        .args(["query", "Olga"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Spouse: Ivan (m)"));
}

#[test]
fn dangling_reference_aborts_load() {
    let yaml = "people:\n  Ivan: {gender: m}\nfamilies:\n  - parents: [Ivan, Ghost]\n";
    let fixture = Fixture::new(yaml, "family.yml");

    fixture
        .cmd()
        .args(["query", "Ivan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown wife 'Ghost'"));
}

#[test]
fn malformed_input_aborts_load() {
    let yaml = "people:\n  Ivan: {gender: m}\n";
    let fixture = Fixture::new(yaml, "family.yml");

    fixture
        .cmd()
        .arg("people")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load family tree"));
}

#[test]
fn missing_input_file_aborts() {
    let fixture = Fixture::family();
    let mut cmd = Command::cargo_bin("kinship").unwrap();

    cmd.arg("--config")
        .arg(fixture.config_path())
        .arg("--file")
        .arg(fixture.dir.path().join("absent.yml"))
        .arg("people")
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.yml"));
}

#[test]
fn config_set_get_roundtrip() {
    let fixture = Fixture::family();
    let config = fixture.config_path();

    Command::cargo_bin("kinship")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .args(["config", "set", "format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set format = json"));

    Command::cargo_bin("kinship")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "format"])
        .assert()
        .success()
        .stdout(predicate::str::diff("json\n"));

    // the configured format applies to lookups
    fixture
        .cmd()
        .args(["query", "Petr"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Petr\""));
}

#[test]
fn config_init_refuses_to_overwrite() {
    let fixture = Fixture::family();
    let config = fixture.config_path();

    Command::cargo_bin("kinship")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .success();

    Command::cargo_bin("kinship")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn config_list_shows_defaults_then_written_values() {
    let fixture = Fixture::family();
    let config = fixture.config_path();

    Command::cargo_bin("kinship")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not found, showing defaults"))
        .stdout(predicate::str::contains("exit_command = exit"))
        .stdout(predicate::str::contains("format = text"));

    Command::cargo_bin("kinship")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("input_file = input.yml"));

    Command::cargo_bin("kinship")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("showing defaults").not())
        .stdout(predicate::str::contains("input_file = input.yml"));
}

#[test]
fn completions_generate_script() {
    Command::cargo_bin("kinship")
        .unwrap()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kinship"));
}
