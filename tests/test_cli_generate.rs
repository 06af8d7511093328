use assert_cmd::Command;
use predicates::prelude::predicate;

fn generate(args: &[&str]) -> String {
    let mut cmd = Command::cargo_bin("argprov").unwrap();
    let output = cmd
        .arg("generate")
        .args(args)
        .args(["--logging-level", "off"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_generate_sample() {
    assert_eq!(
        "% Simple Framework\narg(a).\narg(b).\narg(c).\natt(b,a).\natt(c,b).\n",
        generate(&["--sample", "simple"])
    );
}

#[test]
fn test_generate_sample_json() {
    let text = generate(&["--sample", "cycle", "--format", "json"]);
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!("Cycle Example", json["name"]);
    assert_eq!("We should stay home", json["arguments"][2]["annotation"]);
    assert_eq!(3, json["defeats"].as_array().unwrap().len());
}

#[test]
fn test_generate_random() {
    let text = generate(&["-n", "6", "-m", "10", "--seed", "3"]);
    assert_eq!(6, text.lines().filter(|l| l.starts_with("arg(")).count());
    let attacks = text
        .lines()
        .filter(|l| l.starts_with("att("))
        .collect::<Vec<&str>>();
    assert_eq!(10, attacks.len());
    assert!(attacks.iter().all(|a| {
        let (from, to) = a[4..a.len() - 2].split_once(',').unwrap();
        from != to
    }));
    assert_eq!(text, generate(&["-n", "6", "-m", "10", "--seed", "3"]));
}

#[test]
fn test_generate_default_sizes() {
    let text = generate(&["--format", "dot"]);
    assert!(text.starts_with("digraph"));
    assert_eq!(8, text.matches("->").count());
}

#[test]
fn test_generate_too_many_attacks() {
    let mut cmd = Command::cargo_bin("argprov").unwrap();
    cmd.args(["generate", "-n", "3", "-m", "7"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "7 attacks cannot be drawn among 3 arguments (at most 6)",
        ));
}

#[test]
fn test_generate_sample_conflicts_with_random() {
    let mut cmd = Command::cargo_bin("argprov").unwrap();
    cmd.args(["generate", "--sample", "simple", "--seed", "1"])
        .assert()
        .failure();
}
