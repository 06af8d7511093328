use assert_cmd::Command;
use assert_fs::{prelude::FileWriteStr, NamedTempFile};
use predicates::prelude::{predicate, PredicateBooleanExt};

const CHAIN: &str = r#"% a defense chain
arg(a).
arg(b).
arg(c).
att(b,a).
att(c,b).
"#;

const ODD_CYCLE: &str = r#"arg(a).
arg(b).
arg(c).
att(a,b).
att(b,c).
att(c,a).
"#;

const MUTUAL_ATTACK: &str = r#"{
    "arguments": [{"id": "a"}, {"id": "b"}, {"id": "c"}],
    "defeats": [{"from": "a", "to": "b"}, {"from": "b", "to": "a"}]
}"#;

fn solve(instance: &str, file_name: &str, args: &[&str]) -> assert_cmd::assert::Assert {
    let file = NamedTempFile::new(file_name).unwrap();
    file.write_str(instance).unwrap();
    let mut cmd = Command::cargo_bin("argprov").unwrap();
    cmd.arg("solve").arg("-f").arg(file.path()).args(args);
    let assert = cmd.assert();
    file.close().unwrap();
    assert
}

#[test]
fn test_grounded_statuses() {
    solve(CHAIN, "chain.apx", &["-s", "grounded", "--logging-level", "off"])
        .success()
        .stdout(predicate::eq("accepted: [a,c]\nrejected: [b]\nundecided: []\n"));
}

#[test]
fn test_short_semantics_name() {
    solve(CHAIN, "chain.apx", &["-s", "PR", "--logging-level", "off"])
        .success()
        .stdout(predicate::eq("accepted: [a,c]\nrejected: [b]\nundecided: []\n"));
}

#[test]
fn test_json_input_extensions() {
    solve(
        MUTUAL_ATTACK,
        "mutual.json",
        &["-s", "preferred", "--extensions", "--logging-level", "off"],
    )
    .success()
    .stdout(predicate::eq("[a,c]\n[b,c]\n"));
}

#[test]
fn test_forced_json_reader() {
    solve(
        MUTUAL_ATTACK,
        "mutual.txt",
        &["-s", "complete", "-r", "json", "--logging-level", "off"],
    )
    .success()
    .stdout(predicate::eq("accepted: [c]\nrejected: []\nundecided: [a,b]\n"));
}

#[test]
fn test_no_stable_extension() {
    solve(ODD_CYCLE, "cycle.apx", &["-s", "stable", "--logging-level", "off"])
        .success()
        .stdout(predicate::eq("NO STABLE EXTENSION\n"));
    solve(
        ODD_CYCLE,
        "cycle.apx",
        &["-s", "stable", "--extensions", "--logging-level", "off"],
    )
    .success()
    .stdout(predicate::eq("NO STABLE EXTENSION\n"));
}

#[test]
fn test_json_output() {
    solve(CHAIN, "chain.apx", &["-s", "grounded", "--json", "--logging-level", "off"])
        .success()
        .stdout(
            predicate::str::starts_with("{")
                .and(predicate::str::contains(r#""semantics": "grounded""#))
                .and(predicate::str::contains(r#""reason": "attackedByAccepted""#))
                .and(predicate::str::contains(r#""disputeTree": {"#)),
        );
}

#[test]
fn test_search_budget_exceeded() {
    solve(
        MUTUAL_ATTACK,
        "mutual.json",
        &["-s", "complete", "--search-budget", "1"],
    )
    .failure()
    .stdout(predicate::str::contains(
        "caused by: search budget exceeded (limit is 1)",
    ));
}

#[test]
fn test_logs_are_prefixed() {
    solve(CHAIN, "chain.apx", &["-s", "grounded"])
        .success()
        .stdout(
            predicate::str::contains("!")
                .and(predicate::str::contains("reading input file"))
                .and(predicate::str::contains("\naccepted: [a,c]\n")),
        );
}

#[test]
fn test_missing_semantics() {
    solve(CHAIN, "chain.apx", &[]).failure();
}

#[test]
fn test_unknown_semantics() {
    solve(CHAIN, "chain.apx", &["-s", "ideal"])
        .failure()
        .stdout(predicate::str::contains(r#"undefined semantics "ideal""#));
}

#[test]
fn test_invalid_input() {
    solve("arg(a).\natt(a,b).\n", "invalid.apx", &["-s", "grounded"])
        .failure()
        .stdout(predicate::str::contains("no such argument: b"));
}
