use assert_cmd::Command;
use assert_fs::{prelude::FileWriteStr, NamedTempFile};
use predicates::prelude::{predicate, PredicateBooleanExt};

const INSTANCE: &str = r#"{
    "name": "chain",
    "arguments": [
        {"id": "a", "annotation": "the claim"},
        {"id": "b", "url": "http://example.org/b"},
        {"id": "c"}
    ],
    "defeats": [
        {"from": "b", "to": "a", "annotation": "rebuts"},
        {"from": "c", "to": "b"}
    ]
}"#;

fn export(args: &[&str]) -> assert_cmd::assert::Assert {
    let file = NamedTempFile::new("instance.json").unwrap();
    file.write_str(INSTANCE).unwrap();
    let mut cmd = Command::cargo_bin("argprov").unwrap();
    cmd.arg("export")
        .arg("-f")
        .arg(file.path())
        .args(args)
        .arg("--logging-level")
        .arg("off");
    let assert = cmd.assert();
    file.close().unwrap();
    assert
}

#[test]
fn test_export_apx() {
    export(&["--format", "apx"])
        .success()
        .stdout(predicate::eq(
            "% chain\narg(a).\narg(b).\narg(c).\natt(b,a).\natt(c,b).\n",
        ));
}

#[test]
fn test_export_json() {
    export(&["--format", "json"]).success().stdout(
        predicate::str::contains(r#""name": "chain""#)
            .and(predicate::str::contains(r#""annotation": "rebuts""#))
            .and(predicate::str::contains(r#""url": "http://example.org/b""#)),
    );
}

#[test]
fn test_export_dot_uncolored() {
    export(&[]).success().stdout(
        predicate::str::starts_with("digraph ArgumentationFramework {\n")
            .and(predicate::str::contains("rankdir=LR;"))
            .and(predicate::str::contains(
                r##""a" [fillcolor="#fefe62", fontcolor="black", tooltip="the claim"];"##,
            ))
            .and(predicate::str::contains(
                r##""b" [fillcolor="#fefe62", fontcolor="black", URL="http://example.org/b"];"##,
            ))
            .and(predicate::str::contains(r#""b" -> "a" [label="rebuts"];"#)),
    );
}

#[test]
fn test_export_dot_colored() {
    export(&["-s", "grounded", "--direction", "tb", "--rank-same", "a,c"])
        .success()
        .stdout(
            predicate::str::contains("rankdir=TB;")
                .and(predicate::str::contains(r##""c" [fillcolor="#40cfff", fontcolor="black"];"##))
                .and(predicate::str::contains(r#"{ rank=same; "a"; "c"; }"#)),
        );
}

#[test]
fn test_export_dot_no_backward_arrows() {
    export(&["--no-backward-arrows"])
        .success()
        .stdout(predicate::str::contains("->").not());
}
