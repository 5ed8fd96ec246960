use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_doctable")))
}

fn fixture_root() -> String {
    format!("{}/tests/fixtures/src", env!("CARGO_MANIFEST_DIR"))
}

fn stdout_report() -> String {
    let assert = cmd()
        .arg(fixture_root())
        .args(["-o", "-"])
        .assert()
        .success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

#[test]
fn stdout_matches_expected_report() {
    let expected = std::fs::read_to_string(fixture_path("expected.html")).unwrap();
    assert_eq!(stdout_report(), expected);
}

#[test]
fn tables_follow_traversal_order() {
    let output = stdout_report();
    assert_eq!(output.matches("<table>").count(), 3);

    let enums = output.find("<code>enums.h</code>").unwrap();
    let game = output.find("<code>game.h</code>").unwrap();
    let text = output.find("<code>utils/utils.text.h</code>").unwrap();
    assert!(enums < game && game < text);
}

#[test]
fn file_without_declarations_is_header_only() {
    let output = stdout_report();
    let table = output.split("</table>").next().unwrap();
    assert!(table.contains("<code>enums.h</code>"));
    assert_eq!(table.matches("<tr>").count(), 1);
}

#[test]
fn multi_parameter_signature_is_split() {
    let output = stdout_report();
    assert!(output.contains(
        "<pre style=\"background: 0;\">void move(\n\tint x,\n\tint y\n)</pre>"
    ));
    assert!(output.contains("<td colspan=\"4\">Moves the entity. </td>"));
}

#[test]
fn signature_without_brace_is_flagged() {
    let output = stdout_report();
    assert!(output.contains("FIX THIS: int Game_main(int argc, char **argv)"));
}

#[test]
fn missing_documentation_uses_sentinel() {
    let output = stdout_report();
    assert!(output.contains("struct UtilsText *UtilsText_new()</pre>"));
    assert!(output.contains("No documentation found."));
}

#[test]
fn blank_comment_lines_become_breaks() {
    let output = stdout_report();
    assert!(output.contains("Initializes the object.\n<br>\nResets the line count to zero."));
    assert!(!output.contains("@param"));
}

#[test]
fn numbering_restarts_per_file() {
    let output = stdout_report();
    let tables: Vec<&str> = output.split("</table>").collect();
    // game.h has two rows, utils.text.h two rows, each counting from 1
    for table in &tables[1..3] {
        assert!(table.contains("<td>1</td>"));
        assert!(table.contains("<td>2</td>"));
        assert!(!table.contains("<td>3</td>"));
    }
}

#[test]
fn writes_report_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("report.html");

    cmd()
        .arg(fixture_root())
        .args(["-o", out.to_str().unwrap()])
        .assert()
        .success();

    let written = std::fs::read_to_string(out).unwrap();
    assert_eq!(written, stdout_report());
}

#[test]
fn default_paths_are_relative_to_working_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("src")).unwrap();
    std::fs::write(dir.path().join("src/a.c"), "/* Entry. */\nint main() {\n}\n").unwrap();

    cmd().current_dir(dir.path()).assert().success();

    let written = std::fs::read_to_string(dir.path().join("testScriptTable.txt")).unwrap();
    assert!(written.contains("<code>a.c</code>"));
    assert!(written.contains("Entry. "));
}

#[test]
fn missing_root_fails() {
    let dir = TempDir::new().unwrap();

    cmd()
        .arg(dir.path().join("nope").to_str().unwrap())
        .args(["-o", "-"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("source directory not found"));
}
