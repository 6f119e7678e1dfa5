use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

#[allow(deprecated)]
fn fileorder(workdir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("fileorder").expect("binary");
    cmd.current_dir(workdir);
    cmd
}

fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    assert!(
        output.status.success(),
        "stdout: {}\nstderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn sort_names_from_stdin() {
    let temp = tempdir().unwrap();

    let output = fileorder(temp.path())
        .arg("sort")
        .write_stdin("img10.png\nimg2.png\n\nIMG1.png\n")
        .output()
        .expect("command run");

    assert_eq!(stdout_lines(&output), ["IMG1.png", "img2.png", "img10.png"]);
}

#[test]
fn sort_paths_from_file_is_directory_first() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("paths.txt");
    fs::write(
        &input,
        "src/util/mod.rs\nsrc/item10.rs\nCargo.toml\nsrc\nsrc/item2.rs\n",
    )
    .unwrap();

    let output = fileorder(temp.path())
        .args(["sort", "--by", "paths", "--separator", "/"])
        .arg(&input)
        .output()
        .expect("command run");

    assert_eq!(
        stdout_lines(&output),
        [
            "Cargo.toml",
            "src",
            "src/item2.rs",
            "src/item10.rs",
            "src/util/mod.rs",
        ]
    );
}

#[test]
fn sort_extensions_reversed() {
    let temp = tempdir().unwrap();

    let output = fileorder(temp.path())
        .args(["sort", "--by", "extensions", "--reverse", "-"])
        .write_stdin("b.rs\na.md\na.rs\n")
        .output()
        .expect("command run");

    assert_eq!(stdout_lines(&output), ["b.rs", "a.rs", "a.md"]);
}

#[test]
fn sort_json_output() {
    let temp = tempdir().unwrap();

    let output = fileorder(temp.path())
        .args(["sort", "--by", "anything", "--query", "Test", "--json"])
        .write_stdin("other\nmytest\ntest.txt\n")
        .output()
        .expect("command run");

    assert!(output.status.success());
    let body: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(body["by"], "anything");
    assert_eq!(
        body["items"],
        serde_json::json!(["test.txt", "mytest", "other"])
    );
}

#[test]
fn sort_missing_input_fails() {
    let temp = tempdir().unwrap();

    let output = fileorder(temp.path())
        .args(["sort", "does-not-exist.txt"])
        .output()
        .expect("command run");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read"));
}

#[test]
fn no_reverse_overrides_config() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join(".fileorder.toml"), "reverse = true\n").unwrap();

    let output = fileorder(temp.path())
        .arg("sort")
        .write_stdin("b\na\nc\n")
        .output()
        .expect("command run");
    assert_eq!(stdout_lines(&output), ["c", "b", "a"]);

    let output = fileorder(temp.path())
        .args(["sort", "--no-reverse"])
        .write_stdin("b\na\nc\n")
        .output()
        .expect("command run");
    assert_eq!(stdout_lines(&output), ["a", "b", "c"]);
}
