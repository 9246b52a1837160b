use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time must be after UNIX_EPOCH")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "pep2html_cli_{}_{}_{}",
        prefix,
        std::process::id(),
        nanos
    ));
    std::fs::create_dir_all(&dir).expect("failed to create temp dir");
    dir
}

#[test]
fn test_cli_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_pep2html"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("--install"));
}

#[test]
fn test_cli_rejects_extra_arguments() {
    let output = Command::new(env!("CARGO_BIN_EXE_pep2html"))
        .args(["someone", "unexpected"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
}

#[test]
fn test_cli_renders_directory() {
    let dir = temp_dir("render");
    std::fs::write(dir.join("pep-0000.txt"), "PEP: 0\nTitle: Index\n\n    pep-0001.txt\n")
        .expect("write index");
    std::fs::write(dir.join("pep-0001.txt"), "PEP: 1\nTitle: Purpose\n\nAbstract\n")
        .expect("write pep");
    std::fs::write(dir.join("notes.txt"), "not a pep\n").expect("write notes");

    let output = Command::new(env!("CARGO_BIN_EXE_pep2html"))
        .arg("--dir")
        .arg(&dir)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("pep-0000.txt -> "));
    assert!(stdout.contains("pep-0001.html"));

    let index = std::fs::read_to_string(dir.join("pep-0000.html")).expect("index page");
    assert!(index.contains("<a href='pep-0001.html'>pep-0001.txt</a>"));
    assert!(!index.contains(">index</a>"));

    let page = std::fs::read_to_string(dir.join("pep-0001.html")).expect("pep page");
    assert!(page.contains("<title>PEP 1 -- Purpose</title>"));
    assert!(page.contains("<h3>Abstract</h3>"));
    assert!(!dir.join("notes.html").exists());

    let _ = std::fs::remove_dir_all(&dir);
}
