use std::process::{Command, Output};

fn maze_driver(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_maze_driver"))
        .args(args)
        .output()
        .expect("maze_driver should start")
}

#[test]
fn help_prints_usage_and_succeeds() {
    let out = maze_driver(&["--help"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("--show-path"));
}

#[test]
fn bad_argument_is_a_usage_error() {
    let out = maze_driver(&["--width=abc"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    // docopt reports the problem itself rather than a Debug dump of an error chain.
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(!stderr.is_empty());
    assert!(!stderr.contains("Error("));
}

#[test]
fn seeded_run_prints_summary_and_path() {
    let out = maze_driver(&["--width=3", "--height=2", "--seed=4", "--show-path"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("3x2 maze: 6 cells, 5 passages"));
    assert!(stdout.contains("(0, 0)"));
    assert!(stdout.contains("(2, 1)"));
}

#[test]
fn show_path_on_empty_maze_fails() {
    let out = maze_driver(&["--width=0", "--height=3", "--show-path"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("at least one cell"));
}
