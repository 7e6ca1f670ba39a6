use std::process::Command;

#[test]
fn test_help_lists_commands() {
    let bin = env!("CARGO_BIN_EXE_codepointe");

    let output = Command::new(bin).arg("--help").output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["watch", "compile", "deploy", "classify"] {
        assert!(
            stdout.contains(command),
            "help output should list '{command}'; got:\n{stdout}"
        );
    }
}

#[test]
fn test_version_flag() {
    let bin = env!("CARGO_BIN_EXE_codepointe");

    let output = Command::new(bin).arg("--version").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("codepointe "), "got: {stdout}");
}

#[test]
fn test_missing_subcommand_is_usage_error() {
    let bin = env!("CARGO_BIN_EXE_codepointe");

    let output = Command::new(bin).output().unwrap();

    assert_eq!(output.status.code(), Some(2));
}
