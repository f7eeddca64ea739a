use std::process::Command;

fn deskline(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_deskline"))
        .args(args)
        .output()
        .expect("failed to run deskline binary")
}

#[test]
fn test_fixed_accepts_precision_up_to_limit() {
    let output = deskline(&["fixed", "0.125", "2"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "0.13");

    let output = deskline(&["fixed", "1", "100"]);
    assert!(output.status.success());
}

#[test]
fn test_fixed_rejects_oversized_precision() {
    let output = deskline(&["fixed", "1.5", "101"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());

    let output = deskline(&["fixed", "1.5", "18446744073709551615"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_unknown_command_prints_usage() {
    let output = deskline(&["frobnicate"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("usage"));
}
