use assert_cmd::Command;
use predicates::prelude::predicate::str;

fn data_lines(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .skip(2)
        .map(|l| l.to_string())
        .collect()
}

#[test]
fn default_run_prints_500_lines() {
    let mut cmd = Command::cargo_bin("divisor_parity").unwrap();
    let output = cmd
        .assert()
        .success()
        .stdout(str::starts_with(
            "========== COUNT OF ODD AND EVEN DIVISORS FOR NUMBERS 1 TO 500 ==========\n\n1 0\n",
        ))
        .get_output()
        .stdout
        .clone();

    let lines = data_lines(&output);
    assert_eq!(lines.len(), 500);
    assert_eq!(lines[5], "2 2");
    assert_eq!(lines[15], "1 4");
    assert_eq!(lines[99], "3 6");
}

#[test]
fn custom_upper_bound_limits_lines() {
    let mut cmd = Command::cargo_bin("divisor_parity").unwrap();
    cmd.arg("16");

    let output = cmd
        .assert()
        .success()
        .stdout(str::contains("NUMBERS 1 TO 16 "))
        .get_output()
        .stdout
        .clone();

    let lines = data_lines(&output);
    assert_eq!(lines.len(), 16);
    assert_eq!(lines.last().map(String::as_str), Some("1 4"));
}

#[test]
fn verbose_logging_keeps_stdout_clean() {
    let mut cmd = Command::cargo_bin("divisor_parity").unwrap();
    cmd.arg("3").arg("--verbose").env_remove("RUST_LOG");

    cmd.assert()
        .success()
        .stdout(str::ends_with("\n\n1 0\n1 1\n2 0\n"))
        .stderr(str::contains("counted divisors"));
}

#[test]
fn zero_upper_bound_fails() {
    let mut cmd = Command::cargo_bin("divisor_parity").unwrap();
    cmd.arg("0");

    cmd.assert()
        .failure()
        .stderr(str::contains("Upper bound must be positive"));
}

#[test]
fn non_numeric_upper_bound_fails() {
    let mut cmd = Command::cargo_bin("divisor_parity").unwrap();
    cmd.arg("ten");

    cmd.assert().failure().stdout(str::is_empty());
}
