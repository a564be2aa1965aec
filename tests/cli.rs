use assert_cmd::Command;

fn lariat() -> Command {
    Command::cargo_bin("lariat").unwrap()
}

#[test]
fn translate_prints_the_negation_normal_form() {
    lariat()
        .args(["translate", "--with", "nnf", "tests/data/invariant.ltl"])
        .assert()
        .success()
        .stdout("#false R x = 1\n");
}

#[test]
fn check_reports_a_holding_specification() {
    lariat()
        .args([
            "check",
            "--model",
            "cycle",
            "--modulus",
            "3",
            "tests/data/liveness.ltl",
        ])
        .assert()
        .success()
        .stdout("The LTL specification holds.\n");
}

#[test]
fn check_prints_the_counterexample_lasso() {
    let assert = lariat()
        .args([
            "check",
            "--model",
            "cycle",
            "--modulus",
            "3",
            "tests/data/invariant.ltl",
        ])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.starts_with("The LTL specification does not hold.\n"));
    assert!(stdout.contains("Loop:"));
}

#[test]
fn malformed_specifications_abort_with_an_error() {
    lariat()
        .args([
            "check",
            "--model",
            "collatz",
            "tests/data/malformed.ltl",
        ])
        .assert()
        .failure();
}

#[test]
fn the_modulus_must_be_positive() {
    lariat()
        .args([
            "check",
            "--model",
            "cycle",
            "--modulus",
            "0",
            "tests/data/liveness.ltl",
        ])
        .assert()
        .failure();
}
