use assert_cmd::prelude::*;
use std::process::Command;

#[test]
fn run_bidirectional() {
    let output = r"Solving levels/custom/01-corridor.txt using bidirectional...
Found solution:
#####
#@$.#
#####

#####
# @*#
#####

R
Moves: 1
Pushes: 1
";

    Command::main_binary()
        .unwrap()
        .env_remove("RUST_LOG")
        .arg("levels/custom/01-corridor.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_iterative_deepening_grid() {
    // the last row is all floor so it's printed as an empty line
    let output = "Solving levels/custom/05-grid.txt using iterative-deepening...\n\
                  Found solution:\n\
                  @ $.\n #\n\n\n\
                  \x20@$.\n #\n\n\n\
                  \x20 @*\n #\n\n\n\
                  rR\n\
                  Moves: 2\n\
                  Pushes: 1\n";

    Command::main_binary()
        .unwrap()
        .env_remove("RUST_LOG")
        .arg("--iterative-deepening")
        .arg("--grid")
        .arg("levels/custom/05-grid.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_no_solution() {
    Command::main_binary()
        .unwrap()
        .env_remove("RUST_LOG")
        .arg("levels/custom/04-no-solution.txt")
        .assert()
        .success()
        .stdout("Solving levels/custom/04-no-solution.txt using bidirectional...\nNo solution\n");
}

#[test]
fn run_with_stats() {
    Command::main_binary()
        .unwrap()
        .env_remove("RUST_LOG")
        .arg("--stats")
        .arg("levels/custom/03-detour.txt")
        .assert()
        .success();
}

#[test]
fn run_out_of_time() {
    Command::main_binary()
        .unwrap()
        .env_remove("RUST_LOG")
        .arg("--iterative-deepening")
        .arg("--min-depth")
        .arg("40")
        .arg("--time-limit")
        .arg("0")
        .arg("levels/custom/06-stuck-in-corner.txt")
        .assert()
        .code(2);
}

#[test]
fn run_missing_file() {
    Command::main_binary()
        .unwrap()
        .arg("levels/custom/does-not-exist.txt")
        .assert()
        .code(1);
}

#[test]
fn run_bad_formatting_args() {
    // doesn't check stderr, clap might complain about either flag

    Command::main_binary()
        .unwrap()
        .arg("--grid")
        .arg("--xsb")
        .arg("levels/custom/01-corridor.txt")
        .assert()
        .failure()
        .stdout("");
}
