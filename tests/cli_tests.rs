//! End-to-end tests for the `stufin` binary
//!
//! Every invocation is its own in-memory session seeded with the demo
//! dataset, so commands can be asserted in isolation.

use assert_cmd::Command;
use predicates::prelude::*;

fn stufin() -> Command {
    Command::cargo_bin("stufin").expect("binary builds")
}

#[test]
fn no_subcommand_prints_hint() {
    stufin()
        .assert()
        .success()
        .stdout(predicate::str::contains("stufin --help"));
}

#[test]
fn classify_bus_ticket_is_transportation() {
    stufin()
        .args(["classify", "Bus ticket"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transportation"));
}

#[test]
fn classify_gibberish_is_other() {
    stufin()
        .args(["classify", "Random gibberish xyz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Other"));
}

#[test]
fn expense_list_shows_demo_entries() {
    stufin()
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Lunch at cafeteria")
                .and(predicate::str::contains("$12.50"))
                .and(predicate::str::contains("Textbook rental")),
        );
}

#[test]
fn expense_add_without_category_infers_one() {
    stufin()
        .args(["expense", "add", "Late night pizza", "18.40"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("exp-6")
                .and(predicate::str::contains("Food"))
                .and(predicate::str::contains("$18.40")),
        );
}

#[test]
fn expense_add_requires_description() {
    stufin()
        .args(["expense", "add", "", "5.00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Description is required"));
}

#[test]
fn expense_add_rejects_malformed_amount() {
    stufin()
        .args(["expense", "add", "Lunch", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount"));
}

#[test]
fn goal_list_shows_demo_progress() {
    stufin()
        .args(["goal", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Emergency Fund")
                .and(predicate::str::contains("$800.00 / $2000.00"))
                .and(predicate::str::contains("40% complete")),
        );
}

#[test]
fn goal_contribute_updates_goal() {
    stufin()
        .args(["goal", "contribute", "goal-1", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$850.00 / $2000.00"));
}

#[test]
fn goal_contribute_unknown_goal_fails() {
    stufin()
        .args(["goal", "contribute", "goal-99", "25"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Goal not found"));
}

#[test]
fn goal_add_requires_deadline() {
    stufin()
        .args(["goal", "add", "New Bike", "400"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Deadline is required"));
}

#[test]
fn summary_reports_demo_totals() {
    stufin()
        .args(["summary"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Total spent: $94.15 (5 expenses)")
                .and(predicate::str::contains("Goals: 4   Completed: 0"))
                .and(predicate::str::contains("Overall progress: 41%")),
        );
}

#[test]
fn empty_session_has_no_data() {
    stufin()
        .args(["--empty", "summary"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Total spent: $0.00 (0 expenses)")
                .and(predicate::str::contains("Goals: 0")),
        );
}
