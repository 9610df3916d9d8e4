use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db_with_user, rll, setup_test_db};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("init_schema");

    rll()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    // idempotent: a second init is a no-op
    rll()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
}

#[test]
fn test_user_add_and_balance() {
    let db_path = setup_test_db("user_add");
    init_db_with_user(&db_path, "alice", "5");

    rll()
        .args(["--db", &db_path, "balance", "alice"])
        .assert()
        .success()
        .stdout(contains("alice").and(contains("5")));

    // duplicate usernames are rejected
    rll()
        .args(["--db", &db_path, "user", "--add", "alice"])
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn test_unknown_user_fails() {
    let db_path = setup_test_db("unknown_user");

    rll()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rll()
        .args(["--db", &db_path, "balance", "ghost"])
        .assert()
        .failure()
        .stderr(contains("User not found"));
}

#[test]
fn test_add_full_day_deducts_one() {
    let db_path = setup_test_db("add_full_day");
    init_db_with_user(&db_path, "alice", "5");

    rll()
        .args([
            "--db",
            &db_path,
            "add",
            "alice",
            "FULL_DAY",
            "--start",
            "2026-02-20",
        ])
        .assert()
        .success()
        .stdout(contains("1 day(s) charged"));

    rll()
        .args(["--db", &db_path, "balance", "alice"])
        .assert()
        .success()
        .stdout(contains("4"));
}

#[test]
fn test_range_across_weekend_charges_two() {
    let db_path = setup_test_db("add_range_weekend");
    init_db_with_user(&db_path, "alice", "5");

    // Fri 2026-02-20 .. Mon 2026-02-23 → 2 days
    rll()
        .args([
            "--db",
            &db_path,
            "add",
            "alice",
            "RANGE",
            "--start",
            "2026-02-20",
            "--end",
            "2026-02-23",
        ])
        .assert()
        .success()
        .stdout(contains("2 day(s) charged"));

    rll()
        .args(["--db", &db_path, "balance", "alice"])
        .assert()
        .success()
        .stdout(contains("3"));
}

#[test]
fn test_add_rejects_bad_requests() {
    let db_path = setup_test_db("add_validation");
    init_db_with_user(&db_path, "alice", "5");

    // unknown record type
    rll()
        .args(["--db", &db_path, "add", "alice", "SABBATICAL"])
        .assert()
        .failure()
        .stderr(contains("Invalid record type"));

    // end before start
    rll()
        .args([
            "--db",
            &db_path,
            "add",
            "alice",
            "RANGE",
            "--start",
            "2026-02-23",
            "--end",
            "2026-02-20",
        ])
        .assert()
        .failure()
        .stderr(contains("end date must be >= start date"));

    // LATE without minutes
    rll()
        .args([
            "--db",
            &db_path,
            "add",
            "alice",
            "LATE",
            "--start",
            "2026-02-20",
        ])
        .assert()
        .failure()
        .stderr(contains("minutes is required"));
}

#[test]
fn test_insufficient_balance_is_rejected() {
    let db_path = setup_test_db("insufficient");
    init_db_with_user(&db_path, "bob", "0.5");

    rll()
        .args([
            "--db",
            &db_path,
            "add",
            "bob",
            "FULL_DAY",
            "--start",
            "2026-02-20",
        ])
        .assert()
        .failure()
        .stderr(contains("Insufficient leave balance"));

    // nothing was recorded
    rll()
        .args(["--db", &db_path, "list", "bob"])
        .assert()
        .success()
        .stdout(contains("No leave records"));

    rll()
        .args(["--db", &db_path, "balance", "bob"])
        .assert()
        .success()
        .stdout(contains("0.5"));
}

#[test]
fn test_del_refunds_and_hides_record() {
    let db_path = setup_test_db("del_refund");
    init_db_with_user(&db_path, "alice", "5");

    rll()
        .args([
            "--db",
            &db_path,
            "add",
            "alice",
            "FULL_DAY",
            "--start",
            "2026-02-20",
        ])
        .assert()
        .success();

    rll()
        .args(["--db", &db_path, "del", "1"])
        .assert()
        .success()
        .stdout(contains("refunded 1 day(s)"));

    rll()
        .args(["--db", &db_path, "balance", "alice"])
        .assert()
        .success()
        .stdout(contains("5"));

    rll()
        .args(["--db", &db_path, "list", "alice"])
        .assert()
        .success()
        .stdout(contains("No leave records"));
}

#[test]
fn test_accrue_is_idempotent_per_month() {
    let db_path = setup_test_db("accrue_idempotent");
    init_db_with_user(&db_path, "alice", "0");

    rll()
        .args(["--db", &db_path, "accrue", "--as-of", "2026-01-21"])
        .assert()
        .success()
        .stdout(contains("Monthly accrual executed"));

    rll()
        .args(["--db", &db_path, "accrue", "--as-of", "2026-01-21"])
        .assert()
        .success()
        .stdout(contains("nothing to do"));

    rll()
        .args(["--db", &db_path, "balance", "alice"])
        .assert()
        .success()
        .stdout(contains("1.2"));

    // wrong day is a plain no-op
    rll()
        .args(["--db", &db_path, "accrue", "--as-of", "2026-03-20"])
        .assert()
        .success()
        .stdout(contains("nothing to do"));
}

#[test]
fn test_ledger_verify_replays_the_balance() {
    let db_path = setup_test_db("ledger_verify");
    init_db_with_user(&db_path, "alice", "5");

    rll()
        .args([
            "--db",
            &db_path,
            "add",
            "alice",
            "RANGE",
            "--start",
            "2026-02-20",
            "--end",
            "2026-02-23",
        ])
        .assert()
        .success();

    rll()
        .args(["--db", &db_path, "adjust", "alice", "-0.5"])
        .assert()
        .success();

    rll()
        .args(["--db", &db_path, "accrue", "--as-of", "2026-01-21"])
        .assert()
        .success();

    rll()
        .args(["--db", &db_path, "ledger", "alice", "--verify"])
        .assert()
        .success()
        .stdout(contains("Ledger verified").and(contains("MONTHLY_ACCRUAL")));
}

#[test]
fn test_edit_settles_the_difference() {
    let db_path = setup_test_db("edit_settle");
    init_db_with_user(&db_path, "alice", "5");

    rll()
        .args([
            "--db",
            &db_path,
            "add",
            "alice",
            "RANGE",
            "--start",
            "2026-02-20",
            "--end",
            "2026-02-20",
        ])
        .assert()
        .success();

    // trim the single day to its morning half → +0.5 refunded
    rll()
        .args(["--db", &db_path, "edit", "1", "--end-half", "AM"])
        .assert()
        .success()
        .stdout(contains("charge 1 → 0.5 day(s)"));

    rll()
        .args(["--db", &db_path, "balance", "alice"])
        .assert()
        .success()
        .stdout(contains("4.5"));
}

#[test]
fn test_list_filters_by_period() {
    let db_path = setup_test_db("list_period");
    init_db_with_user(&db_path, "alice", "10");

    rll()
        .args([
            "--db",
            &db_path,
            "add",
            "alice",
            "FULL_DAY",
            "--start",
            "2026-02-20",
        ])
        .assert()
        .success();

    rll()
        .args([
            "--db",
            &db_path,
            "add",
            "alice",
            "FULL_DAY",
            "--start",
            "2026-03-02",
        ])
        .assert()
        .success();

    rll()
        .args(["--db", &db_path, "list", "alice", "--period", "2026-02"])
        .assert()
        .success()
        .stdout(contains("2026-02-20").and(contains("2026-03-02").not()));

    rll()
        .args(["--db", &db_path, "list", "alice", "--period", "2026"])
        .assert()
        .success()
        .stdout(contains("2026-02-20").and(contains("2026-03-02")));
}

#[test]
fn test_deactivated_user_is_skipped_by_accrual() {
    let db_path = setup_test_db("deactivate_accrual");
    init_db_with_user(&db_path, "alice", "0");

    rll()
        .args(["--db", &db_path, "user", "--add", "bob"])
        .assert()
        .success();

    rll()
        .args(["--db", &db_path, "user", "--deactivate", "bob"])
        .assert()
        .success()
        .stdout(contains("bob is now inactive"));

    rll()
        .args(["--db", &db_path, "accrue", "--as-of", "2026-01-21"])
        .assert()
        .success();

    rll()
        .args(["--db", &db_path, "balance", "bob"])
        .assert()
        .success()
        .stdout(contains("0").and(contains("inactive")));

    rll()
        .args(["--db", &db_path, "balance", "alice"])
        .assert()
        .success()
        .stdout(contains("1.2"));
}

#[test]
fn test_db_maintenance_commands() {
    let db_path = setup_test_db("db_maintenance");
    init_db_with_user(&db_path, "alice", "1");

    rll()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("integrity check passed"));

    rll()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Users:").and(contains("Ledger rows:")));

    rll()
        .args(["--db", &db_path, "db", "--vacuum"])
        .assert()
        .success();

    rll()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"));
}
