//! Monthly accrual job: day-21 trigger, once-per-month idempotence,
//! active-user filtering.

mod common;
use common::{setup_test_db, test_config};

use chrono::NaiveDate;
use rleaveledger::core::accrual::AccrualLogic;
use rleaveledger::db::initialize::init_db;
use rleaveledger::db::pool::DbPool;
use rleaveledger::db::queries::{
    find_user_by_username, insert_user, load_ledger_for_user, set_user_active,
};
use rleaveledger::models::tx_source::TxSource;
use rleaveledger::models::user::User;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn open_db(name: &str) -> DbPool {
    let db_path = setup_test_db(name);
    let pool = DbPool::new(&db_path).unwrap();
    init_db(&pool.conn).unwrap();
    pool
}

#[test]
fn accrual_runs_once_per_month() {
    let mut pool = open_db("accrual_idempotent");
    let cfg = test_config("unused");
    insert_user(&pool.conn, &User::new("u1")).unwrap();

    // as-of 2026-01-21, accrual amount 1.2
    let first = AccrualLogic::run(&mut pool, &cfg, Some(d(2026, 1, 21))).unwrap();
    let second = AccrualLogic::run(&mut pool, &cfg, Some(d(2026, 1, 21))).unwrap();

    assert!(first);
    assert!(!second);

    let user = find_user_by_username(&pool.conn, "u1").unwrap().unwrap();
    assert_eq!(user.balance, 1.2);

    let txs = load_ledger_for_user(&pool.conn, user.id).unwrap();
    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0].source, TxSource::MonthlyAccrual);
    assert_eq!(txs[0].reference_id, None);
}

#[test]
fn nothing_happens_on_other_days() {
    let mut pool = open_db("accrual_wrong_day");
    let cfg = test_config("unused");
    insert_user(&pool.conn, &User::new("u1")).unwrap();

    for day in [1, 20, 22, 28] {
        let ran = AccrualLogic::run(&mut pool, &cfg, Some(d(2026, 1, day))).unwrap();
        assert!(!ran, "accrual must not fire on day {}", day);
    }

    let user = find_user_by_username(&pool.conn, "u1").unwrap().unwrap();
    assert_eq!(user.balance, 0.0);
}

#[test]
fn each_month_gets_its_own_run() {
    let mut pool = open_db("accrual_next_month");
    let cfg = test_config("unused");
    insert_user(&pool.conn, &User::new("u1")).unwrap();

    assert!(AccrualLogic::run(&mut pool, &cfg, Some(d(2026, 1, 21))).unwrap());
    assert!(AccrualLogic::run(&mut pool, &cfg, Some(d(2026, 2, 21))).unwrap());
    // replays of both months are still no-ops
    assert!(!AccrualLogic::run(&mut pool, &cfg, Some(d(2026, 1, 21))).unwrap());
    assert!(!AccrualLogic::run(&mut pool, &cfg, Some(d(2026, 2, 21))).unwrap());

    let user = find_user_by_username(&pool.conn, "u1").unwrap().unwrap();
    assert_eq!(user.balance, 2.4);
}

#[test]
fn inactive_users_are_skipped() {
    let mut pool = open_db("accrual_inactive");
    let cfg = test_config("unused");

    let active_id = insert_user(&pool.conn, &User::new("active")).unwrap();
    let inactive_id = insert_user(&pool.conn, &User::new("inactive")).unwrap();
    set_user_active(&pool.conn, inactive_id, false).unwrap();

    assert!(AccrualLogic::run(&mut pool, &cfg, Some(d(2026, 1, 21))).unwrap());

    let active = find_user_by_username(&pool.conn, "active").unwrap().unwrap();
    let inactive = find_user_by_username(&pool.conn, "inactive").unwrap().unwrap();

    assert_eq!(active.balance, 1.2);
    assert_eq!(inactive.balance, 0.0);
    assert!(load_ledger_for_user(&pool.conn, inactive_id).unwrap().is_empty());
    assert_eq!(load_ledger_for_user(&pool.conn, active_id).unwrap().len(), 1);
}

#[test]
fn every_active_user_is_credited() {
    let mut pool = open_db("accrual_all_users");
    let cfg = test_config("unused");

    for name in ["a", "b", "c"] {
        insert_user(&pool.conn, &User::new(name)).unwrap();
    }

    assert!(AccrualLogic::run(&mut pool, &cfg, Some(d(2026, 3, 21))).unwrap());

    for name in ["a", "b", "c"] {
        let user = find_user_by_username(&pool.conn, name).unwrap().unwrap();
        assert_eq!(user.balance, 1.2, "user {} missed the accrual", name);
    }
}
