//! Record lifecycle settlement: create deducts, update settles the
//! difference, deletion refunds and tombstones.

mod common;
use common::{setup_test_db, test_config};

use rleaveledger::core::del::DeleteLogic;
use rleaveledger::core::ledger::apply_delta;
use rleaveledger::core::request::RequestLogic;
use rleaveledger::core::update::UpdateLogic;
use rleaveledger::db::initialize::init_db;
use rleaveledger::db::pool::DbPool;
use rleaveledger::db::queries::{
    find_record, find_user_by_id, insert_user, load_ledger_for_user, load_records_page,
    require_live_record,
};
use rleaveledger::errors::AppError;
use rleaveledger::models::half_day::HalfDay;
use rleaveledger::models::record_type::RecordType;
use rleaveledger::models::tx_source::TxSource;
use rleaveledger::models::user::User;

fn open_with_balance(name: &str, balance: f64) -> (DbPool, i64) {
    let db_path = setup_test_db(name);
    let mut pool = DbPool::new(&db_path).unwrap();
    init_db(&pool.conn).unwrap();

    let id = insert_user(&pool.conn, &User::new("u1")).unwrap();
    let tx = pool.conn.transaction().unwrap();
    apply_delta(&tx, id, balance, TxSource::AdminAdjust, None).unwrap();
    tx.commit().unwrap();

    (pool, id)
}

#[test]
fn create_deducts_the_charge_with_a_record_reference() {
    let (mut pool, user_id) = open_with_balance("settle_create", 5.0);
    let cfg = test_config("unused");

    let rec = RequestLogic::apply(
        &mut pool,
        &cfg,
        "u1",
        RecordType::FullDay,
        Some("2026-02-20"), // Friday
        None,
        None,
        None,
        None,
        Some("dentist".into()),
    )
    .unwrap();

    assert_eq!(rec.days, 1.0);

    let user = find_user_by_id(&pool.conn, user_id).unwrap().unwrap();
    assert_eq!(user.balance, 4.0);

    let txs = load_ledger_for_user(&pool.conn, user_id).unwrap();
    assert_eq!(txs.len(), 2); // opening credit + deduction
    assert_eq!(txs[1].change_amount, -1.0);
    assert_eq!(txs[1].source, TxSource::LeaveUsed);
    assert_eq!(txs[1].reference_id, Some(rec.id));
}

#[test]
fn zero_charge_records_do_not_touch_the_ledger() {
    let (mut pool, user_id) = open_with_balance("settle_zero_charge", 2.0);
    let cfg = test_config("unused");

    // LATE is minute-based: days = 0
    RequestLogic::apply(
        &mut pool,
        &cfg,
        "u1",
        RecordType::Late,
        Some("2026-02-20"),
        None,
        None,
        None,
        Some(45),
        None,
    )
    .unwrap();

    // Weekend full-day: weight 0
    RequestLogic::apply(
        &mut pool,
        &cfg,
        "u1",
        RecordType::FullDay,
        Some("2026-02-21"),
        None,
        None,
        None,
        None,
        None,
    )
    .unwrap();

    let user = find_user_by_id(&pool.conn, user_id).unwrap().unwrap();
    assert_eq!(user.balance, 2.0);
    assert_eq!(load_ledger_for_user(&pool.conn, user_id).unwrap().len(), 1);
}

#[test]
fn insufficient_balance_rolls_back_the_record_too() {
    let (mut pool, user_id) = open_with_balance("settle_insufficient", 0.5);
    let cfg = test_config("unused");

    let err = RequestLogic::apply(
        &mut pool,
        &cfg,
        "u1",
        RecordType::FullDay,
        Some("2026-02-20"),
        None,
        None,
        None,
        None,
        None,
    )
    .unwrap_err();
    assert!(matches!(err, AppError::InsufficientBalance));

    let user = find_user_by_id(&pool.conn, user_id).unwrap().unwrap();
    assert_eq!(user.balance, 0.5);

    // the record insert happened in the same transaction → rolled back
    let (records, total) = load_records_page(&pool.conn, user_id, None, 1, 10).unwrap();
    assert!(records.is_empty());
    assert_eq!(total, 0);
}

#[test]
fn shrinking_a_charge_refunds_the_difference() {
    let (mut pool, user_id) = open_with_balance("settle_update_refund", 5.0);
    let cfg = test_config("unused");

    // Fri..Fri RANGE, full day = 1.0
    let rec = RequestLogic::apply(
        &mut pool,
        &cfg,
        "u1",
        RecordType::Range,
        Some("2026-02-20"),
        Some("2026-02-20"),
        None,
        None,
        None,
        None,
    )
    .unwrap();
    assert_eq!(rec.days, 1.0);

    // end mid-day → 0.5, delta +0.5 back
    let updated = UpdateLogic::apply(
        &mut pool,
        &cfg,
        rec.id,
        None,
        None,
        None,
        Some(HalfDay::Am),
        None,
        None,
    )
    .unwrap();
    assert_eq!(updated.days, 0.5);

    let user = find_user_by_id(&pool.conn, user_id).unwrap().unwrap();
    assert_eq!(user.balance, 4.5);

    let txs = load_ledger_for_user(&pool.conn, user_id).unwrap();
    let settle = txs.last().unwrap();
    assert_eq!(settle.change_amount, 0.5);
    assert_eq!(settle.source, TxSource::AdminAdjust);
    assert_eq!(settle.reference_id, Some(rec.id));
}

#[test]
fn growing_a_charge_deducts_more() {
    let (mut pool, user_id) = open_with_balance("settle_update_deduct", 5.0);
    let cfg = test_config("unused");

    let rec = RequestLogic::apply(
        &mut pool,
        &cfg,
        "u1",
        RecordType::Range,
        Some("2026-02-20"),
        Some("2026-02-20"),
        None,
        None,
        None,
        None,
    )
    .unwrap();

    // stretch Fri..Fri to Fri..Mon → 2.0, extra 1.0 deducted
    UpdateLogic::apply(
        &mut pool,
        &cfg,
        rec.id,
        None,
        Some("2026-02-23"),
        None,
        None,
        None,
        None,
    )
    .unwrap();

    let user = find_user_by_id(&pool.conn, user_id).unwrap().unwrap();
    assert_eq!(user.balance, 3.0);
}

#[test]
fn noop_update_rewrites_the_record_but_not_the_ledger() {
    let (mut pool, user_id) = open_with_balance("settle_update_noop", 5.0);
    let cfg = test_config("unused");

    let rec = RequestLogic::apply(
        &mut pool,
        &cfg,
        "u1",
        RecordType::FullDay,
        Some("2026-02-20"),
        None,
        None,
        None,
        None,
        None,
    )
    .unwrap();

    let before = load_ledger_for_user(&pool.conn, user_id).unwrap().len();

    // same charge (Fri → Mon, both weight 1): timestamps move, no audit event
    let updated = UpdateLogic::apply(
        &mut pool,
        &cfg,
        rec.id,
        Some("2026-02-23"),
        None,
        None,
        None,
        None,
        Some("moved".into()),
    )
    .unwrap();

    assert_eq!(updated.days, 1.0);
    assert_eq!(updated.start_at.date().to_string(), "2026-02-23");
    assert_eq!(updated.note.as_deref(), Some("moved"));

    let after = load_ledger_for_user(&pool.conn, user_id).unwrap().len();
    assert_eq!(before, after, "sub-epsilon delta must not be audited");
}

#[test]
fn deletion_refunds_and_tombstones() {
    let (mut pool, user_id) = open_with_balance("settle_delete", 5.0);
    let cfg = test_config("unused");

    let rec = RequestLogic::apply(
        &mut pool,
        &cfg,
        "u1",
        RecordType::FullDay,
        Some("2026-02-20"),
        None,
        None,
        None,
        None,
        None,
    )
    .unwrap();

    let user = find_user_by_id(&pool.conn, user_id).unwrap().unwrap();
    assert_eq!(user.balance, 4.0);

    DeleteLogic::apply(&mut pool, rec.id).unwrap();

    // refunded in full
    let user = find_user_by_id(&pool.conn, user_id).unwrap().unwrap();
    assert_eq!(user.balance, 5.0);

    let txs = load_ledger_for_user(&pool.conn, user_id).unwrap();
    let refund = txs.last().unwrap();
    assert_eq!(refund.change_amount, 1.0);
    assert_eq!(refund.source, TxSource::DeleteRecord);
    assert_eq!(refund.reference_id, Some(rec.id));

    // tombstoned, not removed: invisible to live reads, still on disk
    assert!(matches!(
        require_live_record(&pool.conn, rec.id).unwrap_err(),
        AppError::RecordNotFound(_)
    ));
    let stored = find_record(&pool.conn, rec.id).unwrap().unwrap();
    assert!(stored.is_deleted());

    let (records, total) = load_records_page(&pool.conn, user_id, None, 1, 10).unwrap();
    assert!(records.is_empty());
    assert_eq!(total, 0);

    // deleting again fails: the record is no longer live
    assert!(matches!(
        DeleteLogic::apply(&mut pool, rec.id).unwrap_err(),
        AppError::RecordNotFound(_)
    ));
}

#[test]
fn zero_charge_deletion_needs_no_refund() {
    let (mut pool, user_id) = open_with_balance("settle_delete_zero", 2.0);
    let cfg = test_config("unused");

    let rec = RequestLogic::apply(
        &mut pool,
        &cfg,
        "u1",
        RecordType::Late,
        Some("2026-02-20"),
        None,
        None,
        None,
        Some(20),
        None,
    )
    .unwrap();

    let before = load_ledger_for_user(&pool.conn, user_id).unwrap().len();
    DeleteLogic::apply(&mut pool, rec.id).unwrap();
    let after = load_ledger_for_user(&pool.conn, user_id).unwrap().len();

    assert_eq!(before, after);

    let user = find_user_by_id(&pool.conn, user_id).unwrap().unwrap();
    assert_eq!(user.balance, 2.0);
}
