use gymkeeper::core::payment::PaymentLogic;
use gymkeeper::core::registry::RegistryLogic;
use gymkeeper::errors::ErrorKind;
use gymkeeper::models::member::NewMember;
use gymkeeper::models::status::PaymentStatus;
use rust_decimal::Decimal;
use std::str::FromStr;

mod common;
use common::{count, d, open_test_pool};

fn add_m1(pool: &mut gymkeeper::db::pool::DbPool) {
    let member = NewMember {
        id: "M1".into(),
        name: "Asha".into(),
        phone: "555".into(),
        age: 31,
        join_date: d("2025-05-01"),
    };
    RegistryLogic::add_member(pool, member, d("2025-05-01"), 31).expect("add member");
}

#[test]
fn test_parse_amount() {
    assert_eq!(
        PaymentLogic::parse_amount("500").expect("integer amount").to_string(),
        "500.00"
    );
    assert_eq!(
        PaymentLogic::parse_amount(" 12.5 ").expect("one decimal").to_string(),
        "12.50"
    );

    for bad in ["", "abc", "0", "-3", "1.234"] {
        let err = PaymentLogic::parse_amount(bad).expect_err(bad);
        assert_eq!(err.kind(), ErrorKind::ValidationFailure, "input {bad:?}");
    }
}

#[test]
fn test_total_is_zero_without_payments() {
    let mut pool = open_test_pool();
    add_m1(&mut pool);

    let total = PaymentLogic::total(&pool.conn, "M1").expect("total");
    assert_eq!(total, Decimal::ZERO);
}

#[test]
fn test_total_is_exact() {
    let mut pool = open_test_pool();
    add_m1(&mut pool);
    let today = d("2025-05-10");

    for raw in ["0.10", "0.20"] {
        let amount = PaymentLogic::parse_amount(raw).expect("amount");
        PaymentLogic::record(&mut pool, "M1", amount, today, PaymentStatus::Paid, today, 31)
            .expect("record");
    }
    // Pending payments still count toward the total
    let pending = PaymentLogic::parse_amount("1").expect("amount");
    PaymentLogic::record(&mut pool, "M1", pending, today, PaymentStatus::Pending, today, 31)
        .expect("record pending");

    let total = PaymentLogic::total(&pool.conn, "M1").expect("total");
    assert_eq!(total, Decimal::from_str("1.30").expect("decimal"));
}

#[test]
fn test_payment_for_unknown_member_writes_nothing() {
    let mut pool = open_test_pool();
    let today = d("2025-05-10");

    let err = PaymentLogic::record(
        &mut pool,
        "GHOST",
        Decimal::new(100, 0),
        today,
        PaymentStatus::Paid,
        today,
        31,
    )
    .expect_err("unknown member");

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(count(&pool, "payment"), 0);
}

#[test]
fn test_future_payment_is_rejected() {
    let mut pool = open_test_pool();
    add_m1(&mut pool);

    let err = PaymentLogic::record(
        &mut pool,
        "M1",
        Decimal::new(100, 0),
        d("2025-05-11"),
        PaymentStatus::Paid,
        d("2025-05-10"),
        31,
    )
    .expect_err("future date");

    assert_eq!(err.kind(), ErrorKind::ValidationFailure);
    assert_eq!(count(&pool, "payment"), 0);
}

#[test]
fn test_total_overflow_is_an_error() {
    let mut pool = open_test_pool();
    add_m1(&mut pool);
    let today = d("2025-05-10");

    let huge = PaymentLogic::parse_amount("50000000000000000000000000000").expect("large amount");
    for _ in 0..2 {
        PaymentLogic::record(&mut pool, "M1", huge, today, PaymentStatus::Paid, today, 31)
            .expect("record");
    }

    let err = PaymentLogic::total(&pool.conn, "M1").expect_err("sum out of range");
    assert_eq!(err.kind(), ErrorKind::ValidationFailure);
    assert!(err.to_string().contains("total overflows"));

    let err = gymkeeper::core::details::MemberDetails::load(&pool.conn, "M1")
        .expect_err("details need the total");
    assert_eq!(err.kind(), ErrorKind::ValidationFailure);
}
