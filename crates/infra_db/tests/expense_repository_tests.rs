//! Database-backed tests for the expense and payout repositories
//!
//! They use `TEST_DATABASE_URL` when set, otherwise a throwaway PostgreSQL container.

use core_kernel::{ExpenseId, PayeeId};
use domain_expense::ExpenseStatus;
use infra_db::{
    DatabaseError, ExpenseFilter, ExpenseRepository, ListQuery, PayeeRepository, PayoutRepository,
    SortDirection,
};
use rust_decimal_macros::dec;
use test_utils::{db_test, ExpenseDetailsBuilder, PayeeDetailsBuilder, TestDatabase};

async fn seed_payee(db: &TestDatabase, n: u32) -> PayeeId {
    PayeeRepository::new(db.pool().clone())
        .insert(&PayeeDetailsBuilder::numbered(n).build_payee())
        .await
        .unwrap()
}

db_test!(test_insert_then_get_by_id, |db| {
    let payee_id = seed_payee(&db, 1).await;
    let repo = ExpenseRepository::new(db.pool().clone());
    let expense = ExpenseDetailsBuilder::new(payee_id.get())
        .with_amount(dec!(99.95))
        .build_expense();

    let id = repo.insert(&expense).await.unwrap();
    let stored = repo.get_by_id(id).await.unwrap();

    assert_eq!(stored.record, expense);
    assert_eq!(stored.status(), ExpenseStatus::Pending);
});

db_test!(test_amounts_round_trip_unchanged, |db| {
    let payee_id = seed_payee(&db, 1).await;
    let repo = ExpenseRepository::new(db.pool().clone());

    for amount in [dec!(9999999999.99), dec!(12.300), dec!(0.01)] {
        let expense = ExpenseDetailsBuilder::new(payee_id.get())
            .with_amount(amount)
            .build_expense();
        let id = repo.insert(&expense).await.unwrap();
        let stored = repo.get_by_id(id).await.unwrap();
        assert_eq!(stored.amount(), amount);
        assert_eq!(stored.record, expense);
    }
});

db_test!(test_insert_for_unknown_payee, |db| {
    let repo = ExpenseRepository::new(db.pool().clone());
    let expense = ExpenseDetailsBuilder::new(77).build_expense();

    let err = repo.insert(&expense).await.unwrap_err();
    assert!(matches!(err, DatabaseError::UnknownPayee(id) if id == PayeeId::new(77)));
});

db_test!(test_list_filters_by_payee_and_status, |db| {
    let first = seed_payee(&db, 1).await;
    let second = seed_payee(&db, 2).await;
    let repo = ExpenseRepository::new(db.pool().clone());

    let a = repo.insert(&ExpenseDetailsBuilder::new(first.get()).build_expense()).await.unwrap();
    repo.insert(&ExpenseDetailsBuilder::new(second.get()).build_expense()).await.unwrap();
    repo.insert(&ExpenseDetailsBuilder::new(first.get()).build_expense()).await.unwrap();
    db.set_expense_status(a.get(), "Paid").await.unwrap();

    let pending_for_first = repo
        .list(&ListQuery::filtered(ExpenseFilter {
            payee_id: Some(first),
            status: Some(ExpenseStatus::Pending),
            ..ExpenseFilter::default()
        }))
        .await
        .unwrap();

    assert_eq!(pending_for_first.len(), 1);
    assert_eq!(pending_for_first[0].id, ExpenseId::new(3));
});

db_test!(test_list_sorted_by_amount_descending, |db| {
    let payee = seed_payee(&db, 1).await;
    let repo = ExpenseRepository::new(db.pool().clone());
    for amount in [dec!(10), dec!(30), dec!(20), dec!(30)] {
        repo.insert(&ExpenseDetailsBuilder::new(payee.get()).with_amount(amount).build_expense())
            .await
            .unwrap();
    }

    let sorted = repo
        .list(&ListQuery::<ExpenseFilter>::new().sorted_by("amount", SortDirection::parse("DESC")))
        .await
        .unwrap();
    let ids: Vec<i64> = sorted.iter().map(|e| e.id.get()).collect();
    assert_eq!(ids, vec![2, 4, 3, 1]);
});

db_test!(test_update_keeps_status, |db| {
    let payee = seed_payee(&db, 1).await;
    let repo = ExpenseRepository::new(db.pool().clone());
    let id = repo
        .insert(&ExpenseDetailsBuilder::new(payee.get()).build_expense())
        .await
        .unwrap();
    db.set_expense_status(id.get(), "Paid").await.unwrap();

    let changed = ExpenseDetailsBuilder::new(payee.get())
        .with_title("Dinner")
        .with_amount(dec!(1200.00))
        .build_expense();
    let stored = repo.update(id, &changed).await.unwrap();

    assert_eq!(stored.title(), "Dinner");
    assert_eq!(stored.amount(), dec!(1200.00));
    assert_eq!(stored.status(), ExpenseStatus::Paid);
});

db_test!(test_update_to_unknown_payee, |db| {
    let payee = seed_payee(&db, 1).await;
    let repo = ExpenseRepository::new(db.pool().clone());
    let id = repo
        .insert(&ExpenseDetailsBuilder::new(payee.get()).build_expense())
        .await
        .unwrap();

    let changed = ExpenseDetailsBuilder::new(500).build_expense();
    let err = repo.update(id, &changed).await.unwrap_err();
    assert!(matches!(err, DatabaseError::UnknownPayee(_)));
});

db_test!(test_delete_is_permanent, |db| {
    let payee = seed_payee(&db, 1).await;
    let repo = ExpenseRepository::new(db.pool().clone());
    let id = repo
        .insert(&ExpenseDetailsBuilder::new(payee.get()).build_expense())
        .await
        .unwrap();

    repo.delete(id).await.unwrap();

    assert!(repo.get_by_id(id).await.unwrap_err().is_not_found());
    assert!(repo.delete(id).await.unwrap_err().is_not_found());
    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM expenses")
        .fetch_one(db.pool())
        .await
        .unwrap();
    assert_eq!(remaining, 0);
});

db_test!(test_payout_preview_excludes_paid_expenses, |db| {
    let payee = seed_payee(&db, 1).await;
    let repo = ExpenseRepository::new(db.pool().clone());
    repo.insert(&ExpenseDetailsBuilder::new(payee.get()).with_amount(dec!(150.00)).build_expense())
        .await
        .unwrap();
    repo.insert(&ExpenseDetailsBuilder::new(payee.get()).with_amount(dec!(50.00)).build_expense())
        .await
        .unwrap();
    let paid = repo
        .insert(&ExpenseDetailsBuilder::new(payee.get()).with_amount(dec!(70.00)).build_expense())
        .await
        .unwrap();
    db.set_expense_status(paid.get(), "Paid").await.unwrap();

    let preview = PayoutRepository::new(db.pool().clone()).preview().await.unwrap();

    assert_eq!(preview.len(), 2);
    assert_eq!(preview.total(), dec!(200.00));
    assert!(preview.lines().iter().all(|line| line.expense_id != paid));
});

db_test!(test_payout_preview_order_and_payee_details, |db| {
    let payee = seed_payee(&db, 1).await;
    let repo = ExpenseRepository::new(db.pool().clone());
    let older = repo
        .insert(&ExpenseDetailsBuilder::new(payee.get()).days_ahead(1).build_expense())
        .await
        .unwrap();
    let newer = repo
        .insert(&ExpenseDetailsBuilder::new(payee.get()).days_ahead(5).build_expense())
        .await
        .unwrap();
    let same_day = repo
        .insert(&ExpenseDetailsBuilder::new(payee.get()).days_ahead(5).build_expense())
        .await
        .unwrap();

    let preview = PayoutRepository::new(db.pool().clone()).preview().await.unwrap();
    let ids: Vec<ExpenseId> = preview.lines().iter().map(|line| line.expense_id).collect();
    assert_eq!(ids, vec![newer, same_day, older]);

    let line = &preview.lines()[0];
    let details = PayeeDetailsBuilder::numbered(1).build();
    assert_eq!(line.payee_id, payee);
    assert_eq!(line.beneficiary_code, details.beneficiary_code);
    assert_eq!(line.account_number, details.account_number);
    assert_eq!(line.ifsc_code, details.ifsc_code);
    assert_eq!(line.email, details.email);
});

db_test!(test_payout_preview_skips_deleted_payees, |db| {
    let kept = seed_payee(&db, 1).await;
    let removed = seed_payee(&db, 2).await;
    let repo = ExpenseRepository::new(db.pool().clone());
    repo.insert(&ExpenseDetailsBuilder::new(kept.get()).with_amount(dec!(10)).build_expense())
        .await
        .unwrap();
    repo.insert(&ExpenseDetailsBuilder::new(removed.get()).with_amount(dec!(20)).build_expense())
        .await
        .unwrap();
    PayeeRepository::new(db.pool().clone()).delete(removed).await.unwrap();

    let preview = PayoutRepository::new(db.pool().clone()).preview().await.unwrap();
    assert_eq!(preview.len(), 1);
    assert_eq!(preview.total(), dec!(10));
});

db_test!(test_empty_payout_preview, |db| {
    let preview = PayoutRepository::new(db.pool().clone()).preview().await.unwrap();
    assert!(preview.is_empty());
    assert_eq!(preview.total(), rust_decimal::Decimal::ZERO);
});
