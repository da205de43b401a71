//! Tests for seed documents and the plan builder

use crate::config::{ItemConfig, ItemKind, PlanBuilder, PlanConfig};
use crate::model::{Account, BudgetItem, Duration, INFLATION_RATE};

#[test]
fn test_builder_seeds_the_starting_year() {
    let plan = PlanBuilder::new()
        .item(BudgetItem::recurring_income("salary", 60_000.0))
        .item(BudgetItem::recurring_expense("rent", 24_000.0))
        .account(Account::new("investments", 10_000.0, 0.07))
        .build();

    assert_eq!(plan.current_year(), 0);
    let year0 = plan.year(0).unwrap();
    assert_eq!(year0.items.len(), 2);
    assert_eq!(year0.accounts.len(), 1);
    assert_eq!(year0.extra_cash(), 36_000.0);
}

#[test]
fn test_builder_pre_seeds_future_years() {
    let plan = PlanBuilder::new()
        .item(BudgetItem::recurring_income("salary", 100.0))
        .item_at(3, BudgetItem::one_time_expense("car", 100.0))
        .build();

    assert_eq!(plan.years().len(), 2);
    assert_eq!(plan.year(3).unwrap().items[0].amount, -100.0);

    // The pre-seeded year merges during projection
    let projected = plan.run_years(3).unwrap();
    assert_eq!(projected.year(3).unwrap().items.len(), 2);
}

#[test]
fn test_empty_builder_is_still_runnable() {
    let plan = PlanBuilder::new().build();
    let projected = plan.run_years(2).unwrap();
    assert_eq!(projected.years().len(), 3);
}

#[test]
fn test_item_config_applies_factory_defaults() {
    let item = ItemConfig {
        kind: ItemKind::RecurringExpense,
        name: "rent".into(),
        amount: 1_000.0,
        rate_of_increase: None,
        duration: None,
    }
    .into_item();

    assert_eq!(
        item,
        BudgetItem::with_terms("rent", -1_000.0, INFLATION_RATE, Duration::Infinite)
    );
}

#[test]
fn test_item_config_overrides_rate_and_duration() {
    let item = ItemConfig {
        kind: ItemKind::RecurringExpense,
        name: "lease".into(),
        amount: 500.0,
        rate_of_increase: Some(0.0),
        duration: Some(Duration::Remaining(36)),
    }
    .into_item();

    assert_eq!(
        item,
        BudgetItem::with_terms("lease", -500.0, 0.0, Duration::Remaining(36))
    );
}

#[test]
fn test_seed_document_round_trips_into_a_plan() {
    let document = r#"{
        "years": {
            "0": {
                "items": [
                    { "kind": "recurring_income", "name": "salary", "amount": 200.0 },
                    { "kind": "recurring_expense", "name": "kids", "amount": 100.0 }
                ],
                "accounts": [
                    { "name": "investments", "amount": 0.0, "rate_of_increase": 0.0 }
                ]
            },
            "3": {
                "items": [
                    { "kind": "one_time_expense", "name": "car", "amount": 100.0 }
                ]
            }
        }
    }"#;

    let config: PlanConfig = serde_json::from_str(document).unwrap();
    let plan = config.into_plan();

    assert_eq!(plan.current_year(), 0);
    assert_eq!(plan.years().len(), 2);
    assert_eq!(plan.year(0).unwrap().extra_cash(), 100.0);
    assert_eq!(plan.year(0).unwrap().accounts.len(), 1);

    let projected = plan.run_years(3).unwrap();
    assert!((projected.year(3).unwrap().extra_cash() - 9.2727).abs() < 1e-9);
}

#[test]
fn test_seed_document_rejects_bad_durations() {
    let document = r#"{
        "years": {
            "0": {
                "items": [
                    { "kind": "one_time_expense", "name": "x", "amount": 1.0, "duration": 0 }
                ]
            }
        }
    }"#;

    assert!(serde_json::from_str::<PlanConfig>(document).is_err());
}
