//! Criterion benchmarks for cashplan_core projection
//!
//! Run with: cargo bench -p cashplan_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use cashplan_core::config::PlanBuilder;
use cashplan_core::model::{Account, BudgetItem};
use cashplan_core::plan::{Plan, run_plans};

fn create_basic_plan() -> Plan {
    PlanBuilder::new()
        .item(BudgetItem::recurring_income("salary", 85_000.0))
        .item(BudgetItem::recurring_expense("living", 52_000.0))
        .item(BudgetItem::recurring_expense("kids", 12_000.0))
        .account(Account::new("investments", 40_000.0, 0.07))
        .account(Account::new("savings", 15_000.0, 0.02))
        .item_at(5, BudgetItem::one_time_expense("wedding", 20_000.0))
        .item_at(12, BudgetItem::one_time_expense("new roof", 18_000.0))
        .build()
}

fn bench_run_years(c: &mut Criterion) {
    let plan = create_basic_plan();

    let mut group = c.benchmark_group("run_years");
    for horizon in [30u32, 100, 300] {
        group.bench_with_input(
            BenchmarkId::from_parameter(horizon),
            &horizon,
            |b, &horizon| b.iter(|| black_box(&plan).run_years(horizon).unwrap()),
        );
    }
    group.finish();
}

fn bench_run_plans(c: &mut Criterion) {
    let plans: Vec<Plan> = (0..64).map(|_| create_basic_plan()).collect();

    c.bench_function("run_plans_64x50", |b| {
        b.iter(|| run_plans(black_box(&plans), 50))
    });
}

criterion_group!(benches, bench_run_years, bench_run_plans);
criterion_main!(benches);
