//! Performance benchmarks for the Payroll Engine.
//!
//! This benchmark suite covers:
//! - The progressive tax function
//! - A payrun over 100 employees with a two-week timesheet each
//! - The same payrun driven through the HTTP router
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use rust_decimal::Decimal;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::calculation::TaxSchedule;
use payroll_engine::config::PayrollConfig;
use payroll_engine::models::{
    BankDetails, EmployeeStatus, EmployeeType, NewEmployee, NewTimesheet, PayPeriod,
    TimesheetEntry,
};
use payroll_engine::services::PayrollServices;

use axum::{body::Body, http::Request};
use chrono::NaiveDate;
use tower::ServiceExt;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, day).expect("valid date")
}

/// Creates services holding `count` employees, each with a 10-entry fortnight.
fn create_populated_services(count: usize) -> PayrollServices {
    let services = PayrollServices::in_memory(PayrollConfig::default());
    let workdays = [5, 6, 7, 8, 9, 12, 13, 14, 15, 16];

    for i in 0..count {
        let employee = services
            .employees
            .onboard(NewEmployee {
                first_name: "Bench".to_string(),
                last_name: format!("Employee{:03}", i),
                email: format!("bench{:03}@example.com", i),
                employee_type: EmployeeType::Hourly,
                base_hourly_rate: Decimal::new(2500 + i as i64, 2),
                super_rate: None,
                bank: BankDetails {
                    bsb: "083-123".to_string(),
                    account: "12345678".to_string(),
                },
                status: EmployeeStatus::Active,
            })
            .expect("Failed to onboard employee");

        services
            .timesheets
            .create(NewTimesheet {
                employee_id: employee.id,
                period_start: date(5),
                period_end: date(18),
                entries: workdays
                    .iter()
                    .map(|&day| TimesheetEntry {
                        date: date(day),
                        start: "08:30".to_string(),
                        end: "17:00".to_string(),
                        unpaid_break_minutes: 30,
                    })
                    .collect(),
                allowances: Decimal::new(1500, 2),
            })
            .expect("Failed to create timesheet");
    }

    services
}

/// Benchmark: progressive tax across a spread of gross amounts.
fn bench_tax(c: &mut Criterion) {
    let schedule = TaxSchedule::default();
    let amounts: Vec<Decimal> = (0..100).map(|i| Decimal::new(i * 9_731, 2)).collect();

    let mut group = c.benchmark_group("tax");
    group.throughput(Throughput::Elements(amounts.len() as u64));
    group.bench_function("additive", |b| {
        b.iter(|| {
            for amount in &amounts {
                black_box(schedule.calculate(black_box(*amount)));
            }
        })
    });
    group.bench_function("bracket_bases", |b| {
        b.iter(|| {
            for amount in &amounts {
                black_box(schedule.calculate_from_bases(black_box(*amount)));
            }
        })
    });
    group.finish();
}

/// Benchmark: payrun over 100 employees, called on the service directly.
fn bench_payrun_100(c: &mut Criterion) {
    let services = create_populated_services(100);
    let period = PayPeriod::new(date(5), date(18));

    let mut group = c.benchmark_group("payrun");
    group.throughput(Throughput::Elements(100));
    group.bench_function("service_100_employees", |b| {
        b.iter(|| black_box(services.payruns.run(period, None).expect("payrun failed")))
    });
    group.finish();
}

/// Benchmark: payrun over 100 employees through the HTTP router.
fn bench_payrun_http(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("Failed to build runtime");
    let router = create_router(AppState::new(create_populated_services(100)));
    let body = serde_json::json!({ "period_start": "2026-01-05", "period_end": "2026-01-18" })
        .to_string();

    c.bench_function("payrun_http_100_employees", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/payruns/run")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(benches, bench_tax, bench_payrun_100, bench_payrun_http);
criterion_main!(benches);
