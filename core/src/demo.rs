//! Seeded synthetic HR dataset for demos and end-to-end tests.
//!
//! Same seed and year range always produce the same `Dataset`.

use crate::{
    dataset::Dataset,
    error::{AnalyticsError, AnalyticsResult},
    model::{DismissalOrder, DismissalReason, Function, Specialist, WorkTimeInfo, WorkloadItem},
    name_generator::NameGenerator,
    rng::{DemoRng, DemoStream},
    types::{EntityId, FiscalYear, ReasonCode},
};
use chrono::{Duration, NaiveDate};

const FUNCTIONS: &[(&str, &str, f64)] = &[
    ("Accounting", "Chief Accountant", 5200.0),
    ("Accounting", "Accountant", 3800.0),
    ("Human Resources", "HR Manager", 4300.0),
    ("Human Resources", "HR Specialist", 3300.0),
    ("Operations", "Dispatcher", 3000.0),
    ("Operations", "Logistics Coordinator", 3600.0),
    ("Legal", "Legal Counsel", 4800.0),
    ("IT", "System Administrator", 4500.0),
];

const DOCUMENTS: &[&str] = &[
    "Monthly report",
    "Payroll statement",
    "Tax return",
    "Staff schedule",
    "Vacation schedule",
    "Employment contract",
    "Delivery plan",
    "Route sheet",
    "Contract review",
    "Claim response",
    "Backup log",
    "Access request",
    "Inventory act",
    "Budget forecast",
];

/// Occurrences per year: yearly, quarterly, monthly, weekly, every working day.
const PERIODS: &[f64] = &[1.0, 4.0, 12.0, 52.0, 247.0];

/// Code of the "other" reason in the demo catalog.
pub const DEMO_OTHER_REASON: ReasonCode = 3;

const REASONS: &[(ReasonCode, &str, &str)] = &[
    (1, "Own wish", "Resignation at own request"),
    (2, "Agreement", "Termination by mutual agreement"),
    (DEMO_OTHER_REASON, "Other", "Other reason, see order"),
    (4, "Contract end", "Expiry of fixed-term contract"),
    (5, "Retirement", "Retirement"),
];

const TRUE_REASONS: &[&str] = &[
    "Low salary",
    "Long commute",
    "Conflict with manager",
    "No career growth",
    "Relocation",
    "Heavy workload",
];

const DISMISSAL_PROBABILITY: f64 = 0.35;

pub fn generate(seed: u64, first_year: FiscalYear, last_year: FiscalYear) -> AnalyticsResult<Dataset> {
    if first_year > last_year {
        return Err(AnalyticsError::integrity(format!(
            "demo year range {first_year}..={last_year} is empty"
        )));
    }
    let hire_from = year_start(first_year - 5)?;
    let horizon = year_start(last_year + 1)? - Duration::days(1);

    let functions: Vec<Function> = FUNCTIONS
        .iter()
        .zip(1..)
        .map(|(&(department, name, salary), function_id)| Function {
            function_id,
            name: name.into(),
            department: department.into(),
            salary,
        })
        .collect();

    let mut rng = DemoRng::new(seed, DemoStream::Workload);
    let mut workload_items = Vec::new();
    for f in &functions {
        for _ in 0..rng.range_inclusive(2, 4) {
            workload_items.push(WorkloadItem {
                item_id: workload_items.len() as EntityId + 1,
                name: rng.pick(DOCUMENTS).to_string(),
                function_id: f.function_id,
                time_cost_hours: rng.range_inclusive(1, 16) as f64 * 0.5,
                quantity: rng.range_inclusive(1, 5) as f64,
                period: *rng.pick(PERIODS),
            });
        }
    }

    let mut rng = DemoRng::new(seed, DemoStream::WorkTime);
    let work_time = (first_year..=last_year + 1)
        .map(|year| {
            let days = rng.range_inclusive(245, 250);
            WorkTimeInfo {
                year,
                annual_work_hours: days as f64 * 8.0,
                daily_work_hours: 8.0,
                annual_work_days: days,
            }
        })
        .collect();

    let span_days = (horizon - hire_from).num_days();
    let mut staff_rng = DemoRng::new(seed, DemoStream::Staff);
    let mut dismissal_rng = DemoRng::new(seed, DemoStream::Dismissal);
    let mut specialists = Vec::new();
    let mut dismissal_orders = Vec::new();
    for f in &functions {
        for _ in 0..staff_rng.range_inclusive(1, 6) {
            let specialist_id = specialists.len() as EntityId + 1;
            let start_date = hire_from + Duration::days(staff_rng.range_inclusive(0, span_days));
            let birth_date = start_date - Duration::days(staff_rng.range_inclusive(22 * 365, 55 * 365));
            let name = NameGenerator::generate_full_name(&mut staff_rng);

            let mut end_date = None;
            if dismissal_rng.chance(DISMISSAL_PROBABILITY) {
                let end = start_date + Duration::days(dismissal_rng.range_inclusive(30, 2000));
                if end <= horizon {
                    let &(reason_id, _, _) = dismissal_rng.pick(REASONS);
                    let true_reason = if reason_id == DEMO_OTHER_REASON {
                        dismissal_rng.pick(TRUE_REASONS).to_string()
                    } else {
                        String::new()
                    };
                    dismissal_orders.push(DismissalOrder {
                        order_id: dismissal_orders.len() as EntityId + 1,
                        order_date: end,
                        specialist_id,
                        reason_id,
                        true_reason,
                    });
                    end_date = Some(end);
                }
            }

            specialists.push(Specialist {
                specialist_id,
                name,
                birth_date,
                function_id: f.function_id,
                start_date,
                end_date,
            });
        }
    }

    let dataset = Dataset {
        functions,
        workload_items,
        specialists,
        work_time,
        dismissal_reasons: REASONS
            .iter()
            .map(|&(reason_id, short_label, full_text)| DismissalReason {
                reason_id,
                short_label: short_label.into(),
                full_text: full_text.into(),
            })
            .collect(),
        dismissal_orders,
    };
    log::info!(
        "generated demo dataset seed={seed}: {} specialists, {} dismissals",
        dataset.specialists.len(),
        dataset.dismissal_orders.len()
    );
    Ok(dataset)
}

fn year_start(year: FiscalYear) -> AnalyticsResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or_else(|| AnalyticsError::integrity(format!("year {year} is out of range")))
}
