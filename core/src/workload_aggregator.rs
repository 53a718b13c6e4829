//! Workload aggregation: annual person-hours each function must cover.
//!
//! `required_person_hours(F) = Σ quantity × period × time_cost` over every
//! workload item owned by F. Functions without items do not appear.

use crate::{
    error::AnalyticsResult,
    model::WorkloadItem,
    store::EntityStore,
    types::EntityId,
};
use std::collections::BTreeMap;

/// Function id → required person-hours per year.
pub type PersonHours = BTreeMap<EntityId, f64>;

pub fn required_person_hours(items: &[WorkloadItem]) -> AnalyticsResult<PersonHours> {
    let mut hours = PersonHours::new();
    for item in items {
        *hours.entry(item.function_id).or_insert(0.0) += item.annual_hours()?;
    }
    log::debug!(
        "aggregated {} workload items into {} functions",
        items.len(),
        hours.len()
    );
    Ok(hours)
}

/// Read every workload item from `store` and aggregate it.
pub fn person_hours_from<S: EntityStore + ?Sized>(store: &S) -> AnalyticsResult<PersonHours> {
    required_person_hours(&store.list_workload_items()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalyticsError;

    fn item(item_id: EntityId, function_id: EntityId, q: f64, p: f64, t: f64) -> WorkloadItem {
        WorkloadItem {
            item_id,
            name: format!("doc-{item_id}"),
            function_id,
            time_cost_hours: t,
            quantity: q,
            period: p,
        }
    }

    #[test]
    fn sums_quantity_period_and_time_per_function() {
        let items = vec![
            item(1, 10, 2.0, 12.0, 1.5),
            item(2, 10, 2.0, 12.0, 1.5),
            item(3, 10, 2.0, 12.0, 1.5),
            item(4, 20, 1.0, 4.0, 0.5),
        ];
        let hours = required_person_hours(&items).unwrap();
        assert_eq!(hours.len(), 2);
        assert_eq!(hours[&10], 108.0);
        assert_eq!(hours[&20], 2.0);
    }

    #[test]
    fn functions_without_items_are_absent() {
        let hours = required_person_hours(&[item(1, 10, 1.0, 1.0, 1.0)]).unwrap();
        assert!(!hours.contains_key(&20));
        assert!(required_person_hours(&[]).unwrap().is_empty());
    }

    #[test]
    fn zero_fields_contribute_nothing_but_keep_the_function() {
        let hours = required_person_hours(&[item(1, 10, 0.0, 12.0, 3.0)]).unwrap();
        assert_eq!(hours[&10], 0.0);
    }

    #[test]
    fn negative_period_is_a_data_error() {
        let err = required_person_hours(&[item(7, 10, 1.0, -1.0, 2.0)]).unwrap_err();
        match err {
            AnalyticsError::DataIntegrity { detail } => assert!(detail.contains("item 7")),
            other => panic!("expected DataIntegrity, got {other:?}"),
        }
    }

    #[test]
    fn nan_time_cost_is_a_data_error() {
        assert!(matches!(
            required_person_hours(&[item(1, 10, 1.0, 1.0, f64::NAN)]),
            Err(AnalyticsError::DataIntegrity { .. })
        ));
    }
}
