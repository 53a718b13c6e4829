//! Active headcount per function.

use crate::{error::AnalyticsResult, model::Specialist, store::EntityStore, types::EntityId};
use std::collections::BTreeMap;

/// Function id → number of specialists with no end date.
///
/// Functions with nobody active are omitted; the gap analyzer treats a
/// missing entry as zero.
pub fn active_headcount(specialists: &[Specialist]) -> AnalyticsResult<BTreeMap<EntityId, u32>> {
    let mut counts = BTreeMap::new();
    for s in specialists {
        s.validate()?;
        if s.is_active() {
            *counts.entry(s.function_id).or_insert(0u32) += 1;
        }
    }
    Ok(counts)
}

pub fn headcount_from<S: EntityStore + ?Sized>(
    store: &S,
) -> AnalyticsResult<BTreeMap<EntityId, u32>> {
    active_headcount(&store.list_specialists()?)
}
