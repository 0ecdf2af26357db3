use std::collections::BTreeSet;

use super::model::{Dataset, Day, MealTime};

// ---------------------------------------------------------------------------
// Filter predicate: bill range + meal-time set + day set
// ---------------------------------------------------------------------------

/// The sidebar's current selections. Three independent predicates that a
/// record must all satisfy: bill amount inside `bill_range` (inclusive),
/// meal time in `times`, day in `days`. An empty set selects nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub bill_range: (f64, f64),
    pub times: BTreeSet<MealTime>,
    pub days: BTreeSet<Day>,
}

impl FilterState {
    /// The default filter covering the dataset's whole domain: full bill
    /// range, both meal times, all four days. Reset restores exactly this.
    pub fn full(dataset: &Dataset) -> Self {
        FilterState {
            bill_range: (dataset.bill_min, dataset.bill_max),
            times: MealTime::ALL.into_iter().collect(),
            days: Day::ALL.into_iter().collect(),
        }
    }

    /// Whether the record at `idx` passes all three predicates.
    pub fn matches(&self, dataset: &Dataset, idx: usize) -> bool {
        let rec = &dataset.records[idx];
        rec.total_bill >= self.bill_range.0
            && rec.total_bill <= self.bill_range.1
            && self.times.contains(&rec.time)
            && self.days.contains(&rec.day)
    }
}

/// Return indices of records passing all active filters, in original row
/// order. Pure; an empty result is a valid outcome, not an error.
pub fn filtered_indices(dataset: &Dataset, filters: &FilterState) -> Vec<usize> {
    (0..dataset.len())
        .filter(|&i| filters.matches(dataset, i))
        .collect()
}
