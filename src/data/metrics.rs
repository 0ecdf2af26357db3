use std::collections::BTreeMap;

use super::model::{Dataset, GroupField};

// ---------------------------------------------------------------------------
// Scalar summaries of the filtered view
// ---------------------------------------------------------------------------

/// The three value-box numbers plus the tip-percentage mean, computed over
/// a set of visible row indices. Means are `None` when the view is empty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub row_count: usize,
    pub mean_tip_percent: Option<f64>,
    pub mean_tip: Option<f64>,
    pub mean_bill: Option<f64>,
}

impl Summary {
    pub fn compute(dataset: &Dataset, visible: &[usize]) -> Self {
        if visible.is_empty() {
            return Summary {
                row_count: 0,
                mean_tip_percent: None,
                mean_tip: None,
                mean_bill: None,
            };
        }
        let n = visible.len() as f64;
        let mut pct = 0.0;
        let mut tip = 0.0;
        let mut bill = 0.0;
        for &i in visible {
            let rec = &dataset.records[i];
            pct += rec.tip_percent();
            tip += rec.tip;
            bill += rec.total_bill;
        }
        Summary {
            row_count: visible.len(),
            mean_tip_percent: Some(pct / n),
            mean_tip: Some(tip / n),
            mean_bill: Some(bill / n),
        }
    }
}

// ---------------------------------------------------------------------------
// Display formatting
// ---------------------------------------------------------------------------

/// Shown in place of a metric that is undefined on an empty view.
pub const BLANK: &str = "—";

/// Fraction → percentage with one decimal, e.g. `0.161` → `"16.1%"`.
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}%", v * 100.0),
        None => BLANK.to_string(),
    }
}

/// Amount → dollars with two decimals, e.g. `19.785` → `"$19.79"`.
pub fn format_currency(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("${v:.2}"),
        None => BLANK.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Per-group tip-percentage quartiles (distribution plot)
// ---------------------------------------------------------------------------

/// Five-number summary of tip percentages within one category group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quartiles {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Tip-percentage quartiles per group label of `field`, over the visible
/// rows. Labels with no visible rows are absent from the result.
pub fn tip_percent_quartiles(
    dataset: &Dataset,
    visible: &[usize],
    field: GroupField,
) -> BTreeMap<&'static str, Quartiles> {
    let mut groups: BTreeMap<&'static str, Vec<f64>> = BTreeMap::new();
    for &i in visible {
        let rec = &dataset.records[i];
        groups
            .entry(field.value_of(rec))
            .or_default()
            .push(rec.tip_percent());
    }

    groups
        .into_iter()
        .map(|(label, mut values)| {
            values.sort_by(f64::total_cmp);
            (label, five_number_summary(&values))
        })
        .collect()
}

/// Quartiles of a non-empty sorted slice, linear interpolation between
/// neighbouring order statistics.
fn five_number_summary(sorted: &[f64]) -> Quartiles {
    Quartiles {
        min: sorted[0],
        q1: quantile(sorted, 0.25),
        median: quantile(sorted, 0.5),
        q3: quantile(sorted, 0.75),
        max: sorted[sorted.len() - 1],
    }
}

fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let frac = pos - lo as f64;
        sorted[lo] * (1.0 - frac) + sorted[hi] * frac
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Day, MealTime, Record, Sex, Smoker};

    fn rec(bill: f64, tip: f64, day: Day) -> Record {
        Record {
            total_bill: bill,
            tip,
            sex: Sex::Female,
            smoker: Smoker::No,
            day,
            time: MealTime::Dinner,
            size: 2,
        }
    }

    fn sample() -> Dataset {
        Dataset::from_records(vec![
            rec(10.0, 1.0, Day::Sat), // 10%
            rec(20.0, 4.0, Day::Sat), // 20%
            rec(40.0, 6.0, Day::Sun), // 15%
        ])
        .unwrap()
    }

    #[test]
    fn summary_over_all_rows() {
        let ds = sample();
        let s = Summary::compute(&ds, &[0, 1, 2]);
        assert_eq!(s.row_count, 3);
        assert!((s.mean_tip_percent.unwrap() - 0.15).abs() < 1e-12);
        assert!((s.mean_tip.unwrap() - 11.0 / 3.0).abs() < 1e-12);
        assert!((s.mean_bill.unwrap() - 70.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn empty_view_has_no_means() {
        let ds = sample();
        let s = Summary::compute(&ds, &[]);
        assert_eq!(s.row_count, 0);
        assert_eq!(s.mean_tip_percent, None);
        assert_eq!(s.mean_tip, None);
        assert_eq!(s.mean_bill, None);
    }

    #[test]
    fn empty_metrics_format_as_blanks() {
        assert_eq!(format_percent(None), BLANK);
        assert_eq!(format_currency(None), BLANK);
    }

    #[test]
    fn formatting_precision() {
        assert_eq!(format_percent(Some(0.16149)), "16.1%");
        assert_eq!(format_currency(Some(19.785)), "$19.79");
        assert_eq!(format_currency(Some(3.0)), "$3.00");
    }

    #[test]
    fn quartiles_per_group() {
        let ds = sample();
        let by_day = tip_percent_quartiles(&ds, &[0, 1, 2], GroupField::Day);
        assert_eq!(by_day.len(), 2);

        let sat = by_day["Sat"];
        assert!((sat.min - 0.10).abs() < 1e-12);
        assert!((sat.median - 0.15).abs() < 1e-12);
        assert!((sat.max - 0.20).abs() < 1e-12);

        let sun = by_day["Sun"];
        assert_eq!(sun.min, sun.max);
        assert!((sun.median - 0.15).abs() < 1e-12);
    }

    #[test]
    fn quartiles_skip_unrepresented_groups() {
        let ds = sample();
        let by_day = tip_percent_quartiles(&ds, &[2], GroupField::Day);
        assert!(!by_day.contains_key("Sat"));
        assert!(by_day.contains_key("Sun"));
        // And the empty view yields no groups at all.
        assert!(tip_percent_quartiles(&ds, &[], GroupField::Day).is_empty());
    }

    #[test]
    fn quantile_interpolates() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert!((quantile(&sorted, 0.5) - 2.5).abs() < 1e-12);
        assert!((quantile(&sorted, 0.25) - 1.75).abs() < 1e-12);
        assert_eq!(quantile(&sorted, 0.0), 1.0);
        assert_eq!(quantile(&sorted, 1.0), 4.0);
    }
}
