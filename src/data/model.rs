use std::fmt;

use serde::Deserialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Categorical columns
// ---------------------------------------------------------------------------

/// Sex of the bill payer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Female, Sex::Male];

    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Female => "Female",
            Sex::Male => "Male",
        }
    }
}

/// Whether the party included smokers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum Smoker {
    No,
    Yes,
}

impl Smoker {
    pub const ALL: [Smoker; 2] = [Smoker::No, Smoker::Yes];

    pub fn as_str(self) -> &'static str {
        match self {
            Smoker::No => "No",
            Smoker::Yes => "Yes",
        }
    }
}

/// Day of the week the restaurant was open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum Day {
    Thur,
    Fri,
    Sat,
    Sun,
}

impl Day {
    pub const ALL: [Day; 4] = [Day::Thur, Day::Fri, Day::Sat, Day::Sun];

    pub fn as_str(self) -> &'static str {
        match self {
            Day::Thur => "Thur",
            Day::Fri => "Fri",
            Day::Sat => "Sat",
            Day::Sun => "Sun",
        }
    }
}

/// Meal service the bill belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum MealTime {
    Lunch,
    Dinner,
}

impl MealTime {
    pub const ALL: [MealTime; 2] = [MealTime::Lunch, MealTime::Dinner];

    pub fn as_str(self) -> &'static str {
        match self {
            MealTime::Lunch => "Lunch",
            MealTime::Dinner => "Dinner",
        }
    }
}

macro_rules! impl_display_via_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

impl_display_via_as_str!(Sex, Smoker, Day, MealTime);

// ---------------------------------------------------------------------------
// Record – one row of the tipping table
// ---------------------------------------------------------------------------

/// A single tipping record (one table visit).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    pub total_bill: f64,
    pub tip: f64,
    pub sex: Sex,
    pub smoker: Smoker,
    pub day: Day,
    pub time: MealTime,
    pub size: u32,
}

impl Record {
    /// Tip as a fraction of the bill.
    pub fn tip_percent(&self) -> f64 {
        self.tip / self.total_bill
    }
}

// ---------------------------------------------------------------------------
// Grouping axis for the charts
// ---------------------------------------------------------------------------

/// Categorical field the charts can group/split by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupField {
    Sex,
    Smoker,
    Day,
    Time,
}

impl GroupField {
    pub const ALL: [GroupField; 4] = [
        GroupField::Sex,
        GroupField::Smoker,
        GroupField::Day,
        GroupField::Time,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GroupField::Sex => "sex",
            GroupField::Smoker => "smoker",
            GroupField::Day => "day",
            GroupField::Time => "time",
        }
    }

    /// The record's label under this grouping.
    pub fn value_of(self, record: &Record) -> &'static str {
        match self {
            GroupField::Sex => record.sex.as_str(),
            GroupField::Smoker => record.smoker.as_str(),
            GroupField::Day => record.day.as_str(),
            GroupField::Time => record.time.as_str(),
        }
    }

    /// The full label domain of this grouping, in display order.
    pub fn domain(self) -> Vec<&'static str> {
        match self {
            GroupField::Sex => Sex::ALL.iter().map(|v| v.as_str()).collect(),
            GroupField::Smoker => Smoker::ALL.iter().map(|v| v.as_str()).collect(),
            GroupField::Day => Day::ALL.iter().map(|v| v.as_str()).collect(),
            GroupField::Time => MealTime::ALL.iter().map(|v| v.as_str()).collect(),
        }
    }
}

impl fmt::Display for GroupField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete embedded table
// ---------------------------------------------------------------------------

/// Validation failures when assembling a [`Dataset`].
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset contains no records")]
    Empty,
    #[error("record {row}: {field} must be positive (got {value})")]
    NonPositive {
        row: usize,
        field: &'static str,
        value: f64,
    },
}

/// The full tipping table with its precomputed bill-amount domain.
///
/// Built once at startup and never mutated afterwards; every derived value
/// in the app is a pure function of this plus the current filter state.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// All records, in original row order.
    pub records: Vec<Record>,
    /// Smallest bill amount in the table.
    pub bill_min: f64,
    /// Largest bill amount in the table.
    pub bill_max: f64,
}

impl Dataset {
    /// Validate records and precompute the bill domain.
    pub fn from_records(records: Vec<Record>) -> Result<Self, DatasetError> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }
        for (row, rec) in records.iter().enumerate() {
            if rec.total_bill <= 0.0 {
                return Err(DatasetError::NonPositive {
                    row,
                    field: "total_bill",
                    value: rec.total_bill,
                });
            }
            if rec.tip <= 0.0 {
                return Err(DatasetError::NonPositive {
                    row,
                    field: "tip",
                    value: rec.tip,
                });
            }
        }

        let bill_min = records
            .iter()
            .map(|r| r.total_bill)
            .fold(f64::INFINITY, f64::min);
        let bill_max = records
            .iter()
            .map(|r| r.total_bill)
            .fold(f64::NEG_INFINITY, f64::max);

        Ok(Dataset {
            records,
            bill_min,
            bill_max,
        })
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(bill: f64, tip: f64) -> Record {
        Record {
            total_bill: bill,
            tip,
            sex: Sex::Female,
            smoker: Smoker::No,
            day: Day::Sun,
            time: MealTime::Dinner,
            size: 2,
        }
    }

    #[test]
    fn bill_domain_matches_extremes() {
        let ds =
            Dataset::from_records(vec![rec(12.5, 2.0), rec(3.1, 1.0), rec(48.0, 9.0)]).unwrap();
        assert_eq!(ds.bill_min, 3.1);
        assert_eq!(ds.bill_max, 48.0);
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn empty_dataset_is_rejected() {
        assert!(matches!(
            Dataset::from_records(Vec::new()),
            Err(DatasetError::Empty)
        ));
    }

    #[test]
    fn non_positive_bill_is_rejected_with_row() {
        let err = Dataset::from_records(vec![rec(10.0, 2.0), rec(0.0, 1.0)]).unwrap_err();
        match err {
            DatasetError::NonPositive { row, field, .. } => {
                assert_eq!(row, 1);
                assert_eq!(field, "total_bill");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn group_field_value_and_domain_agree() {
        let r = rec(10.0, 2.0);
        for field in GroupField::ALL {
            assert!(field.domain().contains(&field.value_of(&r)));
        }
    }

    #[test]
    fn tip_percent() {
        assert!((rec(20.0, 3.0).tip_percent() - 0.15).abs() < 1e-12);
    }
}
