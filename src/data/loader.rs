use anyhow::{Context, Result};

use super::model::{Dataset, Record};

// ---------------------------------------------------------------------------
// Embedded dataset
// ---------------------------------------------------------------------------

/// The tipping table compiled into the binary. One header row, then one
/// record per line: `total_bill,tip,sex,smoker,day,time,size`.
const TIPS_CSV: &str = include_str!("tips.csv");

/// Parse the embedded tipping dataset. Runs once at startup; any malformed
/// row is a hard error, not a silent skip.
pub fn load_embedded() -> Result<Dataset> {
    parse_csv(TIPS_CSV).context("parsing embedded tips.csv")
}

/// Parse a CSV string with the tipping-record layout into a [`Dataset`].
fn parse_csv(text: &str) -> Result<Dataset> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<Record>().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(record);
    }

    Ok(Dataset::from_records(records)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Day, MealTime};

    #[test]
    fn embedded_dataset_parses() {
        let ds = load_embedded().unwrap();
        assert!(!ds.is_empty());
        // Domain invariants the UI relies on.
        assert!(ds.bill_min > 0.0);
        assert!(ds.bill_min < ds.bill_max);
        for rec in &ds.records {
            assert!(rec.total_bill >= ds.bill_min && rec.total_bill <= ds.bill_max);
            assert!(rec.tip > 0.0);
            assert!(rec.size >= 1);
        }
    }

    #[test]
    fn embedded_dataset_covers_full_domain() {
        let ds = load_embedded().unwrap();
        for day in Day::ALL {
            assert!(ds.records.iter().any(|r| r.day == day), "no rows for {day}");
        }
        for time in MealTime::ALL {
            assert!(
                ds.records.iter().any(|r| r.time == time),
                "no rows for {time}"
            );
        }
    }

    #[test]
    fn parse_small_csv() {
        let ds = parse_csv(
            "total_bill,tip,sex,smoker,day,time,size\n\
             16.99,1.01,Female,No,Sun,Dinner,2\n\
             10.34,1.66,Male,Yes,Thur,Lunch,3\n",
        )
        .unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[1].day, Day::Thur);
        assert_eq!(ds.records[1].size, 3);
        assert_eq!(ds.bill_min, 10.34);
        assert_eq!(ds.bill_max, 16.99);
    }

    #[test]
    fn bad_categorical_reports_row() {
        let err = parse_csv(
            "total_bill,tip,sex,smoker,day,time,size\n\
             16.99,1.01,Female,No,Sun,Dinner,2\n\
             10.34,1.66,Male,Yes,Monday,Lunch,3\n",
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("row 1"), "error was: {err:#}");
    }

    #[test]
    fn bad_number_is_an_error() {
        assert!(parse_csv(
            "total_bill,tip,sex,smoker,day,time,size\n\
             abc,1.01,Female,No,Sun,Dinner,2\n",
        )
        .is_err());
    }
}
