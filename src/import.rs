//! Bulk CSV import of feedback records
//!
//! Records are `text,rating,customer`. A header row is detected when the
//! first line mentions "feedback" (case-insensitive). Missing or unparsable
//! ratings are treated as absent, missing customers fall back to "Anonymous"
//! downstream, and blank text rows are skipped. Parsed records are fed one at
//! a time through the normal classification path; import has no batch-specific
//! classification behavior.

use crate::error::Result;
use std::io::Read;
use tracing::warn;

/// One parsed CSV row, before validation and classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRecord {
    /// Raw feedback text
    pub text: String,
    /// Star rating, absent when missing, unparsable, or out of [1,5]
    pub rating: Option<u8>,
    /// Customer name, absent when the column is missing or empty
    pub customer: Option<String>,
}

/// Parse CSV feedback records from a reader
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<ImportRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();

    for (index, result) in csv_reader.records().enumerate() {
        let record = result?;

        // Header detection mirrors the original import: skip the first row
        // when any of its fields mentions "feedback"
        if index == 0
            && record
                .iter()
                .any(|field| field.to_lowercase().contains("feedback"))
        {
            continue;
        }

        let text = record.get(0).unwrap_or_default().to_string();
        if text.trim().is_empty() {
            continue;
        }

        let rating = record.get(1).and_then(|field| {
            if field.is_empty() {
                return None;
            }
            match field.parse::<u8>() {
                Ok(r) if (1..=5).contains(&r) => Some(r),
                _ => {
                    warn!(row = index + 1, field, "Ignoring invalid rating");
                    None
                }
            }
        });

        let customer = record
            .get(2)
            .filter(|field| !field.is_empty())
            .map(ToString::to_string);

        records.push(ImportRecord {
            text,
            rating,
            customer,
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_header() {
        let csv = "feedback,rating,customer\nGreat food,5,Ana\nSlow delivery,2,";
        let records = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text, "Great food");
        assert_eq!(records[0].rating, Some(5));
        assert_eq!(records[0].customer.as_deref(), Some("Ana"));
        assert_eq!(records[1].customer, None);
    }

    #[test]
    fn test_parse_without_header() {
        let csv = "Great food,5,Ana";
        let records = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_invalid_rating_becomes_absent() {
        let csv = "Great food,ten,Ana\nOk food,9,Bob";
        let records = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(records[0].rating, None);
        assert_eq!(records[1].rating, None);
    }

    #[test]
    fn test_blank_rows_skipped() {
        let csv = "Great food,5\n,,\n   ,3,Bob\nBad service,1";
        let records = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].text, "Bad service");
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_csv("".as_bytes()).unwrap().is_empty());
    }
}
