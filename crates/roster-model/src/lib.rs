pub mod error;
pub mod ids;
pub mod record;

pub use error::{ModelError, Result};
pub use ids::{DatasetId, RowId};
pub use record::{ExcludedRecord, IncludedRecord, PartitionKind, PartitionOutput, RawRow};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_id_accepts_allow_listed_characters() {
        assert!(DatasetId::new("clients_2025_jan").is_ok());
        assert!(DatasetId::new("04_apr").is_ok());

        assert!(DatasetId::new("").is_err());
        assert!(DatasetId::new("Jan").is_err());
        assert!(DatasetId::new("jan; drop table").is_err());
        assert!(DatasetId::new("a".repeat(65)).is_err());
    }

    #[test]
    fn dataset_id_sanitizes_free_form_text() {
        assert_eq!(
            DatasetId::sanitize("01_jan (January Data)").unwrap().as_str(),
            "01_jan_january_data"
        );
        assert_eq!(DatasetId::sanitize("  April-2025 ").unwrap().as_str(), "april_2025");
        assert!(DatasetId::sanitize("---").is_err());
    }

    #[test]
    fn row_id_round_trips_through_hex_and_serde() {
        let id = RowId::from_sha256_prefix([7u8; 32]);
        assert_eq!(RowId::from_hex(&id.to_hex()).unwrap(), id);

        let json = serde_json::to_string(&id).unwrap();
        let back: RowId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);

        assert!(RowId::from_hex("not-hex").is_err());
        assert!(RowId::from_hex("abcd").is_err());
    }

    #[test]
    fn excluded_record_serializes_missing_originals_as_null() {
        let record = ExcludedRecord {
            row_id: RowId::from_sha256_prefix([0u8; 32]),
            original_row_number: 3,
            original_name: None,
            original_birth_day: Some("32".to_string()),
            original_birth_month: Some("5".to_string()),
            original_birth_year: Some("1990".to_string()),
            exclusion_reason: "missing name; invalid day (not 1-31)".to_string(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert!(value["original_name"].is_null());
        assert_eq!(value["original_birth_day"], "32");
    }
}
