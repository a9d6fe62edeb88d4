use google_sheets4::api::ValueRange;
use serde_json::Value;

pub trait ValueRangeFactory {
    /// Builds a row-major range where every cell is sent as text.
    fn from_table<T: AsRef<str>>(rows: &[Vec<T>]) -> Self;
}

fn wrap_value<T: AsRef<str>>(value: T) -> Value {
    Value::String(value.as_ref().to_owned())
}

impl ValueRangeFactory for ValueRange {
    fn from_table<T: AsRef<str>>(rows: &[Vec<T>]) -> Self {
        let values = rows
            .iter()
            .map(|row| row.iter().map(wrap_value).collect::<Vec<_>>())
            .collect::<Vec<_>>();

        Self {
            major_dimension: Some("ROWS".to_string()),
            range: None,
            values: Some(values),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_value() {
        assert_eq!(wrap_value("0.5"), Value::String("0.5".to_string()));
    }

    #[test]
    fn test_from_table() {
        let rows = vec![
            vec!["Timestamp", "Asset"],
            vec!["2024-01-01 00:00:00", "XBT"],
        ];
        let value_range = ValueRange::from_table(&rows);

        assert_eq!(
            value_range.major_dimension,
            Some("ROWS".to_string()),
            "Major dimension should be ROWS"
        );
        assert_eq!(value_range.range, None, "Range should be None");
        assert_eq!(
            value_range.values,
            Some(vec![
                vec![
                    Value::String("Timestamp".to_string()),
                    Value::String("Asset".to_string())
                ],
                vec![
                    Value::String("2024-01-01 00:00:00".to_string()),
                    Value::String("XBT".to_string())
                ],
            ])
        );
    }

    #[test]
    fn test_from_empty_table() {
        let rows: Vec<Vec<String>> = Vec::new();
        let value_range = ValueRange::from_table(&rows);
        assert_eq!(value_range.values, Some(Vec::new()));
    }
}
