use chrono::{DateTime, Utc};

/// `YYYYMMDDHHMMSSmmm` in UTC, e.g. `20250208193911768`.
pub fn numeric_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y%m%d%H%M%S%3f").to_string()
}

pub fn current_numeric_timestamp() -> String {
    numeric_timestamp(Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_numeric_timestamp_pads_every_field() {
        let at = Utc.with_ymd_and_hms(2025, 2, 8, 9, 3, 1).unwrap() + chrono::Duration::milliseconds(7);
        assert_eq!(numeric_timestamp(at), "20250208090301007");
    }

    #[test]
    fn test_current_numeric_timestamp_shape() {
        let ts = current_numeric_timestamp();
        assert_eq!(ts.len(), 17);
        assert!(ts.chars().all(|c| c.is_ascii_digit()));
    }
}
