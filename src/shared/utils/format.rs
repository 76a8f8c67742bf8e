use chrono::{DateTime, Utc};

/// Render a stored file's creation timestamp for the inventory table.
/// Records without one show "None", matching what the service omits.
pub fn format_created_at(created_at: Option<&DateTime<Utc>>) -> String {
    match created_at {
        Some(ts) => ts.format("%b %-d, %Y %H:%M").to_string(),
        None => "None".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_created_at() {
        let ts = Utc.with_ymd_and_hms(2025, 3, 7, 14, 5, 0).unwrap();
        assert_eq!(format_created_at(Some(&ts)), "Mar 7, 2025 14:05");
        assert_eq!(format_created_at(None), "None");
    }
}
