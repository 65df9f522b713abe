use chrono::{DateTime, Local};
use std::fmt;

/// A single line captured from the meter, stamped at arrival time.
#[derive(Debug, Clone)]
pub struct LogRecord {
    /// Wall-clock capture time
    pub timestamp: DateTime<Local>,
    /// Line content with surrounding whitespace removed
    pub text: String,
}

impl LogRecord {
    pub fn new(timestamp: DateTime<Local>, raw: &str) -> Self {
        Self {
            timestamp,
            text: raw.trim().to_string(),
        }
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.text
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn midnight() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn formats_timestamp_then_text() {
        let record = LogRecord::new(midnight(), "12.5 kWh\r\n");
        assert_eq!(record.to_string(), "2024-01-01 00:00:00, 12.5 kWh");
    }

    #[test]
    fn trimmed_input_passes_through_unchanged() {
        let record = LogRecord::new(midnight(), "12.5 kWh");
        assert_eq!(record.text, "12.5 kWh");
    }

    #[test]
    fn bare_terminator_yields_empty_text() {
        let record = LogRecord::new(midnight(), "\n");
        assert_eq!(record.text, "");
        assert_eq!(record.to_string(), "2024-01-01 00:00:00, ");
    }
}
