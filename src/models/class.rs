use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// A scheduled studio class. `date_time` is stored in UTC.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FitnessClass {
    pub id: String,
    pub name: String,
    pub instructor: String,
    pub date_time: NaiveDateTime,
    pub total_slots: i32,
    pub available_slots: i32,
    pub duration_minutes: i32,
    pub timezone: String,
}

fn default_duration() -> i32 {
    60
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewClass {
    pub name: String,
    pub instructor: String,
    pub date_time: String,
    pub total_slots: i32,
    #[serde(default = "default_duration")]
    pub duration_minutes: i32,
    #[serde(default)]
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassUpdate {
    pub name: Option<String>,
    pub instructor: Option<String>,
    pub available_slots: Option<i32>,
}

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parses an RFC 3339 timestamp, or a naive one read in the studio's offset,
/// into UTC.
pub fn parse_class_time(s: &str, studio_offset: FixedOffset) -> anyhow::Result<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_utc());
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(local) = NaiveDateTime::parse_from_str(s, fmt) {
            return studio_offset
                .from_local_datetime(&local)
                .single()
                .map(|dt| dt.naive_utc())
                .ok_or_else(|| anyhow::anyhow!("ambiguous local time: {s}"));
        }
    }

    Err(anyhow::anyhow!("invalid date/time: {s}"))
}

pub fn format_class_time(dt: &NaiveDateTime, studio_offset: FixedOffset) -> String {
    studio_offset.from_utc_datetime(dt).to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ist() -> FixedOffset {
        FixedOffset::east_opt(330 * 60).unwrap()
    }

    fn utc(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_parse_rfc3339_keeps_its_offset() {
        let dt = parse_class_time("2025-06-16T09:00:00+00:00", ist()).unwrap();
        assert_eq!(dt, utc("2025-06-16 09:00:00"));
    }

    #[test]
    fn test_parse_naive_uses_studio_offset() {
        let dt = parse_class_time("2025-06-16T09:00", ist()).unwrap();
        assert_eq!(dt, utc("2025-06-16 03:30:00"));
        let dt = parse_class_time("2025-06-16 09:00:00", ist()).unwrap();
        assert_eq!(dt, utc("2025-06-16 03:30:00"));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_class_time("next tuesday", ist()).is_err());
        assert!(parse_class_time("", ist()).is_err());
    }

    #[test]
    fn test_format_in_studio_offset() {
        let s = format_class_time(&utc("2025-06-16 03:30:00"), ist());
        assert_eq!(s, "2025-06-16T09:00:00+05:30");
    }
}
