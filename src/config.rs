use std::env;

use chrono::{FixedOffset, Offset, Utc};

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    /// Label attached to classes created without an explicit timezone.
    pub studio_timezone: String,
    pub studio_utc_offset_minutes: i32,
    pub seed_sample_data: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "fitness_studio.db".to_string()),
            studio_timezone: env::var("STUDIO_TIMEZONE")
                .unwrap_or_else(|_| "Asia/Kolkata".to_string()),
            studio_utc_offset_minutes: env::var("STUDIO_UTC_OFFSET_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(330),
            seed_sample_data: env::var("SEED_SAMPLE_DATA")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
        }
    }

    /// Falls back to UTC when the configured offset is out of range.
    pub fn studio_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.studio_utc_offset_minutes * 60).unwrap_or_else(|| {
            tracing::warn!(
                minutes = self.studio_utc_offset_minutes,
                "studio UTC offset out of range, using UTC"
            );
            Utc.fix()
        })
    }
}

fn parse_flag(v: &str) -> bool {
    !matches!(
        v.trim().to_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(minutes: i32) -> AppConfig {
        AppConfig {
            port: 8000,
            database_url: ":memory:".to_string(),
            studio_timezone: "Asia/Kolkata".to_string(),
            studio_utc_offset_minutes: minutes,
            seed_sample_data: false,
        }
    }

    #[test]
    fn test_studio_offset() {
        assert_eq!(config(330).studio_offset().local_minus_utc(), 330 * 60);
        assert_eq!(config(-300).studio_offset().local_minus_utc(), -300 * 60);
    }

    #[test]
    fn test_out_of_range_offset_is_utc() {
        assert_eq!(config(100_000).studio_offset().local_minus_utc(), 0);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag("1"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(" OFF "));
        assert!(!parse_flag("0"));
    }
}
