use chrono::{Duration, FixedOffset, NaiveDateTime, NaiveTime, TimeZone};
use rusqlite::Connection;
use uuid::Uuid;

use crate::db::queries;
use crate::models::FitnessClass;

/// (name, instructor, days from today, local hour, slots)
const SAMPLE_CLASSES: &[(&str, &str, i64, i64, i32)] = &[
    ("Yoga Basics", "Sarah Johnson", 1, 9, 15),
    ("Zumba Dance", "Maria Rodriguez", 1, 18, 20),
    ("HIIT Training", "Mike Chen", 2, 7, 12),
    ("Pilates", "Emma Wilson", 2, 17, 10),
    ("Strength Training", "David Brown", 3, 8, 8),
    ("Cardio Kickboxing", "Lisa Park", 3, 19, 16),
    ("Yoga Advanced", "Sarah Johnson", 4, 10, 12),
    ("Dance Fitness", "Maria Rodriguez", 5, 16, 18),
];

/// Fills an empty class table with a week of sample classes. Returns how
/// many were inserted; a table that already has classes is left alone.
pub fn seed_sample_classes(
    conn: &Connection,
    now: &NaiveDateTime,
    offset: FixedOffset,
    timezone: &str,
) -> anyhow::Result<usize> {
    if queries::count_classes(conn)? > 0 {
        return Ok(0);
    }

    let local_midnight = offset
        .from_utc_datetime(now)
        .date_naive()
        .and_time(NaiveTime::MIN);
    let utc_shift = Duration::seconds(offset.local_minus_utc() as i64);

    for (name, instructor, days, hour, slots) in SAMPLE_CLASSES {
        let local = local_midnight + Duration::days(*days) + Duration::hours(*hour);
        let class = FitnessClass {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            instructor: instructor.to_string(),
            date_time: local - utc_shift,
            total_slots: *slots,
            available_slots: *slots,
            duration_minutes: 60,
            timezone: timezone.to_string(),
        };
        queries::create_class(conn, &class)?;
    }

    tracing::info!(count = SAMPLE_CLASSES.len(), "seeded sample classes");
    Ok(SAMPLE_CLASSES.len())
}
