use chrono::{NaiveDateTime, Utc};
use rusqlite::{params, Connection};

use crate::models::{Booking, BookingDetails, ClassSummary, FitnessClass};

const DATETIME_FMT: &str = "%Y-%m-%d %H:%M:%S";

const CLASS_COLUMNS: &str =
    "id, name, instructor, date_time, total_slots, available_slots, duration_minutes, timezone";

fn fmt_dt(dt: &NaiveDateTime) -> String {
    dt.format(DATETIME_FMT).to_string()
}

fn parse_dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, DATETIME_FMT).unwrap_or_else(|_| Utc::now().naive_utc())
}

// ── Classes ──

pub fn create_class(conn: &Connection, class: &FitnessClass) -> anyhow::Result<()> {
    conn.execute(
        "INSERT INTO classes (id, name, instructor, date_time, total_slots, available_slots, duration_minutes, timezone)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            class.id,
            class.name,
            class.instructor,
            fmt_dt(&class.date_time),
            class.total_slots,
            class.available_slots,
            class.duration_minutes,
            class.timezone,
        ],
    )?;
    Ok(())
}

pub fn get_class(conn: &Connection, id: &str) -> anyhow::Result<Option<FitnessClass>> {
    let result = conn.query_row(
        &format!("SELECT {CLASS_COLUMNS} FROM classes WHERE id = ?1"),
        params![id],
        parse_class_row,
    );

    match result {
        Ok(class) => Ok(Some(class)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Classes ordered by start time, optionally narrowed to one instructor
/// (case-insensitive) and/or a start-time window.
pub fn list_classes(
    conn: &Connection,
    instructor: Option<&str>,
    window: Option<(&NaiveDateTime, &NaiveDateTime)>,
) -> anyhow::Result<Vec<FitnessClass>> {
    let mut clauses: Vec<String> = vec![];
    let mut params_vec: Vec<Box<dyn rusqlite::types::ToSql>> = vec![];

    if let Some(name) = instructor {
        params_vec.push(Box::new(name.to_string()));
        clauses.push(format!("lower(instructor) = lower(?{})", params_vec.len()));
    }
    if let Some((from, to)) = window {
        params_vec.push(Box::new(fmt_dt(from)));
        clauses.push(format!("date_time >= ?{}", params_vec.len()));
        params_vec.push(Box::new(fmt_dt(to)));
        clauses.push(format!("date_time <= ?{}", params_vec.len()));
    }

    let where_sql = if clauses.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", clauses.join(" AND "))
    };
    let sql = format!("SELECT {CLASS_COLUMNS} FROM classes{where_sql} ORDER BY date_time ASC");

    let mut stmt = conn.prepare(&sql)?;
    let params_refs: Vec<&dyn rusqlite::types::ToSql> =
        params_vec.iter().map(|p| p.as_ref()).collect();
    let rows = stmt.query_map(params_refs.as_slice(), parse_class_row)?;

    let mut classes = vec![];
    for row in rows {
        classes.push(row?);
    }
    Ok(classes)
}

/// Future classes that still have a free slot, soonest first.
pub fn open_class_summaries(
    conn: &Connection,
    now: &NaiveDateTime,
    limit: usize,
) -> anyhow::Result<Vec<ClassSummary>> {
    let mut stmt = conn.prepare(
        "SELECT name, instructor FROM classes
         WHERE available_slots > 0 AND date_time > ?1
         ORDER BY date_time ASC LIMIT ?2",
    )?;

    let rows = stmt.query_map(params![fmt_dt(now), limit as i64], |row| {
        Ok(ClassSummary {
            name: row.get(0)?,
            instructor: row.get(1)?,
        })
    })?;

    let mut summaries = vec![];
    for row in rows {
        summaries.push(row?);
    }
    Ok(summaries)
}

pub fn count_classes(conn: &Connection) -> anyhow::Result<i64> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM classes", [], |row| row.get(0))?;
    Ok(count)
}

pub fn update_class(conn: &Connection, class: &FitnessClass) -> anyhow::Result<bool> {
    let count = conn.execute(
        "UPDATE classes SET name = ?1, instructor = ?2, available_slots = ?3 WHERE id = ?4",
        params![class.name, class.instructor, class.available_slots, class.id],
    )?;
    Ok(count > 0)
}

pub fn delete_class(conn: &Connection, id: &str) -> anyhow::Result<bool> {
    let count = conn.execute("DELETE FROM classes WHERE id = ?1", params![id])?;
    Ok(count > 0)
}

/// Moves `available_slots` by `delta`, clamped to `[0, total_slots]`.
pub fn adjust_available_slots(conn: &Connection, class_id: &str, delta: i32) -> anyhow::Result<bool> {
    let count = conn.execute(
        "UPDATE classes
         SET available_slots = MAX(0, MIN(total_slots, available_slots + ?1))
         WHERE id = ?2",
        params![delta, class_id],
    )?;
    Ok(count > 0)
}

fn parse_class_row(row: &rusqlite::Row) -> rusqlite::Result<FitnessClass> {
    let date_time_str: String = row.get(3)?;

    Ok(FitnessClass {
        id: row.get(0)?,
        name: row.get(1)?,
        instructor: row.get(2)?,
        date_time: parse_dt(&date_time_str),
        total_slots: row.get(4)?,
        available_slots: row.get(5)?,
        duration_minutes: row.get(6)?,
        timezone: row.get(7)?,
    })
}

// ── Bookings ──

pub fn create_booking(conn: &Connection, booking: &Booking) -> anyhow::Result<()> {
    conn.execute(
        "INSERT INTO bookings (id, class_id, client_name, client_email, booking_date)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            booking.id,
            booking.class_id,
            booking.client_name,
            booking.client_email,
            fmt_dt(&booking.booking_date),
        ],
    )?;
    Ok(())
}

pub fn get_booking(conn: &Connection, id: &str) -> anyhow::Result<Option<Booking>> {
    let result = conn.query_row(
        "SELECT id, class_id, client_name, client_email, booking_date FROM bookings WHERE id = ?1",
        params![id],
        parse_booking_row,
    );

    match result {
        Ok(booking) => Ok(Some(booking)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn find_booking_for_email(
    conn: &Connection,
    class_id: &str,
    email: &str,
) -> anyhow::Result<Option<Booking>> {
    let result = conn.query_row(
        "SELECT id, class_id, client_name, client_email, booking_date FROM bookings
         WHERE class_id = ?1 AND lower(client_email) = lower(?2)",
        params![class_id, email],
        parse_booking_row,
    );

    match result {
        Ok(booking) => Ok(Some(booking)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn get_bookings_for_email(conn: &Connection, email: &str) -> anyhow::Result<Vec<BookingDetails>> {
    let mut stmt = conn.prepare(
        "SELECT b.id, b.class_id, b.client_name, b.client_email, b.booking_date,
                c.name, c.instructor, c.date_time
         FROM bookings b
         INNER JOIN classes c ON c.id = b.class_id
         WHERE lower(b.client_email) = lower(?1)
         ORDER BY c.date_time ASC",
    )?;

    let rows = stmt.query_map(params![email], |row| {
        let class_date_time: String = row.get(7)?;
        Ok(BookingDetails {
            booking: parse_booking_row(row)?,
            class_name: row.get(5)?,
            instructor: row.get(6)?,
            class_date_time: parse_dt(&class_date_time),
        })
    })?;

    let mut bookings = vec![];
    for row in rows {
        bookings.push(row?);
    }
    Ok(bookings)
}

pub fn delete_booking(conn: &Connection, id: &str) -> anyhow::Result<bool> {
    let count = conn.execute("DELETE FROM bookings WHERE id = ?1", params![id])?;
    Ok(count > 0)
}

fn parse_booking_row(row: &rusqlite::Row) -> rusqlite::Result<Booking> {
    let booking_date: String = row.get(4)?;

    Ok(Booking {
        id: row.get(0)?,
        class_id: row.get(1)?,
        client_name: row.get(2)?,
        client_email: row.get(3)?,
        booking_date: parse_dt(&booking_date),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    fn make_class(id: &str, name: &str, instructor: &str, at: &str, slots: i32) -> FitnessClass {
        FitnessClass {
            id: id.to_string(),
            name: name.to_string(),
            instructor: instructor.to_string(),
            date_time: dt(at),
            total_slots: slots,
            available_slots: slots,
            duration_minutes: 60,
            timezone: "Asia/Kolkata".to_string(),
        }
    }

    fn make_booking(id: &str, class_id: &str, email: &str) -> Booking {
        Booking {
            id: id.to_string(),
            class_id: class_id.to_string(),
            client_name: "Jane".to_string(),
            client_email: email.to_string(),
            booking_date: dt("2025-06-01 12:00"),
        }
    }

    #[test]
    fn test_class_round_trip() {
        let conn = db::init_db(":memory:").unwrap();
        let class = make_class("c1", "Pilates", "Emma Wilson", "2025-06-16 10:00", 10);
        create_class(&conn, &class).unwrap();

        assert_eq!(get_class(&conn, "c1").unwrap(), Some(class));
        assert_eq!(get_class(&conn, "missing").unwrap(), None);
    }

    #[test]
    fn test_list_classes_sorted_and_filtered() {
        let conn = db::init_db(":memory:").unwrap();
        create_class(&conn, &make_class("c2", "Zumba", "Maria Rodriguez", "2025-06-18 18:00", 20)).unwrap();
        create_class(&conn, &make_class("c1", "Yoga", "Sarah Johnson", "2025-06-16 09:00", 15)).unwrap();
        create_class(&conn, &make_class("c3", "Yoga Advanced", "Sarah Johnson", "2025-06-20 10:00", 12)).unwrap();

        let all: Vec<String> = list_classes(&conn, None, None)
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(all, vec!["c1", "c2", "c3"]);

        let sarah = list_classes(&conn, Some("sarah johnson"), None).unwrap();
        assert_eq!(sarah.len(), 2);

        let from = dt("2025-06-17 00:00");
        let to = dt("2025-06-19 00:00");
        let window = list_classes(&conn, None, Some((&from, &to))).unwrap();
        assert_eq!(window.len(), 1);
        assert_eq!(window[0].id, "c2");

        let both = list_classes(&conn, Some("Sarah Johnson"), Some((&from, &to))).unwrap();
        assert!(both.is_empty());
    }

    #[test]
    fn test_open_class_summaries() {
        let conn = db::init_db(":memory:").unwrap();
        create_class(&conn, &make_class("past", "Old", "X", "2025-06-01 09:00", 5)).unwrap();
        create_class(&conn, &make_class("full", "Full", "Y", "2025-06-17 09:00", 1)).unwrap();
        adjust_available_slots(&conn, "full", -1).unwrap();
        for (i, day) in ["20", "18", "19", "21"].iter().enumerate() {
            let id = format!("open{i}");
            create_class(&conn, &make_class(&id, &format!("Class {day}"), "Z", &format!("2025-06-{day} 09:00"), 5)).unwrap();
        }

        let summaries = open_class_summaries(&conn, &dt("2025-06-10 00:00"), 3).unwrap();
        let names: Vec<&str> = summaries.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Class 18", "Class 19", "Class 20"]);
    }

    #[test]
    fn test_adjust_slots_clamps() {
        let conn = db::init_db(":memory:").unwrap();
        create_class(&conn, &make_class("c1", "HIIT", "Mike Chen", "2025-06-16 07:00", 2)).unwrap();

        adjust_available_slots(&conn, "c1", 5).unwrap();
        assert_eq!(get_class(&conn, "c1").unwrap().unwrap().available_slots, 2);

        adjust_available_slots(&conn, "c1", -5).unwrap();
        assert_eq!(get_class(&conn, "c1").unwrap().unwrap().available_slots, 0);

        assert!(!adjust_available_slots(&conn, "missing", 1).unwrap());
    }

    #[test]
    fn test_booking_email_lookup_is_case_insensitive() {
        let conn = db::init_db(":memory:").unwrap();
        create_class(&conn, &make_class("c1", "HIIT", "Mike Chen", "2025-06-16 07:00", 5)).unwrap();
        create_booking(&conn, &make_booking("b1", "c1", "Jane@Example.com")).unwrap();

        assert!(find_booking_for_email(&conn, "c1", "jane@example.com").unwrap().is_some());
        assert!(find_booking_for_email(&conn, "c2", "jane@example.com").unwrap().is_none());

        let details = get_bookings_for_email(&conn, "JANE@EXAMPLE.COM").unwrap();
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].class_name, "HIIT");
        assert_eq!(details[0].instructor, "Mike Chen");
    }

    #[test]
    fn test_duplicate_booking_rejected_by_index() {
        let conn = db::init_db(":memory:").unwrap();
        create_class(&conn, &make_class("c1", "HIIT", "Mike Chen", "2025-06-16 07:00", 5)).unwrap();
        create_booking(&conn, &make_booking("b1", "c1", "jane@example.com")).unwrap();
        assert!(create_booking(&conn, &make_booking("b2", "c1", "JANE@example.com")).is_err());
    }

    #[test]
    fn test_delete_class_cascades_bookings() {
        let conn = db::init_db(":memory:").unwrap();
        create_class(&conn, &make_class("c1", "HIIT", "Mike Chen", "2025-06-16 07:00", 5)).unwrap();
        create_booking(&conn, &make_booking("b1", "c1", "jane@example.com")).unwrap();

        assert!(delete_class(&conn, "c1").unwrap());
        assert!(get_booking(&conn, "b1").unwrap().is_none());
        assert!(!delete_class(&conn, "c1").unwrap());
    }
}
