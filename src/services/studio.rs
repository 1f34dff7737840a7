use std::sync::OnceLock;

use chrono::{FixedOffset, NaiveDateTime};
use regex::Regex;
use rusqlite::Connection;
use uuid::Uuid;

use crate::db::queries;
use crate::models::class::parse_class_time;
use crate::models::{Booking, BookingDetails, ClassUpdate, FitnessClass, NewBooking, NewClass};

#[derive(Debug, thiserror::Error)]
pub enum StudioError {
    #[error("Class not found")]
    ClassNotFound,

    #[error("Booking not found")]
    BookingNotFound,

    #[error("Cannot book classes in the past")]
    ClassInPast,

    #[error("No available slots for this class")]
    NoSlotsAvailable,

    #[error("You have already booked this class")]
    AlreadyBooked,

    #[error("{0}")]
    Invalid(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Studio-wide settings the class operations need.
#[derive(Debug, Clone)]
pub struct StudioClock {
    pub now: NaiveDateTime,
    pub offset: FixedOffset,
    pub default_timezone: String,
}

fn required(value: &str, field: &str) -> Result<String, StudioError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StudioError::Invalid(format!("{field} cannot be empty")));
    }
    Ok(trimmed.to_string())
}

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| {
        // Domain labels may not start or end with a hyphen.
        Regex::new(
            r"(?x)
            ^[A-Za-z0-9_%+-]+(?:\.[A-Za-z0-9_%+-]+)*
            @
            (?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)+
            [A-Za-z]{2,}$
            ",
        )
        .expect("Failed to compile email regex")
    })
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

// ── Classes ──

pub fn create_class(
    conn: &Connection,
    input: NewClass,
    clock: &StudioClock,
) -> Result<FitnessClass, StudioError> {
    let name = required(&input.name, "Class name")?;
    let instructor = required(&input.instructor, "Instructor")?;

    if input.total_slots <= 0 {
        return Err(StudioError::Invalid(
            "Total slots must be greater than 0".to_string(),
        ));
    }
    if input.duration_minutes <= 0 {
        return Err(StudioError::Invalid(
            "Duration must be greater than 0".to_string(),
        ));
    }

    let date_time = parse_class_time(&input.date_time, clock.offset)
        .map_err(|e| StudioError::Invalid(e.to_string()))?;
    if date_time < clock.now {
        return Err(StudioError::Invalid(
            "Class date/time cannot be in the past".to_string(),
        ));
    }

    let class = FitnessClass {
        id: Uuid::new_v4().to_string(),
        name,
        instructor,
        date_time,
        total_slots: input.total_slots,
        available_slots: input.total_slots,
        duration_minutes: input.duration_minutes,
        timezone: input
            .timezone
            .filter(|tz| !tz.trim().is_empty())
            .unwrap_or_else(|| clock.default_timezone.clone()),
    };

    queries::create_class(conn, &class)?;
    tracing::info!(class_id = %class.id, name = %class.name, "created class");

    Ok(class)
}

pub fn update_class(
    conn: &Connection,
    id: &str,
    update: ClassUpdate,
) -> Result<FitnessClass, StudioError> {
    let mut class = queries::get_class(conn, id)?.ok_or(StudioError::ClassNotFound)?;

    if let Some(name) = update.name {
        class.name = required(&name, "Class name")?;
    }
    if let Some(instructor) = update.instructor {
        class.instructor = required(&instructor, "Instructor")?;
    }
    if let Some(slots) = update.available_slots {
        class.available_slots = slots.clamp(0, class.total_slots);
    }

    queries::update_class(conn, &class)?;
    tracing::info!(class_id = %id, "updated class");

    Ok(class)
}

pub fn delete_class(conn: &Connection, id: &str) -> Result<(), StudioError> {
    if !queries::delete_class(conn, id)? {
        return Err(StudioError::ClassNotFound);
    }
    tracing::info!(class_id = %id, "deleted class");
    Ok(())
}

// ── Bookings ──

/// Reserves a slot. The duplicate check, insert and slot decrement run in
/// one transaction.
pub fn book_class(
    conn: &Connection,
    input: NewBooking,
    now: &NaiveDateTime,
) -> Result<Booking, StudioError> {
    let client_name = required(&input.client_name, "Client name")?;
    let client_email = input.client_email.trim().to_string();
    if !is_valid_email(&client_email) {
        return Err(StudioError::Invalid(format!(
            "Invalid email address: {client_email}"
        )));
    }

    let tx = conn.unchecked_transaction()?;

    let class = queries::get_class(&tx, &input.class_id)?.ok_or(StudioError::ClassNotFound)?;
    if class.date_time < *now {
        return Err(StudioError::ClassInPast);
    }
    if class.available_slots <= 0 {
        return Err(StudioError::NoSlotsAvailable);
    }
    if queries::find_booking_for_email(&tx, &class.id, &client_email)?.is_some() {
        return Err(StudioError::AlreadyBooked);
    }

    let booking = Booking {
        id: Uuid::new_v4().to_string(),
        class_id: class.id.clone(),
        client_name,
        client_email,
        booking_date: *now,
    };
    queries::create_booking(&tx, &booking)?;
    queries::adjust_available_slots(&tx, &class.id, -1)?;

    tx.commit()?;

    tracing::info!(
        booking_id = %booking.id,
        class_id = %booking.class_id,
        "booking created"
    );

    Ok(booking)
}

pub fn bookings_for_email(
    conn: &Connection,
    email: &str,
) -> Result<Vec<BookingDetails>, StudioError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(StudioError::Invalid(
            "Email parameter is required".to_string(),
        ));
    }
    let bookings = queries::get_bookings_for_email(conn, email)?;
    tracing::info!(count = bookings.len(), "retrieved bookings");
    Ok(bookings)
}

/// Removes the booking and hands its slot back to the class.
pub fn cancel_booking(conn: &Connection, id: &str) -> Result<Booking, StudioError> {
    let tx = conn.unchecked_transaction()?;

    let booking = queries::get_booking(&tx, id)?.ok_or(StudioError::BookingNotFound)?;
    queries::delete_booking(&tx, id)?;
    queries::adjust_available_slots(&tx, &booking.class_id, 1)?;

    tx.commit()?;

    tracing::info!(booking_id = %id, class_id = %booking.class_id, "booking cancelled");
    Ok(booking)
}
