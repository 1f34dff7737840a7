use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use chrono::{FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extract::{AppJson, AppQuery};
use crate::models::class::format_class_time;
use crate::models::{Booking, BookingDetails, NewBooking};
use crate::services::studio;
use crate::state::AppState;

#[derive(Serialize)]
pub struct BookingResponse {
    id: String,
    class_id: String,
    client_name: String,
    client_email: String,
    booking_date: String,
}

impl BookingResponse {
    fn new(b: Booking, offset: FixedOffset) -> Self {
        Self {
            booking_date: format_class_time(&b.booking_date, offset),
            id: b.id,
            class_id: b.class_id,
            client_name: b.client_name,
            client_email: b.client_email,
        }
    }
}

#[derive(Serialize)]
pub struct BookingDetailsResponse {
    #[serde(flatten)]
    booking: BookingResponse,
    class_name: String,
    instructor: String,
    class_date_time: String,
}

// POST /book
pub async fn book_class(
    State(state): State<Arc<AppState>>,
    AppJson(body): AppJson<NewBooking>,
) -> Result<Json<BookingResponse>, AppError> {
    let now = Utc::now().naive_utc();

    let booking = {
        let db = state.db()?;
        studio::book_class(&db, body, &now)?
    };

    Ok(Json(BookingResponse::new(
        booking,
        state.config.studio_offset(),
    )))
}

// GET /bookings?email=
#[derive(Deserialize)]
pub struct BookingsQuery {
    pub email: Option<String>,
}

pub async fn get_bookings(
    State(state): State<Arc<AppState>>,
    AppQuery(query): AppQuery<BookingsQuery>,
) -> Result<Json<Vec<BookingDetailsResponse>>, AppError> {
    let email = query.email.unwrap_or_default();

    let bookings = {
        let db = state.db()?;
        studio::bookings_for_email(&db, &email)?
    };

    let offset = state.config.studio_offset();
    let response = bookings
        .into_iter()
        .map(|d: BookingDetails| BookingDetailsResponse {
            class_date_time: format_class_time(&d.class_date_time, offset),
            class_name: d.class_name,
            instructor: d.instructor,
            booking: BookingResponse::new(d.booking, offset),
        })
        .collect();

    Ok(Json(response))
}

// DELETE /bookings/:id
pub async fn cancel_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    {
        let db = state.db()?;
        studio::cancel_booking(&db, &id)?;
    }

    Ok(Json(
        serde_json::json!({"message": "Booking deleted successfully"}),
    ))
}
