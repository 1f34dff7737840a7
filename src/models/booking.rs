use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: String,
    pub class_id: String,
    pub client_name: String,
    pub client_email: String,
    pub booking_date: NaiveDateTime,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewBooking {
    pub class_id: String,
    pub client_name: String,
    pub client_email: String,
}

/// A booking joined with the class it reserves.
#[derive(Debug, Clone, Serialize)]
pub struct BookingDetails {
    pub booking: Booking,
    pub class_name: String,
    pub instructor: String,
    pub class_date_time: NaiveDateTime,
}
