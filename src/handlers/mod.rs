pub mod bookings;
pub mod chat;
pub mod classes;
pub mod health;
