pub mod booking;
pub mod class;
pub mod intent;

pub use booking::{Booking, BookingDetails, NewBooking};
pub use class::{ClassUpdate, FitnessClass, NewClass};
pub use intent::{ChatReply, ClassSummary, Intent};
