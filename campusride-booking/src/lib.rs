pub mod workflow;

pub use workflow::{BookingService, PassengerDetails};
