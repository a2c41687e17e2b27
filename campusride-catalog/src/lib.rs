pub mod booking;
pub mod ride;

pub use booking::{Booking, BookingStatus};
pub use campusride_shared::Masked;
pub use ride::{
    CapacityError, DriverContact, NewRide, Ride, RideStatus, ValidationError, VehicleType,
};
