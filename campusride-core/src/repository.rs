use campusride_catalog::{Booking, DriverContact, NewRide, Ride};

use crate::search::RideSearchRequest;
use crate::CoreResult;

/// Repository contract for the ride collection.
///
/// Every mutation is a whole-collection read-modify-write against the
/// backing store; insertion order of the collection is preserved. All
/// operations are synchronous single-key accesses.
pub trait RideRepository: Send + Sync {
    /// Validate the input, assign a fresh id and append the new ride.
    fn create(&self, driver: DriverContact, input: NewRide) -> CoreResult<Ride>;

    /// The full collection in storage order. A never-written collection
    /// is empty, not an error; a corrupt stored value is `Deserialization`.
    fn list_all(&self) -> CoreResult<Vec<Ride>>;

    /// Rides whose `driver_email` equals the given identity.
    fn list_by_driver(&self, driver_email: &str) -> CoreResult<Vec<Ride>>;

    /// Rides matching the query text and vehicle filter, combined with AND.
    fn search(&self, request: &RideSearchRequest) -> CoreResult<Vec<Ride>>;

    /// Remove the ride with the given id, discarding its bookings.
    /// A missing id is a no-op, not an error.
    fn delete(&self, ride_id: &str) -> CoreResult<()>;

    /// Attach the booking to the ride and consume one seat. Fails with
    /// `NotFound` for an unknown ride and `CapacityExceeded` when no
    /// seat is available.
    fn book(&self, ride_id: &str, booking: Booking) -> CoreResult<Booking>;
}
