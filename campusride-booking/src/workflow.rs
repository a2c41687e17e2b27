use campusride_catalog::{Booking, Ride, ValidationError};
use campusride_core::repository::RideRepository;
use campusride_core::session::UserProfile;
use campusride_core::{CoreError, CoreResult};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

/// Passenger-supplied details for a seat reservation. The passenger's
/// email comes from the session profile, not from this form.
#[derive(Debug, Clone, Deserialize)]
pub struct PassengerDetails {
    pub name: String,
    pub phone: String,
    pub pickup_location: String,
}

impl PassengerDetails {
    fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("name", &self.name),
            ("phone", &self.phone),
            ("pickupLocation", &self.pickup_location),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField(field));
            }
        }
        Ok(())
    }
}

/// Books seats on behalf of authenticated passengers.
pub struct BookingService {
    rides: Arc<dyn RideRepository>,
}

impl BookingService {
    pub fn new(rides: Arc<dyn RideRepository>) -> Self {
        Self { rides }
    }

    /// Reserve one seat on the given ride.
    ///
    /// Requires an authenticated session; the unauthenticated path is
    /// rejected here rather than left to the caller's presentation layer.
    /// Builds the booking (fresh id, confirmed, timestamped now) and
    /// hands it to the repository, which enforces the seat floor.
    pub fn book_seat(
        &self,
        session: Option<&UserProfile>,
        ride_id: &str,
        details: PassengerDetails,
    ) -> CoreResult<Booking> {
        let profile = session.ok_or(CoreError::Unauthorized)?;
        details.validate()?;

        let booking = Booking::new(
            ride_id.to_string(),
            details.name,
            profile.email.clone(),
            details.phone,
            details.pickup_location,
        );
        let booking = self.rides.book(ride_id, booking)?;
        info!(
            "Seat booked on ride {} for {}",
            ride_id, booking.passenger_email
        );
        Ok(booking)
    }

    /// Rides on which the given passenger already holds a booking.
    pub fn booked_rides(&self, passenger_email: &str) -> CoreResult<Vec<Ride>> {
        Ok(self
            .rides
            .list_all()?
            .into_iter()
            .filter(|ride| ride.booked_by(passenger_email))
            .collect())
    }
}
