use campusride_catalog::{Booking, DriverContact, NewRide, Ride};
use campusride_core::repository::RideRepository;
use campusride_core::search::RideSearchRequest;
use campusride_core::{CoreError, CoreResult};
use std::sync::Arc;
use tracing::info;

use crate::keys;
use crate::local_store::LocalStore;

/// Ride repository over the client-local key-value store.
///
/// The whole collection lives as one JSON array under the `rides` key;
/// every mutation deserializes it, applies the change and writes the
/// array back in full.
pub struct StoreRideRepository {
    store: Arc<dyn LocalStore>,
}

impl StoreRideRepository {
    pub fn new(store: Arc<dyn LocalStore>) -> Self {
        Self { store }
    }

    fn load_all(&self) -> CoreResult<Vec<Ride>> {
        match self.store.get(keys::RIDES)? {
            None => Ok(Vec::new()),
            Some(raw) => {
                serde_json::from_str(&raw).map_err(|err| CoreError::Deserialization {
                    key: keys::RIDES.to_string(),
                    reason: err.to_string(),
                })
            }
        }
    }

    fn save_all(&self, rides: &[Ride]) -> CoreResult<()> {
        let raw = serde_json::to_string(rides).map_err(|err| CoreError::Storage(err.to_string()))?;
        self.store.set(keys::RIDES, &raw)?;
        Ok(())
    }
}

impl RideRepository for StoreRideRepository {
    fn create(&self, driver: DriverContact, input: NewRide) -> CoreResult<Ride> {
        input.validate()?;
        let mut rides = self.load_all()?;
        let ride = Ride::new(driver, input);
        rides.push(ride.clone());
        self.save_all(&rides)?;
        info!(
            "Ride posted: {} ({} -> {})",
            ride.id, ride.pickup_location, ride.destination
        );
        Ok(ride)
    }

    fn list_all(&self) -> CoreResult<Vec<Ride>> {
        self.load_all()
    }

    fn list_by_driver(&self, driver_email: &str) -> CoreResult<Vec<Ride>> {
        Ok(self
            .load_all()?
            .into_iter()
            .filter(|ride| ride.driver_email == driver_email)
            .collect())
    }

    fn search(&self, request: &RideSearchRequest) -> CoreResult<Vec<Ride>> {
        Ok(self
            .load_all()?
            .into_iter()
            .filter(|ride| request.matches(ride))
            .collect())
    }

    fn delete(&self, ride_id: &str) -> CoreResult<()> {
        let mut rides = self.load_all()?;
        let before = rides.len();
        rides.retain(|ride| ride.id != ride_id);
        self.save_all(&rides)?;
        if rides.len() < before {
            info!("Ride deleted: {}", ride_id);
        }
        Ok(())
    }

    fn book(&self, ride_id: &str, booking: Booking) -> CoreResult<Booking> {
        let mut rides = self.load_all()?;
        let ride = rides
            .iter_mut()
            .find(|ride| ride.id == ride_id)
            .ok_or_else(|| CoreError::NotFound(ride_id.to_string()))?;
        let receipt = booking.clone();
        ride.accept_booking(booking)?;
        self.save_all(&rides)?;
        info!("Booking {} confirmed on ride {}", receipt.id, ride_id);
        Ok(receipt)
    }
}
