use campusride_booking::BookingService;
use campusride_core::repository::RideRepository;
use campusride_store::{Config, FileStore, LocalStore, SessionStore, StoreError, StoreRideRepository};
use std::sync::Arc;

/// Everything the dashboard commands need, built once at startup around
/// a single explicit store handle.
pub struct AppContext {
    pub rides: Arc<dyn RideRepository>,
    pub sessions: SessionStore,
    pub bookings: BookingService,
}

impl AppContext {
    pub fn from_config(config: &Config) -> Result<Self, StoreError> {
        let store: Arc<dyn LocalStore> = Arc::new(FileStore::new(&config.storage.path)?);
        Ok(Self::with_store(store))
    }

    pub fn with_store(store: Arc<dyn LocalStore>) -> Self {
        let rides: Arc<dyn RideRepository> = Arc::new(StoreRideRepository::new(store.clone()));
        let sessions = SessionStore::new(store);
        let bookings = BookingService::new(rides.clone());
        Self {
            rides,
            sessions,
            bookings,
        }
    }
}
