pub mod app_config;
pub mod keys;
pub mod local_store;
pub mod ride_repo;
pub mod session_repo;

pub use app_config::Config;
pub use local_store::{FileStore, LocalStore, MemoryStore, StoreError};
pub use ride_repo::StoreRideRepository;
pub use session_repo::SessionStore;
