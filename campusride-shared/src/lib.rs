pub mod ids;
pub mod pii;

pub use ids::next_id;
pub use pii::Masked;
