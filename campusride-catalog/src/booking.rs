use campusride_shared::{next_id, Masked};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Booking status on the wire
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

/// A passenger's reservation of one seat on a ride.
///
/// Owned exclusively by its parent [`crate::Ride`]; `ride_id` is a plain
/// back-reference, never an ownership pointer. Deleting the ride discards
/// the booking with it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub ride_id: String,
    pub passenger_name: String,
    pub passenger_email: String,
    pub passenger_phone: Masked<String>,
    pub pickup_location: String,
    pub status: BookingStatus,
    pub booked_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(
        ride_id: String,
        passenger_name: String,
        passenger_email: String,
        passenger_phone: String,
        pickup_location: String,
    ) -> Self {
        Self {
            id: next_id(),
            ride_id,
            passenger_name,
            passenger_email,
            passenger_phone: passenger_phone.into(),
            pickup_location,
            status: BookingStatus::Confirmed,
            booked_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_booking_is_confirmed() {
        let booking = Booking::new(
            "1700000000000".to_string(),
            "Priya".to_string(),
            "priya@college.edu".to_string(),
            "+1 (555) 000-0000".to_string(),
            "Hostel Block C".to_string(),
        );
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.ride_id, "1700000000000");
        assert!(!booking.id.is_empty());
    }

    #[test]
    fn test_booking_wire_layout() {
        let booking = Booking::new(
            "1700000000000".to_string(),
            "Priya".to_string(),
            "priya@college.edu".to_string(),
            "+1 (555) 000-0000".to_string(),
            "Hostel Block C".to_string(),
        );
        let value = serde_json::to_value(&booking).unwrap();
        assert_eq!(value["rideId"], "1700000000000");
        assert_eq!(value["passengerName"], "Priya");
        assert_eq!(value["passengerEmail"], "priya@college.edu");
        assert_eq!(value["passengerPhone"], "+1 (555) 000-0000");
        assert_eq!(value["pickupLocation"], "Hostel Block C");
        assert_eq!(value["status"], "confirmed");
        assert!(value["bookedAt"].is_string());
    }
}
