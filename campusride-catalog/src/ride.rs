use campusride_shared::{next_id, Masked};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::booking::Booking;

/// Vehicle types drivers can offer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Car,
    Bike,
}

impl VehicleType {
    /// Seat ceiling per vehicle: a car carries up to four passengers,
    /// a bike one pillion.
    pub fn max_seats(&self) -> i32 {
        match self {
            VehicleType::Car => 4,
            VehicleType::Bike => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Car => "car",
            VehicleType::Bike => "bike",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ride status on the wire. Set to `Active` at creation; nothing in the
/// system transitions it afterwards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RideStatus {
    Active,
    Completed,
    Cancelled,
}

/// Driver identity denormalized onto each ride at creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverContact {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Driver-submitted input for posting a ride.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRide {
    pub vehicle_type: VehicleType,
    pub pickup_location: String,
    pub destination: String,
    pub date: String,
    pub time: String,
    pub seats: i32,
    pub cost_per_person: f64,
    pub driver_phone: String,
}

impl NewRide {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.seats < 1 {
            return Err(ValidationError::NoSeats);
        }
        let max = self.vehicle_type.max_seats();
        if self.seats > max {
            return Err(ValidationError::TooManySeats {
                vehicle: self.vehicle_type,
                max,
                requested: self.seats,
            });
        }
        if !self.cost_per_person.is_finite() || self.cost_per_person < 0.0 {
            return Err(ValidationError::InvalidCost(self.cost_per_person));
        }
        for (field, value) in [
            ("pickupLocation", &self.pickup_location),
            ("destination", &self.destination),
            ("date", &self.date),
            ("time", &self.time),
            ("driverPhone", &self.driver_phone),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField(field));
            }
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("seat count must be at least 1")]
    NoSeats,

    #[error("a {vehicle} carries at most {max} passengers, got {requested}")]
    TooManySeats {
        vehicle: VehicleType,
        max: i32,
        requested: i32,
    },

    #[error("cost per person must be a non-negative amount, got {0}")]
    InvalidCost(f64),

    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// A driver-posted trip offer with fixed capacity and price.
///
/// `date` and `time` are calendar-date and time-of-day strings; they are
/// deliberately not combined into one instant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ride {
    pub id: String,
    pub driver_id: String,
    pub driver_name: String,
    pub driver_email: String,
    pub driver_phone: Masked<String>,
    pub vehicle_type: VehicleType,
    pub pickup_location: String,
    pub destination: String,
    pub date: String,
    pub time: String,
    pub available_seats: i32,
    pub total_seats: i32,
    pub cost_per_person: f64,
    pub status: RideStatus,
    pub bookings: Vec<Booking>,
}

impl Ride {
    /// Build a ride from validated driver input. The seat count becomes
    /// both the total and the initial availability.
    pub fn new(driver: DriverContact, input: NewRide) -> Self {
        Self {
            id: next_id(),
            driver_id: driver.id,
            driver_name: driver.name,
            driver_email: driver.email,
            driver_phone: input.driver_phone.into(),
            vehicle_type: input.vehicle_type,
            pickup_location: input.pickup_location,
            destination: input.destination,
            date: input.date,
            time: input.time,
            available_seats: input.seats,
            total_seats: input.seats,
            cost_per_person: input.cost_per_person,
            status: RideStatus::Active,
            bookings: Vec::new(),
        }
    }

    pub fn seats_booked(&self) -> i32 {
        self.total_seats - self.available_seats
    }

    pub fn has_available_seat(&self) -> bool {
        self.available_seats > 0
    }

    /// Attach a booking and consume one seat.
    ///
    /// Invariant after success: `bookings.len() == total_seats - available_seats`.
    /// The seat floor is enforced here, at the data layer, not by the caller.
    pub fn accept_booking(&mut self, booking: Booking) -> Result<(), CapacityError> {
        if booking.ride_id != self.id {
            return Err(CapacityError::WrongRide {
                expected: self.id.clone(),
                actual: booking.ride_id,
            });
        }
        if self.available_seats <= 0 {
            return Err(CapacityError::Exhausted {
                total: self.total_seats,
            });
        }
        self.available_seats -= 1;
        self.bookings.push(booking);
        Ok(())
    }

    /// Whether the given passenger already holds a booking on this ride.
    pub fn booked_by(&self, passenger_email: &str) -> bool {
        self.bookings
            .iter()
            .any(|b| b.passenger_email == passenger_email)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CapacityError {
    #[error("ride is fully booked ({total} seats)")]
    Exhausted { total: i32 },

    #[error("booking references ride {actual}, expected {expected}")]
    WrongRide { expected: String, actual: String },
}
