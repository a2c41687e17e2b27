use campusride_catalog::{Ride, VehicleType};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Passenger-side search filters. Both filters combine with AND; each
/// defaults to match-all.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RideSearchRequest {
    pub query: Option<String>,
    #[serde(default)]
    pub vehicle: VehicleFilter,
}

/// Vehicle filter with an "all" sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleFilter {
    #[default]
    All,
    Car,
    Bike,
}

impl VehicleFilter {
    fn matches(&self, vehicle: VehicleType) -> bool {
        match self {
            VehicleFilter::All => true,
            VehicleFilter::Car => vehicle == VehicleType::Car,
            VehicleFilter::Bike => vehicle == VehicleType::Bike,
        }
    }
}

impl FromStr for VehicleFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(VehicleFilter::All),
            "car" => Ok(VehicleFilter::Car),
            "bike" => Ok(VehicleFilter::Bike),
            other => Err(format!("unknown vehicle filter '{other}'")),
        }
    }
}

impl RideSearchRequest {
    /// Case-insensitive substring match against pickup OR destination;
    /// an empty or absent query matches every ride.
    pub fn matches(&self, ride: &Ride) -> bool {
        let query_hit = match self.query.as_deref() {
            None | Some("") => true,
            Some(query) => {
                let needle = query.to_lowercase();
                ride.pickup_location.to_lowercase().contains(&needle)
                    || ride.destination.to_lowercase().contains(&needle)
            }
        };
        query_hit && self.vehicle.matches(ride.vehicle_type)
    }
}
