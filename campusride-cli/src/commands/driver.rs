use campusride_catalog::{NewRide, Ride, VehicleType};
use campusride_core::session::Role;
use clap::Subcommand;

use crate::state::AppContext;

#[derive(Subcommand, Debug)]
pub enum DriveCommand {
    /// Post a new ride
    Post {
        /// car or bike
        #[arg(long)]
        vehicle: String,
        /// Pickup location, e.g. "Downtown Mall"
        #[arg(long)]
        pickup: String,
        /// Destination, e.g. "Campus Gate 1"
        #[arg(long)]
        destination: String,
        /// Calendar date, e.g. 2026-09-01
        #[arg(long)]
        date: String,
        /// Departure time, e.g. 08:30
        #[arg(long)]
        time: String,
        /// Seats on offer
        #[arg(long)]
        seats: i32,
        /// Cost per person
        #[arg(long)]
        cost: f64,
        /// Contact number
        #[arg(long)]
        phone: String,
    },

    /// List your posted rides with their passenger manifests
    Rides,

    /// Delete one of your rides (its bookings go with it)
    Delete {
        /// Ride id as shown by `drive rides`
        ride_id: String,
    },
}

pub fn run(ctx: &AppContext, command: DriveCommand) -> anyhow::Result<()> {
    let profile = ctx.sessions.require_role(Role::Driver)?;

    match command {
        DriveCommand::Post {
            vehicle,
            pickup,
            destination,
            date,
            time,
            seats,
            cost,
            phone,
        } => {
            let vehicle_type = match vehicle.as_str() {
                "car" => VehicleType::Car,
                "bike" => VehicleType::Bike,
                other => anyhow::bail!("unknown vehicle '{other}', expected car or bike"),
            };
            let ride = ctx.rides.create(
                profile.as_driver_contact(),
                NewRide {
                    vehicle_type,
                    pickup_location: pickup,
                    destination,
                    date,
                    time,
                    seats,
                    cost_per_person: cost,
                    driver_phone: phone,
                },
            )?;
            println!("Ride posted successfully!");
            print_ride(&ride);
        }
        DriveCommand::Rides => {
            let rides = ctx.rides.list_by_driver(&profile.email)?;
            if rides.is_empty() {
                println!("No rides posted yet. Start by posting your first ride.");
                return Ok(());
            }
            for ride in &rides {
                print_ride(ride);
                print_manifest(ride);
            }
        }
        DriveCommand::Delete { ride_id } => {
            ctx.rides.delete(&ride_id)?;
            println!("Ride deleted successfully");
        }
    }
    Ok(())
}

fn print_ride(ride: &Ride) {
    println!(
        "[{}] {} -> {} on {} at {} ({}) | {}/{} seats free, ₹{:.2} per person",
        ride.id,
        ride.pickup_location,
        ride.destination,
        ride.date,
        ride.time,
        ride.vehicle_type,
        ride.available_seats,
        ride.total_seats,
        ride.cost_per_person,
    );
}

fn print_manifest(ride: &Ride) {
    if ride.bookings.is_empty() {
        println!("    no passengers yet");
        return;
    }
    for booking in &ride.bookings {
        // The driver sees the passenger's real contact number.
        println!(
            "    {} <{}> {}, pickup at {}",
            booking.passenger_name,
            booking.passenger_email,
            booking.passenger_phone.0,
            booking.pickup_location,
        );
    }
}
