use campusride_booking::PassengerDetails;
use campusride_catalog::Ride;
use campusride_core::search::{RideSearchRequest, VehicleFilter};
use clap::Subcommand;

use crate::state::AppContext;

#[derive(Subcommand, Debug)]
pub enum RideCommand {
    /// Search rides by pickup or destination
    Search {
        /// Substring to match against pickup or destination
        #[arg(long)]
        query: Option<String>,
        /// all, car or bike
        #[arg(long, default_value = "all")]
        vehicle: String,
    },

    /// Book a seat on a ride
    Book {
        /// Ride id as shown by `ride search`
        ride_id: String,
        /// Your full name
        #[arg(long)]
        name: String,
        /// Your phone number
        #[arg(long)]
        phone: String,
        /// Exact pickup point
        #[arg(long)]
        pickup: String,
    },

    /// List the rides you have booked
    Booked,
}

pub fn run(ctx: &AppContext, command: RideCommand) -> anyhow::Result<()> {
    match command {
        RideCommand::Search { query, vehicle } => {
            let vehicle: VehicleFilter = vehicle.parse().map_err(anyhow::Error::msg)?;
            let request = RideSearchRequest { query, vehicle };
            let rides = ctx.rides.search(&request)?;
            if rides.is_empty() {
                println!("No rides available. Check back later or try different filters.");
                return Ok(());
            }
            // Browsing needs no session; driver contact stays hidden
            // until the passenger holds a booking on the ride.
            let viewer = ctx.sessions.current()?;
            for ride in &rides {
                print_ride(ride, viewer.as_ref().map(|p| p.email.as_str()));
            }
        }
        RideCommand::Book {
            ride_id,
            name,
            phone,
            pickup,
        } => {
            let session = ctx.sessions.current()?;
            let booking = ctx.bookings.book_seat(
                session.as_ref(),
                &ride_id,
                PassengerDetails {
                    name,
                    phone,
                    pickup_location: pickup,
                },
            )?;
            println!(
                "Ride booked successfully! Booking {} confirmed at {}",
                booking.id,
                booking.booked_at.to_rfc3339(),
            );
        }
        RideCommand::Booked => {
            let profile = ctx.sessions.require()?;
            let rides = ctx.bookings.booked_rides(&profile.email)?;
            if rides.is_empty() {
                println!("You have not booked any rides yet.");
                return Ok(());
            }
            for ride in &rides {
                print_ride(ride, Some(profile.email.as_str()));
            }
        }
    }
    Ok(())
}

fn print_ride(ride: &Ride, viewer_email: Option<&str>) {
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
    let booked = viewer_email.is_some_and(|email| ride.booked_by(email));
    if booked {
        println!(
            "    booked, driver {} <{}> {}",
            ride.driver_name, ride.driver_email, ride.driver_phone.0,
        );
    } else if !ride.has_available_seat() {
        println!("    fully booked");
    }
}
