use campusride_cli::commands::{self, Cli, Command};
use campusride_cli::state::AppContext;
use campusride_cli::commands::auth::AuthCommand;
use campusride_cli::commands::driver::DriveCommand;
use campusride_cli::commands::passenger::RideCommand;
use campusride_core::CoreError;
use campusride_store::{FileStore, LocalStore};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;

fn open(path: &Path) -> AppContext {
    let store: Arc<dyn LocalStore> = Arc::new(FileStore::new(path).expect("store opens"));
    AppContext::with_store(store)
}

fn post_ride(ctx: &AppContext) -> anyhow::Result<()> {
    commands::run(
        ctx,
        Command::Drive(DriveCommand::Post {
            vehicle: "car".to_string(),
            pickup: "Downtown Mall".to_string(),
            destination: "Campus Gate 1".to_string(),
            date: "2026-09-01".to_string(),
            time: "08:30".to_string(),
            seats: 3,
            cost: 5.0,
            phone: "+1 (555) 000-0000".to_string(),
        }),
    )
}

#[test]
fn test_driver_posts_passenger_books_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("campusride.json");
    let ctx = open(&path);

    // Driver signs up and posts a ride.
    commands::run(
        &ctx,
        Command::Auth(AuthCommand::Signup {
            role: "driver".to_string(),
            email: "dev@college.edu".to_string(),
            name: "Dev".to_string(),
        }),
    )
    .unwrap();
    post_ride(&ctx).unwrap();
    commands::run(&ctx, Command::Auth(AuthCommand::Logout)).unwrap();

    // Passenger signs up and books the ride found via search.
    commands::run(
        &ctx,
        Command::Auth(AuthCommand::Signup {
            role: "passenger".to_string(),
            email: "priya@college.edu".to_string(),
            name: "Priya".to_string(),
        }),
    )
    .unwrap();

    let rides = ctx.rides.list_all().unwrap();
    assert_eq!(rides.len(), 1);
    let ride_id = rides[0].id.clone();

    commands::run(
        &ctx,
        Command::Ride(RideCommand::Book {
            ride_id: ride_id.clone(),
            name: "Priya".to_string(),
            phone: "+1 (555) 111-1111".to_string(),
            pickup: "Hostel Block C".to_string(),
        }),
    )
    .unwrap();

    // The booking survives a full reopen from disk.
    let reopened = open(&path);
    let stored = reopened.rides.list_all().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].available_seats, 2);
    assert_eq!(stored[0].bookings.len(), 1);
    assert_eq!(stored[0].bookings[0].ride_id, ride_id);
    assert_eq!(stored[0].bookings[0].passenger_email, "priya@college.edu");

    let booked = reopened.bookings.booked_rides("priya@college.edu").unwrap();
    assert_eq!(booked.len(), 1);
}

#[test]
fn test_driver_dashboard_is_role_gated() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = open(&dir.path().join("campusride.json"));

    // Unauthenticated.
    let err = post_ride(&ctx).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CoreError>(),
        Some(CoreError::Unauthorized)
    ));

    // Wrong role.
    commands::run(
        &ctx,
        Command::Auth(AuthCommand::Signup {
            role: "passenger".to_string(),
            email: "priya@college.edu".to_string(),
            name: "Priya".to_string(),
        }),
    )
    .unwrap();
    let err = post_ride(&ctx).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CoreError>(),
        Some(CoreError::Forbidden { .. })
    ));
}

#[test]
fn test_booking_unauthenticated_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = open(&dir.path().join("campusride.json"));

    commands::run(
        &ctx,
        Command::Auth(AuthCommand::Signup {
            role: "driver".to_string(),
            email: "dev@college.edu".to_string(),
            name: "Dev".to_string(),
        }),
    )
    .unwrap();
    post_ride(&ctx).unwrap();
    let ride_id = ctx.rides.list_all().unwrap()[0].id.clone();
    commands::run(&ctx, Command::Auth(AuthCommand::Logout)).unwrap();

    let err = commands::run(
        &ctx,
        Command::Ride(RideCommand::Book {
            ride_id,
            name: "Priya".to_string(),
            phone: "+1 (555) 111-1111".to_string(),
            pickup: "Hostel Block C".to_string(),
        }),
    )
    .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CoreError>(),
        Some(CoreError::Unauthorized)
    ));
}

#[test]
fn test_search_command_parses() {
    let cli = Cli::try_parse_from([
        "campusride",
        "ride",
        "search",
        "--query",
        "Gate",
        "--vehicle",
        "car",
    ])
    .unwrap();
    match cli.command {
        Command::Ride(RideCommand::Search { query, vehicle }) => {
            assert_eq!(query.as_deref(), Some("Gate"));
            assert_eq!(vehicle, "car");
        }
        other => panic!("parsed into {other:?}"),
    }
}

#[test]
fn test_vehicle_filter_defaults_to_all() {
    let cli = Cli::try_parse_from(["campusride", "ride", "search"]).unwrap();
    match cli.command {
        Command::Ride(RideCommand::Search { query, vehicle }) => {
            assert_eq!(query, None);
            assert_eq!(vehicle, "all");
        }
        other => panic!("parsed into {other:?}"),
    }
}
