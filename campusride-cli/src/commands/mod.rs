pub mod auth;
pub mod driver;
pub mod passenger;

use clap::{Parser, Subcommand};

use crate::state::AppContext;

#[derive(Parser, Debug)]
#[command(name = "campusride")]
#[command(version, about = "Campus ride-sharing from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Login, signup and session management
    #[command(subcommand)]
    Auth(auth::AuthCommand),

    /// Driver dashboard: post and manage your rides
    #[command(subcommand)]
    Drive(driver::DriveCommand),

    /// Passenger dashboard: search and book rides
    #[command(subcommand)]
    Ride(passenger::RideCommand),
}

pub fn run(ctx: &AppContext, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Auth(cmd) => auth::run(ctx, cmd),
        Command::Drive(cmd) => driver::run(ctx, cmd),
        Command::Ride(cmd) => passenger::run(ctx, cmd),
    }
}
