use anyhow::Context;
use campusride_core::session::Role;
use clap::Subcommand;

use crate::state::AppContext;

#[derive(Subcommand, Debug)]
pub enum AuthCommand {
    /// Create an account and open a session
    Signup {
        /// driver or passenger
        #[arg(long)]
        role: String,
        /// College email
        #[arg(long)]
        email: String,
        /// Display name
        #[arg(long)]
        name: String,
    },

    /// Open a session for an existing identity
    Login {
        /// driver or passenger
        #[arg(long)]
        role: String,
        /// College email
        #[arg(long)]
        email: String,
    },

    /// Close the current session
    Logout,

    /// Show the current session
    Whoami,
}

pub fn run(ctx: &AppContext, command: AuthCommand) -> anyhow::Result<()> {
    match command {
        AuthCommand::Signup { role, email, name } => {
            let role: Role = role.parse().map_err(anyhow::Error::msg)?;
            let profile = ctx.sessions.signup(role, &email, &name)?;
            println!("Account created! Welcome, {}", profile.name);
        }
        AuthCommand::Login { role, email } => {
            let role: Role = role.parse().map_err(anyhow::Error::msg)?;
            let profile = ctx.sessions.login(role, &email)?;
            println!("Welcome back! Logged in as {}", profile.role);
        }
        AuthCommand::Logout => {
            ctx.sessions.logout()?;
            println!("Logged out successfully");
        }
        AuthCommand::Whoami => {
            let profile = ctx
                .sessions
                .current()
                .context("failed to read the session bundle")?;
            match profile {
                Some(profile) => {
                    let name = if profile.name.is_empty() {
                        profile.role.to_string()
                    } else {
                        profile.name.clone()
                    };
                    println!("{} <{}> ({})", name, profile.email, profile.role);
                }
                None => println!("Not logged in"),
            }
        }
    }
    Ok(())
}
