use campusride_catalog::DriverContact;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two hats a user can wear. Stored as a plain lowercase string.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Driver,
    Passenger,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Driver => "driver",
            Role::Passenger => "passenger",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "driver" => Ok(Role::Driver),
            "passenger" => Ok(Role::Passenger),
            other => Err(format!("unknown role '{other}'")),
        }
    }
}

/// The client-local profile bundle identifying the current user.
///
/// There is no token and no credential store behind this; the bundle is
/// set wholesale at login/signup and cleared wholesale at logout.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub role: Role,
    pub email: String,
    pub name: String,
}

impl UserProfile {
    /// Driver identity as denormalized onto posted rides. The original
    /// system reuses the email as the driver id.
    pub fn as_driver_contact(&self) -> DriverContact {
        DriverContact {
            id: self.email.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_string_round_trip() {
        assert_eq!(Role::Driver.as_str(), "driver");
        assert_eq!("passenger".parse::<Role>().unwrap(), Role::Passenger);
        assert!("admin".parse::<Role>().is_err());
    }

    #[test]
    fn test_driver_contact_reuses_email_as_id() {
        let profile = UserProfile {
            role: Role::Driver,
            email: "dev@college.edu".to_string(),
            name: "Dev".to_string(),
        };
        let contact = profile.as_driver_contact();
        assert_eq!(contact.id, "dev@college.edu");
        assert_eq!(contact.email, "dev@college.edu");
        assert_eq!(contact.name, "Dev");
    }
}
