//! Storage key literals of the persisted state layout.

pub const RIDES: &str = "rides";
pub const IS_AUTHENTICATED: &str = "isAuthenticated";
pub const USER_ROLE: &str = "userRole";
pub const USER_EMAIL: &str = "userEmail";
pub const USER_NAME: &str = "userName";

/// The session/profile bundle, cleared wholesale at logout.
pub const SESSION_BUNDLE: [&str; 4] = [IS_AUTHENTICATED, USER_ROLE, USER_EMAIL, USER_NAME];
