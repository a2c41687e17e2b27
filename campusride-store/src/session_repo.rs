use campusride_catalog::ValidationError;
use campusride_core::session::{Role, UserProfile};
use campusride_core::{CoreError, CoreResult};
use std::sync::Arc;
use tracing::info;

use crate::keys;
use crate::local_store::LocalStore;

/// Session/profile bundle over the client-local store.
///
/// Four scalar values under independent keys, set wholesale at
/// login/signup and cleared wholesale at logout. No expiry, no token,
/// no credential verification.
pub struct SessionStore {
    store: Arc<dyn LocalStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn LocalStore>) -> Self {
        Self { store }
    }

    /// Create a profile and open a session. Any non-empty identity is
    /// accepted; there is no registry to check against.
    pub fn signup(&self, role: Role, email: &str, name: &str) -> CoreResult<UserProfile> {
        if email.trim().is_empty() {
            return Err(ValidationError::MissingField("email").into());
        }
        if name.trim().is_empty() {
            return Err(ValidationError::MissingField("name").into());
        }
        self.store.set(keys::USER_ROLE, role.as_str())?;
        self.store.set(keys::USER_EMAIL, email)?;
        self.store.set(keys::USER_NAME, name)?;
        self.store.set(keys::IS_AUTHENTICATED, "true")?;
        info!("Account created for {} ({})", email, role);
        Ok(UserProfile {
            role,
            email: email.to_string(),
            name: name.to_string(),
        })
    }

    /// Open a session for an existing identity. The login form carries no
    /// name field, so a previously stored name is left untouched.
    pub fn login(&self, role: Role, email: &str) -> CoreResult<UserProfile> {
        if email.trim().is_empty() {
            return Err(ValidationError::MissingField("email").into());
        }
        self.store.set(keys::USER_ROLE, role.as_str())?;
        self.store.set(keys::USER_EMAIL, email)?;
        self.store.set(keys::IS_AUTHENTICATED, "true")?;
        info!("Logged in as {} ({})", email, role);
        let name = self.store.get(keys::USER_NAME)?.unwrap_or_default();
        Ok(UserProfile {
            role,
            email: email.to_string(),
            name,
        })
    }

    /// Clear the whole bundle.
    pub fn logout(&self) -> CoreResult<()> {
        for key in keys::SESSION_BUNDLE {
            self.store.remove(key)?;
        }
        info!("Logged out");
        Ok(())
    }

    /// The current profile, or `None` without an authenticated session.
    pub fn current(&self) -> CoreResult<Option<UserProfile>> {
        match self.store.get(keys::IS_AUTHENTICATED)? {
            Some(flag) if flag == "true" => {}
            _ => return Ok(None),
        }
        let raw_role =
            self.store
                .get(keys::USER_ROLE)?
                .ok_or_else(|| CoreError::Deserialization {
                    key: keys::USER_ROLE.to_string(),
                    reason: "authenticated session without a role".to_string(),
                })?;
        let role: Role = raw_role.parse().map_err(|reason| CoreError::Deserialization {
            key: keys::USER_ROLE.to_string(),
            reason,
        })?;
        let email = self.store.get(keys::USER_EMAIL)?.unwrap_or_default();
        let name = self.store.get(keys::USER_NAME)?.unwrap_or_default();
        Ok(Some(UserProfile { role, email, name }))
    }

    pub fn require(&self) -> CoreResult<UserProfile> {
        self.current()?.ok_or(CoreError::Unauthorized)
    }

    pub fn require_role(&self, required: Role) -> CoreResult<UserProfile> {
        let profile = self.require()?;
        if profile.role != required {
            return Err(CoreError::Forbidden { required });
        }
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::local_store::MemoryStore;

    fn sessions() -> SessionStore {
        SessionStore::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_no_session_until_login() {
        let sessions = sessions();
        assert!(sessions.current().unwrap().is_none());
        assert!(matches!(
            sessions.require(),
            Err(CoreError::Unauthorized)
        ));
    }

    #[test]
    fn test_signup_sets_the_whole_bundle() {
        let sessions = sessions();
        sessions
            .signup(Role::Driver, "dev@college.edu", "Dev")
            .unwrap();

        let profile = sessions.current().unwrap().unwrap();
        assert_eq!(profile.role, Role::Driver);
        assert_eq!(profile.email, "dev@college.edu");
        assert_eq!(profile.name, "Dev");
    }

    #[test]
    fn test_login_keeps_previously_stored_name() {
        let sessions = sessions();
        sessions
            .signup(Role::Driver, "dev@college.edu", "Dev")
            .unwrap();

        let profile = sessions.login(Role::Passenger, "dev@college.edu").unwrap();
        assert_eq!(profile.role, Role::Passenger);
        assert_eq!(profile.name, "Dev");

        // After a wholesale logout there is no name left to restore.
        sessions.logout().unwrap();
        let profile = sessions.login(Role::Passenger, "dev@college.edu").unwrap();
        assert_eq!(profile.name, "");
    }

    #[test]
    fn test_logout_clears_wholesale() {
        let sessions = sessions();
        sessions
            .signup(Role::Passenger, "p@college.edu", "Priya")
            .unwrap();
        sessions.logout().unwrap();
        assert!(sessions.current().unwrap().is_none());
    }

    #[test]
    fn test_require_role_rejects_wrong_hat() {
        let sessions = sessions();
        sessions
            .signup(Role::Passenger, "p@college.edu", "Priya")
            .unwrap();

        assert!(sessions.require_role(Role::Passenger).is_ok());
        assert!(matches!(
            sessions.require_role(Role::Driver),
            Err(CoreError::Forbidden {
                required: Role::Driver
            })
        ));
    }

    #[test]
    fn test_corrupt_role_surfaces_deserialization_error() {
        let store = Arc::new(MemoryStore::new());
        store.set(keys::IS_AUTHENTICATED, "true").unwrap();
        store.set(keys::USER_ROLE, "admin").unwrap();
        let sessions = SessionStore::new(store);

        assert!(matches!(
            sessions.current(),
            Err(CoreError::Deserialization { .. })
        ));
    }

    #[test]
    fn test_empty_email_rejected() {
        let sessions = sessions();
        assert!(sessions.login(Role::Driver, "  ").is_err());
        assert!(sessions.current().unwrap().is_none());
    }
}
