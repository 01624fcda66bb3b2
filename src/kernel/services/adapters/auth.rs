use crate::kernel::services::ports::{AuthGate, Credentials};

/// Compares against one configured username/password pair.
pub struct FixedCredentialGate {
    credentials: Credentials,
    logged_in: bool,
}

impl FixedCredentialGate {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            logged_in: false,
        }
    }
}

impl Default for FixedCredentialGate {
    fn default() -> Self {
        Self::new(Credentials::default())
    }
}

impl AuthGate for FixedCredentialGate {
    fn login(&mut self, username: &str, password: &str) -> bool {
        if username == self.credentials.username && password == self.credentials.password {
            self.logged_in = true;
            tracing::info!(user = username, "login accepted");
            true
        } else {
            tracing::info!(user = username, "login rejected");
            false
        }
    }

    fn logout(&mut self) {
        self.logged_in = false;
    }

    fn is_logged_in(&self) -> bool {
        self.logged_in
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/auth.rs"]
mod tests;
