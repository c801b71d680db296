use contracts::domain::a001_catalog::AdminCredentials;
use leptos::prelude::*;

/// Whether the admin editor is unlocked. Lives only in memory; closing the
/// admin modal locks it again.
#[derive(Clone, Copy)]
pub struct AdminSession {
    authenticated: RwSignal<bool>,
}

impl AdminSession {
    pub fn new() -> Self {
        Self {
            authenticated: RwSignal::new(false),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated.get()
    }

    /// Plaintext comparison against the credentials stored in the document.
    pub fn login(
        &self,
        admin: &AdminCredentials,
        username: &str,
        password: &str,
    ) -> Result<(), String> {
        if admin.matches(username.trim(), password) {
            log::info!("admin session opened");
            self.authenticated.set(true);
            Ok(())
        } else {
            log::warn!("rejected admin login for `{}`", username.trim());
            Err("Invalid username or password".to_string())
        }
    }

    pub fn logout(&self) {
        self.authenticated.set(false);
    }
}

impl Default for AdminSession {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_admin_session() -> AdminSession {
    let session = AdminSession::new();
    provide_context(session);
    session
}

pub fn use_admin_session() -> AdminSession {
    use_context::<AdminSession>().expect("AdminSession not found in component tree")
}
