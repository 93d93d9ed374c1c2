//! # Auth Controller
//!
//! Register, login, and logout. Login is the only operation that writes the
//! session store; logout is the only one that clears it.

use anyhow::Result;

use crate::api::{ApiClient, LoginRequest, RegisterRequest};
use crate::interaction::Interaction;
use crate::session::{Session, SessionStore};

pub struct AuthController<'a> {
    api: &'a ApiClient,
    store: &'a SessionStore,
    interaction: &'a dyn Interaction,
}

impl<'a> AuthController<'a> {
    pub fn new(api: &'a ApiClient, store: &'a SessionStore, interaction: &'a dyn Interaction) -> Self {
        Self {
            api,
            store,
            interaction,
        }
    }

    /// Register a new account. Avatar and banner are optional.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        avatar: Option<String>,
        banner: Option<String>,
    ) -> Result<()> {
        let request = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            avatar,
            banner,
        };
        match self.api.register(&request).await {
            Ok(user) => {
                tracing::info!(name = %user.name, "registered");
                self.interaction.notify("Registration successful!");
            }
            Err(e) => {
                tracing::error!("registration failed: {e}");
                self.interaction
                    .notify(&format!("Registration failed: {e}"));
            }
        }
        Ok(())
    }

    /// Log in; a success persists the token and display name.
    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        match self.api.login(&request).await {
            Ok(login) => {
                let session = Session::new(login.access_token, login.name);
                self.store.save(&session)?;
                tracing::info!(name = %session.user_name, "logged in");
                self.interaction
                    .notify(&format!("Logged in as {}.", session.user_name));
            }
            Err(e) => {
                tracing::error!("login failed: {e}");
                self.interaction.notify(&format!("Login failed: {e}"));
            }
        }
        Ok(())
    }

    /// Log out; the stored session is cleared only when the remote call
    /// succeeds, mirroring the original client.
    pub async fn logout(&self) -> Result<()> {
        match self.api.logout().await {
            Ok(()) => {
                self.store.clear()?;
                self.interaction.notify("Logged out.");
            }
            Err(e) => {
                tracing::error!("logout failed: {e}");
                self.interaction.notify(&format!("Logout failed: {e}"));
            }
        }
        Ok(())
    }
}
