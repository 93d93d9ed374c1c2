//! # Profile Controllers
//!
//! Two variants of the profile page: another user's (read-only, named by the
//! selected-profile marker) and the session user's own (with compose, edit,
//! and delete on their posts).

use anyhow::Result;

use super::{delete_flow, edit_flow};
use crate::api::{ApiClient, PostData, Profile};
use crate::interaction::Interaction;
use crate::session::{Session, SessionStore};
use crate::views::{Card, ViewState};

/// Read-only view of another user's profile and posts.
pub struct ProfileController<'a> {
    api: &'a ApiClient,
    interaction: &'a dyn Interaction,
    view: ViewState,
    profile: Option<Profile>,
    name: String,
}

impl<'a> ProfileController<'a> {
    pub fn new(api: &'a ApiClient, interaction: &'a dyn Interaction, name: impl Into<String>) -> Self {
        Self {
            api,
            interaction,
            view: ViewState::new(),
            profile: None,
            name: name.into(),
        }
    }

    /// Build a controller from the selected-profile marker the feed stored.
    /// Returns `None` (after notifying) when no marker exists.
    pub fn for_selected(
        api: &'a ApiClient,
        interaction: &'a dyn Interaction,
        store: &SessionStore,
    ) -> Result<Option<Self>> {
        match store.selected_profile()? {
            Some(name) => Ok(Some(Self::new(api, interaction, name))),
            None => {
                interaction.notify("No profile selected.");
                Ok(None)
            }
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Fetch profile metadata and the user's posts; render read-only cards.
    pub async fn load(&mut self) -> Result<()> {
        match self.api.profile(&self.name).await {
            Ok(profile) => self.profile = Some(profile),
            Err(e) => {
                tracing::error!("fetching profile {} failed: {e}", self.name);
                self.interaction
                    .notify(&format!("Unable to load profile: {e}"));
            }
        }

        match self.api.profile_posts(&self.name).await {
            Ok(posts) => {
                let cards = posts.iter().map(Card::from_post_read_only).collect();
                self.view.replace_all(cards);
            }
            Err(e) => {
                tracing::error!("fetching posts of {} failed: {e}", self.name);
                self.interaction
                    .notify(&format!("Unable to load posts: {e}"));
                self.view.replace_all(Vec::new());
            }
        }
        Ok(())
    }
}

/// The session user's own profile page with compose/edit/delete.
pub struct MyProfileController<'a> {
    api: &'a ApiClient,
    session: &'a Session,
    interaction: &'a dyn Interaction,
    view: ViewState,
    profile: Option<Profile>,
}

impl<'a> MyProfileController<'a> {
    pub fn new(api: &'a ApiClient, session: &'a Session, interaction: &'a dyn Interaction) -> Self {
        Self {
            api,
            session,
            interaction,
            view: ViewState::new(),
            profile: None,
        }
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Fetch the session user's profile metadata and posts.
    pub async fn load(&mut self) -> Result<()> {
        match self.api.profile(&self.session.user_name).await {
            Ok(profile) => self.profile = Some(profile),
            Err(e) => {
                tracing::error!("fetching own profile failed: {e}");
                self.interaction
                    .notify(&format!("Unable to load profile: {e}"));
            }
        }
        self.load_posts().await
    }

    /// Fetch only the posts, re-rendering the card list.
    pub async fn load_posts(&mut self) -> Result<()> {
        match self.api.profile_posts(&self.session.user_name).await {
            Ok(posts) => {
                let cards = posts
                    .iter()
                    .map(|p| Card::from_post(p, self.session))
                    .collect();
                self.view.replace_all(cards);
            }
            Err(e) => {
                tracing::error!("fetching own posts failed: {e}");
                self.interaction
                    .notify(&format!("Unable to load posts: {e}"));
                self.view.replace_all(Vec::new());
            }
        }
        Ok(())
    }

    /// Create a post from the compose fields, then reload the post list.
    pub async fn create(&mut self, title: &str, body: &str) -> Result<()> {
        let data = PostData {
            title: title.to_string(),
            body: body.to_string(),
        };
        match self.api.create_post(&data).await {
            Ok(_) => {
                self.interaction.notify("Post has been created.");
                self.load_posts().await
            }
            Err(e) => {
                tracing::error!("creating post failed: {e}");
                self.interaction
                    .notify(&format!("An error occurred while creating the post: {e}"));
                Ok(())
            }
        }
    }

    /// Delete one of the user's own posts after confirmation.
    pub async fn delete(&mut self, post_id: u64) -> Result<()> {
        delete_flow(self.api, self.interaction, &mut self.view, post_id).await?;
        Ok(())
    }

    /// Edit one of the user's own posts; a successful update reloads the list.
    pub async fn edit(&mut self, post_id: u64) -> Result<()> {
        if edit_flow(self.api, self.interaction, &self.view, post_id).await? {
            self.load_posts().await?;
        }
        Ok(())
    }
}
