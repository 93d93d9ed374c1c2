//! # Single Post Controller
//!
//! Fetches one post by id with author and comments expanded. The page
//! carries no edit/delete affordance.

use anyhow::Result;

use crate::api::{ApiClient, Post};
use crate::interaction::Interaction;

pub struct PostController<'a> {
    api: &'a ApiClient,
    interaction: &'a dyn Interaction,
    post: Option<Post>,
}

impl<'a> PostController<'a> {
    pub fn new(api: &'a ApiClient, interaction: &'a dyn Interaction) -> Self {
        Self {
            api,
            interaction,
            post: None,
        }
    }

    pub fn post(&self) -> Option<&Post> {
        self.post.as_ref()
    }

    /// Fetch the post. A failure notifies and leaves nothing rendered.
    pub async fn load(&mut self, post_id: u64) -> Result<()> {
        match self.api.post(post_id).await {
            Ok(post) => self.post = Some(post),
            Err(e) => {
                tracing::error!("fetching post {post_id} failed: {e}");
                self.interaction
                    .notify(&format!("Unable to load the post: {e}"));
                self.post = None;
            }
        }
        Ok(())
    }
}
