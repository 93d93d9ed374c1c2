//! # Feed Controller
//!
//! The main view: a paginated page of posts rendered as cards, with
//! owner-only delete/edit controls, a followed-only toggle, "load more"
//! pagination, client-side search, and post creation.

use anyhow::Result;

use super::{delete_flow, edit_flow};
use crate::api::{ApiClient, Post, PostData, DEFAULT_FEED_LIMIT};
use crate::interaction::Interaction;
use crate::session::{Session, SessionStore};
use crate::views::{Card, ViewState};

pub struct FeedController<'a> {
    api: &'a ApiClient,
    session: &'a Session,
    interaction: &'a dyn Interaction,
    view: ViewState,
    limit: u64,
    offset: u64,
    following: bool,
}

impl<'a> FeedController<'a> {
    pub fn new(api: &'a ApiClient, session: &'a Session, interaction: &'a dyn Interaction) -> Self {
        Self {
            api,
            session,
            interaction,
            view: ViewState::new(),
            limit: DEFAULT_FEED_LIMIT,
            offset: 0,
            following: false,
        }
    }

    /// Override the page size (CLI `--limit`).
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = limit.max(1);
        self
    }

    /// Jump to a page (CLI `--offset`).
    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    fn cards_for(&self, posts: &[Post]) -> Vec<Card> {
        posts
            .iter()
            .map(|p| Card::from_post(p, self.session))
            .collect()
    }

    async fn fetch(&self) -> Result<Vec<Post>, crate::api::ApiError> {
        if self.following {
            self.api.following_posts().await
        } else {
            self.api.posts(self.limit, self.offset).await
        }
    }

    /// Fetch the current page and replace all rendered cards.
    pub async fn load(&mut self) -> Result<()> {
        match self.fetch().await {
            Ok(posts) => {
                let cards = self.cards_for(&posts);
                self.view.replace_all(cards);
            }
            Err(e) => {
                tracing::error!("fetching posts failed: {e}");
                self.interaction.notify(&format!("Unable to load posts: {e}"));
                self.view.replace_all(Vec::new());
            }
        }
        Ok(())
    }

    /// Advance the offset by one page and append the results, keeping the
    /// cards already on screen.
    pub async fn load_more(&mut self) -> Result<()> {
        self.offset += self.limit;
        match self.api.posts(self.limit, self.offset).await {
            Ok(posts) => {
                let cards = self.cards_for(&posts);
                self.view.append(cards);
            }
            Err(e) => {
                tracing::error!("fetching next page failed: {e}");
                self.interaction.notify(&format!("Unable to load posts: {e}"));
            }
        }
        Ok(())
    }

    /// Switch to followed-only posts: reset the offset, clear, re-render.
    pub async fn show_following(&mut self) -> Result<()> {
        self.following = true;
        self.offset = 0;
        self.load().await
    }

    /// Switch back to the full feed from the beginning.
    pub async fn show_all(&mut self) -> Result<()> {
        self.following = false;
        self.offset = 0;
        self.load().await
    }

    /// Create a post, then reload the feed from offset 0.
    pub async fn create(&mut self, title: &str, body: &str) -> Result<()> {
        let data = PostData {
            title: title.to_string(),
            body: body.to_string(),
        };
        match self.api.create_post(&data).await {
            Ok(post) => {
                tracing::debug!(id = post.id, "post created");
                self.interaction.notify("Post has been created.");
                self.offset = 0;
                self.load().await
            }
            Err(e) => {
                tracing::error!("creating post failed: {e}");
                self.interaction
                    .notify(&format!("An error occurred while creating the post: {e}"));
                Ok(())
            }
        }
    }

    /// Delete a post after confirmation; removes exactly that card.
    pub async fn delete(&mut self, post_id: u64) -> Result<()> {
        delete_flow(self.api, self.interaction, &mut self.view, post_id).await?;
        Ok(())
    }

    /// Edit a post via prompts; a successful update reloads the current view
    /// from offset 0.
    pub async fn edit(&mut self, post_id: u64) -> Result<()> {
        if edit_flow(self.api, self.interaction, &self.view, post_id).await? {
            self.offset = 0;
            self.load().await?;
        }
        Ok(())
    }

    /// Client-side search over the rendered cards; issues no request.
    pub fn search(&mut self, query: &str) {
        self.view.apply_filter(query);
    }

    /// Record a card's author as the selected profile, the marker the
    /// generic profile page reads. Returns the stored name.
    pub fn select_author(&self, post_id: u64, store: &SessionStore) -> Result<Option<String>> {
        let Some(card) = self.view.card(post_id) else {
            self.interaction.notify("No such post in the current view.");
            return Ok(None);
        };
        if card.author_name == crate::views::cards::UNKNOWN_AUTHOR {
            self.interaction.notify("Author name not available.");
            return Ok(None);
        }
        store.set_selected_profile(&card.author_name)?;
        Ok(Some(card.author_name.clone()))
    }
}
