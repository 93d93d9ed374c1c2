//! # Controllers
//!
//! One controller per page: feed, profile (self and other), single post, and
//! auth. Each owns a [`ViewState`], calls the API client, and routes every
//! confirm/prompt/notify through the injected [`Interaction`] handle.
//!
//! API failures are handled uniformly: the controller notifies the message
//! and logs it; methods only return `Err` for local failures such as a broken
//! interaction channel.

pub mod auth;
pub mod feed;
pub mod post;
pub mod profile;

pub use auth::AuthController;
pub use feed::FeedController;
pub use post::PostController;
pub use profile::{MyProfileController, ProfileController};

use anyhow::Result;

use crate::api::{ApiClient, PostData};
use crate::interaction::Interaction;
use crate::views::{Control, ViewState};

/// Confirm-then-delete flow shared by the feed and the own-profile page.
///
/// Returns whether the post was actually deleted. A declined confirmation
/// issues no request and leaves the view untouched.
pub(crate) async fn delete_flow(
    api: &ApiClient,
    interaction: &dyn Interaction,
    view: &mut ViewState,
    post_id: u64,
) -> Result<bool> {
    let Some(card) = view.card(post_id) else {
        interaction.notify("No such post in the current view.");
        return Ok(false);
    };
    if !card.has_control(Control::Delete) {
        interaction.notify("You can only delete your own posts.");
        return Ok(false);
    }

    if !interaction.confirm("Are you sure you want to delete this post?")? {
        return Ok(false);
    }

    match api.delete_post(post_id).await {
        Ok(()) => {
            view.remove(post_id);
            interaction.notify("Post has been deleted.");
            Ok(true)
        }
        Err(e) => {
            tracing::error!("deleting post {post_id} failed: {e}");
            interaction.notify("Unable to delete the post.");
            Ok(false)
        }
    }
}

/// Prompt-then-update flow shared by the feed and the own-profile page.
///
/// Prompts for a new title and body with the current values as defaults.
/// An empty answer for either field issues no request. Returns whether the
/// post was updated, so the caller knows to reload its view.
pub(crate) async fn edit_flow(
    api: &ApiClient,
    interaction: &dyn Interaction,
    view: &ViewState,
    post_id: u64,
) -> Result<bool> {
    let Some(card) = view.card(post_id) else {
        interaction.notify("No such post in the current view.");
        return Ok(false);
    };
    if !card.has_control(Control::Edit) {
        interaction.notify("You can only edit your own posts.");
        return Ok(false);
    }

    let title = interaction.prompt("Edit post title", &card.title)?;
    let body = interaction.prompt("Edit post content", &card.body)?;

    let (title, body) = match (title, body) {
        (Some(t), Some(b)) if !t.is_empty() && !b.is_empty() => (t, b),
        _ => {
            interaction.notify("Title and body cannot be empty.");
            return Ok(false);
        }
    };

    match api.update_post(post_id, &PostData { title, body }).await {
        Ok(_) => {
            interaction.notify("Post has been updated.");
            Ok(true)
        }
        Err(e) => {
            tracing::error!("updating post {post_id} failed: {e}");
            interaction.notify("Unable to update the post.");
            Ok(false)
        }
    }
}
