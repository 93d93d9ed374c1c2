//! # Cards and View State
//!
//! Pure description of what a page shows: each post becomes a [`Card`], and a
//! page's cards live in an ordered [`ViewState`]. Nothing here performs I/O,
//! so every rendering rule is unit-testable.

use crate::api::types::Post;
use crate::session::Session;

/// Fallback shown when a post carries no author block.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Fallback shown when an author has no avatar URL.
pub const DEFAULT_AVATAR: &str = "(no avatar)";

/// A control attached to a card the session user owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Delete,
    Edit,
}

/// One rendered post.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub post_id: u64,
    pub title: String,
    pub body: String,
    pub author_name: String,
    pub avatar: String,
    pub controls: Vec<Control>,
    /// Cleared by the client-side search filter; hidden cards stay in place.
    pub visible: bool,
}

impl Card {
    /// Build a card from a post. Delete/edit controls attach exactly when
    /// the session owns the post.
    pub fn from_post(post: &Post, session: &Session) -> Self {
        let author_name = post
            .author
            .as_ref()
            .map(|a| a.name.clone())
            .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());
        let avatar = post
            .author
            .as_ref()
            .and_then(|a| a.avatar.clone())
            .unwrap_or_else(|| DEFAULT_AVATAR.to_string());

        let controls = if session.owns(post.author.as_ref()) {
            vec![Control::Delete, Control::Edit]
        } else {
            Vec::new()
        };

        Self {
            post_id: post.id,
            title: post.title.clone(),
            body: post.body.clone(),
            author_name,
            avatar,
            controls,
            visible: true,
        }
    }

    /// Build a read-only card (profile pages for other users).
    pub fn from_post_read_only(post: &Post) -> Self {
        let mut card = Self {
            post_id: post.id,
            title: post.title.clone(),
            body: post.body.clone(),
            author_name: UNKNOWN_AUTHOR.to_string(),
            avatar: DEFAULT_AVATAR.to_string(),
            controls: Vec::new(),
            visible: true,
        };
        if let Some(author) = &post.author {
            card.author_name = author.name.clone();
            if let Some(avatar) = &author.avatar {
                card.avatar = avatar.clone();
            }
        }
        card
    }

    pub fn has_control(&self, control: Control) -> bool {
        self.controls.contains(&control)
    }

    /// Case-insensitive substring match over the card's visible text, the
    /// same rule the original search box applied to a card's DOM text.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.body.to_lowercase().contains(&query)
            || self.author_name.to_lowercase().contains(&query)
    }
}

/// Ordered list of cards for one page.
#[derive(Debug, Default)]
pub struct ViewState {
    cards: Vec<Card>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear existing cards and render a fresh set.
    pub fn replace_all(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }

    /// Append cards without touching the existing ones ("load more").
    pub fn append(&mut self, cards: Vec<Card>) {
        self.cards.extend(cards);
    }

    /// Remove exactly the card for `post_id`. Returns whether it was present.
    pub fn remove(&mut self, post_id: u64) -> bool {
        let before = self.cards.len();
        self.cards.retain(|c| c.post_id != post_id);
        self.cards.len() != before
    }

    /// Hide cards that don't match the query; show the ones that do.
    /// An empty query shows everything.
    pub fn apply_filter(&mut self, query: &str) {
        for card in &mut self.cards {
            card.visible = query.is_empty() || card.matches(query);
        }
    }

    pub fn card(&self, post_id: u64) -> Option<&Card> {
        self.cards.iter().find(|c| c.post_id == post_id)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn visible_cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|c| c.visible)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
