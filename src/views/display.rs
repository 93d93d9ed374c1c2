//! # Display Formatting
//!
//! Turns cards, profiles, and single posts into terminal lines. Styling is a
//! caller decision (`styled`), normally `atty::is(Stream::Stdout)`.

use super::ansi_escape_codes::{paint, BOLD, DIM, FG_BRIGHT_BLACK, FG_CYAN};
use super::cards::{Card, Control};
use crate::api::types::{Post, Profile};

/// Render one card as terminal lines.
pub fn card_lines(card: &Card, styled: bool) -> Vec<String> {
    let mut lines = vec![
        paint(&card.title, BOLD, styled),
        card.body.clone(),
        format!(
            "Author: {}  {}",
            paint(&card.author_name, FG_CYAN, styled),
            paint(&card.avatar, FG_BRIGHT_BLACK, styled)
        ),
    ];

    if !card.controls.is_empty() {
        let mut names: Vec<&str> = Vec::new();
        if card.has_control(Control::Delete) {
            names.push("delete");
        }
        if card.has_control(Control::Edit) {
            names.push("edit");
        }
        lines.push(paint(
            &format!("[post {}: {}]", card.post_id, names.join(", ")),
            DIM,
            styled,
        ));
    }

    lines
}

/// Render every visible card of a view, separated by blank lines.
pub fn feed_lines<'a>(cards: impl Iterator<Item = &'a Card>, styled: bool) -> Vec<String> {
    let mut lines = Vec::new();
    for card in cards {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.extend(card_lines(card, styled));
    }
    lines
}

/// Render the single-post page: title, id, author name/email/avatar, body.
pub fn post_detail_lines(post: &Post, styled: bool) -> Vec<String> {
    let author_name = post
        .author
        .as_ref()
        .map(|a| a.name.as_str())
        .unwrap_or(super::cards::UNKNOWN_AUTHOR);
    let author_email = post
        .author
        .as_ref()
        .and_then(|a| a.email.as_deref())
        .unwrap_or(super::cards::UNKNOWN_AUTHOR);
    let avatar = post
        .author
        .as_ref()
        .and_then(|a| a.avatar.as_deref())
        .unwrap_or(super::cards::DEFAULT_AVATAR);

    let mut lines = vec![
        paint(&post.title, BOLD, styled),
        format!("Post ID: {}", post.id),
        paint(avatar, FG_BRIGHT_BLACK, styled),
        post.body.clone(),
        format!("Author: {}", paint(author_name, FG_CYAN, styled)),
        format!("Email: {author_email}"),
    ];

    if !post.comments.is_empty() {
        lines.push(format!("Comments: {}", post.comments.len()));
        for comment in &post.comments {
            let owner = comment.owner.as_deref().unwrap_or(super::cards::UNKNOWN_AUTHOR);
            lines.push(paint(&format!("  {owner}: {}", comment.body), DIM, styled));
        }
    }

    lines
}

/// Render the "my profile" greeting.
pub fn my_profile_header(profile: &Profile, styled: bool) -> Vec<String> {
    let mut lines = vec![paint(&format!("Welcome, {}!", profile.name), BOLD, styled)];
    if let Some(avatar) = &profile.avatar {
        lines.push(paint(avatar, FG_BRIGHT_BLACK, styled));
    }
    lines
}

/// Render the header of another user's profile page.
pub fn profile_header(name: &str, styled: bool) -> Vec<String> {
    vec![paint(&format!("{name}'s Profile"), BOLD, styled)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{Author, Comment};
    use crate::session::Session;
    use crate::views::cards::ViewState;

    fn sample_post() -> Post {
        Post {
            id: 42,
            title: "Hi".to_string(),
            body: "Hello".to_string(),
            author: Some(Author {
                name: "alice".to_string(),
                email: Some("alice@example.com".to_string()),
                avatar: None,
            }),
            comments: vec![Comment {
                id: 1,
                body: "nice".to_string(),
                owner: Some("bob".to_string()),
            }],
        }
    }

    #[test]
    fn card_lines_should_show_controls_for_owned_posts() {
        let session = Session::new("abc", "alice");
        let card = Card::from_post(&sample_post(), &session);
        let lines = card_lines(&card, false);
        assert_eq!(lines[0], "Hi");
        assert_eq!(lines[1], "Hello");
        assert!(lines[2].contains("alice"));
        assert!(lines[3].contains("delete, edit"));
    }

    #[test]
    fn card_lines_should_omit_control_line_for_foreign_posts() {
        let session = Session::new("abc", "someone-else");
        let card = Card::from_post(&sample_post(), &session);
        let lines = card_lines(&card, false);
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn post_detail_should_include_id_author_email_and_comments() {
        let lines = post_detail_lines(&sample_post(), false);
        assert!(lines.contains(&"Post ID: 42".to_string()));
        assert!(lines.contains(&"Author: alice".to_string()));
        assert!(lines.contains(&"Email: alice@example.com".to_string()));
        assert!(lines.contains(&"Comments: 1".to_string()));
    }

    #[test]
    fn feed_lines_should_skip_hidden_cards() {
        let session = Session::new("abc", "alice");
        let mut state = ViewState::new();
        state.replace_all(vec![
            Card::from_post(&sample_post(), &session),
            Card::from_post(
                &Post {
                    id: 43,
                    title: "Other".to_string(),
                    body: "text".to_string(),
                    author: None,
                    comments: Vec::new(),
                },
                &session,
            ),
        ]);
        state.apply_filter("Hello");

        let lines = feed_lines(state.visible_cards(), false);
        assert!(lines.iter().any(|l| l == "Hi"));
        assert!(!lines.iter().any(|l| l == "Other"));
    }
}
