//! # Wire Types
//!
//! Serde models for the social-posting service. These are transient,
//! denormalized copies of entities owned by the remote service; nothing here
//! is cached beyond the current invocation.

use serde::{Deserialize, Serialize};

/// A post as returned by the feed, profile, and single-post endpoints.
///
/// `author` is only populated when the request carried `_author=true`;
/// `comments` only when it carried `_comments=true`.
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// The author block embedded in a post.
#[derive(Debug, Clone, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// A profile as returned by `GET /profiles/:name`.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub banner: Option<String>,
}

/// A comment embedded in a single-post response.
#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub body: String,
    #[serde(default)]
    pub owner: Option<String>,
}

/// Body for `POST /auth/register`. Optional fields are omitted when unset.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
}

/// Body for `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login payload. The service uses camelCase on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Successful registration payload.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisteredUser {
    pub name: String,
    pub email: String,
}

/// Body for creating or updating a post.
#[derive(Debug, Clone, Serialize)]
pub struct PostData {
    pub title: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_should_deserialize_with_author() {
        let json = r#"{
            "id": 1,
            "title": "Hi",
            "body": "Hello",
            "author": {"name": "alice", "email": "alice@example.com", "avatar": null}
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, 1);
        assert_eq!(post.title, "Hi");
        assert_eq!(post.body, "Hello");
        let author = post.author.unwrap();
        assert_eq!(author.name, "alice");
        assert_eq!(author.email.as_deref(), Some("alice@example.com"));
        assert!(author.avatar.is_none());
        assert!(post.comments.is_empty());
    }

    #[test]
    fn post_should_deserialize_without_author_or_body() {
        // The feed endpoint omits the author unless _author=true was sent.
        let json = r#"{"id": 7, "title": "Untitled"}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert!(post.author.is_none());
        assert_eq!(post.body, "");
    }

    #[test]
    fn login_response_should_accept_camel_case_token() {
        let json = r#"{"accessToken": "abc", "name": "alice", "avatar": "http://x/a.png"}"#;
        let login: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(login.access_token, "abc");
        assert_eq!(login.name, "alice");
    }

    #[test]
    fn register_request_should_omit_unset_optionals() {
        let req = RegisterRequest {
            name: "bob".to_string(),
            email: "bob@example.com".to_string(),
            password: "hunter2".to_string(),
            avatar: None,
            banner: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("avatar"));
        assert!(!json.contains("banner"));
    }
}
