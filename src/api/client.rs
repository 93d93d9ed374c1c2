//! # API Client
//!
//! One method per remote operation, each a single HTTP round trip against a
//! fixed base endpoint. The client holds the bearer token for the current
//! session; it performs no retries, no caching, and no request coalescing.

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    LoginRequest, LoginResponse, Post, PostData, Profile, RegisterRequest, RegisteredUser,
};

/// Default page size for the feed, matching the original client.
pub const DEFAULT_FEED_LIMIT: u64 = 100;

/// Client for the social-posting service.
///
/// Stateless apart from the base URL and the optional bearer token. All
/// operations return the unified `Result<T, ApiError>`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client with no token. Only `register` and `login` will work.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Create a client carrying a bearer token for authenticated operations.
    pub fn with_token(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self, ApiError> {
        let mut client = Self::new(base_url)?;
        client.token = Some(token.into());
        Ok(client)
    }

    /// Install or replace the bearer token (after a fresh login).
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Drop the bearer token (after logout).
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.url(path))
    }

    /// Like `request`, but attaches the bearer token or fails up front.
    fn authed(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let token = self.token.as_deref().ok_or(ApiError::NotLoggedIn)?;
        Ok(self.request(method, path).bearer_auth(token))
    }

    /// Send a request and decode the success body as JSON.
    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::from_response(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send a request where only the status matters.
    async fn send_unit(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        let response = builder.send().await?;
        let status: StatusCode = response.status();

        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_response(status.as_u16(), &body))
    }

    /// Register a new account. Unauthenticated.
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisteredUser, ApiError> {
        tracing::debug!(name = %request.name, "registering user");
        self.send_json(self.request(Method::POST, "/auth/register").json(request))
            .await
    }

    /// Log in and obtain an access token. Unauthenticated.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        tracing::debug!(email = %request.email, "logging in");
        self.send_json(self.request(Method::POST, "/auth/login").json(request))
            .await
    }

    /// Invalidate the current token on the service side.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.send_unit(self.authed(Method::POST, "/api/logout")?).await
    }

    /// Fetch a page of the feed with authors expanded.
    pub async fn posts(&self, limit: u64, offset: u64) -> Result<Vec<Post>, ApiError> {
        tracing::debug!(limit, offset, "fetching feed page");
        let builder = self
            .authed(Method::GET, "/posts")?
            .query(&[("_author", "true")])
            .query(&[("limit", limit), ("offset", offset)]);
        self.send_json(builder).await
    }

    /// Fetch posts authored by accounts the current user follows.
    pub async fn following_posts(&self) -> Result<Vec<Post>, ApiError> {
        let builder = self
            .authed(Method::GET, "/posts/following")?
            .query(&[("_author", "true")]);
        self.send_json(builder).await
    }

    /// Fetch one post with author and comments expanded.
    pub async fn post(&self, id: u64) -> Result<Post, ApiError> {
        let builder = self
            .authed(Method::GET, &format!("/posts/{id}"))?
            .query(&[("_author", "true"), ("_comments", "true")]);
        self.send_json(builder).await
    }

    /// Create a post and return it with the author expanded.
    pub async fn create_post(&self, data: &PostData) -> Result<Post, ApiError> {
        tracing::debug!(title = %data.title, "creating post");
        let builder = self
            .authed(Method::POST, "/posts")?
            .query(&[("_author", "true")])
            .json(data);
        self.send_json(builder).await
    }

    /// Replace a post's title and body.
    pub async fn update_post(&self, id: u64, data: &PostData) -> Result<Post, ApiError> {
        tracing::debug!(id, "updating post");
        self.send_json(self.authed(Method::PUT, &format!("/posts/{id}"))?.json(data))
            .await
    }

    /// Delete a post.
    pub async fn delete_post(&self, id: u64) -> Result<(), ApiError> {
        tracing::debug!(id, "deleting post");
        self.send_unit(self.authed(Method::DELETE, &format!("/posts/{id}"))?)
            .await
    }

    /// Fetch profile metadata for a user.
    pub async fn profile(&self, name: &str) -> Result<Profile, ApiError> {
        self.send_json(self.authed(Method::GET, &format!("/profiles/{name}"))?)
            .await
    }

    /// Fetch all posts authored by a user, authors expanded.
    pub async fn profile_posts(&self, name: &str) -> Result<Vec<Post>, ApiError> {
        let builder = self
            .authed(Method::GET, &format!("/profiles/{name}/posts"))?
            .query(&[("_author", "true")]);
        self.send_json(builder).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_should_strip_trailing_slash_from_base_url() {
        let client = ApiClient::new("https://example.com/api/").unwrap();
        assert_eq!(client.url("/posts"), "https://example.com/api/posts");
    }

    #[test]
    fn authed_should_fail_without_token() {
        let client = ApiClient::new("https://example.com").unwrap();
        let result = client.authed(Method::GET, "/posts");
        assert!(matches!(result, Err(ApiError::NotLoggedIn)));
    }

    #[test]
    fn set_token_should_enable_authenticated_requests() {
        let mut client = ApiClient::new("https://example.com").unwrap();
        client.set_token("abc");
        assert!(client.authed(Method::GET, "/posts").is_ok());

        client.clear_token();
        assert!(client.authed(Method::GET, "/posts").is_err());
    }
}
