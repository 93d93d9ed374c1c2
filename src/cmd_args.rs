//! # Command Line Arguments
//!
//! One subcommand per page of the original client: auth forms, feed,
//! profile, and single post. Global flags override the session file path
//! and the API base URL.

use std::ffi::OsString;

pub use clap::Parser;
use clap::Subcommand;

use crate::config;

#[derive(Parser, Debug)]
#[command(name = "tideline", version, about, long_about = None)]
pub struct CommandLineArgs {
    /// Session file path
    /// Optional. Overrides TIDELINE_SESSION_PATH and the default location.
    #[clap(short = 's', long, help = "session file path")]
    session: Option<String>,

    /// API base URL
    /// Optional. Overrides TIDELINE_BASE_URL and the built-in endpoint.
    #[clap(long, help = "API base URL")]
    base_url: Option<String>,

    /// Verbose mode
    /// Optional. Print verbose messages.
    #[clap(short = 'v', long, help = "Print verbose message", default_value = "false")]
    verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Register a new account
    Register {
        #[clap(long)]
        name: String,
        #[clap(long)]
        email: String,
        #[clap(long)]
        password: String,
        #[clap(long)]
        avatar: Option<String>,
        #[clap(long)]
        banner: Option<String>,
    },
    /// Log in and persist the session
    Login {
        #[clap(long)]
        email: String,
        #[clap(long)]
        password: String,
    },
    /// Log out and clear the session
    Logout,
    /// Show the feed of posts
    Feed {
        #[clap(long, default_value_t = 100)]
        limit: u64,
        #[clap(long, default_value_t = 0)]
        offset: u64,
        /// Show only posts from followed accounts
        #[clap(long)]
        following: bool,
        /// Filter rendered posts by a case-insensitive substring
        #[clap(long)]
        search: Option<String>,
        #[clap(subcommand)]
        action: Option<FeedAction>,
    },
    /// Show a profile: your own, a named one, or the selected one
    Profile {
        /// Profile name; omit for your own profile
        name: Option<String>,
        /// Use the profile selected from the feed instead of a name
        #[clap(long, conflicts_with = "name")]
        selected: bool,
        #[clap(subcommand)]
        action: Option<ProfileAction>,
    },
    /// Show a single post with author and comments
    Post {
        /// Post id
        id: u64,
    },
}

/// Actions on the feed page.
#[derive(Subcommand, Debug, Clone)]
pub enum FeedAction {
    /// Create a post, then reload the feed from the beginning
    Create {
        #[clap(long)]
        title: String,
        #[clap(long)]
        body: String,
    },
    /// Delete a post (asks for confirmation)
    Delete { id: u64 },
    /// Edit a post's title and body (prompts with current values)
    Edit { id: u64 },
    /// Load the next page and append it to the feed
    More,
    /// Select a post's author as the profile to view next
    Author { id: u64 },
}

/// Actions on the own-profile page.
#[derive(Subcommand, Debug, Clone)]
pub enum ProfileAction {
    /// Create a post from the compose fields
    Create {
        #[clap(long)]
        title: String,
        #[clap(long)]
        body: String,
    },
    /// Delete one of your posts (asks for confirmation)
    Delete { id: u64 },
    /// Edit one of your posts (prompts with current values)
    Edit { id: u64 },
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::parse_from(itr)
    }

    /// Session file path: flag, then env var, then default.
    pub fn session_path(&self) -> String {
        self.session
            .clone()
            .unwrap_or_else(config::get_session_path)
    }

    /// API base URL: flag, then env var, then default.
    pub fn base_url(&self) -> String {
        self.base_url.clone().unwrap_or_else(config::get_base_url)
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_feed_defaults() {
        let args = CommandLineArgs::parse_from(["tideline", "feed"]);
        match args.command() {
            Command::Feed {
                limit,
                offset,
                following,
                search,
                action,
            } => {
                assert_eq!(*limit, 100);
                assert_eq!(*offset, 0);
                assert!(!*following);
                assert!(search.is_none());
                assert!(action.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_feed_following_and_search() {
        let args =
            CommandLineArgs::parse_from(["tideline", "feed", "--following", "--search", "rust"]);
        match args.command() {
            Command::Feed {
                following, search, ..
            } => {
                assert!(*following);
                assert_eq!(search.as_deref(), Some("rust"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_feed_delete_action() {
        let args = CommandLineArgs::parse_from(["tideline", "feed", "delete", "7"]);
        match args.command() {
            Command::Feed {
                action: Some(FeedAction::Delete { id }),
                ..
            } => assert_eq!(*id, 7),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_login() {
        let args = CommandLineArgs::parse_from([
            "tideline",
            "login",
            "--email",
            "alice@example.com",
            "--password",
            "hunter2",
        ]);
        match args.command() {
            Command::Login { email, password } => {
                assert_eq!(email, "alice@example.com");
                assert_eq!(password, "hunter2");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_session_override() {
        let args = CommandLineArgs::parse_from(["tideline", "-s", "/tmp/session", "logout"]);
        assert_eq!(args.session_path(), "/tmp/session");
        assert!(!args.verbose());
    }

    #[test]
    fn test_parse_profile_selected() {
        let args = CommandLineArgs::parse_from(["tideline", "profile", "--selected"]);
        match args.command() {
            Command::Profile { name, selected, .. } => {
                assert!(name.is_none());
                assert!(*selected);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
