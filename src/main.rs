//! # Tideline Main Entry Point
//!
//! Parses the command line, loads the persisted session, and drives one
//! page controller per invocation.

use anyhow::{bail, Result};
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

use tideline::cmd_args::{Command, CommandLineArgs, FeedAction, ProfileAction};
use tideline::controllers::{
    AuthController, FeedController, MyProfileController, PostController, ProfileController,
};
use tideline::views::{feed_lines, my_profile_header, post_detail_lines, profile_header};
use tideline::{ApiClient, Interaction, Session, SessionStore, TerminalInteraction};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing_subscriber();

    let args = CommandLineArgs::parse();
    let store = SessionStore::new(&args.session_path());
    let base_url = args.base_url();
    let interaction = TerminalInteraction;
    let styled = atty::is(atty::Stream::Stdout);

    tracing::debug!(session_path = %store.path().display(), %base_url, "starting");

    match args.command().clone() {
        Command::Register {
            name,
            email,
            password,
            avatar,
            banner,
        } => {
            let api = ApiClient::new(&base_url)?;
            AuthController::new(&api, &store, &interaction)
                .register(&name, &email, &password, avatar, banner)
                .await?;
        }
        Command::Login { email, password } => {
            let api = ApiClient::new(&base_url)?;
            AuthController::new(&api, &store, &interaction)
                .login(&email, &password)
                .await?;
        }
        Command::Logout => {
            let session = require_session(&store)?;
            let api = ApiClient::with_token(&base_url, &session.access_token)?;
            AuthController::new(&api, &store, &interaction)
                .logout()
                .await?;
        }
        Command::Feed {
            limit,
            offset,
            following,
            search,
            action,
        } => {
            let session = require_session(&store)?;
            let api = ApiClient::with_token(&base_url, &session.access_token)?;
            let mut feed = FeedController::new(&api, &session, &interaction)
                .with_limit(limit)
                .with_offset(offset);

            if following {
                feed.show_following().await?;
            } else {
                feed.load().await?;
            }

            match action {
                None => {}
                Some(FeedAction::Create { title, body }) => feed.create(&title, &body).await?,
                Some(FeedAction::Delete { id }) => feed.delete(id).await?,
                Some(FeedAction::Edit { id }) => feed.edit(id).await?,
                Some(FeedAction::More) => feed.load_more().await?,
                Some(FeedAction::Author { id }) => {
                    if let Some(name) = feed.select_author(id, &store)? {
                        interaction.notify(&format!(
                            "Selected {name}. Run 'tideline profile --selected' to view."
                        ));
                    }
                    return Ok(());
                }
            }

            if let Some(query) = search {
                feed.search(&query);
            }
            print_lines(feed_lines(feed.view().visible_cards(), styled));
            if args.verbose() {
                eprintln!(
                    "{} of {} posts shown (offset {})",
                    feed.view().visible_cards().count(),
                    feed.view().len(),
                    feed.offset()
                );
            }
        }
        Command::Profile {
            name,
            selected,
            action,
        } => {
            let session = require_session(&store)?;
            let api = ApiClient::with_token(&base_url, &session.access_token)?;

            if selected || name.is_some() {
                let mut profile = if let Some(name) = name {
                    ProfileController::new(&api, &interaction, name)
                } else {
                    match ProfileController::for_selected(&api, &interaction, &store)? {
                        Some(controller) => controller,
                        None => return Ok(()),
                    }
                };
                profile.load().await?;
                print_lines(profile_header(profile.name(), styled));
                print_lines(feed_lines(profile.view().visible_cards(), styled));
            } else {
                let mut profile = MyProfileController::new(&api, &session, &interaction);
                profile.load().await?;

                match action {
                    None => {}
                    Some(ProfileAction::Create { title, body }) => {
                        profile.create(&title, &body).await?
                    }
                    Some(ProfileAction::Delete { id }) => profile.delete(id).await?,
                    Some(ProfileAction::Edit { id }) => profile.edit(id).await?,
                }

                if let Some(meta) = profile.profile() {
                    print_lines(my_profile_header(meta, styled));
                }
                print_lines(feed_lines(profile.view().visible_cards(), styled));
            }
        }
        Command::Post { id } => {
            let session = require_session(&store)?;
            let api = ApiClient::with_token(&base_url, &session.access_token)?;
            let mut controller = PostController::new(&api, &interaction);
            controller.load(id).await?;
            if let Some(post) = controller.post() {
                print_lines(post_detail_lines(post, styled));
            }
        }
    }

    Ok(())
}

/// Load the stored session or fail with a login hint.
fn require_session(store: &SessionStore) -> Result<Session> {
    match store.load()? {
        Some(session) => Ok(session),
        None => bail!("Not logged in. Run 'tideline login' first."),
    }
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}

fn init_tracing_subscriber() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_env(format!(
                "{}_LOG_LEVEL",
                env!("CARGO_PKG_NAME").to_uppercase()
            ))
            .add_directive("reqwest=warn".parse().unwrap())
            .add_directive("hyper=warn".parse().unwrap())
            .add_directive("hyper_util=warn".parse().unwrap())
            .add_directive("tokio=warn".parse().unwrap())
            .add_directive("rustls=warn".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .with_timer(ChronoLocal::rfc_3339())
        .init();
}
