//! Example: Reading a feed
//!
//! Loads configuration the usual way (`DISCUIT_BASE_URL`, then a
//! `discuit.{json,toml}` file, then the public host), establishes a session
//! and prints the first page of the home feed.
//!
//! Run with: `RUST_LOG=discuit_client=debug cargo run --example fetch_feed`
//!
//! Set `DISCUIT_USERNAME` and `DISCUIT_PASSWORD` to log in first.

use discuit_client::domain::{PostSort, PostsQuery};
use discuit_client::{config, DiscuitClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let client = DiscuitClient::builder()
        .config(config::load()?)
        .user_agent(concat!("discuit-client/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let initial = client.initialize().await?;
    println!("{} users, {} default communities", initial.no_users, initial.communities.len());

    if let (Ok(username), Ok(password)) =
        (std::env::var("DISCUIT_USERNAME"), std::env::var("DISCUIT_PASSWORD"))
    {
        let user = client.login(&username, &password).await?;
        println!("Logged in as {} ({} points)", user.username, user.points);
    }

    let page = client.get_posts(&PostsQuery::default().sort(PostSort::Hot).limit(10)).await?;
    let now = chrono::Utc::now();
    for post in &page.posts {
        let age = now.signed_duration_since(post.created_at);
        println!(
            "[{:>4}] {} (/{}, {}h ago, {} comments)",
            post.score(),
            post.title,
            post.community_name,
            age.num_hours(),
            post.no_comments
        );
    }

    if let Some(next) = page.next {
        println!("\nNext page cursor: {next}");
    }

    Ok(())
}
