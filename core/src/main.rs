use std::sync::Arc;

use leaderboard_core::{LeaderboardAdapter, ListView, UreqTransport};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG controls verbosity; logs go to stderr, the view to stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    let mut view = ListView::start(Arc::new(LeaderboardAdapter::<UreqTransport>::default()));
    println!("{}", view.render());

    view.settled().await;
    println!("{}", view.render());
    Ok(())
}
