//! racereg - Start number planning
//!
//! Prints the start number plan for the current roster as JSON, or manages
//! startblocks:
//!
//! ```text
//! racereg [plan]
//! racereg startblocks list
//! racereg startblocks times
//! racereg startblocks add <start_time> <name>
//! ```

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use racereg::{
    config::CONFIG,
    db,
    documents::Roster,
    services::{PgParticipantSource, PgStartblockStore, StartblockStore},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.logging.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&CONFIG.database).await?;
    db::test_connection(&pool).await?;

    let store = PgStartblockStore::new(pool.clone());

    let output = match args.as_slice() {
        [] | ["plan"] => {
            let source = PgParticipantSource::new(pool);
            let roster = Roster::load(&source, &store).await?;
            let assignments = roster.assignments(&CONFIG.start_numbers.policy())?;
            tracing::info!(
                participants = roster.participants.len(),
                blocks = roster.blocks.len(),
                "Start number plan ready"
            );
            serde_json::to_string_pretty(&assignments)?
        }
        ["startblocks", "list"] => serde_json::to_string_pretty(&store.get().await?)?,
        ["startblocks", "times"] => serde_json::to_string_pretty(&store.times().await?)?,
        ["startblocks", "add", start_time, name @ ..] if !name.is_empty() => {
            let block = store.add(start_time, &name.join(" ")).await?;
            serde_json::to_string_pretty(&block)?
        }
        _ => anyhow::bail!(
            "usage: racereg [plan | startblocks list | startblocks times | startblocks add <start_time> <name>]"
        ),
    };

    println!("{output}");
    Ok(())
}
