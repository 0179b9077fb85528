use chrono::{TimeZone, Utc};
use clap::Parser;

use taskdeck_core::TodoStatus;
use taskdeck_server::ServerConfig;
use taskdeck_service::TodoService;
use taskdeck_store::Store;

/// In-memory task-list server.
#[derive(Debug, Parser)]
#[command(name = "taskdeck", version, about = "In-memory task-list server")]
struct Args {
    /// Address to bind.
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 5000)]
    port: u16,

    /// Seed the store with a few example items on startup.
    #[arg(long)]
    sample_data: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting taskdeck server");

    let store = Store::new();
    let service = TodoService::new(store);

    if args.sample_data {
        seed_sample_data(&service);
    }

    let config = ServerConfig {
        host: args.host,
        port: args.port,
    };
    let port = config.port;
    let _handle = taskdeck_server::start(config, service)
        .await
        .expect("Failed to start server");

    tracing::info!(port = port, "taskdeck ready");

    // Wait for shutdown signal
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for ctrl+c");

    tracing::info!("Shutting down");
}

/// A few items to play with. The store is volatile, so a fresh process
/// starts empty otherwise.
fn seed_sample_data(service: &TodoService) {
    let seeds = [
        (
            "Review the quarterly roadmap",
            Utc.with_ymd_and_hms(2026, 8, 20, 9, 0, 0).unwrap(),
            TodoStatus::InProgress,
        ),
        (
            "Finish the onboarding guide",
            Utc.with_ymd_and_hms(2026, 8, 30, 9, 0, 0).unwrap(),
            TodoStatus::Scheduled,
        ),
        (
            "File the expense report",
            Utc.with_ymd_and_hms(2026, 8, 15, 9, 0, 0).unwrap(),
            TodoStatus::Completed,
        ),
    ];

    for (content, target_date, status) in seeds {
        if let Err(err) = service.create_todo(content, target_date, status) {
            tracing::warn!(error = %err, "failed to seed sample todo");
        }
    }
    tracing::info!(count = service.get_todo_count(), "sample data seeded");
}
