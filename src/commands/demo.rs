//! `sitedog demo`: serve the live page until interrupted.

use std::future::Future;

use crate::commands::CommandError;
use crate::config::{ConfigStore, DemoSettings};
use crate::lifecycle::{LifecycleController, ShutdownOutcome};

/// Check the configuration exists, then run a demo session until `stop`.
pub async fn run<F>(settings: DemoSettings, stop: F) -> Result<ShutdownOutcome, CommandError>
where
    F: Future<Output = ()>,
{
    let store = ConfigStore::new(&settings.config_path);
    if !store.exists() {
        return Err(CommandError::ConfigNotFound(settings.config_path));
    }

    let grace_period = settings.grace_period;
    let session = LifecycleController::new(settings).start().await?;

    println!("Starting demo server at {}", session.url());
    println!("Press Ctrl+C to stop");

    let outcome = session
        .wait(async {
            stop.await;
            println!("\nStopping demo server...");
        })
        .await;

    match outcome {
        ShutdownOutcome::Graceful => Ok(outcome),
        ShutdownOutcome::TimedOut => {
            println!(
                "Requests still running after {}s, stopped anyway",
                grace_period.as_secs()
            );
            Ok(outcome)
        }
        ShutdownOutcome::Faulted => Err(CommandError::ServerFault),
    }
}
