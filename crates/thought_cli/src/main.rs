//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `thought_core` linkage and configuration loading.
//! - Keep output deterministic for quick local sanity checks.

use std::process::ExitCode;
use thought_core::{StoreConfig, SystemClock, ThoughtStore};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    println!("thought_core ping={}", thought_core::ping());
    println!("thought_core version={}", thought_core::core_version());

    if let Ok(log_dir) = std::env::var("THOUGHT_LOG_DIR") {
        if let Err(err) = thought_core::init_logging(thought_core::default_log_level(), &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let config = match StoreConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let store = ThoughtStore::new(config, SystemClock);
    log::info!("event=cli_probe module=cli status=ok");
    println!("thought_core owner={}", store.owner_identity());
    println!("thought_core thoughts={}", store.len());
    ExitCode::SUCCESS
}
