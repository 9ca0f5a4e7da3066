//! # Shopfront CLI Entry Point
//!
//! Interactive terminal front end for the shopfront store.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Seed the initial inventory and promotions
//! 3. Run the menu loop until the user quits

mod menu;
mod seed;

use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    info!("Starting Shopfront");

    let mut store = seed::initial_store();
    menu::run(&mut store);
}

/// Initializes the tracing subscriber.
///
/// Default level is `info`; override with `RUST_LOG` (e.g.
/// `RUST_LOG=shopfront_cli=debug`). Log lines go to stderr so they never
/// interleave with the menu on stdout.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
