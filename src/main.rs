//=========================================================================
// Revolution Cards: Binary
//=========================================================================
//
// Opens the game window with the default configuration. Log output is
// filtered through `RUST_LOG` (default: info).
//
//=========================================================================

use std::process;

use log::error;
use revolution_cards::EngineBuilder;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = EngineBuilder::new().build().run() {
        error!("{}", e);
        process::exit(1);
    }
}
