//! Console high-card game.

use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use highcard::{Console, Game, GameOptions};

fn main() -> anyhow::Result<()> {
    env_logger::builder().format_target(false).init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    log::debug!("seeding deck with {seed}");

    let game = Game::new(GameOptions::default(), seed);
    let mut console = Console::new(game, io::stdin().lock(), io::stdout().lock());
    let end = console.run().context("console game aborted")?;

    log::info!("finished in state {end:?}");
    Ok(())
}
