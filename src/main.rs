use anyhow::Context;
use battle_arena::{Game, GameConfig, TerminalConsole};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = GameConfig::from_env().context("Failed to load configuration")?;
    info!(
        save_path = %config.save_path.display(),
        enemies = config.roster.len(),
        "=== Battle Arena startup ==="
    );

    let console = TerminalConsole::stdio(config.clear_screen);
    let mut game = Game::new(console, config);
    game.run()?;
    Ok(())
}

/// Logs go to stderr so they never interleave with the game's own output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
