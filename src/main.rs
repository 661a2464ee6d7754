use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use chessboard::core::settings::{load_settings, settings_path};
use chessboard::game::types::Color;
use chessboard::{GameSession, JsonFileStore};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = load_settings(&settings_path());
    let store = JsonFileStore::new(settings.resolved_save_path());
    info!("[SESSION] Using save file {:?}", store.path());

    let session = GameSession::start(store, settings).context("Failed to start game session")?;

    let board = session.executor().board();
    info!(
        "[SESSION] Round {} ({} to move), {} pieces on the board, {} captured",
        session.round(),
        session.executor().turn().current_color(),
        board.len(),
        session.executor().dead_pile().len()
    );
    for color in [Color::White, Color::Black] {
        if let Some(king) = board.king_position(color) {
            info!("[SESSION] {} king at {}", color, king);
        }
    }
    match session.outcome() {
        Some(outcome) => info!("[SESSION] {}", outcome.message()),
        None => info!("[SESSION] Game in progress"),
    }

    Ok(())
}
