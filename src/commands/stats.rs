//! Saved statistics for the configured locale

use super::Game;
use crate::stats::Statistics;
use anyhow::Result;

/// # Errors
///
/// Returns an error if the statistics file exists but cannot be read.
pub fn load_statistics(game: &Game) -> Result<Statistics> {
    let stats = game.store.load_stats()?;
    tracing::debug!(played = stats.played, won = stats.won, "loaded statistics");
    Ok(stats)
}

/// Forget all recorded results
///
/// # Errors
///
/// Returns an error if the statistics file cannot be written.
pub fn reset_statistics(game: &Game) -> Result<()> {
    game.store.save_stats(&Statistics::default())?;
    tracing::info!("statistics reset");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn reset_clears_saved_statistics() {
        let dir = tempfile::tempdir().unwrap();
        let game = Game::from_config(&GameConfig {
            state_dir: Some(dir.path().to_path_buf()),
            ..GameConfig::default()
        })
        .unwrap();

        let stats = Statistics {
            played: 4,
            won: 3,
            ..Statistics::default()
        };
        game.store.save_stats(&stats).unwrap();
        assert_eq!(load_statistics(&game).unwrap(), stats);

        reset_statistics(&game).unwrap();
        assert_eq!(load_statistics(&game).unwrap(), Statistics::default());
    }
}
