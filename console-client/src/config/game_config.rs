use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tictactoe_engine::config::Validate;
use tictactoe_engine::tictactoe::Player;

use crate::session_rng::SessionRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum FirstPlayerMode {
    Human,
    Computer,
    Random,
}

impl FirstPlayerMode {
    pub fn resolve(&self, rng: &mut SessionRng) -> Player {
        match self {
            FirstPlayerMode::Human => Player::Human,
            FirstPlayerMode::Computer => Player::Computer,
            FirstPlayerMode::Random => {
                if rng.random_bool() {
                    Player::Human
                } else {
                    Player::Computer
                }
            }
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub first_player: FirstPlayerMode,
    #[serde(default)]
    pub show_move_scores: bool,
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl GameConfig {
    /// Applies command-line overrides. Picking a fixed first player drops a
    /// stored seed, since only `Random` mode draws from the rng.
    pub fn apply_overrides(&mut self, first_player: Option<FirstPlayerMode>, seed: Option<u64>) {
        if let Some(first_player) = first_player {
            self.first_player = first_player;
            if first_player != FirstPlayerMode::Random {
                self.rng_seed = None;
            }
        }
        if let Some(seed) = seed {
            self.rng_seed = Some(seed);
        }
    }

    /// The seed the session rng should use, if any.
    pub fn effective_seed(&self) -> Option<u64> {
        match self.first_player {
            FirstPlayerMode::Random => self.rng_seed,
            FirstPlayerMode::Human | FirstPlayerMode::Computer => None,
        }
    }
}

// A seed outside Random mode is ignored rather than rejected, so switching
// modes never invalidates a saved file.
impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_player: FirstPlayerMode::Human,
            show_move_scores: false,
            rng_seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_modes_ignore_rng() {
        let mut rng = SessionRng::new(1);
        assert_eq!(FirstPlayerMode::Human.resolve(&mut rng), Player::Human);
        assert_eq!(FirstPlayerMode::Computer.resolve(&mut rng), Player::Computer);
    }

    #[test]
    fn test_random_mode_is_reproducible_per_seed() {
        let mut a = SessionRng::new(99);
        let mut b = SessionRng::new(99);
        for _ in 0..16 {
            assert_eq!(
                FirstPlayerMode::Random.resolve(&mut a),
                FirstPlayerMode::Random.resolve(&mut b)
            );
        }
    }

    #[test]
    fn test_fixed_mode_override_of_seeded_random_config_stays_valid() {
        let mut config = GameConfig {
            first_player: FirstPlayerMode::Random,
            rng_seed: Some(7),
            ..GameConfig::default()
        };
        assert!(config.validate().is_ok());

        config.apply_overrides(Some(FirstPlayerMode::Computer), None);
        assert!(config.validate().is_ok());
        assert_eq!(config.first_player, FirstPlayerMode::Computer);
        assert_eq!(config.rng_seed, None);
    }

    #[test]
    fn test_random_override_keeps_stored_seed() {
        let mut config = GameConfig {
            first_player: FirstPlayerMode::Random,
            rng_seed: Some(7),
            ..GameConfig::default()
        };
        config.apply_overrides(Some(FirstPlayerMode::Random), None);
        assert_eq!(config.effective_seed(), Some(7));
    }

    #[test]
    fn test_seed_override_without_random_mode_is_accepted_and_unused() {
        let mut config = GameConfig::default();
        config.apply_overrides(None, Some(5));
        assert!(config.validate().is_ok());
        assert_eq!(config.rng_seed, Some(5));
        assert_eq!(config.effective_seed(), None);

        config.apply_overrides(Some(FirstPlayerMode::Random), Some(9));
        assert_eq!(config.effective_seed(), Some(9));
    }
}
