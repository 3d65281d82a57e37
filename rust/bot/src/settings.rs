use holdem_engine::session::GameConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Table configuration supplied by the host's config layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PokerConfig {
    /// Paid into the pot when a player joins
    pub buyin: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    /// Fixed betting unit on flop/turn/river
    pub bet_amount: u32,
    pub max_players: usize,
    /// Seeded on a participant's first balance access
    pub starting_balance: u32,
}

impl Default for PokerConfig {
    fn default() -> Self {
        Self {
            buyin: 100,
            small_blind: 10,
            big_blind: 20,
            bet_amount: 20,
            max_players: 9,
            starting_balance: 1000,
        }
    }
}

impl PokerConfig {
    /// Validate settings values
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.buyin == 0 {
            return Err(SettingsError::InvalidValue(
                "buyin must be greater than 0".to_string(),
            ));
        }
        if self.small_blind == 0 {
            return Err(SettingsError::InvalidValue(
                "small_blind must be greater than 0".to_string(),
            ));
        }
        if self.big_blind < self.small_blind {
            return Err(SettingsError::InvalidValue(
                "big_blind must be at least the small_blind".to_string(),
            ));
        }
        if self.bet_amount == 0 {
            return Err(SettingsError::InvalidValue(
                "bet_amount must be greater than 0".to_string(),
            ));
        }
        if self.max_players < 2 {
            return Err(SettingsError::InvalidValue(
                "max_players must be at least 2".to_string(),
            ));
        }
        Ok(())
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            buyin: self.buyin,
            small_blind: self.small_blind,
            big_blind: self.big_blind,
            bet_amount: self.bet_amount,
            max_players: self.max_players,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("invalid setting: {0}")]
    InvalidValue(String),
}
