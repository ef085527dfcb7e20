use serde::{Deserialize, Serialize};

use crate::types::Side;

/// Session configuration supplied by the presentation layer.
///
/// `computer` names the side played by the move selector. `None` means both
/// sides are human (hot-seat play).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub computer: Option<Side>,
}

impl GameConfig {
    pub fn human_vs_human() -> Self {
        Self { computer: None }
    }

    pub fn vs_computer(side: Side) -> Self {
        Self {
            computer: Some(side),
        }
    }

    pub fn is_computer(&self, side: Side) -> bool {
        self.computer == Some(side)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::vs_computer(Side::White)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_computer_playing_white() {
        let config = GameConfig::default();

        assert!(config.is_computer(Side::White));
        assert!(!config.is_computer(Side::Black));
    }

    #[test]
    fn hot_seat_has_no_computer() {
        let config = GameConfig::human_vs_human();

        assert!(!config.is_computer(Side::White));
        assert!(!config.is_computer(Side::Black));
    }
}
