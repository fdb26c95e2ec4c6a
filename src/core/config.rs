//! Session configuration.
//!
//! A session is configured once, before the first move, by providing a
//! `SessionConfig`. The controller takes ownership of it and never mutates
//! it; changing who plays requires building a new controller.

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PlayerKind, PlayerMap};

/// Immutable configuration for a game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Human or computer control per seat.
    pub player_kinds: PlayerMap<PlayerKind>,

    /// Player who moves first in every game of the session.
    pub first_player: PlayerId,

    /// Seed for the computer move RNG.
    /// Same seed produces the same computer moves across a session.
    pub seed: u64,
}

impl Default for SessionConfig {
    /// Human `Player1` moving first against a computer `Player2`.
    fn default() -> Self {
        Self::human_vs_computer()
    }
}

impl SessionConfig {
    /// Human `Player1` against computer `Player2`.
    #[must_use]
    pub fn human_vs_computer() -> Self {
        Self::with_kinds(PlayerKind::Human, PlayerKind::Computer)
    }

    /// Two humans sharing one board.
    #[must_use]
    pub fn human_vs_human() -> Self {
        Self::with_kinds(PlayerKind::Human, PlayerKind::Human)
    }

    /// Both seats computer controlled.
    #[must_use]
    pub fn computer_vs_computer() -> Self {
        Self::with_kinds(PlayerKind::Computer, PlayerKind::Computer)
    }

    fn with_kinds(player1: PlayerKind, player2: PlayerKind) -> Self {
        Self {
            player_kinds: PlayerMap::new(|p| match p {
                PlayerId::Player1 => player1,
                PlayerId::Player2 => player2,
            }),
            first_player: PlayerId::Player1,
            seed: 42,
        }
    }

    /// Set who controls a seat.
    pub fn with_player_kind(mut self, player: PlayerId, kind: PlayerKind) -> Self {
        self.player_kinds[player] = kind;
        self
    }

    /// Set who moves first.
    pub fn with_first_player(mut self, player: PlayerId) -> Self {
        self.first_player = player;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Get the kind of a seat.
    #[must_use]
    pub fn kind_of(&self, player: PlayerId) -> PlayerKind {
        self.player_kinds[player]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.kind_of(PlayerId::Player1), PlayerKind::Human);
        assert_eq!(config.kind_of(PlayerId::Player2), PlayerKind::Computer);
        assert_eq!(config.first_player, PlayerId::Player1);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_presets() {
        let hvh = SessionConfig::human_vs_human();
        assert!(PlayerId::all().all(|p| hvh.kind_of(p) == PlayerKind::Human));

        let cvc = SessionConfig::computer_vs_computer();
        assert!(PlayerId::all().all(|p| cvc.kind_of(p) == PlayerKind::Computer));
    }

    #[test]
    fn test_builder_pattern() {
        let config = SessionConfig::human_vs_human()
            .with_player_kind(PlayerId::Player1, PlayerKind::Computer)
            .with_first_player(PlayerId::Player2)
            .with_seed(123);

        assert_eq!(config.kind_of(PlayerId::Player1), PlayerKind::Computer);
        assert_eq!(config.kind_of(PlayerId::Player2), PlayerKind::Human);
        assert_eq!(config.first_player, PlayerId::Player2);
        assert_eq!(config.seed, 123);
    }

    #[test]
    fn test_serialization() {
        let config = SessionConfig::default().with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
