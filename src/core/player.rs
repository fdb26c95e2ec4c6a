//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! The marker a player leaves on the board. Exactly two players exist,
//! `Player1` (drawn as `X`) and `Player2` (drawn as `O`).
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `PlayerId`, used for per-player
//! configuration such as whether a seat is human or computer controlled.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of players in a game.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier, doubling as the board marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    /// First player, drawn as `X`.
    Player1,
    /// Second player, drawn as `O`.
    Player2,
}

impl PlayerId {
    /// Get the 0-based slot for this player.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::Player1 => 0,
            PlayerId::Player2 => 1,
        }
    }

    /// Get the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::Player1 => PlayerId::Player2,
            PlayerId::Player2 => PlayerId::Player1,
        }
    }

    /// Board symbol for this player's marker.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            PlayerId::Player1 => 'X',
            PlayerId::Player2 => 'O',
        }
    }

    /// Iterate over both players in seat order.
    ///
    /// ```
    /// use rust_tictactoe::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(players, vec![PlayerId::Player1, PlayerId::Player2]);
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [PlayerId::Player1, PlayerId::Player2].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerId::Player1 => write!(f, "Player1"),
            PlayerId::Player2 => write!(f, "Player2"),
        }
    }
}

/// Who controls a seat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    /// Moves come from the presentation layer's input.
    #[default]
    Human,
    /// Moves are chosen by the controller.
    Computer,
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_tictactoe::core::{PlayerId, PlayerKind, PlayerMap};
///
/// let mut kinds = PlayerMap::with_value(PlayerKind::Human);
/// kinds[PlayerId::Player2] = PlayerKind::Computer;
///
/// assert_eq!(kinds[PlayerId::Player1], PlayerKind::Human);
/// assert_eq!(kinds[PlayerId::Player2], PlayerKind::Computer);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::Player1), factory(PlayerId::Player2)],
        }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().zip(self.data.iter())
    }
}

impl<T: Default> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::with_default()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
