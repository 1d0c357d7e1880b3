//! Players at the table.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::domain::rules::{Seat, PLAYERS};

/// Stable player identifier. Generated players get a ULID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn generate() -> Self {
        Self(Ulid::new().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PlayerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Cosmetic colour, fixed by seat.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerColor {
    Red,
    Blue,
    Green,
    Yellow,
}

impl PlayerColor {
    pub fn for_seat(seat: Seat) -> Self {
        match seat % PLAYERS as Seat {
            0 => PlayerColor::Red,
            1 => PlayerColor::Blue,
            2 => PlayerColor::Green,
            _ => PlayerColor::Yellow,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub score: i64,
    /// Fixed for the whole session.
    pub seat_index: Seat,
    pub color: PlayerColor,
}

impl Player {
    pub fn new(name: impl Into<String>, seat_index: Seat, starting_score: i64) -> Self {
        Self {
            id: PlayerId::generate(),
            name: name.into(),
            score: starting_score,
            seat_index,
            color: PlayerColor::for_seat(seat_index),
        }
    }
}

/// Four fresh players seated 0..=3 in name order.
pub fn create_players(names: &[String; PLAYERS], starting_score: i64) -> [Player; PLAYERS] {
    std::array::from_fn(|seat| Player::new(names[seat].clone(), seat as Seat, starting_score))
}
