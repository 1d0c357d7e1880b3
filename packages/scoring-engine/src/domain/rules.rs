use serde::{Deserialize, Serialize};

pub const PLAYERS: usize = 4;

pub type Seat = u8; // 0..=3

/// Prevailing wind of the current round cycle.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Wind {
    East,
    South,
    West,
    North,
}

pub const WIND_ORDER: [Wind; 4] = [Wind::East, Wind::South, Wind::West, Wind::North];

impl Wind {
    /// East → South → West → North → East.
    pub fn next(self) -> Wind {
        match self {
            Wind::East => Wind::South,
            Wind::South => Wind::West,
            Wind::West => Wind::North,
            Wind::North => Wind::East,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Wind::East => "東",
            Wind::South => "南",
            Wind::West => "西",
            Wind::North => "北",
        }
    }
}

/// Seat math helpers (4 fixed seats: 0..=3).
///
/// Clockwise direction is positive (+1).
#[inline]
pub fn seat_offset(seat: Seat, delta: i8) -> Seat {
    let seat_i = seat as i16;
    let delta_i = delta as i16;
    ((seat_i + delta_i).rem_euclid(PLAYERS as i16)) as Seat
}

/// Returns the next seat clockwise (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_seat(seat: Seat) -> Seat {
    seat_offset(seat, 1)
}

#[inline]
pub fn is_valid_seat(seat: Seat) -> bool {
    (seat as usize) < PLAYERS
}

/// Dealer rotation: the deal passes to the next seat and the wind advances
/// exactly when the deal comes back round to seat 0.
///
/// This is the only place the wind ever changes.
#[inline]
pub fn rotate_dealer(dealer: Seat, wind: Wind) -> (Seat, Wind) {
    let next = next_seat(dealer);
    let wind = if next == 0 { wind.next() } else { wind };
    (next, wind)
}
