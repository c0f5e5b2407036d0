//! Seat / turn math helpers for the four fixed seats (0..=3).
//!
//! Seats are indices into a fixed array; the ring never changes during a
//! match. Every layer (dealing, bidding, trick play) shares these helpers as
//! the single source of truth for "who acts next".
//!
//! Clockwise direction is positive (+1).

use super::rules::PLAYERS;

/// Seat index, 0..=3. Players see it as "Player 1".."Player 4".
pub type Seat = u8;

/// Team index, 0 for seats {0, 2} and 1 for seats {1, 3}.
pub type TeamId = u8;

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

/// Returns the seat `n` steps clockwise from `start`.
#[inline]
pub fn nth_from(start: Seat, n: u8) -> Seat {
    seat_offset(start, n as i8)
}

#[inline]
pub fn team_of(seat: Seat) -> TeamId {
    seat % 2
}

/// All four seats starting right after `seat` and ending with `seat` itself.
///
/// Drives "everyone else first, the dealer last" for dealing and bidding.
pub fn iter_from_next(seat: Seat) -> impl Iterator<Item = Seat> + Clone {
    (1..=PLAYERS as u8).map(move |n| nth_from(seat, n))
}

/// All four seats starting at `seat` itself. Drives trick play from the leader.
pub fn iter_from_self(seat: Seat) -> impl Iterator<Item = Seat> + Clone {
    (0..PLAYERS as u8).map(move |n| nth_from(seat, n))
}

/// Seat expected to play when `play_count` cards are already in the trick.
#[inline]
pub fn expected_actor(leader: Seat, play_count: usize) -> Seat {
    nth_from(leader, play_count as u8)
}

/// Human-facing seat number (1..=4).
#[inline]
pub fn seat_number(seat: Seat) -> u8 {
    seat + 1
}
