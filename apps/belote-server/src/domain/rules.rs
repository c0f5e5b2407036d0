pub const PLAYERS: usize = 4;
pub const TEAMS: usize = 2;
pub const DECK_SIZE: usize = 32;
pub const TRICKS_PER_DEAL: u8 = 8;
pub const LAST_TRICK_BONUS: u16 = 10;
/// Card points in the whole deck plus the last-trick bonus.
pub const DEAL_POINTS: u16 = 162;
/// A cut must leave at least this many cards on each side.
pub const MIN_CUT: usize = 3;

/// Dealing schedule before bidding: 2 cards then 3 cards to every seat.
pub const FIRST_PASS: [usize; 2] = [2, 3];
/// Cards handed to each non-bidder after bidding.
pub const SECOND_PASS: usize = 3;
/// Cards handed to the bidder after bidding, on top of the proposed card.
pub const BIDDER_SECOND_PASS: usize = 2;
