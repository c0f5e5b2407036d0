use super::cards_logic::{card_rank, card_value, trick_key};
use super::rules::{PLAYERS, TRICKS_PER_DEAL};
use super::scoring::award_trick;
use super::seating::{expected_actor, team_of, Seat};
use super::state::{DealState, Phase};
use super::{Card, Suit};
use crate::errors::domain::DomainError;

/// Cards played so far in the current trick, in play order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trick {
    pub leader: Seat,
    pub plays: Vec<(Seat, Card)>,
}

impl Trick {
    pub fn new(leader: Seat) -> Self {
        Self {
            leader,
            plays: Vec::with_capacity(PLAYERS),
        }
    }

    /// Suit of the first card, which every follower must respect.
    pub fn led_suit(&self) -> Option<Suit> {
        self.plays.first().map(|(_, c)| c.suit)
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == PLAYERS
    }

    pub fn next_to_play(&self) -> Option<Seat> {
        if self.is_complete() {
            None
        } else {
            Some(expected_actor(self.leader, self.plays.len()))
        }
    }

    /// Play currently holding the trick.
    pub fn winning_play(&self, trump: Suit) -> Option<(Seat, Card)> {
        let led = self.led_suit()?;
        self.plays
            .iter()
            .copied()
            .max_by_key(|&(_, card)| trick_key(card, led, trump))
    }

    pub fn points(&self, trump: Suit) -> u16 {
        self.plays.iter().map(|&(_, c)| card_value(c, trump)).sum()
    }
}

/// A resolved trick kept for the deal record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedTrick {
    pub plays: Vec<(Seat, Card)>,
    pub winner: Seat,
    /// Card points of the trick, without the last-trick bonus.
    pub points: u16,
}

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCardResult {
    /// Whether this play completed the trick.
    pub trick_completed: bool,
    /// Winner of the completed trick, if one was completed.
    pub trick_winner: Option<Seat>,
    /// Points awarded to the winner's team, bonus included.
    pub points_awarded: u16,
    /// Whether the eighth trick was just resolved.
    pub deal_completed: bool,
}

/// Compute the cards `who` may play into `trick`.
///
/// The result is a sorted, non-empty subset of a non-empty hand.
pub fn legal_moves(hand: &[Card], trick: &Trick, who: Seat, trump: Suit) -> Vec<Card> {
    let mut legal = legal_subset(hand, trick, who, trump);
    legal.sort();
    legal
}

fn legal_subset(hand: &[Card], trick: &Trick, who: Seat, trump: Suit) -> Vec<Card> {
    let (Some(led), Some((winner, winning_card))) = (trick.led_suit(), trick.winning_play(trump))
    else {
        return hand.to_vec();
    };

    let same_suit: Vec<Card> = hand.iter().copied().filter(|c| c.suit == led).collect();

    if led == trump {
        if same_suit.is_empty() {
            return hand.to_vec();
        }
        if team_of(winner) == team_of(who) {
            return same_suit;
        }
        // Trump was led, so the winning card is a trump.
        let beat = card_rank(winning_card, trump);
        let higher: Vec<Card> = same_suit
            .iter()
            .copied()
            .filter(|&c| card_rank(c, trump) > beat)
            .collect();
        return if higher.is_empty() { same_suit } else { higher };
    }

    if !same_suit.is_empty() {
        return same_suit;
    }

    // Void in the led suit: trumping in is mandatory, even over a partner.
    let trumps: Vec<Card> = hand.iter().copied().filter(|c| c.suit == trump).collect();
    if !trumps.is_empty() {
        return trumps;
    }

    hand.to_vec()
}

/// Play a card into the current trick, enforcing phase, turn and legality.
///
/// Rejected plays leave the hand and the trick untouched. When the fourth card
/// lands, the trick is resolved and its points go to the winner's team.
pub fn play_card(
    state: &mut DealState,
    who: Seat,
    card: Card,
) -> Result<PlayCardResult, DomainError> {
    let Phase::Trick { trick_no } = state.phase else {
        return Err(DomainError::PhaseMismatch("play outside trick phase"));
    };
    let trump = state
        .trump
        .ok_or(DomainError::PhaseMismatch("trick phase without trump"))?;

    let expected = state
        .trick
        .next_to_play()
        .ok_or(DomainError::PhaseMismatch("trick already complete"))?;
    if expected != who {
        return Err(DomainError::OutOfTurn { who, expected });
    }

    let legal = legal_moves(state.hand(who), &state.trick, who, trump);
    if !legal.contains(&card) {
        return Err(DomainError::IllegalMove { card });
    }

    let hand = &mut state.hands[who as usize];
    if let Some(pos) = hand.iter().position(|&c| c == card) {
        hand.remove(pos);
    }
    state.trick.plays.push((who, card));

    let mut result = PlayCardResult {
        trick_completed: false,
        trick_winner: None,
        points_awarded: 0,
        deal_completed: false,
    };
    if !state.trick.is_complete() {
        return Ok(result);
    }

    let (winner, _) = state
        .trick
        .winning_play(trump)
        .ok_or(DomainError::PhaseMismatch("complete trick without a winner"))?;
    let points = state.trick.points(trump);
    let last = trick_no == TRICKS_PER_DEAL;
    let awarded = award_trick(&mut state.points, winner, points, last);

    let finished = std::mem::replace(&mut state.trick, Trick::new(winner));
    state.completed_tricks.push(CompletedTrick {
        plays: finished.plays,
        winner,
        points,
    });

    result.trick_completed = true;
    result.trick_winner = Some(winner);
    result.points_awarded = awarded;

    if last {
        state.phase = Phase::Complete;
        result.deal_completed = true;
    } else {
        state.phase = Phase::Trick {
            trick_no: trick_no + 1,
        };
    }
    Ok(result)
}
