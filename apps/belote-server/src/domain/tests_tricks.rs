use crate::domain::cards_parsing::try_parse_cards;
use crate::domain::seating::{expected_actor, Seat};
use crate::domain::state::{DealState, Phase};
use crate::domain::tricks::{legal_moves, play_card, Trick};
use crate::domain::{Card, Deck, Suit};
use crate::errors::domain::DomainError;

fn cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens).expect("hardcoded valid card tokens")
}

fn card(token: &str) -> Card {
    token.parse().expect("hardcoded valid card token")
}

fn trick_with(leader: Seat, tokens: &[&str]) -> Trick {
    let mut trick = Trick::new(leader);
    for (n, c) in cards(tokens).into_iter().enumerate() {
        trick.plays.push((expected_actor(leader, n), c));
    }
    trick
}

/// Deal state in trick phase; dealer 3 so seat 0 leads the first trick.
fn make_trick_state(trump: Suit, hands: [Vec<Card>; 4]) -> DealState {
    let mut state = DealState::new(3, Deck::from_cards(Vec::new()));
    state.hands = hands;
    state.set_contract(trump, 0).unwrap();
    state
}

#[test]
fn empty_trick_allows_the_whole_hand() {
    let hand = cards(&["9♣", "7♥", "K♥"]);
    let legal = legal_moves(&hand, &Trick::new(0), 0, Suit::Hearts);
    assert_eq!(legal, cards(&["7♥", "K♥", "9♣"]));
}

#[test]
fn trump_lead_against_an_opponent_requires_overtrumping() {
    // Trump ♥ led, opponent holds the trick with Q♥.
    let trick = trick_with(0, &["Q♥"]);
    let hand = cards(&["7♥", "K♥", "9♣"]);
    assert_eq!(legal_moves(&hand, &trick, 1, Suit::Hearts), cards(&["K♥"]));
}

#[test]
fn trump_lead_without_a_higher_trump_falls_back_to_any_trump() {
    let trick = trick_with(0, &["J♥"]);
    let hand = cards(&["7♥", "K♥", "9♣"]);
    assert_eq!(
        legal_moves(&hand, &trick, 1, Suit::Hearts),
        cards(&["7♥", "K♥"])
    );
}

#[test]
fn trump_lead_with_partner_winning_allows_any_trump() {
    // Seat 0 leads Q♥, seat 1 underplays 8♥, seat 2 is seat 0's partner.
    let trick = trick_with(0, &["Q♥", "8♥"]);
    let hand = cards(&["7♥", "K♥", "9♣"]);
    assert_eq!(
        legal_moves(&hand, &trick, 2, Suit::Hearts),
        cards(&["7♥", "K♥"])
    );
}

#[test]
fn trump_lead_without_trumps_allows_the_whole_hand() {
    let trick = trick_with(0, &["Q♥"]);
    let hand = cards(&["A♠", "9♣"]);
    assert_eq!(legal_moves(&hand, &trick, 1, Suit::Hearts), cards(&["A♠", "9♣"]));
}

#[test]
fn plain_lead_must_be_followed() {
    let trick = trick_with(0, &["K♦"]);
    let hand = cards(&["7♦", "A♦", "J♣", "9♠"]);
    assert_eq!(legal_moves(&hand, &trick, 1, Suit::Clubs), cards(&["7♦", "A♦"]));
}

#[test]
fn void_in_a_plain_lead_must_trump_in() {
    // ♦ led, trump ♣, no ♦ in hand.
    let trick = trick_with(0, &["K♦"]);
    let hand = cards(&["7♣", "A♥", "K♠"]);
    assert_eq!(legal_moves(&hand, &trick, 1, Suit::Clubs), cards(&["7♣"]));
}

#[test]
fn trumping_in_is_required_even_when_partner_is_winning() {
    let trick = trick_with(0, &["A♦", "7♦"]);
    let hand = cards(&["8♣", "A♥"]);
    assert_eq!(legal_moves(&hand, &trick, 2, Suit::Clubs), cards(&["8♣"]));
}

#[test]
fn void_without_trumps_may_discard_anything() {
    let trick = trick_with(0, &["K♦"]);
    let hand = cards(&["A♥", "K♠"]);
    assert_eq!(legal_moves(&hand, &trick, 1, Suit::Clubs), cards(&["A♥", "K♠"]));
}

#[test]
fn illegal_play_is_rejected_without_touching_state() {
    let mut state = make_trick_state(
        Suit::Hearts,
        [
            cards(&["Q♥", "A♠"]),
            cards(&["7♥", "K♥", "9♣"]),
            cards(&["8♥", "10♠"]),
            cards(&["J♦", "9♦"]),
        ],
    );
    play_card(&mut state, 0, card("Q♥")).unwrap();
    let hand_before = state.hand(1).to_vec();
    let trick_before = state.trick.clone();

    assert_eq!(
        play_card(&mut state, 1, card("7♥")),
        Err(DomainError::IllegalMove { card: card("7♥") })
    );
    assert_eq!(
        play_card(&mut state, 1, card("A♣")),
        Err(DomainError::IllegalMove { card: card("A♣") }),
        "a card not in hand is never legal"
    );
    assert_eq!(state.hand(1), hand_before.as_slice());
    assert_eq!(state.trick, trick_before);

    assert_eq!(
        play_card(&mut state, 2, card("8♥")),
        Err(DomainError::OutOfTurn {
            who: 2,
            expected: 1
        })
    );
}

#[test]
fn malformed_card_is_a_protocol_error() {
    assert!(matches!(
        "X9".parse::<Card>(),
        Err(DomainError::Protocol(_))
    ));
}

#[test]
fn completed_trick_goes_to_the_best_card_and_its_team() {
    let mut state = make_trick_state(
        Suit::Hearts,
        [
            cards(&["A♠", "7♦"]),
            cards(&["10♠", "8♦"]),
            cards(&["7♠", "9♦"]),
            cards(&["7♥", "10♦"]),
        ],
    );
    assert!(!play_card(&mut state, 0, card("A♠")).unwrap().trick_completed);
    play_card(&mut state, 1, card("10♠")).unwrap();
    play_card(&mut state, 2, card("7♠")).unwrap();
    // Seat 3 is void in ♠ and must trump with 7♥.
    let result = play_card(&mut state, 3, card("7♥")).unwrap();

    assert!(result.trick_completed);
    assert_eq!(result.trick_winner, Some(3));
    assert_eq!(result.points_awarded, 21);
    assert!(!result.deal_completed);
    assert_eq!(state.points, [0, 21]);
    assert_eq!(state.phase, Phase::Trick { trick_no: 2 });
    assert_eq!(state.trick.leader, 3);
    assert!(state.trick.plays.is_empty());
    assert_eq!(state.completed_tricks.len(), 1);
    assert_eq!(state.completed_tricks[0].winner, 3);
}

#[test]
fn eighth_trick_adds_the_last_trick_bonus_and_ends_the_deal() {
    let mut state = make_trick_state(
        Suit::Spades,
        [
            cards(&["A♦"]),
            cards(&["7♦"]),
            cards(&["10♦"]),
            cards(&["8♦"]),
        ],
    );
    state.phase = Phase::Trick { trick_no: 8 };

    for (seat, token) in [(0, "A♦"), (1, "7♦"), (2, "10♦")] {
        play_card(&mut state, seat, card(token)).unwrap();
    }
    let result = play_card(&mut state, 3, card("8♦")).unwrap();

    assert_eq!(result.trick_winner, Some(0));
    assert_eq!(result.points_awarded, 31);
    assert!(result.deal_completed);
    assert_eq!(state.phase, Phase::Complete);
    assert_eq!(state.points, [31, 0]);
    assert!(matches!(
        play_card(&mut state, 0, card("A♦")),
        Err(DomainError::PhaseMismatch(_))
    ));
}
