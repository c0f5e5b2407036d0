/// Property-based tests for cutting, dealing and whole-deal accounting
use std::collections::HashSet;

use proptest::prelude::*;
use rand::Rng;

use crate::domain::dealing::{deal_first_pass, deal_second_pass};
use crate::domain::rules::{DEAL_POINTS, DECK_SIZE, MIN_CUT};
use crate::domain::scoring::score_deal;
use crate::domain::seed_derivation::rng_from_seed;
use crate::domain::state::{DealState, Phase};
use crate::domain::tricks::{legal_moves, play_card};
use crate::domain::{test_gens, test_prelude, Card, Deck};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: A cut moves the first `index` cards to the end, keeping both
    /// chunks in order.
    #[test]
    fn prop_cut_is_a_rotation(seed in any::<u64>(), index in MIN_CUT..=DECK_SIZE - MIN_CUT) {
        let deck = Deck::shuffled(&mut rng_from_seed(seed));
        let before = deck.cards().to_vec();
        let mut cut = deck.clone();
        cut.cut(index).unwrap();

        let mut expected = before[index..].to_vec();
        expected.extend_from_slice(&before[..index]);
        prop_assert_eq!(cut.cards(), expected.as_slice());
    }

    /// Property: Both passes together hand out the whole deck, eight distinct
    /// cards per seat.
    #[test]
    fn prop_full_deal_exhausts_the_deck(
        seed in any::<u64>(),
        dealer in test_gens::seat(),
        bidder in test_gens::seat(),
    ) {
        let mut state = DealState::new(dealer, Deck::shuffled(&mut rng_from_seed(seed)));
        deal_first_pass(&mut state).unwrap();
        prop_assert_eq!(state.deck.len(), 12);
        deal_second_pass(&mut state, bidder).unwrap();

        prop_assert!(state.deck.is_empty());
        let all: HashSet<Card> = state.hands.iter().flatten().copied().collect();
        prop_assert_eq!(all.len(), DECK_SIZE);
        for hand in &state.hands {
            prop_assert_eq!(hand.len(), 8);
        }
    }

    /// Property: Any legal deal played to the end distributes exactly 162
    /// points between the two teams.
    #[test]
    fn prop_random_legal_deal_totals_162(
        seed in any::<u64>(),
        dealer in test_gens::seat(),
        bidder in test_gens::seat(),
        trump in test_gens::suit(),
    ) {
        let mut rng = rng_from_seed(seed);
        let mut state = DealState::new(dealer, Deck::shuffled(&mut rng));
        deal_first_pass(&mut state).unwrap();
        deal_second_pass(&mut state, bidder).unwrap();
        state.set_contract(trump, bidder).unwrap();

        let mut plays = 0;
        while state.phase != Phase::Complete {
            let who = state.trick.next_to_play().unwrap();
            let legal = legal_moves(state.hand(who), &state.trick, who, trump);
            let card = legal[rng.random_range(0..legal.len())];
            play_card(&mut state, who, card).unwrap();
            plays += 1;
            prop_assert_eq!(state.cards_in_play(), DECK_SIZE - 4 * state.completed_tricks.len());
        }

        prop_assert_eq!(plays, DECK_SIZE);
        prop_assert_eq!(state.completed_tricks.len(), 8);
        prop_assert_eq!(state.points[0] + state.points[1], DEAL_POINTS);
        let trick_sum: u16 = state.completed_tricks.iter().map(|t| t.points).sum();
        prop_assert_eq!(trick_sum + 10, DEAL_POINTS);

        let outcome = score_deal(&state).unwrap();
        prop_assert_eq!(outcome.contracting_points() + outcome.defending_points(), DEAL_POINTS);
        prop_assert_eq!(outcome.contract_made, outcome.contracting_points() > outcome.defending_points());
    }
}
