//! Round and deck integration tests.

use higher_card::{
    Card, DECK_SIZE, Deck, DrawError, Guess, GuessError, Hand, Player, Rank, Round, RoundError,
    RoundOptions, RoundState, Suit,
};
use rand::RngCore;

/// Random source that always yields zero, so random draws take the top card.
struct ZeroRng;

impl RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }
}

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

#[test]
fn suit_order_is_fixed_for_equal_rank() {
    for rank in Rank::ALL {
        for (i, &low) in Suit::ALL.iter().enumerate() {
            for &high in &Suit::ALL[i + 1..] {
                assert!(card(high, rank) > card(low, rank));
                assert!(card(low, rank) < card(high, rank));
            }
        }
    }
}

#[test]
fn rank_order_is_fixed_for_equal_suit() {
    for suit in Suit::ALL {
        for pair in Rank::ALL.windows(2) {
            assert!(card(suit, pair[1]) > card(suit, pair[0]));
        }
        assert!(card(suit, Rank::Ace) > card(suit, Rank::King));
    }
}

#[test]
fn rendering_round_trips() {
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            let original = card(suit, rank);
            let text = original.to_string();
            let (rank_name, suit_name) = text.split_once('-').unwrap();

            assert_eq!(rank_name.parse::<Rank>(), Ok(rank));
            assert_eq!(suit_name.parse::<Suit>(), Ok(suit));
            assert_eq!(text.parse::<Card>(), Ok(original));
        }
    }
    assert_eq!(card(Suit::Spade, Rank::Ace).to_string(), "ACE-SPADE");
}

#[test]
fn drawing_whole_deck_yields_every_card_once() {
    let mut deck = Deck::new(3);
    let mut drawn = Vec::with_capacity(DECK_SIZE);

    while !deck.is_empty() {
        drawn.push(deck.draw_random().unwrap());
    }

    assert_eq!(drawn.len(), DECK_SIZE);
    drawn.sort_unstable();
    drawn.dedup();
    assert_eq!(drawn.len(), DECK_SIZE);

    assert_eq!(deck.draw_random(), Err(DrawError::Exhausted));
    assert_eq!(deck.draw(), Err(DrawError::Exhausted));
    assert_eq!(deck.draw_at(0), Err(DrawError::Exhausted));
}

#[test]
fn sequential_draws_empty_the_deck() {
    let mut deck = Deck::new(0);
    for remaining in (0..DECK_SIZE).rev() {
        deck.draw().unwrap();
        assert_eq!(deck.len(), remaining);
    }
    assert_eq!(deck.draw(), Err(DrawError::Exhausted));
}

#[test]
fn zero_rng_draws_in_enumeration_order() {
    let mut deck = Deck::with_rng(ZeroRng);

    let first = deck.draw_random().unwrap();
    let second = deck.draw_random().unwrap();
    assert_eq!(first, card(Suit::Club, Rank::Two));
    assert_eq!(second, card(Suit::Club, Rank::Three));

    let mut player = Player::new("Ada").unwrap();
    player.receive(first);
    player.receive(second);
    assert_eq!(player.guess(0), Ok(false));
    assert_eq!(player.guess(1), Ok(true));
}

#[test]
fn seeded_decks_are_deterministic() {
    let mut a = Deck::new(99);
    let mut b = Deck::new(99);
    a.shuffle();
    b.shuffle();
    assert_eq!(a.cards(), b.cards());
    assert_eq!(a.draw_random(), b.draw_random());
}

#[test]
fn dealt_pair_has_exactly_one_winner() {
    for seed in 0..200 {
        let mut deck = Deck::new(seed);
        let mut player = Player::new("Ada").unwrap();
        player.receive(deck.draw_random().unwrap());
        player.receive(deck.draw_random().unwrap());

        let first = player.guess(0).unwrap();
        let second = player.guess(1).unwrap();
        assert_ne!(first, second, "seed {seed}");
    }
}

#[test]
fn guess_out_of_range_is_an_error() {
    let mut player = Player::new("Ada").unwrap();
    player.receive(card(Suit::Heart, Rank::Two));
    assert_eq!(
        player.guess(1),
        Err(GuessError::OutOfRange { index: 1, len: 1 })
    );
}

#[test]
fn hand_snapshots_survive_player_mutation() {
    let mut player = Player::new("Ada").unwrap();
    player.receive(card(Suit::Club, Rank::Five));
    let snapshot: Hand = player.hand().clone();

    player.receive(card(Suit::Spade, Rank::Five));
    player.discard(&card(Suit::Club, Rank::Five));

    assert_eq!(snapshot.cards(), &[card(Suit::Club, Rank::Five)]);
    assert_eq!(player.hand().cards(), &[card(Suit::Spade, Rank::Five)]);
}

#[test_log::test]
fn basic_round_flow() {
    let options = RoundOptions::default();
    let mut round = Round::with_deck("Ada", options, Deck::with_rng(ZeroRng)).unwrap();
    assert_eq!(round.state(), RoundState::Dealing);
    assert!(round.revealed().is_none());

    assert_eq!(round.guess(0).unwrap_err(), RoundError::InvalidState);

    round.deal().unwrap();
    assert_eq!(round.state(), RoundState::Guessing);
    assert_eq!(round.deck().len(), DECK_SIZE - 2);
    assert!(round.revealed().is_none());
    assert_eq!(round.deal().unwrap_err(), RoundError::InvalidState);

    let guess: Guess = "Second".parse().unwrap();
    let outcome = round.guess(guess.index()).unwrap();
    assert!(outcome.correct);
    assert_eq!(outcome.index, 1);
    assert_eq!(round.state(), RoundState::Revealed);

    let hand = round.revealed().unwrap();
    assert_eq!(hand.to_string(), "TWO-CLUB THREE-CLUB");
    assert_eq!(round.guess(0).unwrap_err(), RoundError::InvalidState);
}

#[test]
fn round_guess_out_of_range_keeps_state() {
    let mut round = Round::new("Ada", RoundOptions::default(), 5).unwrap();
    round.deal().unwrap();

    assert_eq!(
        round.guess(2).unwrap_err(),
        RoundError::Guess(GuessError::OutOfRange { index: 2, len: 2 })
    );
    assert_eq!(round.state(), RoundState::Guessing);
    assert!(round.guess(0).is_ok());
}

#[test]
fn round_deal_too_many_cards() {
    let options = RoundOptions::default().with_cards_dealt(DECK_SIZE + 1);
    let mut round = Round::new("Ada", options, 1).unwrap();

    assert_eq!(
        round.deal().unwrap_err(),
        RoundError::Draw(DrawError::Exhausted)
    );
    assert_eq!(round.state(), RoundState::Dealing);
    assert!(round.player().hand().is_empty());
    assert_eq!(round.deck().len(), DECK_SIZE);
}

#[test]
fn round_with_shuffle_deals_configured_count() {
    let options = RoundOptions::default()
        .with_cards_dealt(5)
        .with_shuffle_before_deal(true);
    let mut round = Round::new("Ada", options, 11).unwrap();
    round.deal().unwrap();

    let hand = round.player().hand();
    assert_eq!(hand.len(), 5);
    let winner = hand.max_index().unwrap();
    assert!(round.guess(winner).unwrap().correct);
}

#[test]
fn options_builder_sets_fields() {
    let options = RoundOptions::default()
        .with_cards_dealt(3)
        .with_shuffle_before_deal(true);
    assert_eq!(options.cards_dealt, 3);
    assert!(options.shuffle_before_deal);

    let defaults = RoundOptions::default();
    assert_eq!(defaults.cards_dealt, 2);
    assert!(!defaults.shuffle_before_deal);
}

#[test]
fn blank_player_name_rejected() {
    assert!(Round::new("", RoundOptions::default(), 1).is_err());
}
