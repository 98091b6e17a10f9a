//! Table integration tests.

use core::time::Duration;

use bjtable::{
    Card, Chips, ConsoleClosed, Contenders, DeckExhausted, Deck, GameOptions, GameSession,
    LapError, MAX_PLAYERS, Outcome, ParticipantState, Payout, Rank, Recipient, RemainderPolicy,
    ScriptedConsole, SeatError, Suit, resolve,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn options() -> GameOptions {
    GameOptions::default()
}

fn table(names: &[&str], dealer_plays: bool) -> GameSession {
    let mut session = GameSession::new(options(), 1);
    for name in names {
        session.seat(*name, Chips::from_units(100)).unwrap();
    }
    session.set_dealer_plays(dealer_plays);
    session
}

fn units(units: i64) -> Chips {
    Chips::from_units(units)
}

#[test]
fn contenders_keep_every_tied_seat() {
    let contenders = Contenders::select([18, 20, 20, 24]);
    assert_eq!(contenders.best_value(), Some(20));
    assert_eq!(contenders.seats(), &[1, 2]);

    let contenders = Contenders::select([22, 25]);
    assert_eq!(contenders.best_value(), None);
    assert!(contenders.is_empty());

    let contenders = Contenders::select([21]);
    assert_eq!(contenders.seats(), &[0]);
}

#[test]
fn dealer_tie_splits_with_best_player() {
    let contenders = Contenders::select([20, 17]);
    let resolution = resolve(units(10), 2, Some(20), &contenders, RemainderPolicy::FirstSeats);

    assert_eq!(resolution.pot, units(30));
    assert_eq!(resolution.outcome, Outcome::Draw);
    assert_eq!(
        resolution.payouts,
        vec![
            Payout {
                recipient: Recipient::Player(0),
                amount: units(15)
            },
            Payout {
                recipient: Recipient::Dealer,
                amount: units(15)
            },
        ]
    );
}

#[test]
fn no_dealer_tie_splits_among_players() {
    let contenders = Contenders::select([19, 17, 19]);
    let resolution = resolve(units(5), 3, None, &contenders, RemainderPolicy::FirstSeats);

    assert_eq!(resolution.pot, units(15));
    assert_eq!(resolution.outcome, Outcome::PlayersWin);
    assert_eq!(resolution.payouts.len(), 2);
    assert_eq!(resolution.payouts[0].recipient, Recipient::Player(0));
    assert_eq!(resolution.payouts[1].recipient, Recipient::Player(2));
    assert!(
        resolution
            .payouts
            .iter()
            .all(|payout| payout.amount == Chips::from_cents(750))
    );
}

#[test]
fn all_busted_goes_to_dealer_or_nobody() {
    let contenders = Contenders::select([23, 25]);

    let with_dealer = resolve(units(10), 2, Some(14), &contenders, RemainderPolicy::FirstSeats);
    assert_eq!(with_dealer.outcome, Outcome::DealerWins);
    assert_eq!(
        with_dealer.payouts,
        vec![Payout {
            recipient: Recipient::Dealer,
            amount: units(30)
        }]
    );

    let without_dealer = resolve(units(10), 2, None, &contenders, RemainderPolicy::FirstSeats);
    assert_eq!(without_dealer.outcome, Outcome::NoWinner);
    assert_eq!(without_dealer.pot, units(20));
    assert!(without_dealer.payouts.is_empty());
}

#[test]
fn dealer_above_best_takes_pot_and_dealer_bust_pays_players() {
    let contenders = Contenders::select([18, 16]);

    let dealer_wins = resolve(units(10), 2, Some(19), &contenders, RemainderPolicy::FirstSeats);
    assert_eq!(dealer_wins.outcome, Outcome::DealerWins);
    assert_eq!(dealer_wins.payouts[0].amount, units(30));

    let dealer_bust = resolve(units(10), 2, Some(24), &contenders, RemainderPolicy::FirstSeats);
    assert_eq!(dealer_bust.outcome, Outcome::PlayersWin);
    assert_eq!(
        dealer_bust.payouts,
        vec![Payout {
            recipient: Recipient::Player(0),
            amount: units(30)
        }]
    );
}

#[test]
fn draw_remainder_follows_policy() {
    let contenders = Contenders::select([20, 20, 15]);

    let first = resolve(units(1), 3, Some(20), &contenders, RemainderPolicy::FirstSeats);
    let amounts: Vec<i64> = first.payouts.iter().map(|p| p.amount.cents()).collect();
    assert_eq!(amounts, vec![134, 133, 133]);
    assert_eq!(first.payouts[2].recipient, Recipient::Dealer);

    let forfeit = resolve(units(1), 3, Some(20), &contenders, RemainderPolicy::Forfeit);
    let amounts: Vec<i64> = forfeit.payouts.iter().map(|p| p.amount.cents()).collect();
    assert_eq!(amounts, vec![133, 133, 133]);
}

#[test]
fn blackjack_against_dealer_reaching_21_is_a_draw() {
    let mut session = table(&["Ann"], true);
    let deck = Deck::from_draws(&[
        card(Suit::Spades, Rank::King),
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Clubs, Rank::Five),
        card(Suit::Diamonds, Rank::Six),
        card(Suit::Hearts, Rank::Ten),
    ]);
    let mut console = ScriptedConsole::new(["10"]);

    let result = session.play_lap_with_deck(&mut console, deck).unwrap();

    assert_eq!(result.lap, 1);
    assert_eq!(result.outcome, Outcome::Draw);
    assert_eq!(result.pot, units(20));
    assert_eq!(result.best_value, Some(21));
    assert_eq!(result.dealer_value, Some(21));
    assert_eq!(result.paid_to(Recipient::Player(0)), units(10));
    assert_eq!(result.paid_to(Recipient::Dealer), units(10));

    assert!(console.shows("Ann - 90, bets: 10, win: 0"));
    assert!(console.shows("Ann, BLACKJACK."));
    assert!(console.shows("Dealer takes a card..."));
    assert_eq!(console.count_line("Draw"), 1);
    assert!(!console.prompts().iter().any(|p| p.starts_with("Next card")));
    assert_eq!(console.pauses(), &[Duration::from_secs(3)]);

    let ann = session.player(0).unwrap();
    assert_eq!(ann.cash(), Some(units(100)));
    assert_eq!(ann.total_winnings(), units(10));
    assert_eq!(ann.state(), ParticipantState::Settled);
    assert_eq!(session.dealer().total_winnings(), units(10));
    assert_eq!(session.dealer().total_bets(), units(10));
    assert_eq!(session.dealer().state(), ParticipantState::Settled);
}

#[test]
fn dealer_standing_higher_takes_pot_and_hides_hole_card() {
    let mut session = table(&["Ann"], true);
    let deck = Deck::from_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Seven),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Eight),
    ]);
    let mut console = ScriptedConsole::new(["10", "n"]);

    let result = session.play_lap_with_deck(&mut console, deck).unwrap();

    assert_eq!(result.outcome, Outcome::DealerWins);
    assert_eq!(result.paid_to(Recipient::Dealer), units(20));
    assert_eq!(result.dealer_value, Some(18));
    assert!(console.shows("Dealer wins 20"));
    assert!(console.pauses().is_empty());
    assert_eq!(session.player(0).unwrap().cash(), Some(units(90)));

    let lines = console.lines();
    let up_card = lines.iter().position(|l| l == "10 Clubs").unwrap();
    assert_eq!(lines[up_card - 1], "Dealer");
    assert_eq!(lines[up_card + 1], "[?]");

    let reveal = lines.iter().position(|l| l == "Dealer's turn:").unwrap();
    assert!(up_card < reveal);
    assert!(!lines[..reveal].iter().any(|l| l.contains("8 Diamonds")));
    assert!(lines[reveal..].iter().any(|l| l.contains("8 Diamonds")));
}

#[test]
fn dealer_bust_pays_best_player() {
    let mut session = table(&["Ann"], true);
    let deck = Deck::from_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Eight),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Six),
        card(Suit::Clubs, Rank::Nine),
    ]);
    let mut console = ScriptedConsole::new(["10", "n"]);

    let result = session.play_lap_with_deck(&mut console, deck).unwrap();

    assert_eq!(result.outcome, Outcome::PlayersWin);
    assert_eq!(result.dealer_value, Some(25));
    assert!(console.shows("Ann, you win 20"));
    assert_eq!(session.player(0).unwrap().cash(), Some(units(110)));
    assert_eq!(session.dealer().hand().len(), 3);
}

#[test]
fn busted_table_skips_dealer_turn() {
    let mut session = table(&["Ann"], true);
    let deck = Deck::from_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Six),
        card(Suit::Clubs, Rank::Seven),
        card(Suit::Diamonds, Rank::Seven),
        card(Suit::Clubs, Rank::Nine),
    ]);
    let mut console = ScriptedConsole::new(["10", "y"]);

    let result = session.play_lap_with_deck(&mut console, deck).unwrap();

    assert_eq!(result.outcome, Outcome::DealerWins);
    assert_eq!(result.best_value, None);
    assert_eq!(result.dealer_value, Some(14));
    assert!(console.shows("Ann, BUST."));
    assert!(!console.shows("Dealer's turn:"));
    assert_eq!(session.dealer().hand().len(), 2);
    assert_eq!(session.dealer().state(), ParticipantState::Settled);
    assert_eq!(session.dealer().total_winnings(), units(20));
}

#[test]
fn busted_table_without_dealer_voids_pot() {
    let mut session = table(&["Ann", "Bob"], false);
    let deck = Deck::from_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Six),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Five),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Hearts, Rank::King),
    ]);
    let mut console = ScriptedConsole::new(["5", "y", "y"]);

    let result = session.play_lap_with_deck(&mut console, deck).unwrap();

    assert_eq!(result.outcome, Outcome::NoWinner);
    assert_eq!(result.pot, units(10));
    assert!(result.payouts.is_empty());
    assert_eq!(result.dealer_value, None);
    for player in session.players() {
        assert_eq!(player.cash(), Some(units(95)));
    }
    assert!(session.dealer().hand().is_empty());
}

#[test]
fn tied_players_split_without_dealer() {
    let mut session = table(&["Ann", "Bob", "Cy"], false);
    let deck = Deck::from_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Ten),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Diamonds, Rank::Ace),
        card(Suit::Hearts, Rank::Seven),
        card(Suit::Spades, Rank::Queen),
    ]);
    let mut console = ScriptedConsole::new(["5", "n", "n", "n"]);

    let result = session.play_lap_with_deck(&mut console, deck).unwrap();

    assert_eq!(result.outcome, Outcome::PlayersWin);
    assert_eq!(result.pot, units(15));
    assert_eq!(result.paid_to(Recipient::Player(0)), Chips::from_cents(750));
    assert_eq!(result.paid_to(Recipient::Player(1)), Chips::from_cents(750));
    assert_eq!(result.paid_to(Recipient::Player(2)), Chips::ZERO);
    assert_eq!(console.count_line("Draw"), 1);
    assert!(console.shows("Bob, you win 7.50"));

    assert_eq!(session.player(0).unwrap().cash(), Some(Chips::from_cents(10250)));
    assert_eq!(session.player(2).unwrap().cash(), Some(units(95)));
}

#[test]
fn invalid_tokens_are_reprompted() {
    let mut session = table(&["Ann"], true);
    let deck = Deck::from_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Seven),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Eight),
    ]);
    let mut console = ScriptedConsole::new(["ten", "-3", "0", "10", "maybe", "n"]);

    let result = session.play_lap_with_deck(&mut console, deck).unwrap();

    assert_eq!(result.bet, units(10));
    assert_eq!(session.player(0).unwrap().total_bets(), units(10));
    assert_eq!(console.count_line("Invalid bet value"), 3);
    let hit_prompts = console
        .prompts()
        .iter()
        .filter(|p| p.starts_with("Next card"))
        .count();
    assert_eq!(hit_prompts, 2);
    assert_eq!(console.remaining(), 0);
}

#[test]
fn hitting_to_21_stops_the_turn() {
    let mut session = table(&["Ann"], true);
    let deck = Deck::from_draws(&[
        card(Suit::Hearts, Rank::Five),
        card(Suit::Spades, Rank::Four),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Nine),
        card(Suit::Clubs, Rank::Three),
        card(Suit::Hearts, Rank::Nine),
        card(Suit::Diamonds, Rank::Two),
    ]);
    let mut console = ScriptedConsole::new(["10", "y", "y"]);

    let result = session.play_lap_with_deck(&mut console, deck).unwrap();

    let ann = session.player(0).unwrap();
    assert_eq!(ann.hand().len(), 4);
    assert_eq!(ann.hand().value(), 21);
    assert!(console.shows("Ann, BLACKJACK."));
    assert_eq!(result.dealer_value, Some(21));
    assert_eq!(result.outcome, Outcome::Draw);
}

#[test]
fn short_deck_fails_the_deal() {
    let mut session = table(&["Ann"], true);
    let deck = Deck::from_draws(&[
        card(Suit::Hearts, Rank::Five),
        card(Suit::Spades, Rank::Four),
        card(Suit::Clubs, Rank::Ten),
    ]);
    let mut console = ScriptedConsole::new(["10"]);

    let err = session.play_lap_with_deck(&mut console, deck).unwrap_err();
    assert_eq!(err, LapError::DeckExhausted(DeckExhausted));

    let ann = session.player(0).unwrap();
    assert_eq!(ann.cash(), Some(units(100)));
    assert_eq!(ann.total_bets(), Chips::ZERO);
    assert_eq!(session.dealer().total_bets(), Chips::ZERO);
    assert_eq!(session.laps_played(), 0);
}

#[test]
fn input_closing_mid_turn_refunds_the_lap() {
    let mut session = table(&["Ann", "Bob"], true);
    let deck = Deck::from_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Seven),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Diamonds, Rank::Eight),
        card(Suit::Hearts, Rank::Queen),
        card(Suit::Spades, Rank::Eight),
    ]);
    let mut console = ScriptedConsole::new(["10"]);

    let err = session.play_lap_with_deck(&mut console, deck).unwrap_err();
    assert_eq!(err, LapError::ConsoleClosed(ConsoleClosed));
    assert_eq!(console.prompts().last().unwrap(), "Next card? (y/n) ");

    for player in session.players() {
        assert_eq!(player.cash(), Some(units(100)));
        assert_eq!(player.total_bets(), Chips::ZERO);
        assert_eq!(player.total_winnings(), Chips::ZERO);
        assert_eq!(player.state(), ParticipantState::NoHand);
        assert!(player.hand().is_empty());
    }
    assert_eq!(session.dealer().total_bets(), Chips::ZERO);
    assert_eq!(session.laps_played(), 0);

    let mut console = ScriptedConsole::new(Vec::<String>::new());
    session.play_lap(&mut console).unwrap_err();
    assert_eq!(session.laps_played(), 0);
}

#[test]
fn empty_deck_fails_a_hit() {
    let mut session = table(&["Ann"], true);
    let deck = Deck::from_draws(&[
        card(Suit::Hearts, Rank::Two),
        card(Suit::Spades, Rank::Three),
        card(Suit::Clubs, Rank::Four),
        card(Suit::Diamonds, Rank::Five),
    ]);
    let mut console = ScriptedConsole::new(["10", "y"]);

    let err = session.play_lap_with_deck(&mut console, deck).unwrap_err();
    assert_eq!(err, LapError::DeckExhausted(DeckExhausted));
}

#[test]
fn closed_console_and_empty_table() {
    let mut session = table(&["Ann"], true);
    let mut console = ScriptedConsole::new(Vec::<String>::new());
    assert_eq!(
        session.play_lap(&mut console).unwrap_err(),
        LapError::ConsoleClosed(ConsoleClosed)
    );

    let mut empty = GameSession::new(options(), 1);
    assert_eq!(
        empty.play_lap(&mut console).unwrap_err(),
        LapError::NoPlayers
    );
    empty.display_seats(&mut console);
    assert!(console.shows("No players"));
}

#[test]
fn run_stops_at_limit_or_closed_console() {
    let mut session = GameSession::new(options().with_dealer_delay(Duration::ZERO), 99);
    session.seat("Ann", units(100)).unwrap();
    session.set_dealer_plays(true);

    let mut console = ScriptedConsole::new(["10", "n", "10", "n", "10", "n"]);
    assert_eq!(session.run(&mut console, Some(2)), Ok(2));
    assert_eq!(session.laps_played(), 2);
    assert_eq!(session.dealer().total_bets(), units(20));

    let mut closed = ScriptedConsole::new(Vec::<String>::new());
    assert_eq!(session.run(&mut closed, None), Ok(0));
    assert_eq!(session.laps_played(), 2);
    assert_eq!(session.dealer().total_bets(), units(20));
}

#[test]
fn cash_and_counters_persist_across_laps() {
    let mut session = table(&["Ann"], true);
    let lap = || {
        Deck::from_draws(&[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Spades, Rank::Seven),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Eight),
        ])
    };
    let mut console = ScriptedConsole::new(["10", "n", "20", "n"]);

    session.play_lap_with_deck(&mut console, lap()).unwrap();
    let second = session.play_lap_with_deck(&mut console, lap()).unwrap();

    assert_eq!(second.lap, 2);
    let ann = session.player(0).unwrap();
    assert_eq!(ann.cash(), Some(units(70)));
    assert_eq!(ann.total_bets(), units(30));
    assert_eq!(ann.hand().len(), 2);
    assert_eq!(session.dealer().total_winnings(), units(60));
}

#[test]
fn seats_are_limited() {
    let mut session = GameSession::new(options().with_max_players(2), 1);
    assert_eq!(session.seat("Ann", units(10)), Ok(0));
    assert_eq!(session.seat("Bob", units(10)), Ok(1));
    assert_eq!(session.seat("Cy", units(10)), Err(SeatError::TableFull));

    assert_eq!(session.add_cash(1, units(5)), Ok(units(15)));
    assert_eq!(session.add_cash(4, units(5)), Err(SeatError::NotFound));
}

#[test]
fn seat_limit_stays_within_one_to_five() {
    assert_eq!(options().with_max_players(26).max_players, MAX_PLAYERS);
    assert_eq!(options().with_max_players(0).max_players, 1);

    let mut session = GameSession::new(options().with_max_players(26), 1);
    for name in ["Ann", "Bob", "Cy", "Di", "Ed"] {
        session.seat(name, units(10)).unwrap();
    }
    assert_eq!(session.seat("Flo", units(10)), Err(SeatError::TableFull));

    let unchecked = GameOptions {
        max_players: 0,
        ..options()
    };
    assert_eq!(unchecked.seat_limit(), 1);
    let mut session = GameSession::new(unchecked, 1);
    assert_eq!(session.seat("Ann", units(10)), Ok(0));

    let mut console = ScriptedConsole::new(["1", "Solo", "25"]);
    let session = GameSession::invite(&mut console, unchecked, 5).unwrap();
    assert_eq!(session.players().len(), 1);
    assert_eq!(
        console.prompts()[0],
        "How many human players will play (max 1)? "
    );

    let wide = GameOptions {
        max_players: 26,
        ..options()
    };
    let mut console = ScriptedConsole::new(["6", "2", "n", "Ann", "1", "Bob", "1"]);
    let session = GameSession::invite(&mut console, wide, 5).unwrap();
    assert_eq!(session.players().len(), 2);
    assert_eq!(
        console.prompts()[0],
        "How many human players will play (max 5)? "
    );
}

#[test]
fn invite_asks_for_every_seat() {
    let mut console = ScriptedConsole::new([
        "7", "0", "2", "x", "n", "Ann", "lots", "100", "", "50",
    ]);

    let session = GameSession::invite(&mut console, options(), 5).unwrap();

    assert!(!session.dealer_plays());
    assert_eq!(session.players().len(), 2);
    assert_eq!(session.players()[0].name(), "Ann");
    assert_eq!(session.players()[0].cash(), Some(units(100)));
    assert_eq!(session.players()[1].name(), "Player 2");
    assert_eq!(session.players()[1].cash(), Some(units(50)));
    assert_eq!(console.count_line("Invalid cash amount"), 1);
    assert_eq!(console.remaining(), 0);
    assert_eq!(
        console.prompts()[0],
        "How many human players will play (max 5)? "
    );
}

#[test]
fn lone_player_always_faces_dealer() {
    let mut console = ScriptedConsole::new(["1", "Solo", "25"]);

    let session = GameSession::invite(&mut console, options(), 5).unwrap();

    assert!(session.dealer_plays());
    assert_eq!(session.players()[0].name(), "Solo");
    assert!(
        !console
            .prompts()
            .iter()
            .any(|p| p.starts_with("Play with dealer"))
    );
}

#[test]
fn invite_stops_when_input_ends() {
    let mut console = ScriptedConsole::new(["2", "y", "Ann"]);
    assert_eq!(
        GameSession::invite(&mut console, options(), 5).unwrap_err(),
        ConsoleClosed
    );
}
