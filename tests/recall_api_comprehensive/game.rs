//! Recall game state transitions

use phonerecall::{Contact, GameSession, KeypadKey, Outcome, Score};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;

fn new_game(store: &ContactStore<MemoryBackend>) -> GameSession<StdRng> {
    GameSession::with_rng(store.list_all(), StdRng::seed_from_u64(42))
}

fn type_in(game: &mut GameSession<StdRng>, number: &str) {
    for key in number.chars().filter_map(KeypadKey::from_char) {
        game.press(key);
    }
}

fn current_number(game: &GameSession<StdRng>) -> String {
    game.current().map(|c| c.number.clone()).unwrap_or_default()
}

#[test]
fn full_round_scores_and_restarts() {
    let store = memory_store();
    store.add("Alice", "01 02 03 04 05").unwrap();
    store.add("Bob", "+33 6 12 34 56 78").unwrap();
    let mut game = new_game(&store);
    let fr = cc("FR");

    // First card answered in the other notation.
    let first = current_number(&game);
    let answer = if first.starts_with('+') { "0612345678" } else { "+33102030405" };
    type_in(&mut game, answer);
    assert_eq!(game.check(fr), Outcome::Match);
    assert_eq!(game.score(), Score { correct: 1, total: 1 });
    assert!(!game.is_finished());

    game.next();
    assert_eq!(game.progress(), "2/2");
    type_in(&mut game, "0000000000");
    assert_eq!(game.check(fr), Outcome::Mismatch);
    assert_eq!(game.score(), Score { correct: 1, total: 2 });
    assert!(game.is_finished());

    game.next();
    assert_eq!(game.progress(), "1/2");
    assert_eq!(game.score(), Score::default());
    assert_eq!(game.outcome(), Outcome::Undecided);
}

#[test]
fn empty_store_gives_empty_game() {
    let store = memory_store();
    let game = new_game(&store);
    assert_eq!(game.progress(), "0/0");
    assert!(game.current().is_none());
}

#[test]
fn store_changes_reach_game_through_sync() {
    let store = memory_store();
    let a = store.add("A", "1").unwrap();
    store.add("B", "2").unwrap();
    let mut game = new_game(&store);
    type_in(&mut game, "1");
    game.check(cc("FR"));

    store
        .update(a.id, &phonerecall::ContactPatch::number("3"))
        .unwrap()
        .into_contact()
        .unwrap();
    assert!(!game.sync(store.list_all()));
    assert_eq!(game.score().total, 1);

    store.add("C", "4").unwrap();
    assert!(game.sync(store.list_all()));
    assert_eq!(game.progress(), "1/3");
    assert_eq!(game.score(), Score::default());
}

#[test]
fn keyboard_input_maps_to_keypad() {
    let contacts = vec![Contact::new("A", "+1").unwrap()];
    let mut game = GameSession::with_rng(contacts, StdRng::seed_from_u64(1));
    for key in ["=", "1", "x", "2", "Backspace"] {
        if let Some(key) = KeypadKey::from_keyboard(key) {
            game.press(key);
        }
    }
    assert_eq!(game.input(), "+1");
}
