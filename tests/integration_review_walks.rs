// End-to-end walks over decks loaded from csv text, checking the
// navigation guarantees over long action sequences.
use std::sync::Arc;

use flipdeck::{Action, Card, Deck, Session, ToggleLabel};
use proptest::prelude::*;

fn deck_of(n: usize) -> Arc<Deck> {
    let csv: String = (0..n).map(|i| format!("Question {i},Answer {i}\n")).collect();
    Arc::new(Deck::from_reader(csv.as_bytes()).unwrap())
}

#[test]
fn every_state_is_reachable() {
    let n = 4;
    let mut session = Session::new(deck_of(n));
    let mut seen = std::collections::HashSet::new();

    for _ in 0..n {
        seen.insert(session.position());
        session.toggle_answer();
        seen.insert(session.position());
        session.next();
    }

    assert_eq!(seen.len(), n * 2);
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![Just(Action::Toggle), Just(Action::Next), Just(Action::Prev)]
}

proptest! {
    #[test]
    fn csv_decks_survive_any_action_sequence(
        n in 1usize..=40,
        actions in prop::collection::vec(arb_action(), 0..1_000),
    ) {
        let mut session = Session::new(deck_of(n));
        for action in actions {
            session.apply(action);
            prop_assert!(session.index() < n);
            let expected = format!("Question {}", session.index());
            prop_assert_eq!(&session.current_card().question, &expected);
            if action != Action::Toggle {
                prop_assert!(!session.show_answer());
                prop_assert_eq!(session.toggle_label(), ToggleLabel::Reveal);
                prop_assert_eq!(session.display_text(), expected);
            }
        }
    }
}

#[test]
fn full_cycle_backwards_returns_home() {
    let n = 9;
    let mut session = Session::starting_at(deck_of(n), 5);
    for _ in 0..n {
        session.prev();
    }
    assert_eq!(session.index(), 5);
    assert_eq!(session.current_card(), &Card::new("Question 5", "Answer 5"));
}

#[test]
fn cards_are_dereferenced_fresh_after_each_move() {
    let mut session = Session::new(deck_of(3));
    let mut questions = Vec::new();
    for _ in 0..4 {
        questions.push(session.current_card().question.clone());
        session.next();
    }
    assert_eq!(
        questions,
        vec!["Question 0", "Question 1", "Question 2", "Question 0"]
    );
}
