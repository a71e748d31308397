//! Property tests for scoring and the game session state machine.

use hadej_slovo::core::{EXTENDED_LETTERS, Outcome, WORD_LENGTH, Word, score};
use hadej_slovo::game::{GameStatus, KeyboardFeedback, Session, Submission};
use hadej_slovo::wordlists::{RandomPicker, Vocabulary};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

const VOCABULARY: [&str; 6] = ["apple", "lemon", "melon", "onion", "kočka", "lžíce"];

fn alphabet() -> Vec<char> {
    ('A'..='Z').chain(EXTENDED_LETTERS).collect()
}

/// A letter drawn from the whole accepted alphabet.
fn arb_letter() -> impl Strategy<Value = char> {
    prop::sample::select(alphabet())
}

/// A word over a small alphabet so repeated letters are common.
fn arb_dense_word() -> impl Strategy<Value = Word> {
    prop::array::uniform5(prop::sample::select(vec!['A', 'E', 'L', 'O', 'Č']))
        .prop_map(|letters| Word::from_letters(letters).unwrap())
}

fn arb_word() -> impl Strategy<Value = Word> {
    prop_oneof![
        prop::array::uniform5(arb_letter()).prop_map(|letters| Word::from_letters(letters).unwrap()),
        arb_dense_word(),
    ]
}

#[derive(Debug, Clone)]
enum Action {
    Type(char),
    TypeWord(usize),
    Delete,
    Submit,
    Reset,
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => arb_letter().prop_map(Action::Type),
        3 => (0..VOCABULARY.len()).prop_map(Action::TypeWord),
        1 => Just(Action::Delete),
        3 => Just(Action::Submit),
        1 => Just(Action::Reset),
    ]
}

fn count(word: &Word, letter: char) -> usize {
    word.letter_counts().get(&letter).copied().map_or(0, usize::from)
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// A position is Correct exactly when the letters agree there.
    #[test]
    fn correct_iff_same_letter(guess in arb_word(), solution in arb_word()) {
        let feedback = score(&guess, &solution);
        for (i, outcome) in feedback.outcomes().iter().enumerate() {
            let same = guess.letter_at(i) == solution.letter_at(i);
            prop_assert_eq!(*outcome == Outcome::Correct, same);
        }
    }

    /// A letter is never marked Correct or Present more often than the solution holds it.
    #[test]
    fn marks_never_exceed_solution_count(guess in arb_word(), solution in arb_word()) {
        let feedback = score(&guess, &solution);
        for letter in guess.letters() {
            let marked = guess
                .letters()
                .iter()
                .zip(feedback.outcomes())
                .filter(|&(l, o)| l == letter && matches!(o, Outcome::Correct | Outcome::Present))
                .count();
            prop_assert!(marked <= count(&solution, *letter));
        }
    }

    /// Correct plus Present equals the multiset overlap of the two words.
    #[test]
    fn marks_equal_letter_overlap(guess in arb_word(), solution in arb_word()) {
        let feedback = score(&guess, &solution);
        let overlap: usize = guess
            .letter_counts()
            .iter()
            .map(|(&letter, &n)| usize::from(n).min(count(&solution, letter)))
            .sum();
        prop_assert_eq!(feedback.count_correct() + feedback.count_present(), overlap);
    }

    /// Scoring is deterministic and only ever produces scored outcomes.
    #[test]
    fn scoring_is_deterministic(guess in arb_word(), solution in arb_word()) {
        let feedback = score(&guess, &solution);
        prop_assert_eq!(feedback, score(&guess, &solution));
        prop_assert!(feedback.outcomes().iter().all(|o| o.is_scored()));
        prop_assert_eq!(feedback.is_perfect(), guess == solution);
    }

    /// The keyboard never downgrades a letter once it was Correct.
    #[test]
    fn keyboard_keeps_correct(solution in arb_dense_word(), guesses in prop::collection::vec(arb_dense_word(), 1..8)) {
        let history: Vec<_> = guesses
            .iter()
            .map(|&g| hadej_slovo::game::Guess::scored(g, &solution))
            .collect();
        let keyboard = KeyboardFeedback::from_history(&history);

        for guess in &history {
            for (letter, outcome) in guess.cells() {
                if outcome == Outcome::Correct {
                    prop_assert_eq!(keyboard.get(letter), Some(Outcome::Correct));
                }
            }
        }
    }

    /// Random key sequences keep the session within its state machine.
    #[test]
    fn session_stays_consistent(
        seed in any::<u64>(),
        max_guesses in 1usize..8,
        actions in prop::collection::vec(arb_action(), 0..80),
    ) {
        let vocabulary = Vocabulary::from_words(VOCABULARY);
        let picker = RandomPicker::new(StdRng::seed_from_u64(seed));
        let mut session = Session::new(&vocabulary, picker, max_guesses);

        for action in actions {
            let before = session.status();
            let guesses_before = session.history().len();

            match action {
                Action::Type(ch) => {
                    session.type_letter(ch);
                }
                Action::TypeWord(index) => {
                    for ch in VOCABULARY[index].chars() {
                        session.type_letter(ch);
                    }
                }
                Action::Delete => {
                    session.delete_letter();
                }
                Action::Submit => match session.submit() {
                    Ok(Submission::Ignored) => prop_assert!(before.is_over()),
                    Ok(Submission::Won { attempts }) => {
                        prop_assert_eq!(attempts, session.history().len());
                        prop_assert_eq!(session.status(), GameStatus::Won);
                    }
                    Ok(Submission::Lost { solution }) => {
                        prop_assert_eq!(&solution, session.solution());
                        prop_assert_eq!(session.status(), GameStatus::Lost);
                    }
                    Ok(Submission::Continue(_)) => {
                        prop_assert_eq!(session.history().len(), guesses_before + 1);
                    }
                    Err(_) => prop_assert_eq!(session.history().len(), guesses_before),
                },
                Action::Reset => {
                    session.reset();
                    prop_assert_eq!(session.status(), GameStatus::Playing);
                    prop_assert!(session.history().is_empty());
                    prop_assert!(session.keyboard().is_empty());
                    continue;
                }
            }

            prop_assert!(session.history().len() <= max_guesses);
            prop_assert!(session.pending().len() <= WORD_LENGTH);
            prop_assert!(vocabulary.contains(session.solution()));
            if before.is_over() {
                prop_assert_eq!(session.status(), before);
            }
            match session.status() {
                GameStatus::Playing => prop_assert!(session.history().len() < max_guesses),
                GameStatus::Won => {
                    let last = session.history().last().unwrap();
                    prop_assert!(last.feedback().is_perfect());
                }
                GameStatus::Lost => {
                    prop_assert_eq!(session.history().len(), max_guesses);
                    prop_assert!(!session.history().iter().any(|g| g.feedback().is_perfect()));
                }
            }
        }
    }
}
