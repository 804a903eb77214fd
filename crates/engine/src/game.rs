//! GameSession: recall quiz over a contact snapshot
//!
//! ## Design
//!
//! A session owns a shuffled copy of the contacts (the deck), a cursor, the
//! digits typed so far, the outcome of the current card and a running
//! score. It is never persisted.
//!
//! ```text
//! Undecided --check()--> Match | Mismatch --next()--> Undecided
//!                                  (last card) --next()--> new round
//! ```
//!
//! The session does not observe the store. The caller passes each fresh
//! snapshot to [`GameSession::sync`], which decides whether the deck must be
//! rebuilt.

use std::collections::HashSet;
use std::fmt;

use phonerecall_core::{Contact, ContactId};
use phonerecall_phone::{normalize_for_comparison, CountryCode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of checking the current guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    /// No guess checked yet for this card
    #[default]
    Undecided,
    /// The guess matched the stored number
    Match,
    /// The guess did not match
    Mismatch,
}

/// Running score of the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    /// Guesses that matched
    pub correct: u32,
    /// Guesses checked
    pub total: u32,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.correct, self.total)
    }
}

/// One key of the on-screen keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadKey {
    /// A digit, `0..=9`
    Digit(u8),
    /// The `+` international prefix
    Plus,
    /// Remove the last typed character
    Backspace,
}

impl KeypadKey {
    /// Map a typed character; `=` shares the physical key with `+`
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c.to_digit(10).map(|d| KeypadKey::Digit(d as u8)),
            '+' | '=' => Some(KeypadKey::Plus),
            _ => None,
        }
    }

    /// Map a keyboard key name such as `"7"`, `"+"` or `"Backspace"`
    pub fn from_keyboard(key: &str) -> Option<Self> {
        match key {
            "Backspace" | "Delete" => Some(KeypadKey::Backspace),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::from_char(c),
                    _ => None,
                }
            }
        }
    }
}

/// Quiz state over a shuffled deck
pub struct GameSession<R: Rng = StdRng> {
    deck: Vec<Contact>,
    cursor: usize,
    input: String,
    outcome: Outcome,
    score: Score,
    rng: R,
}

impl GameSession<StdRng> {
    /// Start a session shuffled from OS entropy
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self::with_rng(contacts, StdRng::from_entropy())
    }
}

impl<R: Rng> GameSession<R> {
    /// Start a session driven by `rng`
    pub fn with_rng(contacts: Vec<Contact>, rng: R) -> Self {
        let mut session = Self {
            deck: contacts,
            cursor: 0,
            input: String::new(),
            outcome: Outcome::Undecided,
            score: Score::default(),
            rng,
        };
        session.reshuffle();
        session
    }

    /// Shuffle the deck and start a new round
    pub fn reshuffle(&mut self) {
        // Fisher-Yates
        for i in (1..self.deck.len()).rev() {
            let j = self.rng.gen_range(0..=i);
            self.deck.swap(i, j);
        }
        self.cursor = 0;
        self.score = Score::default();
        self.reset_card();
    }

    /// Apply one keypad press; ignored once the card is decided
    pub fn press(&mut self, key: KeypadKey) {
        if self.outcome != Outcome::Undecided {
            return;
        }
        match key {
            KeypadKey::Digit(d) if d <= 9 => self.input.push(char::from(b'0' + d)),
            KeypadKey::Digit(_) => {}
            KeypadKey::Plus => self.input.push('+'),
            KeypadKey::Backspace => {
                self.input.pop();
            }
        }
    }

    /// Compare the typed number with the current card
    ///
    /// Both sides are normalized against `country`, so `0102030405` matches
    /// a stored `+33 1 02 03 04 05` when `country` is `FR`. Does nothing
    /// (and returns the current outcome) if the card is already decided,
    /// the input is empty, or the deck is empty.
    pub fn check(&mut self, country: CountryCode) -> Outcome {
        if self.outcome != Outcome::Undecided || self.input.is_empty() {
            return self.outcome;
        }
        let Some(card) = self.deck.get(self.cursor) else {
            return self.outcome;
        };

        let matched = normalize_for_comparison(&self.input, country)
            == normalize_for_comparison(&card.number, country);
        self.outcome = if matched {
            Outcome::Match
        } else {
            Outcome::Mismatch
        };
        self.score.total += 1;
        if matched {
            self.score.correct += 1;
        }
        tracing::debug!(
            target: "phonerecall::game",
            id = %card.id,
            matched,
            score = %self.score,
            "Checked guess"
        );
        self.outcome
    }

    /// Move to the next card; past the last one a new round starts
    pub fn next(&mut self) {
        if self.cursor + 1 < self.deck.len() {
            self.cursor += 1;
            self.reset_card();
        } else {
            self.reshuffle();
        }
    }

    /// Reconcile the deck with a fresh store snapshot
    ///
    /// A different number of contacts, or a different set of ids, rebuilds
    /// the session from scratch. Otherwise card contents are refreshed in
    /// place so edits show up without losing progress. Returns `true` when
    /// the session was rebuilt.
    pub fn sync(&mut self, contacts: Vec<Contact>) -> bool {
        let same_ids = contacts.len() == self.deck.len() && {
            let ids: HashSet<ContactId> = self.deck.iter().map(|c| c.id).collect();
            contacts.iter().all(|c| ids.contains(&c.id))
        };
        if !same_ids {
            tracing::debug!(
                target: "phonerecall::game",
                previous = self.deck.len(),
                current = contacts.len(),
                "Contacts changed, restarting session"
            );
            self.deck = contacts;
            self.reshuffle();
            return true;
        }

        for card in &mut self.deck {
            if let Some(fresh) = contacts.iter().find(|c| c.id == card.id) {
                card.clone_from(fresh);
            }
        }
        false
    }

    /// Card being guessed, `None` when the deck is empty
    pub fn current(&self) -> Option<&Contact> {
        self.deck.get(self.cursor)
    }

    /// Digits typed for the current card
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Outcome of the current card
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Score of the current round
    pub fn score(&self) -> Score {
        self.score
    }

    /// `"i/n"` with a 1-based position, `"0/0"` for an empty deck
    pub fn progress(&self) -> String {
        if self.deck.is_empty() {
            "0/0".to_string()
        } else {
            format!("{}/{}", self.cursor + 1, self.deck.len())
        }
    }

    /// True once the last card of the round has been checked
    pub fn is_finished(&self) -> bool {
        !self.deck.is_empty()
            && self.cursor + 1 == self.deck.len()
            && self.outcome != Outcome::Undecided
    }

    /// Cards in the deck
    pub fn len(&self) -> usize {
        self.deck.len()
    }

    /// True when there is nothing to practice
    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    fn reset_card(&mut self) {
        self.input.clear();
        self.outcome = Outcome::Undecided;
    }
}

impl<R: Rng> fmt::Debug for GameSession<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("cards", &self.deck.len())
            .field("cursor", &self.cursor)
            .field("input", &self.input)
            .field("outcome", &self.outcome)
            .field("score", &self.score)
            .finish_non_exhaustive()
    }
}
