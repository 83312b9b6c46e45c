//! Placeholder data for bulk-created items.
//!
//! Task text comes from a `TextProvider`; the default one strings lorem words
//! into sentences. Dates are produced once per store as a `BulkDates` pair and
//! shared by every item that store generates. The due-by date is unvalidated
//! text and can name month 13 or day 32.

use chrono::{Datelike, Local};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const LOREM_WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in", "voluptate",
    "velit", "esse", "cillum", "fugiat", "nulla", "pariatur", "excepteur", "sint", "occaecat",
    "cupidatat", "non", "proident", "sunt", "culpa", "qui", "officia", "deserunt", "mollit",
    "anim", "id", "est", "laborum",
];

/// Number of sentences in a generated task.
pub const TASK_SENTENCES: usize = 3;

/// Source of placeholder task text.
pub trait TextProvider {
    /// Returns `count` sentences of text. Never empty when `count > 0`.
    fn sentences(&mut self, count: usize) -> String;
}

/// Lorem-ipsum text backed by `rand`.
#[derive(Debug, Clone)]
pub struct LoremProvider {
    rng: StdRng,
}

impl LoremProvider {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic provider for reproducible fixtures.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn sentence(&mut self) -> String {
        let len = self.rng.gen_range(4..=10);
        let words: Vec<&str> = (0..len)
            .filter_map(|_| LOREM_WORDS.choose(&mut self.rng).copied())
            .collect();
        let mut sentence = words.join(" ");
        if let Some(first) = sentence.get(0..1) {
            let upper = first.to_uppercase();
            sentence.replace_range(0..1, &upper);
        }
        sentence.push('.');
        sentence
    }
}

impl Default for LoremProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProvider for LoremProvider {
    fn sentences(&mut self, count: usize) -> String {
        (0..count)
            .map(|_| self.sentence())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Creation and due-by dates shared by all bulk-generated items of a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkDates {
    pub created_on: String,
    pub due_on: String,
}

impl BulkDates {
    /// Today's local date plus a random due-by date.
    pub fn generate() -> Self {
        Self {
            created_on: today(),
            due_on: due_by_date(&mut rand::thread_rng()),
        }
    }
}

/// Local date as `M/D/YYYY`.
pub fn today() -> String {
    let now = Local::now().date_naive();
    format!("{}/{}/{}", now.month(), now.day(), now.year())
}

/// `M/D/YYYY` with month in 1..=13, day in 1..=32 and year in 2022..=2041.
pub fn due_by_date<R: Rng + ?Sized>(rng: &mut R) -> String {
    let month = rng.gen_range(1..=13);
    let day = rng.gen_range(1..=32);
    let year = rng.gen_range(2022..=2041);
    format!("{month}/{day}/{year}")
}
