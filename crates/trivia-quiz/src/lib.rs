//! Quiz selection library for the trivia API
//!
//! This crate picks the next question of an in-progress quiz. The quiz session
//! lives entirely on the client: every call receives the ids the player has
//! already seen and returns one question that is not among them.

use std::collections::HashSet;

use rand::Rng;

/// Category id the client sends to mean "questions from every category".
pub const ALL_CATEGORIES_ID: i64 = 0;

/// Which questions are eligible for a quiz round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Every question, regardless of category
    Any,
    /// Only questions of the given category
    Category(i64),
}

impl CategoryFilter {
    /// Build a filter from the category id sent by the client.
    ///
    /// `0` is the "all categories" sentinel; any other value selects that
    /// category, whether or not it exists.
    ///
    /// # Examples
    /// ```
    /// use trivia_quiz::CategoryFilter;
    ///
    /// assert_eq!(CategoryFilter::from_id(0), CategoryFilter::Any);
    /// assert_eq!(CategoryFilter::from_id(3), CategoryFilter::Category(3));
    /// ```
    pub const fn from_id(id: i64) -> Self {
        if id == ALL_CATEGORIES_ID {
            Self::Any
        } else {
            Self::Category(id)
        }
    }

    /// The category id to filter on, if any.
    pub const fn category_id(self) -> Option<i64> {
        match self {
            Self::Any => None,
            Self::Category(id) => Some(id),
        }
    }

    /// Label used for logs and metrics.
    pub fn label(self) -> String {
        match self {
            Self::Any => "all".to_string(),
            Self::Category(id) => id.to_string(),
        }
    }
}

/// Pick one question whose id is not in `previous`, uniformly at random.
///
/// # Arguments
///
/// * `candidates` - The question pool for the current category filter
/// * `previous` - Ids of the questions already asked in this quiz
/// * `id_of` - Extracts the question id from a candidate
/// * `rng` - Source of randomness
///
/// # Returns
///
/// `None` once every candidate has been asked, which signals the end of the quiz.
pub fn select_next<T, F, R>(
    candidates: Vec<T>,
    previous: &HashSet<i64>,
    id_of: F,
    rng: &mut R,
) -> Option<T>
where
    F: Fn(&T) -> i64,
    R: Rng + ?Sized,
{
    let mut unseen: Vec<T> = candidates
        .into_iter()
        .filter(|candidate| !previous.contains(&id_of(candidate)))
        .collect();

    if unseen.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..unseen.len());
    Some(unseen.swap_remove(index))
}

/// Number of questions still available in `candidates` after excluding `previous`.
pub fn remaining<T, F>(candidates: &[T], previous: &HashSet<i64>, id_of: F) -> usize
where
    F: Fn(&T) -> i64,
{
    candidates
        .iter()
        .filter(|candidate| !previous.contains(&id_of(candidate)))
        .count()
}
