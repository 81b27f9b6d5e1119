//! Coalescing of adjacent values
//!
//! Coalescing attempts to merge two values of the same kind into one. Whether
//! two values combine is decided by the type itself through the [`Coalesce`]
//! trait; the outcome is a [`Coalesced`] container holding zero, one or two
//! values:
//!
//! - **Empty**: the two values cancel each other out
//! - **Merged**: the two values were combined into one
//! - **Distinct**: the two values stay as they were, in their original order
//!
//! ## Lifting
//!
//! A single layer of wrapping around a coalescible type is itself coalescible:
//! the wrapped values are coalesced and the outcome is wrapped again. For
//! `Option`, an absent value on either side means there is nothing to pair, so
//! the two originals come back unmerged.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let merged = coalesce(first, second).into_iter().collect::<Vec<_>>();
//! let compacted = coalesce_adjacent(script);
//! ```

use std::array;
use std::iter::Flatten;

/// Outcome of coalescing two values
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Coalesced<T> {
    #[default]
    Empty,
    Merged(T),
    Distinct(T, T),
}

impl<T> Coalesced<T> {
    pub fn len(&self) -> usize {
        match self {
            Coalesced::Empty => 0,
            Coalesced::Merged(_) => 1,
            Coalesced::Distinct(..) => 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Coalesced::Empty)
    }

    pub fn is_merged(&self) -> bool {
        matches!(self, Coalesced::Merged(_))
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Coalesced<U> {
        match self {
            Coalesced::Empty => Coalesced::Empty,
            Coalesced::Merged(value) => Coalesced::Merged(f(value)),
            Coalesced::Distinct(first, second) => {
                let first = f(first);
                Coalesced::Distinct(first, f(second))
            }
        }
    }

    pub fn into_merged(self) -> Option<T> {
        match self {
            Coalesced::Merged(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> IntoIterator for Coalesced<T> {
    type Item = T;
    type IntoIter = Flatten<array::IntoIter<Option<T>, 2>>;

    fn into_iter(self) -> Self::IntoIter {
        let values = match self {
            Coalesced::Empty => [None, None],
            Coalesced::Merged(value) => [Some(value), None],
            Coalesced::Distinct(first, second) => [Some(first), Some(second)],
        };

        values.into_iter().flatten()
    }
}

/// Types that know how to merge with the value that follows them
pub trait Coalesce: Sized {
    /// Combines `self` with `next`
    ///
    /// Implementations return `Coalesced::Distinct(self, next)` when the two
    /// cannot be combined.
    fn coalesce(self, next: Self) -> Coalesced<Self>;
}

/// Coalesces two values: one element when they merge, both in order when they don't
pub fn coalesce<T: Coalesce>(first: T, second: T) -> Coalesced<T> {
    first.coalesce(second)
}

/// Folds a sequence by coalescing each value with the last value kept so far
///
/// When two values cancel out, the next value is coalesced with whatever
/// precedes them.
pub fn coalesce_adjacent<T: Coalesce>(values: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut coalesced = Vec::new();

    for value in values {
        match coalesced.pop() {
            Some(last) => coalesced.extend(coalesce(last, value)),
            None => coalesced.push(value),
        }
    }

    coalesced
}

impl<T: Coalesce> Coalesce for Option<T> {
    fn coalesce(self, next: Self) -> Coalesced<Self> {
        match (self, next) {
            (Some(first), Some(second)) => first.coalesce(second).map(Some),
            (first, second) => Coalesced::Distinct(first, second),
        }
    }
}

impl<T: Coalesce> Coalesce for Box<T> {
    fn coalesce(self, next: Self) -> Coalesced<Self> {
        (*self).coalesce(*next).map(Box::new)
    }
}
