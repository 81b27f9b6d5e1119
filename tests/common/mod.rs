#![allow(dead_code)]

use std::cell::Cell;
use structdiff::{Cost, Patch};

/// Diff type used across the solver tests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Patch(Patch<T>),
    Copy(T),
    Change(T, T),
}

impl<T> From<Patch<T>> for Edit<T> {
    fn from(patch: Patch<T>) -> Self {
        Edit::Patch(patch)
    }
}

pub fn insert<T>(value: T) -> Edit<T> {
    Edit::Patch(Patch::Insert(value))
}

pub fn delete<T>(value: T) -> Edit<T> {
    Edit::Patch(Patch::Delete(value))
}

/// Comparable only when equal, producing a copy
pub fn equal_only<T: Clone + PartialEq>(a: &T, b: &T) -> Option<Edit<T>> {
    (a == b).then(|| Edit::Copy(a.clone()))
}

/// Comparable when equal ignoring case; a case difference is a change
pub fn case_insensitive(a: &char, b: &char) -> Option<Edit<char>> {
    if a == b {
        Some(Edit::Copy(*a))
    } else if a.eq_ignore_ascii_case(b) {
        Some(Edit::Change(*a, *b))
    } else {
        None
    }
}

/// Inserts and deletes cost one, changes cost one, copies are free
pub fn unit_cost<T>(edit: &Edit<T>) -> Cost {
    match edit {
        Edit::Patch(_) | Edit::Change(..) => 1,
        Edit::Copy(_) => 0,
    }
}

pub fn script_cost<T>(script: &[Edit<T>]) -> Cost {
    script.iter().map(unit_cost).sum()
}

/// Reconstructs the old side of a script
pub fn old_side<T: Clone>(script: &[Edit<T>]) -> Vec<T> {
    script
        .iter()
        .filter_map(|edit| match edit {
            Edit::Patch(patch) => patch.before().cloned(),
            Edit::Copy(value) | Edit::Change(value, _) => Some(value.clone()),
        })
        .collect()
}

/// Reconstructs the new side of a script
pub fn new_side<T: Clone>(script: &[Edit<T>]) -> Vec<T> {
    script
        .iter()
        .filter_map(|edit| match edit {
            Edit::Patch(patch) => patch.after().cloned(),
            Edit::Copy(value) | Edit::Change(_, value) => Some(value.clone()),
        })
        .collect()
}

/// Wraps a comparison and counts how often it is invoked
pub struct CountingCompare<F> {
    compare: F,
    calls: Cell<usize>,
}

impl<F> CountingCompare<F> {
    pub fn new(compare: F) -> Self {
        Self {
            compare,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn call<T, D>(&self, a: &T, b: &T) -> Option<D>
    where
        F: Fn(&T, &T) -> Option<D>,
    {
        self.calls.set(self.calls.get() + 1);
        (self.compare)(a, b)
    }
}

/// Uncached top-down recursion over the edit graph, exponential in the input size
///
/// Candidate order and tie breaking match the solver's default: delete, then
/// insert, then diagonal, keeping the first minimum.
pub fn reference_solve<T, D>(
    compare: &impl Fn(&T, &T) -> Option<D>,
    cost: &impl Fn(&D) -> Cost,
    a: &[T],
    b: &[T],
) -> (Vec<D>, Cost)
where
    T: Clone,
    D: From<Patch<T>> + Clone,
{
    let prepend = |diff: D, (mut rest, total): (Vec<D>, Cost)| {
        let total = cost(&diff) + total;
        rest.insert(0, diff);
        (rest, total)
    };

    match (a.split_first(), b.split_first()) {
        (None, None) => (Vec::new(), 0),
        (Some((x, a_rest)), None) => prepend(
            Patch::Delete(x.clone()).into(),
            reference_solve(compare, cost, a_rest, b),
        ),
        (None, Some((y, b_rest))) => prepend(
            Patch::Insert(y.clone()).into(),
            reference_solve(compare, cost, a, b_rest),
        ),
        (Some((x, a_rest)), Some((y, b_rest))) => {
            let mut best = prepend(
                Patch::Delete(x.clone()).into(),
                reference_solve(compare, cost, a_rest, b),
            );

            let insert = prepend(
                Patch::Insert(y.clone()).into(),
                reference_solve(compare, cost, a, b_rest),
            );
            if insert.1 < best.1 {
                best = insert;
            }

            if let Some(diff) = compare(x, y) {
                let diagonal = prepend(diff, reference_solve(compare, cost, a_rest, b_rest));
                if diagonal.1 < best.1 {
                    best = diagonal;
                }
            }

            best
        }
    }
}
