//! Recursive diff of labelled terms
//!
//! A `Diff` is a tree whose leaves are patches and whose inner nodes record a
//! matched pair of terms sharing a label. The children of a matched pair are
//! themselves an edit script, typically produced by the SES solver.

use crate::artifacts::diff::patch::{EditKind, Patch};
use crate::artifacts::objects::term::Term;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Diff<L> {
    Patch(Patch<Term<L>>),
    Merge { label: L, children: Vec<Diff<L>> },
}

impl<L> From<Patch<Term<L>>> for Diff<L> {
    fn from(patch: Patch<Term<L>>) -> Self {
        Diff::Patch(patch)
    }
}

impl<L> Diff<L> {
    /// Diff of a term against an identical copy of itself
    pub fn copy(term: Term<L>) -> Self {
        Diff::Merge {
            label: term.label,
            children: term.children.into_iter().map(Diff::copy).collect(),
        }
    }

    /// Patch kinds appearing anywhere in the diff
    pub fn kinds(&self) -> EditKind {
        let mut kinds = EditKind::empty();
        let mut pending = vec![self];

        while let Some(diff) = pending.pop() {
            match diff {
                Diff::Patch(patch) => kinds |= patch.kind(),
                Diff::Merge { children, .. } => pending.extend(children.iter()),
            }
        }

        kinds
    }

    pub fn is_unchanged(&self) -> bool {
        self.kinds().is_empty()
    }

    pub fn matches_filter(&self, filter: EditKind) -> bool {
        filter.intersects(self.kinds())
    }
}

impl<L: Clone> Diff<L> {
    /// Reconstructs the old side of the diff
    pub fn before(&self) -> Option<Term<L>> {
        match self {
            Diff::Patch(patch) => patch.before().cloned(),
            Diff::Merge { label, children } => Some(Term::new(
                label.clone(),
                children.iter().filter_map(Diff::before).collect(),
            )),
        }
    }

    /// Reconstructs the new side of the diff
    pub fn after(&self) -> Option<Term<L>> {
        match self {
            Diff::Patch(patch) => patch.after().cloned(),
            Diff::Merge { label, children } => Some(Term::new(
                label.clone(),
                children.iter().filter_map(Diff::after).collect(),
            )),
        }
    }
}
