//! Structural diffing of labelled terms
//!
//! `TermDiffer` plugs a comparison policy into the SES solver and applies it
//! recursively: two terms are comparable when their labels are equal, and the
//! diff of two comparable terms is the edit script between their children.
//!
//! ```rust,ignore
//! let differ = TermDiffer::new();
//! let diff = differ.diff_terms(&old_tree, &new_tree);
//! ```

use crate::artifacts::core::Cost;
use crate::artifacts::diff::diff_tree::Diff;
use crate::artifacts::diff::patch::Patch;
use crate::artifacts::diff::ses::{DeadlineExceeded, SesSolver, SolverOptions};
use crate::artifacts::objects::term::Term;
use std::cell::Cell;
use std::fmt;
use std::time::Instant;

/// Default cost model: every inserted, deleted or replaced node costs one
///
/// Unchanged subtrees cost nothing, so the solver matches as much of the
/// structure as it can.
pub fn patch_cost<L>(diff: &Diff<L>) -> Cost {
    match diff {
        Diff::Patch(Patch::Insert(term) | Patch::Delete(term)) => term.size(),
        Diff::Patch(Patch::Replace(old, new)) => old.size() + new.size(),
        Diff::Merge { children, .. } => children.iter().map(patch_cost).sum(),
    }
}

#[derive(Clone)]
pub struct TermDiffer<L> {
    options: SolverOptions,
    cost: fn(&Diff<L>) -> Cost,
}

impl<L> fmt::Debug for TermDiffer<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TermDiffer")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<L: Clone + PartialEq> Default for TermDiffer<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Clone + PartialEq> TermDiffer<L> {
    pub fn new() -> Self {
        TermDiffer {
            options: SolverOptions::default(),
            cost: patch_cost,
        }
    }

    pub fn with_options(mut self, options: SolverOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_cost(mut self, cost: fn(&Diff<L>) -> Cost) -> Self {
        self.cost = cost;
        self
    }

    /// The comparison policy: `Some` merge diff when the labels match
    pub fn compare(&self, a: &Term<L>, b: &Term<L>) -> Option<Diff<L>> {
        self.merge(a, b, None, &Cell::new(None))
    }

    /// Diffs two terms, replacing `a` by `b` wholesale when they are not comparable
    pub fn diff_terms(&self, a: &Term<L>, b: &Term<L>) -> Diff<L> {
        self.compare(a, b)
            .unwrap_or_else(|| Patch::Replace(a.clone(), b.clone()).into())
    }

    pub fn diff_sequences(&self, a: &[Term<L>], b: &[Term<L>]) -> Vec<Diff<L>> {
        let failure = Cell::new(None);
        let compare = |x: &Term<L>, y: &Term<L>| self.merge(x, y, None, &failure);

        SesSolver::with_options(compare, self.cost, self.options.clone()).solve(a, b)
    }

    /// Like [`TermDiffer::diff_terms`], within the configured deadline
    ///
    /// The deadline covers the whole recursive diff, nested solves included.
    pub fn try_diff_terms(&self, a: &Term<L>, b: &Term<L>) -> anyhow::Result<Diff<L>> {
        let failure = Cell::new(None);
        let diff = self.merge(a, b, self.deadline(), &failure);

        if let Some(exceeded) = failure.get() {
            return Err(exceeded.into());
        }

        Ok(diff.unwrap_or_else(|| Patch::Replace(a.clone(), b.clone()).into()))
    }

    pub fn try_diff_sequences(
        &self,
        a: &[Term<L>],
        b: &[Term<L>],
    ) -> anyhow::Result<Vec<Diff<L>>> {
        let deadline = self.deadline();
        let failure = Cell::new(None);
        let compare = |x: &Term<L>, y: &Term<L>| self.merge(x, y, deadline, &failure);

        let script = SesSolver::with_options(compare, self.cost, self.options.clone())
            .search(a, b, deadline)?;

        if let Some(exceeded) = failure.get() {
            return Err(exceeded.into());
        }

        Ok(script.into_diffs())
    }

    fn deadline(&self) -> Option<Instant> {
        self.options.deadline.map(|budget| Instant::now() + budget)
    }

    fn merge(
        &self,
        a: &Term<L>,
        b: &Term<L>,
        deadline: Option<Instant>,
        failure: &Cell<Option<DeadlineExceeded>>,
    ) -> Option<Diff<L>> {
        // once a nested solve timed out, the rest of the search only unwinds
        if a.label != b.label || failure.get().is_some() {
            return None;
        }

        let compare = |x: &Term<L>, y: &Term<L>| self.merge(x, y, deadline, failure);
        let mut solver = SesSolver::with_options(compare, self.cost, self.options.clone());

        match solver.search(&a.children, &b.children, deadline) {
            Ok(script) => Some(Diff::Merge {
                label: a.label.clone(),
                children: script.into_diffs(),
            }),
            Err(exceeded) => {
                failure.set(Some(exceeded));
                None
            }
        }
    }
}
