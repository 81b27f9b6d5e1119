//! Shortest edit script (SES) solver
//!
//! This module finds a minimum-cost edit script between two sequences of terms.
//! It generalises classic sequence edit distance in three ways:
//!
//! - Elements are terms, and matching two of them produces a recursive diff
//!   rather than a plain "equal" marker
//! - Matching can fail: the caller's comparison returns `None` for terms that
//!   cannot be diffed against each other, forcing a delete and an insert
//! - Costs are supplied by the caller and may depend on the structure of a diff
//!
//! ## Algorithm Overview
//!
//! The edit graph has one position per pair of remaining suffixes of the two
//! sequences, identified here by the pair of remaining lengths `(ra, rb)`.
//! From a position with heads `a` and `b` there are up to three moves:
//!
//! 1. Consume `a` only, prepending `Delete(a)`
//! 2. Consume `b` only, prepending `Insert(b)`
//! 3. Consume both, prepending `compare(a, b)`, when the comparison succeeds
//!
//! Each position stores the cheapest script for its subproblem as a
//! cost-annotated [`EditList`]. The head annotation of a list is its total cost,
//! so choosing between candidates is O(1), and the tails of the candidates are
//! shared rather than copied.
//!
//! ## Memoization
//!
//! Every position depends only on its remaining suffixes, so its script is
//! computed once and reused verbatim. The table is filled by increasing `ra`
//! and then increasing `rb`, which visits each position after all of its
//! successors and gives exactly the result of the top-down recurrence without
//! recursion. Only the previous row is retained; the scripts selected there keep
//! alive whatever tails they still reference.
//!
//! ## Tie Breaking
//!
//! Candidates are ranked by total cost and the first minimum in candidate order
//! wins. With [`TieBreak::PreferEdits`] (the default) the order is delete,
//! insert, diagonal: a diagonal move is taken only when strictly cheaper. With
//! [`TieBreak::PreferDiagonal`] the diagonal is evaluated first.
//!
//! ## Complexity
//!
//! `O(|a|·|b|)` positions, one caller comparison per interior position. The
//! cost function is evaluated once per element for the insert and delete
//! patches and once per successful comparison.

use crate::artifacts::core::{Cost, debug_log};
use crate::artifacts::diff::edit_list::EditList;
use crate::artifacts::diff::patch::Patch;
use derive_new::new;
use std::fmt;
use std::marker::PhantomData;
use std::time::{Duration, Instant};

/// Which candidate wins when several moves have the same total cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Delete, then insert, then diagonal
    #[default]
    PreferEdits,
    /// Diagonal, then delete, then insert
    PreferDiagonal,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, new)]
pub struct SolverOptions {
    #[new(default)]
    pub tie_break: TieBreak,
    /// Wall-clock budget for one fallible solve
    #[new(default)]
    pub deadline: Option<Duration>,
}

impl SolverOptions {
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

/// Returned (wrapped in `anyhow::Error`) when a solve runs out of time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadlineExceeded {
    pub positions_solved: usize,
    pub positions_total: usize,
}

impl fmt::Display for DeadlineExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "edit graph search exceeded its deadline after solving {} of {} positions",
            self.positions_solved, self.positions_total
        )
    }
}

impl std::error::Error for DeadlineExceeded {}

enum Step<D> {
    Delete,
    Insert,
    Diagonal(D, Cost),
}

impl<D> Step<D> {
    #[cfg_attr(not(feature = "debug_ses"), allow(dead_code))]
    fn name(&self) -> &'static str {
        match self {
            Step::Delete => "delete",
            Step::Insert => "insert",
            Step::Diagonal(..) => "diagonal",
        }
    }
}

/// Minimum-cost edit script solver over caller-supplied policies
///
/// # Type Parameters
///
/// * `CompareFn` - Returns the diff of two terms, or `None` when they cannot be
///   compared. May itself diff subtrees recursively.
/// * `CostFn` - Ranks a diff. Must be deterministic for any diff the solver can
///   produce: the insert and delete patches it builds and the diffs returned by
///   `CompareFn`.
pub struct SesSolver<T, D, CompareFn, CostFn>
where
    CompareFn: FnMut(&T, &T) -> Option<D>,
    CostFn: FnMut(&D) -> Cost,
{
    compare: CompareFn,
    cost: CostFn,
    options: SolverOptions,
    _marker: PhantomData<fn(&T) -> D>,
}

impl<T, D, CompareFn, CostFn> SesSolver<T, D, CompareFn, CostFn>
where
    CompareFn: FnMut(&T, &T) -> Option<D>,
    CostFn: FnMut(&D) -> Cost,
{
    pub fn new(compare: CompareFn, cost: CostFn) -> Self {
        Self::with_options(compare, cost, SolverOptions::default())
    }

    pub fn with_options(compare: CompareFn, cost: CostFn, options: SolverOptions) -> Self {
        Self {
            compare,
            cost,
            options,
            _marker: PhantomData,
        }
    }

    pub fn options(&self) -> &SolverOptions {
        &self.options
    }
}

impl<T, D, CompareFn, CostFn> SesSolver<T, D, CompareFn, CostFn>
where
    T: Clone,
    D: From<Patch<T>> + Clone,
    CompareFn: FnMut(&T, &T) -> Option<D>,
    CostFn: FnMut(&D) -> Cost,
{
    /// Computes the cost-minimal edit script transforming `a` into `b`
    ///
    /// Never fails. The configured deadline, if any, is ignored; use
    /// [`SesSolver::try_solve`] to honour it.
    pub fn solve(&mut self, a: &[T], b: &[T]) -> Vec<D> {
        self.solve_annotated(a, b).into_diffs()
    }

    /// Like [`SesSolver::solve`], keeping the cumulative cost annotations
    pub fn solve_annotated(&mut self, a: &[T], b: &[T]) -> EditList<D> {
        match self.search(a, b, None) {
            Ok(script) => script,
            Err(_) => unreachable!("a search without deadline cannot time out"),
        }
    }

    /// Computes the edit script within the configured deadline
    ///
    /// # Errors
    ///
    /// Fails with [`DeadlineExceeded`] when the deadline passes before every
    /// position of the edit graph is solved.
    pub fn try_solve(&mut self, a: &[T], b: &[T]) -> anyhow::Result<Vec<D>> {
        let deadline = self.options.deadline.map(|budget| Instant::now() + budget);
        let script = self.search(a, b, deadline)?;

        Ok(script.into_diffs())
    }

    pub(crate) fn search(
        &mut self,
        a: &[T],
        b: &[T],
        deadline: Option<Instant>,
    ) -> Result<EditList<D>, DeadlineExceeded> {
        let (n, m) = (a.len(), b.len());
        debug_log!("Solving edit graph of {}x{} positions", n + 1, m + 1);

        let deletions = self.annotate(a.iter().cloned().map(Patch::Delete));
        let insertions = self.annotate(b.iter().cloned().map(Patch::Insert));

        // previous[rb] is the script for (ra - 1, rb)
        let mut previous = Vec::with_capacity(m + 1);
        previous.push(EditList::empty());
        for (rb, (insertion, insertion_cost)) in insertions.iter().rev().enumerate() {
            let cell = previous[rb].prepend(insertion.clone(), *insertion_cost);
            previous.push(cell);
        }

        for ra in 1..=n {
            let a_index = n - ra;
            let (deletion, deletion_cost) = &deletions[a_index];

            let mut current: Vec<EditList<D>> = Vec::with_capacity(m + 1);
            current.push(previous[0].prepend(deletion.clone(), *deletion_cost));

            for rb in 1..=m {
                if let Some(deadline) = deadline
                    && Instant::now() >= deadline
                {
                    return Err(DeadlineExceeded {
                        positions_solved: ra * (m + 1) + rb,
                        positions_total: (n + 1) * (m + 1),
                    });
                }

                let b_index = m - rb;
                let (insertion, insertion_cost) = &insertions[b_index];

                let delete_total = deletion_cost + previous[rb].total_cost();
                let insert_total = insertion_cost + current[rb - 1].total_cost();
                let diagonal = (self.compare)(&a[a_index], &b[b_index]).map(|diff| {
                    let cost = (self.cost)(&diff);
                    let total = cost + previous[rb - 1].total_cost();
                    (diff, cost, total)
                });

                let step = self.select(delete_total, insert_total, diagonal);
                debug_log!("Position ({}, {}): selected {}", ra, rb, step.name());

                let cell = match step {
                    Step::Delete => previous[rb].prepend(deletion.clone(), *deletion_cost),
                    Step::Insert => current[rb - 1].prepend(insertion.clone(), *insertion_cost),
                    Step::Diagonal(diff, cost) => previous[rb - 1].prepend(diff, cost),
                };
                current.push(cell);
            }

            previous = current;
        }

        let script = previous.pop().unwrap_or_default();
        debug_log!(
            "Selected script of {} edits with total cost {}",
            script.len(),
            script.total_cost()
        );

        Ok(script)
    }

    fn annotate(&mut self, patches: impl Iterator<Item = Patch<T>>) -> Vec<(D, Cost)> {
        patches
            .map(D::from)
            .map(|diff| {
                let cost = (self.cost)(&diff);
                (diff, cost)
            })
            .collect()
    }

    /// Picks the first minimal candidate in tie-break order
    fn select(
        &self,
        delete_total: Cost,
        insert_total: Cost,
        diagonal: Option<(D, Cost, Cost)>,
    ) -> Step<D> {
        let (edit, edit_total) = if insert_total < delete_total {
            (Step::Insert, insert_total)
        } else {
            (Step::Delete, delete_total)
        };

        let Some((diff, cost, diagonal_total)) = diagonal else {
            return edit;
        };

        let prefer_diagonal = match self.options.tie_break {
            TieBreak::PreferEdits => diagonal_total < edit_total,
            TieBreak::PreferDiagonal => diagonal_total <= edit_total,
        };

        if prefer_diagonal {
            Step::Diagonal(diff, cost)
        } else {
            edit
        }
    }
}

/// Computes the cost-minimal edit script transforming `a` into `b`
///
/// Shorthand for `SesSolver::new(compare, cost).solve(a, b)`.
pub fn solve<T, D, CompareFn, CostFn>(compare: CompareFn, cost: CostFn, a: &[T], b: &[T]) -> Vec<D>
where
    T: Clone,
    D: From<Patch<T>> + Clone,
    CompareFn: FnMut(&T, &T) -> Option<D>,
    CostFn: FnMut(&D) -> Cost,
{
    SesSolver::new(compare, cost).solve(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Edit {
        Patch(Patch<char>),
        Copy(char),
    }

    impl From<Patch<char>> for Edit {
        fn from(patch: Patch<char>) -> Self {
            Edit::Patch(patch)
        }
    }

    fn equal_only(a: &char, b: &char) -> Option<Edit> {
        (a == b).then_some(Edit::Copy(*a))
    }

    fn unit_cost(edit: &Edit) -> Cost {
        match edit {
            Edit::Patch(_) => 1,
            Edit::Copy(_) => 0,
        }
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_solve_empty_sequences() {
        let result: Vec<Edit> = solve(equal_only, unit_cost, &[], &[]);
        assert_eq!(result, vec![]);
    }

    #[test]
    fn test_solve_prefers_copy_over_replacement() {
        let result = solve(equal_only, unit_cost, &chars("xy"), &chars("yz"));

        assert_eq!(
            result,
            vec![
                Edit::Patch(Patch::Delete('x')),
                Edit::Copy('y'),
                Edit::Patch(Patch::Insert('z')),
            ]
        );
    }

    #[test]
    fn test_solve_annotated_reports_total_cost() {
        let script = SesSolver::new(equal_only, unit_cost).solve_annotated(&chars("xy"), &chars("yz"));

        assert_eq!(script.total_cost(), 2);
        assert_eq!(
            script.iter().map(|(_, cost)| cost).collect::<Vec<_>>(),
            vec![2, 1, 1]
        );
    }

    #[rstest]
    #[case(TieBreak::PreferEdits, vec![
        Edit::Patch(Patch::Delete('a')),
        Edit::Patch(Patch::Insert('b')),
    ])]
    #[case(TieBreak::PreferDiagonal, vec![Edit::Copy('~')])]
    fn test_tie_break_on_equal_cost(#[case] tie_break: TieBreak, #[case] expected: Vec<Edit>) {
        // a replacement costing exactly as much as delete plus insert
        let compare = |_: &char, _: &char| Some(Edit::Copy('~'));
        let cost = |edit: &Edit| match edit {
            Edit::Patch(_) => 1,
            Edit::Copy(_) => 2,
        };
        let options = SolverOptions::new().with_tie_break(tie_break);

        let result = SesSolver::with_options(compare, cost, options).solve(&['a'], &['b']);

        assert_eq!(result, expected);
    }

    #[test]
    fn test_delete_wins_tie_against_insert() {
        let never = |_: &char, _: &char| None::<Edit>;
        let result = solve(never, unit_cost, &['a'], &['b']);

        assert_eq!(
            result,
            vec![
                Edit::Patch(Patch::Delete('a')),
                Edit::Patch(Patch::Insert('b')),
            ]
        );
    }

    #[test]
    fn test_try_solve_without_deadline_succeeds() {
        let mut solver = SesSolver::new(equal_only, unit_cost);
        let result = solver.try_solve(&chars("abc"), &chars("abd")).unwrap();

        assert_eq!(result.len(), 4);
    }

    #[test]
    fn test_try_solve_fails_after_deadline() {
        let options = SolverOptions::new().with_deadline(Duration::ZERO);
        let mut solver = SesSolver::with_options(equal_only, unit_cost, options);

        let error = solver.try_solve(&chars("abc"), &chars("abd")).unwrap_err();
        let exceeded = error.downcast_ref::<DeadlineExceeded>().unwrap();

        assert_eq!(exceeded.positions_total, 16);
        assert!(exceeded.positions_solved < exceeded.positions_total);
    }
}
