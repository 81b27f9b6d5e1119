//! Minimum-cost edit scripts between sequences of tree-structured terms
//!
//! The heart of the crate is [`SesSolver`], which, given a comparison policy
//! and a cost model, finds the cheapest sequence of insertions, deletions and
//! recursive sub-diffs transforming one sequence into another. [`coalesce`]
//! is an independent building block for merging adjacent results.

pub mod artifacts;

pub use artifacts::coalesce::{Coalesce, Coalesced, coalesce, coalesce_adjacent};
pub use artifacts::core::Cost;
pub use artifacts::diff::diff_tree::Diff;
pub use artifacts::diff::edit_list::EditList;
pub use artifacts::diff::interpreter::{TermDiffer, patch_cost};
pub use artifacts::diff::patch::{EditKind, Patch};
pub use artifacts::diff::render::DiffPrinter;
pub use artifacts::diff::ses::{DeadlineExceeded, SesSolver, SolverOptions, TieBreak, solve};
pub use artifacts::objects::term::Term;
