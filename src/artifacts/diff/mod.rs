//! Structural diffing
//!
//! This module implements the minimum-cost edit script machinery:
//!
//! - `patch`: Primitive edits (insert, delete, replace) and edit-kind filters
//! - `edit_list`: Cost-annotated persistent edit lists
//! - `ses`: The shortest edit script solver over caller-supplied policies
//! - `diff_tree`: Recursive diffs of labelled terms
//! - `interpreter`: Recursive term differ built on the solver
//! - `render`: Line-oriented, coloured output of diffs
//!
//! The solver is generic over the term and diff types; `diff_tree` and
//! `interpreter` are one concrete instantiation of it.

pub mod diff_tree;
pub mod edit_list;
pub mod interpreter;
pub mod patch;
pub mod render;
pub mod ses;
