//! Structural diff data structures and algorithms
//!
//! This module contains the core types and algorithms:
//!
//! - `coalesce`: Pairwise merging of adjacent values
//! - `core`: Shared utilities (cost type, debug logging)
//! - `diff`: Edit scripts, the SES solver and recursive term diffing
//! - `objects`: Term types

pub mod coalesce;
pub mod core;
pub mod diff;
pub mod objects;
