//! Term objects
//!
//! Terms are the nodes of the structures being diffed. The solver treats them as
//! opaque values; this module ships a minimal labelled tree so that the rest of
//! the crate can be exercised end to end:
//!
//! - **Term**: a label with an ordered list of child terms

pub mod term;
