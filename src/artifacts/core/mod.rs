//! Core utilities and shared types
//!
//! This module contains the small pieces shared by the diff and coalesce modules:
//!
//! - `Cost`: the ranking key assigned to a diff by a caller-supplied cost function
//! - `debug_log!`: diagnostic logging, compiled in with the `debug_ses` feature
//!
//! ## Debug Logging
//!
//! The solver logs grid dimensions, the candidate selected at every position and
//! the final total cost. Logging is off by default; enable it with:
//!
//! ```toml
//! # In Cargo.toml
//! [features]
//! debug_ses = []
//! ```
//!
//! Then build with: `cargo build --features debug_ses`

/// Non-negative cost of a diff, as reported by the caller's cost function
pub type Cost = usize;

/// Macro for debug logging that is enabled with the debug_ses feature flag
///
/// # Usage
/// ```rust,ignore
/// debug_log!("Solving grid of {}x{}", rows, columns);
/// ```
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_ses")]
        {
            eprintln!($($arg)*);
        }
    };
}

pub(crate) use debug_log;
