//! Core domain types, errors, and constants for `zigtask`.
//!
//! This crate establishes the foundational data structures and error
//! handling used by the provider and CLI crates.
//!
//! ## Key Components
//!
//! - **`errors`**: Defines the primary `Error` enum and `Result` type alias,
//!   centralizing all possible failure modes for predictable error handling.
//! - **`types`**: Domain-specific newtype wrappers such as `ProjectRoot` and
//!   `CommandArguments` to enforce invariants at the type level.
//! - **`constants`**: Shared static constants such as the task type tag and
//!   environment variable names.

pub mod constants;
pub mod errors;
pub mod types;

pub use self::{
    constants::*,
    errors::{Error, Result},
    types::*,
};
