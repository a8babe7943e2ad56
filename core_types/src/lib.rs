//! # Core Types
//!
//! This crate defines the fundamental identifier types shared across the
//! simulator workspace.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: Identifiers are typed and cannot be confused
//!   with bare integers or with each other.
//! - **Externally assigned where the input assigns them**: A [`TaskId`] comes
//!   from the workload file and is never generated internally.
//! - **Determinism first**: Nothing here reads clocks or randomness except
//!   [`RunId`], which only labels a finished run and never feeds back into
//!   scheduling decisions.
//!
//! ## Key Types
//!
//! - [`TaskId`]: Unique identifier for a simulated task
//! - [`RunId`]: Unique identifier for a single simulation run

pub mod ids;

pub use ids::{RunId, TaskId};
