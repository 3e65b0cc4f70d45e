//! Capture operations
//!
//! This module contains the operations external callers use, implemented as
//! `impl Repository` blocks:
//!
//! - `snapshot`: Side-commit capture of the current tracked-file state
//! - `queries`: Read-only commit lookups and tracked-state enforcement

pub mod queries;
pub mod snapshot;
