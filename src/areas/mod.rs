//! Core capture components
//!
//! This module contains the stateful building blocks of a capture:
//!
//! - `repository`: Repository handle and metadata introspection
//! - `staging`: Isolated staging areas scoped to one capture operation

pub mod repository;
pub mod staging;
