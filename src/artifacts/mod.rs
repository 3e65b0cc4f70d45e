//! Value types produced and consumed by captures
//!
//! - `branch`: Anchor branch naming

pub mod branch;
