//! Validation source strategies.
//!
//! Only the filesystem strategy exists; both pipelines read their files
//! through it.

pub mod fs;
