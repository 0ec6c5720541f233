//! Repository URL handling for klone.
//!
//! This module handles:
//! - Scheme classification of raw URL strings
//! - Decomposition into host and path segments

pub mod matcher;
pub mod parser;

pub use matcher::{Scheme, match_scheme};
pub use parser::RepoUrl;
