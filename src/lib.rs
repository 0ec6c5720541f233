//! Klone - CLI tool for cloning repositories into a predictable local directory layout.
//!
//! This library provides the core functionality for klone, including:
//! - Repository URL classification and decomposition
//! - Domain aliasing and path-segment rewriting
//! - Destination path composition with tilde expansion
//! - Clone command resolution and execution
//!
//! # Example
//!
//! ```no_run
//! use klone_cli::config::Config;
//! use klone_cli::resolve::plan_clone;
//!
//! let config = Config::default();
//! let plan = plan_clone("https://github.com/user/repo.git", &config).unwrap();
//!
//! println!("would clone repo to {}", plan.destination.display());
//! ```

pub mod config;
pub mod error;
pub mod exec;
pub mod resolve;
pub mod url;

pub use error::{KloneError, Result};
