//! # gosrcdir Library
//!
//! This library maps a repository URL onto the directory where its source
//! belongs in a Go-style workspace, `<GOPATH>/src/<host>/<path>`. It powers
//! the `gosrcdir` command-line tool, which prints that directory so shell
//! scripts can `mkdir -p` and `git clone` into it.
//!
//! ## Quick Example
//!
//! ```
//! use std::path::{Path, PathBuf};
//! use gosrcdir::path::calculate_source_path;
//!
//! let dir = calculate_source_path(
//!     Path::new("/home/user/go"),
//!     "git@github.com:rust-lang/cargo.git",
//! )
//! .unwrap();
//! assert_eq!(dir, PathBuf::from("/home/user/go/src/github.com/rust-lang"));
//! ```
//!
//! ## Core Concepts
//!
//! - **Repository URLs (`repo_url`)**: two parsers, one for URIs with a scheme
//!   (`https://`, `ssh://`) and one for SCP-like `[user@]host:path` strings.
//!   Both yield a segment sequence: the host followed by path components.
//! - **Source paths (`path`)**: joins the workspace root, `src`, and every
//!   segment except the repository name, then cleans the result lexically.
//! - **Workspace root (`defaults`)**: `GOPATH`, or `$HOME/go` when unset.
//! - **Errors (`error`)**: one enum covering every way resolution can fail.
//!
//! Everything is a pure function of its inputs; nothing touches the
//! filesystem or the network.

pub mod defaults;
pub mod error;
pub mod logging;
pub mod path;
pub mod repo_url;

#[cfg(test)]
mod repo_url_proptest;
