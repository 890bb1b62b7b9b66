//! Default values for the gosrcdir workspace root.
//!
//! The workspace root follows the Go toolchain: the `GOPATH` environment
//! variable wins when it is set to a non-empty value, otherwise `$HOME/go`.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable naming the workspace root.
pub const GOPATH_ENV: &str = "GOPATH";

/// Returns the toolchain default workspace root.
///
/// Uses `go` under the user's home directory. Falls back to `go` relative to
/// the current directory if the home directory cannot be determined.
pub fn default_workspace_root() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join("go"))
        .unwrap_or_else(|| PathBuf::from("go"))
}

/// Pick the workspace root given the value of `GOPATH`, if any.
pub fn workspace_root_from(gopath: Option<OsString>) -> PathBuf {
    match gopath {
        Some(gopath) if !gopath.is_empty() => PathBuf::from(gopath),
        _ => default_workspace_root(),
    }
}

/// Resolve the workspace root from the process environment.
pub fn workspace_root() -> PathBuf {
    workspace_root_from(env::var_os(GOPATH_ENV))
}
