//! Source path derivation for gosrcdir

use std::path::{Component, Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};
use crate::repo_url::parse_repo_url;

/// Work out the directory that should contain a repository's checkout.
///
/// The result is `<workspace_root>/src/<host>/<path...>` with the final path
/// component (the repository name itself) left off, so that cloning into the
/// returned directory recreates the usual `src/host/org/repo` layout.
///
/// `.` segments are skipped and `..` removes the previous segment, but never
/// climbs out of `<workspace_root>/src`. Separators inside a segment (only a
/// loose host can carry one) split it like any other path.
pub fn calculate_source_path(workspace_root: &Path, repo: &str) -> Result<PathBuf> {
    let parts = parse_repo_url(repo)?;

    // Host plus at least the repository name
    if parts.len() < 2 {
        return Err(Error::InsufficientPathParts);
    }

    // A loose host may itself contain `/`
    let mut dirs: Vec<&str> = Vec::new();
    for segment in parts[..parts.len() - 1]
        .iter()
        .flat_map(|part| part.split('/'))
        .filter(|segment| !segment.is_empty())
    {
        match segment {
            "." => {}
            ".." => {
                dirs.pop();
            }
            segment => dirs.push(segment),
        }
    }

    let mut path = normalize_path(&workspace_root.join("src"));
    path.extend(dirs);
    debug!("{} -> {}", repo, path.display());
    Ok(path)
}

/// Lexically clean a path without touching the filesystem.
///
/// Repeated separators, trailing separators and `.` components disappear.
/// `..` removes the preceding normal component; at the root it is dropped,
/// and on a relative path with nothing left to remove it is kept.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            _ => out.push(component),
        }
    }

    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.into_iter().collect()
}
