//! CLI argument parsing and the resolve-and-print loop

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use gosrcdir::defaults;
use gosrcdir::logging;
use gosrcdir::path::calculate_source_path;

/// Print the GOPATH source directory each repository URL belongs in
///
/// The workspace root is taken from the GOPATH environment variable, or
/// $HOME/go when it is unset. For every URL, the directory above the
/// repository checkout is printed, e.g. `git@github.com:org/repo.git`
/// becomes `$GOPATH/src/github.com/org`.
#[derive(Parser, Debug)]
#[command(name = "gosrcdir")]
#[command(version, about)]
pub struct Cli {
    /// Repository URLs, either `scheme://[user@]host/path` or `[user@]host:path`
    ///
    /// A URL starting with `-` must come after `--`.
    #[arg(value_name = "REPO_URL")]
    repos: Vec<String>,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(
        long,
        value_name = "LEVEL",
        default_value = logging::DEFAULT_LEVEL,
        value_parser = logging::LEVELS
    )]
    log_level: String,
}

impl Cli {
    /// Resolve and print every repository URL in order.
    ///
    /// Stops at the first URL that cannot be resolved. An empty argument list
    /// is a silent failure.
    pub fn execute(self) -> Result<ExitCode> {
        logging::init(&self.log_level);

        if self.repos.is_empty() {
            debug!("no repository URLs given");
            return Ok(ExitCode::FAILURE);
        }

        let root = defaults::workspace_root();
        debug!("workspace root: {}", root.display());

        for repo in &self.repos {
            let dir = calculate_source_path(&root, repo)
                .with_context(|| format!("Cannot parse repo URL {}", repo))?;
            println!("{}", dir.display());
        }

        Ok(ExitCode::SUCCESS)
    }
}
