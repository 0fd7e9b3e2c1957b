//! Processing the files of one invocation, in order

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::cli::RunConfig;
use crate::config::FormatterConfig;
use crate::error::FormatError;
use crate::rewrite::{process_file, FileOutcome, ProcessMode};

/// Outcome of a whole run
#[derive(Debug, Default)]
pub struct RunSummary {
    pub outcomes: Vec<FileOutcome>,
    pub failures: Vec<(PathBuf, FormatError)>,
    /// Files never attempted because an earlier one failed
    pub skipped: Vec<PathBuf>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Files whose formatting differs from what is on disk
    pub fn changed(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|outcome| outcome.changed)
    }

    /// Turn the summary into the process exit status
    ///
    /// Without `keep_going` the first failure is returned with its path.
    /// With it, every failure is listed in one error. In check mode, any
    /// file that would change is an error too.
    pub fn into_result(self, run: &RunConfig) -> Result<()> {
        let changed = self.changed().count();

        if !run.keep_going {
            if let Some((path, err)) = self.failures.into_iter().next() {
                let mut message = format!("Failed to format {}", path.display());
                if !self.skipped.is_empty() {
                    message.push_str(&format!(
                        " ({} later file(s) not processed)",
                        self.skipped.len()
                    ));
                }
                return Err(err).context(message);
            }
        } else if !self.failures.is_empty() {
            let details: Vec<String> = self
                .failures
                .iter()
                .map(|(path, err)| format!("  {}: {}", path.display(), err))
                .collect();
            bail!(
                "{} of {} file(s) failed:\n{}",
                self.failures.len(),
                run.paths.len(),
                details.join("\n")
            );
        }

        if run.mode == ProcessMode::Check && changed > 0 {
            bail!("{} file(s) would be reformatted", changed);
        }

        Ok(())
    }
}

/// Process every file; without `keep_going` the first failure ends the run
pub fn run(run: &RunConfig, config: &FormatterConfig) -> RunSummary {
    let mut summary = RunSummary::default();

    for (i, path) in run.paths.iter().enumerate() {
        match process_file(path, config, run.mode) {
            Ok(outcome) => summary.outcomes.push(outcome),
            Err(e) => {
                tracing::debug!("Failed to format {}: {}", path.display(), e);
                summary.failures.push((path.clone(), e));
                if !run.keep_going {
                    summary.skipped = run.paths[i + 1..].to_vec();
                    break;
                }
            }
        }
    }

    summary
}
